//! Background [`Task`]s definitions.

mod background;
pub mod expire_pending_bookings;

pub use common::Handler as Task;

pub use self::{
    background::Background, expire_pending_bookings::ExpirePendingBookings,
};
