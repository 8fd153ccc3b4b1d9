//! Domain definitions.

pub mod amenity;
pub mod area;
pub mod booking;
pub mod guest;
pub mod lodging;
pub mod media;
pub mod order;
pub mod package;
pub mod review;
pub mod room;
pub mod template;
pub mod vacation;
pub mod voucher;

pub use self::{
    amenity::Amenity, area::Area, booking::Booking, guest::Guest,
    lodging::Lodging, media::Media, order::Order, package::Package,
    review::Review, room::Room, template::Template, vacation::Vacation,
    voucher::Voucher,
};
