//! GraphQL API definitions.

pub mod amenity;
pub mod area;
pub mod booking;
pub mod lodging;
pub mod media;
mod mutation;
pub mod order;
pub mod package;
mod query;
pub mod review;
pub mod room;
pub mod scalar;
pub mod template;
pub mod vacation;
pub mod voucher;

use juniper::EmptySubscription;

use crate::{define_error, Context};

pub use self::{
    amenity::Amenity, area::Area, booking::Booking, lodging::Lodging,
    media::Media, mutation::Mutation, order::Order, package::Package,
    query::Query, review::Review, room::Room, template::Template,
    vacation::Vacation, voucher::Voucher,
};

/// GraphQL schema.
pub type Schema =
    juniper::RootNode<'static, Query, Mutation, EmptySubscription<Context>>;

define_error! {
    enum PaginationError {
        #[code = "AMBIGUOUS_PAGINATION_ARGUMENTS"]
        #[status = BAD_REQUEST]
        #[message = "Ambiguous pagination arguments"]
        Ambiguous,
    }
}

define_error! {
    enum InputError {
        #[code = "INVALID_STARS"]
        #[status = BAD_REQUEST]
        #[message = "`LodgingStars` must be within 1..=5 range"]
        Stars,

        #[code = "INVALID_RATING"]
        #[status = BAD_REQUEST]
        #[message = "`ReviewRating` must be within 1..=5 range"]
        Rating,

        #[code = "INVALID_CAPACITY"]
        #[status = BAD_REQUEST]
        #[message = "`RoomCapacity` must be within 1..=100 range"]
        Capacity,

        #[code = "INVALID_NIGHTS"]
        #[status = BAD_REQUEST]
        #[message = "`PackageNights` must be within 1..=365 range"]
        Nights,

        #[code = "INVALID_NUMBER"]
        #[status = BAD_REQUEST]
        #[message = "Provided number is out of the allowed range"]
        Number,
    }
}
