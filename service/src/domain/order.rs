//! [`Order`] definitions.

use common::{define_kind, unit, DateTimeOf, Money};
use derive_more::{Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{booking, guest, voucher};

/// Purchase of one or more [`Booking`]s, optionally discounted with a
/// [`Voucher`].
///
/// [`Booking`]: super::Booking
/// [`Voucher`]: super::Voucher
#[derive(Clone, Debug)]
pub struct Order {
    /// ID of this [`Order`].
    pub id: Id,

    /// Email the [`Order`] confirmation is sent to.
    pub email: guest::Email,

    /// IDs of the [`Booking`]s this [`Order`] pays for.
    ///
    /// [`Booking`]: super::Booking
    pub bookings: Vec<booking::Id>,

    /// ID of the [`Voucher`] redeemed by this [`Order`], if any.
    ///
    /// [`Voucher`]: super::Voucher
    pub voucher_id: Option<voucher::Id>,

    /// Sum of all the [`Booking`] prices.
    ///
    /// [`Booking`]: super::Booking
    pub subtotal: Money,

    /// Discount granted by the [`Voucher`].
    ///
    /// [`Voucher`]: super::Voucher
    pub discount: Money,

    /// Amount to be paid.
    pub total: Money,

    /// [`Status`] of this [`Order`].
    pub status: Status,

    /// [`DateTime`] when this [`Order`] was placed.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`Order`] was paid.
    ///
    /// [`DateTime`]: common::DateTime
    pub paid_at: Option<PaymentDateTime>,
}

/// ID of an [`Order`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[cfg_attr(feature = "postgres", derive(ToSql, FromSql), postgres(transparent))]
pub struct Id(Uuid);

impl Id {
    /// Generates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

define_kind! {
    #[doc = "Status of an [`Order`]."]
    enum Status {
        #[doc = "Awaits payment."]
        Pending = 1,

        #[doc = "Paid."]
        Paid = 2,

        #[doc = "Cancelled."]
        Cancelled = 3,
    }
}

/// [`DateTime`] when an [`Order`] was placed.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(Order, unit::Creation)>;

/// [`DateTime`] when an [`Order`] was paid.
///
/// [`DateTime`]: common::DateTime
pub type PaymentDateTime = DateTimeOf<(Order, unit::Payment)>;
