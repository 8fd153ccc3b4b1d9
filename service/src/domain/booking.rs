//! [`Booking`] definitions.

use common::{define_kind, unit, DateTime, DateTimeOf, Money};
use derive_more::{Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{guest::Guest, order, package, vacation};

/// Reservation of a [`Package`] for a [`Guest`].
///
/// [`Package`]: super::Package
#[derive(Clone, Debug)]
pub struct Booking {
    /// ID of this [`Booking`].
    pub id: Id,

    /// ID of the booked [`Vacation`].
    ///
    /// [`Vacation`]: super::Vacation
    pub vacation_id: vacation::Id,

    /// ID of the booked [`Package`].
    ///
    /// [`Package`]: super::Package
    pub package_id: package::Id,

    /// [`Guest`] this [`Booking`] is made for.
    pub guest: Guest,

    /// Number of adults staying.
    pub adults: u16,

    /// Number of children staying.
    pub children: u16,

    /// [`DateTime`] of the arrival.
    pub check_in: CheckInDateTime,

    /// Duration of the stay, copied from the [`Package`].
    ///
    /// [`Package`]: super::Package
    pub nights: package::Nights,

    /// Price of the stay, copied from the [`Package`].
    ///
    /// [`Package`]: super::Package
    pub price: Money,

    /// [`Status`] of this [`Booking`].
    pub status: Status,

    /// ID of the [`Order`] this [`Booking`] is paid within, if any.
    ///
    /// [`Order`]: super::Order
    pub order_id: Option<order::Id>,

    /// [`DateTime`] when this [`Booking`] was created.
    pub created_at: CreationDateTime,
}

impl Booking {
    /// Returns the total number of guests staying.
    #[must_use]
    pub fn guests(&self) -> u16 {
        self.adults.saturating_add(self.children)
    }

    /// Returns [`DateTime`] of the departure.
    #[must_use]
    pub fn check_out(&self) -> DateTime {
        self.check_in.add_days(self.nights.get()).coerce()
    }
}

/// ID of a [`Booking`].
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
    #[doc = "Status of a [`Booking`]."]
    enum Status {
        #[doc = "Awaits confirmation."]
        Pending = 1,

        #[doc = "Confirmed."]
        Confirmed = 2,

        #[doc = "Cancelled or expired."]
        Cancelled = 3,
    }
}

/// [`DateTime`] of a [`Booking`] arrival.
pub type CheckInDateTime = DateTimeOf<(Booking, unit::CheckIn)>;

/// [`DateTime`] when a [`Booking`] was created.
pub type CreationDateTime = DateTimeOf<(Booking, unit::Creation)>;
