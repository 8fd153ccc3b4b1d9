//! [`Package`] definitions.

use common::{define_text, unit, DateTimeOf, Money};
use derive_more::{Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{room, vacation};

/// Bookable offer of a [`Vacation`]: a stay of fixed [`Nights`] in a
/// specific [`Room`] for a fixed price.
///
/// [`Room`]: super::Room
/// [`Vacation`]: super::Vacation
#[derive(Clone, Debug)]
pub struct Package {
    /// ID of this [`Package`].
    pub id: Id,

    /// ID of the [`Vacation`] this [`Package`] is offered by.
    ///
    /// [`Vacation`]: super::Vacation
    pub vacation_id: vacation::Id,

    /// ID of the [`Room`] this [`Package`] accommodates guests in.
    ///
    /// [`Room`]: super::Room
    pub room_id: room::Id,

    /// [`Name`] of this [`Package`].
    pub name: Name,

    /// Duration of a stay.
    pub nights: Nights,

    /// Total price of a stay.
    pub price: Money,

    /// Maximum number of guests a single booking may include.
    pub max_guests: room::Capacity,

    /// [`DateTime`] when this [`Package`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}

/// ID of a [`Package`].
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

define_text! {
    #[doc = "Name of a [`Package`]."]
    struct Name(max = 256);
}

/// Number of nights of a stay, at least one.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Nights(u16);

impl Nights {
    /// Maximum number of [`Nights`] in a single stay.
    pub const MAX: u16 = 365;

    /// Creates new [`Nights`] if the provided `value` is within
    /// `1..=`[`Nights::MAX`].
    #[must_use]
    pub fn new(value: u16) -> Option<Self> {
        (1..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// Returns the number of these [`Nights`].
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }
}

/// [`DateTime`] when a [`Package`] was created.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(Package, unit::Creation)>;
