//! [`Room`] definitions.

use common::{define_text, unit, DateTimeOf, Money};
use derive_more::{Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{amenity, lodging};

/// Room of a [`Lodging`] guests stay in.
///
/// [`Lodging`]: super::Lodging
#[derive(Clone, Debug)]
pub struct Room {
    /// ID of this [`Room`].
    pub id: Id,

    /// ID of the [`Lodging`] this [`Room`] belongs to.
    ///
    /// [`Lodging`]: super::Lodging
    pub lodging_id: lodging::Id,

    /// [`Name`] of this [`Room`].
    pub name: Name,

    /// Maximum number of guests this [`Room`] accommodates.
    pub capacity: Capacity,

    /// Price of a single night in this [`Room`].
    pub price_per_night: Money,

    /// IDs of the [`Amenity`]s this [`Room`] is equipped with.
    ///
    /// [`Amenity`]: super::Amenity
    pub amenities: Vec<amenity::Id>,

    /// [`DateTime`] when this [`Room`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}

impl Room {
    /// Indicates whether this [`Room`] accommodates the provided number of
    /// `guests`.
    #[must_use]
    pub fn fits(&self, guests: u16) -> bool {
        guests <= self.capacity.get()
    }
}

/// ID of a [`Room`].
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
    #[doc = "Name of a [`Room`]."]
    struct Name(max = 128);
}

/// Number of guests, at least one.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Capacity(u16);

impl Capacity {
    /// Maximum [`Capacity`] value.
    pub const MAX: u16 = 100;

    /// Creates a new [`Capacity`] if the provided `value` is within
    /// `1..=`[`Capacity::MAX`].
    #[must_use]
    pub fn new(value: u16) -> Option<Self> {
        (1..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// Returns the number of guests of this [`Capacity`].
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }
}

/// [`DateTime`] when a [`Room`] was created.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(Room, unit::Creation)>;
