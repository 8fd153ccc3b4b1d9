//! [`Lodging`] definitions.

use common::{define_kind, define_text, unit, DateTimeOf};
use derive_more::{Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::area;

/// Accommodation (a hotel, a resort, a villa, etc.) located in an [`Area`].
///
/// [`Area`]: super::Area
#[derive(Clone, Debug)]
pub struct Lodging {
    /// ID of this [`Lodging`].
    pub id: Id,

    /// ID of the [`Area`] this [`Lodging`] is located in.
    ///
    /// [`Area`]: super::Area
    pub area_id: area::Id,

    /// [`Name`] of this [`Lodging`].
    pub name: Name,

    /// [`Kind`] of this [`Lodging`].
    pub kind: Kind,

    /// [`Address`] of this [`Lodging`].
    pub address: Address,

    /// [`Description`] of this [`Lodging`].
    pub description: Option<Description>,

    /// [`Stars`] rating of this [`Lodging`], if it's classified.
    pub stars: Option<Stars>,

    /// [`DateTime`] when this [`Lodging`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}

/// ID of a [`Lodging`].
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
    #[doc = "Kind of a [`Lodging`]."]
    enum Kind {
        #[doc = "Hotel."]
        Hotel = 1,

        #[doc = "Resort."]
        Resort = 2,

        #[doc = "Apartment."]
        Apartment = 3,

        #[doc = "Villa."]
        Villa = 4,

        #[doc = "Hostel."]
        Hostel = 5,
    }
}

define_text! {
    #[doc = "Name of a [`Lodging`]."]
    struct Name(max = 256);
}

define_text! {
    #[doc = "Postal address of a [`Lodging`]."]
    struct Address(max = 512);
}

define_text! {
    #[doc = "Description of a [`Lodging`]."]
    struct Description(max = 8192);
}

/// Classification of a [`Lodging`] in stars, from 1 to 5.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Stars(u8);

impl Stars {
    /// Maximum number of [`Stars`].
    pub const MAX: u8 = 5;

    /// Creates new [`Stars`] if the provided `value` is within `1..=5`.
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (1..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// Returns the number of these [`Stars`].
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// [`DateTime`] when a [`Lodging`] was created.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(Lodging, unit::Creation)>;

#[cfg(test)]
mod spec {
    use super::{Kind, Stars};

    #[test]
    fn validates_stars() {
        assert!(Stars::new(0).is_none());
        assert_eq!(Stars::new(1).map(Stars::get), Some(1));
        assert_eq!(Stars::new(5).map(Stars::get), Some(5));
        assert!(Stars::new(6).is_none());
    }

    #[test]
    fn parses_kind() {
        assert_eq!("VILLA".parse::<Kind>(), Ok(Kind::Villa));
        assert_eq!(Kind::from_u8(2), Some(Kind::Resort));
        assert_eq!(Kind::from_u8(9), None);
    }
}
