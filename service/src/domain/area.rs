//! [`Area`] definitions.

use common::{define_text, unit, DateTimeOf};
use derive_more::{Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Geographical area (a city, an island, a region) [`Lodging`]s and
/// [`Vacation`]s are located in.
///
/// [`Lodging`]: super::Lodging
/// [`Vacation`]: super::Vacation
#[derive(Clone, Debug)]
pub struct Area {
    /// ID of this [`Area`].
    pub id: Id,

    /// [`Name`] of this [`Area`].
    pub name: Name,

    /// [`Country`] this [`Area`] belongs to.
    pub country: Country,

    /// [`Description`] of this [`Area`].
    pub description: Option<Description>,

    /// [`DateTime`] when this [`Area`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}

/// ID of an [`Area`].
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
    #[doc = "Name of an [`Area`]."]
    struct Name(max = 128);
}

define_text! {
    #[doc = "Country of an [`Area`]."]
    struct Country(max = 128);
}

define_text! {
    #[doc = "Description of an [`Area`]."]
    struct Description(max = 4096);
}

/// [`DateTime`] when an [`Area`] was created.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(Area, unit::Creation)>;
