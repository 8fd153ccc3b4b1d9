//! [`Vacation`] definitions.

use common::{define_kind, define_text, unit, DateTimeOf};
use derive_more::{Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{area, lodging, template};

/// Vacation offer: a stay in some [`Lodging`] of an [`Area`], sold as
/// [`Package`]s.
///
/// [`Area`]: super::Area
/// [`Lodging`]: super::Lodging
/// [`Package`]: super::Package
#[derive(Clone, Debug)]
pub struct Vacation {
    /// ID of this [`Vacation`].
    pub id: Id,

    /// ID of the [`Area`] this [`Vacation`] takes place in.
    ///
    /// [`Area`]: super::Area
    pub area_id: area::Id,

    /// ID of the [`Lodging`] this [`Vacation`] offers a stay in.
    ///
    /// [`Lodging`]: super::Lodging
    pub lodging_id: lodging::Id,

    /// [`Title`] of this [`Vacation`].
    pub title: Title,

    /// [`Summary`] of this [`Vacation`].
    pub summary: Option<Summary>,

    /// [`Status`] of this [`Vacation`].
    pub status: Status,

    /// Indicator whether this [`Vacation`] is promoted on the front page.
    pub is_featured: bool,

    /// [`DateTime`] when this [`Vacation`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`Vacation`] was modified last time.
    ///
    /// [`DateTime`]: common::DateTime
    pub updated_at: ModificationDateTime,
}

impl Vacation {
    /// Indicates whether this [`Vacation`] is visible to guests.
    #[must_use]
    pub fn is_published(&self) -> bool {
        self.status == Status::Published
    }
}

/// ID of a [`Vacation`].
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
    #[doc = "Status of a [`Vacation`]."]
    enum Status {
        #[doc = "Being prepared, invisible to guests."]
        Draft = 1,

        #[doc = "Visible to guests and bookable."]
        Published = 2,

        #[doc = "Not offered anymore."]
        Archived = 3,
    }
}

define_text! {
    #[doc = "Title of a [`Vacation`]."]
    struct Title(max = 256);
}

define_text! {
    #[doc = "Short summary of a [`Vacation`]."]
    struct Summary(max = 4096);
}

/// Link between a [`Vacation`] and a [`Template`] attached to it.
///
/// [`Template`]: super::Template
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TemplateLink {
    /// ID of the [`Vacation`].
    pub vacation_id: Id,

    /// ID of the attached [`Template`].
    ///
    /// [`Template`]: super::Template
    pub template_id: template::Id,
}

/// [`DateTime`] when a [`Vacation`] was created.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(Vacation, unit::Creation)>;

/// [`DateTime`] when a [`Vacation`] was modified.
///
/// [`DateTime`]: common::DateTime
pub type ModificationDateTime = DateTimeOf<(Vacation, unit::Modification)>;
