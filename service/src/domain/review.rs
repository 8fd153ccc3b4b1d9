//! [`Review`] definitions.

use common::{define_kind, define_text, unit, DateTimeOf};
use derive_more::{Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::vacation;

/// Guest's feedback about a [`Vacation`].
///
/// [`Vacation`]: super::Vacation
#[derive(Clone, Debug)]
pub struct Review {
    /// ID of this [`Review`].
    pub id: Id,

    /// ID of the reviewed [`Vacation`].
    ///
    /// [`Vacation`]: super::Vacation
    pub vacation_id: vacation::Id,

    /// [`Author`] of this [`Review`].
    pub author: Author,

    /// [`Rating`] given by this [`Review`].
    pub rating: Rating,

    /// [`Comment`] of this [`Review`].
    pub comment: Option<Comment>,

    /// Moderation [`Status`] of this [`Review`].
    pub status: Status,

    /// [`DateTime`] when this [`Review`] was submitted.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}

/// ID of a [`Review`].
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
    #[doc = "Moderation status of a [`Review`]."]
    enum Status {
        #[doc = "Awaits moderation."]
        Pending = 1,

        #[doc = "Approved and publicly visible."]
        Approved = 2,

        #[doc = "Rejected by a moderator."]
        Rejected = 3,
    }
}

define_text! {
    #[doc = "Displayed name of a [`Review`] author."]
    struct Author(max = 128);
}

define_text! {
    #[doc = "Free-form comment of a [`Review`]."]
    struct Comment(max = 4096);
}

/// Rating of a [`Review`], from 1 to 5.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Rating(u8);

impl Rating {
    /// Maximum [`Rating`] value.
    pub const MAX: u8 = 5;

    /// Creates a new [`Rating`] if the provided `value` is within `1..=5`.
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (1..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// Returns the value of this [`Rating`].
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// [`DateTime`] when a [`Review`] was submitted.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(Review, unit::Creation)>;
