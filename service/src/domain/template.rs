//! [`Template`] definitions.

use common::{define_kind, define_text, unit, DateTimeOf};
use derive_more::{Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reusable content attached to [`Vacation`]s: a title, a description or
/// terms and conditions.
///
/// [`Vacation`]: super::Vacation
#[derive(Clone, Debug)]
pub struct Template {
    /// ID of this [`Template`].
    pub id: Id,

    /// [`Kind`] of this [`Template`].
    pub kind: Kind,

    /// [`Name`] of this [`Template`], for internal use.
    pub name: Name,

    /// [`Content`] of this [`Template`].
    pub content: Content,

    /// [`DateTime`] when this [`Template`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}

/// ID of a [`Template`].
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
    #[doc = "Kind of a [`Template`]."]
    enum Kind {
        #[doc = "Title."]
        Title = 1,

        #[doc = "Description."]
        Description = 2,

        #[doc = "Terms and conditions."]
        Term = 3,
    }
}

impl Kind {
    /// Indicates whether a [`Vacation`] may have at most one [`Template`] of
    /// this [`Kind`] attached.
    ///
    /// [`Vacation`]: super::Vacation
    #[must_use]
    pub const fn is_exclusive(self) -> bool {
        match self {
            Self::Title | Self::Description => true,
            Self::Term => false,
        }
    }
}

define_text! {
    #[doc = "Name of a [`Template`]."]
    struct Name(max = 128);
}

define_text! {
    #[doc = "Content of a [`Template`]."]
    struct Content(max = 16384);
}

/// [`DateTime`] when a [`Template`] was created.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(Template, unit::Creation)>;
