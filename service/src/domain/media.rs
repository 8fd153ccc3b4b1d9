//! [`Media`] definitions.

use std::sync::LazyLock;

use common::{define_kind, define_text, unit, DateTimeOf};
use derive_more::{AsRef, Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{lodging, room, vacation};

/// Image or video illustrating a [`Vacation`], a [`Lodging`] or a [`Room`].
///
/// [`Lodging`]: super::Lodging
/// [`Room`]: super::Room
/// [`Vacation`]: super::Vacation
#[derive(Clone, Debug)]
pub struct Media {
    /// ID of this [`Media`].
    pub id: Id,

    /// [`Owner`] of this [`Media`].
    pub owner: Owner,

    /// [`Kind`] of this [`Media`].
    pub kind: Kind,

    /// [`Url`] this [`Media`] is served from.
    pub url: Url,

    /// [`Caption`] of this [`Media`].
    pub caption: Option<Caption>,

    /// Position of this [`Media`] among the others of the same [`Owner`].
    pub position: u16,

    /// [`DateTime`] when this [`Media`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}

/// ID of a [`Media`].
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
    #[doc = "Kind of a [`Media`]."]
    enum Kind {
        #[doc = "Image."]
        Image = 1,

        #[doc = "Video."]
        Video = 2,
    }
}

/// Entity a [`Media`] belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Owner {
    /// [`Vacation`] owning a [`Media`].
    ///
    /// [`Vacation`]: super::Vacation
    Vacation(vacation::Id),

    /// [`Lodging`] owning a [`Media`].
    ///
    /// [`Lodging`]: super::Lodging
    Lodging(lodging::Id),

    /// [`Room`] owning a [`Media`].
    ///
    /// [`Room`]: super::Room
    Room(room::Id),
}

impl Owner {
    /// Reconstructs an [`Owner`] from its [`OwnerKind`] and raw ID.
    #[must_use]
    pub fn from_parts(kind: OwnerKind, id: Uuid) -> Self {
        match kind {
            OwnerKind::Vacation => Self::Vacation(id.into()),
            OwnerKind::Lodging => Self::Lodging(id.into()),
            OwnerKind::Room => Self::Room(id.into()),
        }
    }

    /// Returns [`OwnerKind`] of this [`Owner`].
    #[must_use]
    pub const fn kind(&self) -> OwnerKind {
        match self {
            Self::Vacation(_) => OwnerKind::Vacation,
            Self::Lodging(_) => OwnerKind::Lodging,
            Self::Room(_) => OwnerKind::Room,
        }
    }

    /// Returns raw ID of this [`Owner`].
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        match *self {
            Self::Vacation(id) => id.into(),
            Self::Lodging(id) => id.into(),
            Self::Room(id) => id.into(),
        }
    }
}

define_kind! {
    #[doc = "Kind of a [`Media`] [`Owner`]."]
    enum OwnerKind {
        #[doc = "[`Owner::Vacation`]."]
        Vacation = 1,

        #[doc = "[`Owner::Lodging`]."]
        Lodging = 2,

        #[doc = "[`Owner::Room`]."]
        Room = 3,
    }
}

/// HTTP(S) URL of a [`Media`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Url(String);

impl Url {
    /// Maximum length of a [`Url`].
    pub const MAX_LEN: usize = 2048;

    /// Creates a new [`Url`] if the given `url` is valid.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Option<Self> {
        let url = url.into();
        Self::check(&url).then_some(Self(url))
    }

    /// Checks whether the given `url` is a valid [`Url`].
    fn check(url: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Url`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^https?://[^\s/?#]+[^\s]*$").expect("valid regex")
        });

        let url = url.as_ref();
        url.len() <= Self::MAX_LEN && REGEX.is_match(url)
    }
}

impl std::str::FromStr for Url {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Url`")
    }
}

define_text! {
    #[doc = "Caption of a [`Media`]."]
    struct Caption(max = 512);
}

/// [`DateTime`] when a [`Media`] was created.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(Media, unit::Creation)>;

#[cfg(test)]
mod spec {
    use super::{Owner, OwnerKind, Url};
    use crate::domain::room;

    #[test]
    fn validates_url() {
        assert!(Url::new("https://cdn.example.com/a.jpg").is_some());
        assert!(Url::new("http://example.com").is_some());
        assert!(Url::new("ftp://example.com/a.jpg").is_none());
        assert!(Url::new("https://").is_none());
        assert!(Url::new("https://example.com/a b.jpg").is_none());
    }

    #[test]
    fn splits_owner_into_parts() {
        let id = room::Id::new();
        let owner = Owner::Room(id);

        assert_eq!(owner.kind(), OwnerKind::Room);
        assert_eq!(Owner::from_parts(owner.kind(), owner.uuid()), owner);
    }
}
