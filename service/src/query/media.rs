//! [`Query`] collection related to [`Media`].

use common::operations::By;

use crate::domain::{media, Media};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`Media`] by its [`media::Id`].
pub type ById = DatabaseQuery<By<Option<Media>, media::Id>>;

/// Queries all the [`Media`] of a [`media::Owner`], ordered by their
/// positions.
pub type ByOwner = DatabaseQuery<By<Vec<Media>, media::Owner>>;
