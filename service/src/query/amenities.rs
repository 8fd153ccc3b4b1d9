//! [`Query`] collection related to the multiple [`Amenity`]s.

use common::operations::By;

use crate::domain::Amenity;
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries all the [`Amenity`]s, ordered by their names.
pub type All = DatabaseQuery<By<Vec<Amenity>, ()>>;
