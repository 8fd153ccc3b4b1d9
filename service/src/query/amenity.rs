//! [`Query`] collection related to a single [`Amenity`].

use common::operations::By;

use crate::domain::{amenity, Amenity};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`Amenity`] by its [`amenity::Id`].
pub type ById = DatabaseQuery<By<Option<Amenity>, amenity::Id>>;
