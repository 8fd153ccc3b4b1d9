//! [`Query`] collection related to a single [`Review`].

use common::operations::By;

use crate::domain::{review, Review};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`Review`] by its [`review::Id`].
pub type ById = DatabaseQuery<By<Option<Review>, review::Id>>;
