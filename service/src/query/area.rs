//! [`Query`] collection related to a single [`Area`].

use common::operations::By;

use crate::domain::{area, Area};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`Area`] by its [`area::Id`].
pub type ById = DatabaseQuery<By<Option<Area>, area::Id>>;
