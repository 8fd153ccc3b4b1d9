//! [`Query`] collection related to a single [`Package`].

use common::operations::By;

use crate::domain::{package, Package};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`Package`] by its [`package::Id`].
pub type ById = DatabaseQuery<By<Option<Package>, package::Id>>;
