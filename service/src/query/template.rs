//! [`Query`] collection related to a single [`Template`].

use common::operations::By;

use crate::domain::{template, Template};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`Template`] by its [`template::Id`].
pub type ById = DatabaseQuery<By<Option<Template>, template::Id>>;
