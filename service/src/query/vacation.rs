//! [`Query`] collection related to a single [`Vacation`].

use common::operations::By;

use crate::domain::{vacation, Template, Vacation};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`Vacation`] by its [`vacation::Id`].
pub type ById = DatabaseQuery<By<Option<Vacation>, vacation::Id>>;

/// Queries all the [`Template`]s attached to a [`Vacation`].
pub type Templates = DatabaseQuery<By<Vec<Template>, vacation::Id>>;
