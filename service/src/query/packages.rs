//! [`Query`] collection related to the multiple [`Package`]s.

use common::operations::By;

use crate::domain::{vacation, Package};
#[cfg(doc)]
use crate::{domain::Vacation, Query};

use super::DatabaseQuery;

/// Queries all the [`Package`]s of a [`Vacation`], the cheapest first.
pub type ByVacation = DatabaseQuery<By<Vec<Package>, vacation::Id>>;
