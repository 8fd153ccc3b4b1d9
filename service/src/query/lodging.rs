//! [`Query`] collection related to a single [`Lodging`].

use common::operations::By;

use crate::domain::{lodging, Lodging};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`Lodging`] by its [`lodging::Id`].
pub type ById = DatabaseQuery<By<Option<Lodging>, lodging::Id>>;
