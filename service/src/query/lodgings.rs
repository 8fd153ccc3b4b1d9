//! [`Query`] collection related to the multiple [`Lodging`]s.

use common::operations::By;

use crate::read;
#[cfg(doc)]
use crate::{domain::Lodging, Query};

use super::DatabaseQuery;

/// Queries a list of [`Lodging`]s.
pub type List =
    DatabaseQuery<By<read::lodging::list::Page, read::lodging::list::Selector>>;

/// Queries total count of [`Lodging`] list items.
pub type TotalCount = DatabaseQuery<
    By<read::lodging::list::TotalCount, read::lodging::list::Filter>,
>;
