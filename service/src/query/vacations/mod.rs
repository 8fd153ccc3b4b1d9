//! [`Query`] collection related to the multiple [`Vacation`]s.

pub mod search;

use common::operations::By;

use crate::read;
#[cfg(doc)]
use crate::{domain::Vacation, Query};

use super::DatabaseQuery;

pub use self::search::Search;

/// Queries a list of [`Vacation`]s.
pub type List = DatabaseQuery<
    By<read::vacation::list::Page, read::vacation::list::Selector>,
>;

/// Queries total count of [`Vacation`] list items.
pub type TotalCount = DatabaseQuery<
    By<read::vacation::list::TotalCount, read::vacation::list::Filter>,
>;
