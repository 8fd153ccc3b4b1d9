//! [`Query`] collection related to the multiple [`Template`]s.

use common::operations::By;

use crate::read;
#[cfg(doc)]
use crate::{domain::Template, Query};

use super::DatabaseQuery;

/// Queries a list of [`Template`]s.
pub type List = DatabaseQuery<
    By<read::template::list::Page, read::template::list::Selector>,
>;
