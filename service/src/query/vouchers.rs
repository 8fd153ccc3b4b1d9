//! [`Query`] collection related to the multiple [`Voucher`]s.

use common::operations::By;

use crate::domain::Voucher;
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries all the [`Voucher`]s, the most recent first.
pub type All = DatabaseQuery<By<Vec<Voucher>, ()>>;
