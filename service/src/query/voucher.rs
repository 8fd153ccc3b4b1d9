//! [`Query`] collection related to a single [`Voucher`].

use common::operations::By;

use crate::domain::{voucher, Voucher};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`Voucher`] by its [`voucher::Id`].
pub type ById = DatabaseQuery<By<Option<Voucher>, voucher::Id>>;

/// Queries a [`Voucher`] by its [`voucher::Code`].
pub type ByCode = DatabaseQuery<By<Option<Voucher>, voucher::Code>>;
