//! [`Room`]-related read definitions.

use derive_more::Deref;

#[cfg(doc)]
use crate::domain::Room;

/// Indicator whether a [`Room`] is offered by any [`Package`].
///
/// [`Package`]: crate::domain::Package
#[derive(Clone, Copy, Debug, Deref, Eq, Hash, PartialEq)]
pub struct InUse(pub bool);
