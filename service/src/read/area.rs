//! [`Area`]-related read definitions.

use derive_more::Deref;

#[cfg(doc)]
use crate::domain::Area;

/// Indicator whether an [`Area`] is referenced by any [`Lodging`] or
/// [`Vacation`].
///
/// [`Lodging`]: crate::domain::Lodging
/// [`Vacation`]: crate::domain::Vacation
#[derive(Clone, Copy, Debug, Deref, Eq, Hash, PartialEq)]
pub struct InUse(pub bool);
