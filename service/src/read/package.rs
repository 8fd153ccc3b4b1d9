//! [`Package`]-related read definitions.

use derive_more::Deref;

#[cfg(doc)]
use crate::domain::Package;

/// Indicator whether a [`Package`] has been booked at least once.
#[derive(Clone, Copy, Debug, Deref, Eq, Hash, PartialEq)]
pub struct HasBookings(pub bool);
