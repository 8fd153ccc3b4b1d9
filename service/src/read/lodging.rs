//! [`Lodging`]-related read definitions.

use derive_more::Deref;

#[cfg(doc)]
use crate::domain::Lodging;

/// Indicator whether a [`Lodging`] is offered by any [`Vacation`].
///
/// [`Vacation`]: crate::domain::Vacation
#[derive(Clone, Copy, Debug, Deref, Eq, Hash, PartialEq)]
pub struct InUse(pub bool);

pub mod list {
    //! [`Lodging`] list definitions.

    use common::define_pagination;
    use derive_more::{From, Into};

    use crate::domain::{area, lodging};
    #[cfg(doc)]
    use crate::domain::Lodging;

    define_pagination!(Cursor, Node, Filter);

    /// Node in a [`Connection`].
    pub type Node = lodging::Id;

    /// Cursor pointing to a specific [`Lodging`] in a list.
    pub type Cursor = lodging::Id;

    /// Filter for [`Selector`].
    #[derive(Clone, Debug, Default)]
    pub struct Filter {
        /// ID of the [`Area`] to list [`Lodging`]s of.
        ///
        /// [`Area`]: crate::domain::Area
        pub area_id: Option<area::Id>,

        /// [`lodging::Name`] (or its part) to fuzzy search for.
        pub name: Option<lodging::Name>,
    }

    /// Total count of [`Lodging`] list items.
    #[derive(Clone, Copy, Debug, Eq, From, Hash, Into, PartialEq)]
    pub struct TotalCount(i32);
}
