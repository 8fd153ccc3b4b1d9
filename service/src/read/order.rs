//! [`Order`]-related read definitions.

#[cfg(doc)]
use crate::domain::Order;

pub mod list {
    //! [`Order`] list definitions.

    use common::define_pagination;

    use crate::domain::{guest, order};
    #[cfg(doc)]
    use crate::domain::Order;

    define_pagination!(Cursor, Node, Filter);

    /// Node in a [`Connection`].
    pub type Node = order::Id;

    /// Cursor pointing to a specific [`Order`] in a list.
    pub type Cursor = order::Id;

    /// Filter for [`Selector`].
    #[derive(Clone, Debug, Default)]
    pub struct Filter {
        /// [`order::Status`] of the listed [`Order`]s.
        pub status: Option<order::Status>,

        /// [`guest::Email`] the listed [`Order`]s were placed with.
        pub email: Option<guest::Email>,
    }
}
