//! [`Booking`]-related read definitions.

#[cfg(doc)]
use crate::domain::Booking;

pub mod list {
    //! [`Booking`] list definitions.

    use common::define_pagination;

    use crate::domain::{booking, guest, vacation};
    #[cfg(doc)]
    use crate::domain::Booking;

    define_pagination!(Cursor, Node, Filter);

    /// Node in a [`Connection`].
    pub type Node = booking::Id;

    /// Cursor pointing to a specific [`Booking`] in a list.
    pub type Cursor = booking::Id;

    /// Filter for [`Selector`].
    #[derive(Clone, Debug, Default)]
    pub struct Filter {
        /// [`booking::Status`] of the listed [`Booking`]s.
        pub status: Option<booking::Status>,

        /// ID of the [`Vacation`] the listed [`Booking`]s were made for.
        ///
        /// [`Vacation`]: crate::domain::Vacation
        pub vacation_id: Option<vacation::Id>,

        /// [`guest::Email`] of the listed [`Booking`]s.
        pub email: Option<guest::Email>,
    }
}
