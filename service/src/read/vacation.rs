//! [`Vacation`]-related read definitions.

use derive_more::Deref;

#[cfg(doc)]
use crate::domain::Vacation;

/// Indicator whether a [`Vacation`] has been booked at least once.
#[derive(Clone, Copy, Debug, Deref, Eq, Hash, PartialEq)]
pub struct HasBookings(pub bool);

pub mod list {
    //! [`Vacation`] list definitions.

    use common::define_pagination;
    use derive_more::{From, Into};

    use crate::domain::{area, vacation};
    #[cfg(doc)]
    use crate::domain::Vacation;

    define_pagination!(Cursor, Node, Filter);

    /// Node in a [`Connection`].
    pub type Node = vacation::Id;

    /// Cursor pointing to a specific [`Vacation`] in a list.
    pub type Cursor = vacation::Id;

    /// Filter for [`Selector`].
    #[derive(Clone, Copy, Debug, Default)]
    pub struct Filter {
        /// ID of the [`Area`] to list [`Vacation`]s in.
        ///
        /// [`Area`]: crate::domain::Area
        pub area_id: Option<area::Id>,

        /// [`vacation::Status`] of the listed [`Vacation`]s.
        pub status: Option<vacation::Status>,

        /// Indicator whether only featured [`Vacation`]s are listed.
        pub is_featured: Option<bool>,
    }

    /// Total count of [`Vacation`] list items.
    #[derive(Clone, Copy, Debug, Eq, From, Hash, Into, PartialEq)]
    pub struct TotalCount(i32);
}

pub mod search {
    //! Published [`Vacation`]s search definitions.

    use common::{define_pagination, define_text, Money};

    use crate::domain::{area, vacation, Vacation};

    define_pagination!(Cursor, Node, Filter);

    /// Node in a [`Connection`].
    pub type Node = Hit;

    /// Cursor pointing to a specific [`Vacation`] in search results.
    pub type Cursor = vacation::Id;

    define_text! {
        #[doc = "Keyword to search [`Vacation`]s by."]
        struct Keyword(max = 256);
    }

    /// Filter for [`Selector`].
    #[derive(Clone, Debug, Default)]
    pub struct Filter {
        /// [`Keyword`] to be contained in a [`Vacation`] title or summary,
        /// case-insensitively.
        pub keyword: Option<Keyword>,

        /// ID of the [`Area`] to search [`Vacation`]s in.
        ///
        /// [`Area`]: crate::domain::Area
        pub area_id: Option<area::Id>,

        /// Number of guests a [`Package`] must accommodate.
        ///
        /// [`Package`]: crate::domain::Package
        pub guests: Option<u16>,

        /// Maximum price of a [`Package`].
        ///
        /// [`Package`]: crate::domain::Package
        pub max_price: Option<Money>,
    }

    /// Single [`Vacation`] matching a search [`Filter`].
    #[derive(Clone, Debug)]
    pub struct Hit {
        /// Matched [`Vacation`].
        pub vacation: Vacation,

        /// Lowest price among the matching [`Package`]s of the [`Vacation`].
        ///
        /// [`Package`]: crate::domain::Package
        pub lowest_price: Money,
    }
}
