//! [`Template`]-related read definitions.

#[cfg(doc)]
use crate::domain::Template;

pub mod list {
    //! [`Template`] list definitions.

    use common::define_pagination;

    use crate::domain::template;
    #[cfg(doc)]
    use crate::domain::Template;

    define_pagination!(Cursor, Node, Filter);

    /// Node in a [`Connection`].
    pub type Node = template::Id;

    /// Cursor pointing to a specific [`Template`] in a list.
    pub type Cursor = template::Id;

    /// Filter for [`Selector`].
    #[derive(Clone, Copy, Debug, Default)]
    pub struct Filter {
        /// [`template::Kind`] of the listed [`Template`]s.
        pub kind: Option<template::Kind>,
    }
}
