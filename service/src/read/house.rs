//! [`House`]-related read definitions.

#[cfg(doc)]
use crate::domain::House;

pub mod list {
    //! [`House`] list definitions.

    use common::{define_pagination, Money};
    use derive_more::{From, Into};

    use crate::domain::house;
    #[cfg(doc)]
    use crate::domain::House;

    define_pagination!(Cursor, Node, Filter);

    /// Node in a [`Connection`].
    pub type Node = house::Id;

    /// Cursor pointing to a specific [`House`] in a list.
    pub type Cursor = house::Id;

    /// Filter for [`Selector`].
    #[derive(Clone, Debug, Default)]
    pub struct Filter {
        /// [`house::Area`] to select [`House`]s from.
        pub area: Option<house::Area>,

        /// [`house::City`] to select [`House`]s from.
        pub city: Option<house::City>,

        /// Lowest acceptable price of a night.
        pub min_price: Option<Money>,

        /// Highest acceptable price of a night.
        pub max_price: Option<Money>,

        /// Indicator whether only [`House`]s open for booking are selected.
        pub only_available: bool,
    }

    /// Total count of [`House`] list items.
    #[derive(Clone, Copy, Debug, Eq, From, Hash, Into, PartialEq)]
    pub struct TotalCount(i32);
}
