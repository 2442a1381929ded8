//! [`Query`] collection related to the multiple [`Discount`]s.

use common::operations::By;

use crate::domain::{house, Discount};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries all [`Discount`]s of a [`House`], in storage order.
///
/// [`House`]: crate::domain::House
pub type OfHouse = DatabaseQuery<By<Vec<Discount>, house::Id>>;
