//! [`Query`] collection related to the multiple [`Review`]s.

use common::operations::By;

use crate::domain::{house, user, Review};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries all [`Review`]s of a [`House`], newest first.
///
/// [`House`]: crate::domain::House
pub type OfHouse = DatabaseQuery<By<Vec<Review>, house::Id>>;

/// Queries all [`Review`]s left by a [`User`], newest first.
///
/// [`User`]: crate::domain::User
pub type OfUser = DatabaseQuery<By<Vec<Review>, user::Id>>;
