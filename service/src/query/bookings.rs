//! [`Query`] collection related to the multiple [`Booking`]s.

use common::operations::By;

use crate::{
    domain::{house, user, Booking},
    read::booking::Active,
};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries all [`Booking`]s of a [`User`], newest first.
///
/// [`User`]: crate::domain::User
pub type OfUser = DatabaseQuery<By<Vec<Booking>, user::Id>>;

/// Queries non-cancelled [`Booking`]s of a [`House`].
///
/// [`House`]: crate::domain::House
pub type OfHouse = DatabaseQuery<By<Vec<Active<Booking>>, house::Id>>;

/// Queries all [`Booking`]s of the platform, newest first.
pub type All = DatabaseQuery<By<Vec<Booking>, ()>>;
