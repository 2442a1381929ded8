//! [`Query`] collection related to a single [`House`].

use common::operations::By;

use crate::domain::{house, House};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`House`] by its [`house::Id`].
pub type ById = DatabaseQuery<By<Option<House>, house::Id>>;
