//! [`Query`] collection related to a single [`Admin`].

use common::operations::By;

use crate::domain::{admin, Admin};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries an [`Admin`] by its [`admin::Id`].
pub type ById = DatabaseQuery<By<Option<Admin>, admin::Id>>;
