//! [`Query`] collection related to [`SiteSettings`].

use common::operations::By;

use crate::domain::SiteSettings;
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries the [`SiteSettings`] singleton, if it was ever written.
pub type Get = DatabaseQuery<By<Option<SiteSettings>, ()>>;
