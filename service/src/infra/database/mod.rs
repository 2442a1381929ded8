//! [`Database`]-related implementations.

#[cfg(feature = "json")]
pub mod json;

use derive_more::{Display, Error as StdError, From};

#[cfg(feature = "json")]
pub use self::json::Json;

/// Database operation.
pub use common::Handler as Database;

/// [`Database`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    #[cfg(feature = "json")]
    /// [`Json`] store error.
    Json(json::Error),
}
