//! JSON bucket store [`Database`] implementation.

mod impls;

use std::{io, path::PathBuf, sync::Arc};

use derive_more::{Display, Error as StdError, From};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracerr::Traced;

use crate::{
    domain::{
        Admin, Booking, Discount, House, Notification, Review, SiteSettings,
        User,
    },
    infra::database,
};
#[cfg(doc)]
use crate::infra::Database;

/// JSON bucket store [`Database`].
///
/// Entities live in named in-memory buckets behind a single lock. When a
/// backing file is configured, the whole document is reloaded from it on
/// startup and rewritten after every mutation.
#[derive(Clone, Debug)]
pub struct Json {
    /// Buckets of this store.
    state: Arc<RwLock<State>>,

    /// File the buckets are persisted to, if any.
    file: Option<PathBuf>,
}

impl Json {
    /// Creates a new [`Json`] store, loading the buckets from the provided
    /// `file` if it exists.
    ///
    /// # Errors
    ///
    /// If the `file` exists but cannot be read or parsed.
    pub async fn new(
        file: Option<PathBuf>,
    ) -> Result<Self, Traced<database::Error>> {
        let state = match &file {
            Some(path) if path.exists() => {
                let raw = tokio::fs::read(path)
                    .await
                    .map_err(tracerr::from_and_wrap!(=> Error))
                    .map_err(tracerr::map_from)?;
                serde_json::from_slice(&raw)
                    .map_err(tracerr::from_and_wrap!(=> Error))
                    .map_err(tracerr::map_from)?
            }
            Some(_) | None => State::default(),
        };

        Ok(Self {
            state: Arc::new(RwLock::new(state)),
            file,
        })
    }

    /// Runs the provided function over an immutable view of the buckets.
    async fn read<R>(&self, f: impl FnOnce(&State) -> R) -> R {
        f(&*self.state.read().await)
    }

    /// Runs the provided function over the mutable buckets, then rewrites
    /// the backing file (if any).
    async fn mutate<R>(
        &self,
        f: impl FnOnce(&mut State) -> R,
    ) -> Result<R, Traced<database::Error>> {
        let mut state = self.state.write().await;
        let out = f(&mut state);

        if let Some(path) = &self.file {
            let raw = serde_json::to_vec_pretty(&*state)
                .map_err(tracerr::from_and_wrap!(=> Error))
                .map_err(tracerr::map_from)?;
            tokio::fs::write(path, raw)
                .await
                .map_err(tracerr::from_and_wrap!(=> Error))
                .map_err(tracerr::map_from)?;
        }

        Ok(out)
    }
}

/// Buckets of a [`Json`] store.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
struct State {
    /// [`House`] bucket.
    houses: Vec<House>,

    /// [`Booking`] bucket.
    bookings: Vec<Booking>,

    /// [`Discount`] bucket.
    discounts: Vec<Discount>,

    /// [`Review`] bucket.
    reviews: Vec<Review>,

    /// [`Notification`] bucket.
    notifications: Vec<Notification>,

    /// [`User`] bucket.
    users: Vec<User>,

    /// [`Admin`] bucket.
    admins: Vec<Admin>,

    /// [`SiteSettings`] singleton bucket.
    site_settings: Option<SiteSettings>,
}

/// JSON store [`Error`].
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Failed to read or write the backing file.
    #[display("Failed to access the backing file: {_0}")]
    Io(io::Error),

    /// Failed to serialize or parse the buckets document.
    #[display("Failed to (de)serialize the buckets document: {_0}")]
    Serde(serde_json::Error),
}
