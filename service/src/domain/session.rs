//! [`Session`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf};
use derive_more::{AsRef, Display, FromStr};
use serde::{Deserialize, Serialize};

use crate::domain::{admin, user};
#[cfg(doc)]
use crate::domain::{Admin, User};

/// Authenticated session of a [`User`] or an [`Admin`].
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct Session {
    /// [`Principal`] this [`Session`] belongs to.
    #[serde(flatten)]
    pub principal: Principal,

    /// [`DateTime`] when this [`Session`] expires.
    #[serde(rename = "exp", with = "common::datetime::serde::unix_timestamp")]
    pub expires_at: ExpirationDateTime,
}

/// Party a [`Session`] is issued to.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase", tag = "role", content = "sub")]
pub enum Principal {
    /// [`Session`] of a [`User`].
    User(user::Id),

    /// [`Session`] of an [`Admin`].
    Admin(admin::Id),
}

impl Principal {
    /// Returns the [`User`] ID of this [`Principal`], if it is one.
    #[must_use]
    pub fn user_id(&self) -> Option<user::Id> {
        if let Self::User(id) = self {
            Some(*id)
        } else {
            None
        }
    }

    /// Returns the [`Admin`] ID of this [`Principal`], if it is one.
    #[must_use]
    pub fn admin_id(&self) -> Option<admin::Id> {
        if let Self::Admin(id) = self {
            Some(*id)
        } else {
            None
        }
    }
}

/// Access token of a [`Session`].
#[derive(AsRef, Clone, Debug, Display, FromStr)]
pub struct Token(String);

impl Token {
    /// Creates a new [`Token`] without checking its contents.
    ///
    /// # Safety
    ///
    /// The provided `token` must be a valid [`Token`] representation.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub const unsafe fn new_unchecked(token: String) -> Self {
        Self(token)
    }
}

/// [`DateTime`] of a [`Session`] expiration.
pub type ExpirationDateTime = DateTimeOf<(Session, unit::Expiration)>;
