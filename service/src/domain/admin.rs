//! [`Admin`] definitions.

use std::sync::LazyLock;

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf};
use derive_more::{AsRef, Display, From, FromStr, Into};
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::EnumString;
use uuid::Uuid;

use crate::domain::user;

/// Administrator of the platform.
#[derive(Clone, Debug, Deserialize, From, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    /// ID of this [`Admin`].
    pub id: Id,

    /// [`Username`] this [`Admin`] logs in with.
    pub username: Username,

    /// [`Email`] of this [`Admin`].
    ///
    /// [`Email`]: user::Email
    pub email: user::Email,

    /// [`PasswordHash`] of this [`Admin`].
    ///
    /// [`PasswordHash`]: user::PasswordHash
    pub password_hash: user::PasswordHash,

    /// [`Role`] of this [`Admin`].
    pub role: Role,

    /// [`DateTime`] when this [`Admin`] was created.
    pub created_at: CreationDateTime,
}

/// ID of an [`Admin`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Username of an [`Admin`].
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[as_ref(str, String)]
pub struct Username(String);

impl Username {
    /// Creates a new [`Username`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `username` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(username: impl Into<String>) -> Self {
        Self(username.into())
    }

    /// Creates a new [`Username`] if the given `username` is valid.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Option<Self> {
        let username = username.into();
        Self::check(&username).then_some(Self(username))
    }

    /// Checks whether the given `username` is a valid [`Username`].
    fn check(username: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Username`] invariants:
        /// - Must consist of letters, digits, `-`, `_` or `.`;
        /// - Must be between 3 and 64 characters long.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[\p{L}\p{N}._-]{3,64}$").expect("valid regex")
        });

        REGEX.is_match(username.as_ref())
    }
}

impl FromStr for Username {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Username`")
    }
}

/// Role of an [`Admin`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    EnumString,
    Eq,
    PartialEq,
    Serialize,
    strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Role {
    /// Regular administrator.
    Admin,

    /// Administrator allowed to manage other [`Admin`]s.
    SuperAdmin,
}

/// [`DateTime`] when an [`Admin`] was created.
pub type CreationDateTime = DateTimeOf<(Admin, unit::Creation)>;
