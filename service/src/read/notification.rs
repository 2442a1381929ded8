//! [`Notification`]-related read definitions.

use derive_more::{From, Into};

#[cfg(doc)]
use crate::domain::Notification;

/// Number of unread [`Notification`]s of a recipient.
#[derive(Clone, Copy, Debug, Default, Eq, From, Hash, Into, PartialEq)]
pub struct UnreadCount(i32);
