//! [`Query`] collection related to [`Notification`]s.

use common::operations::By;

use crate::{
    domain::{notification, Notification},
    read,
};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries all [`Notification`]s of a [`Recipient`], newest first.
///
/// [`Recipient`]: notification::Recipient
pub type OfRecipient =
    DatabaseQuery<By<Vec<Notification>, notification::Recipient>>;

/// Queries the number of unread [`Notification`]s of a [`Recipient`].
///
/// [`Recipient`]: notification::Recipient
pub type UnreadCount = DatabaseQuery<
    By<read::notification::UnreadCount, notification::Recipient>,
>;
