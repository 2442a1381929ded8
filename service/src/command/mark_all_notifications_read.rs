//! [`Command`] for marking all [`Notification`]s of a [`Recipient`] as read.

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::notification::Recipient;
use crate::{
    domain::{notification, Notification},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for marking all [`Notification`]s of a [`Recipient`] as read.
#[derive(Clone, Copy, Debug, From)]
pub struct MarkAllNotificationsRead {
    /// [`Recipient`] whose [`Notification`]s are marked.
    pub recipient: notification::Recipient,
}

impl<Db> Command<MarkAllNotificationsRead> for Service<Db>
where
    Db: Database<
            Select<By<Vec<Notification>, notification::Recipient>>,
            Ok = Vec<Notification>,
            Err = Traced<database::Error>,
        > + Database<
            Update<Notification>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    /// Number of [`Notification`]s marked as read.
    type Ok = usize;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: MarkAllNotificationsRead,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let MarkAllNotificationsRead { recipient } = cmd;

        let notifications = self
            .database()
            .execute(Select(By::<Vec<Notification>, _>::new(recipient)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut marked = 0;
        for mut notification in notifications {
            if notification.is_read {
                continue;
            }
            notification.is_read = true;
            self.database()
                .execute(Update(notification))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?;
            marked += 1;
        }

        Ok(marked)
    }
}

/// Error of [`MarkAllNotificationsRead`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),
}
