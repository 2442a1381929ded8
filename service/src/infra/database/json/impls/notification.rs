//! [`Notification`]-related [`Database`] implementations.

use common::operations::{By, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{notification, Notification},
    infra::{
        database::{self, Json},
        Database,
    },
    read,
};

impl Database<Select<By<Option<Notification>, notification::Id>>> for Json {
    type Ok = Option<Notification>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Notification>, notification::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .read(|s| s.notifications.iter().find(|n| n.id == id).cloned())
            .await)
    }
}

impl Database<Select<By<Vec<Notification>, notification::Recipient>>>
    for Json
{
    type Ok = Vec<Notification>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Notification>, notification::Recipient>>,
    ) -> Result<Self::Ok, Self::Err> {
        let recipient = by.into_inner();
        let mut notifications = self
            .read(|s| {
                s.notifications
                    .iter()
                    .filter(|n| n.recipient == recipient)
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .await;
        notifications.sort_by_key(|n| std::cmp::Reverse(n.created_at));
        Ok(notifications)
    }
}

impl
    Database<
        Select<
            By<read::notification::UnreadCount, notification::Recipient>,
        >,
    > for Json
{
    type Ok = read::notification::UnreadCount;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<read::notification::UnreadCount, notification::Recipient>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let recipient = by.into_inner();
        let count = self
            .read(|s| {
                s.notifications
                    .iter()
                    .filter(|n| n.recipient == recipient && !n.is_read)
                    .count()
            })
            .await;
        Ok(i32::try_from(count).unwrap_or(i32::MAX).into())
    }
}

impl Database<Insert<Notification>> for Json {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(notification): Insert<Notification>,
    ) -> Result<Self::Ok, Self::Err> {
        self.mutate(|s| s.notifications.push(notification))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl Database<Update<Notification>> for Json {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(notification): Update<Notification>,
    ) -> Result<Self::Ok, Self::Err> {
        self.mutate(|s| {
            if let Some(n) =
                s.notifications.iter_mut().find(|n| n.id == notification.id)
            {
                *n = notification;
            } else {
                s.notifications.push(notification);
            }
        })
        .await
        .map_err(tracerr::wrap!())
    }
}
