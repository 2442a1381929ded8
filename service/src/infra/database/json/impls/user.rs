//! [`User`]-related [`Database`] implementations.

use common::operations::{By, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{user, User},
    infra::{
        database::{self, Json},
        Database,
    },
};

impl Database<Select<By<Option<User>, user::Id>>> for Json {
    type Ok = Option<User>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<User>, user::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .read(|s| s.users.iter().find(|u| u.id == id).cloned())
            .await)
    }
}

impl<'l> Database<Select<By<Option<User>, &'l user::Email>>> for Json {
    type Ok = Option<User>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<User>, &'l user::Email>>,
    ) -> Result<Self::Ok, Self::Err> {
        let email = by.into_inner();
        Ok(self
            .read(|s| s.users.iter().find(|u| u.email == *email).cloned())
            .await)
    }
}

impl Database<Insert<User>> for Json {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(user): Insert<User>,
    ) -> Result<Self::Ok, Self::Err> {
        self.mutate(|s| s.users.push(user))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl Database<Update<User>> for Json {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(user): Update<User>,
    ) -> Result<Self::Ok, Self::Err> {
        self.mutate(|s| {
            if let Some(u) = s.users.iter_mut().find(|u| u.id == user.id) {
                *u = user;
            } else {
                s.users.push(user);
            }
        })
        .await
        .map_err(tracerr::wrap!())
    }
}
