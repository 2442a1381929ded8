//! [`Admin`]-related [`Database`] implementations.

use common::operations::{By, Insert, Select};
use tracerr::Traced;

use crate::{
    domain::{admin, Admin},
    infra::{
        database::{self, Json},
        Database,
    },
};

impl Database<Select<By<Option<Admin>, admin::Id>>> for Json {
    type Ok = Option<Admin>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Admin>, admin::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .read(|s| s.admins.iter().find(|a| a.id == id).cloned())
            .await)
    }
}

impl<'l> Database<Select<By<Option<Admin>, &'l admin::Username>>> for Json {
    type Ok = Option<Admin>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Admin>, &'l admin::Username>>,
    ) -> Result<Self::Ok, Self::Err> {
        let username = by.into_inner();
        Ok(self
            .read(|s| {
                s.admins.iter().find(|a| a.username == *username).cloned()
            })
            .await)
    }
}

impl Database<Select<By<Vec<Admin>, ()>>> for Json {
    type Ok = Vec<Admin>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(_): Select<By<Vec<Admin>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.read(|s| s.admins.clone()).await)
    }
}

impl Database<Insert<Admin>> for Json {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(admin): Insert<Admin>,
    ) -> Result<Self::Ok, Self::Err> {
        self.mutate(|s| s.admins.push(admin))
            .await
            .map_err(tracerr::wrap!())
    }
}
