//! [`SiteSettings`]-related [`Database`] implementations.

use common::operations::{By, Select, Update};
use tracerr::Traced;

use crate::{
    domain::SiteSettings,
    infra::{
        database::{self, Json},
        Database,
    },
};

impl Database<Select<By<Option<SiteSettings>, ()>>> for Json {
    type Ok = Option<SiteSettings>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(_): Select<By<Option<SiteSettings>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.read(|s| s.site_settings.clone()).await)
    }
}

impl Database<Update<SiteSettings>> for Json {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(settings): Update<SiteSettings>,
    ) -> Result<Self::Ok, Self::Err> {
        self.mutate(|s| s.site_settings = Some(settings))
            .await
            .map_err(tracerr::wrap!())
    }
}
