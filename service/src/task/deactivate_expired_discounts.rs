//! [`DeactivateExpiredDiscounts`] [`Task`].

use std::{convert::Infallible, error::Error, time};

use common::operations::{By, Perform, Start, Update};
use tokio::time::interval;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{discount, Discount},
    infra::{database, Database},
    Service,
};

use super::Task;

/// Configuration for [`DeactivateExpiredDiscounts`] [`Task`].
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Interval between [`Discount`] expiration sweeps.
    pub interval: time::Duration,
}

/// [`Task`] deactivating [`Discount`]s whose period has ended.
#[derive(Clone, Copy, Debug)]
pub struct DeactivateExpiredDiscounts<S> {
    /// [`Config`] of this [`Task`].
    config: Config,

    /// [`Service`] instance.
    service: S,
}

impl<Db> Task<Start<By<DeactivateExpiredDiscounts<Self>, Config>>>
    for Service<Db>
where
    DeactivateExpiredDiscounts<Service<Db>>:
        Task<Perform<()>, Ok = usize, Err: Error> + Send + Sync + 'static,
    Self: Clone,
{
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        Start(by): Start<By<DeactivateExpiredDiscounts<Self>, Config>>,
    ) -> Result<Self::Ok, Self::Err> {
        let config = by.into_inner();
        let task = DeactivateExpiredDiscounts {
            config,
            service: self.clone(),
        };

        let mut interval = interval(task.config.interval);
        loop {
            let _ = interval.tick().await;
            _ = task
                .execute(Perform(()))
                .await
                .map(|deactivated| {
                    if deactivated > 0 {
                        log::info!(
                            "`task::DeactivateExpiredDiscounts` deactivated \
                             {deactivated} discount(s)",
                        );
                    }
                })
                .map_err(|e| {
                    log::error!(
                        "`task::DeactivateExpiredDiscounts` failed: {e}",
                    );
                });
        }
    }
}

impl<Db> Task<Perform<()>> for DeactivateExpiredDiscounts<Service<Db>>
where
    Db: Database<
        Update<By<Discount, discount::PeriodDate>>,
        Ok = usize,
        Err = Traced<database::Error>,
    >,
{
    type Ok = usize;
    type Err = ExecutionError;

    async fn execute(&self, _: Perform<()>) -> Result<Self::Ok, Self::Err> {
        let today = discount::PeriodDate::today();
        self.service
            .database()
            .execute(Update(By::new(today)))
            .await
            .map_err(tracerr::map_from_and_wrap!())
    }
}

/// Error of [`DeactivateExpiredDiscounts`] execution.
pub type ExecutionError = Traced<database::Error>;
