//! [`Discount`]-related [`Database`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{discount, house, Discount},
    infra::{
        database::{self, Json},
        Database,
    },
};

impl Database<Select<By<Option<Discount>, discount::Id>>> for Json {
    type Ok = Option<Discount>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Discount>, discount::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .read(|s| s.discounts.iter().find(|d| d.id == id).cloned())
            .await)
    }
}

impl Database<Select<By<Vec<Discount>, house::Id>>> for Json {
    type Ok = Vec<Discount>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Discount>, house::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let house_id = by.into_inner();
        // Storage order is preserved deliberately: discount lookup takes the
        // first match.
        Ok(self
            .read(|s| {
                s.discounts
                    .iter()
                    .filter(|d| d.house_id == house_id)
                    .cloned()
                    .collect()
            })
            .await)
    }
}

impl Database<Insert<Discount>> for Json {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(discount): Insert<Discount>,
    ) -> Result<Self::Ok, Self::Err> {
        self.mutate(|s| s.discounts.push(discount))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl Database<Update<Discount>> for Json {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(discount): Update<Discount>,
    ) -> Result<Self::Ok, Self::Err> {
        self.mutate(|s| {
            if let Some(d) =
                s.discounts.iter_mut().find(|d| d.id == discount.id)
            {
                *d = discount;
            } else {
                s.discounts.push(discount);
            }
        })
        .await
        .map_err(tracerr::wrap!())
    }
}

impl Database<Delete<By<Discount, discount::Id>>> for Json {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Discount, discount::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        self.mutate(|s| s.discounts.retain(|d| d.id != id))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl Database<Update<By<Discount, discount::PeriodDate>>> for Json {
    type Ok = usize;
    type Err = Traced<database::Error>;

    /// Deactivates every active [`Discount`] whose period has ended before
    /// the provided date, returning the number of deactivated ones.
    async fn execute(
        &self,
        Update(by): Update<By<Discount, discount::PeriodDate>>,
    ) -> Result<Self::Ok, Self::Err> {
        let date = by.into_inner();
        self.mutate(|s| {
            s.discounts
                .iter_mut()
                .filter(|d| d.is_active && d.period.has_ended_before(date))
                .map(|d| d.is_active = false)
                .count()
        })
        .await
        .map_err(tracerr::wrap!())
    }
}
