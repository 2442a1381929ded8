//! [`Query`] collection related to a single [`Discount`].

use common::{
    operations::{By, Select},
    Money,
};
use tracerr::Traced;

use crate::{
    domain::{discount, house, Discount},
    infra::{database, Database},
    Query, Service,
};

use super::DatabaseQuery;

/// Queries a [`Discount`] by its [`discount::Id`].
pub type ById = DatabaseQuery<By<Option<Discount>, discount::Id>>;

/// [`Query`] pricing a night of a [`House`] on a [`Date`], with any
/// applicable [`Discount`] applied.
///
/// [`Date`]: common::Date
/// [`House`]: crate::domain::House
#[derive(Clone, Copy, Debug)]
pub struct Quote {
    /// ID of the [`House`] to price.
    ///
    /// [`House`]: crate::domain::House
    pub house_id: house::Id,

    /// Base price of a night.
    pub base: Money,

    /// [`Date`] the price is evaluated on.
    ///
    /// [`Date`]: common::Date
    pub on: discount::PeriodDate,
}

/// Output of the [`Quote`] [`Query`].
#[derive(Clone, Debug)]
pub struct Output {
    /// Final price of a night, with the [`Discount`] applied (if any).
    pub price: Money,

    /// [`Discount`] that was applied, if any.
    pub applied: Option<Discount>,
}

impl<Db> Query<Quote> for Service<Db>
where
    Db: Database<
        Select<By<Vec<Discount>, house::Id>>,
        Ok = Vec<Discount>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Output;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Quote { house_id, base, on }: Quote,
    ) -> Result<Self::Ok, Self::Err> {
        let discounts = self
            .database()
            .execute(Select(By::<Vec<Discount>, _>::new(house_id)))
            .await
            .map_err(tracerr::wrap!())?;

        // Non-overlap of active periods is enforced on creation, so at most
        // one can match. Should legacy data overlap anyway, the first one in
        // storage order wins.
        let applied = discounts.into_iter().find(|d| d.applies_on(on));

        Ok(Output {
            price: applied.as_ref().map_or(base, |d| d.amount.apply_to(base)),
            applied,
        })
    }
}
