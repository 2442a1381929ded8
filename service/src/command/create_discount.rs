//! [`Command`] for creating a new [`Discount`].

use common::{
    operations::{By, Insert, Select},
    DateTime, Money,
};
use derive_more::{Display, Error, From};
use rust_decimal::Decimal;
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::discount::Period;
use crate::{
    domain::{admin, discount, house, Discount, House},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Discount`].
#[derive(Clone, Copy, Debug)]
pub struct CreateDiscount {
    /// ID of the [`House`] the new [`Discount`] applies to.
    pub house_id: house::Id,

    /// Amount of the new [`Discount`].
    pub amount: discount::Amount,

    /// [`Period`] the new [`Discount`] is valid within.
    pub period: discount::Period,

    /// ID of the [`Admin`] who creates the [`Discount`].
    ///
    /// [`Admin`]: crate::domain::Admin
    pub created_by: admin::Id,
}

impl<Db> Command<CreateDiscount> for Service<Db>
where
    Db: Database<
            Select<By<Option<House>, house::Id>>,
            Ok = Option<House>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Discount>, house::Id>>,
            Ok = Vec<Discount>,
            Err = Traced<database::Error>,
        > + Database<Insert<Discount>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Discount;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateDiscount,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateDiscount {
            house_id,
            amount,
            period,
            created_by,
        } = cmd;

        if let discount::Amount::Fixed(sum) = amount {
            if sum.amount < Decimal::ZERO {
                return Err(tracerr::new!(E::NegativeAmount(sum)));
            }
        }

        drop(
            self.database()
                .execute(Select(By::<Option<House>, _>::new(house_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or(E::HouseNotExists(house_id))
                .map_err(tracerr::wrap!())?,
        );

        let overlapping = self
            .database()
            .execute(Select(By::<Vec<Discount>, _>::new(house_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .into_iter()
            .any(|d| d.is_active && d.period.overlaps(&period));
        if overlapping {
            return Err(tracerr::new!(E::PeriodOverlaps(period)));
        }

        let discount = Discount {
            id: discount::Id::new(),
            house_id,
            amount,
            period,
            is_active: true,
            created_by,
            created_at: DateTime::now().coerce(),
        };

        self.database()
            .execute(Insert(discount.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(discount)
    }
}

/// Error of [`CreateDiscount`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`House`] with the provided ID does not exist.
    #[display("`House(id: {_0})` does not exist")]
    #[from(ignore)]
    HouseNotExists(#[error(not(source))] house::Id),

    /// Fixed [`Discount`] amount is negative.
    #[display("Fixed discount amount `{_0}` is negative")]
    #[from(ignore)]
    NegativeAmount(#[error(not(source))] Money),

    /// [`Period`] overlaps another active [`Discount`] of the same [`House`].
    #[display(
        "Period from {} to {} overlaps another active discount",
        _0.start_date, _0.end_date,
    )]
    #[from(ignore)]
    PeriodOverlaps(#[error(not(source))] discount::Period),
}
