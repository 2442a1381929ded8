//! [`Command`] for updating a [`Discount`].

use common::{
    operations::{By, Select, Update},
    Money,
};
use derive_more::{Display, Error, From};
use rust_decimal::Decimal;
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::{discount::Period, House};
use crate::{
    domain::{discount, house, Discount},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating a [`Discount`].
///
/// Only the provided fields are changed.
#[derive(Clone, Copy, Debug)]
pub struct UpdateDiscount {
    /// ID of the [`Discount`] to update.
    pub discount_id: discount::Id,

    /// New amount of the [`Discount`].
    pub amount: Option<discount::Amount>,

    /// New [`Period`] of the [`Discount`].
    pub period: Option<discount::Period>,

    /// New activity indicator of the [`Discount`].
    pub is_active: Option<bool>,
}

impl<Db> Command<UpdateDiscount> for Service<Db>
where
    Db: Database<
            Select<By<Option<Discount>, discount::Id>>,
            Ok = Option<Discount>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Discount>, house::Id>>,
            Ok = Vec<Discount>,
            Err = Traced<database::Error>,
        > + Database<Update<Discount>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Discount;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateDiscount,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateDiscount {
            discount_id,
            amount,
            period,
            is_active,
        } = cmd;

        let mut discount = self
            .database()
            .execute(Select(By::<Option<Discount>, _>::new(discount_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::DiscountNotExists(discount_id))
            .map_err(tracerr::wrap!())?;

        if let Some(amount) = amount {
            if let discount::Amount::Fixed(sum) = amount {
                if sum.amount < Decimal::ZERO {
                    return Err(tracerr::new!(E::NegativeAmount(sum)));
                }
            }
            discount.amount = amount;
        }
        if let Some(period) = period {
            discount.period = period;
        }
        if let Some(is_active) = is_active {
            discount.is_active = is_active;
        }

        if discount.is_active {
            let overlapping = self
                .database()
                .execute(Select(By::<Vec<Discount>, _>::new(
                    discount.house_id,
                )))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .into_iter()
                .any(|d| {
                    d.id != discount.id
                        && d.is_active
                        && d.period.overlaps(&discount.period)
                });
            if overlapping {
                return Err(tracerr::new!(E::PeriodOverlaps(discount.period)));
            }
        }

        self.database()
            .execute(Update(discount.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(discount)
    }
}

/// Error of [`UpdateDiscount`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Discount`] with the provided ID does not exist.
    #[display("`Discount(id: {_0})` does not exist")]
    #[from(ignore)]
    DiscountNotExists(#[error(not(source))] discount::Id),

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
