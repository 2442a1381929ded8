//! [`Command`] for deleting a [`Discount`].

use common::operations::{By, Delete, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{discount, Discount},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for deleting a [`Discount`].
#[derive(Clone, Copy, Debug, From)]
pub struct DeleteDiscount {
    /// ID of the [`Discount`] to delete.
    pub discount_id: discount::Id,
}

impl<Db> Command<DeleteDiscount> for Service<Db>
where
    Db: Database<
            Select<By<Option<Discount>, discount::Id>>,
            Ok = Option<Discount>,
            Err = Traced<database::Error>,
        > + Database<
            Delete<By<Discount, discount::Id>>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteDiscount,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteDiscount { discount_id } = cmd;

        drop(
            self.database()
                .execute(Select(By::<Option<Discount>, _>::new(discount_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or(E::DiscountNotExists(discount_id))
                .map_err(tracerr::wrap!())?,
        );

        self.database()
            .execute(Delete(By::new(discount_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`DeleteDiscount`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Discount`] with the provided ID does not exist.
    #[display("`Discount(id: {_0})` does not exist")]
    #[from(ignore)]
    DiscountNotExists(#[error(not(source))] discount::Id),
}
