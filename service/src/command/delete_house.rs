//! [`Command`] for deleting a [`House`].

use common::operations::{By, Delete, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{house, House},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for deleting a [`House`].
#[derive(Clone, Copy, Debug, From)]
pub struct DeleteHouse {
    /// ID of the [`House`] to delete.
    pub house_id: house::Id,
}

impl<Db> Command<DeleteHouse> for Service<Db>
where
    Db: Database<
            Select<By<Option<House>, house::Id>>,
            Ok = Option<House>,
            Err = Traced<database::Error>,
        > + Database<
            Delete<By<House, house::Id>>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: DeleteHouse) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteHouse { house_id } = cmd;

        drop(
            self.database()
                .execute(Select(By::<Option<House>, _>::new(house_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or(E::HouseNotExists(house_id))
                .map_err(tracerr::wrap!())?,
        );

        self.database()
            .execute(Delete(By::new(house_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`DeleteHouse`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`House`] with the provided ID does not exist.
    #[display("`House(id: {_0})` does not exist")]
    #[from(ignore)]
    HouseNotExists(#[error(not(source))] house::Id),
}
