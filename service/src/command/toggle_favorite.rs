//! [`Command`] for toggling a [`User`]'s favorite [`House`].

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{house, user, House, User},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for toggling a [`House`] in a [`User`]'s favorites.
#[derive(Clone, Copy, Debug)]
pub struct ToggleFavorite {
    /// ID of the [`User`] whose favorites are toggled.
    pub user_id: user::Id,

    /// ID of the [`House`] to toggle.
    pub house_id: house::Id,
}

impl<Db> Command<ToggleFavorite> for Service<Db>
where
    Db: Database<
            Select<By<Option<User>, user::Id>>,
            Ok = Option<User>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<House>, house::Id>>,
            Ok = Option<House>,
            Err = Traced<database::Error>,
        > + Database<Update<User>, Ok = (), Err = Traced<database::Error>>,
{
    /// Indicator whether the [`House`] is a favorite after the toggle.
    type Ok = bool;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: ToggleFavorite,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let ToggleFavorite { user_id, house_id } = cmd;

        drop(
            self.database()
                .execute(Select(By::<Option<House>, _>::new(house_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or(E::HouseNotExists(house_id))
                .map_err(tracerr::wrap!())?,
        );

        let mut user = self
            .database()
            .execute(Select(By::<Option<User>, _>::new(user_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::UserNotExists(user_id))
            .map_err(tracerr::wrap!())?;

        let is_favorite = user.favorites.toggle(house_id);

        self.database()
            .execute(Update(user))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(is_favorite)
    }
}

/// Error of [`ToggleFavorite`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`House`] with the provided ID does not exist.
    #[display("`House(id: {_0})` does not exist")]
    #[from(ignore)]
    HouseNotExists(#[error(not(source))] house::Id),

    /// [`User`] with the provided ID does not exist.
    #[display("`User(id: {_0})` does not exist")]
    #[from(ignore)]
    UserNotExists(#[error(not(source))] user::Id),
}
