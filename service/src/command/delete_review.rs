//! [`Command`] for deleting a [`Review`].

use common::operations::{By, Delete, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{admin, house, review, user, Admin, House, Review},
    infra::{database, Database},
    read,
    Service,
};

use super::Command;

/// [`Command`] for deleting a [`Review`].
#[derive(Clone, Copy, Debug)]
pub enum DeleteReview {
    /// Delete a [`Review`] on behalf of its author.
    ByAuthor {
        /// ID of the [`Review`] to delete.
        review_id: review::Id,

        /// ID of the [`User`] performing the deletion.
        ///
        /// [`User`]: crate::domain::User
        user_id: user::Id,
    },

    /// Delete a [`Review`] on behalf of an [`Admin`].
    ByAdmin {
        /// ID of the [`Review`] to delete.
        review_id: review::Id,

        /// ID of the [`Admin`] performing the deletion.
        admin_id: admin::Id,
    },
}

impl<Db> Command<DeleteReview> for Service<Db>
where
    Db: Database<
            Select<By<Option<Review>, review::Id>>,
            Ok = Option<Review>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Admin>, admin::Id>>,
            Ok = Option<Admin>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<House>, house::Id>>,
            Ok = Option<House>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Review>, house::Id>>,
            Ok = Vec<Review>,
            Err = Traced<database::Error>,
        > + Database<
            Delete<By<Review, review::Id>>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<Update<House>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: DeleteReview) -> Result<Self::Ok, Self::Err> {
        use DeleteReview as Cmd;
        use ExecutionError as E;

        let review_id = match cmd {
            Cmd::ByAuthor { review_id, .. }
            | Cmd::ByAdmin { review_id, .. } => review_id,
        };

        let review = self
            .database()
            .execute(Select(By::<Option<Review>, _>::new(review_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ReviewNotExists(review_id))
            .map_err(tracerr::wrap!())?;

        match cmd {
            Cmd::ByAuthor { user_id, .. } => {
                if review.user_id != user_id {
                    return Err(tracerr::new!(E::NotAuthor(user_id)));
                }
            }
            Cmd::ByAdmin { admin_id, .. } => drop(
                self.database()
                    .execute(Select(By::<Option<Admin>, _>::new(admin_id)))
                    .await
                    .map_err(tracerr::map_from_and_wrap!(=> E))?
                    .ok_or(E::AdminNotExists(admin_id))
                    .map_err(tracerr::wrap!())?,
            ),
        }

        self.database()
            .execute(Delete(By::new(review_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        if let Some(mut house) = self
            .database()
            .execute(Select(By::<Option<House>, _>::new(review.house_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
        {
            let reviews = self
                .database()
                .execute(Select(By::<Vec<Review>, _>::new(review.house_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?;
            let stats = read::review::RatingStats::collect(
                reviews.iter().map(|r| r.rating),
            );
            house.rating = stats.average;
            house.reviews_count = stats.total.into();
            self.database()
                .execute(Update(house))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?;
        }

        Ok(())
    }
}

/// Error of [`DeleteReview`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Admin`] with the provided ID does not exist.
    #[display("`Admin(id: {_0})` does not exist")]
    #[from(ignore)]
    AdminNotExists(#[error(not(source))] admin::Id),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`User`] deleting a [`Review`] they did not write.
    ///
    /// [`User`]: crate::domain::User
    #[display("`User(id: {_0})` is not the author of the review")]
    #[from(ignore)]
    NotAuthor(#[error(not(source))] user::Id),

    /// [`Review`] with the provided ID does not exist.
    #[display("`Review(id: {_0})` does not exist")]
    #[from(ignore)]
    ReviewNotExists(#[error(not(source))] review::Id),
}
