//! [`Command`] for updating a [`Review`].

use common::{
    operations::{By, Select, Update},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{house, review, user, House, Review},
    infra::{database, Database},
    read,
    Service,
};

use super::Command;

/// [`Command`] for updating a [`Review`].
///
/// Only the provided fields are changed.
#[derive(Clone, Debug)]
pub struct UpdateReview {
    /// ID of the [`Review`] to update.
    pub review_id: review::Id,

    /// ID of the [`User`] performing the update.
    ///
    /// [`User`]: crate::domain::User
    pub user_id: user::Id,

    /// New rating of the [`Review`].
    pub rating: Option<review::Rating>,

    /// New title of the [`Review`].
    pub title: Option<review::Title>,

    /// New comment of the [`Review`].
    pub comment: Option<review::Comment>,
}

impl<Db> Command<UpdateReview> for Service<Db>
where
    Db: Database<
            Select<By<Option<Review>, review::Id>>,
            Ok = Option<Review>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<House>, house::Id>>,
            Ok = Option<House>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Review>, house::Id>>,
            Ok = Vec<Review>,
            Err = Traced<database::Error>,
        > + Database<Update<Review>, Ok = (), Err = Traced<database::Error>>
        + Database<Update<House>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Review;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: UpdateReview) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateReview {
            review_id,
            user_id,
            rating,
            title,
            comment,
        } = cmd;

        let mut review = self
            .database()
            .execute(Select(By::<Option<Review>, _>::new(review_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ReviewNotExists(review_id))
            .map_err(tracerr::wrap!())?;
        if review.user_id != user_id {
            return Err(tracerr::new!(E::NotAuthor(user_id)));
        }

        if let Some(rating) = rating {
            review.rating = rating;
        }
        if let Some(title) = title {
            review.title = title;
        }
        if let Some(comment) = comment {
            review.comment = comment;
        }
        review.updated_at = Some(DateTime::now().coerce());

        self.database()
            .execute(Update(review.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        self.refresh_rating(review.house_id).await?;

        Ok(review)
    }
}

impl<Db> Service<Db> {
    /// Recomputes the aggregated rating of the provided [`House`] from its
    /// stored [`Review`]s.
    pub(super) async fn refresh_rating(
        &self,
        house_id: house::Id,
    ) -> Result<(), Traced<ExecutionError>>
    where
        Db: Database<
                Select<By<Option<House>, house::Id>>,
                Ok = Option<House>,
                Err = Traced<database::Error>,
            > + Database<
                Select<By<Vec<Review>, house::Id>>,
                Ok = Vec<Review>,
                Err = Traced<database::Error>,
            > + Database<Update<House>, Ok = (), Err = Traced<database::Error>>,
    {
        use ExecutionError as E;

        let Some(mut house) = self
            .database()
            .execute(Select(By::<Option<House>, _>::new(house_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
        else {
            // Reviews may outlive their house deletion.
            return Ok(());
        };

        let reviews = self
            .database()
            .execute(Select(By::<Vec<Review>, _>::new(house_id)))
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
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`UpdateReview`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`User`] updating a [`Review`] they did not write.
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
