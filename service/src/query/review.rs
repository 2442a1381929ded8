//! [`Query`] collection related to a single [`Review`].

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{house, review, Review},
    infra::{database, Database},
    read,
    Query, Service,
};

use super::DatabaseQuery;

/// Queries a [`Review`] by its [`review::Id`].
pub type ById = DatabaseQuery<By<Option<Review>, review::Id>>;

/// [`Query`] aggregating [`read::review::RatingStats`] of a [`House`].
///
/// [`House`]: crate::domain::House
#[derive(Clone, Copy, Debug)]
pub struct RatingStats {
    /// ID of the [`House`] to aggregate [`Review`]s of.
    ///
    /// [`House`]: crate::domain::House
    pub house_id: house::Id,
}

impl<Db> Query<RatingStats> for Service<Db>
where
    Db: Database<
        Select<By<Vec<Review>, house::Id>>,
        Ok = Vec<Review>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = read::review::RatingStats;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        RatingStats { house_id }: RatingStats,
    ) -> Result<Self::Ok, Self::Err> {
        let reviews = self
            .database()
            .execute(Select(By::<Vec<Review>, _>::new(house_id)))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(read::review::RatingStats::collect(
            reviews.iter().map(|r| r.rating),
        ))
    }
}
