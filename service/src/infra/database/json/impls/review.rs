//! [`Review`]-related [`Database`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{house, review, user, Review},
    infra::{
        database::{self, Json},
        Database,
    },
};

impl Database<Select<By<Option<Review>, review::Id>>> for Json {
    type Ok = Option<Review>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Review>, review::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .read(|s| s.reviews.iter().find(|r| r.id == id).cloned())
            .await)
    }
}

impl Database<Select<By<Vec<Review>, house::Id>>> for Json {
    type Ok = Vec<Review>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Review>, house::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let house_id = by.into_inner();
        let mut reviews = self
            .read(|s| {
                s.reviews
                    .iter()
                    .filter(|r| r.house_id == house_id)
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .await;
        reviews.sort_by_key(|r| std::cmp::Reverse(r.created_at));
        Ok(reviews)
    }
}

impl Database<Select<By<Vec<Review>, user::Id>>> for Json {
    type Ok = Vec<Review>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Review>, user::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let user_id = by.into_inner();
        let mut reviews = self
            .read(|s| {
                s.reviews
                    .iter()
                    .filter(|r| r.user_id == user_id)
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .await;
        reviews.sort_by_key(|r| std::cmp::Reverse(r.created_at));
        Ok(reviews)
    }
}

impl Database<Insert<Review>> for Json {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(review): Insert<Review>,
    ) -> Result<Self::Ok, Self::Err> {
        self.mutate(|s| s.reviews.push(review))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl Database<Update<Review>> for Json {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(review): Update<Review>,
    ) -> Result<Self::Ok, Self::Err> {
        self.mutate(|s| {
            if let Some(r) = s.reviews.iter_mut().find(|r| r.id == review.id) {
                *r = review;
            } else {
                s.reviews.push(review);
            }
        })
        .await
        .map_err(tracerr::wrap!())
    }
}

impl Database<Delete<By<Review, review::Id>>> for Json {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Review, review::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        self.mutate(|s| s.reviews.retain(|r| r.id != id))
            .await
            .map_err(tracerr::wrap!())
    }
}
