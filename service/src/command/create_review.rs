//! [`Command`] for creating a new [`Review`].

use common::{
    operations::{By, Insert, Select, Update},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::review::{Comment, Rating, Title};
use crate::{
    domain::{house, review, user, House, Review, User},
    infra::{database, Database},
    read,
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Review`].
#[derive(Clone, Debug)]
pub struct CreateReview {
    /// ID of the [`House`] to review.
    pub house_id: house::Id,

    /// ID of the [`User`] who reviews.
    pub user_id: user::Id,

    /// [`Rating`] of a new [`Review`].
    pub rating: review::Rating,

    /// [`Title`] of a new [`Review`].
    pub title: review::Title,

    /// [`Comment`] of a new [`Review`].
    pub comment: review::Comment,
}

impl<Db> Command<CreateReview> for Service<Db>
where
    Db: Database<
            Select<By<Option<House>, house::Id>>,
            Ok = Option<House>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<User>, user::Id>>,
            Ok = Option<User>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Review>, house::Id>>,
            Ok = Vec<Review>,
            Err = Traced<database::Error>,
        > + Database<Insert<Review>, Ok = (), Err = Traced<database::Error>>
        + Database<Update<House>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Review;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreateReview) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateReview {
            house_id,
            user_id,
            rating,
            title,
            comment,
        } = cmd;

        let mut house = self
            .database()
            .execute(Select(By::<Option<House>, _>::new(house_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::HouseNotExists(house_id))
            .map_err(tracerr::wrap!())?;
        let user = self
            .database()
            .execute(Select(By::<Option<User>, _>::new(user_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::UserNotExists(user_id))
            .map_err(tracerr::wrap!())?;

        let reviews = self
            .database()
            .execute(Select(By::<Vec<Review>, _>::new(house_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if reviews.iter().any(|r| r.user_id == user_id) {
            return Err(tracerr::new!(E::AlreadyReviewed {
                house_id,
                user_id,
            }));
        }

        let review = Review {
            id: review::Id::new(),
            house_id,
            user_id,
            author_name: user.name,
            rating,
            title,
            comment,
            created_at: DateTime::now().coerce(),
            updated_at: None,
        };
        self.database()
            .execute(Insert(review.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let stats = read::review::RatingStats::collect(
            reviews.iter().map(|r| r.rating).chain([review.rating]),
        );
        house.rating = stats.average;
        house.reviews_count = stats.total.into();
        self.database()
            .execute(Update(house))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(review)
    }
}

/// Error of [`CreateReview`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`User`] has already reviewed the [`House`].
    #[display("`User(id: {user_id})` already reviewed `House(id: {house_id})`")]
    AlreadyReviewed {
        /// ID of the reviewed [`House`].
        house_id: house::Id,

        /// ID of the reviewing [`User`].
        user_id: user::Id,
    },

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

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use rust_decimal::Decimal;

    use crate::{infra::Json, task, Config};

    use super::*;

    async fn service() -> Service<Json> {
        Service {
            config: Config {
                jwt_encoding_key: jsonwebtoken::EncodingKey::from_secret(
                    b"test",
                ),
                jwt_decoding_key: jsonwebtoken::DecodingKey::from_secret(
                    b"test",
                ),
                deactivate_expired_discounts:
                    task::deactivate_expired_discounts::Config {
                        interval: Duration::from_secs(60 * 60),
                    },
            },
            database: Json::new(None).await.unwrap(),
        }
    }

    fn some_house() -> House {
        House {
            id: house::Id::new(),
            title: house::Title::new("Mountain view villa").unwrap(),
            area: house::Area::new("Shaqlawa").unwrap(),
            city: house::City::new("Erbil").unwrap(),
            price_per_night: "180USD".parse().unwrap(),
            rating: house::Rating::new(Decimal::ZERO).unwrap(),
            reviews_count: 0u32.into(),
            bedrooms: 3u16.into(),
            bathrooms: 2u16.into(),
            capacity: 6u16.into(),
            has_parking: true,
            is_available: true,
            images: vec![],
            description: house::Description::new("A cool summer house")
                .unwrap(),
            amenities: vec![],
            contact_phone: user::Phone::new("+964 750 000 0000").unwrap(),
            whatsapp_number: user::Phone::new("+964 750 000 0000").unwrap(),
            location: house::Location {
                latitude: 36.4,
                longitude: 44.3,
            },
            created_at: DateTime::UNIX_EPOCH.coerce(),
            updated_at: None,
        }
    }

    fn some_user(name: &str, email: &str) -> User {
        let password = user::Password::new("secret-password").unwrap();
        User {
            id: user::Id::new(),
            email: user::Email::new(email).unwrap(),
            name: user::Name::new(name).unwrap(),
            password_hash: user::PasswordHash::new(&password).unwrap(),
            favorites: user::Favorites::default(),
            created_at: DateTime::UNIX_EPOCH.coerce(),
        }
    }

    fn cmd(house_id: house::Id, user_id: user::Id, rating: u8) -> CreateReview {
        CreateReview {
            house_id,
            user_id,
            rating: review::Rating::new(rating).unwrap(),
            title: review::Title::new("Great stay").unwrap(),
            comment: review::Comment::new("Would come back").unwrap(),
        }
    }

    #[tokio::test]
    async fn rejects_duplicate_per_house_and_user() {
        let svc = service().await;
        let house = some_house();
        let user = some_user("Aram", "aram@example.com");
        svc.database().execute(Insert(house.clone())).await.unwrap();
        svc.database().execute(Insert(user.clone())).await.unwrap();

        svc.execute(cmd(house.id, user.id, 5)).await.unwrap();
        let err = svc.execute(cmd(house.id, user.id, 4)).await.unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::AlreadyReviewed { .. },
        ));
    }

    #[tokio::test]
    async fn recomputes_house_rating() {
        let svc = service().await;
        let house = some_house();
        let first = some_user("Aram", "aram@example.com");
        let second = some_user("Lana", "lana@example.com");
        svc.database().execute(Insert(house.clone())).await.unwrap();
        svc.database().execute(Insert(first.clone())).await.unwrap();
        svc.database().execute(Insert(second.clone())).await.unwrap();

        svc.execute(cmd(house.id, first.id, 5)).await.unwrap();
        svc.execute(cmd(house.id, second.id, 4)).await.unwrap();

        let updated = svc
            .database()
            .execute(Select(By::<Option<House>, _>::new(house.id)))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.rating.value(), Decimal::new(45, 1));
        assert_eq!(u32::from(updated.reviews_count), 2);
    }
}
