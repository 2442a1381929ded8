//! [`Command`] for creating a new [`Booking`].

use common::{
    operations::{By, Insert, Select},
    Date, DateTime, Money,
};
use derive_more::{Display, Error, From};
use rust_decimal::Decimal;
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::booking::Stay;
use crate::{
    domain::{booking, house, user, Booking, Discount, House, User},
    infra::{database, Database},
    read::booking::Active,
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Booking`].
#[derive(Clone, Copy, Debug)]
pub struct CreateBooking {
    /// ID of the [`House`] to book.
    pub house_id: house::Id,

    /// ID of the [`User`] who books.
    pub user_id: user::Id,

    /// [`Stay`] to reserve.
    pub stay: booking::Stay,

    /// Number of guests staying.
    pub guests: booking::Guests,
}

impl<Db> Command<CreateBooking> for Service<Db>
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
            Select<By<Vec<Active<Booking>>, house::Id>>,
            Ok = Vec<Active<Booking>>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Discount>, house::Id>>,
            Ok = Vec<Discount>,
            Err = Traced<database::Error>,
        > + Database<Insert<Booking>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Booking;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateBooking,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateBooking {
            house_id,
            user_id,
            stay,
            guests,
        } = cmd;

        drop(
            self.database()
                .execute(Select(By::<Option<User>, _>::new(user_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or(E::UserNotExists(user_id))
                .map_err(tracerr::wrap!())?,
        );

        let house = self
            .database()
            .execute(Select(By::<Option<House>, _>::new(house_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::HouseNotExists(house_id))
            .map_err(tracerr::wrap!())?;
        if !house.is_available {
            return Err(tracerr::new!(E::HouseUnavailable(house_id)));
        }
        if !house.capacity.fits(guests.into()) {
            return Err(tracerr::new!(E::OverCapacity {
                guests,
                capacity: house.capacity,
            }));
        }

        let occupied = self
            .database()
            .execute(Select(By::<Vec<Active<Booking>>, _>::new(house_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .into_iter()
            .any(|Active(b)| b.stay.overlaps(&stay));
        if occupied {
            return Err(tracerr::new!(E::StayOccupied(stay)));
        }

        let today = Date::today().coerce();
        let discount = self
            .database()
            .execute(Select(By::<Vec<Discount>, _>::new(house_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .into_iter()
            .find(|d| d.applies_on(today));

        // The discount reduces the nightly price, not the whole-stay sum.
        let nightly = house.price_per_night;
        let nights = Decimal::from(stay.nights());
        let total_of = |per_night: Money| Money {
            amount: per_night.amount * nights,
            currency: nightly.currency,
        };
        let (total_price, original_price, discount_amount) = match &discount {
            Some(d) => {
                let total = total_of(d.amount.apply_to(nightly));
                let original = total_of(nightly);
                let saved = Money {
                    amount: original.amount - total.amount,
                    currency: nightly.currency,
                };
                (total, Some(original), Some(saved))
            }
            None => (total_of(nightly), None, None),
        };

        let booking = Booking {
            id: booking::Id::new(),
            house_id,
            user_id,
            stay,
            guests,
            total_price,
            original_price,
            discount_amount,
            status: booking::Status::Pending,
            created_at: DateTime::now().coerce(),
            cancellation: None,
        };

        self.database()
            .execute(Insert(booking.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(booking)
    }
}

/// Error of [`CreateBooking`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`House`] with the provided ID does not exist.
    #[display("`House(id: {_0})` does not exist")]
    #[from(ignore)]
    HouseNotExists(#[error(not(source))] house::Id),

    /// [`House`] is not accepting [`Booking`]s.
    #[display("`House(id: {_0})` is not accepting bookings")]
    #[from(ignore)]
    HouseUnavailable(#[error(not(source))] house::Id),

    /// Number of guests exceeds the [`House`] capacity.
    #[display("{guests} guest(s) do not fit the capacity of {capacity}")]
    OverCapacity {
        /// Requested number of guests.
        guests: booking::Guests,

        /// [`house::Capacity`] of the [`House`].
        capacity: house::Capacity,
    },

    /// Requested [`Stay`] overlaps an active [`Booking`].
    #[display(
        "Stay from {} to {} overlaps an existing booking",
        _0.check_in, _0.check_out,
    )]
    #[from(ignore)]
    StayOccupied(#[error(not(source))] booking::Stay),

    /// [`User`] with the provided ID does not exist.
    #[display("`User(id: {_0})` does not exist")]
    #[from(ignore)]
    UserNotExists(#[error(not(source))] user::Id),
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use crate::{
        domain::{admin, discount},
        infra::Json,
        task, Config,
    };

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

    fn some_user(email: &str) -> User {
        let password = user::Password::new("secret-password").unwrap();
        User {
            id: user::Id::new(),
            email: user::Email::new(email).unwrap(),
            name: user::Name::new("Aram").unwrap(),
            password_hash: user::PasswordHash::new(&password).unwrap(),
            favorites: user::Favorites::default(),
            created_at: DateTime::UNIX_EPOCH.coerce(),
        }
    }

    fn stay(check_in: &str, check_out: &str) -> booking::Stay {
        booking::Stay::new(
            booking::StayDate::from_iso8601(check_in).unwrap(),
            booking::StayDate::from_iso8601(check_out).unwrap(),
        )
        .unwrap()
    }

    fn fixed_discount(house_id: house::Id, sum: &str) -> Discount {
        Discount {
            id: discount::Id::new(),
            house_id,
            amount: discount::Amount::Fixed(sum.parse().unwrap()),
            period: discount::Period::new(
                Date::today().coerce(),
                discount::PeriodDate::from_iso8601("2099-12-31").unwrap(),
            )
            .unwrap(),
            is_active: true,
            created_by: admin::Id::new(),
            created_at: DateTime::UNIX_EPOCH.coerce(),
        }
    }

    #[tokio::test]
    async fn rejects_overlapping_stay() {
        let svc = service().await;
        let house = some_house();
        let first = some_user("aram@example.com");
        let second = some_user("lana@example.com");
        svc.database().execute(Insert(house.clone())).await.unwrap();
        svc.database().execute(Insert(first.clone())).await.unwrap();
        svc.database().execute(Insert(second.clone())).await.unwrap();

        svc.execute(CreateBooking {
            house_id: house.id,
            user_id: first.id,
            stay: stay("2030-07-10", "2030-07-15"),
            guests: booking::Guests::from(2),
        })
        .await
        .unwrap();

        let err = svc
            .execute(CreateBooking {
                house_id: house.id,
                user_id: second.id,
                stay: stay("2030-07-10", "2030-07-15"),
                guests: booking::Guests::from(2),
            })
            .await
            .unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::StayOccupied(_)));

        // Back-to-back with the existing stay is fine.
        svc.execute(CreateBooking {
            house_id: house.id,
            user_id: second.id,
            stay: stay("2030-07-15", "2030-07-20"),
            guests: booking::Guests::from(2),
        })
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn fixed_discount_reduces_every_night() {
        let svc = service().await;
        let house = some_house();
        let user = some_user("aram@example.com");
        svc.database().execute(Insert(house.clone())).await.unwrap();
        svc.database().execute(Insert(user.clone())).await.unwrap();
        svc.database()
            .execute(Insert(fixed_discount(house.id, "50USD")))
            .await
            .unwrap();

        let booking = svc
            .execute(CreateBooking {
                house_id: house.id,
                user_id: user.id,
                stay: stay("2030-07-10", "2030-07-15"),
                guests: booking::Guests::from(2),
            })
            .await
            .unwrap();

        // 5 nights of (180 - 50) USD.
        assert_eq!(booking.total_price, "650USD".parse().unwrap());
        assert_eq!(booking.original_price, Some("900USD".parse().unwrap()));
        assert_eq!(booking.discount_amount, Some("250USD".parse().unwrap()));
    }
}
