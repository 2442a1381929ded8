//! [`Booking`]-related [`Database`] implementations.

use common::operations::{By, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{booking, house, user, Booking},
    infra::{
        database::{self, Json},
        Database,
    },
    read::booking::Active,
};

impl Database<Select<By<Option<Booking>, booking::Id>>> for Json {
    type Ok = Option<Booking>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Booking>, booking::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .read(|s| s.bookings.iter().find(|b| b.id == id).cloned())
            .await)
    }
}

impl Database<Select<By<Vec<Booking>, user::Id>>> for Json {
    type Ok = Vec<Booking>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Booking>, user::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let user_id = by.into_inner();
        let mut bookings = self
            .read(|s| {
                s.bookings
                    .iter()
                    .filter(|b| b.user_id == user_id)
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .await;
        bookings.sort_by_key(|b| std::cmp::Reverse(b.created_at));
        Ok(bookings)
    }
}

impl Database<Select<By<Vec<Active<Booking>>, house::Id>>> for Json {
    type Ok = Vec<Active<Booking>>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Active<Booking>>, house::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let house_id = by.into_inner();
        Ok(self
            .read(|s| {
                s.bookings
                    .iter()
                    .filter(|b| b.house_id == house_id && b.is_active())
                    .cloned()
                    .map(Active)
                    .collect()
            })
            .await)
    }
}

impl Database<Select<By<Vec<Booking>, ()>>> for Json {
    type Ok = Vec<Booking>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(_): Select<By<Vec<Booking>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut bookings = self.read(|s| s.bookings.clone()).await;
        bookings.sort_by_key(|b| std::cmp::Reverse(b.created_at));
        Ok(bookings)
    }
}

impl Database<Insert<Booking>> for Json {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(booking): Insert<Booking>,
    ) -> Result<Self::Ok, Self::Err> {
        self.mutate(|s| s.bookings.push(booking))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl Database<Update<Booking>> for Json {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(booking): Update<Booking>,
    ) -> Result<Self::Ok, Self::Err> {
        self.mutate(|s| {
            if let Some(b) =
                s.bookings.iter_mut().find(|b| b.id == booking.id)
            {
                *b = booking;
            } else {
                s.bookings.push(booking);
            }
        })
        .await
        .map_err(tracerr::wrap!())
    }
}
