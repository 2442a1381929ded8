//! [`Query`] collection related to a single [`Booking`].

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{booking, house, Booking},
    infra::{database, Database},
    read::booking::Active,
    Query, Service,
};

use super::DatabaseQuery;

/// Queries a [`Booking`] by its [`booking::Id`].
pub type ById = DatabaseQuery<By<Option<Booking>, booking::Id>>;

/// [`Query`] checking whether a [`House`] is free for a [`Stay`].
///
/// [`House`]: crate::domain::House
/// [`Stay`]: booking::Stay
#[derive(Clone, Copy, Debug)]
pub struct Availability {
    /// ID of the [`House`] to check.
    ///
    /// [`House`]: crate::domain::House
    pub house_id: house::Id,

    /// Proposed [`Stay`].
    ///
    /// [`Stay`]: booking::Stay
    pub stay: booking::Stay,
}

impl<Db> Query<Availability> for Service<Db>
where
    Db: Database<
        Select<By<Vec<Active<Booking>>, house::Id>>,
        Ok = Vec<Active<Booking>>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = bool;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Availability { house_id, stay }: Availability,
    ) -> Result<Self::Ok, Self::Err> {
        let bookings = self
            .database()
            .execute(Select(By::<Vec<Active<Booking>>, _>::new(house_id)))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(bookings.iter().all(|Active(b)| !b.stay.overlaps(&stay)))
    }
}
