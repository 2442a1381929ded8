//! [`House`]-related [`Database`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{house, House},
    infra::{
        database::{self, Json},
        Database,
    },
    read,
};

impl Database<Select<By<Option<House>, house::Id>>> for Json {
    type Ok = Option<House>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<House>, house::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .read(|s| s.houses.iter().find(|h| h.id == id).cloned())
            .await)
    }
}

impl Database<Insert<House>> for Json {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(house): Insert<House>,
    ) -> Result<Self::Ok, Self::Err> {
        self.mutate(|s| s.houses.push(house))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl Database<Update<House>> for Json {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(house): Update<House>,
    ) -> Result<Self::Ok, Self::Err> {
        self.mutate(|s| {
            if let Some(h) = s.houses.iter_mut().find(|h| h.id == house.id) {
                *h = house;
            } else {
                s.houses.push(house);
            }
        })
        .await
        .map_err(tracerr::wrap!())
    }
}

impl Database<Delete<By<House, house::Id>>> for Json {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<House, house::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        self.mutate(|s| s.houses.retain(|h| h.id != id))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl Database<Select<By<read::house::list::Page, read::house::list::Selector>>>
    for Json
{
    type Ok = read::house::list::Page;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<read::house::list::Page, read::house::list::Selector>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let read::house::list::Selector { arguments, filter } = by.into_inner();
        let kind = arguments.kind();

        let mut ids = self
            .read(|s| {
                s.houses
                    .iter()
                    .filter(|h| matches_filter(h, &filter))
                    .map(|h| h.id)
                    .collect::<Vec<_>>()
            })
            .await;

        ids.sort_unstable_by(|a, b| kind.order().apply(a.cmp(b)));
        let after_cursor = ids
            .into_iter()
            .filter(|id| {
                arguments.cursor().map_or(true, |c| kind.matches(id.cmp(c)))
            })
            .collect::<Vec<_>>();

        let has_more = after_cursor.len() > arguments.limit();
        let edges = after_cursor
            .into_iter()
            .take(arguments.limit())
            .map(|id| (id, id))
            .collect::<Vec<_>>();

        Ok(read::house::list::Page::new(&arguments, edges, has_more))
    }
}

impl
    Database<Select<By<read::house::list::TotalCount, read::house::list::Filter>>>
    for Json
{
    type Ok = read::house::list::TotalCount;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<read::house::list::TotalCount, read::house::list::Filter>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let filter = by.into_inner();
        let count = self
            .read(|s| {
                s.houses.iter().filter(|h| matches_filter(h, &filter)).count()
            })
            .await;
        Ok(i32::try_from(count).unwrap_or(i32::MAX).into())
    }
}

/// Checks whether the provided [`House`] passes the provided [`Filter`].
///
/// [`Filter`]: read::house::list::Filter
fn matches_filter(house: &House, filter: &read::house::list::Filter) -> bool {
    let read::house::list::Filter {
        area,
        city,
        min_price,
        max_price,
        only_available,
    } = filter;

    area.as_ref().map_or(true, |a| house.area == *a)
        && city.as_ref().map_or(true, |c| house.city == *c)
        && min_price
            .map_or(true, |p| house.price_per_night.amount >= p.amount)
        && max_price
            .map_or(true, |p| house.price_per_night.amount <= p.amount)
        && (!only_available || house.is_available)
}
