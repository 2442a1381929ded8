//! [`House`]-related definitions.

use std::future;

use common::{DateTime, Handler as _};
use derive_more::{AsRef, Display, From, Into};
use futures::TryFutureExt as _;
use juniper::{graphql_object, GraphQLObject};
use juniper::GraphQLScalar;
use service::{domain, query};
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::{api, api::scalar, AsError, Context, Error};

/// A summer house available for renting.
#[derive(Clone, Debug, From)]
pub struct House {
    /// ID of this [`House`].
    id: Id,

    /// Underlying [`domain::House`].
    house: OnceCell<domain::House>,
}

impl From<domain::House> for House {
    fn from(house: domain::House) -> Self {
        Self {
            id: house.id.into(),
            house: OnceCell::new_with(Some(house)),
        }
    }
}

impl House {
    /// Creates a new [`House`] with the provided ID.
    ///
    /// # Safety
    ///
    /// Caller must ensure that [`House`] with the provided ID exists,
    /// otherwise accessing this [`House`] will result with an error.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            house: OnceCell::new(),
        }
    }

    /// Returns the underlying [`domain::House`].
    ///
    /// # Errors
    ///
    /// Errors if the [`domain::House`] doesn't exist.
    async fn house(&self, ctx: &Context) -> Result<&domain::House, Error> {
        let id = self.id.into();
        self.house
            .get_or_try_init(|| {
                ctx.service()
                    .execute(query::house::ById::by(id))
                    .map_err(AsError::into_error)
                    .map_err(ctx.error())
                    .and_then(|h| {
                        future::ready(h.ok_or_else(|| {
                            api::query::HouseError::NotExists.into()
                        }))
                    })
            })
            .await
    }
}

/// A summer house available for renting.
#[graphql_object(context = Context)]
impl House {
    /// Unique identifier of this `House`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "House.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Title of this `House`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "House.title",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn title(&self, ctx: &Context) -> Result<Title, Error> {
        Ok(self.house(ctx).await?.title.clone().into())
    }

    /// Area this `House` is located in.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "House.area",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn area(&self, ctx: &Context) -> Result<Area, Error> {
        Ok(self.house(ctx).await?.area.clone().into())
    }

    /// City this `House` is located in.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "House.city",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn city(&self, ctx: &Context) -> Result<City, Error> {
        Ok(self.house(ctx).await?.city.clone().into())
    }

    /// Price of a single night of staying in this `House`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "House.pricePerNight",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn price_per_night(
        &self,
        ctx: &Context,
    ) -> Result<common::Money, Error> {
        Ok(self.house(ctx).await?.price_per_night)
    }

    /// Average rating of this `House`, as a decimal string.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "House.rating",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn rating(&self, ctx: &Context) -> Result<String, Error> {
        Ok(self.house(ctx).await?.rating.to_string())
    }

    /// Number of reviews this `House` has received.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "House.reviewsCount",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn reviews_count(&self, ctx: &Context) -> Result<i32, Error> {
        let count = u32::from(self.house(ctx).await?.reviews_count);
        Ok(i32::try_from(count).unwrap_or(i32::MAX))
    }

    /// Number of bedrooms in this `House`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "House.bedrooms",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn bedrooms(&self, ctx: &Context) -> Result<i32, Error> {
        Ok(u16::from(self.house(ctx).await?.bedrooms).into())
    }

    /// Number of bathrooms in this `House`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "House.bathrooms",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn bathrooms(&self, ctx: &Context) -> Result<i32, Error> {
        Ok(u16::from(self.house(ctx).await?.bathrooms).into())
    }

    /// Maximum number of guests this `House` accommodates.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "House.capacity",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn capacity(&self, ctx: &Context) -> Result<i32, Error> {
        Ok(u16::from(self.house(ctx).await?.capacity).into())
    }

    /// Indicator whether this `House` has a parking.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "House.hasParking",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn has_parking(&self, ctx: &Context) -> Result<bool, Error> {
        Ok(self.house(ctx).await?.has_parking)
    }

    /// Indicator whether this `House` is open for booking.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "House.isAvailable",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn is_available(&self, ctx: &Context) -> Result<bool, Error> {
        Ok(self.house(ctx).await?.is_available)
    }

    /// URLs of this `House` images.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "House.images",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn images(&self, ctx: &Context) -> Result<Vec<Url>, Error> {
        Ok(self
            .house(ctx)
            .await?
            .images
            .iter()
            .cloned()
            .map(Into::into)
            .collect())
    }

    /// Description of this `House`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "House.description",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn description(
        &self,
        ctx: &Context,
    ) -> Result<Description, Error> {
        Ok(self.house(ctx).await?.description.clone().into())
    }

    /// Amenities of this `House`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "House.amenities",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn amenities(&self, ctx: &Context) -> Result<Vec<Amenity>, Error> {
        Ok(self
            .house(ctx)
            .await?
            .amenities
            .iter()
            .cloned()
            .map(Into::into)
            .collect())
    }

    /// Contact phone of this `House` owner.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "House.contactPhone",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn contact_phone(
        &self,
        ctx: &Context,
    ) -> Result<api::user::Phone, Error> {
        Ok(self.house(ctx).await?.contact_phone.clone().into())
    }

    /// WhatsApp phone of this `House` owner.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "House.whatsappNumber",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn whatsapp_number(
        &self,
        ctx: &Context,
    ) -> Result<api::user::Phone, Error> {
        Ok(self.house(ctx).await?.whatsapp_number.clone().into())
    }

    /// Map location of this `House`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "House.location",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn location(&self, ctx: &Context) -> Result<Location, Error> {
        Ok(self.house(ctx).await?.location.into())
    }

    /// Indicator whether this `House` is a favorite of the current `User`.
    ///
    /// Always `false` without an authenticated `User` session.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "House.isFavorite",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn is_favorite(&self, ctx: &Context) -> Result<bool, Error> {
        let Some(user_id) = ctx
            .try_current_session()
            .await?
            .and_then(|s| s.principal.user_id())
        else {
            return Ok(false);
        };

        Ok(ctx
            .service()
            .execute(query::user::ById::by(user_id))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .is_some_and(|u| u.favorites.contains(self.id.into())))
    }

    /// Discounts of this `House`, in creation order.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "House.discounts",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn discounts(
        &self,
        ctx: &Context,
    ) -> Result<Vec<api::Discount>, Error> {
        ctx.service()
            .execute(query::discounts::OfHouse::by(self.id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|ds| ds.into_iter().map(Into::into).collect())
    }

    /// Reviews of this `House`, newest first.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "House.reviews",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn reviews(
        &self,
        ctx: &Context,
    ) -> Result<Vec<api::Review>, Error> {
        ctx.service()
            .execute(query::reviews::OfHouse::by(self.id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|rs| rs.into_iter().map(Into::into).collect())
    }

    /// Aggregated rating statistics of this `House`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "House.ratingStats",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn rating_stats(
        &self,
        ctx: &Context,
    ) -> Result<api::review::RatingStats, Error> {
        ctx.service()
            .execute(query::review::RatingStats {
                house_id: self.id.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// `DateTime` when this `House` was created.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "House.createdAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn created_at(&self, ctx: &Context) -> Result<DateTime, Error> {
        Ok(self.house(ctx).await?.created_at.coerce())
    }

    /// `DateTime` when this `House` was updated last time.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "House.updatedAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn updated_at(
        &self,
        ctx: &Context,
    ) -> Result<Option<DateTime>, Error> {
        Ok(self.house(ctx).await?.updated_at.map(|at| at.coerce()))
    }
}

/// Unique identifier of a `House`.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, GraphQLScalar, Into, PartialEq,
)]
#[from(domain::house::Id)]
#[into(domain::house::Id)]
#[graphql(name = "HouseId", transparent)]
pub struct Id(Uuid);

/// Title of a `House`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "HouseTitle",
    with = scalar::Via::<domain::house::Title>,
)]
pub struct Title(domain::house::Title);

/// Area a `House` is located in.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "HouseArea",
    with = scalar::Via::<domain::house::Area>,
)]
pub struct Area(domain::house::Area);

/// City a `House` is located in.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "HouseCity",
    with = scalar::Via::<domain::house::City>,
)]
pub struct City(domain::house::City);

/// URL of an external resource.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "Url",
    with = scalar::Via::<domain::house::Url>,
)]
pub struct Url(domain::house::Url);

/// Description of a `House`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "HouseDescription",
    with = scalar::Via::<domain::house::Description>,
)]
pub struct Description(domain::house::Description);

/// Single amenity of a `House`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "HouseAmenity",
    with = scalar::Via::<domain::house::Amenity>,
)]
pub struct Amenity(domain::house::Amenity);

/// Map location of a `House`.
#[derive(Clone, Copy, Debug, GraphQLObject)]
#[graphql(name = "HouseLocation")]
pub struct Location {
    /// Latitude of the location, in degrees.
    pub latitude: f64,

    /// Longitude of the location, in degrees.
    pub longitude: f64,
}

impl From<domain::house::Location> for Location {
    fn from(location: domain::house::Location) -> Self {
        let domain::house::Location {
            latitude,
            longitude,
        } = location;
        Self {
            latitude,
            longitude,
        }
    }
}

/// Map location input of a `House`.
#[derive(Clone, Copy, Debug, juniper::GraphQLInputObject)]
#[graphql(name = "HouseLocationInput")]
pub struct LocationInput {
    /// Latitude of the location, in degrees.
    pub latitude: f64,

    /// Longitude of the location, in degrees.
    pub longitude: f64,
}

impl From<LocationInput> for domain::house::Location {
    fn from(location: LocationInput) -> Self {
        let LocationInput {
            latitude,
            longitude,
        } = location;
        Self {
            latitude,
            longitude,
        }
    }
}

pub mod list {
    //! Definitions related to the [`House`] list.

    use derive_more::{AsRef, From, Into};
    use juniper::{graphql_object, GraphQLScalar};
    use service::{query, read, Query as _};

    use super::{Id, House};
    use crate::{api::scalar, AsError, Context, Error};

    /// Cursor for the `House` list.
    #[derive(AsRef, Clone, Copy, Debug, From, GraphQLScalar, Into)]
    #[from(Id, read::house::list::Cursor)]
    #[graphql(
        name = "HouseListCursor",
        with = scalar::Via::<read::house::list::Cursor>,
    )]
    pub struct Cursor(pub read::house::list::Cursor);

    /// Edge in the [`House`] list.
    #[derive(Clone, Copy, Debug, From, Into)]
    pub struct Edge(read::house::list::Edge);

    /// Edge in the `House` list.
    #[graphql_object(name = "HouseListEdge", context = Context)]
    impl Edge {
        /// Cursor of this `HouseListEdge`.
        #[must_use]
        pub fn cursor(&self) -> Cursor {
            self.0.cursor.into()
        }

        /// Node of this `HouseListEdge`.
        #[must_use]
        pub fn node(&self) -> House {
            #[expect(
                unsafe_code,
                reason = "`Edge` loaded from repository guarantees `House` \
                          existence"
            )]
            unsafe {
                House::new_unchecked(self.0.node)
            }
        }
    }

    /// Connection of the [`House`] list.
    #[derive(Clone, Debug)]
    pub struct Connection {
        /// Underlying [`read::house::list::Connection`].
        conn: read::house::list::Connection,

        /// Filter this [`Connection`] was selected with.
        filter: read::house::list::Filter,
    }

    impl From<(read::house::list::Connection, read::house::list::Filter)>
        for Connection
    {
        fn from(
            (conn, filter): (
                read::house::list::Connection,
                read::house::list::Filter,
            ),
        ) -> Self {
            Self { conn, filter }
        }
    }

    /// Connection of the `House` list.
    #[graphql_object(name = "HouseListConnection", context = Context)]
    impl Connection {
        /// Edges of this `HouseListConnection`.
        #[must_use]
        pub fn edges(&self) -> Vec<Edge> {
            self.conn.edges.iter().copied().map(Into::into).collect()
        }

        /// Information about the page.
        #[must_use]
        pub fn page_info(&self) -> PageInfo {
            PageInfo {
                info: self.conn.page_info(),
                start_cursor: self.conn.edges.first().map(|e| e.cursor.into()),
                end_cursor: self.conn.edges.last().map(|e| e.cursor.into()),
                filter: self.filter.clone(),
            }
        }
    }

    /// Information about a [`Connection`] page.
    #[derive(Clone, Debug)]
    pub struct PageInfo {
        /// Underlying [`read::house::list::PageInfo`].
        info: read::house::list::PageInfo,

        /// Start cursor of the page.
        start_cursor: Option<Cursor>,

        /// End cursor of the page.
        end_cursor: Option<Cursor>,

        /// Filter the page was selected with.
        filter: read::house::list::Filter,
    }

    /// Information about a `HouseListConnection` page.
    #[graphql_object(name = "HouseListPageInfo", context = Context)]
    impl PageInfo {
        /// Indicator whether there is a next page.
        #[must_use]
        pub fn has_next_page(&self) -> bool {
            self.info.has_next_page
        }

        /// Indicator whether there is a previous page.
        #[must_use]
        pub fn has_previous_page(&self) -> bool {
            self.info.has_previous_page
        }

        /// Start cursor of the page.
        #[must_use]
        pub fn start_cursor(&self) -> &Option<Cursor> {
            &self.start_cursor
        }

        /// End cursor of the page.
        #[must_use]
        pub fn end_cursor(&self) -> &Option<Cursor> {
            &self.end_cursor
        }

        /// Total count of `House`s matching the filter.
        pub async fn total_count(&self, ctx: &Context) -> Result<i32, Error> {
            ctx.service()
                .execute(query::houses::TotalCount::by(self.filter.clone()))
                .await
                .map_err(AsError::into_error)
                .map_err(ctx.error())
                .map(Into::into)
        }
    }
}
