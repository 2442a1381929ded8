//! GraphQL [`Query`]s definitions.

use common::Date;
use juniper::graphql_object;
use service::{domain, query, read, Query as _};

use crate::{api, define_error, AsError, Context, Error};

/// Root of all GraphQL queries.
#[derive(Clone, Copy, Debug)]
pub struct Query;

impl Query {
    /// Name of the [`tracing::Span`] for the queries.
    pub(crate) const SPAN_NAME: &'static str = "GraphQL query";
}

#[graphql_object(context = Context)]
impl Query {
    /// Returns the `House` with the specified ID.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "house",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn house(
        id: api::house::Id,
        ctx: &Context,
    ) -> Result<Option<api::House>, Error> {
        ctx.service()
            .execute(query::house::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|h| h.map(Into::into))
    }

    /// Fetches the page of `House`s matching the specified filter.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AMBIGUOUS_PAGINATION_ARGUMENTS` - the pagination arguments are
    ///                                      ambiguous.
    #[tracing::instrument(
        skip_all,
        fields(
            after = ?after,
            area = ?area.as_ref().map(ToString::to_string),
            before = ?before,
            city = ?city.as_ref().map(ToString::to_string),
            first = ?first,
            gql.name = "houses",
            last = ?last,
            only_available = ?only_available,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    #[expect(clippy::too_many_arguments, reason = "GraphQL arguments")]
    pub async fn houses(
        first: Option<i32>,
        after: Option<api::house::list::Cursor>,
        last: Option<i32>,
        before: Option<api::house::list::Cursor>,
        area: Option<api::house::Area>,
        city: Option<api::house::City>,
        min_price: Option<common::Money>,
        max_price: Option<common::Money>,
        only_available: Option<bool>,
        ctx: &Context,
    ) -> Result<api::house::list::Connection, Error> {
        const DEFAULT_PAGE_SIZE: i32 = 20;

        let arguments = read::house::list::Arguments::new(
            first,
            after.map(Into::into),
            last,
            before.map(Into::into),
            DEFAULT_PAGE_SIZE,
        )
        .ok_or_else(|| api::PaginationError::Ambiguous.into())
        .map_err(ctx.error())?;

        let filter = read::house::list::Filter {
            area: area.map(Into::into),
            city: city.map(Into::into),
            min_price,
            max_price,
            only_available: only_available.unwrap_or(false),
        };

        ctx.service()
            .execute(query::houses::List::by(read::house::list::Selector {
                arguments,
                filter: filter.clone(),
            }))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|page| (page, filter).into())
    }

    /// Checks whether the `House` is free for the specified stay.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_STAY` - the check-out date is not after the check-in one.
    #[tracing::instrument(
        skip_all,
        fields(
            check_in = ?check_in,
            check_out = ?check_out,
            gql.name = "houseAvailability",
            house_id = %house_id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn house_availability(
        house_id: api::house::Id,
        check_in: Date,
        check_out: Date,
        ctx: &Context,
    ) -> Result<bool, Error> {
        let stay =
            domain::booking::Stay::new(check_in.coerce(), check_out.coerce())
                .ok_or_else(|| StayError::Invalid.into())
                .map_err(ctx.error())?;

        ctx.service()
            .execute(query::booking::Availability {
                house_id: house_id.into(),
                stay,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
    }

    /// Prices a single night of the `House` on the specified date (today,
    /// when omitted), with any applicable `Discount` applied.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `HOUSE_NOT_EXISTS` - the `House` with the specified ID does not
    ///                        exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "quote",
            house_id = %house_id,
            on = ?on,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn quote(
        house_id: api::house::Id,
        on: Option<Date>,
        ctx: &Context,
    ) -> Result<api::discount::Quote, Error> {
        let house = ctx
            .service()
            .execute(query::house::ById::by(house_id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| HouseError::NotExists.into())
            .map_err(ctx.error())?;

        ctx.service()
            .execute(query::discount::Quote {
                house_id: house.id,
                base: house.price_per_night,
                on: on.unwrap_or_else(Date::today).coerce(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns the `Discount`s of the specified `House`, in creation order.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "discounts",
            house_id = %house_id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn discounts(
        house_id: api::house::Id,
        ctx: &Context,
    ) -> Result<Vec<api::Discount>, Error> {
        ctx.service()
            .execute(query::discounts::OfHouse::by(house_id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|ds| ds.into_iter().map(Into::into).collect())
    }

    /// Returns the `Review`s of the specified `House`, newest first.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "reviews",
            house_id = %house_id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn reviews(
        house_id: api::house::Id,
        ctx: &Context,
    ) -> Result<Vec<api::Review>, Error> {
        ctx.service()
            .execute(query::reviews::OfHouse::by(house_id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|rs| rs.into_iter().map(Into::into).collect())
    }

    /// Returns the `Review`s left by the currently authenticated `User`,
    /// newest first.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "myReviews",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn my_reviews(ctx: &Context) -> Result<Vec<api::Review>, Error> {
        let my_id = ctx.current_user_id().await?;
        ctx.service()
            .execute(query::reviews::OfUser::by(my_id))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|rs| rs.into_iter().map(Into::into).collect())
    }

    /// Returns the aggregated rating statistics of the specified `House`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "ratingStats",
            house_id = %house_id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn rating_stats(
        house_id: api::house::Id,
        ctx: &Context,
    ) -> Result<api::review::RatingStats, Error> {
        ctx.service()
            .execute(query::review::RatingStats {
                house_id: house_id.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns the `Booking` with the specified ID.
    ///
    /// An authenticated `User` only sees their own `Booking`s, while an
    /// `Admin` sees any.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "booking",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn booking(
        id: api::booking::Id,
        ctx: &Context,
    ) -> Result<Option<api::Booking>, Error> {
        let principal = ctx.current_session().await?.principal;

        let booking = ctx
            .service()
            .execute(query::booking::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?;

        Ok(booking
            .filter(|b| {
                principal
                    .user_id()
                    .is_none_or(|user_id| b.user_id == user_id)
            })
            .map(Into::into))
    }

    /// Returns the `Booking`s of the currently authenticated `User`, newest
    /// first.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "myBookings",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn my_bookings(ctx: &Context) -> Result<Vec<api::Booking>, Error> {
        let my_id = ctx.current_user_id().await?;
        ctx.service()
            .execute(query::bookings::OfUser::by(my_id))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|bs| bs.into_iter().map(Into::into).collect())
    }

    /// Returns all the `Booking`s of the platform, newest first.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `ADMIN_SESSION_REQUIRED` - the current session does not belong to an
    ///                              `Admin`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "bookings",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn bookings(ctx: &Context) -> Result<Vec<api::Booking>, Error> {
        _ = ctx.current_admin_id().await?;
        ctx.service()
            .execute(query::bookings::All::by(()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|bs| bs.into_iter().map(Into::into).collect())
    }

    /// Returns the `Notification`s of the current session owner, newest
    /// first.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "notifications",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn notifications(
        ctx: &Context,
    ) -> Result<Vec<api::Notification>, Error> {
        let recipient = recipient_of(ctx).await?;
        ctx.service()
            .execute(query::notifications::OfRecipient::by(recipient))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|ns| ns.into_iter().map(Into::into).collect())
    }

    /// Returns the number of unread `Notification`s of the current session
    /// owner.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "unreadNotificationsCount",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn unread_notifications_count(
        ctx: &Context,
    ) -> Result<i32, Error> {
        let recipient = recipient_of(ctx).await?;
        ctx.service()
            .execute(query::notifications::UnreadCount::by(recipient))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns the site-wide content settings.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `SITE_SETTINGS_NOT_INITIALIZED` - the settings have not been
    ///                                     initialized yet.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "siteSettings",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn site_settings(
        ctx: &Context,
    ) -> Result<api::SiteSettings, Error> {
        ctx.service()
            .execute(query::site_settings::Get::by(()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| SiteSettingsError::NotInitialized.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns the currently authenticated `User`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `USER_SESSION_REQUIRED` - the current session does not belong to a
    ///                             `User`;
    /// - `USER_NOT_EXISTS` - the `User` of the current session does not exist
    ///                       anymore.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "myUser",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn my_user(ctx: &Context) -> Result<api::User, Error> {
        let my_id = ctx.current_user_id().await?;
        ctx.service()
            .execute(query::user::ById::by(my_id))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| UserError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns the currently authenticated `Admin`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `ADMIN_SESSION_REQUIRED` - the current session does not belong to an
    ///                              `Admin`;
    /// - `ADMIN_NOT_EXISTS` - the `Admin` of the current session does not
    ///                        exist anymore.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "myAdmin",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn my_admin(ctx: &Context) -> Result<api::Admin, Error> {
        let my_id = ctx.current_admin_id().await?;
        ctx.service()
            .execute(query::admin::ById::by(my_id))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| AdminError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns the `House`s the currently authenticated `User` marked as
    /// favorite, in insertion order.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "myFavorites",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn my_favorites(ctx: &Context) -> Result<Vec<api::House>, Error> {
        let my_id = ctx.current_user_id().await?;
        let user = ctx
            .service()
            .execute(query::user::ById::by(my_id))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| UserError::NotExists.into())
            .map_err(ctx.error())?;

        Ok(user
            .favorites
            .as_slice()
            .iter()
            .map(|&id| {
                #[expect(
                    unsafe_code,
                    reason = "favorites only contain existing `House` IDs"
                )]
                unsafe {
                    api::House::new_unchecked(id)
                }
            })
            .collect())
    }
}

/// Resolves the [`Recipient`] matching the current session owner.
///
/// [`Recipient`]: domain::notification::Recipient
async fn recipient_of(
    ctx: &Context,
) -> Result<domain::notification::Recipient, Error> {
    Ok(match ctx.current_session().await?.principal {
        domain::session::Principal::User(id) => {
            domain::notification::Recipient::User(id)
        }
        domain::session::Principal::Admin(id) => {
            domain::notification::Recipient::Admin(id)
        }
    })
}

define_error! {
    enum AdminError {
        #[code = "ADMIN_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Admin` with the specified ID does not exist"]
        NotExists,
    }
}

define_error! {
    enum BookingError {
        #[code = "BOOKING_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Booking` with the specified ID does not exist"]
        NotExists,
    }
}

define_error! {
    enum HouseError {
        #[code = "HOUSE_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`House` with the specified ID does not exist"]
        NotExists,
    }
}

define_error! {
    enum SiteSettingsError {
        #[code = "SITE_SETTINGS_NOT_INITIALIZED"]
        #[status = NOT_FOUND]
        #[message = "`SiteSettings` have not been initialized yet"]
        NotInitialized,
    }
}

define_error! {
    enum StayError {
        #[code = "INVALID_STAY"]
        #[status = BAD_REQUEST]
        #[message = "Check-out date must be after the check-in one"]
        Invalid,
    }
}

define_error! {
    enum UserError {
        #[code = "USER_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`User` with the specified ID does not exist"]
        NotExists,
    }
}
