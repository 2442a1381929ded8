//! [`Booking`]-related definitions.

use std::future;

use common::{Date, DateTime, Handler as _, Money};
use derive_more::{AsRef, Display, From, Into};
use futures::TryFutureExt as _;
use juniper::graphql_object;
use juniper::{GraphQLEnum, GraphQLScalar};
use service::{domain, query};
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::{api, api::scalar, AsError, Context, Error};

/// Reservation of a `House` for a stay.
#[derive(Clone, Debug, From)]
pub struct Booking {
    /// ID of this [`Booking`].
    id: Id,

    /// Underlying [`domain::Booking`].
    booking: OnceCell<domain::Booking>,
}

impl From<domain::Booking> for Booking {
    fn from(booking: domain::Booking) -> Self {
        Self {
            id: booking.id.into(),
            booking: OnceCell::new_with(Some(booking)),
        }
    }
}

impl Booking {
    /// Creates a new [`Booking`] with the provided ID.
    ///
    /// # Safety
    ///
    /// Caller must ensure that [`Booking`] with the provided ID exists,
    /// otherwise accessing this [`Booking`] will result with an error.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            booking: OnceCell::new(),
        }
    }

    /// Returns the underlying [`domain::Booking`].
    ///
    /// # Errors
    ///
    /// Errors if the [`domain::Booking`] doesn't exist.
    async fn booking(&self, ctx: &Context) -> Result<&domain::Booking, Error> {
        let id = self.id.into();
        self.booking
            .get_or_try_init(|| {
                ctx.service()
                    .execute(query::booking::ById::by(id))
                    .map_err(AsError::into_error)
                    .map_err(ctx.error())
                    .and_then(|b| {
                        future::ready(b.ok_or_else(|| {
                            api::query::BookingError::NotExists.into()
                        }))
                    })
            })
            .await
    }
}

/// Reservation of a `House` for a stay.
#[graphql_object(context = Context)]
impl Booking {
    /// Unique identifier of this `Booking`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Booked `House`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.house",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn house(&self, ctx: &Context) -> Result<api::House, Error> {
        let house_id = self.booking(ctx).await?.house_id;
        #[expect(
            unsafe_code,
            reason = "`Booking` always refers an existing `House`"
        )]
        Ok(unsafe { api::House::new_unchecked(house_id) })
    }

    /// `User` who booked.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.user",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn user(&self, ctx: &Context) -> Result<api::User, Error> {
        let user_id = self.booking(ctx).await?.user_id;
        #[expect(
            unsafe_code,
            reason = "`Booking` always refers an existing `User`"
        )]
        Ok(unsafe { api::User::new_unchecked(user_id) })
    }

    /// `Date` of checking in.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.checkIn",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn check_in(&self, ctx: &Context) -> Result<Date, Error> {
        Ok(self.booking(ctx).await?.stay.check_in.coerce())
    }

    /// `Date` of checking out.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.checkOut",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn check_out(&self, ctx: &Context) -> Result<Date, Error> {
        Ok(self.booking(ctx).await?.stay.check_out.coerce())
    }

    /// Number of guests staying.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.guests",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn guests(&self, ctx: &Context) -> Result<i32, Error> {
        Ok(u16::from(self.booking(ctx).await?.guests).into())
    }

    /// Total price of this `Booking`, with any discount applied.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.totalPrice",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn total_price(&self, ctx: &Context) -> Result<Money, Error> {
        Ok(self.booking(ctx).await?.total_price)
    }

    /// Total price before the discount, if one was applied.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.originalPrice",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn original_price(
        &self,
        ctx: &Context,
    ) -> Result<Option<Money>, Error> {
        Ok(self.booking(ctx).await?.original_price)
    }

    /// Amount subtracted by the discount, if one was applied.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.discountAmount",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn discount_amount(
        &self,
        ctx: &Context,
    ) -> Result<Option<Money>, Error> {
        Ok(self.booking(ctx).await?.discount_amount)
    }

    /// Current status of this `Booking`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.status",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn status(&self, ctx: &Context) -> Result<Status, Error> {
        Ok(self.booking(ctx).await?.status.into())
    }

    /// Cancellation record, if this `Booking` was cancelled.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.cancellation",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn cancellation(
        &self,
        ctx: &Context,
    ) -> Result<Option<Cancellation>, Error> {
        Ok(self.booking(ctx).await?.cancellation.clone().map(Into::into))
    }

    /// `DateTime` when this `Booking` was created.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.createdAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn created_at(&self, ctx: &Context) -> Result<DateTime, Error> {
        Ok(self.booking(ctx).await?.created_at.coerce())
    }
}

/// Unique identifier of a `Booking`.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, GraphQLScalar, Into, PartialEq,
)]
#[from(domain::booking::Id)]
#[into(domain::booking::Id)]
#[graphql(name = "BookingId", transparent)]
pub struct Id(Uuid);

/// Status of a `Booking`.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
#[graphql(name = "BookingStatus")]
pub enum Status {
    /// `Booking` is made, but not confirmed yet.
    Pending,

    /// `Booking` is confirmed by an `Admin`.
    Confirmed,

    /// `Booking` is cancelled.
    Cancelled,
}

impl From<domain::booking::Status> for Status {
    fn from(status: domain::booking::Status) -> Self {
        match status {
            domain::booking::Status::Pending => Self::Pending,
            domain::booking::Status::Confirmed => Self::Confirmed,
            domain::booking::Status::Cancelled => Self::Cancelled,
        }
    }
}

/// Record of a `Booking` cancellation.
#[derive(Clone, Debug, From)]
pub struct Cancellation(domain::booking::Cancellation);

/// Record of a `Booking` cancellation.
#[graphql_object(name = "BookingCancellation", context = Context)]
impl Cancellation {
    /// `DateTime` when the `Booking` was cancelled.
    #[must_use]
    pub fn at(&self) -> DateTime {
        self.0.at.coerce()
    }

    /// Who cancelled the `Booking`.
    #[must_use]
    pub fn by(&self) -> CancelledBy {
        match self.0.by {
            domain::booking::Canceller::User(_) => CancelledBy::User,
            domain::booking::Canceller::Admin(_) => CancelledBy::Admin,
        }
    }

    /// Reason of the cancellation, if one was given.
    #[must_use]
    pub fn reason(&self) -> Option<Reason> {
        self.0.reason.clone().map(Into::into)
    }
}

/// Party who cancelled a `Booking`.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
#[graphql(name = "BookingCancelledBy")]
pub enum CancelledBy {
    /// `Booking` was cancelled by the `User` who made it.
    User,

    /// `Booking` was cancelled by an `Admin`.
    Admin,
}

/// Reason of a `Booking` cancellation.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "BookingCancellationReason",
    with = scalar::Via::<domain::booking::Reason>,
)]
pub struct Reason(domain::booking::Reason);
