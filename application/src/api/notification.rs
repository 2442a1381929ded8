//! [`Notification`]-related definitions.

use common::DateTime;
use derive_more::{AsRef, Display, From, Into};
use juniper::graphql_object;
use juniper::{GraphQLEnum, GraphQLScalar};
use service::domain;
use uuid::Uuid;

use crate::{api, api::scalar, Context};

/// Message delivered to a `User` or an `Admin`.
#[derive(Clone, Debug, From)]
pub struct Notification(domain::Notification);

/// Message delivered to a `User` or an `Admin`.
#[graphql_object(context = Context)]
impl Notification {
    /// Unique identifier of this `Notification`.
    #[must_use]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// Kind of this `Notification`.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.0.kind.into()
    }

    /// Title of this `Notification`.
    #[must_use]
    pub fn title(&self) -> Title {
        self.0.title.clone().into()
    }

    /// Message of this `Notification`.
    #[must_use]
    pub fn message(&self) -> Message {
        self.0.message.clone().into()
    }

    /// Indicator whether the recipient has read this `Notification`.
    #[must_use]
    pub fn is_read(&self) -> bool {
        self.0.is_read
    }

    /// `Booking` this `Notification` relates to, if any.
    #[must_use]
    pub fn booking(&self) -> Option<api::Booking> {
        self.0.booking_id.map(|id| {
            #[expect(
                unsafe_code,
                reason = "`Notification` only refers an existing `Booking`"
            )]
            unsafe {
                api::Booking::new_unchecked(id)
            }
        })
    }

    /// `DateTime` when this `Notification` was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }
}

/// Unique identifier of a `Notification`.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, GraphQLScalar, Into, PartialEq,
)]
#[from(domain::notification::Id)]
#[into(domain::notification::Id)]
#[graphql(name = "NotificationId", transparent)]
pub struct Id(Uuid);

/// Kind of a `Notification`.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
#[graphql(name = "NotificationKind")]
pub enum Kind {
    /// A `Booking` was cancelled.
    BookingCancelled,

    /// A `Booking` was confirmed.
    BookingConfirmed,

    /// A discount was applied to a `Booking`.
    DiscountApplied,

    /// Anything else.
    General,
}

impl From<domain::notification::Kind> for Kind {
    fn from(kind: domain::notification::Kind) -> Self {
        use domain::notification::Kind as K;

        match kind {
            K::BookingCancelled => Self::BookingCancelled,
            K::BookingConfirmed => Self::BookingConfirmed,
            K::DiscountApplied => Self::DiscountApplied,
            K::General => Self::General,
        }
    }
}

/// Title of a `Notification`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "NotificationTitle",
    with = scalar::Via::<domain::notification::Title>,
)]
pub struct Title(domain::notification::Title);

/// Message of a `Notification`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "NotificationMessage",
    with = scalar::Via::<domain::notification::Message>,
)]
pub struct Message(domain::notification::Message);
