//! [`Review`]-related definitions.

use common::DateTime;
use derive_more::{AsRef, Display, From, Into};
use juniper::graphql_object;
use juniper::GraphQLScalar;
use service::{domain, read};
use uuid::Uuid;

use crate::{api, api::scalar, Context};

/// Review left by a `User` for a `House` they stayed in.
#[derive(Clone, Debug, From)]
pub struct Review(domain::Review);

/// Review left by a `User` for a `House` they stayed in.
#[graphql_object(context = Context)]
impl Review {
    /// Unique identifier of this `Review`.
    #[must_use]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// Reviewed `House`.
    #[must_use]
    pub fn house(&self) -> api::House {
        #[expect(
            unsafe_code,
            reason = "`Review` always refers an existing `House`"
        )]
        unsafe {
            api::House::new_unchecked(self.0.house_id)
        }
    }

    /// `User` who left this `Review`.
    #[must_use]
    pub fn user(&self) -> api::User {
        #[expect(
            unsafe_code,
            reason = "`Review` always refers an existing `User`"
        )]
        unsafe {
            api::User::new_unchecked(self.0.user_id)
        }
    }

    /// Display name of the author, captured at creation time.
    #[must_use]
    pub fn author_name(&self) -> api::user::Name {
        self.0.author_name.clone().into()
    }

    /// Star rating given by this `Review`, in the `1..=5` range.
    #[must_use]
    pub fn rating(&self) -> i32 {
        self.0.rating.u8().into()
    }

    /// Title of this `Review`.
    #[must_use]
    pub fn title(&self) -> Title {
        self.0.title.clone().into()
    }

    /// Comment of this `Review`.
    #[must_use]
    pub fn comment(&self) -> Comment {
        self.0.comment.clone().into()
    }

    /// `DateTime` when this `Review` was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }

    /// `DateTime` when this `Review` was updated last time.
    #[must_use]
    pub fn updated_at(&self) -> Option<DateTime> {
        self.0.updated_at.map(|at| at.coerce())
    }
}

/// Unique identifier of a `Review`.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, GraphQLScalar, Into, PartialEq,
)]
#[from(domain::review::Id)]
#[into(domain::review::Id)]
#[graphql(name = "ReviewId", transparent)]
pub struct Id(Uuid);

/// Title of a `Review`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "ReviewTitle",
    with = scalar::Via::<domain::review::Title>,
)]
pub struct Title(domain::review::Title);

/// Comment of a `Review`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "ReviewComment",
    with = scalar::Via::<domain::review::Comment>,
)]
pub struct Comment(domain::review::Comment);

/// Aggregated rating statistics of a `House`, derived from its `Review`s.
#[derive(Clone, Copy, Debug, From)]
pub struct RatingStats(read::review::RatingStats);

/// Aggregated rating statistics of a `House`, derived from its `Review`s.
#[graphql_object(context = Context)]
impl RatingStats {
    /// Average rating, rounded to one decimal place, as a decimal string.
    #[must_use]
    pub fn average(&self) -> String {
        self.0.average.to_string()
    }

    /// Total number of `Review`s.
    #[must_use]
    pub fn total(&self) -> i32 {
        i32::try_from(self.0.total).unwrap_or(i32::MAX)
    }

    /// Number of `Review`s per star value, from one star to five.
    #[must_use]
    pub fn distribution(&self) -> Vec<i32> {
        (1..=5)
            .filter_map(domain::review::Rating::new)
            .map(|r| i32::try_from(self.0.distribution.of(r)).unwrap_or(i32::MAX))
            .collect()
    }
}
