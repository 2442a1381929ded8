//! [`User`]-related definitions.

use std::future;

use common::{DateTime, Handler as _};
use derive_more::{AsRef, Display, From, Into};
use futures::TryFutureExt as _;
use juniper::graphql_object;
use juniper::GraphQLScalar;
use service::{domain, query};
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::{api, api::scalar, AsError, Context, Error};

/// Platform user.
#[derive(Clone, Debug, From)]
pub struct User {
    /// ID of this [`User`].
    id: Id,

    /// Underlying [`domain::User`].
    user: OnceCell<domain::User>,
}

impl From<domain::User> for User {
    fn from(user: domain::User) -> Self {
        Self {
            id: user.id.into(),
            user: OnceCell::new_with(Some(user)),
        }
    }
}

impl User {
    /// Creates a new [`User`] with the provided ID.
    ///
    /// # Safety
    ///
    /// Caller must ensure that [`User`] with the provided ID exists,
    /// otherwise accessing this [`User`] will result with an error.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            user: OnceCell::new(),
        }
    }

    /// Returns the underlying [`domain::User`].
    ///
    /// # Errors
    ///
    /// Errors if the [`domain::User`] doesn't exist.
    async fn user(&self, ctx: &Context) -> Result<&domain::User, Error> {
        let id = self.id.into();
        self.user
            .get_or_try_init(|| {
                ctx.service()
                    .execute(query::user::ById::by(id))
                    .map_err(AsError::into_error)
                    .map_err(ctx.error())
                    .and_then(|u| {
                        future::ready(u.ok_or_else(|| {
                            api::query::UserError::NotExists.into()
                        }))
                    })
            })
            .await
    }
}

/// Platform user.
#[graphql_object(context = Context)]
impl User {
    /// Unique identifier of this `User`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "User.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Display name of this `User`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "User.name",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn name(&self, ctx: &Context) -> Result<Name, Error> {
        Ok(self.user(ctx).await?.name.clone().into())
    }

    /// Email this `User` logs in with.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "User.email",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn email(&self, ctx: &Context) -> Result<Email, Error> {
        Ok(self.user(ctx).await?.email.clone().into())
    }

    /// `House`s this `User` marked as favorite, in insertion order.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "User.favorites",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn favorites(
        &self,
        ctx: &Context,
    ) -> Result<Vec<api::House>, Error> {
        Ok(self
            .user(ctx)
            .await?
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

    /// `DateTime` when this `User` was created.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "User.createdAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn created_at(&self, ctx: &Context) -> Result<DateTime, Error> {
        Ok(self.user(ctx).await?.created_at.coerce())
    }
}

/// Unique identifier of a `User`.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, GraphQLScalar, Into, PartialEq,
)]
#[from(domain::user::Id)]
#[into(domain::user::Id)]
#[graphql(name = "UserId", transparent)]
pub struct Id(Uuid);

/// Display name of a `User`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "UserName",
    with = scalar::Via::<domain::user::Name>,
)]
pub struct Name(domain::user::Name);

/// Email address of a `User`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "UserEmail",
    with = scalar::Via::<domain::user::Email>,
)]
pub struct Email(domain::user::Email);

/// Password of a `User`.
#[derive(AsRef, Clone, Debug, From, GraphQLScalar, Into)]
#[graphql(
    name = "UserPassword",
    with = scalar::Via::<domain::user::Password>,
)]
pub struct Password(domain::user::Password);

/// Phone number.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "Phone",
    with = scalar::Via::<domain::user::Phone>,
)]
pub struct Phone(domain::user::Phone);

pub mod session {
    //! Definitions related to a [`User`]'s session.

    use common::DateTime;
    use derive_more::{AsRef, From, Into};
    use juniper::graphql_object;
    use juniper::GraphQLScalar;
    use service::{command, domain};

    use super::User;
    use crate::{api::scalar, Context};

    /// Access token of a session.
    #[derive(AsRef, Clone, Debug, From, GraphQLScalar, Into)]
    #[graphql(
        name = "SessionToken",
        with = scalar::Via::<domain::session::Token>,
    )]
    pub struct Token(domain::session::Token);

    /// Result of a `User` session creation.
    #[derive(Clone, Debug)]
    pub struct CreateResult {
        /// [`Token`] of the created session.
        token: Token,

        /// [`User`] the session was created for.
        user: User,

        /// [`DateTime`] when the session expires.
        expires_at: DateTime,
    }

    impl From<command::create_user_session::Output> for CreateResult {
        fn from(output: command::create_user_session::Output) -> Self {
            Self {
                token: output.token.into(),
                user: output.user.into(),
                expires_at: output.expires_at.coerce(),
            }
        }
    }

    /// Result of a `User` session creation.
    #[graphql_object(name = "UserSession", context = Context)]
    impl CreateResult {
        /// Access token of the created session.
        #[must_use]
        pub fn token(&self) -> &Token {
            &self.token
        }

        /// `User` the session was created for.
        #[must_use]
        pub fn user(&self) -> &User {
            &self.user
        }

        /// `DateTime` when the session expires.
        #[must_use]
        pub fn expires_at(&self) -> DateTime {
            self.expires_at
        }
    }
}
