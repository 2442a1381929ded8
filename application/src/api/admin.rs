//! [`Admin`]-related definitions.

use std::future;

use common::{DateTime, Handler as _};
use derive_more::{AsRef, Display, From, Into};
use futures::TryFutureExt as _;
use juniper::graphql_object;
use juniper::{GraphQLEnum, GraphQLScalar};
use service::{domain, query};
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::{api, api::scalar, AsError, Context, Error};

/// Administrator of the platform.
#[derive(Clone, Debug, From)]
pub struct Admin {
    /// ID of this [`Admin`].
    id: Id,

    /// Underlying [`domain::Admin`].
    admin: OnceCell<domain::Admin>,
}

impl From<domain::Admin> for Admin {
    fn from(admin: domain::Admin) -> Self {
        Self {
            id: admin.id.into(),
            admin: OnceCell::new_with(Some(admin)),
        }
    }
}

impl Admin {
    /// Creates a new [`Admin`] with the provided ID.
    ///
    /// # Safety
    ///
    /// Caller must ensure that [`Admin`] with the provided ID exists,
    /// otherwise accessing this [`Admin`] will result with an error.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            admin: OnceCell::new(),
        }
    }

    /// Returns the underlying [`domain::Admin`].
    ///
    /// # Errors
    ///
    /// Errors if the [`domain::Admin`] doesn't exist.
    async fn admin(&self, ctx: &Context) -> Result<&domain::Admin, Error> {
        let id = self.id.into();
        self.admin
            .get_or_try_init(|| {
                ctx.service()
                    .execute(query::admin::ById::by(id))
                    .map_err(AsError::into_error)
                    .map_err(ctx.error())
                    .and_then(|a| {
                        future::ready(a.ok_or_else(|| {
                            api::query::AdminError::NotExists.into()
                        }))
                    })
            })
            .await
    }
}

/// Administrator of the platform.
#[graphql_object(context = Context)]
impl Admin {
    /// Unique identifier of this `Admin`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Admin.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Username this `Admin` logs in with.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Admin.username",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn username(&self, ctx: &Context) -> Result<Username, Error> {
        Ok(self.admin(ctx).await?.username.clone().into())
    }

    /// Email of this `Admin`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Admin.email",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn email(&self, ctx: &Context) -> Result<api::user::Email, Error> {
        Ok(self.admin(ctx).await?.email.clone().into())
    }

    /// Role of this `Admin`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Admin.role",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn role(&self, ctx: &Context) -> Result<Role, Error> {
        Ok(self.admin(ctx).await?.role.into())
    }

    /// `DateTime` when this `Admin` was created.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Admin.createdAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn created_at(&self, ctx: &Context) -> Result<DateTime, Error> {
        Ok(self.admin(ctx).await?.created_at.coerce())
    }
}

/// Unique identifier of an `Admin`.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, GraphQLScalar, Into, PartialEq,
)]
#[from(domain::admin::Id)]
#[into(domain::admin::Id)]
#[graphql(name = "AdminId", transparent)]
pub struct Id(Uuid);

/// Username of an `Admin`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "AdminUsername",
    with = scalar::Via::<domain::admin::Username>,
)]
pub struct Username(domain::admin::Username);

/// Role of an `Admin`.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
#[graphql(name = "AdminRole")]
pub enum Role {
    /// Regular administrator.
    Admin,

    /// Administrator allowed to manage other `Admin`s.
    SuperAdmin,
}

impl From<domain::admin::Role> for Role {
    fn from(role: domain::admin::Role) -> Self {
        match role {
            domain::admin::Role::Admin => Self::Admin,
            domain::admin::Role::SuperAdmin => Self::SuperAdmin,
        }
    }
}

impl From<Role> for domain::admin::Role {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => Self::Admin,
            Role::SuperAdmin => Self::SuperAdmin,
        }
    }
}

pub mod session {
    //! Definitions related to an [`Admin`]'s session.

    use common::DateTime;
    use juniper::graphql_object;
    use service::command;

    use super::Admin;
    use crate::{api::user::session::Token, Context};

    /// Result of an `Admin` session creation.
    #[derive(Clone, Debug)]
    pub struct CreateResult {
        /// [`Token`] of the created session.
        token: Token,

        /// [`Admin`] the session was created for.
        admin: Admin,

        /// [`DateTime`] when the session expires.
        expires_at: DateTime,
    }

    impl From<command::create_admin_session::Output> for CreateResult {
        fn from(output: command::create_admin_session::Output) -> Self {
            Self {
                token: output.token.into(),
                admin: output.admin.into(),
                expires_at: output.expires_at.coerce(),
            }
        }
    }

    /// Result of an `Admin` session creation.
    #[graphql_object(name = "AdminSession", context = Context)]
    impl CreateResult {
        /// Access token of the created session.
        #[must_use]
        pub fn token(&self) -> &Token {
            &self.token
        }

        /// `Admin` the session was created for.
        #[must_use]
        pub fn admin(&self) -> &Admin {
            &self.admin
        }

        /// `DateTime` when the session expires.
        #[must_use]
        pub fn expires_at(&self) -> DateTime {
            self.expires_at
        }
    }
}
