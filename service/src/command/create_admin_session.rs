//! [`Command`] for creating an [`Admin`]'s [`Session`].

use std::time::Duration;

use common::{
    operations::{By, Select},
    DateTime,
};
use derive_more::{Display, Error, From};
use secrecy::{ExposeSecret, SecretBox};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::{admin::Username, session::Token, user::Password};
use crate::{
    domain::{admin, session, user, Admin, Session},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating an [`Admin`]'s [`Session`].
#[derive(Clone, Debug, From)]
pub enum CreateAdminSession {
    /// Create a new [`Session`] by [`Admin`] credentials.
    ByCredentials {
        /// [`Username`] of an [`Admin`].
        username: admin::Username,

        /// [`Password`] of an [`Admin`].
        password: SecretBox<user::Password>,
    },

    /// Create a new [`Session`] by [`Admin`] ID.
    ByAdminId(admin::Id),
}

impl CreateAdminSession {
    /// [`Duration`] of [`Session`] expiration.
    const EXPIRATION_DURATION: Duration = Duration::from_secs(24 * 60 * 60);
}

/// Output of [`CreateAdminSession`] [`Command`].
#[derive(Clone, Debug)]
pub struct Output {
    /// [`Token`] of the created [`Session`].
    pub token: session::Token,

    /// [`Admin`] whose [`Session`] has been created.
    pub admin: Admin,

    /// [`DateTime`] when the [`Session`] expires.
    ///
    /// [`DateTime`]: common::DateTime
    pub expires_at: session::ExpirationDateTime,
}

impl<Db> Command<CreateAdminSession> for Service<Db>
where
    Db: Database<
            Select<By<Option<Admin>, admin::Id>>,
            Ok = Option<Admin>,
            Err = Traced<database::Error>,
        > + for<'l> Database<
            Select<By<Option<Admin>, &'l admin::Username>>,
            Ok = Option<Admin>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateAdminSession,
    ) -> Result<Self::Ok, Self::Err> {
        use CreateAdminSession as Cmd;
        use ExecutionError as E;

        let admin = match cmd {
            Cmd::ByCredentials { username, password } => {
                let admin = self
                    .database()
                    .execute(Select(By::new(&username)))
                    .await
                    .map_err(tracerr::map_from_and_wrap!(=> E))?
                    .ok_or_else(|| E::WrongCredentials)
                    .map_err(tracerr::wrap!())?;

                let matches = admin
                    .password_hash
                    .verify(password.expose_secret())
                    .map_err(tracerr::from_and_wrap!(=> E))?;
                if !matches {
                    return Err(tracerr::new!(E::WrongCredentials));
                }

                admin
            }
            Cmd::ByAdminId(admin_id) => self
                .database()
                .execute(Select(By::new(admin_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or_else(|| E::AdminNotExists(admin_id))
                .map_err(tracerr::wrap!())?,
        };

        let expires_at = (DateTime::now() + Cmd::EXPIRATION_DURATION).coerce();
        let token = jsonwebtoken::encode::<Session>(
            &jsonwebtoken::Header::default(),
            &Session {
                principal: session::Principal::Admin(admin.id),
                expires_at,
            },
            &self.config.jwt_encoding_key,
        )
        .map_err(tracerr::from_and_wrap!(=> E))?;

        // SAFETY: `jsonwebtoken::encode` always returns a valid
        //         `session::Token`.
        #[expect(unsafe_code, reason = "invariants are preserved")]
        let token = unsafe { session::Token::new_unchecked(token) };

        Ok(Output {
            token,
            admin,
            expires_at,
        })
    }
}

/// Error of [`CreateAdminSession`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Admin`] with the provided ID does not exist.
    #[display("`Admin(id: {_0})` does not exist")]
    #[from(ignore)]
    AdminNotExists(#[error(not(source))] admin::Id),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`jsonwebtoken`] encoding error.
    #[display("Failed to encode a JSON Web Token: {_0}")]
    JsonWebTokenEncodeError(jsonwebtoken::errors::Error),

    /// Failed to verify the provided [`Password`] against the stored hash.
    #[display("Failed to verify the provided password: {_0}")]
    PasswordHash(bcrypt::BcryptError),

    /// [`CreateAdminSession::ByCredentials`] contains wrong credentials.
    #[display("Wrong `Admin` credentials")]
    WrongCredentials,
}
