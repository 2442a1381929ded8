//! [`Command`] for cancelling a [`Booking`].

use common::{
    operations::{By, Insert, Select, Update},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::User;
use crate::{
    domain::{booking, notification, Admin, Booking, Notification},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for cancelling a [`Booking`].
#[derive(Clone, Debug)]
pub struct CancelBooking {
    /// ID of the [`Booking`] to cancel.
    pub booking_id: booking::Id,

    /// Who cancels the [`Booking`].
    pub by: booking::Canceller,

    /// Optional reason of the cancellation.
    pub reason: Option<booking::Reason>,
}

impl<Db> Command<CancelBooking> for Service<Db>
where
    Db: Database<
            Select<By<Option<Booking>, booking::Id>>,
            Ok = Option<Booking>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Admin>, ()>>,
            Ok = Vec<Admin>,
            Err = Traced<database::Error>,
        > + Database<Update<Booking>, Ok = (), Err = Traced<database::Error>>
        + Database<
            Insert<Notification>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    type Ok = Booking;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CancelBooking) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CancelBooking {
            booking_id,
            by,
            reason,
        } = cmd;

        let mut booking = self
            .database()
            .execute(Select(By::<Option<Booking>, _>::new(booking_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::BookingNotExists(booking_id))
            .map_err(tracerr::wrap!())?;

        let next = booking::Status::Cancelled;
        if !booking.status.allows_transition_to(next) {
            return Err(tracerr::new!(E::InvalidTransition {
                from: booking.status,
                to: next,
            }));
        }

        let now = DateTime::now();
        if let booking::Canceller::User(user_id) = by {
            if user_id != booking.user_id {
                return Err(tracerr::new!(E::NotOwner(user_id)));
            }
            if !booking.is_cancellable_by_owner(now) {
                return Err(tracerr::new!(E::NoticePeriodPassed(
                    Booking::CANCELLATION_NOTICE_DAYS,
                )));
            }
        }

        booking.status = next;
        booking.cancellation = Some(booking::Cancellation {
            at: now.coerce(),
            by,
            reason: reason.clone(),
        });
        self.database()
            .execute(Update(booking.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        self.notify(&booking, by).await?;

        Ok(booking)
    }
}

impl<Db> Service<Db> {
    /// Notifies the interested parties about a cancelled [`Booking`].
    ///
    /// An [`Admin`]'s cancellation notifies the [`User`] who booked, while a
    /// [`User`]'s one notifies every [`Admin`].
    async fn notify(
        &self,
        booking: &Booking,
        by: booking::Canceller,
    ) -> Result<(), Traced<ExecutionError>>
    where
        Db: Database<
                Select<By<Vec<Admin>, ()>>,
                Ok = Vec<Admin>,
                Err = Traced<database::Error>,
            > + Database<
                Insert<Notification>,
                Ok = (),
                Err = Traced<database::Error>,
            >,
    {
        use ExecutionError as E;

        let recipients = match by {
            booking::Canceller::Admin(_) => {
                vec![notification::Recipient::User(booking.user_id)]
            }
            booking::Canceller::User(_) => self
                .database()
                .execute(Select(By::<Vec<Admin>, _>::new(())))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .into_iter()
                .map(|a| notification::Recipient::Admin(a.id))
                .collect(),
        };

        for recipient in recipients {
            // SAFETY: both literals are non-empty and within the length
            //         limits.
            #[expect(unsafe_code, reason = "invariants are preserved")]
            let (title, message) = unsafe {
                (
                    notification::Title::new_unchecked("Booking cancelled"),
                    notification::Message::new_unchecked(format!(
                        "Booking from {} to {} has been cancelled",
                        booking.stay.check_in, booking.stay.check_out,
                    )),
                )
            };
            self.database()
                .execute(Insert(Notification {
                    id: notification::Id::new(),
                    recipient,
                    kind: notification::Kind::BookingCancelled,
                    title,
                    message,
                    is_read: false,
                    booking_id: Some(booking.id),
                    created_at: DateTime::now().coerce(),
                }))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?;
        }

        Ok(())
    }
}

/// Error of [`CancelBooking`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Booking`] with the provided ID does not exist.
    #[display("`Booking(id: {_0})` does not exist")]
    #[from(ignore)]
    BookingNotExists(#[error(not(source))] booking::Id),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Booking`] status does not allow the transition.
    #[display("Booking cannot move from `{from}` to `{to}`")]
    InvalidTransition {
        /// Current [`booking::Status`].
        from: booking::Status,

        /// Requested [`booking::Status`].
        to: booking::Status,
    },

    /// Cancellation notice period has already passed.
    #[display("Less than {_0} full days remain until check-in")]
    #[from(ignore)]
    NoticePeriodPassed(#[error(not(source))] i64),

    /// [`User`] cancelling a [`Booking`] they did not make.
    ///
    /// [`User`]: crate::domain::User
    #[display("`User(id: {_0})` does not own the booking")]
    #[from(ignore)]
    NotOwner(#[error(not(source))] crate::domain::user::Id),
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use crate::{
        domain::{admin, user, User},
        infra::Json,
        task, Config,
    };

    use super::*;

    async fn service() -> Service<Json> {
        Service {
            config: Config {
                jwt_encoding_key: jsonwebtoken::EncodingKey::from_secret(
                    b"test",
                ),
                jwt_decoding_key: jsonwebtoken::DecodingKey::from_secret(
                    b"test",
                ),
                deactivate_expired_discounts:
                    task::deactivate_expired_discounts::Config {
                        interval: Duration::from_secs(60 * 60),
                    },
            },
            database: Json::new(None).await.unwrap(),
        }
    }

    fn some_admin() -> Admin {
        let password = user::Password::new("secret-password").unwrap();
        Admin {
            id: admin::Id::new(),
            username: admin::Username::new("operator").unwrap(),
            email: user::Email::new("ops@example.com").unwrap(),
            password_hash: user::PasswordHash::new(&password).unwrap(),
            role: admin::Role::Admin,
            created_at: DateTime::UNIX_EPOCH.coerce(),
        }
    }

    fn some_user() -> User {
        let password = user::Password::new("secret-password").unwrap();
        User {
            id: user::Id::new(),
            email: user::Email::new("aram@example.com").unwrap(),
            name: user::Name::new("Aram").unwrap(),
            password_hash: user::PasswordHash::new(&password).unwrap(),
            favorites: user::Favorites::default(),
            created_at: DateTime::UNIX_EPOCH.coerce(),
        }
    }

    fn far_future_booking(user_id: crate::domain::user::Id) -> Booking {
        let stay = booking::Stay::new(
            booking::StayDate::from_iso8601("2030-07-10").unwrap(),
            booking::StayDate::from_iso8601("2030-07-15").unwrap(),
        )
        .unwrap();
        Booking {
            id: booking::Id::new(),
            house_id: crate::domain::house::Id::new(),
            user_id,
            stay,
            guests: booking::Guests::from(2),
            total_price: "900USD".parse().unwrap(),
            original_price: None,
            discount_amount: None,
            status: booking::Status::Pending,
            created_at: DateTime::UNIX_EPOCH.coerce(),
            cancellation: None,
        }
    }

    async fn notifications_of(
        svc: &Service<Json>,
        recipient: notification::Recipient,
    ) -> Vec<Notification> {
        svc.database()
            .execute(Select(By::<Vec<Notification>, _>::new(recipient)))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn owner_cancellation_notifies_every_admin() {
        let svc = service().await;
        let admin = some_admin();
        let user = some_user();
        let booking = far_future_booking(user.id);
        svc.database().execute(Insert(admin.clone())).await.unwrap();
        svc.database()
            .execute(Insert(booking.clone()))
            .await
            .unwrap();

        let cancelled = svc
            .execute(CancelBooking {
                booking_id: booking.id,
                by: booking::Canceller::User(user.id),
                reason: booking::Reason::new("Change of plans"),
            })
            .await
            .unwrap();

        assert_eq!(cancelled.status, booking::Status::Cancelled);
        assert!(cancelled.cancellation.is_some());

        let inbox =
            notifications_of(&svc, notification::Recipient::Admin(admin.id))
                .await;
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0].kind, notification::Kind::BookingCancelled);
        assert_eq!(inbox[0].booking_id, Some(booking.id));

        let user_inbox =
            notifications_of(&svc, notification::Recipient::User(user.id))
                .await;
        assert!(user_inbox.is_empty());
    }

    #[tokio::test]
    async fn admin_cancellation_notifies_the_owner() {
        let svc = service().await;
        let admin = some_admin();
        let user = some_user();
        let booking = far_future_booking(user.id);
        svc.database().execute(Insert(admin.clone())).await.unwrap();
        svc.database()
            .execute(Insert(booking.clone()))
            .await
            .unwrap();

        svc.execute(CancelBooking {
            booking_id: booking.id,
            by: booking::Canceller::Admin(admin.id),
            reason: None,
        })
        .await
        .unwrap();

        let inbox =
            notifications_of(&svc, notification::Recipient::User(user.id))
                .await;
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0].kind, notification::Kind::BookingCancelled);

        let admin_inbox =
            notifications_of(&svc, notification::Recipient::Admin(admin.id))
                .await;
        assert!(admin_inbox.is_empty());
    }
}
