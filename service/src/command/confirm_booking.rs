//! [`Command`] for confirming a [`Booking`].

use common::{
    operations::{By, Insert, Select, Update},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{admin, booking, notification, Admin, Booking, Notification},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for confirming a [`Booking`].
#[derive(Clone, Copy, Debug)]
pub struct ConfirmBooking {
    /// ID of the [`Booking`] to confirm.
    pub booking_id: booking::Id,

    /// ID of the [`Admin`] who confirms.
    pub admin_id: admin::Id,
}

impl<Db> Command<ConfirmBooking> for Service<Db>
where
    Db: Database<
            Select<By<Option<Booking>, booking::Id>>,
            Ok = Option<Booking>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Admin>, admin::Id>>,
            Ok = Option<Admin>,
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

    async fn execute(
        &self,
        cmd: ConfirmBooking,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let ConfirmBooking {
            booking_id,
            admin_id,
        } = cmd;

        drop(
            self.database()
                .execute(Select(By::<Option<Admin>, _>::new(admin_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or(E::AdminNotExists(admin_id))
                .map_err(tracerr::wrap!())?,
        );

        let mut booking = self
            .database()
            .execute(Select(By::<Option<Booking>, _>::new(booking_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::BookingNotExists(booking_id))
            .map_err(tracerr::wrap!())?;

        let next = booking::Status::Confirmed;
        if !booking.status.allows_transition_to(next) {
            return Err(tracerr::new!(E::InvalidTransition {
                from: booking.status,
                to: next,
            }));
        }

        booking.status = next;
        self.database()
            .execute(Update(booking.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // SAFETY: both literals are non-empty and within the length limits.
        #[expect(unsafe_code, reason = "invariants are preserved")]
        let (title, message) = unsafe {
            (
                notification::Title::new_unchecked("Booking confirmed"),
                notification::Message::new_unchecked(format!(
                    "Your stay from {} to {} has been confirmed",
                    booking.stay.check_in, booking.stay.check_out,
                )),
            )
        };
        self.database()
            .execute(Insert(Notification {
                id: notification::Id::new(),
                recipient: notification::Recipient::User(booking.user_id),
                kind: notification::Kind::BookingConfirmed,
                title,
                message,
                is_read: false,
                booking_id: Some(booking.id),
                created_at: DateTime::now().coerce(),
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(booking)
    }
}

/// Error of [`ConfirmBooking`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Admin`] with the provided ID does not exist.
    #[display("`Admin(id: {_0})` does not exist")]
    #[from(ignore)]
    AdminNotExists(#[error(not(source))] admin::Id),

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
}
