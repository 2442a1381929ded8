//! [`Booking`] definitions.

#[cfg(doc)]
use common::Date;
use common::{unit, DateOf, DateTime, DateTimeOf, Money};
use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{admin, house, user};

/// Reservation of a [`House`] for a [`Stay`].
///
/// [`House`]: crate::domain::House
#[derive(Clone, Debug, Deserialize, From, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// ID of this [`Booking`].
    pub id: Id,

    /// ID of the booked [`House`].
    ///
    /// [`House`]: crate::domain::House
    pub house_id: house::Id,

    /// ID of the [`User`] who booked.
    ///
    /// [`User`]: crate::domain::User
    pub user_id: user::Id,

    /// [`Stay`] this [`Booking`] reserves.
    #[serde(flatten)]
    pub stay: Stay,

    /// Number of guests staying.
    pub guests: Guests,

    /// Total price of this [`Booking`], with any discount applied.
    pub total_price: Money,

    /// Total price before the discount, if one was applied.
    pub original_price: Option<Money>,

    /// Amount subtracted by the discount, if one was applied.
    pub discount_amount: Option<Money>,

    /// Current [`Status`] of this [`Booking`].
    pub status: Status,

    /// [`DateTime`] when this [`Booking`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,

    /// [`Cancellation`] record, if this [`Booking`] was cancelled.
    pub cancellation: Option<Cancellation>,
}

impl Booking {
    /// Minimum number of whole days before check-in allowing a [`User`] to
    /// cancel their [`Booking`].
    ///
    /// [`User`]: crate::domain::User
    pub const CANCELLATION_NOTICE_DAYS: i64 = 7;

    /// Returns whether this [`Booking`] still occupies its [`Stay`].
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status != Status::Cancelled
    }

    /// Returns whether the [`User`] who made this [`Booking`] may still
    /// cancel it at the provided moment.
    ///
    /// Cancellation is allowed while more than
    /// [`CANCELLATION_NOTICE_DAYS`] whole days (rounded up) remain until
    /// check-in. A cancelled [`Booking`] cannot be cancelled again.
    ///
    /// [`CANCELLATION_NOTICE_DAYS`]: Booking::CANCELLATION_NOTICE_DAYS
    /// [`User`]: crate::domain::User
    #[must_use]
    pub fn is_cancellable_by_owner(&self, now: DateTime) -> bool {
        if !self.is_active() {
            return false;
        }

        /// Number of seconds in a whole day.
        const DAY: i64 = 24 * 60 * 60;

        let check_in = self.stay.check_in.midnight().unix_timestamp();
        let seconds = check_in - now.unix_timestamp();
        // `/` truncates toward zero, so only a positive remainder needs a
        // bump to reach the ceiling.
        let days = seconds / DAY + i64::from(seconds % DAY > 0);
        days > Self::CANCELLATION_NOTICE_DAYS
    }
}

/// ID of a [`Booking`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Status of a [`Booking`].
#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// [`Booking`] is made, but not confirmed yet.
    #[display("pending")]
    Pending,

    /// [`Booking`] is confirmed by an [`Admin`].
    ///
    /// [`Admin`]: crate::domain::Admin
    #[display("confirmed")]
    Confirmed,

    /// [`Booking`] is cancelled. Terminal.
    #[display("cancelled")]
    Cancelled,
}

impl Status {
    /// Returns whether a [`Booking`] may move from this [`Status`] into the
    /// provided one.
    #[must_use]
    pub fn allows_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Confirmed | Self::Cancelled)
                | (Self::Confirmed, Self::Cancelled),
        )
    }
}

/// Half-open period of nights a [`Booking`] occupies: the check-in night is
/// occupied, the check-out day is free.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stay {
    /// [`Date`] of checking in.
    pub check_in: StayDate,

    /// [`Date`] of checking out.
    pub check_out: StayDate,
}

impl Stay {
    /// Creates a new [`Stay`] if the provided check-out [`Date`] is strictly
    /// after the check-in one.
    #[must_use]
    pub fn new(check_in: StayDate, check_out: StayDate) -> Option<Self> {
        (check_out > check_in).then_some(Self {
            check_in,
            check_out,
        })
    }

    /// Returns the number of nights this [`Stay`] occupies.
    #[expect(
        clippy::missing_panics_doc,
        reason = "`check_out > check_in` is an invariant"
    )]
    #[must_use]
    pub fn nights(&self) -> u32 {
        (self.check_out - self.check_in)
            .whole_days()
            .try_into()
            .expect("`check_out > check_in` is an invariant")
    }

    /// Returns whether this [`Stay`] occupies any night also occupied by the
    /// `other` one.
    ///
    /// Sharing only a boundary date (back-to-back stays) is not an overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }
}

/// [`Date`] of a [`Stay`] boundary.
pub type StayDate = DateOf<Stay>;

/// Number of guests of a [`Booking`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Guests(u16);

/// Record of a [`Booking`] cancellation.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cancellation {
    /// [`DateTime`] when the [`Booking`] was cancelled.
    ///
    /// [`DateTime`]: common::DateTime
    pub at: CancellationDateTime,

    /// Who cancelled the [`Booking`].
    pub by: Canceller,

    /// Optional reason of the cancellation.
    pub reason: Option<Reason>,
}

/// Party who cancelled a [`Booking`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase", tag = "role", content = "id")]
pub enum Canceller {
    /// [`Booking`] was cancelled by the [`User`] who made it.
    ///
    /// [`User`]: crate::domain::User
    User(user::Id),

    /// [`Booking`] was cancelled by an [`Admin`].
    ///
    /// [`Admin`]: crate::domain::Admin
    Admin(admin::Id),
}

/// Reason of a [`Booking`] cancellation.
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[as_ref(str, String)]
pub struct Reason(String);

impl Reason {
    /// Creates a new [`Reason`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `reason` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }

    /// Creates a new [`Reason`] if the given `reason` is valid.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Option<Self> {
        let reason = reason.into();
        Self::check(&reason).then_some(Self(reason))
    }

    /// Checks whether the given `reason` is a valid [`Reason`].
    fn check(reason: impl AsRef<str>) -> bool {
        let reason = reason.as_ref();
        !reason.trim().is_empty() && reason.len() <= 1024
    }
}

impl FromStr for Reason {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Reason`")
    }
}

/// [`DateTime`] when a [`Booking`] was created.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(Booking, unit::Creation)>;

/// [`DateTime`] when a [`Booking`] was cancelled.
///
/// [`DateTime`]: common::DateTime
pub type CancellationDateTime = DateTimeOf<(Booking, unit::Cancellation)>;

#[cfg(test)]
mod spec {
    use common::{DateTime, Money};

    use super::{house, user, Booking, Guests, Id, Status, Stay, StayDate};

    fn date(s: &str) -> StayDate {
        StayDate::from_iso8601(s).unwrap()
    }

    fn stay(check_in: &str, check_out: &str) -> Stay {
        Stay::new(date(check_in), date(check_out)).unwrap()
    }

    fn booking(check_in: &str, check_out: &str, status: Status) -> Booking {
        Booking {
            id: Id::new(),
            house_id: house::Id::new(),
            user_id: user::Id::new(),
            stay: stay(check_in, check_out),
            guests: Guests::from(2),
            total_price: "360USD".parse::<Money>().unwrap(),
            original_price: None,
            discount_amount: None,
            status,
            created_at: DateTime::UNIX_EPOCH.coerce(),
            cancellation: None,
        }
    }

    #[test]
    fn stay_rejects_non_positive_length() {
        assert!(Stay::new(date("2026-07-10"), date("2026-07-10")).is_none());
        assert!(Stay::new(date("2026-07-10"), date("2026-07-09")).is_none());
    }

    #[test]
    fn counts_nights() {
        assert_eq!(stay("2026-07-10", "2026-07-12").nights(), 2);
        assert_eq!(stay("2026-07-10", "2026-07-11").nights(), 1);
    }

    #[test]
    fn exact_match_overlaps() {
        let existing = stay("2026-07-10", "2026-07-15");
        assert!(stay("2026-07-10", "2026-07-15").overlaps(&existing));
    }

    #[test]
    fn back_to_back_does_not_overlap() {
        let existing = stay("2026-07-10", "2026-07-15");
        assert!(!stay("2026-07-15", "2026-07-20").overlaps(&existing));
        assert!(!stay("2026-07-05", "2026-07-10").overlaps(&existing));
    }

    #[test]
    fn partial_overlaps_are_detected() {
        let existing = stay("2026-07-10", "2026-07-15");
        // Starts inside.
        assert!(stay("2026-07-12", "2026-07-20").overlaps(&existing));
        // Ends inside.
        assert!(stay("2026-07-05", "2026-07-12").overlaps(&existing));
        // Contains.
        assert!(stay("2026-07-05", "2026-07-20").overlaps(&existing));
        // Contained.
        assert!(stay("2026-07-11", "2026-07-14").overlaps(&existing));
    }

    #[test]
    fn owner_can_cancel_eight_days_ahead() {
        let b = booking("2026-07-10", "2026-07-15", Status::Pending);
        let now = DateTime::from_rfc3339("2026-07-02T00:00:00Z").unwrap();
        assert!(b.is_cancellable_by_owner(now));
    }

    #[test]
    fn partial_day_counts_as_whole() {
        let b = booking("2026-07-10", "2026-07-15", Status::Pending);
        // 7.5 days until check-in round up to 8.
        let now = DateTime::from_rfc3339("2026-07-02T12:00:00Z").unwrap();
        assert!(b.is_cancellable_by_owner(now));
    }

    #[test]
    fn owner_cannot_cancel_seven_days_ahead() {
        let b = booking("2026-07-10", "2026-07-15", Status::Pending);
        let now = DateTime::from_rfc3339("2026-07-03T00:00:00Z").unwrap();
        assert!(!b.is_cancellable_by_owner(now));
    }

    #[test]
    fn owner_cannot_cancel_past_check_in() {
        let b = booking("2026-07-10", "2026-07-15", Status::Confirmed);
        let now = DateTime::from_rfc3339("2026-07-11T12:00:00Z").unwrap();
        assert!(!b.is_cancellable_by_owner(now));
    }

    #[test]
    fn cancelled_is_terminal() {
        let b = booking("2026-07-10", "2026-07-15", Status::Cancelled);
        let now = DateTime::from_rfc3339("2026-01-01T00:00:00Z").unwrap();
        assert!(!b.is_cancellable_by_owner(now));

        assert!(!Status::Cancelled.allows_transition_to(Status::Pending));
        assert!(!Status::Cancelled.allows_transition_to(Status::Confirmed));
    }

    #[test]
    fn status_transitions() {
        assert!(Status::Pending.allows_transition_to(Status::Confirmed));
        assert!(Status::Pending.allows_transition_to(Status::Cancelled));
        assert!(Status::Confirmed.allows_transition_to(Status::Cancelled));
        assert!(!Status::Confirmed.allows_transition_to(Status::Pending));
    }
}
