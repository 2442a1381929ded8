//! [`Discount`] definitions.

#[cfg(doc)]
use common::Date;
use common::{unit, DateOf, DateTimeOf, Money, Percent};
use derive_more::{Display, From, FromStr, Into};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{admin, house};

/// Price reduction applied to a [`House`] within a [`Period`].
///
/// [`House`]: crate::domain::House
#[derive(Clone, Debug, Deserialize, From, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    /// ID of this [`Discount`].
    pub id: Id,

    /// ID of the [`House`] this [`Discount`] applies to.
    ///
    /// [`House`]: crate::domain::House
    pub house_id: house::Id,

    /// [`Amount`] of this [`Discount`].
    #[serde(flatten)]
    pub amount: Amount,

    /// Inclusive [`Period`] this [`Discount`] is effective within.
    #[serde(flatten)]
    pub period: Period,

    /// Indicator whether this [`Discount`] is currently active.
    pub is_active: bool,

    /// ID of the [`Admin`] who created this [`Discount`].
    ///
    /// [`Admin`]: crate::domain::Admin
    pub created_by: admin::Id,

    /// [`DateTime`] when this [`Discount`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}

impl Discount {
    /// Returns whether this [`Discount`] applies on the provided [`Date`].
    #[must_use]
    pub fn applies_on(&self, date: PeriodDate) -> bool {
        self.is_active && self.period.contains(date)
    }
}

/// ID of a [`Discount`].
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
    PartialEq,
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

/// Amount of a [`Discount`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum Amount {
    /// Percentage taken off the base price.
    Percentage(Percent),

    /// Fixed sum taken off the base price, clamped at zero.
    Fixed(Money),
}

impl Amount {
    /// Applies this [`Amount`] to the provided base price.
    ///
    /// The result is rounded to the nearest whole currency unit and never
    /// goes below zero.
    #[must_use]
    pub fn apply_to(self, base: Money) -> Money {
        let amount = match self {
            Self::Percentage(pct) => {
                base.amount
                    * (Decimal::ONE - pct.value() / Decimal::ONE_HUNDRED)
            }
            Self::Fixed(sum) => (base.amount - sum.amount).max(Decimal::ZERO),
        };
        Money {
            amount,
            currency: base.currency,
        }
        .rounded()
    }
}

/// Inclusive [`Date`] period a [`Discount`] is effective within.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    /// First [`Date`] the [`Discount`] applies on.
    pub start_date: PeriodDate,

    /// Last [`Date`] the [`Discount`] applies on.
    pub end_date: PeriodDate,
}

impl Period {
    /// Creates a new [`Period`] if the provided end [`Date`] is not before
    /// the start one.
    #[must_use]
    pub fn new(start_date: PeriodDate, end_date: PeriodDate) -> Option<Self> {
        (end_date >= start_date).then_some(Self {
            start_date,
            end_date,
        })
    }

    /// Returns whether this [`Period`] contains the provided [`Date`]
    /// (boundaries included).
    #[must_use]
    pub fn contains(&self, date: PeriodDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Returns whether this [`Period`] shares any [`Date`] with the `other`
    /// one.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_date <= other.end_date && other.start_date <= self.end_date
    }

    /// Returns whether this [`Period`] is entirely over before the provided
    /// [`Date`].
    #[must_use]
    pub fn has_ended_before(&self, date: PeriodDate) -> bool {
        self.end_date < date
    }
}

/// [`Date`] boundary of a [`Period`].
pub type PeriodDate = DateOf<Period>;

/// [`DateTime`] when a [`Discount`] was created.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(Discount, unit::Creation)>;

#[cfg(test)]
mod spec {
    use common::{Money, Percent};

    use super::{Amount, Period, PeriodDate};

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    fn date(s: &str) -> PeriodDate {
        PeriodDate::from_iso8601(s).unwrap()
    }

    #[test]
    fn percentage_takes_share_off() {
        let amount = Amount::Percentage(Percent::new(20.into()).unwrap());
        assert_eq!(amount.apply_to(money("180USD")), money("144USD"));
    }

    #[test]
    fn fixed_subtracts_sum() {
        let amount = Amount::Fixed(money("50USD"));
        assert_eq!(amount.apply_to(money("180USD")), money("130USD"));
    }

    #[test]
    fn fixed_clamps_at_zero() {
        let amount = Amount::Fixed(money("200USD"));
        assert_eq!(amount.apply_to(money("180USD")), money("0USD"));
    }

    #[test]
    fn result_rounds_to_whole_units() {
        let amount = Amount::Percentage(Percent::new(33.into()).unwrap());
        // 150 * 0.67 = 100.5, rounding away from zero.
        assert_eq!(amount.apply_to(money("150USD")), money("101USD"));
    }

    #[test]
    fn period_boundaries_are_inclusive() {
        let period =
            Period::new(date("2026-07-01"), date("2026-07-31")).unwrap();
        assert!(period.contains(date("2026-07-01")));
        assert!(period.contains(date("2026-07-31")));
        assert!(!period.contains(date("2026-06-30")));
        assert!(!period.contains(date("2026-08-01")));
    }

    #[test]
    fn period_overlap_is_inclusive() {
        let period =
            Period::new(date("2026-07-01"), date("2026-07-31")).unwrap();
        let touching =
            Period::new(date("2026-07-31"), date("2026-08-10")).unwrap();
        let disjoint =
            Period::new(date("2026-08-01"), date("2026-08-10")).unwrap();
        assert!(period.overlaps(&touching));
        assert!(!period.overlaps(&disjoint));
    }
}
