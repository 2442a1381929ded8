//! [`Review`]-related read definitions.

use rust_decimal::Decimal;

use crate::domain::{house, review};
#[cfg(doc)]
use crate::domain::{House, Review};

/// Aggregated rating statistics of a [`House`], derived from its
/// [`Review`]s.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RatingStats {
    /// Average [`Rating`], rounded to one decimal place.
    ///
    /// [`Rating`]: house::Rating
    pub average: house::Rating,

    /// Total number of [`Review`]s.
    pub total: u32,

    /// Number of [`Review`]s per star value.
    pub distribution: Distribution,
}

impl RatingStats {
    /// Collects [`RatingStats`] from the provided [`Review`] ratings.
    #[expect(
        clippy::missing_panics_doc,
        reason = "average of `1..=5` values is in the `0.0..=5.0` range"
    )]
    #[must_use]
    pub fn collect(ratings: impl IntoIterator<Item = review::Rating>) -> Self {
        let mut distribution = Distribution::default();
        let mut total = 0u32;
        let mut sum = 0u32;
        for rating in ratings {
            distribution.record(rating);
            total += 1;
            sum += u32::from(rating.u8());
        }

        let average = if total == 0 {
            house::Rating::default()
        } else {
            house::Rating::new(
                (Decimal::from(sum) / Decimal::from(total)).round_dp(1),
            )
            .expect("average of `1..=5` values is in the `0.0..=5.0` range")
        };

        Self {
            average,
            total,
            distribution,
        }
    }
}

/// Number of [`Review`]s per star value.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Distribution([u32; 5]);

impl Distribution {
    /// Records one more [`Review`] with the provided [`Rating`].
    ///
    /// [`Rating`]: review::Rating
    pub fn record(&mut self, rating: review::Rating) {
        self.0[usize::from(rating.u8() - 1)] += 1;
    }

    /// Returns the number of [`Review`]s with the provided [`Rating`].
    ///
    /// [`Rating`]: review::Rating
    #[must_use]
    pub fn of(&self, rating: review::Rating) -> u32 {
        self.0[usize::from(rating.u8() - 1)]
    }
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use super::{house, review, RatingStats};

    fn rating(val: u8) -> review::Rating {
        review::Rating::new(val).unwrap()
    }

    #[test]
    fn averages_to_one_decimal() {
        let stats = RatingStats::collect([rating(5), rating(4), rating(4)]);

        // 13 / 3 = 4.333..., rounded to one decimal place.
        let expected = house::Rating::new("4.3".parse::<Decimal>().unwrap())
            .unwrap();
        assert_eq!(stats.average, expected);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.distribution.of(rating(4)), 2);
        assert_eq!(stats.distribution.of(rating(5)), 1);
        assert_eq!(stats.distribution.of(rating(1)), 0);
    }

    #[test]
    fn empty_is_zero() {
        let stats = RatingStats::collect([]);
        assert_eq!(stats, RatingStats::default());
    }
}
