use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

use num_traits::{Bounded, Zero};

/// The score of an alignment.
///
/// Higher scores are better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Score(i64);

impl Score {
    pub const MIN: Score = Score(i64::MIN);
    pub const ZERO: Score = Score(0);

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for Score {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Add for Score {
    type Output = Score;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.checked_add(rhs.0).unwrap())
    }
}

impl AddAssign for Score {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Score {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl Zero for Score {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Bounded for Score {
    fn min_value() -> Self {
        Self::MIN
    }

    fn max_value() -> Self {
        Self(i64::MAX)
    }
}

impl core::fmt::Display for Score {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::Score;

    #[test]
    fn sum_of_scores() {
        let total: Score = [4i64, -4, 9, 6].into_iter().map(Score::from).sum();
        assert_eq!(total, 15.into());
        assert_eq!(std::iter::empty::<Score>().sum::<Score>(), Score::ZERO);
    }

    #[test]
    fn display_respects_width() {
        assert_eq!(format!("{: >3}", Score::from(-4)), " -4");
        assert_eq!(format!("{}", Score::from(11)), "11");
    }
}
