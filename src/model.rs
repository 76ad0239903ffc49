use std::iter::Sum;
use std::ops::{Add, AddAssign};

use ordered_float::OrderedFloat;

/// Cost of travelling along a link, measured in minutes.
///
/// Costs are expected to be non-negative, negative values are accepted but the cheapest
/// route is then no longer the shortest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cost(OrderedFloat<f64>);

impl Cost {
    pub const ZERO: Self = Self(OrderedFloat(0.0));
    pub const MAX: Self = Self(OrderedFloat(f64::INFINITY));

    pub const fn from_minutes(minutes: f64) -> Self {
        Self(OrderedFloat(minutes))
    }

    pub const fn minutes(&self) -> f64 {
        self.0.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.0 == 0.0
    }
}

impl Add for Cost {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Cost {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Cost {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |total, cost| total + cost)
    }
}
