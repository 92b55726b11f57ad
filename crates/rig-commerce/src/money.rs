//! Money type for component and configuration prices.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues. The shop prices everything in a single currency,
//! so no currency tag is carried.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A monetary amount in cents.
///
/// The component price tables are quoted in whole currency units, so most
/// values are built with [`Money::from_units`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money {
    cents: i64,
}

impl Money {
    /// Create a Money value from cents.
    pub const fn new(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a Money value from whole currency units.
    pub const fn from_units(units: i64) -> Self {
        Self { cents: units * 100 }
    }

    /// The zero amount.
    pub const fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Amount in cents.
    pub const fn cents(&self) -> i64 {
        self.cents
    }

    /// Check if this is zero.
    pub const fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Check if this is negative.
    pub const fn is_negative(&self) -> bool {
        self.cents < 0
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.abs();
        format!("{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.cents + other.cents)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::new(self.cents - other.cents)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.cents += other.cents;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Money) {
        self.cents -= other.cents;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
