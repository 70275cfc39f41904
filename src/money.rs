//! Currency amounts
//!
//! Prices and totals are held as whole minor units (cents) so that summing
//! line totals never drifts the way floating point does.

use serde::Serialize;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Symbol printed in front of every amount
pub const CURRENCY_SYMBOL: &str = "¥";

/// An amount of money in minor units (2 decimal places)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Whole currency units, e.g. `from_major(12)` is 12.00
    ///
    /// # Panics
    ///
    /// If `units` is outside `i64::MIN / 100..=i64::MAX / 100`.
    pub const fn from_major(units: i64) -> Self {
        match units.checked_mul(100) {
            Some(cents) => Self(cents),
            None => panic!("amount in whole units does not fit in cents"),
        }
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// `None` when the sum does not fit.
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// `None` when `quantity` units of this amount do not fit.
    pub fn checked_mul(self, quantity: u32) -> Option<Money> {
        self.0.checked_mul(i64::from(quantity)).map(Money)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        Money(self.0 * i64::from(quantity))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{CURRENCY_SYMBOL}{}.{:02}", abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_two_decimal_places() {
        assert_eq!(Money::from_major(12).to_string(), "¥12.00");
        assert_eq!(Money::from_cents(905).to_string(), "¥9.05");
        assert_eq!(Money::from_cents(-150).to_string(), "-¥1.50");
        assert_eq!(Money::ZERO.to_string(), "¥0.00");
    }

    #[test]
    fn line_arithmetic_stays_exact() {
        let price = Money::from_cents(1099);
        let total: Money = [price * 3, Money::from_cents(1)].into_iter().sum();
        assert_eq!(total.cents(), 3298);
    }

    #[test]
    fn checked_ops_catch_overflow() {
        let half = Money::from_cents(i64::MAX / 2);
        assert_eq!(half.checked_mul(2), Some(Money::from_cents(i64::MAX - 1)));
        assert_eq!(half.checked_mul(3), None);
        assert_eq!(half.checked_add(half), Some(Money::from_cents(i64::MAX - 1)));
        assert_eq!(half.checked_add(Money::from_cents(i64::MAX)), None);
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn from_major_rejects_out_of_range_units() {
        let _ = Money::from_major(i64::MAX / 10);
    }

    #[test]
    fn serializes_as_minor_units() {
        let value = serde_json::to_value(Money::from_major(7)).unwrap();
        assert_eq!(value, serde_json::json!(700));
    }
}
