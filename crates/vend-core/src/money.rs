//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    A $10 discount over 3 items = 1000 cents / 3 = 333 cents each        │
//! │    (×3 = 999 cents) → we KNOW we lost 1 cent                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vend_core::money::Money;
//!
//! let price = Money::from_cents(1099); // $10.99
//! let total = price * 2 + Money::from_cents(500);
//! assert_eq!(total.cents(), 2698);
//!
//! // Discounts arrive in whole dollars
//! let discount = Money::from_dollars(10);
//! assert_eq!(discount.cents(), 1000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: a discounted price may drop below zero
/// - **Single field tuple struct**: serializes as a bare JSON integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use vend_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units (dollars).
    ///
    /// ## Example
    /// ```rust
    /// use vend_core::money::Money;
    ///
    /// assert_eq!(Money::from_dollars(10).cents(), 1000);
    /// ```
    #[inline]
    pub const fn from_dollars(dollars: i64) -> Self {
        Money(dollars * 100)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Like [`Money::from_dollars`], but `None` if the cent amount does not
    /// fit in an `i64`.
    #[inline]
    pub const fn checked_from_dollars(dollars: i64) -> Option<Self> {
        match dollars.checked_mul(100) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Checked addition. `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Money(v)),
            None => None,
        }
    }

    /// Checked subtraction. `None` on overflow.
    #[inline]
    pub const fn checked_sub(self, other: Money) -> Option<Money> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Money(v)),
            None => None,
        }
    }

    /// Checked multiplication by a quantity. `None` on overflow.
    #[inline]
    pub const fn checked_mul(self, qty: i64) -> Option<Money> {
        match self.0.checked_mul(qty) {
            Some(v) => Some(Money(v)),
            None => None,
        }
    }

    /// Splits the amount into `parts` equal shares using truncating division.
    ///
    /// Returns `None` when `parts` is zero. The remainder is dropped:
    ///
    /// ```rust
    /// use vend_core::money::Money;
    ///
    /// let share = Money::from_cents(1000).split_evenly(3).unwrap();
    /// assert_eq!(share.cents(), 333); // 1 cent is lost
    /// assert!(Money::from_cents(1000).split_evenly(0).is_none());
    /// ```
    pub fn split_evenly(&self, parts: usize) -> Option<Money> {
        if parts == 0 {
            return None;
        }
        let parts = i64::try_from(parts).ok()?;
        Some(Money(self.0 / parts))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================
//
// The operators below use plain `i64` arithmetic. Sale totals go through the
// `checked_*` methods instead, since prices are only bounded below.

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs. Clients receive raw cents.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_dollars() {
        assert_eq!(Money::from_dollars(10).cents(), 1000);
        assert_eq!(Money::from_dollars(0).cents(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);

        let mut c = a;
        c += b;
        c -= Money::from_cents(100);
        assert_eq!(c.cents(), 1400);
    }

    #[test]
    fn test_sum() {
        let amounts = [Money::from_cents(100), Money::from_cents(250)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 350);

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_serializes_as_integer() {
        let json = serde_json::to_string(&Money::from_cents(1099)).unwrap();
        assert_eq!(json, "1099");
        let back: Money = serde_json::from_str("250").unwrap();
        assert_eq!(back, Money::from_cents(250));
    }

    /// $10.00 split three ways loses a cent; callers live with it.
    #[test]
    fn test_split_evenly_truncates() {
        let ten_dollars = Money::from_dollars(10);
        let share = ten_dollars.split_evenly(3).unwrap();
        assert_eq!(share.cents(), 333);

        let lost = ten_dollars - share * 3;
        assert_eq!(lost.cents(), 1);
    }

    #[test]
    fn test_checked_arithmetic() {
        let max = Money::from_cents(i64::MAX);

        assert_eq!(
            Money::from_cents(1000).checked_add(Money::from_cents(1)),
            Some(Money::from_cents(1001))
        );
        assert_eq!(max.checked_add(Money::from_cents(1)), None);
        assert_eq!(Money::from_cents(i64::MIN).checked_sub(Money::from_cents(1)), None);
        assert_eq!(max.checked_mul(2), None);
        assert_eq!(Money::from_cents(250).checked_mul(4), Some(Money::from_cents(1000)));
    }

    #[test]
    fn test_checked_from_dollars() {
        assert_eq!(Money::checked_from_dollars(-10), Some(Money::from_cents(-1000)));
        assert_eq!(Money::checked_from_dollars(i64::MAX / 100 + 1), None);
        assert_eq!(Money::checked_from_dollars(i64::MIN), None);
    }

    #[test]
    fn test_split_evenly_by_zero() {
        assert_eq!(Money::from_dollars(10).split_evenly(0), None);
    }
}
