//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In binary floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  And integer cents are not enough either:                           │
//! │    half price of $32.95 = $16.475  → sub-cent amounts exist         │
//! │    until the final truncation step                                  │
//! │                                                                     │
//! │  OUR SOLUTION: rust_decimal                                         │
//! │    Exact decimal arithmetic end to end; the charged total is        │
//! │    truncated to whole cents exactly once, at the very end           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::money::Money;
//! use rust_decimal_macros::dec;
//!
//! let price = Money::new(dec!(32.95));
//!
//! // Arithmetic operations stay exact
//! let pair = price * 2;                       // $65.90
//! let discounted = pair - price.half();       // $65.90 - $16.475
//!
//! // Truncation happens once, at presentation time
//! assert_eq!(discounted.truncate_to_cents(), Money::new(dec!(49.42)));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value as an exact decimal amount.
///
/// ## Design Decisions
/// - **`Decimal` (signed)**: Allows negative values for discounts and
///   aggressive offer combinations
/// - **Single field tuple struct**: Zero-cost abstraction over `Decimal`
/// - **Derives**: Full serde support; serializes as a string so no reader
///   can reintroduce float error
///
/// EVERY monetary value in the system flows through this type: product
/// prices, line totals, discounts, delivery charges, basket totals.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from an exact decimal amount.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let price = Money::new(dec!(10.99));
    /// assert_eq!(price.amount(), dec!(10.99));
    /// ```
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Returns half of this amount, exactly.
    ///
    /// Half of an odd number of cents is a sub-cent amount and stays exact:
    ///
    /// ```rust
    /// use checkout_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let price = Money::new(dec!(32.95));
    /// assert_eq!(price.half(), Money::new(dec!(16.475)));
    /// ```
    #[inline]
    pub fn half(&self) -> Self {
        Money(self.0 / Decimal::TWO)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let unit_price = Money::new(dec!(2.99));
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total, Money::new(dec!(8.97)));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * Decimal::from(qty))
    }

    /// Truncates to two decimal places, toward zero.
    ///
    /// Truncation — not rounding — guarantees the charged amount never
    /// exceeds the exact computed value:
    ///
    /// ```rust
    /// use checkout_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// assert_eq!(
    ///     Money::new(dec!(12.897)).truncate_to_cents(),
    ///     Money::new(dec!(12.89)) // never 12.90
    /// );
    /// assert_eq!(
    ///     Money::new(dec!(-12.897)).truncate_to_cents(),
    ///     Money::new(dec!(-12.89)) // toward zero, not toward -infinity
    /// );
    /// ```
    #[inline]
    pub fn truncate_to_cents(&self) -> Self {
        Money(self.0.trunc_with_scale(2))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and the CLI runner. Use dedicated formatting for
/// actual UI display to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}${:.2}", sign, self.0.abs())
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

/// Summation of Money iterators (subtotals, discounts).
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
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_and_amount() {
        let money = Money::new(dec!(10.99));
        assert_eq!(money.amount(), dec!(10.99));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::new(dec!(10.99))), "$10.99");
        assert_eq!(format!("{}", Money::new(dec!(5))), "$5.00");
        assert_eq!(format!("{}", Money::new(dec!(-5.50))), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(dec!(10.00));
        let b = Money::new(dec!(5.00));

        assert_eq!(a + b, Money::new(dec!(15.00)));
        assert_eq!(a - b, Money::new(dec!(5.00)));
        assert_eq!(a * 3, Money::new(dec!(30.00)));

        let mut c = a;
        c += b;
        assert_eq!(c, Money::new(dec!(15.00)));
        c -= b;
        assert_eq!(c, a);
    }

    #[test]
    fn test_half_keeps_sub_cent_precision() {
        // Half of an odd cent amount must not be truncated mid-pipeline
        let price = Money::new(dec!(32.95));
        assert_eq!(price.half(), Money::new(dec!(16.475)));
    }

    #[test]
    fn test_truncate_to_cents_never_rounds_up() {
        assert_eq!(
            Money::new(dec!(12.897)).truncate_to_cents(),
            Money::new(dec!(12.89))
        );
        assert_eq!(
            Money::new(dec!(54.375)).truncate_to_cents(),
            Money::new(dec!(54.37))
        );
        // Already-exact values pass through unchanged
        assert_eq!(
            Money::new(dec!(37.85)).truncate_to_cents(),
            Money::new(dec!(37.85))
        );
    }

    #[test]
    fn test_truncate_toward_zero_for_negative_values() {
        assert_eq!(
            Money::new(dec!(-12.897)).truncate_to_cents(),
            Money::new(dec!(-12.89))
        );
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::new(dec!(1.00));
        assert!(positive.is_positive());

        let negative = Money::new(dec!(-1.00));
        assert!(negative.is_negative());
        assert_eq!(negative.abs(), positive);
    }

    #[test]
    fn test_sum() {
        let amounts = [
            Money::new(dec!(7.95)),
            Money::new(dec!(24.95)),
            Money::new(dec!(32.95)),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total, Money::new(dec!(65.85)));

        let empty: Money = std::iter::empty::<Money>().sum();
        assert_eq!(empty, Money::zero());
    }
}
