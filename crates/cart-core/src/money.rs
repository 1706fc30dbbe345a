//! # Money Module
//!
//! Provides the `Money` type for monetary values in the cart.
//!
//! ## Decimal Amounts
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  MONEY IN cartkit                                                       │
//! │                                                                         │
//! │  Amounts are simple floating decimals in a single implicit currency.    │
//! │  Percentage discounts may be any number (12.5%, -5%, 150%), so the      │
//! │  value must be able to hold fractional and negative results.            │
//! │                                                                         │
//! │  Rounding happens ONLY at display time: two decimal places.             │
//! │    Money::new(1845.0)   → "$1845.00"                                   │
//! │    Money::new(-12.5)    → "-$12.50"                                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cart_core::money::Money;
//!
//! let price = Money::new(10.99);
//!
//! // Arithmetic operations
//! let doubled = price * 2;
//! let total = price + Money::new(5.0);
//! assert_eq!(total.to_string(), "$15.99");
//! assert_eq!(doubled.to_string(), "$21.98");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::DEFAULT_CURRENCY_SYMBOL;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount.
///
/// ## Design Decisions
/// - **f64**: discounts are arbitrary percentages, amounts may go negative
/// - **Single field tuple struct**: zero-cost wrapper, serializes as a bare number
/// - **No currency field**: one implicit currency; the symbol is a display concern
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► CartItem::line_total() ──► ShoppingCart::calculate_total()
///                                                        │
///                                                        ▼
///                                 DiscountStrategy::apply_discount() ──► checkout
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(f64);

impl Money {
    /// Creates a Money value from a decimal amount.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::Money;
    ///
    /// let price = Money::new(1000.0);
    /// assert_eq!(price.amount(), 1000.0);
    /// ```
    #[inline]
    pub const fn new(amount: f64) -> Self {
        Money(amount)
    }

    /// Returns the raw decimal amount.
    #[inline]
    pub const fn amount(&self) -> f64 {
        self.0
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(0.0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Returns false for NaN and infinities.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::Money;
    ///
    /// let unit_price = Money::new(50.0);
    /// assert_eq!(unit_price.multiply_quantity(3), Money::new(150.0));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty as f64)
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// Computes `amount * (1 - percentage / 100)` with no bounds checking:
    /// a percentage above 100 yields a negative amount, a negative one
    /// increases it.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::Money;
    ///
    /// let subtotal = Money::new(100.0);
    /// assert_eq!(subtotal.apply_percentage_discount(10.0), Money::new(90.0));
    /// ```
    #[inline]
    pub fn apply_percentage_discount(&self, percentage: f64) -> Money {
        Money(self.0 * (1.0 - percentage / 100.0))
    }

    /// Formats the amount with the given currency symbol and two decimals.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::Money;
    ///
    /// assert_eq!(Money::new(12.5).format_with("€"), "€12.50");
    /// assert_eq!(Money::new(-3.0).format_with("£"), "-£3.00");
    /// ```
    pub fn format_with(&self, symbol: &str) -> String {
        let sign = if self.0 < 0.0 { "-" } else { "" };
        format!("{}{}{:.2}", sign, symbol, self.0.abs())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount with the default `$` symbol and two decimals.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(DEFAULT_CURRENCY_SYMBOL))
    }
}

impl From<f64> for Money {
    fn from(amount: f64) -> Self {
        Money(amount)
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

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
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
    fn test_display() {
        assert_eq!(format!("{}", Money::new(10.99)), "$10.99");
        assert_eq!(format!("{}", Money::new(5.0)), "$5.00");
        assert_eq!(format!("{}", Money::new(-5.5)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
        assert_eq!(format!("{}", Money::new(1845.0)), "$1845.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(1000.0);
        let b = Money::new(500.0);

        assert_eq!(a + b, Money::new(1500.0));
        assert_eq!(a - b, Money::new(500.0));
        assert_eq!(a * 3, Money::new(3000.0));
        assert_eq!(-b, Money::new(-500.0));

        let mut c = a;
        c += b;
        c -= Money::new(250.0);
        assert_eq!(c, Money::new(1250.0));
    }

    #[test]
    fn test_sum() {
        let amounts = vec![Money::new(2000.0), Money::new(50.0)];
        let by_ref: Money = amounts.iter().sum();
        let by_value: Money = amounts.into_iter().sum();
        assert_eq!(by_ref, Money::new(2050.0));
        assert_eq!(by_value, Money::new(2050.0));

        let empty: Vec<Money> = Vec::new();
        assert!(empty.into_iter().sum::<Money>().is_zero());
    }

    #[test]
    fn test_percentage_discount_unbounded() {
        let subtotal = Money::new(200.0);
        assert_eq!(subtotal.apply_percentage_discount(0.0), subtotal);
        assert_eq!(subtotal.apply_percentage_discount(100.0), Money::zero());
        assert!(subtotal.apply_percentage_discount(150.0).is_negative());
        assert_eq!(subtotal.apply_percentage_discount(-50.0), Money::new(300.0));
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let negative = Money::new(-1.0);
        assert!(negative.is_negative());
        assert_eq!(negative.abs(), Money::new(1.0));

        assert!(!Money::new(f64::NAN).is_finite());
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_string(&Money::new(12.5)).unwrap();
        assert_eq!(json, "12.5");
        let back: Money = serde_json::from_str("99.99").unwrap();
        assert_eq!(back, Money::new(99.99));
    }
}
