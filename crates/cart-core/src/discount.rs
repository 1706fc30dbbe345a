//! # Discount Strategies
//!
//! A discount strategy turns a pre-discount total into a post-discount total.
//!
//! ## Strategy Shapes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      DiscountStrategy (trait)                           │
//! │                 apply_discount(total) -> total                          │
//! │                                                                         │
//! │   ┌────────────────────┐  ┌────────────────────┐  ┌─────────────────┐  │
//! │   │ PercentageDiscount │  │  BuyOneGetOneFree  │  │ Discount (enum) │  │
//! │   │ total × (1 - p/100)│  │  total (unchanged) │  │ config-friendly │  │
//! │   └────────────────────┘  └────────────────────┘  │ tagged variant  │  │
//! │                                                    └─────────────────┘  │
//! │                                                                         │
//! │   Checkout calls apply_discount exactly once on the cart total.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cart_core::{DiscountStrategy, Money, PercentageDiscount};
//!
//! let ten_off = PercentageDiscount::new(10.0);
//! assert_eq!(ten_off.apply_discount(Money::new(200.0)), Money::new(180.0));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::validate_percentage;

// =============================================================================
// Strategy Trait
// =============================================================================

/// A pluggable rule applied to the cart total at checkout.
///
/// Implementations must be pure: same input, same output, no side effects.
pub trait DiscountStrategy {
    /// Transforms the pre-discount total into the amount payable.
    fn apply_discount(&self, total: Money) -> Money;

    /// Short human-readable description, used in logs.
    fn label(&self) -> String;
}

// =============================================================================
// Percentage Discount
// =============================================================================

/// Takes a percentage off the total.
///
/// `new` accepts any number: 150 makes the total negative, -10 raises it.
/// Use `try_new` to reject values outside `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentageDiscount {
    percentage: f64,
}

impl PercentageDiscount {
    pub const fn new(percentage: f64) -> Self {
        PercentageDiscount { percentage }
    }

    /// Checked constructor.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::PercentageDiscount;
    ///
    /// assert!(PercentageDiscount::try_new(25.0).is_ok());
    /// assert!(PercentageDiscount::try_new(120.0).is_err());
    /// ```
    pub fn try_new(percentage: f64) -> Result<Self, ValidationError> {
        validate_percentage(percentage)?;
        Ok(PercentageDiscount { percentage })
    }

    #[inline]
    pub const fn percentage(&self) -> f64 {
        self.percentage
    }
}

impl DiscountStrategy for PercentageDiscount {
    fn apply_discount(&self, total: Money) -> Money {
        total.apply_percentage_discount(self.percentage)
    }

    fn label(&self) -> String {
        format!("{}% off", self.percentage)
    }
}

// =============================================================================
// Buy One Get One Free
// =============================================================================

/// Buy-one-get-one-free promotion.
///
/// Operates on the total only, which carries no per-item quantities, so the
/// total is returned unchanged.
// TODO: halve billable units per line once strategies can see cart lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyOneGetOneFree;

impl DiscountStrategy for BuyOneGetOneFree {
    fn apply_discount(&self, total: Money) -> Money {
        total
    }

    fn label(&self) -> String {
        "buy one get one free".to_string()
    }
}

// =============================================================================
// Discount (tagged variant)
// =============================================================================

/// Serializable discount selection, as read from configuration.
///
/// ## TOML Shape
/// ```toml
/// [discount]
/// kind = "percentage"
/// percentage = 10.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Discount {
    /// No discount: checkout returns the raw total.
    #[default]
    None,

    /// See [`PercentageDiscount`].
    Percentage { percentage: f64 },

    /// See [`BuyOneGetOneFree`].
    BuyOneGetOneFree,
}

impl Discount {
    /// Returns the strategy to hand to `checkout`, or `None` for no discount.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::Discount;
    ///
    /// assert!(Discount::None.as_strategy().is_none());
    /// assert!(Discount::BuyOneGetOneFree.as_strategy().is_some());
    /// ```
    pub fn as_strategy(&self) -> Option<&dyn DiscountStrategy> {
        match self {
            Discount::None => None,
            other => Some(other),
        }
    }

    /// Checks a percentage discount is within `0..=100`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Discount::Percentage { percentage } => validate_percentage(*percentage),
            Discount::None | Discount::BuyOneGetOneFree => Ok(()),
        }
    }
}

impl DiscountStrategy for Discount {
    fn apply_discount(&self, total: Money) -> Money {
        match self {
            Discount::None => total,
            Discount::Percentage { percentage } => {
                PercentageDiscount::new(*percentage).apply_discount(total)
            }
            Discount::BuyOneGetOneFree => BuyOneGetOneFree.apply_discount(total),
        }
    }

    fn label(&self) -> String {
        match self {
            Discount::None => "none".to_string(),
            Discount::Percentage { percentage } => PercentageDiscount::new(*percentage).label(),
            Discount::BuyOneGetOneFree => BuyOneGetOneFree.label(),
        }
    }
}

impl From<PercentageDiscount> for Discount {
    fn from(discount: PercentageDiscount) -> Self {
        Discount::Percentage {
            percentage: discount.percentage(),
        }
    }
}

impl From<BuyOneGetOneFree> for Discount {
    fn from(_: BuyOneGetOneFree) -> Self {
        Discount::BuyOneGetOneFree
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Parses the compact forms used in environment variables.
///
/// Accepted: `none`, `bogo`, `buy_one_get_one_free`, `percentage:10`, `10%`.
impl FromStr for Discount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "" | "none" | "off" => return Ok(Discount::None),
            "bogo" | "buy_one_get_one_free" | "buy-one-get-one-free" => {
                return Ok(Discount::BuyOneGetOneFree)
            }
            _ => {}
        }

        let raw = s
            .strip_prefix("percentage:")
            .or_else(|| s.strip_suffix('%'))
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "discount".to_string(),
                reason: format!(
                    "unknown discount '{}'. Valid options: none, bogo, percentage:<n>, <n>%",
                    s
                ),
            })?;

        let percentage = raw
            .trim()
            .parse::<f64>()
            .map_err(|e| ValidationError::InvalidFormat {
                field: "discount".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Discount::Percentage { percentage })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_discount() {
        let total = Money::new(2050.0);
        let discounted = PercentageDiscount::new(10.0).apply_discount(total);
        assert_eq!(discounted.to_string(), "$1845.00");
    }

    #[test]
    fn test_percentage_out_of_range_is_not_corrected() {
        let total = Money::new(100.0);
        assert!(PercentageDiscount::new(120.0)
            .apply_discount(total)
            .is_negative());
        assert!(PercentageDiscount::new(-20.0).apply_discount(total) > total);
    }

    #[test]
    fn test_percentage_try_new() {
        assert_eq!(PercentageDiscount::try_new(10.0).unwrap().percentage(), 10.0);
        assert!(matches!(
            PercentageDiscount::try_new(-1.0),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            PercentageDiscount::try_new(f64::NAN),
            Err(ValidationError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_bogo_leaves_total_unchanged() {
        let total = Money::new(123.45);
        assert_eq!(BuyOneGetOneFree.apply_discount(total), total);
    }

    #[test]
    fn test_enum_delegates_to_variants() {
        let total = Money::new(80.0);
        assert_eq!(Discount::None.apply_discount(total), total);
        assert_eq!(Discount::BuyOneGetOneFree.apply_discount(total), total);
        assert_eq!(
            Discount::Percentage { percentage: 25.0 }.apply_discount(total),
            Money::new(60.0)
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("none".parse::<Discount>().unwrap(), Discount::None);
        assert_eq!("BOGO".parse::<Discount>().unwrap(), Discount::BuyOneGetOneFree);
        assert_eq!(
            "percentage:10".parse::<Discount>().unwrap(),
            Discount::Percentage { percentage: 10.0 }
        );
        assert_eq!(
            "12.5%".parse::<Discount>().unwrap(),
            Discount::Percentage { percentage: 12.5 }
        );
        assert!("half-price".parse::<Discount>().is_err());
        assert!("percentage:abc".parse::<Discount>().is_err());
    }

    #[test]
    fn test_validate() {
        assert!(Discount::None.validate().is_ok());
        assert!(Discount::Percentage { percentage: 50.0 }.validate().is_ok());
        assert!(Discount::Percentage { percentage: 150.0 }.validate().is_err());
    }

    #[test]
    fn test_serde_tagged_shape() {
        let json = serde_json::to_value(Discount::Percentage { percentage: 10.0 }).unwrap();
        assert_eq!(json["kind"], "percentage");
        assert_eq!(json["percentage"], 10.0);

        let bogo: Discount = serde_json::from_str(r#"{"kind":"buy_one_get_one_free"}"#).unwrap();
        assert_eq!(bogo, Discount::BuyOneGetOneFree);
    }

    #[test]
    fn test_labels() {
        assert_eq!(PercentageDiscount::new(10.0).label(), "10% off");
        assert_eq!(Discount::None.to_string(), "none");
        assert_eq!(
            Discount::from(BuyOneGetOneFree).to_string(),
            "buy one get one free"
        );
    }
}
