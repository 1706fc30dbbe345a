//! # Validation Module
//!
//! Input validation utilities for cartkit.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Baseline cart API (add_item, update_quantity, ...)                    │
//! │  └── NO validation: nonsensical input produces nonsensical totals      │
//! │                                                                         │
//! │  Checked cart API (try_add_item, try_update_quantity, ...)             │
//! │  └── THIS MODULE: quantity and limit checks                            │
//! │                                                                         │
//! │  Checked constructors (Product::try_new, PercentageDiscount::try_new)  │
//! │  └── THIS MODULE: name, price and percentage checks                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cart_core::validation::{validate_quantity, validate_percentage};
//!
//! assert!(validate_quantity(5).is_ok());
//! assert!(validate_percentage(150.0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest product name accepted by [`validate_product_name`].
const MAX_PRODUCT_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    validate_quantity_within(qty, MAX_ITEM_QUANTITY)
}

/// Validates a quantity against a caller-supplied maximum.
pub fn validate_quantity_within(qty: i64, max: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > max {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max,
        });
    }

    Ok(())
}

/// Validates a product price.
///
/// ## Rules
/// - Must be finite
/// - Must be non-negative (zero is allowed for free items)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
        });
    }

    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount percentage.
///
/// ## Rules
/// - Must be finite
/// - Must be within 0..=100
pub fn validate_percentage(percentage: f64) -> ValidationResult<()> {
    if !percentage.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "percentage".to_string(),
        });
    }

    if !(0.0..=100.0).contains(&percentage) {
        return Err(ValidationError::OutOfRange {
            field: "percentage".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
