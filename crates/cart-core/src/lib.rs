//! # cart-core: Pure Shopping Cart Logic
//!
//! This crate is the **heart** of cartkit. It contains the cart and discount
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        cartkit Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 cart-checkout (binary)                          │   │
//! │  │    config.toml ──► build cart ──► checkout ──► print summary    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cart-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ discount  │  │   │
//! │  │   │  Product  │  │   Money   │  │ CartItem  │  │ Percentage│  │   │
//! │  │   │ ProductId │  │           │  │ShoppingCart│ │   BOGO    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductId)
//! - [`money`] - Money type wrapping a decimal amount
//! - [`discount`] - The `DiscountStrategy` capability and its variants
//! - [`cart`] - `ShoppingCart` and `CartItem`
//! - [`summary`] - Totals and the textual cart summary
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use cart_core::{Money, PercentageDiscount, Product, ShoppingCart};
//!
//! let laptop = Arc::new(Product::new("Laptop", Money::new(1000.0)));
//! let headphones = Arc::new(Product::new("Headphones", Money::new(50.0)));
//!
//! let mut cart = ShoppingCart::new();
//! cart.add_item(&laptop, 2);
//! cart.add_item(&headphones, 1);
//!
//! assert_eq!(cart.calculate_total(), Money::new(2050.0));
//!
//! let total = cart.checkout(Some(&PercentageDiscount::new(10.0)));
//! assert_eq!(total.to_string(), "$1845.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod discount;
pub mod error;
pub mod money;
pub mod summary;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use cart_core::Money` instead of
// `use cart_core::money::Money`

pub use cart::{CartItem, CartLimits, ShoppingCart};
pub use discount::{BuyOneGetOneFree, Discount, DiscountStrategy, PercentageDiscount};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use summary::{CartSummary, CartTotals};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines allowed in a single cart (checked operations only).
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line (checked operations only).
///
/// Catches typos like 1000 instead of 10.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Currency symbol used by `Money`'s `Display` impl.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";
