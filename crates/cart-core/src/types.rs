//! # Domain Types
//!
//! Catalog types used by the cart.
//!
//! ## Identity Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Product Identity                                │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                        │
//! │  │    Product      │        │    Product      │                        │
//! │  │  ─────────────  │        │  ─────────────  │                        │
//! │  │  id: 9f1c…      │   ≠    │  id: 04ab…      │                        │
//! │  │  name: Laptop   │        │  name: Laptop   │                        │
//! │  │  price: 1000    │        │  price: 1000    │                        │
//! │  └─────────────────┘        └─────────────────┘                        │
//! │                                                                         │
//! │  Same name and price, still two distinct catalog entries.               │
//! │  The cart only ever compares `ProductId`s.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_price, validate_product_name};

// =============================================================================
// Product Id
// =============================================================================

/// Unique identity of a catalog entry (UUID v4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Generates a fresh identity.
    pub fn new() -> Self {
        ProductId(Uuid::new_v4())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for purchase.
///
/// Read-only after construction: there are no setters, only the
/// builder-style [`Product::unavailable`] used while building a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    #[serde(default = "default_available")]
    available: bool,
}

fn default_available() -> bool {
    true
}

/// Products are shared between the catalog and any carts holding them.
pub type SharedProduct = Arc<Product>;

impl Product {
    /// Creates an available product with a fresh identity.
    ///
    /// No validation is performed; see [`Product::try_new`].
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Product {
            id: ProductId::new(),
            name: name.into(),
            price,
            available: true,
        }
    }

    /// Creates a product after validating its name and price.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::{Money, Product};
    ///
    /// assert!(Product::try_new("Laptop", Money::new(1000.0)).is_ok());
    /// assert!(Product::try_new("", Money::new(1000.0)).is_err());
    /// assert!(Product::try_new("Laptop", Money::new(-1.0)).is_err());
    /// ```
    pub fn try_new(name: impl Into<String>, price: Money) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_price(price)?;
        Ok(Product::new(name, price))
    }

    /// Marks the product as unavailable.
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    /// Sets availability explicitly.
    pub fn with_availability(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Wraps the product for sharing with carts.
    pub fn shared(self) -> SharedProduct {
        Arc::new(self)
    }

    #[inline]
    pub fn id(&self) -> ProductId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// True if both values refer to the same catalog entry.
    #[inline]
    pub fn same_as(&self, other: &Product) -> bool {
        self.id == other.id
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
