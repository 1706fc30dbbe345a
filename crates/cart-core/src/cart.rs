//! # Shopping Cart
//!
//! Item aggregation and total calculation.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Operation                 Cart State Change           On Missing Line  │
//! │  ─────────                 ─────────────────           ───────────────  │
//! │                                                                         │
//! │  add_item(p, n) ─────────► items[i].qty += n           push new line    │
//! │                                                                         │
//! │  update_quantity(p, n) ──► items[i].qty = n            nothing          │
//! │                                                                         │
//! │  remove_item(p) ─────────► items.retain(!= p)          nothing          │
//! │                                                                         │
//! │  calculate_total() ──────► (read only)                                  │
//! │                                                                         │
//! │  checkout(discount) ─────► (read only)                                  │
//! │                                                                         │
//! │  try_* variants return CoreError instead of doing nothing.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::discount::DiscountStrategy;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::summary::CartTotals;
use crate::types::{Product, ProductId, SharedProduct};
use crate::validation::validate_quantity_within;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the cart: a shared product and how many of it.
///
/// ## Design Notes
/// - `product` is shared with the catalog, not copied. Price and name are
///   read through it at calculation time.
/// - `quantity` is signed; the baseline API does not reject zero or
///   negative values.
#[derive(Debug, Clone, Serialize)]
pub struct CartItem {
    pub product: SharedProduct,
    pub quantity: i64,
}

impl CartItem {
    pub fn new(product: SharedProduct, quantity: i64) -> Self {
        CartItem { product, quantity }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price() * self.quantity
    }

    /// True if this line holds the given catalog entry.
    #[inline]
    pub fn is_for(&self, product: &Product) -> bool {
        self.product.same_as(product)
    }
}

// =============================================================================
// Limits
// =============================================================================

/// Bounds enforced by the checked (`try_*`) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLimits {
    /// Maximum number of distinct lines.
    #[serde(default = "default_max_items")]
    pub max_items: usize,

    /// Maximum quantity on a single line.
    #[serde(default = "default_max_item_quantity")]
    pub max_item_quantity: i64,
}

fn default_max_items() -> usize {
    MAX_CART_ITEMS
}

fn default_max_item_quantity() -> i64 {
    MAX_ITEM_QUANTITY
}

impl Default for CartLimits {
    fn default() -> Self {
        CartLimits {
            max_items: default_max_items(),
            max_item_quantity: default_max_item_quantity(),
        }
    }
}

// =============================================================================
// Shopping Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - At most one line per product id (adding the same product again
///   increases that line's quantity)
/// - Lines keep insertion order; lookups return the first match
/// - `checkout` never mutates the cart
#[derive(Debug, Clone, Serialize)]
pub struct ShoppingCart {
    items: Vec<CartItem>,
    limits: CartLimits,
    created_at: DateTime<Utc>,
}

impl ShoppingCart {
    /// Creates a new empty cart with default limits.
    pub fn new() -> Self {
        Self::with_limits(CartLimits::default())
    }

    /// Creates a new empty cart with custom limits for the checked operations.
    pub fn with_limits(limits: CartLimits) -> Self {
        ShoppingCart {
            items: Vec::new(),
            limits,
            created_at: Utc::now(),
        }
    }

    // =========================================================================
    // Baseline Operations
    // =========================================================================

    /// Adds a product to the cart or increases quantity if already present.
    ///
    /// No validation: zero and negative quantities are applied as given.
    /// The line quantity saturates at the `i64` bounds.
    pub fn add_item(&mut self, product: &SharedProduct, quantity: i64) {
        if let Some(item) = self.find_mut(product.id()) {
            item.quantity = item.quantity.saturating_add(quantity);
            debug!(
                product = %product.name(),
                added = quantity,
                quantity = item.quantity,
                "Increased cart line quantity"
            );
            return;
        }

        self.items.push(CartItem::new(Arc::clone(product), quantity));
        debug!(product = %product.name(), quantity, "Added cart line");
    }

    /// Adds a single unit of a product.
    pub fn add_one(&mut self, product: &SharedProduct) {
        self.add_item(product, 1);
    }

    /// Overwrites the quantity of a product's line.
    ///
    /// Does nothing if the product is not in the cart.
    pub fn update_quantity(&mut self, product: &Product, quantity: i64) {
        match self.find_mut(product.id()) {
            Some(item) => {
                item.quantity = quantity;
                debug!(product = %product.name(), quantity, "Updated cart line quantity");
            }
            None => trace!(product = %product.name(), "update_quantity: product not in cart"),
        }
    }

    /// Removes a product's line.
    ///
    /// Does nothing if the product is not in the cart.
    pub fn remove_item(&mut self, product: &Product) {
        let before = self.items.len();
        self.items.retain(|item| !item.is_for(product));

        if self.items.len() == before {
            trace!(product = %product.name(), "remove_item: product not in cart");
        } else {
            debug!(product = %product.name(), "Removed cart line");
        }
    }

    /// Sum of `price × quantity` over all lines. Zero for an empty cart.
    pub fn calculate_total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Computes the amount payable, passing the total through `discount` if given.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::{BuyOneGetOneFree, Money, Product, ShoppingCart};
    ///
    /// let mut cart = ShoppingCart::new();
    /// cart.add_item(&Product::new("Mug", Money::new(8.0)).shared(), 2);
    ///
    /// assert_eq!(cart.checkout(None), Money::new(16.0));
    /// assert_eq!(cart.checkout(Some(&BuyOneGetOneFree)), Money::new(16.0));
    /// ```
    pub fn checkout(&self, discount: Option<&dyn DiscountStrategy>) -> Money {
        let total = self.calculate_total();

        match discount {
            Some(strategy) => {
                let discounted = strategy.apply_discount(total);
                debug!(
                    discount = %strategy.label(),
                    %total,
                    payable = %discounted,
                    "Checkout with discount"
                );
                discounted
            }
            None => {
                debug!(%total, "Checkout without discount");
                total
            }
        }
    }

    // =========================================================================
    // Checked Operations
    // =========================================================================

    /// Like [`add_item`](Self::add_item) but enforces the cart rules.
    ///
    /// ## Errors
    /// - `Validation` if `quantity` is not positive or above the line limit
    /// - `ProductUnavailable` if the product is flagged unavailable
    /// - `QuantityTooLarge` if the combined line quantity exceeds the limit
    /// - `CartTooLarge` if a new line would exceed `max_items`
    pub fn try_add_item(&mut self, product: &SharedProduct, quantity: i64) -> CoreResult<()> {
        let max_qty = self.limits.max_item_quantity;
        validate_quantity_within(quantity, max_qty)?;

        if !product.is_available() {
            warn!(product = %product.name(), "Rejected unavailable product");
            return Err(CoreError::ProductUnavailable {
                product: product.name().to_string(),
            });
        }

        if let Some(item) = self.find(product.id()) {
            let new_qty = item.quantity.saturating_add(quantity);
            if item.quantity.checked_add(quantity).is_none() || new_qty > max_qty {
                warn!(product = %product.name(), requested = new_qty, "Line quantity over limit");
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: max_qty,
                });
            }
        } else if self.items.len() >= self.limits.max_items {
            warn!(max = self.limits.max_items, "Cart is full");
            return Err(CoreError::CartTooLarge {
                max: self.limits.max_items,
            });
        }

        self.add_item(product, quantity);
        Ok(())
    }

    /// Like [`update_quantity`](Self::update_quantity) but reports a missing line.
    ///
    /// A quantity of 0 removes the line.
    pub fn try_update_quantity(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        if quantity == 0 {
            return self.try_remove_item(product);
        }

        validate_quantity_within(quantity, self.limits.max_item_quantity)?;

        if self.find(product.id()).is_none() {
            return Err(not_in_cart(product));
        }

        self.update_quantity(product, quantity);
        Ok(())
    }

    /// Like [`remove_item`](Self::remove_item) but reports a missing line.
    pub fn try_remove_item(&mut self, product: &Product) -> CoreResult<()> {
        if !self.contains(product) {
            return Err(not_in_cart(product));
        }

        self.remove_item(product);
        Ok(())
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CartItem> {
        self.items.iter()
    }

    /// Line at `index`, if the cart has that many lines.
    pub fn get(&self, index: usize) -> Option<&CartItem> {
        self.items.get(index)
    }

    /// Returns the number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.quantity))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, product: &Product) -> bool {
        self.find(product.id()).is_some()
    }

    /// Quantity on the product's line, if present.
    pub fn quantity_of(&self, product: &Product) -> Option<i64> {
        self.find(product.id()).map(|i| i.quantity)
    }

    pub fn limits(&self) -> CartLimits {
        self.limits
    }

    /// When the cart was created or last cleared.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Totals summary, optionally with a discount applied.
    pub fn totals(&self, discount: Option<&dyn DiscountStrategy>) -> CartTotals {
        CartTotals::compute(self, discount)
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
        debug!("Cart cleared");
    }

    fn find(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id() == id)
    }

    fn find_mut(&mut self, id: ProductId) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|i| i.product.id() == id)
    }
}

impl Default for ShoppingCart {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a ShoppingCart {
    type Item = &'a CartItem;
    type IntoIter = std::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn not_in_cart(product: &Product) -> CoreError {
    CoreError::ProductNotInCart {
        product: product.name().to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
