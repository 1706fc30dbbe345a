//! # Cart Summary
//!
//! Totals and the two-line textual summary shown at the end of a checkout.
//!
//! ```text
//! Cart Items: You have 2 Laptops and 1 Headphones in your cart.
//! Total Bill: Your total bill is $1845.00
//! ```

use std::fmt;

use serde::Serialize;

use crate::cart::{CartItem, ShoppingCart};
use crate::discount::DiscountStrategy;
use crate::money::Money;
use crate::DEFAULT_CURRENCY_SYMBOL;

// =============================================================================
// Totals
// =============================================================================

/// Cart totals summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    /// Before discount.
    pub subtotal: Money,
    /// `subtotal - total`; negative when the "discount" raised the price.
    pub discount_amount: Money,
    /// Amount payable.
    pub total: Money,
}

impl CartTotals {
    pub fn compute(cart: &ShoppingCart, discount: Option<&dyn DiscountStrategy>) -> Self {
        let subtotal = cart.calculate_total();
        let total = cart.checkout(discount);

        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal,
            discount_amount: subtotal - total,
            total,
        }
    }
}

impl From<&ShoppingCart> for CartTotals {
    fn from(cart: &ShoppingCart) -> Self {
        CartTotals::compute(cart, None)
    }
}

// =============================================================================
// Textual Summary
// =============================================================================

/// Renders the end-of-run summary for a cart and its payable total.
///
/// Lists every line in insertion order, so carts of any size are safe.
///
/// ## Example
/// ```rust
/// use cart_core::{CartSummary, Money, Product, ShoppingCart};
///
/// let mut cart = ShoppingCart::new();
/// cart.add_item(&Product::new("Laptop", Money::new(1000.0)).shared(), 2);
///
/// let summary = CartSummary::new(&cart, cart.checkout(None));
/// assert_eq!(
///     summary.items_line(),
///     "Cart Items: You have 2 Laptops in your cart."
/// );
/// assert_eq!(summary.total_line(), "Total Bill: Your total bill is $2000.00");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CartSummary<'a> {
    cart: &'a ShoppingCart,
    total: Money,
    currency_symbol: &'a str,
}

impl<'a> CartSummary<'a> {
    pub fn new(cart: &'a ShoppingCart, total: Money) -> Self {
        CartSummary {
            cart,
            total,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL,
        }
    }

    pub fn with_currency_symbol(mut self, symbol: &'a str) -> Self {
        self.currency_symbol = symbol;
        self
    }

    /// `Cart Items: You have 2 Laptops and 1 Headphones in your cart.`
    pub fn items_line(&self) -> String {
        let parts: Vec<String> = self.cart.iter().map(describe_line).collect();

        match parts.split_last() {
            None => "Cart Items: Your cart is empty.".to_string(),
            Some((only, [])) => format!("Cart Items: You have {} in your cart.", only),
            Some((last, rest)) => format!(
                "Cart Items: You have {} and {} in your cart.",
                rest.join(", "),
                last
            ),
        }
    }

    /// `Total Bill: Your total bill is $1845.00`
    pub fn total_line(&self) -> String {
        format!(
            "Total Bill: Your total bill is {}",
            self.total.format_with(self.currency_symbol)
        )
    }
}

impl fmt::Display for CartSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.items_line())?;
        write!(f, "{}", self.total_line())
    }
}

/// `2 Laptops`, `1 Headphones`, `1 Mouse`.
fn describe_line(item: &CartItem) -> String {
    let name = item.product.name();
    let plural = item.quantity != 1 && !name.ends_with('s');
    format!("{} {}{}", item.quantity, name, if plural { "s" } else { "" })
}

// =============================================================================
// Unit Tests
// =============================================================================
