//! # cart-checkout
//!
//! Builds a shopping cart from configuration, checks it out and prints the
//! two-line summary.
//!
//! ## Module Organization
//! ```text
//! cart_checkout/
//! ├── lib.rs          ◄─── You are here (logging setup & run)
//! ├── config.rs       ◄─── CheckoutConfig: defaults → TOML → CART_* env
//! ├── error.rs        ◄─── AppError
//! └── main.rs         ◄─── Argument handling, exit code
//! ```
//!
//! ## Output
//! Logs go to stderr; the summary is the only thing written to stdout:
//! ```text
//! Cart Items: You have 2 Laptops and 1 Headphones in your cart.
//! Total Bill: Your total bill is $1845.00
//! ```

pub mod config;
pub mod error;

use std::path::PathBuf;

use cart_core::{CartSummary, CartTotals, ShoppingCart};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::CheckoutConfig;
use error::{AppError, AppResult};

/// Result of checking out a configured cart.
#[derive(Debug, Clone)]
pub struct CheckoutOutcome {
    pub cart: ShoppingCart,
    pub totals: CartTotals,
    /// Rendered `CartSummary`.
    pub summary: String,
}

/// Builds the configured cart and checks it out.
pub fn checkout(config: &CheckoutConfig) -> AppResult<CheckoutOutcome> {
    let cart = config.build_cart()?;
    let strategy = config.discount.as_strategy();

    let totals = cart.totals(strategy);
    let summary = CartSummary::new(&cart, totals.total)
        .with_currency_symbol(&config.display.currency_symbol)
        .to_string();

    info!(
        lines = totals.item_count,
        quantity = totals.total_quantity,
        subtotal = %totals.subtotal,
        discount = %config.discount,
        total = %totals.total,
        "Checkout complete"
    );

    Ok(CheckoutOutcome {
        cart,
        totals,
        summary,
    })
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Run { config_path: Option<PathBuf> },
}

/// Usage text printed for `--help` and after an unknown flag.
pub const USAGE: &str = "\
cart-checkout - build a cart, check out, print the bill

Usage: cart-checkout [CONFIG]

Arguments:
  [CONFIG]    TOML config file (default: $CART_CONFIG, else built-in sample)

Environment:
  CART_CURRENCY_SYMBOL, CART_DISCOUNT, CART_MAX_ITEMS, CART_MAX_ITEM_QUANTITY";

/// Parses arguments (without the program name).
///
/// Anything starting with `-` other than `-h`/`--help` is rejected rather
/// than taken as a config path. The last positional argument wins.
pub fn parse_args<I>(args: I) -> AppResult<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut config_path: Option<PathBuf> = None;

    for arg in args {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            flag if flag.starts_with('-') => {
                return Err(AppError::UnknownArgument(flag.to_string()))
            }
            path => config_path = Some(PathBuf::from(path)),
        }
    }

    Ok(Command::Run { config_path })
}

/// Runs the checkout binary.
///
/// ## Sequence
/// 1. Initialize logging (`RUST_LOG`, default INFO)
/// 2. Load configuration
/// 3. Build cart and check out
/// 4. Print summary to stdout
pub fn run(config_path: Option<PathBuf>) -> AppResult<()> {
    init_tracing();

    info!("Starting cart checkout");

    let config = CheckoutConfig::load(config_path)?;
    let outcome = checkout(&config)?;

    println!("{}", outcome.summary);
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every cart mutation
/// - `RUST_LOG=cart_core=trace` - Also show ignored updates/removals
/// - Default: INFO level, DEBUG for `cart_core`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn default_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_LOG_FILTER)
}

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,cart_core=debug";

#[cfg(test)]
mod tests {
    use cart_core::{Discount, Money};

    use super::*;
    use crate::config::ItemConfig;

    #[test]
    fn test_parse_args() {
        let args = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        assert_eq!(
            parse_args(args(&[])).unwrap(),
            Command::Run { config_path: None }
        );
        assert_eq!(
            parse_args(args(&["cart.toml"])).unwrap(),
            Command::Run {
                config_path: Some(PathBuf::from("cart.toml"))
            }
        );
        assert_eq!(parse_args(args(&["cart.toml", "-h"])).unwrap(), Command::Help);
    }

    #[test]
    fn test_parse_args_rejects_unknown_flags() {
        let result = parse_args(vec!["--verbose".to_string()]);
        assert!(matches!(result, Err(AppError::UnknownArgument(ref a)) if a == "--verbose"));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Unknown argument: --verbose"
        );
    }

    #[test]
    fn test_default_filter_enables_core_debug() {
        let filter = default_filter().to_string();
        assert!(filter.contains("cart_core=debug"));
        assert!(filter.contains("info"));
    }

    #[test]
    fn test_default_checkout() {
        let outcome = checkout(&CheckoutConfig::default()).unwrap();

        assert_eq!(outcome.totals.subtotal, Money::new(2050.0));
        assert_eq!(outcome.totals.total.to_string(), "$1845.00");
        assert_eq!(
            outcome.summary,
            "Cart Items: You have 2 Laptops and 1 Headphones in your cart.\n\
             Total Bill: Your total bill is $1845.00"
        );
    }

    #[test]
    fn test_checkout_without_discount_and_custom_symbol() {
        let mut config = CheckoutConfig::default();
        config.discount = Discount::None;
        config.display.currency_symbol = "€".to_string();
        config.items = vec![ItemConfig::new("Mouse", 25.0, 1)];

        let outcome = checkout(&config).unwrap();

        assert_eq!(outcome.cart.item_count(), 1);
        assert!(outcome.totals.discount_amount.is_zero());
        assert!(outcome
            .summary
            .ends_with("Total Bill: Your total bill is €25.00"));
    }

    #[test]
    fn test_checkout_empty_cart() {
        let mut config = CheckoutConfig::default();
        config.items.clear();
        config.discount = Discount::Percentage { percentage: 50.0 };

        let outcome = checkout(&config).unwrap();

        assert!(outcome.totals.total.is_zero());
        assert!(outcome.summary.starts_with("Cart Items: Your cart is empty."));
    }
}
