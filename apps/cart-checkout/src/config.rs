//! # Checkout Configuration
//!
//! What to put in the cart, which discount to apply and how to print money.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CART_CURRENCY_SYMBOL=€                                             │
//! │     CART_DISCOUNT=percentage:10 | 10% | bogo | none                    │
//! │     CART_MAX_ITEMS=100                                                 │
//! │     CART_MAX_ITEM_QUANTITY=999                                         │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     path given on the command line, or CART_CONFIG                     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     2 × Laptop ($1000), 1 × Headphones ($50), 10% off                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [display]
//! currency_symbol = "$"
//!
//! [discount]
//! kind = "percentage"   # none | percentage | buy_one_get_one_free
//! percentage = 10.0
//!
//! [limits]
//! max_items = 100
//! max_item_quantity = 999
//!
//! [[items]]
//! name = "Laptop"
//! price = 1000.0
//! quantity = 2
//!
//! [[items]]
//! name = "Headphones"
//! price = 50.0
//! ```

use std::path::{Path, PathBuf};

use cart_core::{
    CartLimits, Discount, Money, Product, ShoppingCart, ValidationError, DEFAULT_CURRENCY_SYMBOL,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "CART_CONFIG";

// =============================================================================
// Display Settings
// =============================================================================

/// How amounts are rendered in the summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            currency_symbol: default_currency_symbol(),
        }
    }
}

// =============================================================================
// Cart Items
// =============================================================================

/// One configured cart line. Every entry becomes its own catalog product,
/// so two entries with the same name are two lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemConfig {
    pub name: String,

    pub price: f64,

    #[serde(default = "default_quantity")]
    pub quantity: i64,

    #[serde(default = "default_true")]
    pub available: bool,
}

fn default_quantity() -> i64 {
    1
}

fn default_true() -> bool {
    true
}

impl ItemConfig {
    pub fn new(name: &str, price: f64, quantity: i64) -> Self {
        ItemConfig {
            name: name.to_string(),
            price,
            quantity,
            available: true,
        }
    }

    fn to_product(&self) -> Result<Product, ValidationError> {
        Product::try_new(self.name.as_str(), Money::new(self.price))
            .map(|p| p.with_availability(self.available))
    }
}

fn default_items() -> Vec<ItemConfig> {
    vec![
        ItemConfig::new("Laptop", 1000.0, 2),
        ItemConfig::new("Headphones", 50.0, 1),
    ]
}

fn default_discount() -> Discount {
    Discount::Percentage { percentage: 10.0 }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete checkout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    #[serde(default)]
    pub display: DisplaySettings,

    #[serde(default = "default_discount")]
    pub discount: Discount,

    #[serde(default)]
    pub limits: CartLimits,

    #[serde(default = "default_items")]
    pub items: Vec<ItemConfig>,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        CheckoutConfig {
            display: DisplaySettings::default(),
            discount: default_discount(),
            limits: CartLimits::default(),
            items: default_items(),
        }
    }
}

impl CheckoutConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, else `CART_CONFIG`)
    /// 3. Environment variables
    ///
    /// A path that was asked for but does not exist is an error.
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let path = config_path.or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));

        let mut config = match path {
            Some(path) => Self::from_file(&path)?,
            None => {
                debug!("No config file given, using defaults");
                Self::default()
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::ConfigNotFound(path.to_path_buf()));
        }

        info!(?path, "Loading checkout config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies `CART_*` overrides read through `lookup`.
    ///
    /// Unparsable values are logged and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(symbol) = lookup("CART_CURRENCY_SYMBOL") {
            debug!(symbol = %symbol, "Overriding currency symbol from environment");
            self.display.currency_symbol = symbol;
        }

        if let Some(raw) = lookup("CART_DISCOUNT") {
            match raw.parse::<Discount>() {
                Ok(discount) => {
                    debug!(%discount, "Overriding discount from environment");
                    self.discount = discount;
                }
                Err(e) => warn!(value = %raw, error = %e, "Ignoring CART_DISCOUNT"),
            }
        }

        if let Some(raw) = lookup("CART_MAX_ITEMS") {
            match raw.parse::<usize>() {
                Ok(max) => self.limits.max_items = max,
                Err(_) => warn!(value = %raw, "Ignoring CART_MAX_ITEMS"),
            }
        }

        if let Some(raw) = lookup("CART_MAX_ITEM_QUANTITY") {
            match raw.parse::<i64>() {
                Ok(max) => self.limits.max_item_quantity = max,
                Err(_) => warn!(value = %raw, "Ignoring CART_MAX_ITEM_QUANTITY"),
            }
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        if self.display.currency_symbol.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "currency_symbol".to_string(),
            }
            .into());
        }

        self.discount.validate()?;

        if self.limits.max_items == 0 {
            return Err(AppError::InvalidConfig(
                "max_items must be greater than 0".into(),
            ));
        }

        if self.limits.max_item_quantity <= 0 {
            return Err(AppError::InvalidConfig(
                "max_item_quantity must be greater than 0".into(),
            ));
        }

        for item in &self.items {
            item.to_product()?;
        }

        Ok(())
    }

    /// Builds a cart holding the configured items.
    ///
    /// Items go through the checked cart API, so limits and availability
    /// are enforced here.
    pub fn build_cart(&self) -> AppResult<ShoppingCart> {
        let mut cart = ShoppingCart::with_limits(self.limits);

        for item in &self.items {
            let product = item.to_product()?.shared();
            cart.try_add_item(&product, item.quantity)?;
        }

        debug!(lines = cart.item_count(), "Cart built from config");
        Ok(cart)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use cart_core::CoreError;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CheckoutConfig::default();
        assert_eq!(config.display.currency_symbol, "$");
        assert_eq!(config.discount, Discount::Percentage { percentage: 10.0 });
        assert_eq!(config.items.len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let config: CheckoutConfig = toml::from_str(
            r#"
            [display]
            currency_symbol = "€"

            [discount]
            kind = "buy_one_get_one_free"

            [[items]]
            name = "Mouse"
            price = 25.0
            quantity = 3

            [[items]]
            name = "Pad"
            price = 5.5
            "#,
        )
        .unwrap();

        assert_eq!(config.display.currency_symbol, "€");
        assert_eq!(config.discount, Discount::BuyOneGetOneFree);
        assert_eq!(config.limits, CartLimits::default());
        assert_eq!(config.items.len(), 2);
        assert_eq!(config.items[1].quantity, 1);
        assert!(config.items[1].available);
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: CheckoutConfig = toml::from_str("").unwrap();
        assert_eq!(config.items.len(), 2);
        assert_eq!(config.discount, Discount::Percentage { percentage: 10.0 });
    }

    #[test]
    fn test_overrides() {
        let mut config = CheckoutConfig::default();
        config.apply_overrides(lookup_from(&[
            ("CART_CURRENCY_SYMBOL", "£"),
            ("CART_DISCOUNT", "bogo"),
            ("CART_MAX_ITEMS", "5"),
            ("CART_MAX_ITEM_QUANTITY", "not-a-number"),
        ]));

        assert_eq!(config.display.currency_symbol, "£");
        assert_eq!(config.discount, Discount::BuyOneGetOneFree);
        assert_eq!(config.limits.max_items, 5);
        assert_eq!(config.limits.max_item_quantity, 999);
    }

    #[test]
    fn test_bad_discount_override_is_ignored() {
        let mut config = CheckoutConfig::default();
        config.apply_overrides(lookup_from(&[("CART_DISCOUNT", "half-price")]));
        assert_eq!(config.discount, Discount::Percentage { percentage: 10.0 });
    }

    #[test]
    fn test_validation() {
        let mut config = CheckoutConfig::default();
        config.discount = Discount::Percentage { percentage: 250.0 };
        assert!(matches!(config.validate(), Err(AppError::InvalidConfig(_))));

        let mut config = CheckoutConfig::default();
        config.items.push(ItemConfig::new("", 1.0, 1));
        assert!(config.validate().is_err());

        let mut config = CheckoutConfig::default();
        config.limits.max_items = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_build_cart() {
        let cart = CheckoutConfig::default().build_cart().unwrap();
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.calculate_total(), Money::new(2050.0));
    }

    #[test]
    fn test_build_cart_enforces_limits() {
        let mut config = CheckoutConfig::default();
        config.limits.max_items = 1;

        assert!(matches!(
            config.build_cart(),
            Err(AppError::Core(CoreError::CartTooLarge { max: 1 }))
        ));
    }

    #[test]
    fn test_missing_explicit_file() {
        let path = std::env::temp_dir().join("cart-checkout-does-not-exist.toml");
        assert!(matches!(
            CheckoutConfig::from_file(&path),
            Err(AppError::ConfigNotFound(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!(
            "cart-checkout-{}-from-file.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "[discount]\nkind = \"none\"\n\n[[items]]\nname = \"Cable\"\nprice = 4.0\nquantity = 2\n",
        )
        .unwrap();

        let config = CheckoutConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.discount, Discount::None);
        assert_eq!(
            config.build_cart().unwrap().calculate_total(),
            Money::new(8.0)
        );
    }
}
