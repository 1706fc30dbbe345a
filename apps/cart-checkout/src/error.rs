//! # App Error Type
//!
//! Errors surfaced by the checkout binary.
//!
//! ```text
//! config.toml ── io / toml ──┐
//! CART_* env  ── validation ─┼──► AppError ──► stderr + exit code 1
//! cart-core   ── CoreError ──┘
//! ```

use std::path::PathBuf;

use cart_core::{CoreError, ValidationError};
use thiserror::Error;

/// Result type alias for the app.
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Failed to read the config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Config parsed but holds unusable values.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Command-line flag the binary does not know.
    #[error("Unknown argument: {0}")]
    UnknownArgument(String),

    /// Cart rule rejected a configured item.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::ConfigLoadFailed(err.to_string())
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::InvalidConfig(err.to_string())
    }
}
