//! # cart-checkout Entry Point
//!
//! ## Usage
//! ```bash
//! # Sample cart (2 × Laptop, 1 × Headphones, 10% off)
//! cargo run -p cart-checkout
//!
//! # Cart from a config file
//! cargo run -p cart-checkout -- ./cart.toml
//!
//! # Override the discount
//! CART_DISCOUNT=bogo cargo run -p cart-checkout
//! ```

use std::env;
use std::process::ExitCode;

use cart_checkout::error::AppError;
use cart_checkout::{parse_args, Command, USAGE};

fn main() -> ExitCode {
    let config_path = match parse_args(env::args().skip(1)) {
        Ok(Command::Help) => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Ok(Command::Run { config_path }) => config_path,
        Err(e @ AppError::UnknownArgument(_)) => {
            eprintln!("error: {}", e);
            eprintln!();
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cart_checkout::run(config_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
