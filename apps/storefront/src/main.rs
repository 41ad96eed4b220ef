//! # Greenify Storefront Entry Point
//!
//! ```text
//! $ printf 'add monstera\ninc monstera\ncart\n' | greenify
//! $ GREENIFY_OUTPUT=json greenify --catalog shop.json
//! ```
//!
//! The actual setup is in lib.rs for better testability.

use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    match greenify_storefront::run(env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("greenify: {}", err);
            ExitCode::FAILURE
        }
    }
}
