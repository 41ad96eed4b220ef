//! # Greenify Storefront Library
//!
//! Wires configuration, catalog and cart together and runs the shell.
//!
//! ## Module Organization
//! ```text
//! greenify_storefront/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── Configuration state
//! │   ├── catalog.rs  ◄─── Catalog loading
//! │   └── session.rs  ◄─── Session (owns the cart)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Catalog queries
//! │   ├── cart.rs     ◄─── Cart commands
//! │   ├── checkout.rs ◄─── Checkout placeholder
//! │   └── config.rs   ◄─── Config query
//! ├── shell.rs        ◄─── Line parser and loop
//! ├── render.rs       ◄─── Text output
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod render;
pub mod shell;
pub mod state;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use error::ApiError;
use state::{load_catalog, ConfigState, Session};

/// Runs the storefront.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, to stderr                     │
/// │     • Default: info,greenify=debug; RUST_LOG overrides                  │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • GREENIFY_* environment variables, then command-line flags         │
/// │                                                                         │
/// │  3. Load Catalog ─────────────────────────────────────────────────────► │
/// │     • Embedded plant catalog or GREENIFY_CATALOG_PATH / --catalog       │
/// │                                                                         │
/// │  4. Create Session ───────────────────────────────────────────────────► │
/// │     • Empty cart, logging listener, session UUID                        │
/// │                                                                         │
/// │  5. Run Shell on stdin/stdout ────────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run<I>(args: I) -> Result<(), ApiError>
where
    I: IntoIterator<Item = String>,
{
    init_tracing();

    let config = ConfigState::load()?.apply_args(args)?;
    info!(store = %config.store_name, output = ?config.output, "Starting storefront");

    let catalog = load_catalog(&config)?;
    let mut session = Session::new(config, catalog);
    info!(session_id = %session.id, "Session started");

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run(&mut session, stdin.lock(), stdout.lock())?;

    info!(
        session_id = %session.id,
        items = session.cart.distinct_count(),
        "Session ended"
    );
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=greenify=trace` - Show trace for greenify crates only
/// - Default: info, debug for greenify crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,greenify=debug"));

    // try_init: a second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
