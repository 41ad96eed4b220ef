//! # State Module
//!
//! Session-scoped state owned by the storefront.
//!
//! ```text
//! state/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── config.rs   ◄─── ConfigState (env + flags)
//! ├── catalog.rs  ◄─── Catalog loading (embedded or file)
//! └── session.rs  ◄─── Session: config + catalog + cart
//! ```

mod catalog;
mod config;
mod session;

pub use catalog::{load_catalog, DEFAULT_CATALOG_JSON};
pub use config::{ConfigError, ConfigState, OutputFormat};
pub use session::Session;
