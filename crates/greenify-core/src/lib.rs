//! # greenify-core: Pure Cart Logic for the Greenify Storefront
//!
//! This crate holds the storefront's state management as pure code with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Greenify Storefront                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (terminal shell)                   │   │
//! │  │      Catalog page ──► Cart page ──► Checkout (placeholder)      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands / queries                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ greenify-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   cart    │  │   views   │  │   money   │  │   │
//! │  │   │  Catalog  │  │ CartStore │  │  Summary  │  │   Money   │  │   │
//! │  │   │  Product  │  │ CartState │  │  Sections │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • DETERMINISTIC STATE TRANSITIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Flow
//! One direction only: user action → [`CartStore`] command → new
//! [`CartState`] → derived views recomputed → presentation re-renders.
//!
//! ## Modules
//!
//! - [`types`] - Product and LineItem
//! - [`catalog`] - Validated, read-only product list
//! - [`cart`] - Cart Store: state, commands, listeners
//! - [`views`] - Derived views and their memoization
//! - [`money`] - Integer money
//! - [`validation`] - Product field rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use greenify_core::{CartStore, Catalog, Product};
//!
//! let catalog = Catalog::new(vec![
//!     Product::new("monstera", "Monstera Deliciosa", 2499, "Pflegeleicht"),
//! ]).unwrap();
//!
//! let mut cart = CartStore::new();
//! cart.add_to_cart(catalog.require("monstera").unwrap());
//! cart.increment("monstera");
//!
//! assert_eq!(cart.total_quantity(), 2);
//! assert_eq!(cart.total_cost().to_string(), "€49.98");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;
pub mod views;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartEvent, CartState, CartStore, ListenerId};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
pub use views::{CartSummary, CategorySection, ProductListing};
