//! # Commands Module
//!
//! The command and query surface the presentation layer calls into.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── product.rs   ◄─── Catalog listing and lookup
//! ├── cart.rs      ◄─── Cart commands and the cart query
//! ├── checkout.rs  ◄─── Checkout placeholder
//! └── config.rs    ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: &CartStore) -> CartResponse
//!
//! // Needs catalog (read) and cart (write)
//! fn add_to_cart(catalog: &Catalog, cart: &mut CartStore, product_id: &str)
//! ```
//!
//! Every command returns only after the cart has reached its new state, so a
//! query issued next always observes it.

pub mod cart;
pub mod checkout;
pub mod config;
pub mod product;
