//! # Cart Commands
//!
//! Commands that change the cart, and the cart query.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐  add_to_cart   ┌──────────┐  checkout   ┌──────────────┐  │
//! │  │  Empty   │───────────────►│ In Cart  │────────────►│ "coming soon"│  │
//! │  │  Cart    │                │          │             └──────────────┘  │
//! │  └──────────┘                └──────────┘                               │
//! │       ▲                        │    ▲                                   │
//! │       │                        │    │ increment_item                    │
//! │       │                        │    │ decrement_item                    │
//! │       │                        ▼    │ remove_from_cart                  │
//! │       └──────── clear_cart ─── (last item gone) ────────────────────────│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only `add_to_cart` can fail, and only because the id must first be
//! resolved against the catalog. Every other command treats an unknown id as
//! a no-op.

use greenify_core::{CartEvent, CartStore, CartSummary, Catalog, LineItem};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;

/// Cart contents with totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    pub totals: CartSummary,
}

impl From<&CartStore> for CartResponse {
    fn from(cart: &CartStore) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: cart.summary(),
        }
    }
}

/// Result of a cart command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartUpdate {
    /// What changed; `None` when the command was a no-op
    pub event: Option<CartEvent>,
    pub cart: CartResponse,
}

impl CartUpdate {
    fn new(event: Option<CartEvent>, cart: &CartStore) -> Self {
        CartUpdate {
            event,
            cart: CartResponse::from(cart),
        }
    }

    pub fn changed(&self) -> bool {
        self.event.is_some()
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartStore) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(cart)
}

/// Adds a catalog product to the cart.
///
/// ## Behavior
/// - Unknown id: `NOT_FOUND`
/// - Already in cart: no change (`event` is `None`), quantity is kept
/// - Otherwise: new line item with quantity 1
pub fn add_to_cart(
    catalog: &Catalog,
    cart: &mut CartStore,
    product_id: &str,
) -> Result<CartUpdate, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let product = catalog.require(product_id)?;
    let event = cart.add_to_cart(product);
    if event.is_none() {
        debug!(product_id = %product_id, "already in cart");
    }

    Ok(CartUpdate::new(event, cart))
}

/// Raises a line item's quantity by one.
pub fn increment_item(cart: &mut CartStore, product_id: &str) -> CartUpdate {
    debug!(product_id = %product_id, "increment_item command");
    let event = cart.increment(product_id);
    CartUpdate::new(event, cart)
}

/// Lowers a line item's quantity by one; the last unit removes the item.
pub fn decrement_item(cart: &mut CartStore, product_id: &str) -> CartUpdate {
    debug!(product_id = %product_id, "decrement_item command");
    let event = cart.decrement(product_id);
    CartUpdate::new(event, cart)
}

/// Removes a line item regardless of quantity.
pub fn remove_from_cart(cart: &mut CartStore, product_id: &str) -> CartUpdate {
    debug!(product_id = %product_id, "remove_from_cart command");
    let event = cart.remove(product_id);
    CartUpdate::new(event, cart)
}

/// Empties the cart.
pub fn clear_cart(cart: &mut CartStore) -> CartUpdate {
    debug!("clear_cart command");
    let event = cart.clear();
    CartUpdate::new(event, cart)
}
