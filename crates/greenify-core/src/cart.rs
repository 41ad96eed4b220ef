//! # Cart Store
//!
//! Owns the single source of truth for the cart: the mapping from product id
//! to line item.
//!
//! ## Line Item Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   [absent] ──add_to_cart──► [qty=1] ──increment──► [qty=n+1]            │
//! │      ▲                         │                                        │
//! │      │                         │ decrement (n>1) ──► [qty=n-1]          │
//! │      │                         │                                        │
//! │      └──── decrement (n=1) ────┤                                        │
//! │      └──── remove ─────────────┤                                        │
//! │      └──── clear (cart-wide) ──┘                                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tolerant Operations
//! Every operation is total. Unknown ids, repeated adds and clearing an empty
//! cart are no-ops that return `None` and leave the state (and its version)
//! untouched. Effective changes return `Some(CartEvent)` and are announced to
//! subscribed listeners after the state change is complete.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{LineItem, Product};
use crate::views::{CartSummary, SummaryCache};

// =============================================================================
// Cart State
// =============================================================================

/// The full mapping from product id to line item at a point in time.
///
/// ## Invariants
/// - At most one line item per product id
/// - Every quantity is >= 1
/// - Items keep the order in which their product was first added
///
/// The state can only be changed through [`CartStore`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CartState {
    items: Vec<LineItem>,
    version: u64,
}

impl CartState {
    /// Line items in insertion order.
    #[inline]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, product_id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product_id() == product_id)
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.get(product_id).is_some()
    }

    /// Quantity of a product, 0 when it is not in the cart.
    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.get(product_id).map_or(0, |i| i.quantity)
    }

    /// Number of distinct products.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bumped on every effective mutation, never on a no-op.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    fn position(&self, product_id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.product_id() == product_id)
    }
}

// =============================================================================
// Cart Events
// =============================================================================

/// An effective change to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CartEvent {
    /// Product entered the cart with quantity 1.
    Added { product_id: String },
    /// Quantity went up; `quantity` is the new value.
    Incremented { product_id: String, quantity: u32 },
    /// Quantity went down but stayed positive; `quantity` is the new value.
    Decremented { product_id: String, quantity: u32 },
    /// Line item left the cart, explicitly or by decrementing from 1.
    Removed { product_id: String },
    /// All line items were dropped.
    Cleared { removed: usize },
}

impl CartEvent {
    /// Product this event concerns, `None` for cart-wide events.
    pub fn product_id(&self) -> Option<&str> {
        match self {
            CartEvent::Added { product_id }
            | CartEvent::Incremented { product_id, .. }
            | CartEvent::Decremented { product_id, .. }
            | CartEvent::Removed { product_id } => Some(product_id),
            CartEvent::Cleared { .. } => None,
        }
    }
}

// =============================================================================
// Listeners
// =============================================================================

/// Handle returned by [`CartStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&CartEvent, &CartState)>;

// =============================================================================
// Cart Store
// =============================================================================

/// Owns the cart state and the operations that change it.
///
/// ```rust
/// use greenify_core::{CartStore, Product};
///
/// let mut cart = CartStore::new();
/// let a = Product::new("a", "Plant A", 1000, "Green");
/// let b = Product::new("b", "Plant B", 500, "Green");
///
/// cart.add_to_cart(&a);
/// cart.add_to_cart(&b);
/// cart.increment("a");
///
/// assert_eq!(cart.total_quantity(), 3);
/// assert_eq!(cart.total_cost().cents(), 2500);
/// ```
pub struct CartStore {
    state: CartState,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
    summary: SummaryCache,
}

impl CartStore {
    /// Creates an empty cart.
    pub fn new() -> Self {
        CartStore {
            state: CartState::default(),
            listeners: Vec::new(),
            next_listener_id: 0,
            summary: SummaryCache::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    /// Adds a product with quantity 1.
    ///
    /// Idempotent: if the product is already in the cart nothing changes, so
    /// a repeated add can neither reset the quantity nor duplicate the entry.
    pub fn add_to_cart(&mut self, product: &Product) -> Option<CartEvent> {
        if self.state.contains(&product.id) {
            return None;
        }

        self.state.items.push(LineItem::new(product.clone()));
        self.commit(CartEvent::Added {
            product_id: product.id.clone(),
        })
    }

    /// Raises the quantity by one. Unknown ids are ignored.
    pub fn increment(&mut self, product_id: &str) -> Option<CartEvent> {
        let index = self.state.position(product_id)?;
        let item = &mut self.state.items[index];

        let quantity = item.quantity.checked_add(1)?;
        item.quantity = quantity;

        self.commit(CartEvent::Incremented {
            product_id: product_id.to_string(),
            quantity,
        })
    }

    /// Lowers the quantity by one, removing the line item when it would hit 0.
    /// Unknown ids are ignored.
    pub fn decrement(&mut self, product_id: &str) -> Option<CartEvent> {
        let index = self.state.position(product_id)?;
        let item = &mut self.state.items[index];

        if item.quantity > 1 {
            item.quantity -= 1;
            let quantity = item.quantity;
            return self.commit(CartEvent::Decremented {
                product_id: product_id.to_string(),
                quantity,
            });
        }

        self.state.items.remove(index);
        self.commit(CartEvent::Removed {
            product_id: product_id.to_string(),
        })
    }

    /// Drops a line item regardless of its quantity. Unknown ids are ignored.
    pub fn remove(&mut self, product_id: &str) -> Option<CartEvent> {
        let index = self.state.position(product_id)?;
        self.state.items.remove(index);
        self.commit(CartEvent::Removed {
            product_id: product_id.to_string(),
        })
    }

    /// Empties the cart.
    pub fn clear(&mut self) -> Option<CartEvent> {
        if self.state.is_empty() {
            return None;
        }

        let removed = self.state.items.len();
        self.state.items.clear();
        self.commit(CartEvent::Cleared { removed })
    }

    /// Bumps the version, then tells every listener in registration order.
    fn commit(&mut self, event: CartEvent) -> Option<CartEvent> {
        self.state.version += 1;
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event, &self.state);
        }
        Some(event)
    }

    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    /// Registers a listener called after every effective mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&CartEvent, &CartState) + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if the listener was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Raw state, read-only.
    #[inline]
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Line items in insertion order.
    #[inline]
    pub fn items(&self) -> &[LineItem] {
        self.state.items()
    }

    pub fn get(&self, product_id: &str) -> Option<&LineItem> {
        self.state.get(product_id)
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.state.contains(product_id)
    }

    #[inline]
    pub fn version(&self) -> u64 {
        self.state.version()
    }

    /// Aggregates for the current state, memoized per version.
    pub fn summary(&self) -> CartSummary {
        self.summary.get(&self.state)
    }

    pub fn distinct_count(&self) -> usize {
        self.summary().distinct_count
    }

    pub fn total_quantity(&self) -> u64 {
        self.summary().total_quantity
    }

    pub fn total_cost(&self) -> Money {
        self.summary().total_cost
    }

    /// How often the memoized summary was actually recomputed.
    pub fn summary_recomputations(&self) -> u64 {
        self.summary.recomputations()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
