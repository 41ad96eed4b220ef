//! # Session State
//!
//! One shopper, one cart, one process.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Session                                                                │
//! │  ├── id        (UUID, tags every log line of this run)                  │
//! │  ├── config    (read-only)                                              │
//! │  ├── catalog   (read-only)                                              │
//! │  └── cart      (the only mutable state; changed via commands only)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands borrow just the piece they need, so there is no global store and
//! no locking: the shell runs one command to completion before reading the
//! next line.

use greenify_core::{CartEvent, CartState, CartStore, Catalog};
use tracing::{debug, info_span};
use uuid::Uuid;

use crate::state::ConfigState;

/// Everything a running storefront owns.
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub config: ConfigState,
    pub catalog: Catalog,
    pub cart: CartStore,
}

impl Session {
    /// Creates a session with an empty cart and a logging listener attached.
    pub fn new(config: ConfigState, catalog: Catalog) -> Self {
        let id = Uuid::new_v4();
        let mut cart = CartStore::new();
        cart.subscribe(move |event, state| log_cart_event(id, event, state));

        Session {
            id,
            config,
            catalog,
            cart,
        }
    }
}

fn log_cart_event(session_id: Uuid, event: &CartEvent, state: &CartState) {
    let span = info_span!("session", %session_id);
    let _guard = span.enter();
    debug!(
        ?event,
        version = state.version(),
        distinct = state.len(),
        "Cart changed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenify_core::Product;

    #[test]
    fn test_new_session_starts_empty() {
        let catalog = Catalog::new(vec![Product::new("a", "A", 100, "X")]).unwrap();
        let session = Session::new(ConfigState::default(), catalog);

        assert!(session.cart.items().is_empty());
        assert_eq!(session.cart.version(), 0);
        assert_eq!(session.catalog.len(), 1);
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        let a = Session::new(ConfigState::default(), Catalog::default());
        let b = Session::new(ConfigState::default(), Catalog::default());
        assert_ne!(a.id, b.id);
    }
}
