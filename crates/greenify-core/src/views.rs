//! # Derived Views
//!
//! Pure projections of [`CartState`]: the ordered item list, the aggregates
//! shown in the header and cart page, and the catalog listing with "already in
//! cart" flags.
//!
//! ## Memoization
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  read summary ──► cached version == state.version()?                    │
//! │                        │ yes                │ no                        │
//! │                        ▼                    ▼                           │
//! │                  return cached        summarize(state)  O(items)        │
//! │                                       store (version, summary)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! The cache is an optimization only: [`summarize`] on the same state always
//! yields the same value.

use std::cell::Cell;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartState;
use crate::catalog::Catalog;
use crate::money::Money;
use crate::types::{LineItem, Product};

// =============================================================================
// Pure Projections
// =============================================================================

/// Line items in insertion order.
#[inline]
pub fn items(state: &CartState) -> &[LineItem] {
    state.items()
}

/// Number of distinct products in the cart.
#[inline]
pub fn distinct_count(state: &CartState) -> usize {
    state.len()
}

/// Sum of all quantities. Zero for an empty cart.
pub fn total_quantity(state: &CartState) -> u64 {
    state.items().iter().map(|i| u64::from(i.quantity)).sum()
}

/// Sum of quantity × unit price. Zero for an empty cart.
pub fn total_cost(state: &CartState) -> Money {
    state.items().iter().map(LineItem::line_total).sum()
}

/// All aggregates in one pass.
pub fn summarize(state: &CartState) -> CartSummary {
    let (total_quantity, total_cost) = state.items().iter().fold(
        (0u64, Money::zero()),
        |(qty, cost), item| (qty + u64::from(item.quantity), cost + item.line_total()),
    );

    CartSummary {
        distinct_count: state.len(),
        total_quantity,
        total_cost,
    }
}

// =============================================================================
// Cart Summary
// =============================================================================

/// Aggregate values of a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub distinct_count: usize,
    pub total_quantity: u64,
    pub total_cost: Money,
}

impl CartSummary {
    pub fn is_empty(&self) -> bool {
        self.distinct_count == 0
    }
}

// =============================================================================
// Summary Cache
// =============================================================================

/// Memoizes [`summarize`] keyed by [`CartState::version`].
#[derive(Debug, Default)]
pub struct SummaryCache {
    cached: Cell<Option<(u64, CartSummary)>>,
    recomputations: Cell<u64>,
}

impl SummaryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the summary for `state`, recomputing only if the version moved.
    pub fn get(&self, state: &CartState) -> CartSummary {
        if let Some((version, summary)) = self.cached.get() {
            if version == state.version() {
                return summary;
            }
        }

        let summary = summarize(state);
        self.cached.set(Some((state.version(), summary)));
        self.recomputations.set(self.recomputations.get() + 1);
        summary
    }

    pub fn recomputations(&self) -> u64 {
        self.recomputations.get()
    }
}

// =============================================================================
// Catalog Listing
// =============================================================================

/// A catalog product together with its cart status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductListing {
    pub product: Product,
    /// Already in the cart; the storefront disables "add" for these.
    pub in_cart: bool,
    pub quantity_in_cart: u32,
}

/// One category block of the catalog page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategorySection {
    pub category: String,
    pub products: Vec<ProductListing>,
}

/// Groups the catalog by category (first-appearance order) and marks the
/// products that are already in the cart.
pub fn catalog_sections(catalog: &Catalog, state: &CartState) -> Vec<CategorySection> {
    catalog
        .categories()
        .into_iter()
        .map(|category| CategorySection {
            category: category.to_string(),
            products: catalog
                .in_category(category)
                .map(|product| {
                    let quantity_in_cart = state.quantity_of(&product.id);
                    ProductListing {
                        product: product.clone(),
                        in_cart: quantity_in_cart > 0,
                        quantity_in_cart,
                    }
                })
                .collect(),
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartStore;

    fn product(id: &str, price_cents: i64, category: &str) -> Product {
        Product::new(id, format!("Plant {}", id), price_cents, category)
    }

    fn sample_cart() -> CartStore {
        let mut cart = CartStore::new();
        cart.add_to_cart(&product("monstera", 2499, "Pflegeleicht"));
        cart.add_to_cart(&product("pothos", 1499, "Hängepflanzen"));
        cart.increment("monstera");
        cart.increment("monstera");
        cart
    }

    #[test]
    fn test_empty_state_projections() {
        let state = CartState::default();
        assert!(items(&state).is_empty());
        assert_eq!(distinct_count(&state), 0);
        assert_eq!(total_quantity(&state), 0);
        assert_eq!(total_cost(&state), Money::zero());
        assert!(summarize(&state).is_empty());
    }

    #[test]
    fn test_totals_agree_with_items() {
        let cart = sample_cart();
        let state = cart.state();

        let qty: u64 = items(state).iter().map(|i| u64::from(i.quantity)).sum();
        let cost: i64 = items(state)
            .iter()
            .map(|i| i64::from(i.quantity) * i.product.price_cents)
            .sum();

        assert_eq!(total_quantity(state), qty);
        assert_eq!(total_cost(state).cents(), cost);
        assert_eq!(total_quantity(state), 4);
        assert_eq!(total_cost(state).cents(), 3 * 2499 + 1499);
    }

    #[test]
    fn test_summarize_matches_individual_projections() {
        let cart = sample_cart();
        let summary = summarize(cart.state());

        assert_eq!(summary.distinct_count, distinct_count(cart.state()));
        assert_eq!(summary.total_quantity, total_quantity(cart.state()));
        assert_eq!(summary.total_cost, total_cost(cart.state()));
        assert_eq!(cart.summary(), summary);
    }

    #[test]
    fn test_cache_skips_recompute_without_mutation() {
        let mut cart = sample_cart();

        cart.summary();
        cart.total_quantity();
        cart.total_cost();
        assert_eq!(cart.summary_recomputations(), 1);

        // no-op commands leave the version alone
        cart.increment("ghost");
        cart.add_to_cart(&product("pothos", 1499, "Hängepflanzen"));
        cart.total_cost();
        assert_eq!(cart.summary_recomputations(), 1);

        cart.decrement("pothos");
        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.summary_recomputations(), 2);
    }

    #[test]
    fn test_cache_never_serves_stale_values() {
        let mut cart = CartStore::new();
        let p = product("a", 1000, "X");

        assert_eq!(cart.total_quantity(), 0);
        cart.add_to_cart(&p);
        assert_eq!(cart.total_quantity(), 1);
        cart.increment("a");
        assert_eq!(cart.total_cost().cents(), 2000);
        cart.clear();
        assert_eq!(cart.summary(), CartSummary::default());
    }

    #[test]
    fn test_catalog_sections_flag_cart_items() {
        let catalog = Catalog::new(vec![
            product("monstera", 2499, "Pflegeleicht"),
            product("ficus", 2999, "Luftreiniger"),
            product("snake", 1999, "Pflegeleicht"),
        ])
        .unwrap();

        let mut cart = CartStore::new();
        cart.add_to_cart(catalog.get("snake").unwrap());
        cart.increment("snake");

        let sections = catalog_sections(&catalog, cart.state());

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].category, "Pflegeleicht");
        assert_eq!(sections[1].category, "Luftreiniger");

        let easy = &sections[0].products;
        assert_eq!(easy.len(), 2);
        assert!(!easy[0].in_cart);
        assert!(easy[1].in_cart);
        assert_eq!(easy[1].quantity_in_cart, 2);
    }

    #[test]
    fn test_summary_json_shape() {
        let summary = CartSummary {
            distinct_count: 2,
            total_quantity: 3,
            total_cost: Money::from_cents(2500),
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert_eq!(
            json,
            r#"{"distinctCount":2,"totalQuantity":3,"totalCost":2500}"#
        );
    }
}
