//! # Domain Types
//!
//! Core domain types shared by the catalog and the cart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐          ┌─────────────────────┐                  │
//! │  │    Product      │ snapshot │      LineItem       │                  │
//! │  │  ─────────────  │ ───────► │  ─────────────────  │                  │
//! │  │  id (slug)      │          │  product (frozen)   │                  │
//! │  │  name           │          │  quantity (>= 1)    │                  │
//! │  │  price_cents    │          │  added_at           │                  │
//! │  │  category       │          └─────────────────────┘                  │
//! │  │  image          │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product offered in the catalog.
///
/// Products are immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique, stable identifier (e.g. `monstera`).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Unit price in cents.
    pub price_cents: i64,

    /// Category label used to group the catalog.
    pub category: String,

    /// Image path for the presentation layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    /// Creates a product without an image.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price_cents: i64,
        category: impl Into<String>,
    ) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price_cents,
            category: category.into(),
            image: None,
        }
    }

    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One product's presence in the cart.
///
/// Uses the snapshot pattern: `product` is the product exactly as it was
/// passed to `add_to_cart`, and `quantity` is always at least 1 while the
/// line item exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product as it was when first added.
    pub product: Product,

    /// Quantity in cart.
    pub quantity: u32,

    /// When this product was first added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    pub(crate) fn new(product: Product) -> Self {
        LineItem {
            product,
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Product id this line item is keyed by.
    #[inline]
    pub fn product_id(&self) -> &str {
        &self.product.id
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(i64::from(self.quantity))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
