//! # Product Commands
//!
//! Read-only catalog queries.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Unsere Pflanzen                                                        │
//! │                                                                         │
//! │  Pflegeleicht                                                           │
//! │    monstera   Monstera Deliciosa          € 24.99   [add]               │
//! │    snake      Sansevieria (Bogenhanf)     € 19.99   (in cart)           │
//! │  Luftreiniger                                                           │
//! │    ficus      Ficus Elastica              € 29.99   [add]               │
//! │                                                                         │
//! │  list_products() → [{ category, products: [{ product, inCart }] }]      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use greenify_core::views::catalog_sections;
use greenify_core::{CartStore, Catalog, CategorySection, Product};
use tracing::debug;

use crate::error::ApiError;

/// Lists the catalog grouped by category, flagging products already in the
/// cart.
pub fn list_products(catalog: &Catalog, cart: &CartStore) -> Vec<CategorySection> {
    debug!(products = catalog.len(), "list_products command");
    catalog_sections(catalog, cart.state())
}

/// Looks up a single product.
pub fn get_product(catalog: &Catalog, product_id: &str) -> Result<Product, ApiError> {
    debug!(product_id = %product_id, "get_product command");
    Ok(catalog.require(product_id)?.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("monstera", "Monstera Deliciosa", 2499, "Pflegeleicht"),
            Product::new("ficus", "Ficus Elastica", 2999, "Luftreiniger"),
        ])
        .unwrap()
    }

    #[test]
    fn test_list_products_reflects_cart() {
        let catalog = catalog();
        let mut cart = CartStore::new();

        let before = list_products(&catalog, &cart);
        assert!(before.iter().flat_map(|s| &s.products).all(|l| !l.in_cart));

        cart.add_to_cart(catalog.get("ficus").unwrap());
        let after = list_products(&catalog, &cart);
        assert!(after[1].products[0].in_cart);
        assert!(!after[0].products[0].in_cart);
    }

    #[test]
    fn test_get_product() {
        let catalog = catalog();
        assert_eq!(get_product(&catalog, "ficus").unwrap().name, "Ficus Elastica");

        let err = get_product(&catalog, "cactus").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
