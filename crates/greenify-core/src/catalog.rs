//! # Product Catalog
//!
//! The fixed, read-only list of products offered by the store.
//!
//! The catalog is built once at startup and never mutated. Cart operations
//! receive products from it; the cart never reads back into it.
//!
//! ## Loading
//! ```text
//! JSON document ──► serde ──► Vec<Product> ──► Catalog::new ──► Catalog
//!                   (shape)                     (fields, unique ids)
//! ```

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult};
use crate::types::Product;
use crate::validation::validate_product;

/// A validated, ordered list of products.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, validating every product and rejecting duplicate ids.
    ///
    /// ```rust
    /// use greenify_core::{Catalog, Product};
    ///
    /// let catalog = Catalog::new(vec![
    ///     Product::new("monstera", "Monstera Deliciosa", 2499, "Pflegeleicht"),
    ///     Product::new("ficus", "Ficus Elastica", 2999, "Luftreiniger"),
    /// ]).unwrap();
    ///
    /// assert_eq!(catalog.len(), 2);
    /// assert!(catalog.get("ficus").is_some());
    /// ```
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            validate_product(product)?;
            if !seen.insert(product.id.as_str()) {
                return Err(CoreError::DuplicateProduct(product.id.clone()));
            }
        }

        Ok(Catalog { products })
    }

    /// Parses a JSON array of products and validates it.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Catalog::new(products)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Like [`Catalog::get`], but an unknown id is an error.
    pub fn require(&self, id: &str) -> CoreResult<&Product> {
        self.get(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Products of one category, in catalog order.
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |p| p.category == category)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn plants() -> Vec<Product> {
        vec![
            Product::new("monstera", "Monstera Deliciosa", 2499, "Pflegeleicht"),
            Product::new("ficus", "Ficus Elastica", 2999, "Luftreiniger"),
            Product::new("snake", "Sansevieria (Bogenhanf)", 1999, "Pflegeleicht"),
            Product::new("calathea", "Calathea Orbifolia", 3499, "Schattentolerant"),
        ]
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = Catalog::new(plants()).unwrap();
        let ids: Vec<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["monstera", "ficus", "snake", "calathea"]);
    }

    #[test]
    fn test_categories_first_appearance_order() {
        let catalog = Catalog::new(plants()).unwrap();
        assert_eq!(
            catalog.categories(),
            vec!["Pflegeleicht", "Luftreiniger", "Schattentolerant"]
        );
    }

    #[test]
    fn test_in_category() {
        let catalog = Catalog::new(plants()).unwrap();
        let easy: Vec<&str> = catalog
            .in_category("Pflegeleicht")
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(easy, vec!["monstera", "snake"]);
        assert_eq!(catalog.in_category("Kakteen").count(), 0);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut products = plants();
        products.push(Product::new("ficus", "Another Ficus", 100, "Luftreiniger"));

        match Catalog::new(products) {
            Err(CoreError::DuplicateProduct(id)) => assert_eq!(id, "ficus"),
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_product_rejected() {
        let products = vec![Product::new("cheap", "Cheap", -1, "Sale")];
        assert!(matches!(
            Catalog::new(products),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn test_require_unknown_id() {
        let catalog = Catalog::new(plants()).unwrap();
        assert!(catalog.require("monstera").is_ok());
        assert!(matches!(
            catalog.require("cactus"),
            Err(CoreError::ProductNotFound(id)) if id == "cactus"
        ));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id":"pothos","name":"Epipremnum (Efeutute)","price_cents":1499,"category":"Hängepflanzen"},
            {"id":"zz","name":"Zamioculcas Zamiifolia","price_cents":2299,"category":"Schattentolerant","image":"/plants/zz.jpg"}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("zz").unwrap().price_cents, 2299);
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            Catalog::from_json(r#"{"id":"x"}"#),
            Err(CoreError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.categories().is_empty());
    }
}
