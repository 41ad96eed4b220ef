//! # Validation Module
//!
//! Field validation for catalog products.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  └── Shape and types of the catalog document                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Per-field rules (ids, names, prices)                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog::new                                                 │
//! │  └── Cross-entry rules (unique ids)                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart itself never validates: once a catalog is accepted, every cart
//! operation is total.

use crate::error::ValidationError;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

pub const MAX_PRODUCT_ID_LEN: usize = 64;
pub const MAX_PRODUCT_NAME_LEN: usize = 200;
pub const MAX_CATEGORY_LEN: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product id.
///
/// ## Rules
/// - Must not be empty
/// - At most 64 characters
/// - Only letters, digits, hyphens and underscores
///
/// ```rust
/// use greenify_core::validation::validate_product_id;
///
/// assert!(validate_product_id("monstera").is_ok());
/// assert!(validate_product_id("snake-plant_2").is_ok());
/// assert!(validate_product_id("").is_err());
/// assert!(validate_product_id("has space").is_err());
/// ```
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > MAX_PRODUCT_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_PRODUCT_ID_LEN,
        });
    }

    if !id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a product display name.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_text("name", name, MAX_PRODUCT_NAME_LEN)
}

/// Validates a category label.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    validate_text("category", category, MAX_CATEGORY_LEN)
}

fn validate_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// Zero is allowed (free items), negative prices are not.
///
/// ```rust
/// use greenify_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(2499).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates every field of a product.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_id(&product.id)?;
    validate_product_name(&product.name)?;
    validate_category(&product.category)?;
    validate_price_cents(product.price_cents)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
