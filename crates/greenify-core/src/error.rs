//! # Error Types
//!
//! Domain-specific error types for greenify-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  greenify-core errors (this file)                                      │
//! │  ├── CoreError        - Catalog lookup and loading failures            │
//! │  └── ValidationError  - Product field validation failures              │
//! │                                                                         │
//! │  storefront errors (app crate)                                         │
//! │  └── ApiError         - What the shell reports (serializable)          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Shell output           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart operations are total and have no error type at all. An unknown
//! product id is a "no matching item" case, never a failure.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Catalog and lookup errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id is not part of the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Two catalog entries share the same id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(String),

    /// Catalog document is not valid JSON or does not match the product shape.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(#[from] serde_json::Error),

    /// A catalog entry failed field validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. product id with spaces).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound("monstera".to_string());
        assert_eq!(err.to_string(), "Product not found: monstera");

        let err = CoreError::DuplicateProduct("zz".to_string());
        assert_eq!(err.to_string(), "Duplicate product id in catalog: zz");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: 100,
        };
        assert_eq!(err.to_string(), "price must be between 0 and 100");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "id".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_json_error_converts_to_core_error() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let core_err: CoreError = json_err.into();
        assert!(matches!(core_err, CoreError::InvalidCatalog(_)));
    }
}
