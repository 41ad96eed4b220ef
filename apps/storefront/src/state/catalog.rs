//! # Catalog Loading
//!
//! Resolves the product catalog the session sells from.
//!
//! ```text
//! ConfigState.catalog_path
//!      │
//!      ├── None ────► embedded catalog/plants.json
//!      │
//!      └── Some(p) ─► read p from disk
//!                          │
//!                          ▼
//!                  Catalog::from_json (validates)
//! ```

use std::fs;

use greenify_core::Catalog;
use tracing::info;

use crate::error::{ApiError, ErrorCode};
use crate::state::ConfigState;

/// The house-plant catalog shipped with the binary.
pub const DEFAULT_CATALOG_JSON: &str = include_str!("../../catalog/plants.json");

/// Loads and validates the configured catalog.
pub fn load_catalog(config: &ConfigState) -> Result<Catalog, ApiError> {
    let catalog = match &config.catalog_path {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|e| {
                ApiError::new(
                    ErrorCode::CatalogError,
                    format!("Cannot read catalog {}: {}", path.display(), e),
                )
            })?;
            Catalog::from_json(&json)?
        }
        None => Catalog::from_json(DEFAULT_CATALOG_JSON)?,
    };

    info!(
        products = catalog.len(),
        categories = catalog.categories().len(),
        source = %config
            .catalog_path
            .as_ref()
            .map_or_else(|| "embedded".to_string(), |p| p.display().to_string()),
        "Catalog loaded"
    );

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_embedded_catalog_is_valid() {
        let catalog = load_catalog(&ConfigState::default()).unwrap();
        assert_eq!(catalog.len(), 6);
        assert_eq!(
            catalog.categories(),
            vec![
                "Pflegeleicht",
                "Luftreiniger",
                "Schattentolerant",
                "Hängepflanzen"
            ]
        );
        assert_eq!(catalog.get("calathea").unwrap().price_cents, 3499);
    }

    #[test]
    fn test_missing_file_is_catalog_error() {
        let config = ConfigState {
            catalog_path: Some(PathBuf::from("/definitely/not/here/plants.json")),
            ..ConfigState::default()
        };
        let err = load_catalog(&config).unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogError);
        assert!(err.message.contains("/definitely/not/here/plants.json"));
    }

    #[test]
    fn test_catalog_from_file() {
        let path = std::env::temp_dir().join(format!(
            "greenify-catalog-test-{}.json",
            std::process::id()
        ));
        fs::write(
            &path,
            r#"[{"id":"aloe","name":"Aloe Vera","price_cents":999,"category":"Sukkulenten"}]"#,
        )
        .unwrap();

        let config = ConfigState {
            catalog_path: Some(path.clone()),
            ..ConfigState::default()
        };
        let catalog = load_catalog(&config).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("aloe").is_some());
    }
}
