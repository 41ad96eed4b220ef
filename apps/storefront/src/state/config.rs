//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--catalog`, `--json`)
//! 2. Environment variables (`GREENIFY_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use greenify_core::money::DEFAULT_CURRENCY_SYMBOL;
use serde::{Deserialize, Serialize};

pub const ENV_STORE_NAME: &str = "GREENIFY_STORE_NAME";
pub const ENV_CURRENCY_SYMBOL: &str = "GREENIFY_CURRENCY_SYMBOL";
pub const ENV_CATALOG_PATH: &str = "GREENIFY_CATALOG_PATH";
pub const ENV_OUTPUT: &str = "GREENIFY_OUTPUT";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (header title)
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Catalog file; `None` uses the embedded plant catalog
    pub catalog_path: Option<PathBuf>,

    /// How the shell prints responses
    pub output: OutputFormat,
}

/// Shell output format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,

    /// One JSON document per command
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue(ENV_OUTPUT.to_string())),
        }
    }
}

impl Default for ConfigState {
    /// Store "Greenify Co.", euro prices, embedded catalog, text output.
    fn default() -> Self {
        ConfigState {
            store_name: "Greenify Co.".to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            catalog_path: None,
            output: OutputFormat::Text,
        }
    }
}

impl ConfigState {
    /// Loads configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through a variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = ConfigState::default();

        Ok(ConfigState {
            store_name: get(ENV_STORE_NAME).unwrap_or(defaults.store_name),
            currency_symbol: get(ENV_CURRENCY_SYMBOL).unwrap_or(defaults.currency_symbol),
            catalog_path: get(ENV_CATALOG_PATH).map(PathBuf::from),
            output: match get(ENV_OUTPUT) {
                Some(value) => value.parse()?,
                None => defaults.output,
            },
        })
    }

    /// Applies command-line flags on top of the loaded configuration.
    ///
    /// Recognized: `--catalog <path>`, `--json`, `--text`.
    pub fn apply_args<I>(mut self, args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--catalog" => {
                    let path = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingRequired("--catalog <path>".to_string()))?;
                    self.catalog_path = Some(PathBuf::from(path));
                }
                "--json" => self.output = OutputFormat::Json,
                "--text" => self.output = OutputFormat::Text,
                other => return Err(ConfigError::UnknownArgument(other.to_string())),
            }
        }
        Ok(self)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = ConfigState::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ConfigState::default());
        assert_eq!(config.store_name, "Greenify Co.");
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(lookup(&[
            (ENV_STORE_NAME, "Plant Palace"),
            (ENV_CURRENCY_SYMBOL, "CHF"),
            (ENV_CATALOG_PATH, "/tmp/plants.json"),
            (ENV_OUTPUT, "JSON"),
        ]))
        .unwrap();

        assert_eq!(config.store_name, "Plant Palace");
        assert_eq!(config.currency_symbol, "CHF");
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/plants.json")));
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_empty_values_fall_back() {
        let config = ConfigState::from_lookup(lookup(&[(ENV_STORE_NAME, "  ")])).unwrap();
        assert_eq!(config.store_name, "Greenify Co.");
    }

    #[test]
    fn test_invalid_output_rejected() {
        let result = ConfigState::from_lookup(lookup(&[(ENV_OUTPUT, "xml")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue(key)) if key == ENV_OUTPUT));
    }

    #[test]
    fn test_args_override_env() {
        let config = ConfigState::from_lookup(lookup(&[(ENV_OUTPUT, "json")]))
            .unwrap()
            .apply_args(args(&["--text", "--catalog", "shop.json"]))
            .unwrap();

        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.catalog_path, Some(PathBuf::from("shop.json")));
    }

    #[test]
    fn test_bad_args() {
        let base = ConfigState::default();
        assert!(matches!(
            base.clone().apply_args(args(&["--catalog"])),
            Err(ConfigError::MissingRequired(_))
        ));
        assert!(matches!(
            base.apply_args(args(&["--verbose"])),
            Err(ConfigError::UnknownArgument(a)) if a == "--verbose"
        ));
    }
}
