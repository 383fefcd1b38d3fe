//! # Configuration State
//!
//! Stores register configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TALLY_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no locking needed.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tally_core::format::{format_primary, format_secondary};
use tally_core::{PayableRounding, DEFAULT_BREAKPOINT, DEFAULT_DENOMINATION};

/// Register configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown by the page header)
    pub store_name: String,

    /// Explicit catalog file; falls back to the platform data directory
    pub catalog_path: Option<PathBuf>,

    /// Symbol written before primary-currency amounts
    pub primary_symbol: String,

    /// Code written after secondary-currency amounts
    pub secondary_currency: String,

    /// Smallest cash note, in secondary currency units
    pub denomination: i64,

    /// Remainder from which payable amounts round up
    pub breakpoint: i64,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Currencies: `$` primary, `SYP` secondary
    /// - Payable rounding: 500 step, rounds up from 250
    /// - Catalog: platform data directory
    fn default() -> Self {
        ConfigState {
            store_name: "Tally Store".to_string(),
            catalog_path: None,
            primary_symbol: "$".to_string(),
            secondary_currency: "SYP".to_string(),
            denomination: DEFAULT_DENOMINATION,
            breakpoint: DEFAULT_BREAKPOINT,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TALLY_STORE_NAME`: Override store name
    /// - `TALLY_CATALOG_PATH`: Catalog JSON file
    /// - `TALLY_PRIMARY_SYMBOL`: Primary currency symbol
    /// - `TALLY_SECONDARY_CURRENCY`: Secondary currency code
    /// - `TALLY_DENOMINATION`: Payable rounding step (e.g. "500")
    /// - `TALLY_BREAKPOINT`: Round-up remainder (e.g. "250")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("TALLY_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(path) = lookup("TALLY_CATALOG_PATH") {
            config.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(symbol) = lookup("TALLY_PRIMARY_SYMBOL") {
            config.primary_symbol = symbol;
        }

        if let Some(code) = lookup("TALLY_SECONDARY_CURRENCY") {
            config.secondary_currency = code;
        }

        if let Some(step) = lookup("TALLY_DENOMINATION") {
            config.denomination = step
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("TALLY_DENOMINATION".to_string()))?;
        }

        if let Some(breakpoint) = lookup("TALLY_BREAKPOINT") {
            config.breakpoint = breakpoint
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("TALLY_BREAKPOINT".to_string()))?;
        }

        // Catch a bad step/breakpoint pair at startup, not on first submit
        config.rounding()?;

        Ok(config)
    }

    /// Payable rounding rule built from the configured denomination.
    pub fn rounding(&self) -> Result<PayableRounding, ConfigError> {
        PayableRounding::new(self.denomination, self.breakpoint)
            .map_err(|e| ConfigError::InvalidRounding(e.to_string()))
    }

    /// Formats a primary-currency amount, e.g. `"$12.50"`.
    pub fn format_primary(&self, amount: f64) -> String {
        format!("{}{}", self.primary_symbol, format_primary(Some(amount)))
    }

    /// Formats a secondary-currency amount, e.g. `"60,000 SYP"`.
    pub fn format_secondary(&self, amount: f64) -> String {
        format!(
            "{} {}",
            format_secondary(Some(amount)),
            self.secondary_currency
        )
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Invalid payable rounding: {0}")]
    InvalidRounding(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::from_lookup(|_| None).unwrap();
        assert_eq!(config.denomination, 500);
        assert_eq!(config.breakpoint, 250);
        assert!(config.catalog_path.is_none());
        assert_eq!(config.rounding().unwrap(), PayableRounding::default());
    }

    #[test]
    fn test_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("TALLY_STORE_NAME", "Corner Shop"),
            ("TALLY_CATALOG_PATH", "/tmp/catalog.json"),
            ("TALLY_DENOMINATION", "1000"),
            ("TALLY_BREAKPOINT", " 500 "),
        ]))
        .unwrap();

        assert_eq!(config.store_name, "Corner Shop");
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.json")));
        assert_eq!(config.rounding().unwrap().step(), 1000);
        assert_eq!(config.rounding().unwrap().breakpoint(), 500);
    }

    #[test]
    fn test_invalid_numbers_are_rejected() {
        let result = ConfigState::from_lookup(lookup_from(&[("TALLY_DENOMINATION", "five")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));

        let result = ConfigState::from_lookup(lookup_from(&[("TALLY_BREAKPOINT", "900")]));
        assert!(matches!(result, Err(ConfigError::InvalidRounding(_))));
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_primary(12.5), "$12.50");
        assert_eq!(config.format_secondary(60_000.0), "60,000 SYP");
    }
}
