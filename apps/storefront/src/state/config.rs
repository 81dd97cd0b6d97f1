//! # Configuration State
//!
//! Storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`MINQTY_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown in the status output)
    pub store_name: String,

    /// Session whose cart this process serves
    pub session_id: String,

    /// Explicit database file; `None` uses the platform data directory
    pub database_path: Option<PathBuf>,

    /// Rows per admin listing page
    pub listing_page_size: u32,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    fn default() -> Self {
        ConfigState {
            store_name: "minqty Dev Store".to_string(),
            session_id: "default".to_string(),
            database_path: None,
            listing_page_size: 20,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `MINQTY_STORE_NAME`: Override store name
    /// - `MINQTY_SESSION_ID`: Override cart session id
    /// - `MINQTY_DB_PATH`: Use this database file
    /// - `MINQTY_LISTING_PAGE_SIZE`: Override admin page size
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("MINQTY_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(session_id) = lookup("MINQTY_SESSION_ID").filter(|s| !s.trim().is_empty()) {
            config.session_id = session_id;
        }

        if let Some(path) = lookup("MINQTY_DB_PATH").filter(|s| !s.is_empty()) {
            config.database_path = Some(PathBuf::from(path));
        }

        if let Some(size) = lookup("MINQTY_LISTING_PAGE_SIZE").and_then(|s| s.parse().ok()) {
            if size > 0 {
                config.listing_page_size = size;
            }
        }

        config
    }
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        assert_eq!(ConfigState::from_lookup(|_| None), ConfigState::default());
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(lookup(&[
            ("MINQTY_STORE_NAME", "Bulk Barn"),
            ("MINQTY_SESSION_ID", "shopper-7"),
            ("MINQTY_DB_PATH", "/tmp/minqty.db"),
            ("MINQTY_LISTING_PAGE_SIZE", "50"),
        ]));

        assert_eq!(config.store_name, "Bulk Barn");
        assert_eq!(config.session_id, "shopper-7");
        assert_eq!(config.database_path, Some(PathBuf::from("/tmp/minqty.db")));
        assert_eq!(config.listing_page_size, 50);
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let config = ConfigState::from_lookup(lookup(&[
            ("MINQTY_SESSION_ID", "  "),
            ("MINQTY_LISTING_PAGE_SIZE", "0"),
        ]));

        assert_eq!(config.session_id, "default");
        assert_eq!(config.listing_page_size, 20);
    }
}
