//! # Storefront Configuration
//!
//! Unified configuration for all subsystems and runtime parameters. Every
//! field has a default; `load_config` applies environment overrides.

use sf_02_cart::CartConfig;
use sf_03_admin_session::AdminConfig;
use shared_bus::DEFAULT_CHANNEL_CAPACITY;
use std::path::PathBuf;
use tracing::warn;

/// Data directory override.
pub const ENV_DATA_DIR: &str = "STOREFRONT_DATA_DIR";
/// Storage backend override (`file` or `memory`).
pub const ENV_STORAGE: &str = "STOREFRONT_STORAGE";
/// Stock check on add (`true`/`false`).
pub const ENV_ENFORCE_STOCK_ON_ADD: &str = "STOREFRONT_ENFORCE_STOCK_ON_ADD";
/// Log filter directive.
pub const ENV_LOG: &str = "STOREFRONT_LOG";

/// Complete storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Cart store configuration.
    pub cart: CartConfig,
    /// Admin session configuration.
    pub admin: AdminConfig,
    /// `tracing-subscriber` filter directive.
    pub log_filter: String,
    /// Events a subscriber may fall behind before it misses some.
    pub event_capacity: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            cart: CartConfig::default(),
            admin: AdminConfig::default(),
            log_filter: "warn".to_string(),
            event_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

/// Where the client-local storage area lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// JSON file under `data_dir`.
    #[default]
    File,
    /// Process memory only. Nothing survives the process.
    Memory,
}

impl StorageBackend {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "file" => Some(Self::File),
            "memory" | "mem" => Some(Self::Memory),
            _ => None,
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory holding the storage file.
    pub data_dir: PathBuf,
    /// Storage file name inside `data_dir`.
    pub file_name: String,
    pub backend: StorageBackend,
}

impl StorageConfig {
    /// Full path of the storage file.
    pub fn file_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./.storefront"),
            file_name: "storage.json".to_string(),
            backend: StorageBackend::File,
        }
    }
}

/// Loads the default configuration with environment overrides applied.
pub fn load_config() -> StorefrontConfig {
    apply_overrides(StorefrontConfig::default(), |key| std::env::var(key).ok())
}

/// Applies overrides from `lookup` (normally the process environment).
///
/// Unparseable values are logged and ignored.
pub fn apply_overrides<F>(mut config: StorefrontConfig, lookup: F) -> StorefrontConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = lookup(ENV_DATA_DIR) {
        if !dir.trim().is_empty() {
            config.storage.data_dir = PathBuf::from(dir);
        }
    }

    if let Some(backend) = lookup(ENV_STORAGE) {
        match StorageBackend::parse(&backend) {
            Some(b) => config.storage.backend = b,
            None => warn!(value = %backend, "{ENV_STORAGE} must be `file` or `memory`"),
        }
    }

    if let Some(flag) = lookup(ENV_ENFORCE_STOCK_ON_ADD) {
        match parse_bool(&flag) {
            Some(enforce) => config.cart.enforce_stock_on_add = enforce,
            None => warn!(value = %flag, "{ENV_ENFORCE_STOCK_ON_ADD} must be true or false"),
        }
    }

    if let Some(filter) = lookup(ENV_LOG) {
        config.log_filter = filter;
    }

    config
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn with_env(pairs: &[(&str, &str)]) -> StorefrontConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        apply_overrides(StorefrontConfig::default(), |key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(
            config.storage.file_path(),
            PathBuf::from("./.storefront/storage.json")
        );
        assert_eq!(config.cart.storage_key, "cart-state");
        assert_eq!(config.admin.storage_key, "admin-session");
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.event_capacity, DEFAULT_CHANNEL_CAPACITY);
    }

    #[test]
    fn test_env_overrides() {
        let config = with_env(&[
            (ENV_DATA_DIR, "/tmp/shop"),
            (ENV_STORAGE, "Memory"),
            (ENV_ENFORCE_STOCK_ON_ADD, "yes"),
            (ENV_LOG, "sf_02_cart=debug"),
        ]);
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/shop"));
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert!(config.cart.enforce_stock_on_add);
        assert_eq!(config.log_filter, "sf_02_cart=debug");
    }

    #[test]
    fn test_invalid_overrides_ignored() {
        let config = with_env(&[
            (ENV_STORAGE, "s3"),
            (ENV_ENFORCE_STOCK_ON_ADD, "maybe"),
            (ENV_DATA_DIR, "  "),
        ]);
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert!(!config.cart.enforce_stock_on_add);
        assert_eq!(config.storage.data_dir, PathBuf::from("./.storefront"));
    }
}
