//! Application configuration.

use std::path::PathBuf;

use stockroom_auth::AuthConfig;
use stockroom_store::StoreConfig;

/// Top-level configuration assembled at start-up.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub auth: AuthConfig,
    /// `true`: a role denial renders `Forbidden`. `false`: it falls back
    /// to the products view.
    pub strict_role_gate: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            auth: AuthConfig::default(),
            strict_role_gate: true,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `STOCKROOM_DATA_DIR`, `STOCKROOM_PEPPER` and
    /// `STOCKROOM_SOFT_DENY` (`1`/`true` disables the strict role gate).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(dir) = lookup("STOCKROOM_DATA_DIR").filter(|d| !d.is_empty()) {
            config.store.data_dir = PathBuf::from(dir);
        }
        if let Some(pepper) = lookup("STOCKROOM_PEPPER").filter(|p| !p.is_empty()) {
            config.auth.pepper = Some(pepper);
        }
        if let Some(soft) = lookup("STOCKROOM_SOFT_DENY") {
            config.strict_role_gate = !matches!(soft.trim(), "1" | "true" | "yes");
        }
        config
    }
}
