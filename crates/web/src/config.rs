//! Storefront server configuration

use carsales_common::Catalog;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Storefront configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// HTTP listen address
    pub listen_addr: String,

    /// Optional TOML file replacing the built-in listings
    pub catalog_path: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            catalog_path: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from file, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply CARSALES_* environment overrides on top of the current
    /// values. Empty variables are ignored.
    pub fn apply_env(mut self) -> Self {
        if let Ok(addr) = std::env::var("CARSALES_WEB_ADDR") {
            if !addr.trim().is_empty() {
                self.listen_addr = addr.trim().to_string();
            }
        }
        if let Ok(path) = std::env::var("CARSALES_CATALOG_PATH") {
            if !path.trim().is_empty() {
                self.catalog_path = Some(PathBuf::from(path.trim()));
            }
        }
        self
    }

    /// Build the listing catalog: the configured file when set, the
    /// compiled-in listings otherwise.
    pub fn catalog(&self) -> carsales_common::Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::builtin()),
        }
    }
}
