//! Configuration loading.
//!
//! Resolves the backend connection settings with the usual priority chain:
//! `config.toml` under the base directory, then the `LADLE_BASE_URL`
//! environment variable, then built-in defaults.

use crate::paths::{LadlePaths, ServiceType};
use anyhow::{Context, Result};
use ladle_core::config::ClientConfig;
use std::fs;

/// Environment variable consulted when no config file exists.
pub const BASE_URL_ENV: &str = "LADLE_BASE_URL";

/// Loads [`ClientConfig`] from disk or the environment.
pub struct ConfigService {
    paths: LadlePaths,
}

impl ConfigService {
    pub fn new(paths: LadlePaths) -> Self {
        Self { paths }
    }

    /// Resolves the client configuration.
    ///
    /// Priority:
    /// 1. `config.toml` under the base directory
    /// 2. `LADLE_BASE_URL` environment variable
    /// 3. built-in defaults
    pub fn load(&self) -> Result<ClientConfig> {
        let config_path = self.paths.get_path(ServiceType::Config);

        if config_path.exists() {
            let raw = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config = Self::parse(&raw)?;
            tracing::debug!(base_url = %config.base_url, "loaded config from file");
            return Ok(config);
        }

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            tracing::debug!(base_url = %base_url, "loaded base URL from environment");
            return Ok(ClientConfig::new(base_url));
        }

        tracing::debug!("no config found, using defaults");
        Ok(ClientConfig::default())
    }

    /// Parses a TOML config document.
    pub fn parse(raw: &str) -> Result<ClientConfig> {
        let config: ClientConfig =
            toml::from_str(raw).context("Failed to parse config file")?;
        // Re-normalize in case the file carries a trailing slash.
        Ok(ClientConfig::new(config.base_url))
    }
}
