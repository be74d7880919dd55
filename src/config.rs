//! Configuration management
//!
//! Loads the served root directory, principal identity, and signing key
//! location from config.toml with environment overrides.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Server configuration, loaded once during startup.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Root directory exposed as the principal's tree
    pub server_root: String,

    /// Principal whose tree this server serves; every request for any
    /// other principal is rejected
    pub principal: String,

    /// Hex-encoded 32-byte seed file for the entry signer
    pub signing_key_file: String,
}

impl ServerConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        // Try production path first, then development path
        let config_paths = vec![
            "dirgate/config", // container deployments: /app/dirgate/config.toml
            "config",         // local development: ./config.toml
        ];

        let mut last_error = None;

        for config_path in &config_paths {
            match Config::builder()
                .add_source(File::with_name(config_path))
                .add_source(Environment::with_prefix("DIRGATE").separator("_"))
                .build()
            {
                Ok(settings) => {
                    let config: ServerConfig = settings.try_deserialize()?;
                    config.validate()?;
                    return Ok(config);
                }
                Err(e) => {
                    last_error = Some(e);
                    continue;
                }
            }
        }

        // If both paths failed, panic with clear message
        panic!(
            "Failed to load config.toml from any location. Tried: {config_paths:?}. Last error: {last_error:?}"
        );
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.server_root.is_empty() {
            return Err(config::ConfigError::Message(
                "server_root cannot be empty".into(),
            ));
        }

        if !self.principal.contains('@') {
            return Err(config::ConfigError::Message(
                "principal must be an identity such as owner@example.com".into(),
            ));
        }

        if self.signing_key_file.is_empty() {
            return Err(config::ConfigError::Message(
                "signing_key_file cannot be empty".into(),
            ));
        }

        Ok(())
    }

    /// Get server root as PathBuf
    pub fn server_root_path(&self) -> PathBuf {
        PathBuf::from(&self.server_root)
    }
}
