//! Configuration management for lab-access
//!
//! This module handles loading, validation, and management of all access configuration.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{AccessError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for lab-access
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Access configuration
    pub access: AccessConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(AccessError::not_found(format!(
                    "config file {}",
                    path.display()
                )));
            }
            Err(e) => return Err(e.into()),
        };

        let access: AccessConfig = serde_yaml::from_str(&content)?;

        let config = Self { access };

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let access = AccessConfig::from_env()?;
        let config = Self { access };

        config.validate()?;
        Ok(config)
    }

    /// Layer `LAB_ACCESS_*` environment variables over this configuration
    pub fn with_env_overrides(self) -> Result<Self> {
        let access = self
            .access
            .with_env_overrides(|name| std::env::var(name).ok())?;
        let config = Self { access };

        config.validate()?;
        Ok(config)
    }

    /// Get RBAC configuration
    pub fn rbac(&self) -> &RbacConfig {
        &self.access.rbac
    }

    /// Get session configuration
    pub fn session(&self) -> &SessionConfig {
        &self.access.session
    }

    /// Get generator configuration
    pub fn generator(&self) -> &GeneratorConfig {
        &self.access.generator
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.access.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.access
            .rbac
            .validate()
            .map_err(|e| AccessError::Config(format!("RBAC config error: {}", e)))?;

        self.access
            .session
            .validate()
            .map_err(|e| AccessError::Config(format!("Session config error: {}", e)))?;

        self.access
            .generator
            .validate()
            .map_err(|e| AccessError::Config(format!("Generator config error: {}", e)))?;

        self.access
            .logging
            .validate()
            .map_err(|e| AccessError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.access = self.access.merge(other.access);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.access)?)
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.access)?)
    }
}
