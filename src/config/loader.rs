//! Configuration loading from environment variables
//!
//! Every variable is optional; unset variables leave the current value alone.

use super::models::*;
use crate::auth::rbac::Role;
use crate::utils::error::{AccessError, Result};
use std::env;
use tracing::debug;

pub const ENV_LOG_LEVEL: &str = "LAB_ACCESS_LOG_LEVEL";
pub const ENV_LOG_JSON: &str = "LAB_ACCESS_LOG_JSON";
pub const ENV_STRICT_ROLES: &str = "LAB_ACCESS_STRICT_ROLES";
pub const ENV_ADMIN_ROLES: &str = "LAB_ACCESS_ADMIN_ROLES";
pub const ENV_DEFAULT_ROLE: &str = "LAB_ACCESS_DEFAULT_ROLE";
pub const ENV_SESSION_TTL: &str = "LAB_ACCESS_SESSION_TTL";
pub const ENV_TABLES: &str = "LAB_ACCESS_TABLES";

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AccessError::Config(format!(
            "Invalid boolean for {}: {}",
            name, other
        ))),
    }
}

fn parse_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|item| !item.is_empty())
}

impl AccessConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides(|name| env::var(name).ok())
    }

    /// Apply `LAB_ACCESS_*` overrides read through `lookup`
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Applying environment overrides");

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        if let Some(json) = lookup(ENV_LOG_JSON) {
            self.logging.json = parse_bool(ENV_LOG_JSON, &json)?;
        }

        if let Some(strict) = lookup(ENV_STRICT_ROLES) {
            self.rbac.strict_roles = parse_bool(ENV_STRICT_ROLES, &strict)?;
        }
        if let Some(roles) = lookup(ENV_ADMIN_ROLES) {
            self.rbac.admin_roles = parse_list(&roles)
                .map(str::parse::<Role>)
                .collect::<Result<Vec<_>>>()
                .map_err(|e| AccessError::Config(format!("Invalid admin roles: {}", e)))?;
        }
        if let Some(role) = lookup(ENV_DEFAULT_ROLE) {
            self.rbac.default_role = role
                .trim()
                .parse()
                .map_err(|e| AccessError::Config(format!("Invalid default role: {}", e)))?;
        }

        if let Some(ttl) = lookup(ENV_SESSION_TTL) {
            self.session.ttl_seconds = ttl
                .trim()
                .parse()
                .map_err(|e| AccessError::Config(format!("Invalid session TTL: {}", e)))?;
        }

        if let Some(tables) = lookup(ENV_TABLES) {
            self.generator.tables = parse_list(&tables).map(str::to_string).collect();
        }

        Ok(self)
    }
}
