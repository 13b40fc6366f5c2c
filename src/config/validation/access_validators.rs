//! Access configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use crate::storage::rls::is_policy_table;
use std::collections::HashSet;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const MIN_SESSION_TTL: u64 = 60;
const MAX_SESSION_TTL: u64 = 86400 * 30;

impl Validate for AccessConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating access configuration");

        self.rbac.validate()?;
        self.session.validate()?;
        self.generator.validate()?;
        self.logging.validate()?;

        Ok(())
    }
}

impl Validate for RbacConfig {
    fn validate(&self) -> Result<(), String> {
        if self.admin_roles.is_empty() {
            return Err("At least one admin role must be configured".to_string());
        }

        let mut seen = HashSet::new();
        for role in &self.admin_roles {
            if !seen.insert(role) {
                return Err(format!("Duplicate admin role: {}", role));
            }
        }

        Ok(())
    }
}

impl Validate for SessionConfig {
    fn validate(&self) -> Result<(), String> {
        if self.ttl_seconds < MIN_SESSION_TTL {
            return Err(format!(
                "Session TTL must be at least {} seconds",
                MIN_SESSION_TTL
            ));
        }

        if self.ttl_seconds > MAX_SESSION_TTL {
            return Err("Session TTL should not exceed 30 days".to_string());
        }

        Ok(())
    }
}

impl Validate for GeneratorConfig {
    fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for table in &self.tables {
            if table.trim().is_empty() {
                return Err("Table filter entries cannot be empty".to_string());
            }
            if !is_policy_table(table) {
                return Err(format!("Table has no RLS policies: {}", table));
            }
            if !seen.insert(table) {
                return Err(format!("Duplicate table in filter: {}", table));
            }
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }

        EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|e| format!("Invalid log level '{}': {}", self.level, e))
    }
}
