//! Top-level access configuration

#![allow(missing_docs)]

use super::*;
use serde::{Deserialize, Serialize};

/// Everything the access layer reads from a config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AccessConfig {
    #[serde(default)]
    pub rbac: RbacConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AccessConfig {
    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.rbac = self.rbac.merge(other.rbac);
        self.session = self.session.merge(other.session);
        self.generator = self.generator.merge(other.generator);
        self.logging = self.logging.merge(other.logging);
        self
    }
}
