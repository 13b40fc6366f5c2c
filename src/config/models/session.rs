//! Session configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session lifetime in seconds
    #[serde(default = "default_session_ttl")]
    pub ttl_seconds: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_session_ttl(),
        }
    }
}

impl SessionConfig {
    pub fn merge(mut self, other: Self) -> Self {
        if other.ttl_seconds != default_session_ttl() {
            self.ttl_seconds = other.ttl_seconds;
        }
        self
    }
}
