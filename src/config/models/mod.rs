//! Configuration data models
//!
//! This module defines all configuration structures used by the access layer.

#![allow(missing_docs)]

pub mod access;
pub mod generator;
pub mod logging;
pub mod rbac;
pub mod session;

// Re-export all configuration types
pub use access::*;
pub use generator::*;
pub use logging::*;
pub use rbac::*;
pub use session::*;

use crate::auth::rbac::Role;

pub fn default_true() -> bool {
    true
}

/// Default session lifetime in seconds
pub fn default_session_ttl() -> u64 {
    8 * 3600 // 8 hours
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_role() -> Role {
    Role::Mahasiswa
}

pub fn default_admin_roles() -> Vec<Role> {
    vec![Role::Admin]
}
