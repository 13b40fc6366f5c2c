//! RBAC configuration

use super::*;
use serde::{Deserialize, Serialize};

/// RBAC configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Roles treated as administrators
    #[serde(default = "default_admin_roles")]
    pub admin_roles: Vec<Role>,
    /// Role assigned to users without an explicit one
    #[serde(default = "default_role")]
    pub default_role: Role,
    /// Fail on unknown role names instead of resolving them to no permissions
    #[serde(default)]
    pub strict_roles: bool,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            admin_roles: default_admin_roles(),
            default_role: default_role(),
            strict_roles: false,
        }
    }
}

impl RbacConfig {
    /// Merge RBAC configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.admin_roles != default_admin_roles() {
            self.admin_roles = other.admin_roles;
        }
        if other.default_role != default_role() {
            self.default_role = other.default_role;
        }
        if other.strict_roles {
            self.strict_roles = other.strict_roles;
        }
        self
    }
}
