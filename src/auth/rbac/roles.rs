//! Role management methods

use crate::utils::error::{AccessError, Result};
use tracing::{debug, warn};

use super::permission_registry::Permission;
use super::role_registry::Role;
use super::system::RbacSystem;
use super::types::RoleDefinition;

impl RbacSystem {
    /// Get role by name
    pub fn get_role(&self, role_name: &str) -> Option<&RoleDefinition> {
        let role = role_name.parse::<Role>().ok()?;
        self.roles.get(&role)
    }

    /// Role assigned to users without an explicit one
    pub fn default_role(&self) -> Role {
        self.config.default_role
    }

    /// Resolve a raw role name to its permission list.
    ///
    /// Unknown names resolve to an empty list unless `strict_roles` is set.
    pub fn resolve_role_permissions(&self, role_name: &str) -> Result<Vec<Permission>> {
        match self.get_role(role_name) {
            Some(definition) => {
                debug!("Resolved role '{}'", role_name);
                // table order, not set order
                Ok(definition.role.permissions().to_vec())
            }
            None if self.config.strict_roles => {
                Err(AccessError::authorization(format!("Unknown role: {}", role_name)))
            }
            None => {
                warn!(
                    "Unknown role '{}' resolved to an empty permission set",
                    role_name
                );
                Ok(Vec::new())
            }
        }
    }

    /// Whether `role` is listed in `admin_roles`
    pub fn is_admin_role(&self, role: Role) -> bool {
        self.roles
            .get(&role)
            .map(|definition| definition.is_admin)
            .unwrap_or(false)
    }
}
