//! RBAC type definitions

use super::permission_registry::{Action, Permission, Resource};
use super::role_registry::Role;
use serde::Serialize;
use std::collections::HashSet;

/// Role definition
#[derive(Debug, Clone)]
pub struct RoleDefinition {
    /// Role
    pub role: Role,
    /// Role display name
    pub name: String,
    /// Role description
    pub description: String,
    /// Permissions granted by this role
    pub permissions: HashSet<Permission>,
    /// Position in the role hierarchy
    pub level: u8,
    /// Whether the configuration treats this role as an administrator
    pub is_admin: bool,
}

impl RoleDefinition {
    pub fn grants(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}

/// Permission definition
#[derive(Debug, Clone)]
pub struct PermissionDefinition {
    /// Permission
    pub permission: Permission,
    /// Token, e.g. `lab:read`
    pub name: String,
    /// Permission description
    pub description: String,
    /// Resource this permission applies to
    pub resource: Resource,
    /// Action this permission allows
    pub action: Action,
}

/// Permission check result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionCheck {
    /// Whether permission is granted
    pub granted: bool,
    /// Role that granted the permission
    pub granted_by_role: Option<Role>,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}

impl PermissionCheck {
    pub(super) fn granted(role: Role) -> Self {
        Self {
            granted: true,
            granted_by_role: Some(role),
            denial_reason: None,
        }
    }

    pub(super) fn denied(reason: impl Into<String>) -> Self {
        Self {
            granted: false,
            granted_by_role: None,
            denial_reason: Some(reason.into()),
        }
    }
}
