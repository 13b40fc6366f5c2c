//! Permission checking methods

use crate::auth::types::UserContext;
use crate::utils::logging::SecurityLogger;

use super::permission_registry::{
    Action, Permission, Resource, has_all_permissions, has_any_permission,
};
use super::system::RbacSystem;
use super::types::{PermissionCheck, PermissionDefinition};

impl RbacSystem {
    /// Check if user has all of the required permissions
    pub fn check_permissions(
        &self,
        user_permissions: &[Permission],
        required_permissions: &[Permission],
    ) -> bool {
        has_all_permissions(user_permissions, required_permissions)
    }

    /// Check if user has any of the required permissions
    pub fn check_any_permission(
        &self,
        user_permissions: &[Permission],
        required_permissions: &[Permission],
    ) -> bool {
        has_any_permission(user_permissions, required_permissions)
    }

    /// Detailed permission check against the user's materialized permissions
    pub fn check_permission_detailed(
        &self,
        user: &UserContext,
        required_permission: Permission,
    ) -> PermissionCheck {
        let check = if !user.is_authenticated {
            PermissionCheck::denied("User not authenticated")
        } else if user.permissions.contains(&required_permission) {
            PermissionCheck::granted(user.role)
        } else {
            PermissionCheck::denied(format!("Missing permission: {}", required_permission))
        };

        SecurityLogger::log_authz_event(
            &user.id,
            required_permission.as_str(),
            check.granted,
            check.denial_reason.as_deref(),
        );

        check
    }

    /// Check resource-level permissions; unregistered combinations are never granted
    pub fn check_resource_permission(
        &self,
        user_permissions: &[Permission],
        resource: Resource,
        action: Action,
    ) -> bool {
        Permission::ALL
            .iter()
            .find(|permission| permission.resource() == resource && permission.action() == action)
            .is_some_and(|permission| user_permissions.contains(permission))
    }

    /// Check if user is admin
    pub fn is_admin(&self, user: &UserContext) -> bool {
        user.is_authenticated && self.is_admin_role(user.role)
    }

    /// Get permission by token
    pub fn get_permission(&self, token: &str) -> Option<&PermissionDefinition> {
        let permission = token.parse::<Permission>().ok()?;
        self.permissions.get(&permission)
    }
}
