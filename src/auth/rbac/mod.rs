//! Role-Based Access Control (RBAC) system
//!
//! Static permission and role registries plus a configured [`RbacSystem`]
//! façade over them.

mod permission_registry;
mod permissions;
mod role_registry;
mod roles;
mod system;
mod types;

// Re-export public types and structs
pub use permission_registry::{
    Action, Permission, PermissionGroup, Resource, all_permissions, has_all_permissions,
    has_any_permission, has_permission, is_valid_permission, parse_permissions,
    permission_display_name, permissions_by_group,
};
pub use role_registry::{
    Role, all_roles, get_role_permissions, has_equal_or_higher_role, has_higher_role,
    is_valid_role, role_has_all_permissions, role_has_any_permission, role_has_permission,
    role_permissions_by_name, roles_with_permission,
};
pub use system::RbacSystem;
pub use types::{PermissionCheck, PermissionDefinition, RoleDefinition};
