//! Core guard functions

use crate::auth::rbac::{
    Permission, Role, has_all_permissions, has_any_permission, has_permission,
};
use crate::auth::types::{GuardResult, UserContext};
use crate::utils::logging::SECURITY_TARGET;
use tracing::debug;

const NOT_AUTHENTICATED: &str = "User not authenticated";

fn join_roles(roles: &[Role]) -> String {
    roles.iter().map(|role| role.as_str()).collect::<Vec<_>>().join(", ")
}

fn join_permissions(permissions: &[Permission]) -> String {
    permissions
        .iter()
        .map(|permission| permission.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn denied(user: &UserContext, reason: String) -> GuardResult {
    debug!(
        target: SECURITY_TARGET,
        user_id = %user.id,
        role = %user.role,
        "Guard denied: {}",
        reason
    );
    GuardResult::deny(reason)
}

/// Authentication check shared by every other guard
fn authenticated(user: Option<&UserContext>) -> Result<&UserContext, GuardResult> {
    let result = auth_guard(user);
    match user {
        Some(user) if result.allowed => Ok(user),
        _ => Err(result),
    }
}

/// Deny when there is no user or the user is not authenticated
pub fn auth_guard(user: Option<&UserContext>) -> GuardResult {
    match user {
        Some(user) if user.is_authenticated => GuardResult::allow(),
        _ => GuardResult::deny(NOT_AUTHENTICATED),
    }
}

/// Allow only users whose role is one of `allowed_roles`
pub fn role_guard(user: Option<&UserContext>, allowed_roles: &[Role]) -> GuardResult {
    let user = match authenticated(user) {
        Ok(user) => user,
        Err(result) => return result,
    };

    if !allowed_roles.contains(&user.role) {
        return denied(
            user,
            format!(
                "Access denied. Required roles: {}. User role: {}",
                join_roles(allowed_roles),
                user.role
            ),
        );
    }

    GuardResult::allow()
}

pub fn permission_guard(
    user: Option<&UserContext>,
    required_permission: Permission,
) -> GuardResult {
    let user = match authenticated(user) {
        Ok(user) => user,
        Err(result) => return result,
    };

    if !has_permission(&user.permissions, required_permission) {
        return denied(
            user,
            format!("Access denied. Required permission: {}", required_permission),
        );
    }

    GuardResult::allow()
}

pub fn any_permission_guard(
    user: Option<&UserContext>,
    required_permissions: &[Permission],
) -> GuardResult {
    let user = match authenticated(user) {
        Ok(user) => user,
        Err(result) => return result,
    };

    if !has_any_permission(&user.permissions, required_permissions) {
        return denied(
            user,
            format!(
                "Access denied. Required any of permissions: {}",
                join_permissions(required_permissions)
            ),
        );
    }

    GuardResult::allow()
}

pub fn all_permissions_guard(
    user: Option<&UserContext>,
    required_permissions: &[Permission],
) -> GuardResult {
    let user = match authenticated(user) {
        Ok(user) => user,
        Err(result) => return result,
    };

    if !has_all_permissions(&user.permissions, required_permissions) {
        return denied(
            user,
            format!(
                "Access denied. Required all permissions: {}",
                join_permissions(required_permissions)
            ),
        );
    }

    GuardResult::allow()
}

/// Allow only the owner of the resource
pub fn ownership_guard(user: Option<&UserContext>, resource_owner_id: &str) -> GuardResult {
    let user = match authenticated(user) {
        Ok(user) => user,
        Err(result) => return result,
    };

    if user.id != resource_owner_id {
        return denied(
            user,
            "Access denied. User can only access own resources".to_string(),
        );
    }

    GuardResult::allow()
}

/// Role membership OR a single permission; the permission is not consulted
/// when the role already matches.
pub fn role_or_permission_guard(
    user: Option<&UserContext>,
    allowed_roles: &[Role],
    required_permission: Permission,
) -> GuardResult {
    let user = match authenticated(user) {
        Ok(user) => user,
        Err(result) => return result,
    };

    if allowed_roles.contains(&user.role) {
        return GuardResult::allow();
    }

    if has_permission(&user.permissions, required_permission) {
        return GuardResult::allow();
    }

    denied(
        user,
        format!(
            "Access denied. Required role: {} OR permission: {}",
            join_roles(allowed_roles),
            required_permission
        ),
    )
}

/// Admins pass unconditionally; everyone else must own the resource
pub fn admin_or_owner_guard(user: Option<&UserContext>, resource_owner_id: &str) -> GuardResult {
    let user = match authenticated(user) {
        Ok(user) => user,
        Err(result) => return result,
    };

    if user.role == Role::Admin || user.id == resource_owner_id {
        return GuardResult::allow();
    }

    denied(
        user,
        "Access denied. Only admin or resource owner can access".to_string(),
    )
}

/// Logical AND with early exit.
///
/// Guards run in order; the first denial is returned and later guards are
/// never evaluated.
pub fn check_multiple_guards<I, F>(guards: I) -> GuardResult
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> GuardResult,
{
    for guard in guards {
        let result = guard();
        if !result.allowed {
            return result;
        }
    }

    GuardResult::allow()
}
