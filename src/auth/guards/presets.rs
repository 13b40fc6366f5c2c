//! Guard factories and the common role presets

use super::guards::{auth_guard, permission_guard, role_guard};
use crate::auth::rbac::{Permission, Role};
use crate::auth::types::{GuardResult, UserContext};

/// Bind a permission into a reusable guard
pub fn create_permission_guard(
    permission: Permission,
) -> impl Fn(Option<&UserContext>) -> GuardResult {
    move |user| permission_guard(user, permission)
}

/// Bind a role list into a reusable guard
pub fn create_role_guard(roles: Vec<Role>) -> impl Fn(Option<&UserContext>) -> GuardResult {
    move |user| role_guard(user, &roles)
}

pub fn admin_only_guard(user: Option<&UserContext>) -> GuardResult {
    role_guard(user, &[Role::Admin])
}

pub fn dosen_or_admin_guard(user: Option<&UserContext>) -> GuardResult {
    role_guard(user, &[Role::Admin, Role::Dosen])
}

pub fn laboran_or_admin_guard(user: Option<&UserContext>) -> GuardResult {
    role_guard(user, &[Role::Admin, Role::Laboran])
}

pub fn authenticated_user_guard(user: Option<&UserContext>) -> GuardResult {
    auth_guard(user)
}
