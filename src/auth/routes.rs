//! Route-level access rules for the lab application

use super::guards::{auth_guard, role_guard};
use super::rbac::Role;
use super::types::{GuardResult, UserContext};
use tracing::debug;

/// Where denied navigation is redirected
pub const UNAUTHORIZED_ROUTE: &str = "/unauthorized";

/// Login page
pub const LOGIN_ROUTE: &str = "/login";

/// Role-neutral dashboard entry point
pub const DASHBOARD_ROUTE: &str = "/dashboard";

const PUBLIC_ROUTES: &[&str] = &[
    "/",
    "/login",
    "/forgot-password",
    "/reset-password",
    "/404",
    UNAUTHORIZED_ROUTE,
    "/500",
    "/maintenance",
    "/offline",
];

const ROLE_PREFIXES: &[(&str, Role)] = &[
    ("/admin", Role::Admin),
    ("/dosen", Role::Dosen),
    ("/laboran", Role::Laboran),
    ("/mahasiswa", Role::Mahasiswa),
];

/// Strip query, fragment and trailing slashes
fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Segment-aware prefix match: `/admin` matches `/admin/users` but not `/administrator`
fn under(path: &str, prefix: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Check if a route is public (doesn't require authentication)
pub fn is_public_route(path: &str) -> bool {
    PUBLIC_ROUTES.contains(&normalize(path))
}

/// Roles allowed under `path`; `None` means any authenticated user
pub fn required_roles(path: &str) -> Option<&'static [Role]> {
    let path = normalize(path);
    ROLE_PREFIXES
        .iter()
        .find(|(prefix, _)| under(path, prefix))
        .map(|(_, role)| std::slice::from_ref(role))
}

/// Landing page for a role
pub fn dashboard_route(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin/dashboard",
        Role::Dosen => "/dosen/dashboard",
        Role::Laboran => "/laboran/dashboard",
        Role::Mahasiswa => "/mahasiswa/dashboard",
    }
}

/// Decide whether `user` may navigate to `path`
pub fn route_guard(user: Option<&UserContext>, path: &str) -> GuardResult {
    if is_public_route(path) {
        return GuardResult::allow();
    }

    let result = match required_roles(path) {
        Some(roles) => role_guard(user, roles),
        None => auth_guard(user),
    };

    debug!(path = %path, allowed = result.allowed, "Route check");
    result
}
