//! Access guards
//!
//! Pure predicates over an optional [`UserContext`](crate::auth::UserContext).
//! Every guard re-checks authentication first and answers with a
//! [`GuardResult`](crate::auth::GuardResult) instead of failing.

mod guards;
mod presets;

pub use guards::{
    admin_or_owner_guard, all_permissions_guard, any_permission_guard, auth_guard,
    check_multiple_guards, ownership_guard, permission_guard, role_guard, role_or_permission_guard,
};
pub use presets::{
    admin_only_guard, authenticated_user_guard, create_permission_guard, create_role_guard,
    dosen_or_admin_guard, laboran_or_admin_guard,
};
