//! Guard integration tests
//!
//! Guards evaluated against contexts built from the real role tables.

#[cfg(test)]
mod tests {
    use crate::common::{GuardAssertions, UserFactory};
    use lab_access::auth::guards::*;
    use lab_access::auth::rbac::{Permission, PermissionGroup, Role, get_role_permissions};
    use lab_access::{GuardResult, UserContext};

    // ==================== Authentication ====================

    /// Every guard denies a missing or signed-out user before anything else
    #[test]
    fn test_all_guards_require_authentication() {
        let signed_out = UserFactory::signed_out(Role::Admin);

        for user in [None, Some(&signed_out)] {
            let results = [
                auth_guard(user),
                role_guard(user, &[Role::Admin]),
                permission_guard(user, Permission::UserRead),
                any_permission_guard(user, &[Permission::UserRead]),
                all_permissions_guard(user, &[]),
                ownership_guard(user, &signed_out.id),
                role_or_permission_guard(user, &[Role::Admin], Permission::UserRead),
                admin_or_owner_guard(user, &signed_out.id),
                admin_only_guard(user),
                authenticated_user_guard(user),
            ];

            for result in results {
                result.assert_denied_with("User not authenticated");
            }
        }
    }

    // ==================== Role tables ====================

    /// A user holding a role's table passes the permission guard for each entry
    #[test]
    fn test_role_tables_drive_permission_guard() {
        for &role in Role::ALL {
            let user = UserFactory::with_role(role);
            for &permission in get_role_permissions(role) {
                permission_guard(Some(&user), permission).assert_allowed();
            }
            for permission in Permission::ALL
                .iter()
                .copied()
                .filter(|p| !get_role_permissions(role).contains(p))
            {
                permission_guard(Some(&user), permission)
                    .assert_denied_with(permission.as_str());
            }
        }
    }

    /// Only laboran can approve loans
    #[test]
    fn test_loan_approval() {
        let approve = create_permission_guard(Permission::PeminjamanApprove);

        approve(Some(&UserFactory::laboran())).assert_allowed();
        approve(Some(&UserFactory::admin())).assert_denied_with("peminjaman:approve");
        approve(Some(&UserFactory::dosen())).assert_denied_with("peminjaman:approve");
        approve(Some(&UserFactory::mahasiswa())).assert_denied_with("peminjaman:approve");
    }

    /// Group helpers combine with the all/any guards
    #[test]
    fn test_group_guards() {
        let laboran = UserFactory::laboran();
        let inventory = PermissionGroup::InventoryManagement.permissions();

        all_permissions_guard(Some(&laboran), inventory).assert_allowed();
        all_permissions_guard(Some(&UserFactory::admin()), inventory)
            .assert_denied_with("Required all permissions");
        any_permission_guard(Some(&UserFactory::admin()), inventory).assert_allowed();
    }

    // ==================== Ownership ====================

    #[test]
    fn test_owner_and_admin_access() {
        let admin = UserContext::for_role("1", Role::Admin);
        let student = UserContext::for_role("7", Role::Mahasiswa);

        admin_or_owner_guard(Some(&admin), "7").assert_allowed();
        admin_or_owner_guard(Some(&student), "7").assert_allowed();
        admin_or_owner_guard(Some(&student), "8")
            .assert_denied_with("Only admin or resource owner");

        ownership_guard(Some(&admin), "7").assert_denied_with("own resources");
    }

    // ==================== Composition ====================

    /// Guards compose in order and stop at the first denial
    #[test]
    fn test_composed_report_review() {
        let dosen = UserFactory::dosen();
        let mahasiswa = UserFactory::mahasiswa();

        let review = |user: &UserContext| {
            let checks: Vec<Box<dyn Fn() -> GuardResult + '_>> = vec![
                Box::new(move || dosen_or_admin_guard(Some(user))),
                Box::new(move || permission_guard(Some(user), Permission::LaporanReview)),
            ];
            check_multiple_guards(checks)
        };

        review(&dosen).assert_allowed();
        review(&mahasiswa).assert_denied_with("Required roles: admin, dosen");
    }
}
