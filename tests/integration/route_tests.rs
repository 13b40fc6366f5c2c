//! Route access integration tests

#[cfg(test)]
mod tests {
    use crate::common::{GuardAssertions, UserFactory};
    use lab_access::Role;
    use lab_access::auth::routes::{
        UNAUTHORIZED_ROUTE, dashboard_route, is_public_route, required_roles, route_guard,
    };

    #[test]
    fn test_anonymous_navigation() {
        route_guard(None, "/").assert_allowed();
        route_guard(None, "/forgot-password").assert_allowed();
        route_guard(None, UNAUTHORIZED_ROUTE).assert_allowed();
        route_guard(None, "/dashboard").assert_denied_with("User not authenticated");
        route_guard(None, "/mahasiswa/nilai").assert_denied_with("User not authenticated");
    }

    /// Each role reaches only its own area
    #[test]
    fn test_role_areas_are_exclusive() {
        let areas = [
            ("/admin/audit-logs", Role::Admin),
            ("/dosen/penilaian", Role::Dosen),
            ("/laboran/stock-opname", Role::Laboran),
            ("/mahasiswa/presensi", Role::Mahasiswa),
        ];

        for &role in Role::ALL {
            let user = UserFactory::with_role(role);
            for (path, owner) in areas {
                let result = route_guard(Some(&user), path);
                if role == owner {
                    result.assert_allowed();
                } else {
                    result.assert_denied_with(&format!("User role: {}", role));
                }
            }
        }
    }

    #[test]
    fn test_dashboards() {
        assert_eq!(dashboard_route(Role::Laboran), "/laboran/dashboard");
        for &role in Role::ALL {
            assert_eq!(required_roles(dashboard_route(role)), Some(&[role][..]));
            assert!(!is_public_route(dashboard_route(role)));
        }
    }
}
