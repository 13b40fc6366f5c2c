//! Error handling integration tests
//!
//! Tests that errors flow from parsing, configuration and sessions into
//! `AccessError` with the right variant.

#[cfg(test)]
mod tests {
    use lab_access::auth::rbac::{Permission, RbacSystem, Role};
    use lab_access::config::RbacConfig;
    use lab_access::storage::rls::PolicyAction;
    use lab_access::AccessError;

    // ==================== Parsing ====================

    /// Unknown tokens surface as parsing errors
    #[test]
    fn test_parsing_errors() {
        let err = "lab:teleport".parse::<Permission>().unwrap_err();
        assert!(matches!(err, AccessError::Parsing(_)));
        assert!(err.is_user_error());

        let err = "superadmin".parse::<Role>().unwrap_err();
        assert!(matches!(err, AccessError::Parsing(_)));

        let err = "TRUNCATE".parse::<PolicyAction>().unwrap_err();
        assert!(err.to_string().starts_with("Parsing error:"));
    }

    // ==================== Strict roles ====================

    /// Strict mode turns an unknown role into an authorization error
    #[test]
    fn test_strict_unknown_role_is_authorization_error() {
        let config = RbacConfig {
            strict_roles: true,
            ..RbacConfig::default()
        };
        let rbac = RbacSystem::new(&config).unwrap();

        let err = rbac.resolve_role_permissions("kepala_lab").unwrap_err();
        assert!(matches!(err, AccessError::Authorization(_)));
        assert!(!err.is_user_error());
    }

    /// Lenient mode denies silently
    #[test]
    fn test_lenient_unknown_role_resolves_empty() {
        let rbac = RbacSystem::new(&RbacConfig::default()).unwrap();
        assert!(rbac.resolve_role_permissions("kepala_lab").unwrap().is_empty());
    }

    // ==================== Conversions ====================

    #[test]
    fn test_io_and_serialization_conversions() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: AccessError = io.into();
        assert!(matches!(err, AccessError::Io(_)));

        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AccessError = json.into();
        assert!(matches!(err, AccessError::Serialization(_)));

        let yaml = serde_yaml::from_str::<RbacConfig>("admin_roles: [").unwrap_err();
        let err: AccessError = yaml.into();
        assert!(matches!(err, AccessError::Yaml(_)));
    }
}
