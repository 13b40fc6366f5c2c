//! Configuration validation integration tests
//!
//! Tests for configuration loading and validation across all sections.

#[cfg(test)]
mod tests {
    use lab_access::auth::rbac::Role;
    use lab_access::config::models::{
        AccessConfig, GeneratorConfig, LoggingConfig, RbacConfig, SessionConfig,
    };
    use lab_access::AccessError;
    use lab_access::config::{Config, Validate};
    use std::io::Write;
    use tempfile::NamedTempFile;

    // ==================== Section validation ====================

    /// Test that the default configuration passes validation
    #[test]
    fn test_valid_default_config() {
        assert!(Config::default().validate().is_ok());
        assert!(AccessConfig::default().validate().is_ok());
    }

    /// Test that a missing admin role fails validation
    #[test]
    fn test_rbac_without_admin_roles() {
        let config = RbacConfig {
            admin_roles: vec![],
            ..RbacConfig::default()
        };

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("admin role"));
    }

    /// Test the session TTL bounds
    #[test]
    fn test_session_ttl_bounds() {
        assert!(SessionConfig { ttl_seconds: 59 }.validate().is_err());
        assert!(SessionConfig { ttl_seconds: 60 }.validate().is_ok());
        assert!(SessionConfig { ttl_seconds: 86400 * 30 }.validate().is_ok());
        assert!(SessionConfig { ttl_seconds: 86400 * 30 + 1 }.validate().is_err());
    }

    /// Test that generator filters must name policy tables
    #[test]
    fn test_generator_table_filter() {
        let config = GeneratorConfig {
            tables: vec!["presensi".to_string(), "laporan_mahasiswa".to_string()],
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_ok());

        let config = GeneratorConfig {
            tables: vec!["notifications".to_string()],
            ..GeneratorConfig::default()
        };
        assert!(config.validate().unwrap_err().contains("notifications"));
    }

    /// Test log filter directives
    #[test]
    fn test_logging_levels() {
        for level in ["trace", "debug", "info", "warn", "error", "lab_access::security=debug"] {
            let config = LoggingConfig {
                level: level.to_string(),
                json: false,
            };
            assert!(config.validate().is_ok(), "{}", level);
        }
    }

    // ==================== Config wrapper ====================

    /// Section errors are prefixed with the section name
    #[test]
    fn test_config_error_prefix() {
        let mut config = Config::default();
        config.access.generator.tables = vec!["".to_string()];

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Generator config error"));
    }

    /// Test merging file and override configurations
    #[test]
    fn test_merge() {
        let base = Config::default();
        let mut other = Config::default();
        other.access.rbac.admin_roles = vec![Role::Admin, Role::Laboran];
        other.access.logging.json = true;

        let merged = base.merge(other);
        assert_eq!(merged.rbac().admin_roles, vec![Role::Admin, Role::Laboran]);
        assert!(merged.logging().json);
        assert_eq!(merged.session().ttl_seconds, 28800);
    }

    /// Test YAML round trip through a file
    #[tokio::test]
    async fn test_yaml_file_round_trip() {
        let mut config = Config::default();
        config.access.rbac.strict_roles = true;
        config.access.generator.tables = vec!["users".to_string()];

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(config.to_yaml().unwrap().as_bytes()).unwrap();

        let loaded = Config::from_file(file.path()).await.unwrap();
        assert_eq!(loaded, config);
    }

    /// Test that malformed YAML keeps the parser error
    #[tokio::test]
    async fn test_malformed_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"rbac: [not, a, map]\n").unwrap();

        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, AccessError::Yaml(_)));
        assert!(err.is_user_error());
    }
}
