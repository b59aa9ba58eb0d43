//! Configuration validation integration tests
//!
//! Tests for configuration loading and validation across all config
//! components.

#[cfg(test)]
mod tests {
    use crate::{assert_err, assert_ok};
    use rbac_dashboard::config::{
        Config, CorsConfig, DashboardConfig, RbacConfig, ServerConfig, Validate,
    };
    use rbac_dashboard::utils::LogLevel;
    use rbac_dashboard::{AccessControlStore, RbacError};
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    // ==================== DashboardConfig Validation ====================

    #[test]
    fn test_default_dashboard_config_is_valid() {
        assert!(DashboardConfig::default().validate().is_ok());
    }

    #[test]
    fn test_port_zero_rejected() {
        let mut config = DashboardConfig::default();
        config.server.port = 0;

        let err = config.validate().unwrap_err();
        assert!(err.contains("Server config error"));
        assert!(err.contains("port"));
    }

    #[test]
    fn test_workers_bounds() {
        let mut server = ServerConfig {
            workers: Some(0),
            ..ServerConfig::default()
        };
        assert!(server.validate().is_err());

        server.workers = Some(4);
        assert!(server.validate().is_ok());
        assert_eq!(server.worker_count(), 4);
    }

    #[test]
    fn test_cors_wildcard_with_credentials_rejected() {
        let cors = CorsConfig {
            allowed_origins: vec!["*".to_string()],
            allow_credentials: true,
            ..CorsConfig::default()
        };
        assert!(cors.validate().unwrap_err().contains("credentials"));

        let cors = CorsConfig {
            allowed_origins: vec!["https://admin.example.com".to_string()],
            allow_credentials: true,
            ..CorsConfig::default()
        };
        assert!(cors.validate().is_ok());
    }

    #[test]
    fn test_seed_email_checked_only_when_seeding() {
        let rbac = RbacConfig {
            seed_admin_email: "not-an-email".to_string(),
            ..RbacConfig::default()
        };
        assert!(rbac.validate().is_err());

        let rbac = RbacConfig {
            seed_defaults: false,
            ..rbac
        };
        assert!(rbac.validate().is_ok());
    }

    // ==================== Loading ====================

    #[tokio::test]
    async fn test_yaml_file_drives_store_seed() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "rbac:\n  seed_admin_name: \"Operator\"\n  seed_admin_email: \"ops@example.com\""
        )
        .unwrap();

        let config = assert_ok!(Config::from_file(file.path()).await);
        let store = assert_ok!(AccessControlStore::new(config.rbac()));

        let actor = store.current_user().unwrap();
        assert_eq!(actor.name, "Operator");
        assert_eq!(actor.email, "ops@example.com");
    }

    #[tokio::test]
    async fn test_malformed_yaml_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "server: [unclosed").unwrap();

        let err = assert_err!(Config::from_file(file.path()).await);
        assert!(matches!(err, RbacError::Config(_)));
    }

    #[test]
    fn test_environment_lookup() {
        let config = assert_ok!(DashboardConfig::from_lookup(lookup(&[
            ("RBAC_PORT", "9090"),
            ("RBAC_CORS_ALLOWED_ORIGINS", "https://a.example.com, https://b.example.com"),
            ("RBAC_SEED_DEFAULTS", "false"),
            ("RBAC_STRICT_DELETES", "true"),
            ("RBAC_LOG_LEVEL", "warn"),
            ("RBAC_HOST", "  "),
        ])));

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.cors.allowed_origins.len(), 2);
        assert!(!config.rbac.seed_defaults);
        assert!(config.rbac.strict_deletes);
        assert_eq!(config.logging.level, LogLevel::Warn);

        let store = assert_ok!(AccessControlStore::new(&config.rbac));
        assert!(store.list_roles().is_empty());
    }

    #[test]
    fn test_environment_lookup_rejects_bad_numbers() {
        let err = assert_err!(DashboardConfig::from_lookup(lookup(&[(
            "RBAC_PORT",
            "eighty"
        )])));
        assert!(matches!(err, RbacError::Config(_)));
    }

    #[test]
    fn test_yaml_round_trip() {
        let original = assert_ok!(Config::from_yaml_str(
            "server:\n  port: 8181\nrbac:\n  strict_deletes: true\n"
        ));
        let yaml = assert_ok!(original.to_yaml());
        assert_eq!(assert_ok!(Config::from_yaml_str(&yaml)), original);
    }
}
