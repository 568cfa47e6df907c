//! Configuration loading tests

#[cfg(test)]
mod tests {
    use crate::{assert_err, assert_ok};
    use hayat_portal::auth::{Actor, Capability, Role};
    use hayat_portal::config::Config;
    use hayat_portal::server::AppState;
    use hayat_portal::storage::StorageLayer;
    use hayat_portal::utils::error::PortalError;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SECRET: &str = "integration-secret-with-more-than-thirty-two-chars";

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[tokio::test]
    async fn test_env_config_drives_seeding() {
        let config = assert_ok!(Config::from_env_with(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("DATABASE_MAX_CONNECTIONS", "1"),
            ("JWT_SECRET", SECRET),
            ("PORTAL_SEED_PERMISSIONS", "false"),
        ])));

        let storage = assert_ok!(StorageLayer::new(config.storage(), config.cache()).await);
        assert_ok!(storage.migrate().await);
        let state = AppState::new(config, storage);

        let admin = Actor::new(uuid::Uuid::new_v4(), Role::Admin);
        let err = assert_err!(state.auth.require(&admin, Capability::ManageWishes).await);
        assert!(matches!(err, PortalError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_yaml_file_round_trip() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "storage:\n  database:\n    url: \"sqlite::memory:\"\n    max_connections: 1\nauth:\n  jwt_secret: \"{}\"\ncache:\n  enabled: false\n",
            SECRET
        )
        .unwrap();

        let config = assert_ok!(Config::from_file(file.path()).await);
        assert!(!config.cache().enabled);
        assert!(config.access().seed_default_permissions);

        let yaml = assert_ok!(config.to_yaml());
        assert!(yaml.contains("seed_default_permissions: true"));
    }

    #[tokio::test]
    async fn test_placeholder_secret_rejected() {
        let err = assert_err!(Config::from_env_with(lookup(&[(
            "JWT_SECRET",
            "change-me-in-production"
        )])));
        assert!(matches!(err, PortalError::Config(_)));
    }
}
