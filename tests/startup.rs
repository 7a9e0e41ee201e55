use clients_crm::init_database;
use clients_crm::models::config::{DatabaseConfig, ErrorStatusPolicy, ServerConfig};
use tempfile::TempDir;

fn server_config(dir: &TempDir, run_migrations: bool) -> ServerConfig {
    let path = dir.path().join("missing.db");
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 3000,
        run_migrations,
        error_status_policy: ErrorStatusPolicy::Generic,
        database: DatabaseConfig {
            host: "localhost".to_string(),
            user: "crm".to_string(),
            password: "secret".to_string(),
            name: path.to_string_lossy().into_owned(),
            pool_size: 1,
        },
    }
}

#[test]
fn test_missing_database_file_fails_startup() {
    let dir = TempDir::new().expect("temp dir");
    let config = server_config(&dir, false);

    let result = init_database(&config);

    let err = result.err().expect("startup must fail without the clients schema");
    assert!(err.to_string().contains("missing the clients schema"));
}

#[test]
fn test_migrations_make_fresh_database_usable() {
    let dir = TempDir::new().expect("temp dir");
    let config = server_config(&dir, true);

    assert!(init_database(&config).is_ok());
}
