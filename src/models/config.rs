//! Configuration model loaded from external sources.

use std::collections::HashMap;
use std::fmt;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_ADDRESS: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_POOL_SIZE: u32 = 10;

/// How service failures are translated into HTTP status codes.
///
/// The response body is the same generic message under both policies.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorStatusPolicy {
    /// Every failure is reported as `500 Internal Server Error`.
    #[default]
    Generic,
    /// Duplicate email maps to `409`, a missing name to `400`, the rest to `500`.
    Detailed,
}

#[derive(Clone, Deserialize)]
/// Connection settings read from the `DB_*` environment variables.
pub struct DatabaseConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    /// Database name; for the SQLite backend this is the database file.
    pub name: String,
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

fn default_pool_size() -> u32 {
    DEFAULT_POOL_SIZE
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"***")
            .field("name", &self.name)
            .field("pool_size", &self.pool_size)
            .finish()
    }
}

impl DatabaseConfig {
    /// Reads the database settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(None)
    }

    /// Reads the database settings from `vars` instead of the process
    /// environment when provided.
    pub fn from_source(vars: Option<HashMap<String, String>>) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Environment::with_prefix("DB").source(vars))
            .build()?
            .try_deserialize()
    }

    /// Connection string handed to the Diesel connection manager.
    pub fn database_url(&self) -> &str {
        &self.name
    }
}

#[derive(Deserialize)]
struct AppSettings {
    address: String,
    port: u16,
    #[serde(default)]
    run_migrations: bool,
    #[serde(default)]
    error_status_policy: ErrorStatusPolicy,
}

#[derive(Clone, Debug)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Apply embedded migrations before serving.
    pub run_migrations: bool,
    pub error_status_policy: ErrorStatusPolicy,
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Loads the configuration for the given profile.
    ///
    /// Sources, later ones winning: built-in defaults, `config/default.yaml`,
    /// `config/{app_env}.yaml`, `APP_*` environment variables. Database
    /// settings always come from `DB_*`.
    pub fn load(app_env: &str) -> Result<Self, ConfigError> {
        Self::load_from(app_env, None)
    }

    /// Same as [`ServerConfig::load`], with `vars` standing in for the process
    /// environment when provided.
    pub fn load_from(
        app_env: &str,
        vars: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let app: AppSettings = Config::builder()
            .set_default("address", DEFAULT_ADDRESS)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(Environment::with_prefix("APP").source(vars.clone()))
            .build()?
            .try_deserialize()?;

        let database = DatabaseConfig::from_source(vars)?;

        Ok(Self {
            address: app.address,
            port: app.port,
            run_migrations: app.run_migrations,
            error_status_policy: app.error_status_policy,
            database,
        })
    }
}
