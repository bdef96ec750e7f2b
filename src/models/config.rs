use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime configuration for the offers service.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Path or URL of the SQLite database.
    pub database_url: String,
}

impl ServerConfig {
    /// Load settings from `config/default.yaml` (optional) overlaid with
    /// `APP__*` environment variables, e.g. `APP__DATABASE_URL`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config/default")
    }

    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("database_url", "offers.db")?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}
