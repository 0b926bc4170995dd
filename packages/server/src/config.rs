use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Serve the error page with `200 OK` instead of `400 Bad Request`.
    /// Kept for clients written against the servlet this service replaces.
    #[serde(default)]
    pub legacy_status_codes: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection URL. Default: "sqlite://pokemon.db?mode=ro".
    pub url: String,
    /// Upper bound on pooled connections. Default: 5.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Seconds to wait when opening or acquiring a connection. Default: 8.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_max_connections() -> u32 {
    5
}
fn default_connect_timeout_secs() -> u64 {
    8
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    /// Directory holding `search.html`, `error.html` and `unavailable.html`.
    pub pages_dir: PathBuf,
    /// Directory served under `/images`.
    pub images_dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub assets: AssetsConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("POKEDEX_CONFIG").unwrap_or_else(|_| "config/config".to_string());

        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("server.legacy_status_codes", false)?
            .set_default("database.url", "sqlite://pokemon.db?mode=ro")?
            .set_default("database.max_connections", 5_i64)?
            .set_default("database.connect_timeout_secs", 8_i64)?
            .set_default("assets.pages_dir", "./pages")?
            .set_default("assets.images_dir", "./images")?
            .add_source(File::with_name(&config_path).required(false))
            // Override from environment (e.g., POKEDEX__DATABASE__URL)
            .add_source(Environment::with_prefix("POKEDEX").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
