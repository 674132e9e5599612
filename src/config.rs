//! Application configuration
//!
//! Loaded from a TOML file. Every section and field is optional; missing
//! values fall back to defaults so a partial config file is enough.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// REST API server settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address for the REST API
    pub api_host: String,
    /// Port for the REST API
    pub api_port: u16,
    /// Seconds to wait for in-flight work during graceful shutdown
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_host: "0.0.0.0".to_string(),
            api_port: 8080,
            shutdown_timeout: 30,
        }
    }
}

/// Database settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Path to the SQLite database file
    pub path: String,
}

impl DatabaseSettings {
    /// SQLite connection URL, creating the file if it does not exist
    pub fn connection_url(&self) -> String {
        format!("sqlite://{}?mode=rwc", self.path)
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "./tours.db".to_string(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter, overridable via RUST_LOG
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }
}

/// Default config location: `<platform config dir>/viamar-tours/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("viamar-tours")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_full_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[server]
api_host = "127.0.0.1"
api_port = 9090
shutdown_timeout = 5

[database]
path = "/tmp/test-tours.db"

[logging]
level = "debug"
"#
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.server.api_host, "127.0.0.1");
        assert_eq!(config.server.api_port, 9090);
        assert_eq!(config.server.shutdown_timeout, 5);
        assert_eq!(config.database.path, "/tmp/test-tours.db");
        assert_eq!(
            config.database.connection_url(),
            "sqlite:///tmp/test-tours.db?mode=rwc"
        );
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[server]
api_port = 3000
"#
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.server.api_port, 3000);
        assert_eq!(config.server.api_host, "0.0.0.0");
        assert_eq!(config.database.path, "./tours.db");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = AppConfig::load(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn default_values() {
        let config = AppConfig::default();
        assert_eq!(config.server.api_host, "0.0.0.0");
        assert_eq!(config.server.api_port, 8080);
        assert_eq!(config.server.shutdown_timeout, 30);
        assert_eq!(
            config.database.connection_url(),
            "sqlite://./tours.db?mode=rwc"
        );
    }
}
