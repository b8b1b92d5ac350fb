//! Configuration settings structures for employee-rs
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, FileConfig, LogFormat, LoggerConfig};

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "employee-rs".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    5432
}

fn default_db_name() -> String {
    "postgres".to_string()
}

fn default_db_username() -> String {
    "postgres".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connection_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> String {
    "logs/employee-rs.log".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    #[serde(default = "default_app_name")]
    pub name: String,

    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// Get the full server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// ============================================================================
// Database Configuration
// ============================================================================

/// PostgreSQL connection configuration.
///
/// Either set `url` directly or the discrete `host`/`port`/`name`/
/// `username`/`password` fields; a non-empty `url` wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Full connection URL, overrides the discrete fields when set
    #[serde(default)]
    pub url: String,

    #[serde(default = "default_db_host")]
    pub host: String,

    #[serde(default = "default_db_port")]
    pub port: u16,

    /// Database name
    #[serde(default = "default_db_name")]
    pub name: String,

    #[serde(default = "default_db_username")]
    pub username: String,

    #[serde(default)]
    pub password: String,

    /// Maximum number of connections in the pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Minimum number of idle connections kept by the pool
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl DatabaseConfig {
    /// The URL handed to the connection manager.
    pub fn connection_url(&self) -> String {
        if !self.url.trim().is_empty() {
            return self.url.clone();
        }

        let credentials = if self.password.is_empty() {
            self.username.clone()
        } else {
            format!("{}:{}", self.username, self.password)
        };
        format!(
            "postgres://{}@{}:{}/{}",
            credentials, self.host, self.port, self.name
        )
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            host: default_db_host(),
            port: default_db_port(),
            name: default_db_name(),
            username: default_db_username(),
            password: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connection_timeout: default_connection_timeout(),
        }
    }
}

// ============================================================================
// Seed Configuration
// ============================================================================

/// Startup seeding of demo rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// When false the seeder is skipped and the table is left untouched
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

// ============================================================================
// Logger Settings
// ============================================================================

/// Console output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            colored: default_true(),
        }
    }
}

/// File output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_log_path")]
    pub path: String,

    /// Whether to append to an existing file instead of truncating it
    #[serde(default = "default_true")]
    pub append: bool,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
            append: default_true(),
            format: default_log_format(),
        }
    }
}

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level or full `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub console: ConsoleSettings,

    #[serde(default)]
    pub file: FileSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            console: ConsoleSettings::default(),
            file: FileSettings::default(),
        }
    }
}

impl LoggerSettings {
    /// Convert the file representation into the runtime `LoggerConfig`.
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let console = ConsoleConfig::new(self.console.enabled, self.console.colored);
        let file = self.file.into_file_config()?;

        LoggerConfig::new(console, file, self.level).map_err(|e| ConfigError::ValidationError {
            field: "logger".to_string(),
            message: e.to_string(),
        })
    }
}

impl FileSettings {
    pub fn into_file_config(self) -> Result<FileConfig, ConfigError> {
        let format = self
            .format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: e.to_string(),
            })?;

        Ok(FileConfig {
            enabled: self.enabled,
            path: PathBuf::from(self.path),
            append: self.append,
            format,
        })
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub application: ApplicationConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logger: LoggerSettings,

    #[serde(default)]
    pub seed: SeedConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_server_config() -> impl Strategy<Value = ServerConfig> {
        (
            prop_oneof![
                Just("127.0.0.1".to_string()),
                Just("0.0.0.0".to_string()),
                Just("localhost".to_string()),
            ],
            1u16..=65535u16,
        )
            .prop_map(|(host, port)| ServerConfig { host, port })
    }

    fn arb_database_config() -> impl Strategy<Value = DatabaseConfig> {
        (
            prop_oneof![
                Just(String::new()),
                Just("postgres://user:pass@db:5432/employees".to_string()),
            ],
            "[a-z]{1,12}",
            1u16..=65535u16,
            "[a-z_]{1,12}",
            "[a-z]{1,12}",
            "[a-zA-Z0-9]{0,16}",
            1u32..=100u32,
            1u32..=10u32,
            1u64..=120u64,
        )
            .prop_map(
                |(url, host, port, name, username, password, max, min, timeout)| DatabaseConfig {
                    url,
                    host,
                    port,
                    name,
                    username,
                    password,
                    max_connections: max,
                    min_connections: min.min(max),
                    connection_timeout: timeout,
                },
            )
    }

    fn arb_logger_settings() -> impl Strategy<Value = LoggerSettings> {
        (
            prop_oneof![
                Just("trace".to_string()),
                Just("debug".to_string()),
                Just("info".to_string()),
                Just("warn".to_string()),
                Just("error".to_string()),
            ],
            any::<bool>(),
            any::<bool>(),
            any::<bool>(),
            prop_oneof![
                Just("json".to_string()),
                Just("full".to_string()),
                Just("compact".to_string()),
            ],
        )
            .prop_map(|(level, colored, file_enabled, append, format)| LoggerSettings {
                level,
                console: ConsoleSettings {
                    enabled: true,
                    colored,
                },
                file: FileSettings {
                    enabled: file_enabled,
                    path: default_log_path(),
                    append,
                    format,
                },
            })
    }

    fn arb_settings() -> impl Strategy<Value = Settings> {
        (
            arb_server_config(),
            arb_database_config(),
            arb_logger_settings(),
            any::<bool>(),
        )
            .prop_map(|(server, database, logger, seed_enabled)| Settings {
                application: ApplicationConfig::default(),
                server,
                database,
                logger,
                seed: SeedConfig {
                    enabled: seed_enabled,
                },
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_settings_survive_toml(settings in arb_settings()) {
            let toml_str = toml::to_string(&settings).expect("Settings should serialize to TOML");
            let parsed: Settings = toml::from_str(&toml_str).expect("TOML should deserialize back");
            prop_assert_eq!(settings, parsed);
        }
    }

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_connection_url_from_parts() {
        let config = DatabaseConfig {
            host: "db".to_string(),
            name: "staff".to_string(),
            username: "app".to_string(),
            password: "secret".to_string(),
            ..Default::default()
        };
        assert_eq!(config.connection_url(), "postgres://app:secret@db:5432/staff");
    }

    #[test]
    fn test_connection_url_without_password() {
        let config = DatabaseConfig::default();
        assert_eq!(
            config.connection_url(),
            "postgres://postgres@localhost:5432/postgres"
        );
    }

    #[test]
    fn test_connection_url_prefers_explicit_url() {
        let config = DatabaseConfig {
            url: "postgres://other/db".to_string(),
            host: "ignored".to_string(),
            ..Default::default()
        };
        assert_eq!(config.connection_url(), "postgres://other/db");
    }

    #[test]
    fn test_seed_enabled_by_default() {
        assert!(SeedConfig::default().enabled);
        let settings: Settings = toml::from_str("").unwrap();
        assert!(settings.seed.enabled);
    }

    #[test]
    fn test_settings_deserialize_partial() {
        let toml_str = r#"
            [database]
            host = "pg.internal"
            password = "mysecretpassword"

            [seed]
            enabled = false
        "#;
        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.database.host, "pg.internal");
        assert_eq!(settings.database.password, "mysecretpassword");
        assert_eq!(settings.database.name, "postgres");
        assert!(!settings.seed.enabled);
        assert_eq!(settings.server, ServerConfig::default());
    }

    #[test]
    fn test_logger_settings_into_logger_config() {
        let settings = LoggerSettings {
            level: "debug".to_string(),
            ..Default::default()
        };
        let config = settings.into_logger_config().unwrap();
        assert_eq!(config.level, "debug");
        assert!(config.console.enabled);
        assert!(!config.file.enabled);
        assert_eq!(config.file.format, LogFormat::Json);
    }

    #[test]
    fn test_file_settings_invalid_format() {
        let settings = FileSettings {
            format: "xml".to_string(),
            ..Default::default()
        };
        let err = settings.into_file_config().unwrap_err();
        assert!(
            matches!(err, ConfigError::ValidationError { field, .. } if field == "logger.file.format")
        );
    }

    #[test]
    fn test_logger_settings_both_outputs_disabled() {
        let settings = LoggerSettings {
            console: ConsoleSettings {
                enabled: false,
                colored: false,
            },
            ..Default::default()
        };
        assert!(settings.into_logger_config().is_err());
    }
}
