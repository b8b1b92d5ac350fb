//! Configuration validation logic
//!
//! Each section validates itself; `Settings::validate` returns the first
//! failure.

use crate::config::error::ConfigError;
use crate::config::settings::{DatabaseConfig, FileSettings, LoggerSettings, ServerConfig, Settings};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

const VALID_URL_SCHEMES: &[&str] = &["postgres://", "postgresql://"];

impl ServerConfig {
    /// Validate server configuration
    ///
    /// # Validation Rules
    /// - Host must not be empty
    /// - Port must be between 1 and 65535
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::validation(
                "server.host",
                "Host is required. Use 127.0.0.1 for local access or 0.0.0.0 for all interfaces.",
            ));
        }

        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535. Please specify a valid port number.",
            ));
        }

        Ok(())
    }
}

impl DatabaseConfig {
    /// Validate database configuration
    ///
    /// # Validation Rules
    /// - An explicit URL must use the postgres scheme
    /// - Without a URL, host, database name and username are required
    /// - Pool bounds must be positive and min <= max
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.url.trim().is_empty() {
            if !VALID_URL_SCHEMES
                .iter()
                .any(|scheme| self.url.starts_with(scheme))
            {
                return Err(ConfigError::validation(
                    "database.url",
                    "Invalid database URL format. Expected format: postgres://[user:password@]host[:port]/database",
                ));
            }
        } else {
            if self.host.trim().is_empty() {
                return Err(ConfigError::validation(
                    "database.host",
                    "Database host is required when database.url is not set.",
                ));
            }
            if self.name.trim().is_empty() {
                return Err(ConfigError::validation(
                    "database.name",
                    "Database name is required when database.url is not set.",
                ));
            }
            if self.username.trim().is_empty() {
                return Err(ConfigError::validation(
                    "database.username",
                    "Database username is required when database.url is not set.",
                ));
            }
            if self.port == 0 {
                return Err(ConfigError::validation(
                    "database.port",
                    "Database port must be between 1 and 65535.",
                ));
            }
        }

        if self.max_connections == 0 {
            return Err(ConfigError::validation(
                "database.max_connections",
                "Max connections must be greater than 0.",
            ));
        }

        if self.min_connections == 0 {
            return Err(ConfigError::validation(
                "database.min_connections",
                "Min connections must be greater than 0.",
            ));
        }

        if self.min_connections > self.max_connections {
            return Err(ConfigError::ValidationError {
                field: "database.min_connections".to_string(),
                message: format!(
                    "Min connections ({}) cannot exceed max connections ({}).",
                    self.min_connections, self.max_connections
                ),
            });
        }

        if self.connection_timeout == 0 {
            return Err(ConfigError::validation(
                "database.connection_timeout",
                "Connection timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl FileSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path is required when file logging is enabled.",
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger settings
    ///
    /// # Validation Rules
    /// - Log level must be one of: trace, debug, info, warn, error
    /// - At least one output must be enabled
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one output (console or file) must be enabled.",
            ));
        }

        self.file.validate()
    }
}

impl Settings {
    /// Validate all configuration settings, returning the first error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.database.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: ConfigError) -> String {
        match err {
            ConfigError::ValidationError { field, .. } => field,
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_server_config_invalid_port_zero() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert_eq!(field_of(config.validate().unwrap_err()), "server.port");
    }

    #[test]
    fn test_server_config_empty_host() {
        let config = ServerConfig {
            host: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(field_of(config.validate().unwrap_err()), "server.host");
    }

    #[test]
    fn test_database_config_rejects_foreign_scheme() {
        let config = DatabaseConfig {
            url: "mysql://localhost/db".to_string(),
            ..Default::default()
        };
        assert_eq!(field_of(config.validate().unwrap_err()), "database.url");
    }

    #[test]
    fn test_database_config_accepts_postgresql_scheme() {
        let config = DatabaseConfig {
            url: "postgresql://user:pw@localhost/db".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_database_config_requires_host_without_url() {
        let config = DatabaseConfig {
            host: String::new(),
            ..Default::default()
        };
        assert_eq!(field_of(config.validate().unwrap_err()), "database.host");
    }

    #[test]
    fn test_database_config_explicit_url_skips_part_checks() {
        let config = DatabaseConfig {
            url: "postgres://localhost/test".to_string(),
            host: String::new(),
            name: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_database_config_min_exceeds_max() {
        let config = DatabaseConfig {
            max_connections: 2,
            min_connections: 5,
            ..Default::default()
        };
        assert_eq!(
            field_of(config.validate().unwrap_err()),
            "database.min_connections"
        );
    }

    #[test]
    fn test_logger_settings_invalid_level() {
        let settings = LoggerSettings {
            level: "verbose".to_string(),
            ..Default::default()
        };
        assert_eq!(field_of(settings.validate().unwrap_err()), "logger.level");
    }

    #[test]
    fn test_logger_settings_file_enabled_empty_path() {
        let mut settings = LoggerSettings::default();
        settings.file.enabled = true;
        settings.file.path = String::new();
        assert_eq!(
            field_of(settings.validate().unwrap_err()),
            "logger.file.path"
        );
    }

    #[test]
    fn test_settings_reports_first_failing_section() {
        let mut settings = Settings::default();
        settings.server.port = 0;
        settings.logger.level = "nope".to_string();
        assert_eq!(field_of(settings.validate().unwrap_err()), "server.port");
    }
}
