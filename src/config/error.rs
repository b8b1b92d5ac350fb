//! Errors raised while assembling `Settings`

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A layer that must exist is absent on disk
    #[error("required configuration file {} is missing", .0.display())]
    FileNotFound(PathBuf),

    /// The merged layers do not deserialize into `Settings`
    #[error("settings do not match the expected shape: {0}")]
    ParseError(String),

    /// `field` is the dotted key, e.g. `server.port`
    #[error("invalid {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error(
        "EMPLOYEES_CONFIG_DIR and EMPLOYEES_CONFIG_FILE cannot both be set; \
         use the directory for layered files or the file for a single one"
    )]
    ConflictingSources,

    #[error(transparent)]
    Source(#[from] config::ConfigError),
}

impl ConfigError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
