//! Errors raised while installing the subscriber

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    /// The log file or its directory could not be opened
    #[error("cannot open log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("a global subscriber is already installed: {message}")]
    AlreadyInitialized { message: String },
}
