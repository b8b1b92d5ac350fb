//! Logger setup
//!
//! A logging system based on `tracing-subscriber` with support for:
//! - Console output with color control
//! - File output in full, compact or JSON format

pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

pub use config::*;
pub use error::LoggerError;

use std::fs::{File, OpenOptions};
use std::io::IsTerminal;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber described by `config`.
pub fn init_logger(config: LoggerConfig) -> anyhow::Result<()> {
    config.validate()?;

    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));
    let use_ansi = config.console.colored && std::io::stdout().is_terminal();

    let console_layer = config.console.enabled.then(|| {
        fmt::layer()
            .with_ansi(use_ansi)
            .with_target(true)
            .with_level(true)
    });

    // File layers go first so the console layer's ANSI setting cannot leak
    // into span fields written to the file (tokio-rs/tracing#1817).
    let (full, compact, json) = if config.file.enabled {
        let writer = Mutex::new(open_log_file(&config.file)?);
        match config.file.format {
            LogFormat::Full => (
                Some(fmt::layer().with_ansi(false).with_target(true).with_writer(writer)),
                None,
                None,
            ),
            LogFormat::Compact => (
                None,
                Some(
                    fmt::layer()
                        .with_ansi(false)
                        .with_target(true)
                        .compact()
                        .with_writer(writer),
                ),
                None,
            ),
            LogFormat::Json => (
                None,
                None,
                Some(fmt::layer().with_ansi(false).json().with_writer(writer)),
            ),
        }
    } else {
        (None, None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(full)
        .with(compact)
        .with(json)
        .with(console_layer)
        .try_init()
        .map_err(|e| LoggerError::AlreadyInitialized {
            message: e.to_string(),
        })?;

    Ok(())
}

/// Open (and create the parent directory of) the configured log file.
pub(crate) fn open_log_file(config: &FileConfig) -> Result<File, LoggerError> {
    if let Some(parent) = config.path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut options = OpenOptions::new();
    options.create(true);
    if config.append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }

    options.open(&config.path).map_err(LoggerError::from)
}
