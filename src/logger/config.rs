//! Runtime shape of the logger, built from `LoggerSettings`.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, bail};
use tracing::Level;

/// What `init_logger` installs: a level filter plus console and/or file output.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub console: ConsoleConfig,
    pub file: FileConfig,
    /// One of trace, debug, info, warn, error
    pub level: String,
}

impl LoggerConfig {
    /// Builds a config and rejects it if `validate` would.
    pub fn new(console: ConsoleConfig, file: FileConfig, level: impl Into<String>) -> anyhow::Result<Self> {
        let config = Self {
            console,
            file,
            level: level.into(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        Level::from_str(&self.level).with_context(|| format!("unknown log level '{}'", self.level))?;

        if self.file.enabled && self.file.path.as_os_str().is_empty() {
            bail!("file output is enabled but no log file path is set");
        }
        if !self.console.enabled && !self.file.enabled {
            bail!("both console and file output are disabled");
        }
        Ok(())
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: ConsoleConfig::new(true, true),
            file: FileConfig::default(),
            level: Level::INFO.as_str().to_lowercase(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ConsoleConfig {
    pub enabled: bool,
    /// Only honoured when stdout is a terminal
    pub colored: bool,
}

impl ConsoleConfig {
    pub fn new(enabled: bool, colored: bool) -> Self {
        Self { enabled, colored }
    }
}

/// Log file target; the parent directory is created when the file is opened.
#[derive(Debug, Clone)]
pub struct FileConfig {
    pub enabled: bool,
    pub path: PathBuf,
    /// Truncate on startup when false
    pub append: bool,
    pub format: LogFormat,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: PathBuf::from("logs/employee-rs.log"),
            append: true,
            format: LogFormat::Json,
        }
    }
}

/// Line layout of the log file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("full") {
            Ok(Self::Full)
        } else if s.eq_ignore_ascii_case("compact") {
            Ok(Self::Compact)
        } else if s.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else {
            bail!("unknown log format '{s}', expected full, compact or json")
        }
    }
}
