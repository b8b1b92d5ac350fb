//! Deployment environment; selects the `{name}.toml` overlay.

use std::fmt;
use std::str::FromStr;

use crate::config::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// Read by `ConfigLoader` when no `--env` flag is given
    pub const ENV_VAR: &'static str = "EMPLOYEES_APP_ENV";

    const ALL: [Environment; 4] = [
        Environment::Development,
        Environment::Test,
        Environment::Staging,
        Environment::Production,
    ];

    /// Unset or unrecognised values fall back to `Development`.
    pub fn from_env() -> Self {
        std::env::var(Self::ENV_VAR)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// Overlay file stem, e.g. `production` for `production.toml`.
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    fn short_name(self) -> Option<&'static str> {
        match self {
            Environment::Development => Some("dev"),
            Environment::Staging => Some("stage"),
            Environment::Production => Some("prod"),
            Environment::Test => None,
        }
    }

    fn matches(self, name: &str) -> bool {
        name.eq_ignore_ascii_case(self.as_str())
            || self.short_name().is_some_and(|short| name.eq_ignore_ascii_case(short))
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|env| env.matches(s))
            .ok_or_else(|| ConfigError::validation(Self::ENV_VAR, format!("unknown environment '{s}'")))
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
