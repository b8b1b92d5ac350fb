//! Configuration merger for CLI arguments and config files
//!
//! CLI arguments override file and environment based configuration.

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, Environment, Settings};

/// Holds the file/env configuration and applies CLI overrides on top.
pub struct ConfigurationMerger {
    base_config: Settings,
    environment: Environment,
}

impl ConfigurationMerger {
    pub fn new(base_config: Settings, environment: Environment) -> Self {
        Self {
            base_config,
            environment,
        }
    }

    /// Load the base configuration the way the CLI asks for it.
    ///
    /// `--config` selects single-file mode; otherwise the layered loader
    /// runs. `--env` beats `EMPLOYEES_APP_ENV`.
    ///
    /// # Errors
    /// Returns ConfigError if configuration loading or validation fails
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let loader = match cli.config {
            Some(ref path) => ConfigLoader::from_file(path),
            None => ConfigLoader::new()?,
        };
        let loader = match cli.env {
            Some(env) => loader.with_environment(env.into()),
            None => loader,
        };

        let base_config = loader.load()?;
        Ok(Self::new(base_config, loader.environment()))
    }

    /// Apply CLI overrides and validate the result.
    ///
    /// Precedence, highest first: `serve` options, global flags, base config.
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }

        let Commands::Serve {
            host,
            port,
            log_level,
            no_seed,
            dry_run: _,
        } = cli.subcommand();

        if let Some(host) = host {
            config.server.host = host;
        }
        if let Some(port) = port {
            config.server.port = port;
        }
        if let Some(level) = log_level {
            config.logger.level = level.as_str().to_string();
        }
        if no_seed {
            config.seed.enabled = false;
        }

        config.validate()?;

        Ok(config)
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn config(&self) -> &Settings {
        &self.base_config
    }
}
