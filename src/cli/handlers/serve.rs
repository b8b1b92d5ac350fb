//! Serve command handler
//!
//! Handles the serve command including dry-run validation and server startup.

use crate::config::{Environment, Settings};
use crate::server::Server;

/// Handler for the serve command
pub struct ServeCommandHandler {
    config: Settings,
    environment: Environment,
}

impl ServeCommandHandler {
    pub fn new(config: Settings, environment: Environment) -> Self {
        Self {
            config,
            environment,
        }
    }

    /// Run the server, or with `dry_run` only validate and print a summary.
    ///
    /// # Errors
    /// - Configuration validation errors
    /// - Server startup errors (if not dry-run)
    pub async fn execute(self, dry_run: bool) -> anyhow::Result<()> {
        if dry_run {
            return self.validate_only();
        }
        Server::new(self.config, self.environment).run().await
    }

    /// Validate configuration without starting the server
    pub fn validate_only(&self) -> anyhow::Result<()> {
        self.config.validate()?;

        println!("✓ Configuration is valid ({})", self.environment);
        println!("✓ Server would bind to: {}", self.config.server.address());
        println!(
            "✓ Database: {}:{}/{}",
            self.config.database.host, self.config.database.port, self.config.database.name
        );
        println!(
            "✓ Startup seeding: {}",
            if self.config.seed.enabled {
                "enabled"
            } else {
                "disabled"
            }
        );
        println!("Dry run completed successfully - configuration is ready for deployment");
        Ok(())
    }

    pub fn config(&self) -> &Settings {
        &self.config
    }
}
