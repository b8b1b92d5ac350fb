//! Command executor for dispatching CLI commands

use super::handlers::ServeCommandHandler;
use super::parser::{Cli, Commands};
use crate::config::{Environment, Settings};

/// Execute the parsed command with merged settings.
///
/// # Errors
/// Returns errors from command handlers
pub async fn execute_command(
    cli: &Cli,
    settings: Settings,
    environment: Environment,
) -> anyhow::Result<()> {
    match cli.subcommand() {
        Commands::Serve { dry_run, .. } => {
            ServeCommandHandler::new(settings, environment)
                .execute(dry_run)
                .await
        }
    }
}
