//! Server module for managing HTTP server lifecycle
//!
//! Builds the pool, repositories and router once, seeds the store, then
//! binds and serves until a shutdown signal arrives.

use std::sync::Arc;

use crate::api::routes::create_router;
use crate::config::{Environment, Settings};
use crate::db::establish_async_connection_pool;
use crate::repositories::{EmployeeRepository, Repositories};
use crate::services::Seeder;
use crate::state::AppState;
use tokio::net::TcpListener;
use tokio::signal;

/// HTTP server manager
pub struct Server {
    settings: Settings,
    environment: Environment,
}

impl Server {
    pub fn new(settings: Settings, environment: Environment) -> Self {
        Self {
            settings,
            environment,
        }
    }

    /// Start the server and run until shutdown signal
    ///
    /// This method:
    /// 1. Creates the database connection pool (connections open lazily)
    /// 2. Seeds the employee table (unless disabled)
    /// 3. Binds to the configured address
    /// 4. Serves requests with graceful shutdown
    ///
    /// A seeding failure, including an unreachable database, is logged and
    /// does not stop startup.
    ///
    /// # Errors
    /// - Address binding errors
    /// - Server runtime errors
    pub async fn run(self) -> anyhow::Result<()> {
        tracing::info!(
            app_name = %self.settings.application.name,
            app_version = %self.settings.application.version,
            environment = %self.environment,
            "Application starting"
        );

        tracing::info!(
            host = %self.settings.server.host,
            port = %self.settings.server.port,
            "Server configuration loaded"
        );

        // Never log the URL; it may carry the password
        tracing::info!(
            host = %self.settings.database.host,
            database = %self.settings.database.name,
            max_connections = %self.settings.database.max_connections,
            min_connections = %self.settings.database.min_connections,
            connection_timeout = %self.settings.database.connection_timeout,
            "Database configuration loaded"
        );

        tracing::info!("Initializing database connection pool...");
        let pool = establish_async_connection_pool(&self.settings.database);
        tracing::info!("Database connection pool created");

        let repos = Repositories::new(pool);

        if self.settings.seed.enabled {
            seed(repos.employees.clone()).await;
        } else {
            tracing::info!("Seeding disabled");
        }

        let router = create_router(AppState::new(repos));

        let address = self.settings.server.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!(error = %e, address = %address, "Failed to bind to address");
            anyhow::anyhow!("Failed to bind to {}: {}", address, e)
        })?;

        tracing::info!(address = %address, "Server listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}

async fn seed(repo: Arc<dyn EmployeeRepository>) {
    tracing::info!("Seeding employee table...");
    match Seeder::new(repo).run().await {
        Ok(employees) => tracing::info!(count = employees.len(), "Seeding complete"),
        Err(e) => tracing::error!(
            step = %e.step,
            error = %e.source,
            "Seeding failed, remaining steps skipped"
        ),
    }
}

/// Waits for a shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
