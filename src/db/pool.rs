//! Async database connection pool implementation.
//!
//! Uses bb8 connection pool manager with diesel_async for PostgreSQL connections.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::Pool;

use crate::config::DatabaseConfig;

/// Async connection pool type alias.
///
/// bb8::Pool internally uses Arc, so Clone is cheap (just reference count increment).
pub type AsyncDbPool = Pool<AsyncPgConnection>;

/// Creates an async database connection pool from the database settings.
///
/// No connection is opened here. The `min_connections` idle connections are
/// filled in the background, so an unreachable database surfaces on the
/// first checkout instead of at startup. Must be called inside a tokio runtime.
pub fn establish_async_connection_pool(config: &DatabaseConfig) -> AsyncDbPool {
    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.connection_url());

    Pool::builder()
        .max_size(config.max_connections)
        .min_idle(Some(config.min_connections))
        .connection_timeout(Duration::from_secs(config.connection_timeout))
        .build_unchecked(manager)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn unreachable_database() -> DatabaseConfig {
        DatabaseConfig {
            url: String::new(),
            host: "127.0.0.1".to_string(),
            port: 1,
            connection_timeout: 1,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_checkout_reports_connection_pool_error_when_database_is_down() {
        let pool = establish_async_connection_pool(&unreachable_database());
        let error: AppError = match pool.get().await {
            Ok(_) => panic!("nothing listens on port 1"),
            Err(e) => e.into(),
        };
        assert!(matches!(error, AppError::ConnectionPool { .. }), "{:?}", error);
    }
}
