//! Application state for Axum web framework.
//!
//! Contains shared services that are accessible across all request
//! handlers.

use crate::repositories::Repositories;
use crate::services::Services;

/// Application state containing all shared services.
///
/// Cloning is cheap since services hold their repositories in an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
}

impl AppState {
    /// Builds every service from the given repositories.
    ///
    /// # Example
    /// ```ignore
    /// let pool = establish_async_connection_pool(&settings.database);
    /// let state = AppState::new(Repositories::new(pool));
    /// ```
    pub fn new(repos: Repositories) -> Self {
        Self {
            services: Services::new(repos),
        }
    }
}
