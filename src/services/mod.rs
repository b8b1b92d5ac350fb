//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! repositories and handlers.

mod employee_service;
mod seeder;

pub use employee_service::EmployeeService;
pub use seeder::{SEED_NAMES, SeedError, SeedStep, Seeder};

use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since repositories are shared through `Arc`.
#[derive(Clone)]
pub struct Services {
    pub employees: EmployeeService,
}

impl Services {
    /// Creates a new Services instance from Repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            employees: EmployeeService::new(repos.employees),
        }
    }
}
