//! Repository layer for data access operations.
//!
//! `EmployeeRepository` is the seam between the service layer and the
//! store; `PgEmployeeRepository` is the PostgreSQL implementation.

mod employee_repo;
#[cfg(test)]
pub(crate) mod memory_repo;

pub use employee_repo::{EmployeeRepository, PgEmployeeRepository};

use std::sync::Arc;

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Cloning is cheap: every field is an `Arc`.
#[derive(Clone)]
pub struct Repositories {
    pub employees: Arc<dyn EmployeeRepository>,
}

impl Repositories {
    /// Creates PostgreSQL-backed repositories sharing one pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            employees: Arc::new(PgEmployeeRepository::new(pool)),
        }
    }

    /// Wraps an existing repository implementation.
    pub fn from_employee_repository(employees: Arc<dyn EmployeeRepository>) -> Self {
        Self { employees }
    }
}
