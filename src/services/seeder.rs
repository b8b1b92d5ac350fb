//! Startup seeding of the employee table.
//!
//! Creates the table if needed and replaces its contents with a fixed set
//! of demo rows. Seeding runs to completion before the listener binds.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::error::AppError;
use crate::models::{Employee, NewEmployee};
use crate::repositories::EmployeeRepository;

/// Names inserted on every startup, in insertion order.
pub const SEED_NAMES: [&str; 3] = ["wojtek", "admin", "test"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedStep {
    CreateTable,
    DeleteAll,
    Insert(&'static str),
    Fetch,
}

impl fmt::Display for SeedStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedStep::CreateTable => f.write_str("create table"),
            SeedStep::DeleteAll => f.write_str("delete all"),
            SeedStep::Insert(name) => write!(f, "insert '{}'", name),
            SeedStep::Fetch => f.write_str("fetch"),
        }
    }
}

/// A failed step; the steps after it were not attempted.
#[derive(Debug, Error)]
#[error("Seeding failed at step '{step}'")]
pub struct SeedError {
    pub step: SeedStep,
    #[source]
    pub source: AppError,
}

pub struct Seeder {
    repo: Arc<dyn EmployeeRepository>,
}

impl Seeder {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }

    /// Run every step in order, stopping at the first failure.
    ///
    /// # Returns
    /// The rows present after seeding
    pub async fn run(&self) -> Result<Vec<Employee>, SeedError> {
        let at = |step: SeedStep| move |source: AppError| SeedError { step, source };

        self.repo
            .ensure_schema()
            .await
            .map_err(at(SeedStep::CreateTable))?;

        let deleted = self
            .repo
            .delete_all()
            .await
            .map_err(at(SeedStep::DeleteAll))?;
        debug!(deleted, "Cleared employee table");

        for name in SEED_NAMES {
            let saved = self
                .repo
                .save(NewEmployee::new(name))
                .await
                .map_err(at(SeedStep::Insert(name)))?;
            debug!(id = saved.id, name = %saved.name, "Inserted seed employee");
        }

        let employees = self.repo.find_all().await.map_err(at(SeedStep::Fetch))?;
        for employee in &employees {
            info!(id = employee.id, name = %employee.name, "Seeded employee");
        }
        Ok(employees)
    }
}
