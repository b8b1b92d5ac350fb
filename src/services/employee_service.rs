//! Employee service for business logic operations.
//!
//! Wraps the repository with the lookup-then-write rules the handlers rely
//! on: an absent employee is reported as `None`/`false`, never as an error.

use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::{Employee, NewEmployee};
use crate::repositories::EmployeeRepository;

#[derive(Clone)]
pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        self.repo.find_all().await
    }

    pub async fn get_employee(&self, id: i32) -> AppResult<Option<Employee>> {
        self.repo.find_by_id(id).await
    }

    /// Persists a new employee; the id is assigned by the store.
    pub async fn create_employee(&self, name: String) -> AppResult<Employee> {
        self.repo.save(NewEmployee::new(name)).await
    }

    /// Replaces the name of an existing employee.
    ///
    /// # Returns
    /// `None` if no employee has this id, including when the row is deleted
    /// between the lookup and the write
    pub async fn update_employee(&self, id: i32, name: String) -> AppResult<Option<Employee>> {
        let Some(existing) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };
        match self.repo.save(NewEmployee::replacing(existing.id, name)).await {
            Ok(updated) => Ok(Some(updated)),
            Err(AppError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Deletes an employee.
    ///
    /// # Returns
    /// `true` if the employee was deleted, `false` if not found
    pub async fn delete_employee(&self, id: i32) -> AppResult<bool> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }
        let affected = self.repo.delete_by_id(id).await?;
        Ok(affected > 0)
    }

    /// Round-trip to the store, used by the health checks.
    pub async fn ping(&self) -> AppResult<()> {
        self.repo.ping().await
    }
}
