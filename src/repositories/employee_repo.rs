//! Employee repository for async database operations.
//!
//! Provides CRUD operations for the employee table using diesel_async.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult, DatabaseErrorConverter};
use crate::models::{Employee, NewEmployee};
use crate::schema::EMPLOYEE_TABLE_DDL;

/// Typed access to the employee store.
///
/// Uses `async_trait` for dynamic dispatch; implementations must be
/// `Send + Sync` so they can live in the axum state.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Creates the employee table if it does not exist.
    async fn ensure_schema(&self) -> AppResult<()>;

    /// Cheap round-trip used by the health checks.
    async fn ping(&self) -> AppResult<()>;

    /// All employees, ordered by id.
    async fn find_all(&self) -> AppResult<Vec<Employee>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Employee>>;

    /// Inserts when `employee.id` is `None`, otherwise overwrites the row
    /// with that id. Overwriting a missing row is `AppError::NotFound`.
    async fn save(&self, employee: NewEmployee) -> AppResult<Employee>;

    /// Returns the number of affected rows (0 or 1).
    async fn delete_by_id(&self, id: i32) -> AppResult<usize>;

    /// Returns the number of deleted rows.
    async fn delete_all(&self) -> AppResult<usize>;
}

/// Employee repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap.
#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: AsyncDbPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

fn db_error(operation: &'static str) -> impl FnOnce(diesel::result::Error) -> AppError {
    move |error| DatabaseErrorConverter::convert_diesel_error(error, operation)
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn ensure_schema(&self) -> AppResult<()> {
        let mut conn = self.pool.get().await?;

        diesel::sql_query(EMPLOYEE_TABLE_DDL)
            .execute(&mut conn)
            .await
            .map_err(db_error("create employee table"))?;
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        let mut conn = self.pool.get().await?;

        diesel::sql_query("SELECT 1")
            .execute(&mut conn)
            .await
            .map_err(db_error("ping"))?;
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Employee>> {
        use crate::schema::employee::dsl::*;
        let mut conn = self.pool.get().await?;

        employee
            .select(Employee::as_select())
            .order(id.asc())
            .load(&mut conn)
            .await
            .map_err(db_error("list employees"))
    }

    async fn find_by_id(&self, employee_id: i32) -> AppResult<Option<Employee>> {
        use crate::schema::employee::dsl::*;
        let mut conn = self.pool.get().await?;

        employee
            .find(employee_id)
            .select(Employee::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(db_error("find employee"))
    }

    async fn save(&self, new_employee: NewEmployee) -> AppResult<Employee> {
        use crate::schema::employee::dsl::*;
        let mut conn = self.pool.get().await?;

        match new_employee.id {
            None => diesel::insert_into(employee)
                .values(&new_employee)
                .returning(Employee::as_returning())
                .get_result(&mut conn)
                .await
                .map_err(db_error("insert employee")),
            Some(employee_id) => diesel::update(employee.find(employee_id))
                .set(name.eq(&new_employee.name))
                .returning(Employee::as_returning())
                .get_result(&mut conn)
                .await
                .optional()
                .map_err(db_error("update employee"))?
                .ok_or_else(|| AppError::employee_not_found(employee_id)),
        }
    }

    async fn delete_by_id(&self, employee_id: i32) -> AppResult<usize> {
        use crate::schema::employee::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(employee.find(employee_id))
            .execute(&mut conn)
            .await
            .map_err(db_error("delete employee"))
    }

    async fn delete_all(&self) -> AppResult<usize> {
        use crate::schema::employee::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(employee)
            .execute(&mut conn)
            .await
            .map_err(db_error("delete all employees"))
    }
}
