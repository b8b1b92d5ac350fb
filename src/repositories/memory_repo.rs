//! In-memory `EmployeeRepository` used by handler, service and seeder tests.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use crate::error::{AppError, AppResult};
use crate::models::{Employee, NewEmployee};
use crate::repositories::EmployeeRepository;

#[derive(Default)]
struct Table {
    rows: BTreeMap<i32, String>,
    /// SERIAL semantics: never reused, survives delete_all
    next_id: i32,
    created: bool,
}

/// Behaves like the PostgreSQL table, including a sequence that keeps
/// counting after rows are deleted.
#[derive(Default)]
pub struct MemoryEmployeeRepository {
    table: Mutex<Table>,
    unavailable: AtomicBool,
    vanishing_rows: AtomicBool,
}

impl MemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository whose table already exists with the given rows.
    pub fn with_rows(names: &[&str]) -> Self {
        let repo = Self::new();
        {
            let mut table = repo.table.lock().unwrap();
            table.created = true;
            for name in names {
                table.next_id += 1;
                let id = table.next_id;
                table.rows.insert(id, name.to_string());
            }
        }
        repo
    }

    /// Make every following call fail like a lost connection.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Drop each row right after `find_by_id` returns it, as if another
    /// client deleted it between a lookup and the following write.
    pub fn set_vanishing_rows(&self, vanishing: bool) {
        self.vanishing_rows.store(vanishing, Ordering::SeqCst);
    }

    pub fn table_created(&self) -> bool {
        self.table.lock().unwrap().created
    }

    pub fn len(&self) -> usize {
        self.table.lock().unwrap().rows.len()
    }

    fn check(&self) -> AppResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::Database {
                operation: "memory store".to_string(),
                source: anyhow::anyhow!("store unavailable"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl EmployeeRepository for MemoryEmployeeRepository {
    async fn ensure_schema(&self) -> AppResult<()> {
        self.check()?;
        self.table.lock().unwrap().created = true;
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        self.check()
    }

    async fn find_all(&self) -> AppResult<Vec<Employee>> {
        self.check()?;
        let table = self.table.lock().unwrap();
        Ok(table
            .rows
            .iter()
            .map(|(id, name)| Employee {
                id: *id,
                name: name.clone(),
            })
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Employee>> {
        self.check()?;
        let mut table = self.table.lock().unwrap();
        let found = table.rows.get(&id).map(|name| Employee {
            id,
            name: name.clone(),
        });
        if self.vanishing_rows.load(Ordering::SeqCst) {
            table.rows.remove(&id);
        }
        Ok(found)
    }

    async fn save(&self, employee: NewEmployee) -> AppResult<Employee> {
        self.check()?;
        let mut table = self.table.lock().unwrap();
        let id = match employee.id {
            None => {
                table.next_id += 1;
                table.next_id
            }
            Some(id) if table.rows.contains_key(&id) => id,
            Some(id) => return Err(AppError::employee_not_found(id)),
        };
        table.rows.insert(id, employee.name.clone());
        Ok(Employee {
            id,
            name: employee.name,
        })
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<usize> {
        self.check()?;
        Ok(self.table.lock().unwrap().rows.remove(&id).map_or(0, |_| 1))
    }

    async fn delete_all(&self) -> AppResult<usize> {
        self.check()?;
        let mut table = self.table.lock().unwrap();
        let deleted = table.rows.len();
        table.rows.clear();
        Ok(deleted)
    }
}
