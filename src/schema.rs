// Diesel table definitions. The table itself is created at startup by the
// seeder (see `EMPLOYEE_TABLE_DDL`), not by a migration.

diesel::table! {
    employee (id) {
        id -> Int4,
        #[max_length = 100]
        name -> Varchar,
    }
}

/// Idempotent DDL for the `employee` table.
pub const EMPLOYEE_TABLE_DDL: &str =
    "CREATE TABLE IF NOT EXISTS employee (id SERIAL PRIMARY KEY, name VARCHAR(100) NOT NULL)";
