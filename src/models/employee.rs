use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Persisted employee row.
/// Derives Queryable for SELECT operations and Selectable for type-safe column selection
#[derive(Debug, Queryable, Selectable, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::employee)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "wojtek")]
    pub name: String,
}

/// Employee as handed to `save`.
///
/// `id: None` inserts a new row and lets the database assign the id
/// (Diesel writes `DEFAULT` for a `None` field). `id: Some(_)` overwrites
/// the row with that id.
#[derive(Debug, Insertable, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::employee)]
pub struct NewEmployee {
    pub id: Option<i32>,
    pub name: String,
}

impl NewEmployee {
    /// An employee that has not been persisted yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Full replacement of the mutable fields of an existing row.
    pub fn replacing(id: i32, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }
}
