use crate::error::{AppError, ConstraintParser};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// Converts Diesel errors into `AppError` variants.
///
/// Integrity violations that a client could have caused become typed
/// errors (`Duplicate`, `Validation`); everything else is a `Database`
/// error and surfaces as a 500.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(kind, info) => {
                Self::convert_database_error(kind, info.as_ref(), operation)
            }
            DieselError::NotFound => AppError::NotFound {
                entity: "resource".to_string(),
                field: "id".to_string(),
                value: "unknown".to_string(),
            },
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }

    fn convert_database_error(
        kind: DatabaseErrorKind,
        info: &(dyn DatabaseErrorInformation + Send + Sync),
        operation: &str,
    ) -> AppError {
        let message = info.message();

        let converted = match kind {
            DatabaseErrorKind::UniqueViolation => {
                ConstraintParser::parse_unique_violation(message, info.constraint_name()).map(
                    |(entity, field, value)| AppError::Duplicate {
                        entity,
                        field,
                        value,
                    },
                )
            }
            DatabaseErrorKind::NotNullViolation => {
                ConstraintParser::parse_not_null_violation(message).map(|(entity, field)| {
                    AppError::Validation {
                        field,
                        reason: format!("Field is required for {}", entity),
                    }
                })
            }
            _ => ConstraintParser::parse_length_violation(message).map(|limit| {
                AppError::Validation {
                    field: info.column_name().unwrap_or("name").to_string(),
                    reason: format!("Value must be at most {} characters", limit),
                }
            }),
        };

        converted.unwrap_or_else(|| AppError::Database {
            operation: operation.to_string(),
            source: anyhow::Error::msg(format!("Database error: {}", message)),
        })
    }
}
