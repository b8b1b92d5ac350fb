//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `employee` - Employee request DTOs
//! - `error` - Common error response DTOs
//! - `health` - Health check responses

mod employee;
mod error;
mod health;

pub use employee::EmployeeRequest;
pub use error::ErrorResponse;
pub use health::{ComponentHealth, HealthResponse, HealthStatus};
