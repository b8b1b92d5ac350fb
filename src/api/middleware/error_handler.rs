//! Error handler for converting AppError to HTTP responses.
//!
//! Every variant maps to a status code and a JSON `ErrorResponse`. Server
//! side failures are logged with their source chain; the response body
//! never carries it.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{error, warn};

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);
        if status.is_server_error() {
            error!(error = %source_chain(&self), "Request failed");
        } else {
            warn!(error = %self, "Request rejected");
        }

        let error_response = match &self {
            AppError::NotFound {
                entity,
                field,
                value,
            } => ErrorResponse::not_found_error(entity, field, value),
            AppError::Duplicate {
                entity,
                field,
                value,
            } => ErrorResponse::duplicate_error(entity, field, value),
            AppError::Validation { field, reason } => ErrorResponse::validation_error(field, reason),
            AppError::ValidationErrors { errors } => {
                ErrorResponse::new(error_to_code(&self), "Request validation failed")
                    .with_details(json!(errors))
            }
            AppError::BadRequest { message } => ErrorResponse::new(error_to_code(&self), message),
            AppError::Database { operation, .. } => ErrorResponse::new(
                error_to_code(&self),
                &format!("Database operation failed: {}", operation),
            ),
            AppError::Configuration { key, .. } => ErrorResponse::new(
                error_to_code(&self),
                &format!("Configuration error: {}", key),
            ),
            AppError::ConnectionPool { .. } => {
                ErrorResponse::new(error_to_code(&self), "Database connection unavailable")
            }
            AppError::Internal { .. } => {
                ErrorResponse::new(error_to_code(&self), "An internal error occurred")
            }
        };

        (status, Json(error_response)).into_response()
    }
}

fn source_chain(error: &AppError) -> String {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Maps an AppError variant to its corresponding HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Duplicate { .. } => StatusCode::CONFLICT,
        AppError::Validation { .. } => StatusCode::BAD_REQUEST,
        AppError::ValidationErrors { .. } => StatusCode::BAD_REQUEST,
        AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::ConnectionPool { .. } => StatusCode::SERVICE_UNAVAILABLE,
        AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Maps an AppError variant to its error code string.
pub fn error_to_code(error: &AppError) -> &'static str {
    match error {
        AppError::NotFound { .. } => "NOT_FOUND",
        AppError::Duplicate { .. } => "DUPLICATE_ENTRY",
        AppError::Validation { .. } => "VALIDATION_ERROR",
        AppError::ValidationErrors { .. } => "VALIDATION_ERROR",
        AppError::BadRequest { .. } => "BAD_REQUEST",
        AppError::Database { .. } => "DATABASE_ERROR",
        AppError::Configuration { .. } => "CONFIGURATION_ERROR",
        AppError::ConnectionPool { .. } => "SERVICE_UNAVAILABLE",
        AppError::Internal { .. } => "INTERNAL_ERROR",
    }
}
