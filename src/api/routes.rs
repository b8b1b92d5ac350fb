//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use axum::{Json, Router, middleware, routing::get};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

use crate::api::doc::{ApiDoc, OPENAPI_PATH};
use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs first):
/// 1. Request ID middleware (runs first) - generates/propagates request IDs
/// 2. Logging middleware (runs second) - logs requests with request IDs
///
/// # Routes
/// - `/employees` - Employee CRUD operations
/// - `/health` - Health probes
/// - `/api-docs/openapi.json` - OpenAPI document
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::employees::employee_routes())
        .merge(handlers::health::health_routes())
        .route(OPENAPI_PATH, get(|| async { Json(ApiDoc::openapi()) }))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
