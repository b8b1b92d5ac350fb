//! Employee CRUD request handlers.
//!
//! A missing employee is answered with a bare 404; only malformed input and
//! store failures produce an `ErrorResponse` body.

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};

use crate::api::doc::EMPLOYEE_TAG;
use crate::api::dto::{EmployeeRequest, ErrorResponse};
use crate::error::AppResult;
use crate::models::Employee;
use crate::state::AppState;
use crate::utils::validate::{EmployeeId, ValidatedJson};

/// Route prefix; also used to build `Location` headers.
pub const EMPLOYEES_PATH: &str = "/employees";

/// Creates employee-related routes.
///
/// Routes:
/// - GET /employees         - List all employees
/// - POST /employees        - Create a new employee
/// - GET /employees/{id}    - Get employee by ID
/// - PUT /employees/{id}    - Replace employee by ID
/// - DELETE /employees/{id} - Delete employee by ID
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route(EMPLOYEES_PATH, get(list_employees).post(create_employee))
        .route(
            "/employees/{id}",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}

fn found_or_404<T: IntoResponse>(value: Option<T>) -> Response {
    match value {
        Some(value) => value.into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// List all employees.
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "All employees", body = [Employee]),
        (status = 500, description = "Store failure", body = ErrorResponse),
    ),
    tag = EMPLOYEE_TAG
)]
pub async fn list_employees(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.services.employees.list_employees().await?;
    Ok(Json(employees))
}

/// Get employee by ID.
#[utoipa::path(
    get,
    path = "/employees/{id}",
    params(("id" = i32, Path, description = "Employee id, a positive integer")),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "No employee with this id"),
    ),
    tag = EMPLOYEE_TAG
)]
pub async fn get_employee(
    State(state): State<AppState>,
    EmployeeId(id): EmployeeId,
) -> AppResult<Response> {
    let employee = state.services.employees.get_employee(id).await?;
    Ok(found_or_404(employee.map(Json)))
}

/// Create a new employee.
///
/// Returns 201 with a `Location` header pointing at the new resource.
#[utoipa::path(
    post,
    path = "/employees",
    request_body = EmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = Employee,
            headers(("location" = String, description = "Path of the new employee"))),
        (status = 400, description = "Blank, missing or too long name", body = ErrorResponse),
    ),
    tag = EMPLOYEE_TAG
)]
pub async fn create_employee(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<EmployeeRequest>,
) -> AppResult<impl IntoResponse> {
    let employee = state
        .services
        .employees
        .create_employee(payload.name)
        .await?;
    let location = format!("{}/{}", EMPLOYEES_PATH, employee.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(employee),
    ))
}

/// Replace the name of an existing employee.
#[utoipa::path(
    put,
    path = "/employees/{id}",
    params(("id" = i32, Path, description = "Employee id, a positive integer")),
    request_body = EmployeeRequest,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Malformed id or invalid name", body = ErrorResponse),
        (status = 404, description = "No employee with this id"),
    ),
    tag = EMPLOYEE_TAG
)]
pub async fn update_employee(
    State(state): State<AppState>,
    EmployeeId(id): EmployeeId,
    ValidatedJson(payload): ValidatedJson<EmployeeRequest>,
) -> AppResult<Response> {
    let employee = state
        .services
        .employees
        .update_employee(id, payload.name)
        .await?;
    Ok(found_or_404(employee.map(Json)))
}

/// Delete employee by ID.
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    params(("id" = i32, Path, description = "Employee id, a positive integer")),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "No employee with this id"),
    ),
    tag = EMPLOYEE_TAG
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    EmployeeId(id): EmployeeId,
) -> AppResult<StatusCode> {
    let deleted = state.services.employees.delete_employee(id).await?;
    Ok(if deleted {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    })
}
