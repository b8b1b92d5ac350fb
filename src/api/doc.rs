use utoipa::OpenApi;

pub const EMPLOYEE_TAG: &str = "Employees";
pub const HEALTH_TAG: &str = "Health";

/// Served as JSON at [`OPENAPI_PATH`].
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employees",
        description = "CRUD API for the employee resource",
    ),
    paths(
        crate::api::handlers::employees::list_employees,
        crate::api::handlers::employees::get_employee,
        crate::api::handlers::employees::create_employee,
        crate::api::handlers::employees::update_employee,
        crate::api::handlers::employees::delete_employee,
        crate::api::handlers::health::health_check,
        crate::api::handlers::health::readiness_check,
        crate::api::handlers::health::liveness_check,
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
            crate::error::ValidationFieldError,
        )
    ),
    tags(
        (name = EMPLOYEE_TAG, description = "Employee management endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
