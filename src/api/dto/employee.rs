//! Employee DTOs for API requests.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::utils::validate::not_blank;

/// Body of create and update requests.
///
/// Carries only the mutable fields; the id always comes from the store or
/// the path.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EmployeeRequest {
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "name must be at most 100 characters")
    )]
    #[schema(example = "wojtek", min_length = 1, max_length = 100)]
    pub name: String,
}
