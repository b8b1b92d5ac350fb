use std::borrow::Cow;

use crate::error::{AppError, AppResult};
use axum::extract::{FromRequest, FromRequestParts, Json, Path, Request, rejection::JsonRejection};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError};

/// JSON body that has passed `Validate`.
///
/// Undecodable bodies become `AppError::BadRequest`, failed rules become
/// `AppError::ValidationErrors`; both render as 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// Positive integer id taken from the single path parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeId(pub i32);

impl<S> FromRequestParts<S> for EmployeeId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> AppResult<Self> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
        parse_employee_id(&raw).map(EmployeeId)
    }
}

fn parse_employee_id(raw: &str) -> AppResult<i32> {
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::bad_request(format!(
            "Invalid employee id '{}': expected a positive integer",
            raw
        ))),
    }
}

/// Rejects empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(
            ValidationError::new("blank").with_message(Cow::Borrowed("name must not be blank"))
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, header};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct TestBody {
        #[validate(custom(function = "not_blank"), length(max = 5, message = "too long"))]
        name: String,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body() {
        let ValidatedJson(body) = ValidatedJson::<TestBody>::from_request(json_request(r#"{"name":"ok"}"#), &())
            .await
            .unwrap();
        assert_eq!(body.name, "ok");
    }

    #[tokio::test]
    async fn test_blank_name_is_validation_error() {
        let result = ValidatedJson::<TestBody>::from_request(json_request(r#"{"name":"   "}"#), &()).await;
        match result {
            Err(AppError::ValidationErrors { errors }) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "name");
                assert_eq!(errors[0].message, "name must not be blank");
            }
            other => panic!("Expected ValidationErrors error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_too_long_name_is_validation_error() {
        let result = ValidatedJson::<TestBody>::from_request(json_request(r#"{"name":"abcdef"}"#), &()).await;
        match result {
            Err(AppError::ValidationErrors { errors }) => assert_eq!(errors[0].message, "too long"),
            other => panic!("Expected ValidationErrors error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        let result = ValidatedJson::<TestBody>::from_request(json_request("{}"), &()).await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn test_wrong_content_type_is_bad_request() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from(r#"{"name":"ok"}"#))
            .unwrap();
        let result = ValidatedJson::<TestBody>::from_request(request, &()).await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[test]
    fn test_parse_employee_id() {
        assert_eq!(parse_employee_id("12").unwrap(), 12);
        for raw in ["0", "-3", "abc", "1.5", "99999999999"] {
            assert!(
                matches!(parse_employee_id(raw), Err(AppError::BadRequest { .. })),
                "{} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("a").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank("\t\n").is_err());
    }
}
