/// Error handling for the GraphQL API
///
/// This module provides the error type every resolver returns. `ApiError`
/// implements juniper's `IntoFieldError`, so resolvers can return
/// `ApiResult<T>` and failures end up in the `errors` array of the response
/// with an HTTP-style status in `extensions`.
///
/// # Response shape
///
/// ```json
/// {
///   "data": null,
///   "errors": [{
///     "message": "User with id of 7 not found",
///     "locations": [{ "line": 1, "column": 12 }],
///     "path": ["deleteUser"],
///     "extensions": { "code": "NOT_FOUND", "status": 404 }
///   }]
/// }
/// ```

use juniper::{FieldError, IntoFieldError, Object, Value};
use staffql_shared::validation::{FieldViolation, ValidationError};
use thiserror::Error;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Message returned to clients in place of internal error details
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// Unified API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Requested record does not exist (404)
    #[error("{0}")]
    NotFound(String),

    /// Input failed validation (422)
    #[error("{0}")]
    InvalidInput(ValidationError),

    /// Storage or other unexpected failure (500)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Not-found error for a user id
    pub fn user_not_found(id: i32) -> Self {
        ApiError::NotFound(format!("User with id of {} not found", id))
    }

    /// Machine-readable code placed in `extensions.code`
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::InvalidInput(_) => "BAD_USER_INPUT",
            ApiError::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// HTTP-style status placed in `extensions.status`
    pub fn status(&self) -> u16 {
        match self {
            ApiError::NotFound(_) => 404,
            ApiError::InvalidInput(_) => 422,
            ApiError::Internal(_) => 500,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::InvalidInput(err)
    }
}

/// Convert sqlx errors to API errors
///
/// Lookups use `fetch_optional`, so absence never arrives here as an error.
/// Everything sqlx reports is a storage failure.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Internal(format!("Database error: {}", err))
    }
}

fn violation_value(violation: &FieldViolation) -> Value {
    let mut detail = Object::with_capacity(2);
    detail.add_field("field", Value::scalar(violation.field.clone()));
    detail.add_field("message", Value::scalar(violation.message.clone()));
    Value::object(detail)
}

impl IntoFieldError for ApiError {
    fn into_field_error(self) -> FieldError {
        let code = self.code();
        let status = i32::from(self.status());

        let mut extensions = Object::with_capacity(3);
        extensions.add_field("code", Value::scalar(code.to_string()));
        extensions.add_field("status", Value::scalar(status));

        let message = match self {
            ApiError::NotFound(msg) => msg,
            ApiError::InvalidInput(err) => {
                let details = err.violations.iter().map(violation_value).collect();
                extensions.add_field("details", Value::list(details));
                err.to_string()
            }
            ApiError::Internal(msg) => {
                // Log internal errors but don't expose details to clients
                tracing::error!("Internal error: {}", msg);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };

        FieldError::new(message, Value::object(extensions))
    }
}
