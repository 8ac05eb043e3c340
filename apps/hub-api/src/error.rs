//! Mapping of domain failures onto HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use peoplehub_domain::validation::{Constraint, ValidationErrors};
use peoplehub_domain::DomainError;
use serde_json::json;
use tracing::{error, warn};

/// Error returned by every handler
///
/// Validation, not-found and conflict failures are exposed to the caller.
/// Persistence and upstream failures are logged and answered with a generic
/// 500 body.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl ApiError {
    /// A path or query parameter that is not a UUID v4
    pub fn invalid_id(field: &str) -> Self {
        Self(DomainError::Validation(ValidationErrors::single(
            field,
            Constraint::IsUuid,
        )))
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self(DomainError::Validation(errors))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            DomainError::Validation(errors) => {
                warn!(violations = %errors, "Request rejected by validation");
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"error": "Validation failed", "violations": errors})),
                )
                    .into_response()
            }
            err @ DomainError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, Json(json!({"error": err.to_string()}))).into_response()
            }
            DomainError::Conflict(message) => {
                (StatusCode::CONFLICT, Json(json!({"error": message}))).into_response()
            }
            DomainError::Unavailable(message) => {
                warn!(reason = %message, "Dependency unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({"error": message})),
                )
                    .into_response()
            }
            err @ (DomainError::Persistence(_) | DomainError::Upstream(_)) => {
                error!(error = ?err, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "Internal server error"})),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use serde_json::Value;

    use super::*;

    async fn render(err: DomainError) -> (StatusCode, Value) {
        let response = ApiError(err).into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_validation_lists_violations() {
        let (status, body) = render(DomainError::Validation(ValidationErrors::single(
            "hireDate",
            Constraint::IsDate,
        )))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["violations"][0]["field"], "hireDate");
        assert_eq!(body["violations"][0]["constraint"], "isDate");
    }

    #[tokio::test]
    async fn test_client_errors_keep_their_message() {
        let (status, body) = render(DomainError::not_found("employees", "42")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "employees 42 not found");

        let (status, _) = render(DomainError::conflict("already archived")).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = render(DomainError::unavailable("no AI backend")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_server_errors_are_generic() {
        let (status, body) = render(DomainError::Persistence("disk on fire".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Internal server error"}));
    }
}
