//! HTTP error response mapping — RFC 7807 problem details.

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use casa_domain::error::DomainError;

/// Problem-detail body returned for classified domain errors.
#[derive(Serialize)]
struct ProblemDetail {
    error_type: &'static str,
    title: &'static str,
    status: u16,
    detail: String,
}

/// Maps [`DomainError`] to an HTTP response with appropriate status code.
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (error_type, title, detail) = match self.0 {
            err @ DomainError::NotNullViolation => {
                ("NULL_NOT_ALLOWED", "Null is not allowed", err.to_string())
            }
            err @ DomainError::DuplicateData => (
                "NOT_UNIQUE",
                "Non unique value not allowed",
                err.to_string(),
            ),
            DomainError::IllegalData(detail) => ("ILLEGAL_VALUE", "Value not allowed", detail),
            DomainError::Unclassified(err) => {
                // Infrastructure detail stays in the log, never the body.
                tracing::error!(error = %err, "storage failure");
                return (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
                    .into_response();
            }
        };

        let body = ProblemDetail {
            error_type,
            title,
            status: StatusCode::BAD_REQUEST.as_u16(),
            detail,
        };
        (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/problem+json")],
            Json(body),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_validation_errors_to_bad_request() {
        for err in [
            DomainError::NotNullViolation,
            DomainError::DuplicateData,
            DomainError::IllegalData("nope".to_string()),
        ] {
            let response = ApiError::from(err).into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                response
                    .headers()
                    .get(header::CONTENT_TYPE)
                    .unwrap()
                    .to_str()
                    .unwrap(),
                "application/problem+json"
            );
        }
    }

    #[test]
    fn should_map_unclassified_to_internal_server_error() {
        let err = DomainError::unclassified(std::io::Error::other("pool exhausted"));
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
