use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::verify::VerifyError;

use super::VERACITY_STATUS_HEADER;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("comparison failed: {0}")]
    ComparisonFailed(String),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl GatewayError {
    /// Maps pipeline errors onto gateway errors; input errors stay 400s.
    pub fn from_verify(err: VerifyError, operation: &str) -> Self {
        match err {
            VerifyError::EmptyQuery | VerifyError::TooFewUrls { .. } => {
                Self::InvalidRequest(err.to_string())
            }
            VerifyError::FetchFailed { .. } | VerifyError::NoArticles => match operation {
                "compare" => Self::ComparisonFailed(err.to_string()),
                _ => Self::AnalysisFailed(err.to_string()),
            },
        }
    }
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, error_message, veracity_status) = match &self {
            GatewayError::InvalidRequest(_) => {
                (StatusCode::BAD_REQUEST, self.to_string(), "invalid_request")
            }
            GatewayError::NotFound(_) => {
                (StatusCode::NOT_FOUND, self.to_string(), "not_found")
            }
            GatewayError::AnalysisFailed(_) => (
                StatusCode::BAD_GATEWAY,
                self.to_string(),
                "analysis_error",
            ),
            GatewayError::ComparisonFailed(_) => (
                StatusCode::BAD_GATEWAY,
                self.to_string(),
                "comparison_error",
            ),
            GatewayError::RepositoryError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                self.to_string(),
                "repository_error",
            ),
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            VERACITY_STATUS_HEADER,
            HeaderValue::from_str(veracity_status).unwrap_or(HeaderValue::from_static("error")),
        );

        let body = Json(ErrorResponse {
            error: error_message,
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
