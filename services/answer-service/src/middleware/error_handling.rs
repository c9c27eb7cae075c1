use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use docqa_utils::{DocQaError, ErrorResponse};
use tracing::error;

/// Handler error rendered as a JSON `ErrorResponse` with the matching status.
#[derive(Debug)]
pub struct ApiError(pub DocQaError);

impl From<DocQaError> for ApiError {
    fn from(error: DocQaError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        error!(error = %self.0, code = self.0.error_code(), "request failed");

        (status, Json(ErrorResponse::from(self.0))).into_response()
    }
}
