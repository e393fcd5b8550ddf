use crate::utils::error::{ErrorCategory, TitlesError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

impl TitlesError {
    pub fn status_code(&self) -> StatusCode {
        match self.category() {
            ErrorCategory::Request => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Server-side failures carry no body; causes are only visible in the logs.
impl IntoResponse for TitlesError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(
                "❌ Request failed: {} (Category: {:?})",
                self,
                self.category()
            );
            status.into_response()
        } else {
            tracing::warn!("Request rejected: {}", self);
            (status, self.to_string()).into_response()
        }
    }
}
