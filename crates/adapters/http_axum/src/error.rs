//! HTTP error response mapping.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use hivemind_domain::error::HivemindError;

/// Maps [`HivemindError`] to an HTTP response.
///
/// Failures are reported through the status code only — the legacy API has
/// no structured error body.
pub struct ApiError(HivemindError);

impl From<HivemindError> for ApiError {
    fn from(err: HivemindError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            HivemindError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, "application/json")],
                )
                    .into_response()
            }
        }
    }
}
