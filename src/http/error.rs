//! API error taxonomy and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::http::envelope::Envelope;
use crate::upstream::UpstreamError;

/// Errors a route handler can surface. Always rendered as an [`Envelope`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// Unknown VPN action in the path. The upstream is never contacted.
    #[error("Invalid action. Use start or stop.")]
    InvalidAction(String),

    /// Known API path, wrong method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The upstream call failed. The proxy itself is healthy.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidAction(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        Envelope::failure(self.to_string()).into_response_with(status)
    }
}
