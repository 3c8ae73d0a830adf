//! HTTP error type for the dashboard handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bikeshare_common::DashboardError;
use thiserror::Error;

/// Errors a request can end in.
#[derive(Error, Debug)]
pub enum AppError {
    /// A query parameter could not be parsed.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No such chart or page.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Drawing or encoding a chart failed.
    #[error("Render error: {0}")]
    Render(#[from] DashboardError),
}

impl AppError {
    /// Status code this error maps to.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest(message) | Self::NotFound(message) => {
                tracing::warn!(%status, %message, "Rejected request");
                message
            }
            Self::Render(err) => {
                tracing::error!(error = ?err, "Chart rendering failed");
                "An error occurred while rendering the chart".to_string()
            }
        };

        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::from(DashboardError::graph("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_render_error_hides_details() {
        let response = AppError::from(DashboardError::graph("font missing")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
