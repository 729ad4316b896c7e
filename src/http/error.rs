//! HTTP error mapping for [`AppError`].

use crate::errors::AppError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::UserNotFound(_) | AppError::UnknownChart(_) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND")
            }
            AppError::InvalidUserId(_) | AppError::ChartShape(_) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST")
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        (status, Json(ApiError::new(code, self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_faults_map_to_500() {
        let resp = AppError::Other("computed report does not fit its chart".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn lookup_and_input_errors_map_to_4xx() {
        assert_eq!(AppError::UserNotFound(7).into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::InvalidUserId("abc".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
