//! Error types for the documentation plugin.
//!
//! Defines a unified error type that maps cleanly to HTTP responses.

use std::path::PathBuf;

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Unified error type for documentation plugin operations.
#[derive(Debug, Error)]
pub enum DocsError {
    #[error("Route {method}:{path} not found")]
    NotFound { method: Method, path: String },

    #[error("Asset bundle not found at {}", .0.display())]
    MissingAssetBundle(PathBuf),

    #[error("Asset bundle is missing required file {}", .0.display())]
    MissingAsset(PathBuf),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl DocsError {
    pub fn not_found(method: &Method, path: impl Into<String>) -> Self {
        DocsError::NotFound {
            method: method.clone(),
            path: path.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            DocsError::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body, shaped the way HTTP clients of the docs UI expect.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub error: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: status
                .canonical_reason()
                .unwrap_or("Unknown Error")
                .to_string(),
            status_code: status.as_u16(),
        }
    }
}

impl IntoResponse for DocsError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            DocsError::NotFound { .. } => self.to_string(),
            other => {
                // Log the actual error but don't expose internals
                tracing::error!(error = %other, "Documentation request failed");
                "An internal error occurred".to_string()
            }
        };

        (status, Json(ErrorResponse::new(status, message))).into_response()
    }
}

/// Result type alias for documentation plugin operations.
pub type DocsResult<T> = Result<T, DocsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_payload() {
        let err = DocsError::not_found(&Method::GET, "/documentation/static/stuff.css");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let body = ErrorResponse::new(err.status(), err.to_string());
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["error"], "Not Found");
        assert_eq!(value["statusCode"], 404);
        assert_eq!(
            value["message"],
            "Route GET:/documentation/static/stuff.css not found"
        );
    }

    #[test]
    fn test_internal_errors_map_to_500() {
        let err = DocsError::InvalidConfig("bad prefix".to_string());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = ErrorResponse::new(err.status(), "x");
        assert_eq!(body.error, "Internal Server Error");
        assert_eq!(body.status_code, 500);
    }
}
