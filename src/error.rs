//! Error types for the query router.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::classifier::Category;

/// Top-level error type for the service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Failures raised by a model collaborator.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Provider {provider} request failed: {reason}")]
    RequestFailed { provider: String, reason: String },

    #[error("Provider {provider} returned {status}: {message}")]
    Api {
        provider: String,
        status: u16,
        message: String,
    },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },

    #[error("Provider {provider} returned no output")]
    EmptyOutput { provider: String },
}

/// Outcome of a rejected or failed `/chat` or `/summary` request.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Query cannot be empty")]
    EmptyQuery,

    #[error("Invalid category. Must be one of: {}", Category::valid_values())]
    InvalidCategory,

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl DispatchError {
    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::EmptyQuery | Self::InvalidCategory => StatusCode::BAD_REQUEST,
            Self::Model(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the caller is at fault.
    pub fn is_client_error(&self) -> bool {
        self.status().is_client_error()
    }

    /// The `detail` string sent back to the caller.
    pub fn detail(&self) -> String {
        if self.is_client_error() {
            self.to_string()
        } else {
            format!("An error occurred: {}", self)
        }
    }
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(serde_json::json!({ "detail": self.detail() })),
        )
            .into_response()
    }
}

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, Error>;
