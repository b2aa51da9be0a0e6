//! Client error types

use category_tree::SourceError;
use http::StatusCode;
use shared::error::ErrorCode;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Error body returned by the server
    #[error("{message}")]
    Api {
        code: i32,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Known error code carried by this error, if any
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Api { code, .. } => u16::try_from(*code)
                .ok()
                .and_then(|c| ErrorCode::try_from(c).ok()),
            Self::Unauthorized => Some(ErrorCode::from_http_status(StatusCode::UNAUTHORIZED)),
            Self::Forbidden(_) => Some(ErrorCode::from_http_status(StatusCode::FORBIDDEN)),
            Self::NotFound(_) => Some(ErrorCode::from_http_status(StatusCode::NOT_FOUND)),
            Self::Validation(_) => Some(ErrorCode::from_http_status(StatusCode::BAD_REQUEST)),
            Self::Http(e) if e.is_timeout() => Some(ErrorCode::TimeoutError),
            Self::Http(e) if e.is_connect() => Some(ErrorCode::NetworkError),
            Self::Internal(_) => Some(ErrorCode::InternalError),
            Self::Http(_) | Self::InvalidResponse(_) | Self::Serialization(_) => None,
        }
    }
}

impl From<ClientError> for SourceError {
    fn from(err: ClientError) -> Self {
        SourceError {
            code: err.error_code(),
            message: err.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
