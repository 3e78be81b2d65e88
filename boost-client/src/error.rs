//! Client error types

use reqwest::StatusCode;
use shared::ProblemDetails;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a problem-details body
    #[error("API error ({status}): {message}")]
    Api {
        status: StatusCode,
        message: String,
        problem: Box<ProblemDetails>,
    },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

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

    /// Conflicting write
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Map a non-success response to an error.
    ///
    /// A problem-details body wins over the plain status mapping.
    pub fn from_status(status: StatusCode, text: String) -> Self {
        if let Ok(problem) = serde_json::from_str::<ProblemDetails>(&text)
            && problem.is_meaningful()
        {
            return Self::Api {
                status,
                message: problem.summary(),
                problem: Box::new(problem),
            };
        }

        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::FORBIDDEN => Self::Forbidden(text),
            StatusCode::NOT_FOUND => Self::NotFound(text),
            StatusCode::BAD_REQUEST => Self::Validation(text),
            StatusCode::CONFLICT => Self::Conflict(text),
            _ => Self::Internal(format!("{}: {}", status, text)),
        }
    }

    /// HTTP status behind this error, when there is one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http(e) => e.status(),
            Self::Api { status, .. } => Some(*status),
            Self::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            Self::Forbidden(_) => Some(StatusCode::FORBIDDEN),
            Self::NotFound(_) => Some(StatusCode::NOT_FOUND),
            Self::Validation(_) => Some(StatusCode::BAD_REQUEST),
            Self::Conflict(_) => Some(StatusCode::CONFLICT),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
