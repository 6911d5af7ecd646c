//! Business errors returned by the shortening service.
//!
//! Every failure carries exactly one [`ErrorKind`], a human-readable message
//! and structured details. Failures are always returned, never raised.

use serde::Serialize;
use serde_json::{Value, json};

/// Closed set of failure categories a caller can match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    DuplicateShortCode,
    InvalidUrl,
    InvalidShortCode,
    GenerationFailed,
}

impl ErrorKind {
    /// Stable machine-readable identifier of the kind.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::DuplicateShortCode => "duplicate_short_code",
            ErrorKind::InvalidUrl => "invalid_url",
            ErrorKind::InvalidShortCode => "invalid_short_code",
            ErrorKind::GenerationFailed => "generation_failed",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: ErrorInfo<'a>,
}

#[derive(Serialize)]
struct ErrorInfo<'a> {
    code: &'static str,
    message: &'a str,
    details: &'a Value,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ServiceError {
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    DuplicateShortCode { message: String, details: Value },
    #[error("{message}")]
    InvalidUrl { message: String, details: Value },
    #[error("{message}")]
    InvalidShortCode { message: String, details: Value },
    #[error("{message}")]
    GenerationFailed { message: String, details: Value },
}

impl ServiceError {
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn duplicate_short_code(message: impl Into<String>, details: Value) -> Self {
        Self::DuplicateShortCode {
            message: message.into(),
            details,
        }
    }
    pub fn invalid_url(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidUrl {
            message: message.into(),
            details,
        }
    }
    pub fn invalid_short_code(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidShortCode {
            message: message.into(),
            details,
        }
    }
    pub fn generation_failed(message: impl Into<String>, details: Value) -> Self {
        Self::GenerationFailed {
            message: message.into(),
            details,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::NotFound { .. } => ErrorKind::NotFound,
            ServiceError::DuplicateShortCode { .. } => ErrorKind::DuplicateShortCode,
            ServiceError::InvalidUrl { .. } => ErrorKind::InvalidUrl,
            ServiceError::InvalidShortCode { .. } => ErrorKind::InvalidShortCode,
            ServiceError::GenerationFailed { .. } => ErrorKind::GenerationFailed,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ServiceError::NotFound { message, .. }
            | ServiceError::DuplicateShortCode { message, .. }
            | ServiceError::InvalidUrl { message, .. }
            | ServiceError::InvalidShortCode { message, .. }
            | ServiceError::GenerationFailed { message, .. } => message,
        }
    }

    pub fn details(&self) -> &Value {
        match self {
            ServiceError::NotFound { details, .. }
            | ServiceError::DuplicateShortCode { details, .. }
            | ServiceError::InvalidUrl { details, .. }
            | ServiceError::InvalidShortCode { details, .. }
            | ServiceError::GenerationFailed { details, .. } => details,
        }
    }

    /// Renders the error as `{"error": {"code", "message", "details"}}`.
    pub fn to_json(&self) -> Value {
        let body = ErrorBody {
            error: ErrorInfo {
                code: self.kind().code(),
                message: self.message(),
                details: self.details(),
            },
        };

        serde_json::to_value(body).unwrap_or_else(|_| json!({}))
    }
}
