//! # Showcase Errors
//!
//! Two layers, mirroring the split between startup and per-command failures:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Showcase                           │
//! │                                                                         │
//! │  startup                         command loop                           │
//! │  ───────                         ────────────                           │
//! │  read showcase.toml              "hours 99"                             │
//! │        │                               │                                │
//! │        ▼                               ▼                                │
//! │  ShowcaseError::TomlDe           ValidationError::OutOfRange            │
//! │        │                               │                                │
//! │        ▼                               ▼                                │
//! │  process exits / defaults        ApiError { code, message }             │
//! │                                        │                                │
//! │                                        ▼                                │
//! │                       {"ok":false,"error":{"code":"VALIDATION_ERROR",..}}│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use paper_core::{CoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// Errors that stop the showcase from starting or running.
#[derive(Debug, Error)]
pub enum ShowcaseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ShowcaseResult<T> = Result<T, ShowcaseError>;

/// Error returned for a single failed command.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "hours must be between 0 and 23"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable message
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown verb or malformed arguments
    InvalidCommand,

    /// Arguments parsed but were rejected
    ValidationError,

    /// Failure inside the host
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_command(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidCommand, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownKey(_) => ApiError::invalid_command(err.to_string()),
            CoreError::UnknownLocale(_) => ApiError::validation(err.to_string()),
            CoreError::InvalidMonth(_) | CoreError::DateOutOfRange { .. } => {
                tracing::error!("Calendar computation failed: {}", err);
                ApiError::internal(err.to_string())
            }
            CoreError::Validation(e) => ApiError::from(e),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_serialization() {
        let err = ApiError::invalid_command("nope");
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"code":"INVALID_COMMAND","message":"nope"}"#);
    }

    #[test]
    fn test_core_error_mapping() {
        let err = ApiError::from(CoreError::UnknownKey("Tab".to_string()));
        assert_eq!(err.code, ErrorCode::InvalidCommand);

        let err = ApiError::from(CoreError::Validation(ValidationError::OutOfRange {
            field: "hours".to_string(),
            min: 0,
            max: 23,
        }));
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_error_codes_serialize_as_screaming_snake_case() {
        let codes = [
            (ErrorCode::InvalidCommand, "\"INVALID_COMMAND\""),
            (ErrorCode::ValidationError, "\"VALIDATION_ERROR\""),
            (ErrorCode::Internal, "\"INTERNAL\""),
        ];
        for (code, expected) in codes {
            assert_eq!(serde_json::to_string(&code).unwrap(), expected);
        }
    }

    #[test]
    fn test_calendar_failures_map_to_internal() {
        let err = ApiError::from(CoreError::InvalidMonth(12));
        assert_eq!(err.code, ErrorCode::Internal);
    }
}
