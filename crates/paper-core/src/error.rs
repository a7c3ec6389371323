//! # Error Types
//!
//! Domain-specific error types for paper-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  paper-core errors (this file)                                         │
//! │  ├── CoreError        - Calendar / locale / key errors                 │
//! │  └── ValidationError  - Out-of-range widget input                      │
//! │                                                                         │
//! │  showcase errors (app crate)                                           │
//! │  ├── ShowcaseError    - Config and I/O failures                        │
//! │  └── ApiError         - What the command surface reports (serialized)  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Terminal               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Selecting a disabled day or pressing a key while the picker is closed
//! is NOT an error. Those transitions are reported as
//! [`Transition::Ignored`](crate::picker::Transition::Ignored).

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core widget logic errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Month index outside `0..=11`.
    #[error("Invalid month index: {0} (expected 0-11)")]
    InvalidMonth(u32),

    /// Month lies outside the range chrono can represent.
    #[error("Month {month} of year {year} is out of the supported date range")]
    DateOutOfRange { year: i32, month: u32 },

    /// Locale tag is not one of the supported calendar locales.
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// Key name the picker does not understand.
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., unparsable date, unknown time format).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
