//! Error types for the name engine.
//!
//! Every stage (title validation, token assembly, strategies, dispatcher,
//! result validation) fails with a [`ParseError`]. Each variant carries
//! enough context to format a user-facing message on its own.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ParseError>;

/// Stable numeric code for each failure kind.
///
/// Collaborators that log or persist failures use these codes instead of
/// matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    EmptyInput = 1,
    InvalidTitle = 2,
    MissingLastName = 3,
    InvalidFormat = 4,
    ValidationError = 5,
}

impl ErrorCode {
    /// Numeric value of the code.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Failure raised while turning a raw name string into person records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Trimmed input string is empty
    #[error("Empty name string provided")]
    EmptyInput,

    /// The title token does not normalize to a canonical title
    #[error("Invalid title detected: {title}")]
    InvalidTitle { title: String },

    /// Token stream ran out before a last name could be assigned
    #[error("Unable to determine last name for: {input}")]
    MissingLastName { input: String },

    /// No strategy could handle the input, or the connector split produced
    /// an unsupported shape
    #[error("Invalid name format: {input}")]
    InvalidFormat { input: String },

    /// A would-be result failed the structural schema check
    #[error("Validation error: {detail}")]
    ValidationError { detail: String },
}

impl ParseError {
    /// Create an invalid title error
    pub fn invalid_title(title: impl Into<String>) -> Self {
        Self::InvalidTitle {
            title: title.into(),
        }
    }

    /// Create a missing last name error
    pub fn missing_last_name(input: impl Into<String>) -> Self {
        Self::MissingLastName {
            input: input.into(),
        }
    }

    /// Create an invalid format error
    pub fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
        }
    }

    /// Create a validation error
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::ValidationError {
            detail: detail.into(),
        }
    }

    /// Stable code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyInput => ErrorCode::EmptyInput,
            Self::InvalidTitle { .. } => ErrorCode::InvalidTitle,
            Self::MissingLastName { .. } => ErrorCode::MissingLastName,
            Self::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            Self::ValidationError { .. } => ErrorCode::ValidationError,
        }
    }

    /// Whether the dispatcher may fall through to the next strategy.
    ///
    /// A structurally invalid result is never retried: it points at a broken
    /// strategy, not at an input that another strategy might understand.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::ValidationError { .. })
    }
}
