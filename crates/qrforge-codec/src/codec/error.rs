//! Payload parse error types.

use std::fmt;

/// Result type for payload parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error that occurred while parsing a QR payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Additional context or message.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates a missing prefix error.
    #[must_use]
    pub fn missing_prefix(expected: &str) -> Self {
        Self::new(
            ParseErrorKind::MissingPrefix,
            format!("expected payload to start with {expected}"),
        )
    }

    /// Creates a missing mandatory field error.
    #[must_use]
    pub fn missing_field(name: &str) -> Self {
        Self::new(
            ParseErrorKind::MissingField,
            format!("missing required field: {name}"),
        )
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::InvalidValue, message)
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub fn invalid_datetime(value: &str) -> Self {
        Self::new(
            ParseErrorKind::InvalidDateTime,
            format!("cannot interpret {value:?} as a date or date-time"),
        )
    }

    /// Creates an unexpected end of input error.
    #[must_use]
    pub fn unexpected_eof(expected: &str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedEof,
            format!("input ended before {expected}"),
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ParseError {}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The scheme or header identifying the format is absent.
    MissingPrefix,
    /// A mandatory field is absent or empty.
    MissingField,
    /// A field value is malformed or out of range.
    InvalidValue,
    /// A date or date-time value is malformed.
    InvalidDateTime,
    /// Unexpected end of input.
    UnexpectedEof,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPrefix => write!(f, "missing prefix"),
            Self::MissingField => write!(f, "missing field"),
            Self::InvalidValue => write!(f, "invalid value"),
            Self::InvalidDateTime => write!(f, "invalid date/time"),
            Self::UnexpectedEof => write!(f, "unexpected end of input"),
        }
    }
}
