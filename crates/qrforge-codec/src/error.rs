use thiserror::Error;

use crate::codec::ParseError;

/// Codec parsing and validation errors
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl CodecError {
    pub(crate) fn invalid(field: &str, reason: impl std::fmt::Display) -> Self {
        Self::ValidationError(format!("{field}: {reason}"))
    }
}

pub type CodecResult<T> = std::result::Result<T, CodecError>;
