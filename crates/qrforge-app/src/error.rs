use salvo::http::StatusCode;
use thiserror::Error;

use qrforge_core::error::CoreError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    CodecError(#[from] qrforge_codec::CodecError),

    #[error(transparent)]
    CoreError(#[from] CoreError),

    #[error("Cannot encode as QR code: {0}")]
    QrError(#[from] qrcode::types::QrError),

    #[error("Image encoding failed: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Malformed JSON body: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Payload of {size} bytes exceeds the {max} byte limit")]
    PayloadTooLarge { size: usize, max: usize },
}

impl AppError {
    /// ## Summary
    /// HTTP status reported for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::CodecError(_) | Self::QrError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::CoreError(CoreError::InvalidInput(_)) | Self::JsonError(_) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::CoreError(_) | Self::ImageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
