use salvo::prelude::Text;
use salvo::{Depot, Request, Response, handler};

use qrforge_codec::QrContent;

use super::body::read_text_body;
use super::response::write_error;
use crate::error::AppResult;

/// ## Summary
/// Formats a `QrContent` JSON object as canonical QR text.
///
/// ## Errors
/// Returns 400 for malformed JSON, 413 above the payload limit, and 422 if
/// the value fails validation.
#[handler]
#[tracing::instrument(skip_all)]
pub async fn encode(req: &mut Request, depot: &Depot, res: &mut Response) {
    match encode_body(req, depot).await {
        Ok(text) => res.render(Text::Plain(text)),
        Err(e) => write_error(res, &e),
    }
}

async fn encode_body(req: &mut Request, depot: &Depot) -> AppResult<String> {
    let body = read_text_body(req, depot).await?;
    let content: QrContent = serde_json::from_str(&body)?;
    content.validate()?;

    tracing::debug!(content_type = %content.content_type(), "Encoding content");
    Ok(content.encode())
}
