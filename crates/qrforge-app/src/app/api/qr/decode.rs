use salvo::prelude::Json;
use salvo::{Depot, Request, Response, handler};

use qrforge_codec::QrContent;

use super::body::read_text_body;
use super::response::write_error;

/// ## Summary
/// Decodes raw QR text into a tagged `QrContent` JSON object.
///
/// Text no codec accepts is returned as `{"type":"text"}` rather than
/// rejected.
///
/// ## Errors
/// Returns 400 for unreadable bodies and 413 above the payload limit.
#[handler]
#[tracing::instrument(skip_all)]
pub async fn decode(req: &mut Request, depot: &Depot, res: &mut Response) {
    match read_text_body(req, depot).await {
        Ok(text) => res.render(Json(QrContent::decode(&text))),
        Err(e) => write_error(res, &e),
    }
}
