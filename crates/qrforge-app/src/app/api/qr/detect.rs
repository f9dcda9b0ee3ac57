use salvo::prelude::Json;
use salvo::{Depot, Request, Response, handler};
use serde::Serialize;

use qrforge_codec::{ContentType, detect as detect_content};

use super::body::read_text_body;
use super::response::write_error;

#[derive(Debug, Serialize)]
struct DetectResponse {
    content_type: ContentType,
}

/// ## Summary
/// Classifies raw QR text by its prefix.
///
/// ## Errors
/// Returns 400 for unreadable bodies and 413 above the payload limit.
#[handler]
#[tracing::instrument(skip_all)]
pub async fn detect(req: &mut Request, depot: &Depot, res: &mut Response) {
    match read_text_body(req, depot).await {
        Ok(text) => {
            let content_type = detect_content(&text);
            tracing::debug!(%content_type, "Detected content type");
            res.render(Json(DetectResponse { content_type }));
        }
        Err(e) => write_error(res, &e),
    }
}
