use salvo::{Depot, Request};

use crate::config::get_config_from_depot;
use crate::error::{AppError, AppResult};

/// ## Summary
/// Reads the request body as UTF-8 text within the configured size limit.
///
/// ## Errors
/// Returns `PayloadTooLarge` above `limits.max_payload_bytes`, and
/// `BadRequest` if the body cannot be read or is not UTF-8.
pub(super) async fn read_text_body(req: &mut Request, depot: &Depot) -> AppResult<String> {
    let max = get_config_from_depot(depot)?.limits.max_payload_bytes;

    let bytes = req
        .payload()
        .await
        .map_err(|e| AppError::BadRequest(format!("unreadable body: {e}")))?;

    if bytes.len() > max {
        return Err(AppError::PayloadTooLarge {
            size: bytes.len(),
            max,
        });
    }

    tracing::debug!(bytes = bytes.len(), "Request body read successfully");

    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|e| AppError::BadRequest(format!("body is not UTF-8: {e}")))
}
