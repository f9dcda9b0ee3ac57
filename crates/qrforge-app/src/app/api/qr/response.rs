//! JSON error bodies for failed QR requests.

use salvo::Response;
use salvo::prelude::Json;
use serde_json::json;

use crate::error::AppError;

/// Sets the status for `error` and writes `{"error": "<message>"}`.
pub(super) fn write_error(res: &mut Response, error: &AppError) {
    let status = error.status_code();
    if status.is_server_error() {
        tracing::error!(error = %error, "QR request failed");
    } else {
        tracing::debug!(error = %error, %status, "QR request rejected");
    }

    res.status_code(status);
    res.render(Json(json!({ "error": error.to_string() })));
}
