//! QR payload endpoints.
//!
//! Every endpoint takes the raw body, bounded by `limits.max_payload_bytes`.

mod body;
mod decode;
mod detect;
mod encode;
mod render;
mod response;

use salvo::Router;
use salvo::size_limiter::max_size;

use qrforge_core::config::LimitsConfig;
use qrforge_core::constants::QR_ROUTE_COMPONENT;

#[must_use]
pub fn routes(limits: &LimitsConfig) -> Router {
    let limit = u64::try_from(limits.max_payload_bytes).unwrap_or(u64::MAX);

    Router::with_path(QR_ROUTE_COMPONENT)
        .hoop(max_size(limit))
        .push(Router::with_path("detect").post(detect::detect))
        .push(Router::with_path("decode").post(decode::decode))
        .push(Router::with_path("encode").post(encode::encode))
        .push(Router::with_path("render").post(render::render))
}
