//! `qrforge` HTTP service: QR payload detection, decoding, encoding and
//! rendering over the `qrforge-codec` codecs.

pub mod app;
pub mod config;
pub mod error;
pub mod render;

use std::sync::Arc;

use salvo::Router;

use crate::config::{ConfigHandler, Settings};

/// ## Summary
/// Builds the complete router: settings injection plus the API tree.
#[must_use]
pub fn service_router(settings: Settings) -> Router {
    let api = app::api::routes(&settings);

    Router::new()
        .hoop(ConfigHandler {
            settings: Arc::new(settings),
        })
        .push(api)
}
