mod app_specific;
mod qr;

use salvo::Router;

use crate::config::Settings;

// Re-export route constants from core
pub use qrforge_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, APP_ROUTE_PREFIX, QR_ROUTE_COMPONENT, QR_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the main API router.
///
/// Size limits are read from `settings` once, when the tree is built.
#[must_use]
pub fn routes(settings: &Settings) -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(app_specific::routes())
        .push(qr::routes(&settings.limits))
}
