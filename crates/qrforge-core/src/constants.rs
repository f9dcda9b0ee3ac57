/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const APP_ROUTE_COMPONENT: &str = "app";
pub const APP_ROUTE_PREFIX: &str = const_str::concat!(API_ROUTE_PREFIX, "/", APP_ROUTE_COMPONENT);

pub const QR_ROUTE_COMPONENT: &str = "qr";
pub const QR_ROUTE_PREFIX: &str = const_str::concat!(API_ROUTE_PREFIX, "/", QR_ROUTE_COMPONENT);

/// Product identifier written into generated iCalendar objects and UIDs
pub const PRODUCT_ID: &str = "qrforge";
