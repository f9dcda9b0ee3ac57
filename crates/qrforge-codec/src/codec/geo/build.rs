use super::{GEO_SCHEME, GeoLocation};

pub(super) fn build_geo_uri(location: &GeoLocation) -> String {
    let coordinates = format!("{},{}", location.latitude, location.longitude);
    let mut uri = format!("{GEO_SCHEME}{coordinates}");

    if let Some(altitude) = location.altitude {
        uri.push(',');
        uri.push_str(&altitude.to_string());
    }
    if let Some(uncertainty) = location.uncertainty {
        uri.push_str(";u=");
        uri.push_str(&uncertainty.to_string());
    }
    if let Some(label) = location.label.as_deref().filter(|l| !l.is_empty()) {
        uri.push_str("?q=");
        uri.push_str(&coordinates);
        uri.push('(');
        uri.push_str(&urlencoding::encode(label));
        uri.push(')');
    }

    uri
}
