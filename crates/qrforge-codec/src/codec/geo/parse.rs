use super::{GEO_SCHEME, GeoLocation};
use crate::codec::QrPayload;
use crate::codec::error::{ParseError, ParseResult};
use crate::codec::uri::{query_pairs, strip_scheme};

/// Parses `geo:<lat>,<lon>[,<alt>][;u=<m>][;...][?q=...]`.
pub(super) fn parse_geo_uri(input: &str) -> ParseResult<GeoLocation> {
    let rest = strip_scheme(input.trim(), GEO_SCHEME)
        .ok_or_else(|| ParseError::missing_prefix(GEO_SCHEME))?;

    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };

    let mut segments = path.split(';');
    let coordinates: Vec<&str> = segments.next().unwrap_or_default().split(',').collect();

    let (mut latitude, mut longitude, altitude) = match coordinates.as_slice() {
        [lat, lon] => (number(lat, "latitude")?, number(lon, "longitude")?, None),
        [lat, lon, alt] => (
            number(lat, "latitude")?,
            number(lon, "longitude")?,
            Some(number(alt, "altitude")?),
        ),
        _ => {
            return Err(ParseError::invalid_value(format!(
                "expected 2 or 3 coordinates, found {}",
                coordinates.len()
            )));
        }
    };

    let mut uncertainty = None;
    for segment in segments {
        match segment.split_once('=') {
            Some((key, value)) if key.eq_ignore_ascii_case("u") => {
                uncertainty = Some(number(value, "uncertainty")?);
            }
            _ => tracing::trace!(segment, "Ignoring geo URI parameter"),
        }
    }

    let mut label = None;
    if let Some(query) = query
        && let Some((_, value)) = query_pairs(query)?.into_iter().find(|(key, _)| key == "q")
    {
        label = label_from_query(&value);
        // `geo:0,0?q=lat,lon` means "search at lat,lon"
        if latitude == 0.0
            && longitude == 0.0
            && let Some((lat, lon)) = coordinates_from_query(&value)
        {
            (latitude, longitude) = (lat, lon);
        }
    }

    let location = GeoLocation {
        latitude,
        longitude,
        label,
        altitude,
        uncertainty,
    };
    location
        .validate()
        .map_err(|e| ParseError::invalid_value(e.to_string()))?;
    Ok(location)
}

fn number(raw: &str, field: &str) -> ParseResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| ParseError::invalid_value(format!("{field} {raw:?}: {e}")))
}

/// Leading `lat,lon` of a `q` value, ignoring any `(Label)` suffix.
fn coordinates_from_query(q: &str) -> Option<(f64, f64)> {
    let coordinates = q.split_once('(').map_or(q, |(head, _)| head);
    let (lat, lon) = coordinates.split_once(',')?;
    Some((lat.trim().parse().ok()?, lon.trim().parse().ok()?))
}

/// Extracts a label from a `q` value.
///
/// `lat,lon(Label)` yields the parenthesized part. A bare coordinate pair
/// carries no label; anything else is the label itself.
fn label_from_query(q: &str) -> Option<String> {
    let q = q.trim();
    if q.ends_with(')') {
        if let Some(open) = q.find('(') {
            let label = &q[open + 1..q.len() - 1];
            return (!label.is_empty()).then(|| label.to_string());
        }
    }

    let is_coordinates = q.split(',').all(|part| part.trim().parse::<f64>().is_ok());
    (!q.is_empty() && !is_coordinates).then(|| q.to_string())
}
