use super::{SecurityType, WIFI_PREFIX, WifiCredentials};
use crate::codec::error::{ParseError, ParseResult};
use crate::codec::escape::{split_unescaped, unescape_reserved};

/// Parses a `WIFI:` string. `S` is mandatory; the first occurrence of a
/// field wins.
pub(super) fn parse_wifi_string(input: &str) -> ParseResult<WifiCredentials> {
    let body = input
        .strip_prefix(WIFI_PREFIX)
        .ok_or_else(|| ParseError::missing_prefix(WIFI_PREFIX))?;

    let mut ssid: Option<String> = None;
    let mut password: Option<String> = None;
    let mut security: Option<SecurityType> = None;
    let mut hidden: Option<bool> = None;

    for field in split_unescaped(body, ';') {
        if field.trim().is_empty() {
            continue;
        }
        let Some((key, raw)) = field.split_once(':') else {
            tracing::debug!(field, "Ignoring WIFI field without key");
            continue;
        };
        let value = unescape_reserved(raw);

        match key.trim().to_ascii_uppercase().as_str() {
            "S" => {
                ssid.get_or_insert(value);
            }
            "P" => {
                password.get_or_insert(value);
            }
            "T" => {
                security.get_or_insert_with(|| SecurityType::from_token(&value));
            }
            "H" => {
                hidden.get_or_insert_with(|| value.trim().eq_ignore_ascii_case("true"));
            }
            other => tracing::trace!(key = other, "Ignoring unknown WIFI field"),
        }
    }

    let ssid = ssid
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ParseError::missing_field("S"))?;

    Ok(WifiCredentials {
        ssid,
        password: password.filter(|p| !p.is_empty()),
        security: security.unwrap_or_default(),
        hidden: hidden.unwrap_or(false),
    })
}
