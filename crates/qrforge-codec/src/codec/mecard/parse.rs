use chrono::NaiveDate;

use super::{MECARD_PREFIX, MeCard};
use crate::codec::error::{ParseError, ParseResult};
use crate::codec::escape::{split_unescaped, unescape_reserved};

pub(super) const BIRTHDAY_FORMAT: &str = "%Y%m%d";

pub(super) fn parse_mecard(input: &str) -> ParseResult<MeCard> {
    let body = input
        .trim_start()
        .strip_prefix(MECARD_PREFIX)
        .ok_or_else(|| ParseError::missing_prefix(MECARD_PREFIX))?;

    let mut card = MeCard::default();
    let mut name: Option<String> = None;

    for field in split_unescaped(body, ';') {
        let Some((key, raw)) = field.split_once(':') else {
            continue;
        };
        let value = unescape_reserved(raw).trim().to_string();
        if value.is_empty() {
            continue;
        }

        let slot = match key.trim().to_ascii_uppercase().as_str() {
            "N" => &mut name,
            "TEL" => &mut card.phone,
            "EMAIL" => &mut card.email,
            "ADR" => &mut card.address,
            "ORG" => &mut card.organization,
            "NOTE" => &mut card.note,
            "URL" => &mut card.url,
            "BDAY" => {
                if card.birthday.is_none() {
                    card.birthday = parse_birthday(&value);
                }
                continue;
            }
            other => {
                tracing::trace!(key = other, "Ignoring unknown MECARD field");
                continue;
            }
        };
        slot.get_or_insert(value);
    }

    card.name = name.ok_or_else(|| ParseError::missing_field("N"))?;
    Ok(card)
}

/// An unreadable birthday is dropped rather than failing the whole card.
fn parse_birthday(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
        .inspect_err(|e| tracing::debug!(value, error = %e, "Dropping unreadable MECARD birthday"))
        .ok()
}
