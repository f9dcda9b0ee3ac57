//! Lenient vCard reading for scanned contacts.

use super::VCardContact;
use crate::codec::error::{ParseError, ParseResult};
use crate::codec::escape::{split_unescaped, unescape_text};
use crate::codec::lexer::{Component, extract_component};

pub(super) fn parse_vcard(input: &str) -> ParseResult<VCardContact> {
    let card = extract_component(input, "VCARD")?;

    let (mut given_name, mut family_name) = (String::new(), String::new());
    if let Some(n) = card.first_value("N") {
        let parts = structured(n);
        family_name = parts.first().cloned().unwrap_or_default();
        given_name = parts.get(1).cloned().unwrap_or_default();
    }

    if given_name.is_empty() && family_name.is_empty() {
        if let Some(formatted) = card.first_value("FN").map(unescape_text) {
            // No usable N; split FN on its last space
            match formatted.trim().rsplit_once(' ') {
                Some((given, family)) => {
                    given_name = given.trim().to_string();
                    family_name = family.to_string();
                }
                None => given_name = formatted.trim().to_string(),
            }
        }
    }

    let contact = VCardContact {
        given_name,
        family_name,
        phone: text(&card, "TEL"),
        email: text(&card, "EMAIL"),
        organization: joined(&card, "ORG"),
        title: text(&card, "TITLE"),
        url: card.first_value("URL").map(str::to_string),
        address: joined(&card, "ADR"),
        note: text(&card, "NOTE"),
    };

    if contact.formatted_name().is_empty() {
        return Err(ParseError::missing_field("N"));
    }
    Ok(contact)
}

/// Splits a structured value on unescaped `;` and unescapes each component.
fn structured(value: &str) -> Vec<String> {
    split_unescaped(value, ';')
        .into_iter()
        .map(|part| unescape_text(part).trim().to_string())
        .collect()
}

fn text(card: &Component, name: &str) -> Option<String> {
    card.first_value(name).map(unescape_text)
}

/// Joins the non-empty components of a structured property with `", "`.
fn joined(card: &Component, name: &str) -> Option<String> {
    let parts: Vec<String> = structured(card.first_value(name)?)
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join(", "))
}
