use super::parse::BIRTHDAY_FORMAT;
use super::{MECARD_PREFIX, MeCard};
use crate::codec::escape::{MECARD_RESERVED, escape_reserved};

pub(super) fn build_mecard(card: &MeCard) -> String {
    let mut out = String::from(MECARD_PREFIX);
    push_field(&mut out, "N", Some(&card.name));

    let optional = [
        ("TEL", &card.phone),
        ("EMAIL", &card.email),
        ("ADR", &card.address),
        ("ORG", &card.organization),
        ("NOTE", &card.note),
        ("URL", &card.url),
    ];
    for (key, value) in optional {
        push_field(&mut out, key, value.as_deref());
    }

    if let Some(birthday) = card.birthday {
        let formatted = birthday.format(BIRTHDAY_FORMAT).to_string();
        push_field(&mut out, "BDAY", Some(&formatted));
    }

    out.push(';');
    out
}

fn push_field(out: &mut String, key: &str, value: Option<&str>) {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return;
    };
    out.push_str(key);
    out.push(':');
    out.push_str(&escape_reserved(value, MECARD_RESERVED));
    out.push(';');
}
