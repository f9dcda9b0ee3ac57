//! vCard serialization.

use super::VCardContact;
use crate::codec::escape::escape_text;
use crate::codec::fold::push_line;

pub(super) fn build_vcard(contact: &VCardContact) -> String {
    let mut out = String::new();

    push_line(&mut out, "BEGIN:VCARD");
    push_line(&mut out, "VERSION:3.0");
    push_line(
        &mut out,
        &format!(
            "N:{};{};;;",
            escape_text(contact.family_name.trim()),
            escape_text(contact.given_name.trim())
        ),
    );
    push_line(
        &mut out,
        &format!("FN:{}", escape_text(&contact.formatted_name())),
    );

    push_text(&mut out, "ORG", contact.organization.as_deref());
    push_text(&mut out, "TITLE", contact.title.as_deref());
    push_text(&mut out, "TEL", contact.phone.as_deref());
    push_text(&mut out, "EMAIL", contact.email.as_deref());
    // URI values are not TEXT and must not be escaped
    if let Some(url) = non_empty(contact.url.as_deref()) {
        push_line(&mut out, &format!("URL:{url}"));
    }
    if let Some(address) = non_empty(contact.address.as_deref()) {
        // Whole address in the street component
        push_line(&mut out, &format!("ADR:;;{};;;;", escape_text(address)));
    }
    push_text(&mut out, "NOTE", contact.note.as_deref());

    push_line(&mut out, "END:VCARD");
    out
}

fn push_text(out: &mut String, name: &str, value: Option<&str>) {
    if let Some(value) = non_empty(value) {
        push_line(out, &format!("{name}:{}", escape_text(value)));
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
