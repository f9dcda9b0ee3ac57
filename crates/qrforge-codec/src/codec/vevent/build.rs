use qrforge_core::constants::PRODUCT_ID;
use sha2::{Digest, Sha256};

use super::CalendarEvent;
use super::datetime::{format_date, format_utc};
use crate::codec::escape::escape_text;
use crate::codec::fold::push_line;

/// Hex characters of the digest kept in the UID.
const UID_HEX_LEN: usize = 32;

pub(super) fn event_uid(event: &CalendarEvent) -> String {
    let mut hasher = Sha256::new();
    hasher.update(event.title.as_bytes());
    hasher.update(b"|");
    hasher.update(event.start.timestamp().to_string().as_bytes());
    let digest = hex::encode(hasher.finalize());

    format!("{}@{PRODUCT_ID}", &digest[..UID_HEX_LEN])
}

pub(super) fn build_vevent(event: &CalendarEvent) -> String {
    let mut out = String::new();
    push_event(&mut out, event);
    out
}

pub(super) fn build_vcalendar(event: &CalendarEvent) -> String {
    let mut out = String::new();
    push_line(&mut out, "BEGIN:VCALENDAR");
    push_line(&mut out, "VERSION:2.0");
    push_line(&mut out, &format!("PRODID:-//{PRODUCT_ID}//EN"));
    push_event(&mut out, event);
    push_line(&mut out, "END:VCALENDAR");
    out
}

fn push_event(out: &mut String, event: &CalendarEvent) {
    push_line(out, "BEGIN:VEVENT");
    push_line(out, &format!("UID:{}", event_uid(event)));
    push_line(out, &format!("SUMMARY:{}", escape_text(&event.title)));

    if event.all_day {
        push_line(out, &format!("DTSTART;VALUE=DATE:{}", format_date(&event.start)));
        push_line(out, &format!("DTEND;VALUE=DATE:{}", format_date(&event.end)));
    } else {
        push_line(out, &format!("DTSTART:{}", format_utc(&event.start)));
        push_line(out, &format!("DTEND:{}", format_utc(&event.end)));
    }

    if let Some(location) = event.location.as_deref().filter(|l| !l.is_empty()) {
        push_line(out, &format!("LOCATION:{}", escape_text(location)));
    }
    if let Some(description) = event.description.as_deref().filter(|d| !d.is_empty()) {
        push_line(out, &format!("DESCRIPTION:{}", escape_text(description)));
    }

    push_line(out, "END:VEVENT");
}
