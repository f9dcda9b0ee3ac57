//! Format, parse and compare across every codec.
//!
//! A round trip must preserve every field the parser populated; whitespace
//! and field order may change.

use chrono::{NaiveDate, TimeZone, Timelike, Utc};

use super::fixtures::*;
use crate::codec::{
    CalendarEvent, GeoLocation, MeCard, QrContent, QrPayload, SecurityType, VCardContact,
    WifiCredentials,
};

/// Parses, formats, then parses again and checks nothing was lost.
fn round_trip<T>(input: &str) -> T
where
    T: QrPayload + PartialEq + std::fmt::Debug,
{
    let first = T::try_parse(input).expect("first parse should succeed");
    let formatted = first.to_payload();
    let second = T::try_parse(&formatted)
        .unwrap_or_else(|e| panic!("second parse failed: {e}\n{formatted}"));
    assert_eq!(first, second, "round trip changed the value:\n{formatted}");
    second
}

#[test]
fn geo_parses_san_francisco() {
    let location = GeoLocation::parse(GEO_SF).expect("geo URI should parse");
    assert!((location.latitude - 37.7749).abs() < 1e-6);
    assert!((location.longitude - -122.4194).abs() < 1e-6);
}

#[test]
fn geo_round_trip_keeps_label() {
    let location: GeoLocation = round_trip(GEO_LABELLED);
    assert_eq!(location.label.as_deref(), Some("Eiffel Tower"));
    assert!((location.latitude - 48.8584).abs() < 1e-6);
}

#[test]
fn wifi_wpa_example() {
    let wifi = WifiCredentials::parse(WIFI_WPA).expect("WIFI string should parse");
    assert_eq!(wifi.ssid, "MyNetwork");
    assert_eq!(wifi.password.as_deref(), Some("password123"));
    assert_eq!(wifi.security, SecurityType::Wpa);
    assert!(!wifi.hidden);
    assert_eq!(wifi.to_payload(), WIFI_WPA);
}

#[test]
fn wifi_round_trip_with_reserved_characters() {
    let wifi: WifiCredentials = round_trip(WIFI_HIDDEN_ESCAPED);
    assert_eq!(wifi.ssid, "Café;Guest");
    assert_eq!(wifi.password.as_deref(), Some("p:w,d\"x;"));
    assert_eq!(wifi.security, SecurityType::Wep);
    assert!(wifi.hidden);
}

#[test]
fn wifi_semicolon_in_ssid_is_escaped() {
    let wifi = WifiCredentials::new("My;Network", None, SecurityType::Open).unwrap();
    let text = wifi.to_payload();
    assert!(text.contains("S:My\\;Network;"), "{text}");
    assert_eq!(WifiCredentials::parse(&text).unwrap().ssid, "My;Network");
}

#[test]
fn wifi_without_ssid_is_rejected_whole() {
    assert!(WifiCredentials::parse("WIFI:T:WPA;P:password123;;").is_none());
    assert!(WifiCredentials::parse("WIFI:T:WPA;S:;P:password123;;").is_none());
}

#[test]
fn mecard_round_trip() {
    let card: MeCard = round_trip(MECARD_FULL);
    assert_eq!(card.name, "Doe,John");
    assert_eq!(card.phone.as_deref(), Some("+15551234567"));
    assert_eq!(card.email.as_deref(), Some("john@example.com"));
    assert_eq!(card.address.as_deref(), Some("1 Main St, Springfield"));
    assert_eq!(card.birthday, NaiveDate::from_ymd_opt(1980, 1, 2));
}

#[test]
fn mecard_built_value_round_trips() {
    let card = MeCard {
        phone: Some("+1 555 0100".to_string()),
        email: Some("jo@example.com".to_string()),
        address: Some("Flat 2; 10 High St: London".to_string()),
        ..MeCard::new("Bloggs, Jo").unwrap()
    };
    assert_eq!(MeCard::parse(&card.to_payload()), Some(card));
}

#[test]
fn event_round_trip_truncates_to_seconds() {
    let start = Utc
        .with_ymd_and_hms(2024, 3, 15, 14, 0, 0)
        .unwrap()
        .with_nanosecond(250_000_000)
        .unwrap();
    let end = Utc.with_ymd_and_hms(2024, 3, 15, 15, 30, 0).unwrap();
    let event = CalendarEvent::new("Review; round 2", start, end)
        .unwrap()
        .with_location("Room 4, east wing")
        .with_description("Agenda:\n1. Numbers\n2. Plans");

    let parsed = CalendarEvent::parse(&event.to_payload()).expect("VEVENT should parse");
    assert_eq!(parsed.title, event.title);
    assert_eq!(parsed.location, event.location);
    assert_eq!(parsed.description, event.description);
    assert_eq!(parsed.start, start.with_nanosecond(0).unwrap());
    assert_eq!(parsed.end, end);
    assert_eq!(parsed.uid(), event.uid());
}

#[test]
fn event_from_calendar_app() {
    let event: CalendarEvent = round_trip(VCALENDAR_TZID);
    assert_eq!(event.title, "Sprint planning, Q3");
    assert_eq!(event.location.as_deref(), Some("Room 2"));
    assert_eq!(
        event.description.as_deref(),
        Some("Bring the roadmap and last quarter's numbers")
    );
    // Berlin is UTC+2 in July
    assert_eq!(event.start, Utc.with_ymd_and_hms(2024, 7, 10, 7, 0, 0).unwrap());
    assert_eq!(event.end, Utc.with_ymd_and_hms(2024, 7, 10, 8, 30, 0).unwrap());
}

#[test]
fn vcard_round_trip() {
    let contact: VCardContact = round_trip(VCARD_3);
    assert_eq!(contact.formatted_name(), "Ada Lovelace");
    assert_eq!(contact.organization.as_deref(), Some("Analytical Engines"));
    assert_eq!(contact.phone.as_deref(), Some("+44 20 7946 0018"));
    assert_eq!(contact.note.as_deref(), Some("Prefers letters, not calls"));
}

#[test]
fn content_round_trip_through_dispatch() {
    for input in [WIFI_WPA, GEO_SF, MECARD_FULL, VCALENDAR_TZID, VCARD_3] {
        let content = QrContent::decode(input);
        assert!(
            !matches!(content, QrContent::Text(_)),
            "{input:?} fell back to text"
        );
        assert_eq!(QrContent::decode(&content.encode()), content);
    }
}
