//! Payloads as produced by common generator apps and phone cameras.

/// WPA network, the most common Wi-Fi QR code.
pub const WIFI_WPA: &str = "WIFI:T:WPA;S:MyNetwork;P:password123;;";

/// Hidden WEP network with reserved characters in every field.
pub const WIFI_HIDDEN_ESCAPED: &str = r#"WIFI:S:Café\;Guest;T:WEP;P:p\:w\,d\"x\;;H:true;;"#;

pub const GEO_SF: &str = "geo:37.7749,-122.4194";

/// Android Maps share format with a labelled query.
pub const GEO_LABELLED: &str = "geo:0,0?q=48.8584,2.2945(Eiffel%20Tower)";

pub const MECARD_FULL: &str = "MECARD:N:Doe\\,John;TEL:+15551234567;EMAIL:john@example.com;\
ADR:1 Main St\\, Springfield;ORG:Acme;BDAY:19800102;;";

/// Event exported by a calendar app, with folding and a TZID start.
pub const VCALENDAR_TZID: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example//Example//EN\r\n\
BEGIN:VEVENT\r\n\
UID:abc@example.com\r\n\
DTSTAMP:20240101T000000Z\r\n\
DTSTART;TZID=Europe/Berlin:20240710T090000\r\n\
DTEND;TZID=Europe/Berlin:20240710T103000\r\n\
SUMMARY:Sprint planning\\, Q3\r\n\
LOCATION:Room 2\r\n\
DESCRIPTION:Bring the roadmap and last quarter's numbe\r\n\
\x20rs\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

pub const VCARD_3: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
N:Lovelace;Ada;;;\r\n\
FN:Ada Lovelace\r\n\
ORG:Analytical Engines\r\n\
TEL;TYPE=CELL:+44 20 7946 0018\r\n\
EMAIL:ada@example.org\r\n\
NOTE:Prefers letters\\, not calls\r\n\
END:VCARD\r\n";
