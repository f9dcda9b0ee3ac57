//! Content type detection for decoded QR text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Broad classification of decoded QR text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    Phone,
    Email,
    WebUrl,
    Sms,
    Wifi,
    Contact,
    Unknown,
}

impl ContentType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Phone => "PHONE",
            Self::Email => "EMAIL",
            Self::WebUrl => "WEB_URL",
            Self::Sms => "SMS",
            Self::Wifi => "WIFI",
            Self::Contact => "CONTACT",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prefix rules in priority order. The first match wins.
const PREFIX_RULES: &[(&str, ContentType)] = &[
    ("tel:", ContentType::Phone),
    ("mailto:", ContentType::Email),
    ("http://", ContentType::WebUrl),
    ("https://", ContentType::WebUrl),
    ("sms:", ContentType::Sms),
    ("smsto:", ContentType::Sms),
    ("WIFI:", ContentType::Wifi),
];

/// ## Summary
/// Classifies decoded QR text by prefix.
///
/// Matching is case-sensitive. A contact needs both `BEGIN:VCARD` at the
/// start and an `END:VCARD` somewhere after it.
#[must_use]
pub fn detect(text: &str) -> ContentType {
    if let Some(&(_, content_type)) = PREFIX_RULES
        .iter()
        .find(|(prefix, _)| text.starts_with(prefix))
    {
        return content_type;
    }

    if text.starts_with("BEGIN:VCARD") && text.contains("END:VCARD") {
        return ContentType::Contact;
    }

    ContentType::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_each_prefix() {
        assert_eq!(detect("tel:+15551234"), ContentType::Phone);
        assert_eq!(detect("mailto:a@b.c"), ContentType::Email);
        assert_eq!(detect("http://example.com"), ContentType::WebUrl);
        assert_eq!(detect("https://example.com"), ContentType::WebUrl);
        assert_eq!(detect("sms:+1555"), ContentType::Sms);
        assert_eq!(detect("smsto:+1555:hi"), ContentType::Sms);
        assert_eq!(detect("WIFI:S:Net;;"), ContentType::Wifi);
        assert_eq!(
            detect("BEGIN:VCARD\nFN:Jo\nEND:VCARD"),
            ContentType::Contact
        );
    }

    #[test]
    fn detection_is_case_sensitive() {
        assert_eq!(detect("wifi:S:Net;;"), ContentType::Unknown);
        assert_eq!(detect("TEL:+1555"), ContentType::Unknown);
        assert_eq!(detect("HTTPS://example.com"), ContentType::Unknown);
    }

    #[test]
    fn contact_needs_end_marker() {
        assert_eq!(detect("BEGIN:VCARD\nFN:Jo\n"), ContentType::Unknown);
    }

    #[test]
    fn unrecognized_formats_are_unknown() {
        assert_eq!(detect("geo:1,2"), ContentType::Unknown);
        assert_eq!(detect("MECARD:N:Jo;;"), ContentType::Unknown);
        assert_eq!(detect(""), ContentType::Unknown);
        assert_eq!(detect("hello world"), ContentType::Unknown);
    }

    #[test]
    fn serializes_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&ContentType::WebUrl).unwrap(),
            "\"WEB_URL\""
        );
    }
}
