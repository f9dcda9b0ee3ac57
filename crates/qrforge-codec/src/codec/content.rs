//! Dispatch from decoded QR text to the matching codec.

use serde::{Deserialize, Serialize};

use super::detect::{ContentType, detect};
use super::{
    CalendarEvent, EmailMessage, GeoLocation, MeCard, PaymentRequest, PhoneNumber, QrPayload,
    SmsMessage, VCardContact, WifiCredentials,
};
use crate::error::{CodecError, CodecResult};

/// Any payload a QR code can carry.
///
/// Serialized adjacently tagged, e.g. `{"type":"wifi","data":{..}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum QrContent {
    Phone(PhoneNumber),
    Email(EmailMessage),
    Url(String),
    Sms(SmsMessage),
    Wifi(WifiCredentials),
    Contact(VCardContact),
    MeCard(MeCard),
    Geo(GeoLocation),
    Event(CalendarEvent),
    Payment(PaymentRequest),
    Text(String),
}

impl QrContent {
    /// ## Summary
    /// Decodes QR text into the richest value that fits.
    ///
    /// Detected prefixes go to their codec. Text with no recognized prefix is
    /// offered to MECARD, `geo:`, VEVENT and payment URIs in turn. Anything
    /// that fails to parse comes back as [`QrContent::Text`].
    #[must_use]
    #[tracing::instrument(skip(text), fields(len = text.len()))]
    pub fn decode(text: &str) -> Self {
        let content_type = detect(text);
        let decoded = match content_type {
            ContentType::Phone => PhoneNumber::parse(text).map(Self::Phone),
            ContentType::Email => EmailMessage::parse(text).map(Self::Email),
            ContentType::WebUrl => url::Url::parse(text.trim())
                .inspect_err(|e| tracing::debug!(error = %e, "URL rejected"))
                .ok()
                .map(|_| Self::Url(text.trim().to_string())),
            ContentType::Sms => SmsMessage::parse(text).map(Self::Sms),
            ContentType::Wifi => WifiCredentials::parse(text).map(Self::Wifi),
            ContentType::Contact => VCardContact::parse(text).map(Self::Contact),
            ContentType::Unknown => Self::decode_unprefixed(text),
        };

        decoded.unwrap_or_else(|| {
            tracing::debug!(%content_type, "Falling back to plain text");
            Self::Text(text.to_string())
        })
    }

    fn decode_unprefixed(text: &str) -> Option<Self> {
        MeCard::parse(text)
            .map(Self::MeCard)
            .or_else(|| GeoLocation::parse(text).map(Self::Geo))
            .or_else(|| CalendarEvent::parse(text).map(Self::Event))
            .or_else(|| PaymentRequest::parse(text).map(Self::Payment))
    }

    /// Formats the QR text for this value.
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            Self::Phone(v) => v.to_payload(),
            Self::Email(v) => v.to_payload(),
            Self::Url(v) | Self::Text(v) => v.clone(),
            Self::Sms(v) => v.to_payload(),
            Self::Wifi(v) => v.to_payload(),
            Self::Contact(v) => v.to_payload(),
            Self::MeCard(v) => v.to_payload(),
            Self::Geo(v) => v.to_payload(),
            Self::Event(v) => v.to_payload(),
            Self::Payment(v) => v.to_payload(),
        }
    }

    /// ## Errors
    /// Returns `CodecError::ValidationError` if the wrapped value breaks its
    /// invariants, or a URL is not an absolute `http`/`https` URL.
    pub fn validate(&self) -> CodecResult<()> {
        match self {
            Self::Phone(v) => v.validate(),
            Self::Email(v) => v.validate(),
            Self::Url(v) => {
                let parsed =
                    url::Url::parse(v.trim()).map_err(|e| CodecError::invalid("url", e))?;
                if !matches!(parsed.scheme(), "http" | "https") {
                    return Err(CodecError::invalid("url", "scheme must be http or https"));
                }
                Ok(())
            }
            Self::Sms(v) => v.validate(),
            Self::Wifi(v) => v.validate(),
            Self::Contact(v) => v.validate(),
            Self::MeCard(v) => v.validate(),
            Self::Geo(v) => v.validate(),
            Self::Event(v) => v.validate(),
            Self::Payment(v) => v.validate(),
            Self::Text(_) => Ok(()),
        }
    }

    /// The detection class of the encoded text.
    ///
    /// Formats `detect` has no prefix for (MECARD, geo, events, payments,
    /// plain text) map to [`ContentType::Unknown`].
    #[must_use]
    pub fn content_type(&self) -> ContentType {
        detect(&self.encode())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::codec::SecurityType;

    #[test_log::test]
    fn decodes_prefixed_formats() {
        assert!(matches!(QrContent::decode("tel:+15550100"), QrContent::Phone(p) if p.number == "+15550100"));
        assert!(matches!(QrContent::decode("mailto:a@b.c"), QrContent::Email(_)));
        assert!(matches!(QrContent::decode("smsto:1:hi"), QrContent::Sms(_)));
        assert_eq!(
            QrContent::decode("https://example.com/a?b=c"),
            QrContent::Url("https://example.com/a?b=c".to_string())
        );
        match QrContent::decode("WIFI:T:WPA;S:Home;P:pw;;") {
            QrContent::Wifi(wifi) => {
                assert_eq!(wifi.ssid, "Home");
                assert_eq!(wifi.security, SecurityType::Wpa);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            QrContent::decode("BEGIN:VCARD\nFN:Jo Bloggs\nEND:VCARD"),
            QrContent::Contact(_)
        ));
    }

    #[test_log::test]
    fn decodes_unprefixed_formats() {
        assert!(matches!(QrContent::decode("MECARD:N:Jo;;"), QrContent::MeCard(_)));
        assert!(matches!(QrContent::decode("geo:1.5,2.5"), QrContent::Geo(_)));
        assert!(matches!(
            QrContent::decode("BEGIN:VEVENT\nSUMMARY:X\nDTSTART:20240101T100000Z\nEND:VEVENT"),
            QrContent::Event(_)
        ));
        assert!(matches!(
            QrContent::decode("litecoin:LQ3B36Yv2rBTxdgAdYpU2UcEZsaNwXeATk"),
            QrContent::Payment(_)
        ));
    }

    #[test_log::test]
    fn broken_payloads_fall_back_to_text() {
        assert_eq!(
            QrContent::decode("WIFI:T:WPA;P:pw;;"),
            QrContent::Text("WIFI:T:WPA;P:pw;;".to_string())
        );
        assert_eq!(
            QrContent::decode("http://"),
            QrContent::Text("http://".to_string())
        );
        assert_eq!(
            QrContent::decode("geo:91,0"),
            QrContent::Text("geo:91,0".to_string())
        );
        assert_eq!(QrContent::decode("hello"), QrContent::Text("hello".to_string()));
    }

    #[test]
    fn encode_and_content_type() {
        let wifi = QrContent::Wifi(WifiCredentials::new("Cafe", None, SecurityType::Open).unwrap());
        assert_eq!(wifi.encode(), "WIFI:T:nopass;S:Cafe;;");
        assert_eq!(wifi.content_type(), ContentType::Wifi);

        let geo = QrContent::Geo(GeoLocation::new(1.0, 2.0).unwrap());
        assert_eq!(geo.content_type(), ContentType::Unknown);

        let event = QrContent::Event(
            CalendarEvent::new(
                "Launch",
                Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
            )
            .unwrap(),
        );
        assert!(matches!(QrContent::decode(&event.encode()), QrContent::Event(e) if e.title == "Launch"));
    }

    #[test]
    fn validates_urls() {
        assert!(QrContent::Url("https://example.com".to_string()).validate().is_ok());
        assert!(QrContent::Url("ftp://example.com".to_string()).validate().is_err());
        assert!(QrContent::Url("not a url".to_string()).validate().is_err());
        assert!(QrContent::Text(String::new()).validate().is_ok());
    }

    #[test]
    fn serializes_adjacently_tagged() {
        let json = serde_json::to_value(QrContent::Phone(PhoneNumber::new("123").unwrap())).unwrap();
        assert_eq!(json, serde_json::json!({"type": "phone", "data": {"number": "123"}}));

        let back: QrContent =
            serde_json::from_str(r#"{"type":"me_card","data":{"name":"Jo"}}"#).unwrap();
        assert!(matches!(back, QrContent::MeCard(m) if m.name == "Jo"));
    }
}
