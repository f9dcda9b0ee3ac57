//! QR payload codecs.
//!
//! Parses and formats the small text formats carried inside QR codes:
//! Wi-Fi credentials, MECARD and vCard contacts, `geo:` locations, VEVENT
//! calendar entries, and `tel:`/`mailto:`/`sms:`/payment URIs.
//!
//! ```rust
//! use qrforge_codec::{QrPayload, WifiCredentials, SecurityType};
//!
//! let wifi = WifiCredentials::parse("WIFI:T:WPA;S:MyNetwork;P:password123;;").unwrap();
//! assert_eq!(wifi.ssid, "MyNetwork");
//! assert_eq!(wifi.security, SecurityType::Wpa);
//! assert_eq!(wifi.to_wifi_string(), "WIFI:T:WPA;S:MyNetwork;P:password123;;");
//! ```

pub mod codec;
pub mod error;

pub use codec::{
    CalendarEvent, ContentType, Currency, EmailMessage, GeoLocation, MeCard, ParseError,
    ParseErrorKind, ParseResult, PaymentRequest, PhoneNumber, QrContent, QrPayload, SecurityType,
    SmsMessage, VCardContact, WifiCredentials, detect,
};
pub use error::{CodecError, CodecResult};
