//! QR payload formats.
//!
//! Every structured payload implements [`QrPayload`]: a fallible
//! `try_parse`, an `Option`-returning `parse` for "is it this format?"
//! probing, an infallible formatter, and `validate` for values built by hand.
//!
//! ## Submodules
//!
//! - [`detect`] - prefix-based classification of decoded QR text
//! - [`geo`], [`mecard`], [`wifi`], [`vevent`], [`vcard`] - the structured codecs
//! - [`message`], [`payment`] - `tel:`/`mailto:`/`sms:` and payment URIs
//! - [`content`] - dispatch from raw text to whichever codec matches

/// Implements `Display` and `FromStr` on top of `QrPayload`.
macro_rules! impl_payload_text {
    ($ty:ty) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&$crate::codec::QrPayload::to_payload(self))
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::codec::ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::codec::QrPayload>::try_parse(s)
            }
        }
    };
}

pub mod content;
pub mod detect;
pub mod escape;
pub mod fold;
pub mod geo;
pub mod lexer;
pub mod mecard;
pub mod message;
pub mod payment;
pub mod uri;
pub mod vcard;
pub mod vevent;
pub mod wifi;

mod error;
#[cfg(test)]
mod tests;

pub use content::QrContent;
pub use detect::{ContentType, detect};
pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use geo::GeoLocation;
pub use mecard::MeCard;
pub use message::{EmailMessage, PhoneNumber, SmsMessage};
pub use payment::{Currency, PaymentRequest};
pub use vcard::VCardContact;
pub use vevent::CalendarEvent;
pub use wifi::{SecurityType, WifiCredentials};

use crate::error::CodecResult;

/// A structured value that can be carried as QR text.
pub trait QrPayload: Sized {
    /// Format name used in diagnostics.
    const NAME: &'static str;

    /// Parses the full QR text.
    ///
    /// ## Errors
    /// Returns a [`ParseError`] if the prefix or a mandatory field is missing
    /// or a value is malformed.
    fn try_parse(text: &str) -> ParseResult<Self>;

    /// Formats the canonical QR text. Never fails for a validated value.
    fn to_payload(&self) -> String;

    /// Checks the invariants the constructors enforce.
    ///
    /// ## Errors
    /// Returns `CodecError::ValidationError` naming the offending field.
    fn validate(&self) -> CodecResult<()>;

    /// Parses the full QR text, returning `None` if it is not this format.
    #[must_use]
    fn parse(text: &str) -> Option<Self> {
        Self::try_parse(text)
            .inspect_err(|e| tracing::debug!(format = Self::NAME, error = %e, "Payload rejected"))
            .ok()
    }
}
