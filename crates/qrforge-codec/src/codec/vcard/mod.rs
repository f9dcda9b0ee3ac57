//! vCard 3.0 contacts (RFC 2426 / RFC 6350).
//!
//! Only the handful of properties a contact QR code carries are modelled.
//! Output is vCard 3.0, which every phone address book imports; parsing
//! accepts 2.1 through 4.0 and ignores properties it does not model.

mod build;
mod parse;

use serde::{Deserialize, Serialize};

use super::QrPayload;
use super::error::ParseResult;
use crate::error::{CodecError, CodecResult};

/// A contact shared through a vCard QR code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VCardContact {
    #[serde(default)]
    pub given_name: String,
    #[serde(default)]
    pub family_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub organization: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub address: Option<String>,
    pub note: Option<String>,
}

impl VCardContact {
    /// ## Summary
    /// Creates a contact from name parts.
    ///
    /// ## Errors
    /// Returns a validation error if both name parts are blank.
    pub fn new(given_name: impl Into<String>, family_name: impl Into<String>) -> CodecResult<Self> {
        let contact = Self {
            given_name: given_name.into(),
            family_name: family_name.into(),
            ..Self::default()
        };
        contact.validate()?;
        Ok(contact)
    }

    /// Given name followed by family name, skipping blanks.
    #[must_use]
    pub fn formatted_name(&self) -> String {
        [self.given_name.trim(), self.family_name.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Formats as a `BEGIN:VCARD` block.
    #[must_use]
    pub fn to_vcard(&self) -> String {
        build::build_vcard(self)
    }
}

impl QrPayload for VCardContact {
    const NAME: &'static str = "vcard";

    fn try_parse(text: &str) -> ParseResult<Self> {
        parse::parse_vcard(text)
    }

    fn to_payload(&self) -> String {
        self.to_vcard()
    }

    fn validate(&self) -> CodecResult<()> {
        if self.formatted_name().is_empty() {
            return Err(CodecError::invalid(
                "name",
                "given_name or family_name must be set",
            ));
        }
        Ok(())
    }
}

impl_payload_text!(VCardContact);
