//! MECARD contacts.
//!
//! ```text
//! MECARD:N:Doe\,John;TEL:+15551234567;EMAIL:john@example.com;;
//! ```

mod build;
mod parse;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::QrPayload;
use super::error::ParseResult;
use crate::error::{CodecError, CodecResult};

pub(crate) const MECARD_PREFIX: &str = "MECARD:";

/// A compact contact card. Only `name` is mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeCard {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub organization: Option<String>,
    pub note: Option<String>,
    pub url: Option<String>,
    pub birthday: Option<NaiveDate>,
}

impl MeCard {
    /// Creates a card carrying only a name.
    ///
    /// ## Errors
    /// Returns a validation error if the name is blank.
    pub fn new(name: impl Into<String>) -> CodecResult<Self> {
        let card = Self {
            name: name.into(),
            ..Self::default()
        };
        card.validate()?;
        Ok(card)
    }

    /// Formats as a `MECARD:` string.
    #[must_use]
    pub fn to_mecard(&self) -> String {
        build::build_mecard(self)
    }
}

impl QrPayload for MeCard {
    const NAME: &'static str = "mecard";

    fn try_parse(text: &str) -> ParseResult<Self> {
        parse::parse_mecard(text)
    }

    fn to_payload(&self) -> String {
        self.to_mecard()
    }

    fn validate(&self) -> CodecResult<()> {
        if self.name.trim().is_empty() {
            return Err(CodecError::invalid("name", "must not be empty"));
        }
        Ok(())
    }
}

impl_payload_text!(MeCard);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_requires_name() {
        assert!(MeCard::new("  ").is_err());
        assert_eq!(MeCard::new("Jo").unwrap().name, "Jo");
    }
}
