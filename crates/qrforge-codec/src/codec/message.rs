//! `tel:`, `mailto:` and `sms:` URIs.

use serde::{Deserialize, Serialize};

use super::QrPayload;
use super::error::{ParseError, ParseResult};
use super::uri::{build_query, decode_component, query_pairs, strip_scheme};
use crate::error::{CodecError, CodecResult};

const TEL_SCHEME: &str = "tel:";
const MAILTO_SCHEME: &str = "mailto:";
const SMS_SCHEME: &str = "sms:";
const SMSTO_SCHEME: &str = "smsto:";

fn require_non_empty(field: &str, value: &str) -> CodecResult<()> {
    if value.trim().is_empty() {
        return Err(CodecError::invalid(field, "must not be empty"));
    }
    Ok(())
}

/// A number to dial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub number: String,
}

impl PhoneNumber {
    /// ## Errors
    /// Returns a validation error if the number is blank.
    pub fn new(number: impl Into<String>) -> CodecResult<Self> {
        let phone = Self {
            number: number.into(),
        };
        phone.validate()?;
        Ok(phone)
    }
}

impl QrPayload for PhoneNumber {
    const NAME: &'static str = "tel";

    fn try_parse(text: &str) -> ParseResult<Self> {
        let number = strip_scheme(text.trim(), TEL_SCHEME)
            .ok_or_else(|| ParseError::missing_prefix(TEL_SCHEME))?
            .trim();
        if number.is_empty() {
            return Err(ParseError::missing_field("number"));
        }
        Ok(Self {
            number: decode_component(number)?,
        })
    }

    fn to_payload(&self) -> String {
        format!("{TEL_SCHEME}{}", self.number.trim())
    }

    fn validate(&self) -> CodecResult<()> {
        require_non_empty("number", &self.number)
    }
}

impl_payload_text!(PhoneNumber);

/// A pre-addressed email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    pub address: String,
    pub subject: Option<String>,
    pub body: Option<String>,
}

impl EmailMessage {
    /// ## Errors
    /// Returns a validation error if the address is blank.
    pub fn new(address: impl Into<String>) -> CodecResult<Self> {
        let email = Self {
            address: address.into(),
            subject: None,
            body: None,
        };
        email.validate()?;
        Ok(email)
    }

    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

impl QrPayload for EmailMessage {
    const NAME: &'static str = "mailto";

    fn try_parse(text: &str) -> ParseResult<Self> {
        let rest = strip_scheme(text.trim(), MAILTO_SCHEME)
            .ok_or_else(|| ParseError::missing_prefix(MAILTO_SCHEME))?;
        let (address, query) = rest.split_once('?').unwrap_or((rest, ""));

        let address = decode_component(address.trim())?;
        if address.is_empty() {
            return Err(ParseError::missing_field("address"));
        }

        let mut subject = None;
        let mut body = None;
        for (key, value) in query_pairs(query)? {
            match key.as_str() {
                "subject" => {
                    subject.get_or_insert(value);
                }
                "body" => {
                    body.get_or_insert(value);
                }
                _ => {}
            }
        }

        Ok(Self {
            address,
            subject,
            body,
        })
    }

    fn to_payload(&self) -> String {
        format!(
            "{MAILTO_SCHEME}{}{}",
            self.address.trim(),
            build_query(&[
                ("subject", self.subject.as_deref()),
                ("body", self.body.as_deref()),
            ])
        )
    }

    fn validate(&self) -> CodecResult<()> {
        require_non_empty("address", &self.address)
    }
}

impl_payload_text!(EmailMessage);

/// A pre-filled text message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsMessage {
    pub number: String,
    pub body: Option<String>,
}

impl SmsMessage {
    /// ## Errors
    /// Returns a validation error if the number is blank.
    pub fn new(number: impl Into<String>, body: Option<String>) -> CodecResult<Self> {
        let sms = Self {
            number: number.into(),
            body,
        };
        sms.validate()?;
        Ok(sms)
    }
}

impl QrPayload for SmsMessage {
    const NAME: &'static str = "sms";

    /// Accepts `smsto:<n>:<body>`, `sms:<n>:<body>` and `sms:<n>?body=<body>`.
    fn try_parse(text: &str) -> ParseResult<Self> {
        let text = text.trim();
        let rest = strip_scheme(text, SMSTO_SCHEME)
            .or_else(|| strip_scheme(text, SMS_SCHEME))
            .ok_or_else(|| ParseError::missing_prefix(SMS_SCHEME))?;

        // Whichever separator comes first decides the form; the other may appear in the body
        let (number, body) = match rest.find([':', '?']) {
            Some(at) if rest[at..].starts_with('?') => {
                let body = query_pairs(&rest[at + 1..])?
                    .into_iter()
                    .find_map(|(key, value)| (key == "body").then_some(value));
                (decode_component(&rest[..at])?, body)
            }
            Some(at) => (rest[..at].to_string(), Some(rest[at + 1..].to_string())),
            None => (rest.to_string(), None),
        };

        let number = number.trim().to_string();
        if number.is_empty() {
            return Err(ParseError::missing_field("number"));
        }

        Ok(Self {
            number,
            body: body.filter(|b| !b.is_empty()),
        })
    }

    fn to_payload(&self) -> String {
        match self.body.as_deref().filter(|b| !b.is_empty()) {
            Some(body) => format!("{SMSTO_SCHEME}{}:{body}", self.number.trim()),
            None => format!("{SMSTO_SCHEME}{}", self.number.trim()),
        }
    }

    fn validate(&self) -> CodecResult<()> {
        require_non_empty("number", &self.number)
    }
}

impl_payload_text!(SmsMessage);
