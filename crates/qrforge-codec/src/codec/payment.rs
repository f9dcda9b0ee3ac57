//! BIP21-style cryptocurrency payment URIs.
//!
//! `<scheme>:<address>[?amount=..&label=..&message=..]`. The same shape is
//! used by the other coins wallets commonly scan, so one type covers them
//! all with [`Currency`] selecting the scheme.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::QrPayload;
use super::error::{ParseError, ParseResult};
use super::uri::{build_query, decode_component, query_pairs, strip_scheme};
use crate::error::{CodecError, CodecResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Bitcoin,
    BitcoinCash,
    Litecoin,
    Ethereum,
    Dogecoin,
}

impl Currency {
    pub const ALL: [Self; 5] = [
        Self::Bitcoin,
        Self::BitcoinCash,
        Self::Litecoin,
        Self::Ethereum,
        Self::Dogecoin,
    ];

    /// URI scheme without the trailing colon.
    #[must_use]
    pub const fn scheme(self) -> &'static str {
        match self {
            Self::Bitcoin => "bitcoin",
            Self::BitcoinCash => "bitcoincash",
            Self::Litecoin => "litecoin",
            Self::Ethereum => "ethereum",
            Self::Dogecoin => "dogecoin",
        }
    }

    /// Finds the currency whose scheme prefixes `text`, returning the rest.
    fn split_scheme(text: &str) -> Option<(Self, &str)> {
        // `bitcoin` is a prefix of `bitcoincash`, so the colon must match too
        Self::ALL.into_iter().find_map(|currency| {
            let rest = strip_scheme(text, currency.scheme())?;
            rest.strip_prefix(':').map(|rest| (currency, rest))
        })
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheme())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub currency: Currency,
    pub address: String,
    /// Non-negative decimal in the currency's main unit, kept as text so
    /// no precision is lost.
    pub amount: Option<String>,
    pub label: Option<String>,
    pub message: Option<String>,
}

impl PaymentRequest {
    /// ## Errors
    /// Returns a validation error if the address is blank.
    pub fn new(currency: Currency, address: impl Into<String>) -> CodecResult<Self> {
        let request = Self {
            currency,
            address: address.into(),
            amount: None,
            label: None,
            message: None,
        };
        request.validate()?;
        Ok(request)
    }

    /// ## Errors
    /// Returns a validation error if `amount` is not a non-negative decimal.
    pub fn with_amount(mut self, amount: impl Into<String>) -> CodecResult<Self> {
        let amount = amount.into();
        if !is_decimal(&amount) {
            return Err(CodecError::invalid("amount", format!("{amount:?} is not a decimal")));
        }
        self.amount = Some(amount);
        Ok(self)
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Digits with at most one `.`, and at least one digit overall.
fn is_decimal(s: &str) -> bool {
    let (whole, fraction) = s.split_once('.').unwrap_or((s, ""));
    !(whole.is_empty() && fraction.is_empty())
        && whole.bytes().all(|b| b.is_ascii_digit())
        && fraction.bytes().all(|b| b.is_ascii_digit())
}

impl QrPayload for PaymentRequest {
    const NAME: &'static str = "payment";

    fn try_parse(text: &str) -> ParseResult<Self> {
        let (currency, rest) = Currency::split_scheme(text.trim())
            .ok_or_else(|| ParseError::missing_prefix("bitcoin:"))?;
        let (address, query) = rest.split_once('?').unwrap_or((rest, ""));

        let address = decode_component(address.trim())?;
        if address.is_empty() {
            return Err(ParseError::missing_field("address"));
        }

        let mut request = Self {
            currency,
            address,
            amount: None,
            label: None,
            message: None,
        };

        for (key, value) in query_pairs(query)? {
            let slot = match key.as_str() {
                "amount" => {
                    if !is_decimal(&value) {
                        return Err(ParseError::invalid_value(format!(
                            "amount {value:?} is not a decimal"
                        )));
                    }
                    &mut request.amount
                }
                "label" => &mut request.label,
                "message" => &mut request.message,
                _ => continue,
            };
            slot.get_or_insert(value);
        }

        Ok(request)
    }

    fn to_payload(&self) -> String {
        format!(
            "{}:{}{}",
            self.currency.scheme(),
            self.address.trim(),
            build_query(&[
                ("amount", self.amount.as_deref()),
                ("label", self.label.as_deref()),
                ("message", self.message.as_deref()),
            ])
        )
    }

    fn validate(&self) -> CodecResult<()> {
        if self.address.trim().is_empty() {
            return Err(CodecError::invalid("address", "must not be empty"));
        }
        if let Some(amount) = &self.amount
            && !is_decimal(amount)
        {
            return Err(CodecError::invalid("amount", format!("{amount:?} is not a decimal")));
        }
        Ok(())
    }
}

impl_payload_text!(PaymentRequest);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::ParseErrorKind;

    const ADDRESS: &str = "1BoatSLRHtKNngkdXEeobR76b53LETtpyT";

    #[test]
    fn parses_bip21() {
        let request = PaymentRequest::try_parse(&format!(
            "bitcoin:{ADDRESS}?amount=0.005&label=Coffee%20shop&message=Latte"
        ))
        .unwrap();
        assert_eq!(request.currency, Currency::Bitcoin);
        assert_eq!(request.address, ADDRESS);
        assert_eq!(request.amount.as_deref(), Some("0.005"));
        assert_eq!(request.label.as_deref(), Some("Coffee shop"));
        assert_eq!(request.message.as_deref(), Some("Latte"));
    }

    #[test]
    fn scheme_is_case_insensitive() {
        let request = PaymentRequest::try_parse(&format!("BITCOIN:{ADDRESS}")).unwrap();
        assert_eq!(request.currency, Currency::Bitcoin);
    }

    #[test]
    fn bitcoincash_is_not_bitcoin() {
        let request = PaymentRequest::try_parse("bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a").unwrap();
        assert_eq!(request.currency, Currency::BitcoinCash);
        assert_eq!(request.address, "qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a");
    }

    #[test]
    fn rejects_bad_amount() {
        let err = PaymentRequest::try_parse(&format!("bitcoin:{ADDRESS}?amount=-1")).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidValue);
        assert!(PaymentRequest::new(Currency::Litecoin, ADDRESS)
            .unwrap()
            .with_amount("1.2.3")
            .is_err());
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(PaymentRequest::try_parse("monero:abc").is_err());
        assert!(PaymentRequest::try_parse("bitcoin:").is_err());
    }

    #[test]
    fn builds_uri() {
        let request = PaymentRequest::new(Currency::Dogecoin, "DH5yaieqoZN36fDVciNyRueRGvGLR3mr7L")
            .unwrap()
            .with_amount("42")
            .unwrap()
            .with_message("Thanks & bye");
        assert_eq!(
            request.to_payload(),
            "dogecoin:DH5yaieqoZN36fDVciNyRueRGvGLR3mr7L?amount=42&message=Thanks%20%26%20bye"
        );
    }

    #[test]
    fn decimal_forms() {
        assert!(is_decimal("1"));
        assert!(is_decimal("0.5"));
        assert!(is_decimal(".5"));
        assert!(is_decimal("5."));
        assert!(!is_decimal("."));
        assert!(!is_decimal(""));
        assert!(!is_decimal("1e3"));
    }
}
