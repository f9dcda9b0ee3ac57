//! `WIFI:` network credentials.
//!
//! ```text
//! WIFI:T:WPA;S:MyNetwork;P:password123;H:true;;
//! ```
//!
//! Fields may appear in any order; values escape `\ ; : , "` with a backslash.

mod build;
mod parse;

use std::fmt;

use serde::{Deserialize, Serialize};

use super::QrPayload;
use super::error::ParseResult;
use crate::error::{CodecError, CodecResult};

pub(crate) const WIFI_PREFIX: &str = "WIFI:";

/// Network authentication type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SecurityType {
    #[default]
    Open,
    Wep,
    Wpa,
}

impl SecurityType {
    /// Token written after `T:`.
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Open => "nopass",
            Self::Wep => "WEP",
            Self::Wpa => "WPA",
        }
    }

    /// Maps a `T:` token to a security type.
    ///
    /// Every WPA generation (including SAE and enterprise) is `Wpa`; anything
    /// unrecognized is treated as an open network.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        let token = token.trim().to_ascii_uppercase();
        if token == "WEP" {
            Self::Wep
        } else if token.starts_with("WPA") || token == "SAE" {
            Self::Wpa
        } else {
            Self::Open
        }
    }
}

impl fmt::Display for SecurityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// Credentials for joining a wireless network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiCredentials {
    pub ssid: String,
    pub password: Option<String>,
    #[serde(default)]
    pub security: SecurityType,
    #[serde(default)]
    pub hidden: bool,
}

impl WifiCredentials {
    /// ## Summary
    /// Creates credentials for a visible network.
    ///
    /// ## Errors
    /// Returns a validation error if the SSID is empty.
    pub fn new(
        ssid: impl Into<String>,
        password: Option<String>,
        security: SecurityType,
    ) -> CodecResult<Self> {
        let credentials = Self {
            ssid: ssid.into(),
            password: password.filter(|p| !p.is_empty()),
            security,
            hidden: false,
        };
        credentials.validate()?;
        Ok(credentials)
    }

    /// Marks the network as hidden (not broadcasting its SSID).
    #[must_use]
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Formats as a `WIFI:` string.
    #[must_use]
    pub fn to_wifi_string(&self) -> String {
        build::build_wifi_string(self)
    }
}

impl QrPayload for WifiCredentials {
    const NAME: &'static str = "wifi";

    fn try_parse(text: &str) -> ParseResult<Self> {
        parse::parse_wifi_string(text)
    }

    fn to_payload(&self) -> String {
        self.to_wifi_string()
    }

    fn validate(&self) -> CodecResult<()> {
        if self.ssid.is_empty() {
            return Err(CodecError::invalid("ssid", "must not be empty"));
        }
        Ok(())
    }
}

impl_payload_text!(WifiCredentials);
