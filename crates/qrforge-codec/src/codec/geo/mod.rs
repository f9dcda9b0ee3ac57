//! `geo:` location URIs (RFC 5870).
//!
//! ```text
//! geo:37.7749,-122.4194,12;u=35?q=37.7749,-122.4194(Ferry%20Building)
//! ```
//!
//! The label travels in the `q` query parameter, the same way map apps
//! attach a pin name.

mod build;
mod parse;

use serde::{Deserialize, Serialize};

use super::error::ParseResult;
use super::QrPayload;
use crate::error::{CodecError, CodecResult};

pub(crate) const GEO_SCHEME: &str = "geo:";

/// A WGS-84 point with optional altitude, uncertainty and label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Degrees north, -90 to 90.
    pub latitude: f64,
    /// Degrees east, -180 to 180.
    pub longitude: f64,
    /// Human-readable pin name.
    pub label: Option<String>,
    /// Metres above the reference ellipsoid.
    pub altitude: Option<f64>,
    /// Uncertainty radius in metres.
    pub uncertainty: Option<f64>,
}

impl GeoLocation {
    /// Creates a location from coordinates.
    ///
    /// ## Errors
    /// Returns a validation error if either coordinate is out of range.
    pub fn new(latitude: f64, longitude: f64) -> CodecResult<Self> {
        let location = Self {
            latitude,
            longitude,
            label: None,
            altitude: None,
            uncertainty: None,
        };
        location.validate()?;
        Ok(location)
    }

    /// Attaches a label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Attaches an altitude.
    ///
    /// ## Errors
    /// Returns a validation error if the altitude is not finite.
    pub fn with_altitude(mut self, altitude: f64) -> CodecResult<Self> {
        self.altitude = Some(altitude);
        self.validate()?;
        Ok(self)
    }

    /// Attaches an uncertainty radius.
    ///
    /// ## Errors
    /// Returns a validation error if the radius is negative or not finite.
    pub fn with_uncertainty(mut self, uncertainty: f64) -> CodecResult<Self> {
        self.uncertainty = Some(uncertainty);
        self.validate()?;
        Ok(self)
    }

    /// Formats as a `geo:` URI.
    #[must_use]
    pub fn to_geo_uri(&self) -> String {
        build::build_geo_uri(self)
    }
}

impl QrPayload for GeoLocation {
    const NAME: &'static str = "geo";

    fn try_parse(text: &str) -> ParseResult<Self> {
        parse::parse_geo_uri(text)
    }

    fn to_payload(&self) -> String {
        self.to_geo_uri()
    }

    fn validate(&self) -> CodecResult<()> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(CodecError::invalid(
                "latitude",
                format!("{} is outside -90..=90", self.latitude),
            ));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(CodecError::invalid(
                "longitude",
                format!("{} is outside -180..=180", self.longitude),
            ));
        }
        if self.altitude.is_some_and(|a| !a.is_finite()) {
            return Err(CodecError::invalid("altitude", "must be finite"));
        }
        if self
            .uncertainty
            .is_some_and(|u| !u.is_finite() || u < 0.0)
        {
            return Err(CodecError::invalid(
                "uncertainty",
                "must be a non-negative number of metres",
            ));
        }
        Ok(())
    }
}

impl_payload_text!(GeoLocation);
