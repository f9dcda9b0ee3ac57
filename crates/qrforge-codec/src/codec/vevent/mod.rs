//! VEVENT calendar entries (RFC 5545 §3.6.1).
//!
//! Output is a bare `VEVENT` with CRLF line endings; [`CalendarEvent::to_vcalendar`]
//! wraps it in a `VCALENDAR` for importers that insist on one. Parsing
//! accepts either shape.

mod build;
mod datetime;
mod parse;

use chrono::{DateTime, Days, Utc};
use serde::{Deserialize, Serialize};

use super::QrPayload;
use super::error::ParseResult;
use crate::error::{CodecError, CodecResult};

/// A single calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub location: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub all_day: bool,
}

impl CalendarEvent {
    /// ## Summary
    /// Creates a timed event.
    ///
    /// ## Errors
    /// Returns a validation error if the title is blank or `end` precedes `start`.
    pub fn new(
        title: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> CodecResult<Self> {
        let event = Self {
            title: title.into(),
            start,
            end,
            location: None,
            description: None,
            all_day: false,
        };
        event.validate()?;
        Ok(event)
    }

    /// ## Summary
    /// Creates an all-day event spanning `days` calendar days from the UTC
    /// date of `start`.
    ///
    /// ## Errors
    /// Returns a validation error if the title is blank or `days` is zero.
    pub fn all_day(title: impl Into<String>, start: DateTime<Utc>, days: u32) -> CodecResult<Self> {
        if days == 0 {
            return Err(CodecError::invalid("days", "must be at least 1"));
        }
        let start = start
            .date_naive()
            .and_time(chrono::NaiveTime::MIN)
            .and_utc();
        let end = start
            .checked_add_days(Days::new(u64::from(days)))
            .ok_or_else(|| CodecError::invalid("days", "end date out of range"))?;

        let event = Self {
            title: title.into(),
            start,
            end,
            location: None,
            description: None,
            all_day: true,
        };
        event.validate()?;
        Ok(event)
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Stable identifier derived from the title and start second.
    #[must_use]
    pub fn uid(&self) -> String {
        build::event_uid(self)
    }

    /// Formats as a bare `VEVENT`.
    #[must_use]
    pub fn to_vevent(&self) -> String {
        build::build_vevent(self)
    }

    /// Formats as a `VCALENDAR` containing this event.
    #[must_use]
    pub fn to_vcalendar(&self) -> String {
        build::build_vcalendar(self)
    }
}

impl QrPayload for CalendarEvent {
    const NAME: &'static str = "vevent";

    fn try_parse(text: &str) -> ParseResult<Self> {
        parse::parse_vevent(text)
    }

    fn to_payload(&self) -> String {
        self.to_vevent()
    }

    fn validate(&self) -> CodecResult<()> {
        if self.title.trim().is_empty() {
            return Err(CodecError::invalid("title", "must not be empty"));
        }
        if self.end < self.start {
            return Err(CodecError::invalid("end", "must not precede start"));
        }
        Ok(())
    }
}

impl_payload_text!(CalendarEvent);
