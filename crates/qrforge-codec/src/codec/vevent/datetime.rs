//! DATE and DATE-TIME values (RFC 5545 §3.3.4, §3.3.5).

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::codec::error::{ParseError, ParseResult};
use crate::codec::lexer::ContentLine;

const DATE_FORMAT: &str = "%Y%m%d";
const LOCAL_DATE_TIME_FORMAT: &str = "%Y%m%dT%H%M%S";
const UTC_DATE_TIME_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// A parsed `DTSTART`/`DTEND` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct EventTime {
    pub instant: DateTime<Utc>,
    /// `VALUE=DATE`, i.e. no time of day.
    pub is_date: bool,
}

/// Interprets a date or date-time property.
///
/// Floating times and unknown `TZID`s are read as UTC.
pub(super) fn parse_event_time(line: &ContentLine) -> ParseResult<EventTime> {
    let value = line.value.trim();
    let is_date = line
        .param("VALUE")
        .is_some_and(|v| v.eq_ignore_ascii_case("DATE"))
        || (value.len() == 8 && !value.contains('T'));

    if is_date {
        let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map_err(|e| datetime_error(value, &e))?;
        return Ok(EventTime {
            instant: date.and_time(NaiveTime::MIN).and_utc(),
            is_date: true,
        });
    }

    if let Some(utc) = value.strip_suffix(['Z', 'z']) {
        let naive = NaiveDateTime::parse_from_str(utc, LOCAL_DATE_TIME_FORMAT)
            .map_err(|e| datetime_error(value, &e))?;
        return Ok(EventTime {
            instant: naive.and_utc(),
            is_date: false,
        });
    }

    let naive = NaiveDateTime::parse_from_str(value, LOCAL_DATE_TIME_FORMAT)
        .map_err(|e| datetime_error(value, &e))?;
    Ok(EventTime {
        instant: resolve_local(naive, line.param("TZID")),
        is_date: false,
    })
}

fn resolve_local(naive: NaiveDateTime, tzid: Option<&str>) -> DateTime<Utc> {
    let Some(tzid) = tzid else {
        return naive.and_utc();
    };

    match tzid.parse::<Tz>() {
        Ok(tz) => match tz.from_local_datetime(&naive).earliest() {
            Some(local) => local.with_timezone(&Utc),
            None => {
                // Falls in a DST gap
                tracing::debug!(tzid, %naive, "Local time does not exist, reading as UTC");
                naive.and_utc()
            }
        },
        Err(e) => {
            tracing::debug!(tzid, error = %e, "Unknown TZID, reading as UTC");
            naive.and_utc()
        }
    }
}

fn datetime_error(value: &str, cause: &chrono::ParseError) -> ParseError {
    tracing::trace!(value, error = %cause, "Date-time rejected");
    ParseError::invalid_datetime(value)
}

/// Formats an instant as `YYYYMMDDTHHMMSSZ`, dropping sub-second precision.
pub(super) fn format_utc(instant: &DateTime<Utc>) -> String {
    instant.format(UTC_DATE_TIME_FORMAT).to_string()
}

/// Formats the UTC calendar date of an instant as `YYYYMMDD`.
pub(super) fn format_date(instant: &DateTime<Utc>) -> String {
    instant.format(DATE_FORMAT).to_string()
}
