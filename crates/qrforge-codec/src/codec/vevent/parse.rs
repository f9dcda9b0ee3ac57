use chrono::Days;

use super::CalendarEvent;
use super::datetime::parse_event_time;
use crate::codec::error::{ParseError, ParseResult};
use crate::codec::escape::unescape_text;
use crate::codec::lexer::extract_component;

pub(super) fn parse_vevent(input: &str) -> ParseResult<CalendarEvent> {
    let component = extract_component(input, "VEVENT")?;

    let title = component
        .first_value("SUMMARY")
        .map(unescape_text)
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ParseError::missing_field("SUMMARY"))?;

    let start = component
        .first("DTSTART")
        .ok_or_else(|| ParseError::missing_field("DTSTART"))
        .and_then(parse_event_time)?;

    let end = match component.first("DTEND") {
        Some(line) => parse_event_time(line)?.instant,
        None if start.is_date => start
            .instant
            .checked_add_days(Days::new(1))
            .ok_or_else(|| ParseError::invalid_value("DTSTART too close to the end of time"))?,
        None => start.instant,
    };

    if end < start.instant {
        return Err(ParseError::invalid_value("DTEND precedes DTSTART"));
    }

    Ok(CalendarEvent {
        title,
        start: start.instant,
        end,
        location: component.first_value("LOCATION").map(unescape_text),
        description: component.first_value("DESCRIPTION").map(unescape_text),
        all_day: start.is_date,
    })
}
