//! Content-line lexer shared by the vCard and VEVENT codecs.
//!
//! Both formats use the RFC 5545 §3.1 folding rules and the
//! `[group.]name[;param=value]*:value` content-line grammar.

use super::error::{ParseError, ParseResult};

/// Unfolds a document by removing line continuations.
///
/// Line continuations are CRLF followed by a single space or tab. Bare LF is
/// accepted as well since scanners often normalize line endings. The result
/// uses `\n` as the logical line terminator.
#[must_use]
pub fn unfold(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
                // Check for continuation (space or tab)
                if matches!(chars.peek(), Some(' ' | '\t')) {
                    chars.next(); // Skip the whitespace, continue line
                } else {
                    result.push('\n'); // End of logical line
                }
            } else {
                result.push('\n');
            }
        } else if c == '\n' {
            // Bare LF (lenient)
            if matches!(chars.peek(), Some(' ' | '\t')) {
                chars.next();
            } else {
                result.push('\n');
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// A content-line parameter (`TYPE=home,voice`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name (uppercase).
    pub name: String,
    /// Parameter values with quotes removed and caret encoding decoded.
    pub values: Vec<String>,
}

impl Parameter {
    /// Returns the first value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }
}

/// A parsed content line before value interpretation.
#[derive(Debug, Clone)]
pub struct ContentLine {
    /// Property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name (uppercase).
    pub name: String,
    /// Parameters.
    pub params: Vec<Parameter>,
    /// Raw value string.
    pub value: String,
}

impl ContentLine {
    /// Returns the first value of the named parameter.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .and_then(Parameter::value)
    }
}

/// A `BEGIN:`/`END:` delimited component pulled out of an unfolded document.
#[derive(Debug, Clone)]
pub struct Component {
    /// Properties of the component itself; nested components are skipped.
    pub properties: Vec<ContentLine>,
}

impl Component {
    /// Returns the first property with the given name.
    #[must_use]
    pub fn first(&self, name: &str) -> Option<&ContentLine> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Returns the raw value of the first non-empty property with the given name.
    #[must_use]
    pub fn first_value(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .filter(|p| p.name == name)
            .map(|p| p.value.trim())
            .find(|v| !v.is_empty())
    }
}

/// Extracts the first component named `kind` (e.g. `VEVENT`) from `input`.
///
/// Text before `BEGIN:<kind>` is ignored, which lets a VEVENT be found
/// inside a VCALENDAR wrapper. Malformed content lines are skipped.
///
/// ## Errors
/// Returns `MissingPrefix` if there is no `BEGIN:<kind>` line and
/// `UnexpectedEof` if the matching `END:<kind>` never appears.
pub fn extract_component(input: &str, kind: &str) -> ParseResult<Component> {
    let unfolded = unfold(input);
    let begin = format!("BEGIN:{kind}");
    let end = format!("END:{kind}");

    let mut lines = unfolded
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    if !lines
        .by_ref()
        .any(|(_, line)| line.eq_ignore_ascii_case(&begin))
    {
        return Err(ParseError::missing_prefix(&begin));
    }

    let mut properties = Vec::new();
    let mut depth = 0usize;

    for (line_num, line) in lines {
        if depth == 0 && line.eq_ignore_ascii_case(&end) {
            return Ok(Component { properties });
        }

        let upper = line.to_ascii_uppercase();
        if upper.starts_with("BEGIN:") {
            depth += 1;
            continue;
        }
        if upper.starts_with("END:") {
            depth = depth.saturating_sub(1);
            continue;
        }
        if depth > 0 {
            continue;
        }

        match parse_content_line(line, line_num) {
            Ok(content_line) => properties.push(content_line),
            Err(e) => tracing::debug!(line = line_num, error = %e, "Skipping malformed content line"),
        }
    }

    Err(ParseError::unexpected_eof(&end))
}

/// Parses a single content line into its components.
///
/// Format: `[group.]name[;param=value]*:value`
///
/// ## Errors
/// Returns an error if the line is malformed or missing the colon separator.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    // Find the colon separating name/params from value
    let colon_pos = find_value_separator(line).ok_or_else(|| {
        ParseError::invalid_value(format!("line {line_num}: missing colon separator"))
    })?;

    let (name_params, value) = line.split_at(colon_pos);
    let value = &value[1..]; // Skip the colon

    let (group, name_params) = parse_group(name_params);

    // Split name from parameters
    let (name, params_str) = match name_params.split_once(';') {
        Some((name, params)) => (name, Some(params)),
        None => (name_params, None),
    };

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ParseError::invalid_value(format!(
            "line {line_num}: invalid property name: {name}"
        )));
    }

    let params = match params_str {
        Some(params_str) => parse_parameters(params_str, line_num)?,
        None => Vec::new(),
    };

    Ok(ContentLine {
        group: group.map(String::from),
        name: name.to_ascii_uppercase(),
        params,
        value: value.to_string(),
    })
}

/// Finds the colon that separates name/params from value.
///
/// Must handle quoted parameter values that may contain colons.
fn find_value_separator(line: &str) -> Option<usize> {
    let mut in_quotes = false;

    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => return Some(i),
            _ => {}
        }
    }

    None
}

/// Parses optional group prefix.
fn parse_group(s: &str) -> (Option<&str>, &str) {
    // Only a dot before the first parameter can introduce a group
    let head = s.split(';').next().unwrap_or(s);
    if let Some(dot_pos) = head.find('.') {
        let potential_group = &s[..dot_pos];
        if !potential_group.is_empty()
            && potential_group
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return (Some(potential_group), &s[dot_pos + 1..]);
        }
    }
    (None, s)
}

fn parse_parameters(s: &str, line_num: usize) -> ParseResult<Vec<Parameter>> {
    let mut params = Vec::new();
    let mut remaining = s;

    while !remaining.is_empty() {
        let (name, after_eq) = remaining.split_once('=').ok_or_else(|| {
            ParseError::invalid_value(format!("line {line_num}: missing = in parameter"))
        })?;

        let (values, rest) = parse_param_values(after_eq);
        params.push(Parameter {
            name: name.to_ascii_uppercase(),
            values,
        });
        remaining = rest;
    }

    Ok(params)
}

/// Parses parameter values (comma-separated, possibly quoted).
///
/// Returns the values and the unconsumed remainder after the terminating `;`.
fn parse_param_values(s: &str) -> (Vec<String>, &str) {
    let mut values = Vec::new();
    let mut current_value = String::new();
    let mut in_quotes = false;
    let mut chars = s.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => values.push(std::mem::take(&mut current_value)),
            ';' if !in_quotes => {
                values.push(current_value);
                return (values, &s[i + 1..]);
            }
            '^' => {
                // RFC 6868 caret encoding
                match chars.peek().map(|&(_, next)| next) {
                    Some('n') => current_value.push('\n'),
                    Some('\'') => current_value.push('"'),
                    Some('^') => current_value.push('^'),
                    _ => {
                        current_value.push('^');
                        continue;
                    }
                }
                chars.next();
            }
            _ => current_value.push(c),
        }
    }

    values.push(current_value);
    (values, "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::ParseErrorKind;

    #[test]
    fn unfold_crlf() {
        assert_eq!(unfold("FN:John\r\n Doe"), "FN:JohnDoe");
    }

    #[test]
    fn unfold_bare_lf() {
        assert_eq!(unfold("FN:John\n Doe"), "FN:JohnDoe");
    }

    #[test]
    fn unfold_tab() {
        assert_eq!(unfold("FN:John\r\n\tDoe"), "FN:JohnDoe");
    }

    #[test]
    fn unfold_terminates_logical_lines() {
        assert_eq!(unfold("A:1\r\nB:2\r\n"), "A:1\nB:2\n");
    }

    #[test]
    fn parse_simple_line() {
        let line = parse_content_line("FN:John Doe", 1).unwrap();
        assert!(line.group.is_none());
        assert_eq!(line.name, "FN");
        assert!(line.params.is_empty());
        assert_eq!(line.value, "John Doe");
    }

    #[test]
    fn parse_grouped_line() {
        let line = parse_content_line("item1.TEL:+1-555-555-5555", 1).unwrap();
        assert_eq!(line.group.as_deref(), Some("item1"));
        assert_eq!(line.name, "TEL");
    }

    #[test]
    fn parse_with_parameters() {
        let line = parse_content_line("TEL;TYPE=home,voice;PREF=1:+1-555-555-5555", 1).unwrap();
        assert_eq!(line.name, "TEL");
        assert_eq!(line.params.len(), 2);
        assert_eq!(line.params[0].name, "TYPE");
        assert_eq!(line.params[0].values, vec!["home", "voice"]);
        assert_eq!(line.param("pref"), Some("1"));
        assert_eq!(line.value, "+1-555-555-5555");
    }

    #[test]
    fn parse_quoted_param_with_colon() {
        let line = parse_content_line("DTSTART;TZID=\"America/New_York\":20240101T090000", 1)
            .unwrap();
        assert_eq!(line.param("TZID"), Some("America/New_York"));
        assert_eq!(line.value, "20240101T090000");
    }

    #[test]
    fn parse_caret_encoded_param() {
        let line = parse_content_line("X-A;LABEL=\"a^nb^'c^^\":v", 1).unwrap();
        assert_eq!(line.param("LABEL"), Some("a\nb\"c^"));
    }

    #[test]
    fn parse_colon_in_value() {
        let line = parse_content_line("URL:https://example.com:8080/path", 1).unwrap();
        assert_eq!(line.value, "https://example.com:8080/path");
    }

    #[test]
    fn parse_rejects_missing_colon() {
        assert!(parse_content_line("NOT A CONTENT LINE", 3).is_err());
    }

    #[test]
    fn extract_skips_nested_components() {
        let input = "BEGIN:VEVENT\r\nSUMMARY:Outer\r\nBEGIN:VALARM\r\nSUMMARY:Inner\r\nEND:VALARM\r\nEND:VEVENT\r\n";
        let component = extract_component(input, "VEVENT").unwrap();
        assert_eq!(component.properties.len(), 1);
        assert_eq!(component.first_value("SUMMARY"), Some("Outer"));
    }

    #[test]
    fn extract_requires_end() {
        let err = extract_component("BEGIN:VCARD\nFN:x\n", "VCARD").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedEof);
    }

    #[test]
    fn extract_requires_begin() {
        let err = extract_component("FN:x\nEND:VCARD\n", "VCARD").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MissingPrefix);
    }
}
