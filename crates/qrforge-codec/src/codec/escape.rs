//! Backslash escaping shared by the payload formats.
//!
//! MECARD and WIFI escape their reserved delimiters with a backslash and
//! accept any escaped character on the way back in. vCard and iCalendar TEXT
//! values use the RFC 6350 / RFC 5545 rules, where `\n` means newline and an
//! unknown escape is kept verbatim.

/// Characters escaped in MECARD field values.
pub const MECARD_RESERVED: &[char] = &['\\', ';', ':', ','];

/// Characters escaped in WIFI field values.
pub const WIFI_RESERVED: &[char] = &['\\', ';', ':', ',', '"'];

/// Prefixes every reserved character with a backslash.
#[must_use]
pub fn escape_reserved(s: &str, reserved: &[char]) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        if reserved.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}

/// Drops the backslash in front of any escaped character.
///
/// A lone backslash at the end of the input is kept.
#[must_use]
pub fn unescape_reserved(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            result.push(chars.next().unwrap_or('\\'));
        } else {
            result.push(c);
        }
    }

    result
}

/// Splits on every `delim` that is not part of a backslash escape pair.
///
/// The pieces are returned still escaped. `a\\;b` splits after the escaped
/// backslash, `a\;b` does not split at all.
#[must_use]
pub fn split_unescaped(s: &str, delim: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == delim {
            parts.push(&s[start..i]);
            start = i + c.len_utf8();
        }
    }

    parts.push(&s[start..]);
    parts
}

/// Escapes a vCard/iCalendar TEXT value.
///
/// Escapes backslash, newline, comma, and semicolon.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            '\r' => {} // Skip CR (use \n for newlines)
            _ => result.push(c),
        }
    }

    result
}

/// Unescapes a vCard/iCalendar TEXT value.
///
/// Escapes: \n, \N (newline), \, (comma), \; (semicolon), \\ (backslash)
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n' | 'N') => {
                    chars.next();
                    result.push('\n');
                }
                Some(&next @ (',' | ';' | '\\')) => {
                    chars.next();
                    result.push(next);
                }
                _ => result.push(c),
            }
        } else {
            result.push(c);
        }
    }

    result
}
