//! Helpers for the URI-shaped payloads (`geo:`, `tel:`, `mailto:`, `sms:`,
//! payment schemes).

use super::error::{ParseError, ParseResult};

/// Strips `scheme` from the front of `input`, ignoring ASCII case.
#[must_use]
pub fn strip_scheme<'a>(input: &'a str, scheme: &str) -> Option<&'a str> {
    let head = input.get(..scheme.len())?;
    head.eq_ignore_ascii_case(scheme)
        .then(|| &input[scheme.len()..])
}

/// Percent-decodes a URI component.
///
/// ## Errors
/// Returns `InvalidValue` if the decoded bytes are not UTF-8.
pub fn decode_component(s: &str) -> ParseResult<String> {
    urlencoding::decode(s)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ParseError::invalid_value(format!("bad percent-encoding in {s:?}: {e}")))
}

/// Splits a query string into decoded `(key, value)` pairs.
///
/// Keys are returned lowercased. A pair without `=` gets an empty value.
///
/// ## Errors
/// Returns `InvalidValue` if a component is not valid percent-encoded UTF-8.
pub fn query_pairs(query: &str) -> ParseResult<Vec<(String, String)>> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            Ok((
                decode_component(key)?.to_ascii_lowercase(),
                decode_component(value)?,
            ))
        })
        .collect()
}

/// Joins already-named parameters into `?k=v&k=v`, percent-encoding values.
///
/// Returns an empty string when there is nothing to append.
#[must_use]
pub fn build_query(params: &[(&str, Option<&str>)]) -> String {
    let encoded: Vec<String> = params
        .iter()
        .filter_map(|(key, value)| value.map(|v| format!("{key}={}", urlencoding::encode(v))))
        .collect();

    if encoded.is_empty() {
        String::new()
    } else {
        format!("?{}", encoded.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_scheme_is_case_insensitive() {
        assert_eq!(strip_scheme("GEO:1,2", "geo:"), Some("1,2"));
        assert_eq!(strip_scheme("geo:1,2", "geo:"), Some("1,2"));
        assert_eq!(strip_scheme("ge", "geo:"), None);
        assert_eq!(strip_scheme("tel:1", "geo:"), None);
    }

    #[test]
    fn strip_scheme_handles_multibyte_input() {
        assert_eq!(strip_scheme("日本語", "geo:"), None);
    }

    #[test]
    fn query_pairs_decodes() {
        let pairs = query_pairs("Subject=Hello%20there&body=a%26b&flag").unwrap();
        assert_eq!(
            pairs,
            vec![
                ("subject".to_string(), "Hello there".to_string()),
                ("body".to_string(), "a&b".to_string()),
                ("flag".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn query_pairs_rejects_invalid_utf8() {
        assert!(query_pairs("q=%FF").is_err());
    }

    #[test]
    fn build_query_skips_missing() {
        assert_eq!(
            build_query(&[("amount", Some("1.5")), ("label", None), ("message", Some("a b"))]),
            "?amount=1.5&message=a%20b"
        );
        assert_eq!(build_query(&[("label", None)]), "");
    }
}
