//! Title ↔ slug codec.
//!
//! Slugs are the URL segments that identify subjects and articles. A slug is
//! built from a human-readable title by turning spaces into hyphens and then
//! percent-encoding everything outside the URI component unreserved set.
//!
//! The mapping is lossy for titles that already contain hyphens: `"a-b"` and
//! `"a b"` share the slug `"a-b"` and both decode to `"a b"`.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters escaped inside a URI component.
///
/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string as a single URI component.
#[must_use]
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT_ENCODE_SET).to_string()
}

/// Encode a title as a slug.
///
/// # Examples
///
/// ```
/// use walrus_config::slug::encode;
///
/// assert_eq!(encode("Linear Algebra"), "Linear-Algebra");
/// assert_eq!(encode("What is 1/2?"), "What-is-1%2F2%3F");
/// ```
#[must_use]
pub fn encode(title: &str) -> String {
    encode_component(&title.replace(' ', "-"))
}

/// Decode a slug back into a title.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
///
/// # Examples
///
/// ```
/// use walrus_config::slug::decode;
///
/// assert_eq!(decode("Linear-Algebra"), "Linear Algebra");
/// assert_eq!(decode("What-is-1%2F2%3F"), "What is 1/2?");
/// ```
#[must_use]
pub fn decode(slug: &str) -> String {
    percent_decode_str(slug)
        .decode_utf8_lossy()
        .replace('-', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_replaces_spaces() {
        assert_eq!(encode("Group Theory Basics"), "Group-Theory-Basics");
    }

    #[test]
    fn test_encode_keeps_unreserved() {
        assert_eq!(encode("a_b.c!d~e*f'g(h)"), "a_b.c!d~e*f'g(h)");
    }

    #[test]
    fn test_encode_escapes_reserved() {
        assert_eq!(encode("C#/C++ & more"), "C%23%2FC%2B%2B-%26-more");
    }

    #[test]
    fn test_encode_non_ascii() {
        assert_eq!(encode("מבוא"), "%D7%9E%D7%91%D7%95%D7%90");
    }

    #[test]
    fn test_round_trip_without_hyphens() {
        for title in [
            "Intro",
            "Linear Algebra",
            "What is a group?",
            "  leading and trailing  ",
            "100% done & dusted",
            "Ünïcödé títle",
            "מבוא לתורת הקבוצות",
        ] {
            assert_eq!(decode(&encode(title)), title, "round trip of {title:?}");
        }
    }

    #[test]
    fn test_hyphenated_title_does_not_round_trip() {
        assert_eq!(decode(&encode("Real-Time Systems")), "Real Time Systems");
    }

    #[test]
    fn test_decode_invalid_utf8_is_lossy() {
        assert_eq!(decode("bad%FFbyte"), "bad\u{FFFD}byte");
    }

    #[test]
    fn test_decode_lone_percent_kept() {
        assert_eq!(decode("50%"), "50%");
    }
}
