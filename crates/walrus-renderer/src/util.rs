//! Shared helpers for article rendering.

/// Anchor name for a heading title.
///
/// Spaces become hyphens and `?` is dropped; nothing else is escaped so that
/// the table of contents link (`#` + anchor) matches the heading anchor
/// byte for byte.
///
/// # Examples
///
/// ```
/// use walrus_renderer::anchor_name;
///
/// assert_eq!(anchor_name("Why groups?"), "Why-groups");
/// assert_eq!(anchor_name("1.2 Cosets"), "1.2-Cosets");
/// ```
#[must_use]
pub fn anchor_name(title: &str) -> String {
    title.replace(' ', "-").replace('?', "")
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
