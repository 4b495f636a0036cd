//! Heading transformer.
//!
//! Article text is plain markup where any line starting with `#` is a heading.
//! The number of leading `#` characters is the heading level (no upper bound)
//! and the trimmed rest of the line is its title. [`transform`] replaces every
//! heading line with an anchored heading element and records the headings in
//! document order; everything else passes through untouched.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::util::{anchor_name, escape_html};

/// A line that starts with `#`. The capture holds everything after the first `#`.
static HEADING_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#(.*)$").unwrap());

/// A heading found in article text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// Heading text, trimmed.
    pub title: String,
    /// Heading level, 1 for `#`, 2 for `##` and so on.
    pub level: usize,
}

impl Section {
    /// Create a section record.
    #[must_use]
    pub fn new(title: impl Into<String>, level: usize) -> Self {
        Self {
            title: title.into(),
            level,
        }
    }

    /// Anchor name of the heading element for this section.
    #[must_use]
    pub fn anchor(&self) -> String {
        anchor_name(&self.title)
    }
}

/// Result of transforming article text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformResult {
    /// Article text with heading lines replaced by anchored headings.
    pub html: String,
    /// Headings in document order.
    pub sections: Vec<Section>,
}

/// Replace heading lines with anchored heading elements.
///
/// `## Cosets` becomes `<a name="Cosets"><h2>Cosets</h2></a>`. Heading titles
/// are emitted verbatim so inline markup (e.g. `$x^2$`) reaches the math
/// typesetter; only the anchor attribute is escaped.
///
/// # Examples
///
/// ```
/// use walrus_renderer::{Section, transform};
///
/// let result = transform("# Intro\nbody\n## Sub\nmore");
/// assert_eq!(result.sections, vec![Section::new("Intro", 1), Section::new("Sub", 2)]);
/// assert!(result.html.starts_with(r#"<a name="Intro"><h1>Intro</h1></a>"#));
/// ```
#[must_use]
pub fn transform(text: &str) -> TransformResult {
    let mut sections = Vec::new();
    let html = HEADING_LINE
        .replace_all(text, |caps: &Captures<'_>| {
            let rest = &caps[1];
            let after_marks = rest.trim_start_matches('#');
            let level = 1 + (rest.len() - after_marks.len());
            let section = Section::new(after_marks.trim(), level);
            let heading = heading_html(&section);
            sections.push(section);
            heading
        })
        .into_owned();

    TransformResult { html, sections }
}

/// Anchored heading element for a section.
fn heading_html(section: &Section) -> String {
    let mut out = String::with_capacity(section.title.len() * 2 + 32);
    let _ = write!(
        out,
        r#"<a name="{anchor}"><h{level}>{title}</h{level}></a>"#,
        anchor = escape_html(&section.anchor()),
        level = section.level,
        title = section.title,
    );
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_two_levels() {
        let result = transform("# Intro\nbody\n## Sub\nmore");
        assert_eq!(
            result.sections,
            vec![Section::new("Intro", 1), Section::new("Sub", 2)]
        );
        assert_eq!(
            result.html,
            "<a name=\"Intro\"><h1>Intro</h1></a>\nbody\n<a name=\"Sub\"><h2>Sub</h2></a>\nmore"
        );
    }

    #[test]
    fn test_level_is_unbounded() {
        let result = transform("######## Deep");
        assert_eq!(result.sections, vec![Section::new("Deep", 8)]);
        assert_eq!(result.html, r#"<a name="Deep"><h8>Deep</h8></a>"#);
    }

    #[test]
    fn test_anchor_drops_question_marks() {
        let result = transform("## Why study groups?");
        assert_eq!(
            result.html,
            r#"<a name="Why-study-groups"><h2>Why study groups?</h2></a>"#
        );
    }

    #[test]
    fn test_title_is_trimmed() {
        let result = transform("#   Spaced out   ");
        assert_eq!(result.sections, vec![Section::new("Spaced out", 1)]);
    }

    #[test]
    fn test_no_space_after_marks() {
        let result = transform("##Tight");
        assert_eq!(result.sections, vec![Section::new("Tight", 2)]);
    }

    #[test]
    fn test_inline_hash_untouched() {
        let text = "Use C# or F#\n  # indented is not a heading\nissue #42";
        let result = transform(text);
        assert!(result.sections.is_empty());
        assert_eq!(result.html, text);
    }

    #[test]
    fn test_heading_with_math_kept_verbatim() {
        let result = transform("# The map $x \\mapsto x^2$");
        assert_eq!(result.sections[0].title, "The map $x \\mapsto x^2$");
        assert!(result.html.contains("<h1>The map $x \\mapsto x^2$</h1>"));
    }

    #[test]
    fn test_anchor_attribute_escaped() {
        let result = transform("# Say \"hi\"");
        assert!(result.html.starts_with(r#"<a name="Say-&quot;hi&quot;">"#));
    }

    #[test]
    fn test_crlf_line_endings() {
        let result = transform("# One\r\ntext\r\n## Two\r\n");
        assert_eq!(
            result.sections,
            vec![Section::new("One", 1), Section::new("Two", 2)]
        );
        assert!(result.html.contains("text\r\n"));
    }

    #[test]
    fn test_empty_heading() {
        let result = transform("#\nbody");
        assert_eq!(result.sections, vec![Section::new("", 1)]);
        assert_eq!(result.html, "<a name=\"\"><h1></h1></a>\nbody");
    }

    #[test]
    fn test_no_headings() {
        let result = transform("just text\nmore text");
        assert!(result.sections.is_empty());
        assert_eq!(result.html, "just text\nmore text");
    }

    #[test]
    fn test_section_anchor() {
        assert_eq!(Section::new("Open sets?", 3).anchor(), "Open-sets");
    }
}
