//! HTML rendering for the table of contents.
//!
//! Produces the markup placed inside the reader's `toc` element:
//!
//! ```html
//! <div id="toc">
//!   <span class="item"><span class="num">1</span><a href="#Intro">Intro</a></span>
//!   <span class="subsection">
//!     <span class="item"><span class="num">1.1</span><a href="#Sub">Sub</a></span>
//!   </span>
//! </div>
//! ```
//!
//! Whitespace above is for illustration; the output has none.

use std::fmt::Write;

use crate::toc::TocItem;
use crate::util::escape_html;

/// Render a table of contents tree.
///
/// An empty tree renders an empty `toc` container.
#[must_use]
pub fn render_toc(items: &[TocItem]) -> String {
    let mut out = String::with_capacity(items.len() * 96 + 32);
    out.push_str(r#"<div id="toc">"#);
    render_items(items, &mut out);
    out.push_str("</div>");
    out
}

fn render_items(items: &[TocItem], out: &mut String) {
    for item in items {
        let _ = write!(
            out,
            r#"<span class="item"><span class="num">{}</span><a href="{}">{}</a></span>"#,
            escape_html(&item.number),
            escape_html(&item.href),
            escape_html(&item.title),
        );
        if !item.children.is_empty() {
            out.push_str(r#"<span class="subsection">"#);
            render_items(&item.children, out);
            out.push_str("</span>");
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::sections::Section;
    use crate::toc::build_toc;

    #[test]
    fn test_render_empty() {
        assert_eq!(render_toc(&[]), r#"<div id="toc"></div>"#);
    }

    #[test]
    fn test_render_flat() {
        let toc = build_toc(&[Section::new("Intro", 1), Section::new("Sub", 2)]);
        assert_eq!(
            render_toc(&toc),
            concat!(
                r#"<div id="toc">"#,
                r##"<span class="item"><span class="num">1</span><a href="#Intro">Intro</a></span>"##,
                r##"<span class="item"><span class="num">2</span><a href="#Sub">Sub</a></span>"##,
                "</div>",
            )
        );
    }

    #[test]
    fn test_render_nested() {
        let toc = build_toc(&[
            Section::new("A", 1),
            Section::new("B", 3),
            Section::new("C", 1),
        ]);
        assert_eq!(
            render_toc(&toc),
            concat!(
                r#"<div id="toc">"#,
                r##"<span class="item"><span class="num">1</span><a href="#A">A</a></span>"##,
                r#"<span class="subsection">"#,
                r##"<span class="item"><span class="num">1.1</span><a href="#B">B</a></span>"##,
                "</span>",
                r##"<span class="item"><span class="num">2</span><a href="#C">C</a></span>"##,
                "</div>",
            )
        );
    }

    #[test]
    fn test_render_escapes_text() {
        let toc = build_toc(&[Section::new("<b> & co", 1)]);
        let html = render_toc(&toc);
        assert!(html.contains(r##"<a href="#&lt;b&gt;-&amp;-co">&lt;b&gt; &amp; co</a>"##));
    }
}
