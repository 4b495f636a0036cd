//! Article rendering pipeline: transform, outline, render.

use crate::html::render_toc;
use crate::sections::{Section, transform};
use crate::toc::{TocItem, build_toc};

/// A fully rendered article.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedArticle {
    /// Article body with anchored headings.
    pub body: String,
    /// Headings in document order.
    pub sections: Vec<Section>,
    /// Numbered outline built from `sections`.
    pub toc: Vec<TocItem>,
    /// Markup for the `toc` element.
    pub toc_html: String,
}

/// Run raw article text through the heading transformer and TOC builder.
#[must_use]
pub fn render_article(text: &str) -> RenderedArticle {
    let result = transform(text);
    let toc = build_toc(&result.sections);
    let toc_html = render_toc(&toc);
    RenderedArticle {
        body: result.html,
        sections: result.sections,
        toc,
        toc_html,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_article() {
        let article = render_article("# Groups\nA group is a set.\n### Axioms\n# Rings\n");
        assert_eq!(
            article.sections,
            vec![
                Section::new("Groups", 1),
                Section::new("Axioms", 3),
                Section::new("Rings", 1),
            ]
        );
        assert_eq!(article.toc.len(), 2);
        assert_eq!(article.toc[0].children[0].number, "1.1");
        assert!(article.body.contains(r#"<a name="Axioms"><h3>Axioms</h3></a>"#));
        assert!(article.toc_html.starts_with(r#"<div id="toc">"#));
        assert!(article.toc_html.contains(r##"<a href="#Rings">Rings</a>"##));
    }

    #[test]
    fn test_render_article_without_headings() {
        let article = render_article("plain");
        assert_eq!(article.body, "plain");
        assert!(article.toc.is_empty());
        assert_eq!(article.toc_html, r#"<div id="toc"></div>"#);
    }
}
