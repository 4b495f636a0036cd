//! URL to route parsing.
//!
//! Site URLs have the shape
//! `<protocol>://<base_url>/<subject>/<article>#<section>`. A [`Route`] is the
//! `(subject, article, section)` triple extracted from such a URL; a URL with
//! no path segments after the base URL has no route and shows the index.

use serde::Serialize;

/// A parsed site location.
///
/// Segments are kept as they appear in the URL (percent-encoded slugs).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Route {
    /// Subject slug. Never empty for a parsed route.
    pub subject: String,
    /// Article slug, empty on a subject page.
    pub article: String,
    /// Section anchor, empty when the URL has no fragment.
    pub section: String,
}

impl Route {
    /// Create a route from its parts.
    #[must_use]
    pub fn new(
        subject: impl Into<String>,
        article: impl Into<String>,
        section: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            article: article.into(),
            section: section.into(),
        }
    }

    /// Whether both routes show the same page (section ignored).
    #[must_use]
    pub fn same_page(&self, other: &Self) -> bool {
        self.subject == other.subject && self.article == other.article
    }

    /// Site-relative path of the page, without section.
    #[must_use]
    pub fn page_path(&self) -> String {
        if self.article.is_empty() {
            self.subject.clone()
        } else {
            format!("{}/{}", self.subject, self.article)
        }
    }
}

/// Parse a full URL into a route.
///
/// The fragment becomes the section. The scheme and `base_url` prefix are
/// stripped and the remaining path is split on `/`, ignoring empty segments:
/// none means the index (`None`), one names a subject, two or more name a
/// subject and an article (extra segments are ignored).
///
/// When the URL does not start with `base_url`, everything up to the first
/// `/` after the scheme is treated as the authority and dropped instead.
/// A query string is dropped.
///
/// # Examples
///
/// ```
/// use walrus_site::{Route, parse_route};
///
/// assert_eq!(
///     parse_route("http://example.com/foo/bar#sec1", "example.com"),
///     Some(Route::new("foo", "bar", "sec1")),
/// );
/// assert_eq!(parse_route("http://example.com/", "example.com"), None);
/// ```
#[must_use]
pub fn parse_route(url: &str, base_url: &str) -> Option<Route> {
    let (location, section) = url.split_once('#').unwrap_or((url, ""));
    let location = location.split_once('?').map_or(location, |(path, _)| path);
    let location = strip_scheme(location);
    let path = strip_base(location, base_url.trim_end_matches('/'));

    let mut segments = path.split('/').filter(|s| !s.is_empty());
    let subject = segments.next()?;
    let article = segments.next().unwrap_or("");

    Some(Route::new(subject, article, section))
}

/// Whether two URLs show different pages.
///
/// Two index URLs are the same page; an index URL and a route differ;
/// otherwise subject and article must match exactly (section ignored).
#[must_use]
pub fn routes_differ(url_a: &str, url_b: &str, base_url: &str) -> bool {
    pages_differ(
        parse_route(url_a, base_url).as_ref(),
        parse_route(url_b, base_url).as_ref(),
    )
}

/// [`routes_differ`] for already parsed routes.
#[must_use]
pub fn pages_differ(a: Option<&Route>, b: Option<&Route>) -> bool {
    match (a, b) {
        (None, None) => false,
        (Some(a), Some(b)) => !a.same_page(b),
        _ => true,
    }
}

fn strip_scheme(url: &str) -> &str {
    match url.split_once("://") {
        Some((scheme, rest)) if !scheme.is_empty() && !scheme.contains('/') => rest,
        _ => url,
    }
}

fn strip_base<'a>(location: &'a str, base_url: &str) -> &'a str {
    if let Some(rest) = location.strip_prefix(base_url)
        && (rest.is_empty() || rest.starts_with('/'))
    {
        return rest;
    }
    tracing::debug!(location, base_url, "URL outside base URL, dropping authority");
    location.split_once('/').map_or("", |(_, path)| path)
}
