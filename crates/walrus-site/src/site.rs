//! Slug lookups over the normalized configuration.
//!
//! [`Site`] owns the [`Config`] for the session and resolves route segments
//! to subjects and articles. Slugs are compared case-insensitively, so
//! `/group-theory/cosets` finds the `Group-Theory` subject.

use walrus_config::{Article, Config, Subject};

use crate::menu::{MenuItem, SubjectListing, build_index, build_menu};

/// Result of a slug lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup<T> {
    /// The slug names an entry.
    Found(T),
    /// No entry has the slug.
    NotFound,
}

impl<T> Lookup<T> {
    /// Whether the lookup succeeded.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Convert into an `Option`.
    #[must_use]
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound => None,
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NotFound, Self::Found)
    }
}

/// An article together with the subject it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArticleRef<'a> {
    pub subject: &'a Subject,
    pub article: &'a Article,
}

/// The site tree for one reading session.
///
/// Immutable after construction; share it behind an `Arc` when needed.
#[derive(Clone, Debug)]
pub struct Site {
    config: Config,
}

impl Site {
    /// Wrap a normalized configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The normalized configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Find a subject by slug, ignoring case.
    #[must_use]
    pub fn subject_by_slug(&self, slug: &str) -> Lookup<&Subject> {
        let wanted = slug.to_lowercase();
        let found = self
            .config
            .subjects
            .iter()
            .find(|subject| subject.slug.to_lowercase() == wanted);
        if found.is_none() {
            tracing::debug!(slug, "subject not found");
        }
        found.into()
    }

    /// Find an article by subject and article slug, ignoring case.
    ///
    /// Not found when either slug does not match.
    #[must_use]
    pub fn article_by_subject_and_slug(
        &self,
        subject_slug: &str,
        article_slug: &str,
    ) -> Lookup<ArticleRef<'_>> {
        let Lookup::Found(subject) = self.subject_by_slug(subject_slug) else {
            return Lookup::NotFound;
        };
        let wanted = article_slug.to_lowercase();
        let found = subject
            .articles
            .iter()
            .find(|article| article.slug.to_lowercase() == wanted)
            .map(|article| ArticleRef { subject, article });
        if found.is_none() {
            tracing::debug!(subject = subject_slug, article = article_slug, "article not found");
        }
        found.into()
    }

    /// Every article in menu order.
    pub fn articles(&self) -> impl Iterator<Item = ArticleRef<'_>> {
        self.config.subjects.iter().flat_map(|subject| {
            subject
                .articles
                .iter()
                .map(move |article| ArticleRef { subject, article })
        })
    }

    /// Side menu entries.
    #[must_use]
    pub fn menu(&self) -> Vec<MenuItem> {
        build_menu(&self.config.subjects)
    }

    /// Index page content.
    #[must_use]
    pub fn index(&self) -> Vec<SubjectListing> {
        build_index(&self.config.subjects)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    static_assertions::assert_impl_all!(super::Site: Send, Sync);

    fn site() -> Site {
        let config = Config::from_json_str(
            r#"{
                "Title": "Notes",
                "BaseURL": "example.com",
                "Subjects": [
                    {"Title": "Group Theory", "Articles": [
                        {"Title": "Cosets"},
                        {"Title": "Sylow Theorems", "Slug": "sylow"}
                    ]},
                    {"Title": "Topology", "Articles": [{"Title": "Compactness"}]}
                ]
            }"#,
        )
        .unwrap();
        Site::new(config)
    }

    #[test]
    fn test_subject_lookup_case_insensitive() {
        let site = site();
        let subject = site.subject_by_slug("group-theory").found().unwrap();
        assert_eq!(subject.title, "Group Theory");
        assert!(site.subject_by_slug("GROUP-THEORY").is_found());
    }

    #[test]
    fn test_subject_lookup_not_found() {
        assert_eq!(site().subject_by_slug("Analysis"), Lookup::NotFound);
        assert_eq!(site().subject_by_slug(""), Lookup::NotFound);
    }

    #[test]
    fn test_article_lookup_case_insensitive() {
        let site = site();
        let found = site
            .article_by_subject_and_slug("group-THEORY", "SYLOW")
            .found()
            .unwrap();
        assert_eq!(found.subject.title, "Group Theory");
        assert_eq!(found.article.title, "Sylow Theorems");
    }

    #[test]
    fn test_article_lookup_not_found() {
        let site = site();
        assert_eq!(
            site.article_by_subject_and_slug("Group-Theory", "Rings"),
            Lookup::NotFound
        );
        assert_eq!(
            site.article_by_subject_and_slug("Analysis", "Cosets"),
            Lookup::NotFound
        );
        // Articles are scoped to their subject.
        assert_eq!(
            site.article_by_subject_and_slug("Topology", "Cosets"),
            Lookup::NotFound
        );
    }

    #[test]
    fn test_articles_in_menu_order() {
        let site = site();
        let titles: Vec<_> = site.articles().map(|a| a.article.title.as_str()).collect();
        assert_eq!(titles, vec!["Cosets", "Sylow Theorems", "Compactness"]);
    }

    #[test]
    fn test_lookup_from_option() {
        assert_eq!(Lookup::from(Some(1)), Lookup::Found(1));
        assert_eq!(Lookup::<i32>::from(None), Lookup::NotFound);
    }
}
