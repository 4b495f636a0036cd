//! Menu and listing trees.
//!
//! Pure data for the index page, subject pages and the side menu. Rendering
//! lives with the view.

use serde::Serialize;
use walrus_config::{Direction, Subject};

/// Entry in the side menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    /// Display title.
    pub title: String,
    /// Site-relative link path.
    pub path: String,
}

/// Numbered article link in a subject listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ListingItem {
    /// Position in the subject, starting at 1.
    pub number: usize,
    /// Article title.
    pub title: String,
    /// Site-relative link path (`subject/article`).
    pub path: String,
}

/// A subject with its numbered articles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubjectListing {
    /// Subject title.
    pub title: String,
    /// Site-relative link path of the subject page.
    pub path: String,
    /// Direction of the subject page.
    pub direction: Direction,
    /// Articles in menu order.
    pub items: Vec<ListingItem>,
}

impl SubjectListing {
    /// Build the listing for one subject.
    #[must_use]
    pub fn new(subject: &Subject) -> Self {
        let items = subject
            .articles
            .iter()
            .enumerate()
            .map(|(i, article)| ListingItem {
                number: i + 1,
                title: article.title.clone(),
                path: format!("{}/{}", subject.slug, article.slug),
            })
            .collect();

        Self {
            title: subject.title.clone(),
            path: subject.slug.clone(),
            direction: subject.direction,
            items,
        }
    }
}

/// Side menu entries, one per subject.
#[must_use]
pub fn build_menu(subjects: &[Subject]) -> Vec<MenuItem> {
    subjects
        .iter()
        .map(|subject| MenuItem {
            title: subject.title.clone(),
            path: subject.slug.clone(),
        })
        .collect()
}

/// Index page content: every subject with its articles.
#[must_use]
pub fn build_index(subjects: &[Subject]) -> Vec<SubjectListing> {
    subjects.iter().map(SubjectListing::new).collect()
}
