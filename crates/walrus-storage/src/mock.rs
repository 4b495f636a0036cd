//! Mock content source for testing.
//!
//! Provides [`MockSource`] for unit testing without network or filesystem
//! access.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::storage::{ContentSource, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

#[derive(Clone, Debug)]
enum Entry {
    Content(String),
    Error(StorageErrorKind, Option<u16>),
}

/// Mock content source for testing.
///
/// Serves canned bodies and errors by exact URL and records every fetch.
/// Unknown URLs fail with [`StorageErrorKind::NotFound`].
///
/// # Example
///
/// ```
/// use walrus_storage::{ContentSource, MockSource, StorageErrorKind};
///
/// let source = MockSource::new()
///     .with_content("http://example.com/a.tex", "# A")
///     .with_error("http://example.com/b.tex", StorageErrorKind::Unavailable);
///
/// assert_eq!(source.fetch("http://example.com/a.tex").unwrap(), "# A");
/// assert!(source.fetch("http://example.com/b.tex").is_err());
/// assert_eq!(source.fetch_count("http://example.com/a.tex"), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockSource {
    entries: RwLock<HashMap<String, Entry>>,
    fetches: RwLock<Vec<String>>,
}

impl MockSource {
    /// Create a new empty mock source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `content` at `url`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_content(self, url: impl Into<String>, content: impl Into<String>) -> Self {
        self.set_content(url, content);
        self
    }

    /// Fail fetches of `url` with `kind`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_error(self, url: impl Into<String>, kind: StorageErrorKind) -> Self {
        self.entries
            .write()
            .unwrap()
            .insert(url.into(), Entry::Error(kind, None));
        self
    }

    /// Fail fetches of `url` with an HTTP status.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_status(self, url: impl Into<String>, status: u16) -> Self {
        let kind = StorageError::http_status(status, "").kind;
        self.entries
            .write()
            .unwrap()
            .insert(url.into(), Entry::Error(kind, Some(status)));
        self
    }

    /// Replace the content served at `url`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn set_content(&self, url: impl Into<String>, content: impl Into<String>) {
        self.entries
            .write()
            .unwrap()
            .insert(url.into(), Entry::Content(content.into()));
    }

    /// Every URL fetched so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn fetches(&self) -> Vec<String> {
        self.fetches.read().unwrap().clone()
    }

    /// Number of times `url` was fetched.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn fetch_count(&self, url: &str) -> usize {
        self.fetches
            .read()
            .unwrap()
            .iter()
            .filter(|u| *u == url)
            .count()
    }
}

impl ContentSource for MockSource {
    fn fetch(&self, url: &str) -> Result<String, StorageError> {
        self.fetches.write().unwrap().push(url.to_owned());

        match self.entries.read().unwrap().get(url) {
            Some(Entry::Content(content)) => Ok(content.clone()),
            Some(Entry::Error(kind, status)) => {
                let mut error = StorageError::new(*kind)
                    .with_location(url)
                    .with_backend(BACKEND);
                error.status = *status;
                Err(error)
            }
            None => Err(StorageError::not_found(url).with_backend(BACKEND)),
        }
    }
}
