//! Filesystem content source.
//!
//! Provides [`FsSource`] for reading a site from a local directory, as if it
//! were served at `<protocol>://<base_url>/`.

use std::fs;
use std::path::{Component, Path, PathBuf};

use percent_encoding::percent_decode_str;

use crate::storage::{ContentSource, StorageError, StorageErrorKind, strip_scheme};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Content source reading a site tree from disk.
///
/// The URL `http://example.com/notes/Algebra/Groups.tex` with base URL
/// `example.com/notes` maps to `<root>/Algebra/Groups.tex`. URLs outside the
/// base URL, and paths that climb out of the root with `..`, are rejected.
///
/// # Example
///
/// ```no_run
/// use walrus_storage::{ContentSource, FsSource};
///
/// let source = FsSource::new("site", "example.com/notes");
/// let text = source.fetch("http://example.com/notes/./Algebra/Groups.tex")?;
/// # Ok::<(), walrus_storage::StorageError>(())
/// ```
pub struct FsSource {
    root: PathBuf,
    base_url: String,
}

impl FsSource {
    /// Create a source serving `root` at `base_url` (scheme-less).
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, base_url: &str) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Root directory of the site.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a site URL onto a file under the root.
    fn resolve(&self, url: &str) -> Result<PathBuf, StorageError> {
        let invalid = || {
            StorageError::new(StorageErrorKind::InvalidPath)
                .with_location(url)
                .with_backend(BACKEND)
        };

        let location = strip_scheme(url).unwrap_or(url);
        let relative = location
            .strip_prefix(&self.base_url)
            .and_then(|rest| rest.strip_prefix('/'))
            .ok_or_else(invalid)?;
        let relative = relative.split(['#', '?']).next().unwrap_or_default();
        let decoded = percent_decode_str(relative)
            .decode_utf8()
            .map_err(|_| invalid())?;

        let path = Path::new(decoded.as_ref());
        let escapes_root = path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)));
        if escapes_root || decoded.is_empty() {
            return Err(invalid());
        }

        Ok(self.root.join(path))
    }
}

impl ContentSource for FsSource {
    fn fetch(&self, url: &str) -> Result<String, StorageError> {
        let path = self.resolve(url)?;
        tracing::debug!(path = %path.display(), "reading");
        fs::read_to_string(&path).map_err(|e| {
            StorageError::io(e, Some(path.display().to_string())).with_backend(BACKEND)
        })
    }
}
