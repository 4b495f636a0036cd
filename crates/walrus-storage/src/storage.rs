//! Content source trait and error types.
//!
//! Provides the [`ContentSource`] trait for fetching article text and site
//! configuration by URL, along with [`StorageError`] for unified error
//! handling across backends.
//!
//! # URL Convention
//!
//! Every fetch takes a full site URL, `<protocol>://<base_url>/<path>`, the
//! same URL a browser would request. Backends that are not HTTP map the URL
//! onto their own layout.

/// Semantic error categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// Resource does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Invalid path or URL.
    InvalidPath,
    /// Backend is unreachable or failing.
    Unavailable,
    /// Operation timed out.
    Timeout,
    /// Other/unknown error category.
    Other,
}

/// Storage error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StorageError {
    /// Semantic error category.
    pub kind: StorageErrorKind,
    /// HTTP status code, when the backend answered with one.
    pub status: Option<u16>,
    /// URL or file path the operation was for.
    pub location: Option<String>,
    /// Backend identifier (e.g., "Http", "Fs", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    /// Create a new storage error.
    #[must_use]
    pub fn new(kind: StorageErrorKind) -> Self {
        Self {
            kind,
            status: None,
            location: None,
            backend: None,
            source: None,
        }
    }

    /// Attach URL or path context.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Downcast the source error to a concrete type.
    #[must_use]
    pub fn downcast_source<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.source.as_ref()?.downcast_ref()
    }

    /// Create a not found error for a location.
    #[must_use]
    pub fn not_found(location: impl Into<String>) -> Self {
        Self::new(StorageErrorKind::NotFound).with_location(location)
    }

    /// Create an error from a non-success HTTP status.
    #[must_use]
    pub fn http_status(status: u16, url: impl Into<String>) -> Self {
        let kind = match status {
            404 | 410 => StorageErrorKind::NotFound,
            401 | 403 => StorageErrorKind::PermissionDenied,
            408 | 504 => StorageErrorKind::Timeout,
            500..=599 => StorageErrorKind::Unavailable,
            _ => StorageErrorKind::Other,
        };
        let mut error = Self::new(kind).with_location(url);
        error.status = Some(status);
        error
    }

    /// Create a storage error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, location: Option<String>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => StorageErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => StorageErrorKind::PermissionDenied,
            std::io::ErrorKind::TimedOut => StorageErrorKind::Timeout,
            std::io::ErrorKind::InvalidData => StorageErrorKind::InvalidPath,
            _ => StorageErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(location) = location {
            error = error.with_location(location);
        }
        error
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind (HTTP 404): message (location: http://...)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StorageErrorKind::NotFound => "Not found",
            StorageErrorKind::PermissionDenied => "Permission denied",
            StorageErrorKind::InvalidPath => "Invalid path",
            StorageErrorKind::Unavailable => "Unavailable",
            StorageErrorKind::Timeout => "Timeout",
            StorageErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(status) = self.status {
            write!(f, " (HTTP {status})")?;
        }

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(location) = &self.location {
            write!(f, " (location: {location})")?;
        }

        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Source of article text and configuration documents.
///
/// Implementations must be usable from any thread; a reader holds one behind
/// an `Arc` for its whole session.
pub trait ContentSource: Send + Sync {
    /// Fetch the body at `url` as text.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the resource is missing, unreadable or
    /// the backend cannot be reached. Never returns partial content.
    fn fetch(&self, url: &str) -> Result<String, StorageError>;
}

/// Split `<scheme>://<rest>` and return `rest`, or `None` without a scheme.
pub(crate) fn strip_scheme(url: &str) -> Option<&str> {
    let (scheme, rest) = url.split_once("://")?;
    (!scheme.is_empty() && !scheme.contains('/')).then_some(rest)
}
