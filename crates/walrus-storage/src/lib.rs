//! Content access for Walrus.
//!
//! This crate provides a [`ContentSource`] trait for fetching article text and
//! configuration documents by URL, and a [`PreferenceStore`] trait for the
//! reader's persisted preferences.
//!
//! # Architecture
//!
//! The crate provides:
//! - [`HttpSource`]: plain HTTP GET through `ureq`, 30 second global timeout
//! - [`FsSource`]: the same URLs mapped onto a local site directory
//! - [`MockSource`] for testing (behind `mock` feature flag)
//! - [`MemoryPreferences`] and [`FilePreferences`]
//!
//! # Example
//!
//! ```no_run
//! use walrus_storage::{ContentSource, HttpSource};
//!
//! let source = HttpSource::new();
//! let text = source.fetch("http://example.com/notes/./Algebra/Groups.tex")?;
//! # Ok::<(), walrus_storage::StorageError>(())
//! ```

mod fs;
mod http;
#[cfg(feature = "mock")]
mod mock;
mod prefs;
mod storage;

pub use fs::FsSource;
pub use http::HttpSource;
#[cfg(feature = "mock")]
pub use mock::MockSource;
pub use prefs::{FilePreferences, MemoryPreferences, PreferenceStore};
pub use storage::{ContentSource, StorageError, StorageErrorKind};
