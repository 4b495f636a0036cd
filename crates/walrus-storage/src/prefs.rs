//! Key-value preference stores.
//!
//! The reader persists a single preference (the display mode) through the
//! [`PreferenceStore`] trait. Two implementations are provided:
//!
//! - [`MemoryPreferences`]: lives for the process only
//! - [`FilePreferences`]: a JSON object on disk
//!
//! Preference failures are never fatal. A store that cannot be read behaves
//! as empty and a failed write is logged and dropped.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// String key-value store for user preferences.
pub trait PreferenceStore: Send + Sync {
    /// Stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
}

/// In-memory [`PreferenceStore`].
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RwLock<BTreeMap<String, String>>,
}

impl MemoryPreferences {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.write() {
            values.insert(key.to_owned(), value.to_owned());
        }
    }
}

/// File-backed [`PreferenceStore`].
///
/// Values are kept in memory and written through to a JSON object file on
/// every [`set`](PreferenceStore::set):
///
/// ```json
/// {"display_mode": "light"}
/// ```
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    values: RwLock<BTreeMap<String, String>>,
}

impl FilePreferences {
    /// Open the store at `path`, loading existing values.
    ///
    /// A missing or malformed file yields an empty store.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = load(&path);
        Self {
            path,
            values: RwLock::new(values),
        }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, values: &BTreeMap<String, String>) {
        let json = match serde_json::to_string_pretty(values) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("failed to serialize preferences: {e}");
                return;
            }
        };
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = fs::create_dir_all(parent)
        {
            tracing::warn!("failed to create preferences directory: {e}");
            return;
        }
        if let Err(e) = fs::write(&self.path, json) {
            tracing::warn!(path = %self.path.display(), "failed to write preferences: {e}");
        }
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let Ok(mut values) = self.values.write() else {
            return;
        };
        values.insert(key.to_owned(), value.to_owned());
        self.persist(&values);
    }
}

fn load(path: &Path) -> BTreeMap<String, String> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
        Err(e) => {
            tracing::warn!(path = %path.display(), "failed to read preferences: {e}");
            return BTreeMap::new();
        }
    };
    serde_json::from_str(&content).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), "ignoring malformed preferences: {e}");
        BTreeMap::new()
    })
}
