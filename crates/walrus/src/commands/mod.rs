//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod mode;
pub(crate) mod render;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use walrus_config::{CliSettings, Config};
use walrus_storage::{
    ContentSource, FilePreferences, FsSource, HttpSource, MemoryPreferences, PreferenceStore,
};

pub(crate) use check::CheckArgs;
pub(crate) use mode::ModeArgs;
pub(crate) use render::RenderArgs;

use crate::error::CliError;

/// File holding persisted preferences inside the state directory.
const PREFS_FILE: &str = "prefs.json";

/// Load the configuration from a path, a URL, or by discovery.
fn load_config(location: Option<&str>, settings: &CliSettings) -> Result<Config, CliError> {
    match location {
        Some(location) => Ok(walrus_reader::load_config(location, Some(settings))?),
        None => Ok(Config::load(None, Some(settings))?),
    }
}

/// Article source: a local directory when `root` is set, HTTP otherwise.
fn content_source(root: Option<&Path>, config: &Config) -> Arc<dyn ContentSource> {
    match root {
        Some(root) => Arc::new(FsSource::new(root, &config.base_url)),
        None => Arc::new(HttpSource::new()),
    }
}

/// Preference store: a JSON file under `state` when set, in memory otherwise.
fn preferences(state: Option<&Path>) -> Result<Arc<dyn PreferenceStore>, CliError> {
    match state {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            Ok(Arc::new(FilePreferences::open(prefs_path(dir))))
        }
        None => Ok(Arc::new(MemoryPreferences::new())),
    }
}

fn prefs_path(state: &Path) -> PathBuf {
    state.join(PREFS_FILE)
}
