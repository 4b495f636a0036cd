//! Loading the site configuration.
//!
//! The configuration can live on disk or behind a URL. Remote documents are
//! fetched with a plain GET and parsed as JSON, or as TOML when the URL path
//! ends in `.toml`.

use std::path::Path;

use walrus_config::{CliSettings, Config};
use walrus_storage::{ContentSource, HttpSource};

use crate::error::LoadError;

/// Load the configuration from a file path or an `http(s)://` URL.
///
/// # Errors
///
/// Returns [`LoadError::Storage`] when a remote document cannot be fetched
/// and [`LoadError::Config`] when the document is missing locally, malformed
/// or fails validation.
pub fn load_config(location: &str, settings: Option<&CliSettings>) -> Result<Config, LoadError> {
    if is_remote(location) {
        load_remote_config(&HttpSource::new(), location, settings)
    } else {
        Ok(Config::load(Some(Path::new(location)), settings)?)
    }
}

/// Fetch and parse a configuration document from `source`.
///
/// # Errors
///
/// Same as [`load_config`].
pub fn load_remote_config(
    source: &dyn ContentSource,
    url: &str,
    settings: Option<&CliSettings>,
) -> Result<Config, LoadError> {
    tracing::info!(%url, "fetching configuration");
    let body = source.fetch(url)?;
    let path = url.split(['#', '?']).next().unwrap_or(url);
    let mut config = if path.to_ascii_lowercase().ends_with(".toml") {
        Config::from_toml_str(&body)?
    } else {
        Config::from_json_str(&body)?
    };
    if let Some(settings) = settings {
        config.apply_cli_settings(settings);
    }
    Ok(config)
}

fn is_remote(location: &str) -> bool {
    let lower = location.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
