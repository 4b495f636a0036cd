//! Error types for the reader.

use walrus_config::ConfigError;
use walrus_storage::StorageError;

/// Failure to obtain the site configuration.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The document was fetched but is not a valid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The document could not be fetched.
    #[error("Failed to fetch configuration: {0}")]
    Storage(#[from] StorageError),
}
