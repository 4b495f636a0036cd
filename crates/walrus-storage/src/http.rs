//! HTTP content source.
//!
//! [`HttpSource`] issues plain GET requests through a shared `ureq` agent.
//! Non-success statuses become [`StorageError`]s carrying the status code;
//! the body of an error response is never returned as content.

use std::time::Duration;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use ureq::Agent;

use crate::storage::{ContentSource, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Http";

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Characters escaped in request URLs. Article paths are built from titles,
/// so spaces and quotes are common; `/`, `:` and `%` are left alone.
const URL_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Content source backed by HTTP GET.
pub struct HttpSource {
    agent: Agent,
}

impl HttpSource {
    /// Create a source with the default 30 second global timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT))
    }

    /// Create a source with a custom global timeout.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent }
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<String, StorageError> {
        let request_url = utf8_percent_encode(url, URL_ENCODE_SET).to_string();
        tracing::debug!(url = %request_url, "GET");

        let response = self
            .agent
            .get(&request_url)
            .call()
            .map_err(|e| transport_error(e, url))?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(StorageError::http_status(status, url).with_backend(BACKEND));
        }

        response
            .into_body()
            .read_to_string()
            .map_err(|e| transport_error(e, url))
    }
}

/// Map a transport-level `ureq` failure onto a storage error.
fn transport_error(err: ureq::Error, url: &str) -> StorageError {
    let kind = match &err {
        ureq::Error::Timeout(_) => StorageErrorKind::Timeout,
        ureq::Error::HostNotFound | ureq::Error::ConnectionFailed => {
            StorageErrorKind::Unavailable
        }
        ureq::Error::BadUri(_) => StorageErrorKind::InvalidPath,
        _ => StorageErrorKind::Other,
    };
    StorageError::new(kind)
        .with_location(url)
        .with_backend(BACKEND)
        .with_source(err)
}
