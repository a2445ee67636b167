use std::path::PathBuf;

use thiserror::Error;

/// A failed HTTP fetch, either of the metadata record or of the media bytes.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("{url} returned status {status} ({reason})")]
    Status {
        url: String,
        status: u16,
        /// Canonical phrase for `status`, not the phrase the server sent.
        /// reqwest does not expose the latter. Nonstandard codes get `Unknown`.
        reason: String,
    },

    /// No usable response: connection failure, timeout, or an undecodable body.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            FetchError::Request { source, .. } => source.status().map(|s| s.as_u16()),
        }
    }

    pub(crate) fn from_status(url: impl Into<String>, status: reqwest::StatusCode) -> Self {
        FetchError::Status {
            url: url.into(),
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }

    pub(crate) fn request(url: impl Into<String>, source: reqwest::Error) -> Self {
        FetchError::Request {
            url: url.into(),
            source,
        }
    }
}

/// Writing the image to disk failed. A partially written file may remain.
#[derive(Debug, Error)]
#[error("failed to write '{}': {source}", .path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// The operating system refused (or could not be asked) to change the
/// desktop background.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("desktop background change to '{}' was rejected", .path.display())]
    Rejected { path: PathBuf },

    #[error("failed to launch {program}: {source}")]
    Launch {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("setting the desktop background is not supported on {os}")]
    Unsupported { os: &'static str },
}
