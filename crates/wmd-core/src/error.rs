//! Error taxonomy for listing and content requests.
//!
//! A `Transport` failure is fatal to the whole run (no retry). Fragments that
//! don't match and files that already exist locally are not errors at all.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure while fetching a listing page or a media file.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be completed at all: malformed host, DNS
    /// failure, no connectivity, TLS handshake failure.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// The server answered with a non-success status code.
    #[error("{url} returned HTTP {code}")]
    Status { url: String, code: u32 },

    /// Writing the downloaded content to disk failed.
    #[error("failed to write {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FetchError {
    pub(crate) fn transport(url: &str, source: curl::Error) -> Self {
        FetchError::Transport {
            url: url.to_string(),
            source,
        }
    }

    pub(crate) fn storage(path: &Path, source: io::Error) -> Self {
        FetchError::Storage {
            path: path.to_path_buf(),
            source,
        }
    }

    /// True for failures where the request never completed (as opposed to a
    /// bad status or a local write problem).
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_names_url_and_code() {
        let err = FetchError::Status {
            url: "https://wiki.example/page".to_string(),
            code: 404,
        };
        assert_eq!(
            err.to_string(),
            "https://wiki.example/page returned HTTP 404"
        );
        assert!(!err.is_transport());
    }

    #[test]
    fn storage_keeps_io_source() {
        let err = FetchError::storage(
            Path::new("/tmp/x.png"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("/tmp/x.png"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
