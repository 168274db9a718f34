//! File persistence: the dedup check and the temp-file write cycle.
//!
//! The output directory doubles as the dedup ledger: a same-named file is
//! proof of a prior download, so it is skipped without any network access.
//! New content lands in a `.part` file and is renamed into place only after
//! a fully successful transfer.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FetchError;
use crate::fetch::{self, RequestOptions};
use crate::media::MediaReference;

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the in-flight download: appends `.part` to the final path.
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Capability for persisting one media reference. The batch driver depends
/// only on this fixed signature, not on how or where content is stored.
pub trait MediaSink {
    /// Returns `Ok(true)` if a new file was written, `Ok(false)` if a
    /// same-named file already existed (idempotent skip, no network).
    fn persist(&self, reference: &MediaReference) -> Result<bool, FetchError>;
}

/// Downloads media content into a local directory.
pub struct FsMediaSink {
    output_dir: PathBuf,
    options: RequestOptions,
    verbose: bool,
}

impl FsMediaSink {
    pub fn new(output_dir: impl Into<PathBuf>, options: RequestOptions) -> Self {
        Self {
            output_dir: output_dir.into(),
            options,
            verbose: false,
        }
    }

    /// Echo each newly written filename to stdout.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl MediaSink for FsMediaSink {
    fn persist(&self, reference: &MediaReference) -> Result<bool, FetchError> {
        let target = self.output_dir.join(&reference.filename);
        if target.is_file() {
            tracing::debug!(file = %reference.filename, "already present, skipping");
            return Ok(false);
        }

        let tmp = temp_path(&target);
        if let Err(err) = fetch::fetch_to_file(&reference.url, &self.options, &tmp) {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }

        fs::rename(&tmp, &target).map_err(|source| FetchError::Storage {
            path: target.clone(),
            source,
        })?;

        tracing::info!(file = %reference.filename, url = %reference.url, "downloaded");
        if self.verbose {
            println!("  {}", reference.filename);
        }
        Ok(true)
    }
}
