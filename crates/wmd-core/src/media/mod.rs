//! Media reference model and its two normalizers.
//!
//! A listing fragment yields a raw URL (often relative) and a raw display
//! title (HTML-escaped, possibly namespaced). `absolutize` and
//! `sanitize_title` turn those into something fetchable and saveable.

mod filename;
mod url;

pub use filename::sanitize_title;
pub use url::absolutize;

/// One downloadable media entry extracted from a listing fragment.
/// Ephemeral: produced by the extractor and consumed by the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaReference {
    /// Absolute URL of the file content.
    pub url: String,
    /// Sanitized filename to save the content under.
    pub filename: String,
}
