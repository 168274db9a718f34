//! Media reference extraction from the raw listing page body.
//!
//! The MIME search page is not an API; each result is a `<li>` item whose
//! download anchor carries the file URL and a `title` attribute with the
//! display name. Matching is deliberately tolerant: a fragment that doesn't
//! yield both pieces is skipped, never an error.

use regex::Regex;

use crate::media::{absolutize, sanitize_title, MediaReference};

/// Extracts media references from a listing page body. The matching logic is
/// fragile against markup variation, so it lives behind this seam where it
/// can be tested without any network.
pub trait ReferenceExtractor {
    fn extract(&self, body: &str, host: &str) -> Vec<MediaReference>;
}

/// Pattern-matching extractor over the listing's anchor fragments.
pub struct RegexExtractor {
    /// One list item up to its download anchor.
    fragment: Regex,
    /// First quoted substring containing a slash: the raw file URL.
    quoted_url: Regex,
    /// `title` attribute value: the raw display name.
    title: Regex,
}

impl RegexExtractor {
    pub fn new() -> Self {
        Self {
            fragment: Regex::new(r"(?s)<li>.+?>download</a>").expect("fragment pattern"),
            quoted_url: Regex::new(r#""([^"]*/[^"]*)""#).expect("url pattern"),
            title: Regex::new(r#"title="([^"]*)""#).expect("title pattern"),
        }
    }
}

impl Default for RegexExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceExtractor for RegexExtractor {
    fn extract(&self, body: &str, host: &str) -> Vec<MediaReference> {
        self.fragment
            .find_iter(body)
            .filter_map(|m| {
                let fragment = m.as_str();
                let raw_url = self.quoted_url.captures(fragment)?.get(1)?.as_str();
                let raw_title = self.title.captures(fragment)?.get(1)?.as_str();
                Some(MediaReference {
                    url: absolutize(raw_url, host),
                    filename: sanitize_title(raw_title),
                })
            })
            .collect()
    }
}
