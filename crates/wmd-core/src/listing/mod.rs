//! MIME search listing: pagination windows and page fetching.
//!
//! The wiki's `Special:MIMESearch` page is paginated with `offset`/`limit`
//! query parameters and caps each page at [`PAGE_CAP`] entries. Larger
//! requests are split into consecutive windows.

mod extract;

pub use extract::{ReferenceExtractor, RegexExtractor};

use crate::error::FetchError;
use crate::fetch::{self, RequestOptions};
use crate::media::MediaReference;

/// Server-enforced page size cap for MIME search results.
pub const PAGE_CAP: u64 = 5000;

/// Which wiki and which media type to list.
#[derive(Debug, Clone)]
pub struct ListingQuery {
    /// Bare wiki domain, e.g. `simple.wikipedia.org`.
    pub host: String,
    /// Media type filter, e.g. `image/png`.
    pub mime_type: String,
}

/// One page of search results: [offset, offset+limit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingWindow {
    pub offset: u64,
    /// Entry count for this page; never exceeds [`PAGE_CAP`].
    pub limit: u64,
}

/// Listing page URL for one window.
pub fn listing_url(query: &ListingQuery, window: ListingWindow) -> String {
    format!(
        "https://{}/wiki/Special:MIMESearch?mime={}&offset={}&limit={}",
        query.host, query.mime_type, window.offset, window.limit
    )
}

/// Partition `[offset, offset+amount)` into consecutive windows of at most
/// [`PAGE_CAP`] entries; the last window may be smaller. Returns an empty
/// plan when `amount` is 0.
pub fn plan_windows(offset: u64, amount: u64) -> Vec<ListingWindow> {
    let mut out = Vec::new();
    let mut start = offset;
    let end = offset.saturating_add(amount);
    while start < end {
        let limit = (end - start).min(PAGE_CAP);
        out.push(ListingWindow {
            offset: start,
            limit,
        });
        start += limit;
    }
    out
}

/// Capability seam for fetching one window of media references. The batch
/// driver only depends on this trait, which keeps the fragile HTML matching
/// out of its tests.
pub trait ListingSource {
    /// Fetch and parse one listing window. An empty vec is a valid result
    /// (page past the end, or no files of this type) and is distinct from a
    /// transport failure.
    fn fetch(
        &self,
        query: &ListingQuery,
        window: ListingWindow,
    ) -> Result<Vec<MediaReference>, FetchError>;
}

/// Fetches listing pages over HTTP and runs the extractor over the body.
pub struct HttpListingSource {
    options: RequestOptions,
    extractor: RegexExtractor,
}

impl HttpListingSource {
    pub fn new(options: RequestOptions) -> Self {
        Self {
            options,
            extractor: RegexExtractor::new(),
        }
    }
}

impl ListingSource for HttpListingSource {
    fn fetch(
        &self,
        query: &ListingQuery,
        window: ListingWindow,
    ) -> Result<Vec<MediaReference>, FetchError> {
        let url = listing_url(query, window);
        tracing::debug!(%url, "fetching listing page");
        let body = fetch::fetch_text(&url, &self.options)?;
        let refs = self.extractor.extract(&body, &query.host);
        tracing::debug!(
            offset = window.offset,
            limit = window.limit,
            candidates = refs.len(),
            "listing window parsed"
        );
        Ok(refs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_url_format() {
        let query = ListingQuery {
            host: "simple.wikipedia.org".to_string(),
            mime_type: "image/png".to_string(),
        };
        let window = ListingWindow {
            offset: 100,
            limit: 50,
        };
        assert_eq!(
            listing_url(&query, window),
            "https://simple.wikipedia.org/wiki/Special:MIMESearch?mime=image/png&offset=100&limit=50"
        );
    }

    #[test]
    fn plan_windows_small_amount_single_window() {
        let windows = plan_windows(0, 100);
        assert_eq!(
            windows,
            vec![ListingWindow {
                offset: 0,
                limit: 100
            }]
        );
    }

    #[test]
    fn plan_windows_exact_cap() {
        let windows = plan_windows(0, PAGE_CAP);
        assert_eq!(
            windows,
            vec![ListingWindow {
                offset: 0,
                limit: PAGE_CAP
            }]
        );
    }

    #[test]
    fn plan_windows_splits_above_cap() {
        let windows = plan_windows(30, 12_000);
        assert_eq!(windows.len(), 3);
        assert_eq!(
            windows[0],
            ListingWindow {
                offset: 30,
                limit: 5000
            }
        );
        assert_eq!(
            windows[1],
            ListingWindow {
                offset: 5030,
                limit: 5000
            }
        );
        assert_eq!(
            windows[2],
            ListingWindow {
                offset: 10_030,
                limit: 2000
            }
        );
    }

    #[test]
    fn plan_windows_contiguous_non_overlapping_sum() {
        let offset = 17;
        let amount = 23_456;
        let windows = plan_windows(offset, amount);

        let mut expected_offset = offset;
        let mut total = 0;
        for w in &windows {
            assert_eq!(w.offset, expected_offset, "offsets must be contiguous");
            assert!(w.limit >= 1 && w.limit <= PAGE_CAP);
            expected_offset += w.limit;
            total += w.limit;
        }
        assert_eq!(total, amount, "limits must sum to the requested amount");
    }

    #[test]
    fn plan_windows_zero_amount_is_empty() {
        assert!(plan_windows(0, 0).is_empty());
        assert!(plan_windows(500, 0).is_empty());
    }
}
