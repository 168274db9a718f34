//! Batch driver: windows in order, one file at a time.

use crate::error::FetchError;
use crate::listing::{plan_windows, ListingQuery, ListingSource};
use crate::persist::MediaSink;

/// Outcome of a run. `NoCandidates` means the listing never yielded a single
/// entry across all windows; `Count(0)` means candidates existed but every
/// one was already present locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadTally {
    NoCandidates,
    Count(u64),
}

impl DownloadTally {
    /// Record one persisted candidate (written or skipped).
    fn record(&mut self, written: bool) {
        let n = match *self {
            DownloadTally::NoCandidates => 0,
            DownloadTally::Count(n) => n,
        };
        *self = DownloadTally::Count(n + u64::from(written));
    }
}

/// Drive the listing source across `[offset, offset+amount)` and persist
/// every yielded reference, strictly in order.
///
/// Windows are processed sequentially: a window's full candidate set is
/// exhausted before the next window is requested. `amount == 0` returns
/// [`DownloadTally::NoCandidates`] with zero network activity. Any error
/// aborts the whole run.
pub fn run(
    source: &dyn ListingSource,
    sink: &dyn MediaSink,
    query: &ListingQuery,
    offset: u64,
    amount: u64,
) -> Result<DownloadTally, FetchError> {
    let mut tally = DownloadTally::NoCandidates;

    for window in plan_windows(offset, amount) {
        let references = source.fetch(query, window)?;
        for reference in &references {
            let written = sink.persist(reference)?;
            tally.record(written);
        }
    }

    if let DownloadTally::Count(new_files) = tally {
        tracing::info!(new_files, "batch complete");
    } else {
        tracing::info!("batch complete, listing yielded no candidates");
    }
    Ok(tally)
}
