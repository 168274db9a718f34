//! Interactive prompt fallback for double-click style invocations.
//!
//! Mirrors the flag-driven path but collects inputs from stdin, forces
//! verbose output, and always waits for Enter before closing so the window
//! doesn't vanish. Failures are reported here rather than propagated, so the
//! acknowledgment pause still happens.

use anyhow::{Context, Result};
use std::io::{self, Write};

use super::{default_output_dir, normalize_host, DownloadJob};

pub(crate) fn run() -> Result<()> {
    println!(
        "This tool downloads media files of a specified MIME type from a wiki's MIME search page."
    );

    let outcome = prompt_job().and_then(|job| job.execute());
    if let Err(err) = outcome {
        eprintln!("Error: {err:#}");
        eprintln!("Quitting...");
    }
    pause()
}

fn prompt_job() -> Result<DownloadJob> {
    let wiki_url = prompt("Wiki URL (e.g. 'simple.wikipedia.org'): ")?;
    let host = normalize_host(&wiki_url);
    anyhow::ensure!(!host.is_empty(), "wiki URL must contain a host");

    let mime_type = prompt("MIME type (e.g. 'image/png'): ")?;

    let amount: u64 = prompt("Amount of files to download: ")?
        .parse()
        .context("amount must be a non-negative number")?;

    // The prompt asks for a 1-based starting file; the listing offset is 0-based.
    let start: u64 = prompt(
        "Starting file (e.g. if you have downloaded 100 files, this should be '101'): ",
    )?
    .parse()
    .context("starting file must be a number")?;
    let offset = start.saturating_sub(1);

    Ok(DownloadJob {
        output_dir: default_output_dir(&host)?,
        host,
        mime_type,
        offset,
        amount,
        verbose: true,
    })
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read input")?;
    Ok(line.trim().to_string())
}

fn pause() -> Result<()> {
    println!("Press Enter to close...");
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(())
}
