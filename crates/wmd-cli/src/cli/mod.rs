//! CLI for the wmd wiki media downloader.

mod interactive;

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::fs;
use std::path::PathBuf;

use wmd_core::batch::{self, DownloadTally};
use wmd_core::config;
use wmd_core::error::FetchError;
use wmd_core::fetch::RequestOptions;
use wmd_core::listing::{listing_url, HttpListingSource, ListingQuery, ListingWindow, PAGE_CAP};
use wmd_core::persist::FsMediaSink;

/// Downloads media files of a specified MIME type from a wiki's MIME search page.
#[derive(Debug, Parser)]
#[command(name = "wmd")]
#[command(
    about = "Downloads media files of a specified MIME type from a wiki's MIME search page",
    long_about = None
)]
pub struct Cli {
    /// Wiki domain, e.g. 'simple.wikipedia.org'.
    pub wiki_url: String,

    /// MIME type, e.g. 'image/png'.
    pub mime_type: String,

    /// Output directory (default: new directory named after the wiki domain).
    #[arg(short = 'd', long)]
    pub output_directory: Option<PathBuf>,

    /// Listing offset to start from.
    #[arg(short, long, default_value = "0")]
    pub offset: u64,

    /// Amount of files to download.
    #[arg(short, long, default_value = "100")]
    pub amount: u64,

    /// Print each downloaded filename.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse the command line and run; with no arguments at all, drop into the
/// interactive prompts instead.
pub fn run_from_args() -> Result<()> {
    if env::args().len() <= 1 {
        return interactive::run();
    }
    let cli = Cli::parse();
    DownloadJob::from_cli(cli)?.execute()
}

/// A fully resolved run: normalized host, concrete output directory.
pub(crate) struct DownloadJob {
    pub host: String,
    pub mime_type: String,
    pub output_dir: PathBuf,
    pub offset: u64,
    pub amount: u64,
    pub verbose: bool,
}

impl DownloadJob {
    fn from_cli(cli: Cli) -> Result<Self> {
        let host = normalize_host(&cli.wiki_url);
        anyhow::ensure!(!host.is_empty(), "wiki URL must contain a host");
        let output_dir = match cli.output_directory {
            Some(dir) => dir,
            None => default_output_dir(&host)?,
        };
        Ok(Self {
            host,
            mime_type: cli.mime_type,
            output_dir,
            offset: cli.offset,
            amount: cli.amount,
            verbose: cli.verbose,
        })
    }

    pub(crate) fn execute(&self) -> Result<()> {
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "failed to create output directory {}",
                self.output_dir.display()
            )
        })?;
        println!("Downloading media into {}...", self.output_dir.display());

        let options = RequestOptions::from_config(&cfg);
        let query = ListingQuery {
            host: self.host.clone(),
            mime_type: self.mime_type.clone(),
        };
        let source = HttpListingSource::new(options.clone());
        let sink = FsMediaSink::new(&self.output_dir, options).verbose(self.verbose);

        let tally = match batch::run(&source, &sink, &query, self.offset, self.amount) {
            Ok(tally) => tally,
            Err(err @ FetchError::Transport { .. }) => {
                let hint = hint_url(&query, self.offset, self.amount);
                return Err(anyhow::Error::new(err).context(format!(
                    "could not reach the wiki (bad URL or no internet); \
                     to check the MIME type manually, open {hint}"
                )));
            }
            Err(err) => return Err(err.into()),
        };

        match tally {
            DownloadTally::NoCandidates => {
                println!("The query didn't download anything.");
                println!(
                    "Maybe you used an invalid MIME type? Try opening this url to see the valid types:"
                );
                println!("{}", hint_url(&query, self.offset, self.amount));
            }
            DownloadTally::Count(new_files) => {
                println!("All done! {new_files} new file(s) downloaded.");
            }
        }
        Ok(())
    }
}

fn hint_url(query: &ListingQuery, offset: u64, amount: u64) -> String {
    let window = ListingWindow {
        offset,
        limit: amount.clamp(1, PAGE_CAP),
    };
    listing_url(query, window)
}

/// Reduce whatever the user typed to a bare domain: strip a leading scheme,
/// keep everything up to the first path separator.
pub(crate) fn normalize_host(input: &str) -> String {
    let stripped = input
        .strip_prefix("https://")
        .or_else(|| input.strip_prefix("http://"))
        .unwrap_or(input);
    stripped
        .split('/')
        .find(|part| !part.is_empty())
        .unwrap_or("")
        .to_string()
}

/// `<host-with-dots-as-underscores>_images` under the current directory.
pub(crate) fn default_output_dir(host: &str) -> Result<PathBuf> {
    let dir_name = format!("{}_images", host.replace('.', "_"));
    Ok(env::current_dir()?.join(dir_name))
}

#[cfg(test)]
mod tests;
