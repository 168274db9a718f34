//! Synchronous HTTP GET plumbing over the curl easy API.
//!
//! One `Easy` handle per request, one outstanding request at a time. Follows
//! redirects, sends the configured User-Agent, and treats any non-2xx status
//! as an error.

use curl::easy::Easy;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use crate::config::WmdConfig;
use crate::error::FetchError;

/// Per-request transport settings, derived from [`WmdConfig`].
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// User-Agent header value sent with every request.
    pub user_agent: String,
    /// Connection establishment timeout.
    pub connect_timeout: Duration,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl RequestOptions {
    pub fn from_config(cfg: &WmdConfig) -> Self {
        Self {
            user_agent: cfg.user_agent.clone(),
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.request_timeout_secs),
        }
    }
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::from_config(&WmdConfig::default())
    }
}

/// Configure a handle for a GET to `url`. Setter failures surface as curl
/// errors and are mapped by the callers.
fn configured(url: &str, options: &RequestOptions) -> Result<Easy, curl::Error> {
    let mut easy = Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.useragent(&options.user_agent)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(options.connect_timeout)?;
    easy.timeout(options.timeout)?;
    Ok(easy)
}

fn check_status(easy: &mut Easy, url: &str) -> Result<(), FetchError> {
    let code = easy
        .response_code()
        .map_err(|source| FetchError::transport(url, source))?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Status {
            url: url.to_string(),
            code,
        });
    }
    Ok(())
}

/// GET `url` and return the response body as text.
///
/// Listing pages are UTF-8 in practice; anything else is decoded lossily
/// rather than failing, since the extractor only pattern-matches ASCII markup.
pub fn fetch_text(url: &str, options: &RequestOptions) -> Result<String, FetchError> {
    let mut easy =
        configured(url, options).map_err(|source| FetchError::transport(url, source))?;

    let mut body: Vec<u8> = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(|source| FetchError::transport(url, source))?;
        transfer
            .perform()
            .map_err(|source| FetchError::transport(url, source))?;
    }

    check_status(&mut easy, url)?;
    Ok(String::from_utf8_lossy(&body).into_owned())
}

/// GET `url`, streaming the body into a new file at `dest`.
///
/// `dest` is created (truncated if present) and synced before returning. The
/// caller owns cleanup of `dest` on error; nothing here removes it.
pub fn fetch_to_file(
    url: &str,
    options: &RequestOptions,
    dest: &Path,
) -> Result<(), FetchError> {
    let mut easy =
        configured(url, options).map_err(|source| FetchError::transport(url, source))?;

    let mut file = fs::File::create(dest).map_err(|source| FetchError::storage(dest, source))?;
    let mut write_error: Option<io::Error> = None;

    let performed = {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| match file.write_all(data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    write_error = Some(e);
                    Ok(0) // abort the transfer
                }
            })
            .map_err(|source| FetchError::transport(url, source))?;
        transfer.perform()
    };

    if let Err(source) = performed {
        // A write failure aborts the transfer and surfaces as a curl error;
        // report the underlying I/O problem instead when we captured one.
        return Err(match write_error.take() {
            Some(io_err) => FetchError::storage(dest, io_err),
            None => FetchError::transport(url, source),
        });
    }

    check_status(&mut easy, url)?;

    file.sync_all()
        .map_err(|source| FetchError::storage(dest, source))?;
    Ok(())
}
