//! Quote Client: fetch the current bid from the fetcher and save it to a file.
//!
//! One run is one request. The call to the fetcher (send and body read) gets a
//! single 300ms budget; any failure aborts before the output file is touched,
//! so the file either holds a freshly received bid or whatever it held before.
#![warn(missing_docs)]
pub mod args;

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use log::{debug, info};
use quote_common::deadline::within;
use quote_common::net::{CLIENT_TIMEOUT, QUOTE_PATH};
use quote_common::{BidResponse, QuoteError, Result};
use tempfile::NamedTempFile;

/// Stage name reported when the client deadline elapses.
pub const STAGE: &str = "fetcher";

/// Client for the fetcher's `/cotacao` endpoint.
#[derive(Debug, Clone)]
pub struct QuoteClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl QuoteClient {
    /// Create a client for the fetcher at `base_url` (e.g. `http://localhost:8080`).
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: CLIENT_TIMEOUT,
        }
    }

    /// Override the request budget.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the quote endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, QUOTE_PATH)
    }

    /// Ask the fetcher for the current bid.
    pub async fn fetch_bid(&self) -> Result<BidResponse> {
        let url = self.endpoint();
        debug!("Requesting {}", url);
        let body = within(STAGE, self.timeout, async {
            let response = self.http.get(&url).send().await?;
            let status = response.status();
            if status != reqwest::StatusCode::OK {
                return Err(QuoteError::UnexpectedStatus(status.as_u16()));
            }
            Ok(response.bytes().await?)
        })
        .await?;

        Ok(serde_json::from_slice::<BidResponse>(&body)?)
    }

    /// Fetch the bid and write it to `path`, replacing previous content.
    pub async fn run(&self, path: &Path) -> Result<BidResponse> {
        let bid = self.fetch_bid().await?;
        write_bid(path, &bid)?;
        info!("Saved {} to {}", format_bid(&bid.bid), path.display());
        Ok(bid)
    }
}

/// Line written to the output file for `bid`.
pub fn format_bid(bid: &str) -> String {
    format!("Dólar: {}", bid)
}

/// Overwrite `path` with the formatted bid.
///
/// The line goes to a temporary file next to `path` first and is then renamed
/// over it, so readers see either the old content or the complete new line.
pub fn write_bid(path: &Path, bid: &BidResponse) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(format_bid(&bid.bid).as_bytes())?;
    file.persist(path).map_err(|e| QuoteError::Io(e.error))?;
    Ok(())
}
