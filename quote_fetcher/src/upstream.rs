//! Outbound call to the exchange-rate API.
//!
//! `UpstreamClient` owns an injected `reqwest::Client` and the target URL. A
//! fetch is one GET whose send and body read share a single deadline; anything
//! that goes wrong comes back as a `QuoteError` and is never retried.
use std::time::Duration;

use log::debug;
use quote_common::deadline::within;
use quote_common::{Quote, QuoteError, Result};

/// Stage name reported when the upstream deadline elapses.
pub const STAGE: &str = "upstream";

/// HTTP client bound to one upstream quote endpoint.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    url: String,
}

impl UpstreamClient {
    /// Create a client that will query `url` through `http`.
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    /// Fetch and decode the current quote, giving up after `budget`.
    pub async fn fetch_quote(&self, budget: Duration) -> Result<Quote> {
        let body = within(STAGE, budget, async {
            let response = self.http.get(&self.url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(QuoteError::UnexpectedStatus(status.as_u16()));
            }
            Ok(response.bytes().await?)
        })
        .await?;

        debug!("Upstream answered {} bytes", body.len());
        Quote::from_upstream_json(&body)
    }
}
