//! Quote data model exchanged along the request chain.
//!
//! A `Quote` is what the upstream API returns: every field is kept as the exact
//! text the API sent, no numeric parsing happens anywhere. A `BidResponse` is the
//! projection the fetcher hands to the client.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;
use crate::net::UPSTREAM_PAIR_KEY;
use crate::result::Result;

/// Exchange-rate quote as published by the upstream API.
///
/// Only `bid` is mandatory; any other missing field decodes as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Base currency (e.g. `USD`).
    #[serde(default)]
    pub code: String,
    /// Quote currency (e.g. `BRL`).
    #[serde(default)]
    pub codein: String,
    /// Human-readable pair name.
    #[serde(default)]
    pub name: String,
    /// Session high.
    #[serde(default)]
    pub high: String,
    /// Session low.
    #[serde(default)]
    pub low: String,
    /// Absolute change of the bid.
    #[serde(default, rename = "varBid")]
    pub var_bid: String,
    /// Percentage change.
    #[serde(default, rename = "pctChange")]
    pub pct_change: String,
    /// Buy price of the base currency.
    pub bid: String,
    /// Sell price of the base currency.
    #[serde(default)]
    pub ask: String,
    /// Unix timestamp of the quote, as text.
    #[serde(default)]
    pub timestamp: String,
    /// Creation date reported by the API.
    #[serde(default, rename = "create_date", alias = "createDate")]
    pub create_date: String,
}

/// The two shapes accepted from the upstream API.
#[derive(Deserialize)]
#[serde(untagged)]
enum UpstreamPayload {
    Bare(Quote),
    Keyed(HashMap<String, Quote>),
}

impl Quote {
    /// Decode an upstream response body.
    ///
    /// Accepts a bare quote object as well as the API's envelope keyed by pair
    /// name (`{"USDBRL": {...}}`). Inside the envelope `USDBRL` wins, otherwise a
    /// single entry is taken as is.
    pub fn from_upstream_json(body: &[u8]) -> Result<Quote> {
        match serde_json::from_slice::<UpstreamPayload>(body)? {
            UpstreamPayload::Bare(quote) => Ok(quote),
            UpstreamPayload::Keyed(mut pairs) => {
                if let Some(quote) = pairs.remove(UPSTREAM_PAIR_KEY) {
                    return Ok(quote);
                }
                let count = pairs.len();
                let missing = || {
                    QuoteError::Format(format!(
                        "upstream payload holds {} entries and no {}",
                        count, UPSTREAM_PAIR_KEY
                    ))
                };
                if count == 1 {
                    return pairs.into_values().next().ok_or_else(missing);
                }
                Err(missing())
            }
        }
    }
}

/// Payload returned by the fetcher: the bid and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidResponse {
    /// Bid exactly as received from upstream.
    pub bid: String,
}

impl From<&Quote> for BidResponse {
    fn from(quote: &Quote) -> Self {
        BidResponse {
            bid: quote.bid.clone(),
        }
    }
}
