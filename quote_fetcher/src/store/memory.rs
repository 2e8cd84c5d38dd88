//! Quote store kept in process memory. For testing only.

use super::{QuoteStore, Result};
use async_trait::async_trait;
use quote_common::Quote;
use std::time::Duration;
use tokio::sync::Mutex;

/// In-memory [`QuoteStore`] with an optional artificial latency per save.
#[derive(Debug, Default)]
pub struct MemoryStore {
    quotes: Mutex<Vec<Quote>>,
    latency: Option<Duration>,
}

impl MemoryStore {
    /// Create an empty store that saves immediately.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every save sleep for `latency` before recording the quote.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Snapshot of every quote saved so far.
    pub async fn quotes(&self) -> Vec<Quote> {
        self.quotes.lock().await.clone()
    }
}

#[async_trait]
impl QuoteStore for MemoryStore {
    async fn save(&self, quote: &Quote) -> Result<()> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        self.quotes.lock().await.push(quote.clone());
        Ok(())
    }
}
