//! Best-effort persistence of fetched quotes.
//!
//! A persistence attempt has its own budget, separate from the upstream one,
//! and its result is only ever logged. The handler spawns it after the response
//! body is built, so nothing here can change what the HTTP caller receives.
use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use quote_common::Quote;
use tokio::task::JoinHandle;

use crate::store::QuoteStore;

/// How one persistence attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    /// The store accepted the quote within budget.
    Stored,
    /// The budget elapsed before the store finished.
    TimedOut,
    /// The store returned an error.
    Failed(String),
}

/// Save `quote` into `store`, giving up after `budget`.
pub async fn persist_quote(
    store: &dyn QuoteStore,
    quote: &Quote,
    budget: Duration,
) -> PersistOutcome {
    match tokio::time::timeout(budget, store.save(quote)).await {
        Ok(Ok(())) => {
            debug!("Quote with bid {} stored", quote.bid);
            PersistOutcome::Stored
        }
        Ok(Err(e)) => {
            warn!("Failed to store quote: {}", e);
            PersistOutcome::Failed(e.to_string())
        }
        Err(_) => {
            warn!("Timed out storing quote after {}ms", budget.as_millis());
            PersistOutcome::TimedOut
        }
    }
}

/// Run [`persist_quote`] on a detached task.
pub fn spawn_persist(
    store: Arc<dyn QuoteStore>,
    quote: Quote,
    budget: Duration,
) -> JoinHandle<PersistOutcome> {
    tokio::spawn(async move { persist_quote(store.as_ref(), &quote, budget).await })
}
