//! Runtime configuration of the fetcher.
//!
//! Defaults reproduce the fixed behaviour: the public USD-BRL endpoint, a 200ms
//! upstream budget, a 10ms store budget and persistence switched off.
use std::time::Duration;

use quote_common::net::{STORE_TIMEOUT, UPSTREAM_TIMEOUT, UPSTREAM_URL};

/// Settings the `Fetcher` is constructed with.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Endpoint queried for the current quote.
    pub upstream_url: String,
    /// Budget for the whole upstream call.
    pub upstream_timeout: Duration,
    /// Whether each fetched quote is handed to the store.
    pub persist_enabled: bool,
    /// Budget for one persistence attempt.
    pub store_timeout: Duration,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            upstream_url: UPSTREAM_URL.to_string(),
            upstream_timeout: UPSTREAM_TIMEOUT,
            persist_enabled: false,
            store_timeout: STORE_TIMEOUT,
        }
    }
}

impl FetcherConfig {
    /// Point the fetcher at a different upstream endpoint.
    pub fn with_upstream_url(mut self, url: impl Into<String>) -> Self {
        self.upstream_url = url.into();
        self
    }

    /// Override the upstream budget.
    pub fn with_upstream_timeout(mut self, timeout: Duration) -> Self {
        self.upstream_timeout = timeout;
        self
    }

    /// Switch persistence on or off.
    pub fn with_persist(mut self, enabled: bool) -> Self {
        self.persist_enabled = enabled;
        self
    }

    /// Override the store budget.
    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_budgets() {
        let config = FetcherConfig::default();
        assert_eq!(config.upstream_url, UPSTREAM_URL);
        assert_eq!(config.upstream_timeout, Duration::from_millis(200));
        assert_eq!(config.store_timeout, Duration::from_millis(10));
        assert!(!config.persist_enabled);
    }
}
