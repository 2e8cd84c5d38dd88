//! HTTP side of the fetcher.
//!
//! `Fetcher` holds everything a request needs (upstream client, config and an
//! optional store), all injected at construction. `Fetcher::router` turns it
//! into the route table: `/cotacao` for any method and an empty 404 for every
//! other path. Each request runs on its own task and shares nothing mutable.
use std::future::Future;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::{Json, Router};
use log::{error, info, warn};
use quote_common::net::QUOTE_PATH;
use quote_common::{BidResponse, QuoteError, Result};
use tokio::net::TcpListener;

use crate::config::FetcherConfig;
use crate::persist::spawn_persist;
use crate::store::QuoteStore;
use crate::upstream::UpstreamClient;

/// Serves the current bid fetched from the upstream API.
#[derive(Debug)]
pub struct Fetcher {
    upstream: UpstreamClient,
    config: FetcherConfig,
    store: Option<Arc<dyn QuoteStore>>,
}

impl Fetcher {
    /// Build a fetcher around an HTTP client, its config and an optional store.
    ///
    /// The store is only used when `config.persist_enabled` is set.
    pub fn new(
        http: reqwest::Client,
        config: FetcherConfig,
        store: Option<Arc<dyn QuoteStore>>,
    ) -> Self {
        if config.persist_enabled && store.is_none() {
            warn!("Persistence is enabled but no store was provided; quotes will not be saved");
        }
        Self {
            upstream: UpstreamClient::new(http, config.upstream_url.clone()),
            config,
            store,
        }
    }

    /// Fetch the current quote and project it to its bid.
    ///
    /// When persistence is on, the full quote is handed to a detached task after
    /// the response is built; its outcome is logged and never returned here.
    pub async fn current_bid(&self) -> Result<BidResponse> {
        let quote = self.upstream.fetch_quote(self.config.upstream_timeout).await?;
        let response = BidResponse::from(&quote);

        if self.config.persist_enabled {
            if let Some(store) = &self.store {
                spawn_persist(Arc::clone(store), quote, self.config.store_timeout);
            }
        }
        Ok(response)
    }

    /// Route table: `/cotacao` plus an empty `404` fallback.
    pub fn router(self: Arc<Self>) -> Router {
        Router::new()
            .route(QUOTE_PATH, any(quote_handler))
            .fallback(not_found)
            .with_state(self)
    }
}

/// Any failure in the quote path; rendered as an empty `500`.
#[derive(Debug)]
pub struct InternalError(QuoteError);

impl From<QuoteError> for InternalError {
    fn from(err: QuoteError) -> Self {
        InternalError(err)
    }
}

impl IntoResponse for InternalError {
    fn into_response(self) -> Response {
        error!("Failed to fetch quote: {}", self.0);
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

async fn quote_handler(
    State(fetcher): State<Arc<Fetcher>>,
) -> std::result::Result<Json<BidResponse>, InternalError> {
    let response = fetcher.current_bid().await?;
    info!("Served bid {}", response.bid);
    Ok(Json(response))
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Serve `router` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("Quote fetcher listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("Quote fetcher stopped");
    Ok(())
}
