//! Command-line arguments for the Quote Fetcher.
//!
//! Every flag has a default, so running the binary bare gives the fixed
//! behaviour: port 8080, the public USD-BRL endpoint and no persistence.
use clap::Parser;
use quote_common::net::{DB_FILE, FETCHER_PORT, UPSTREAM_URL, addr};
use std::path::PathBuf;

use crate::config::FetcherConfig;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Address to listen on.
    #[clap(long, default_value_t = addr("0.0.0.0", FETCHER_PORT))]
    pub bind: String,

    /// Endpoint returning the current USD-BRL quote.
    #[clap(long, default_value = UPSTREAM_URL)]
    pub upstream_url: String,

    /// Save every fetched quote into the embedded database.
    #[clap(long)]
    pub persist: bool,

    /// Database file used with `--persist`.
    #[clap(long, default_value = DB_FILE)]
    pub db_path: PathBuf,
}

impl Args {
    /// Fetcher settings derived from the flags. Deadlines keep their defaults.
    pub fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig::default()
            .with_upstream_url(self.upstream_url.trim())
            .with_persist(self.persist)
    }
}
