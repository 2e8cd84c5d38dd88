//! Command-line arguments for the Quote Client.
//!
//! This module defines the CLI interface using `clap`. Both flags default to the
//! fixed values, so a bare run talks to `http://localhost:8080` and writes
//! `cotacao.txt` in the working directory.
use clap::Parser;
use quote_common::net::{OUTPUT_FILE, local_fetcher_url};
use std::path::PathBuf;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the quote fetcher.
    #[clap(long, default_value_t = local_fetcher_url())]
    pub server_url: String,

    /// File the bid is written to.
    #[clap(long, default_value = OUTPUT_FILE)]
    pub output: String,
}

impl Args {
    /// Output path with surrounding whitespace and matching quotes stripped.
    ///
    /// This allows passing Windows paths in quotes without breaking parsing.
    pub fn output_path(&self) -> PathBuf {
        let trimmed = self.output.trim();
        let no_quotes = trimmed
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap_or(trimmed);
        PathBuf::from(no_quotes)
    }
}
