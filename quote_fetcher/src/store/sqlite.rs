//! Quote store backed by an embedded SQLite file.
//!
//! The pool connects lazily and the `quotes` table is created on the first
//! save, so opening the store costs nothing until a quote actually arrives.
//! Those first-use costs count against the caller's deadline.

use super::{QuoteStore, Result};
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use log::debug;
use quote_common::Quote;
use sqlx::{
    FromRow, SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::path::Path;
use tokio::sync::OnceCell;

const CREATE_TABLE: &str = r#"
    create table if not exists quotes (
        id integer primary key autoincrement,
        code text not null,
        codein text not null,
        name text not null,
        high text not null,
        low text not null,
        var_bid text not null,
        pct_change text not null,
        bid text not null,
        ask text not null,
        timestamp text not null,
        create_date text not null,
        recorded_at text not null
    )
"#;

/// A row of the `quotes` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct StoredQuote {
    /// Surrogate key.
    pub id: i64,
    /// Base currency.
    pub code: String,
    /// Quote currency.
    pub codein: String,
    /// Pair name.
    pub name: String,
    /// Session high.
    pub high: String,
    /// Session low.
    pub low: String,
    /// Absolute change of the bid.
    pub var_bid: String,
    /// Percentage change.
    pub pct_change: String,
    /// Buy price.
    pub bid: String,
    /// Sell price.
    pub ask: String,
    /// Upstream timestamp.
    pub timestamp: String,
    /// Upstream creation date.
    pub create_date: String,
    /// When the fetcher wrote the row (RFC 3339, UTC).
    pub recorded_at: String,
}

impl StoredQuote {
    /// The upstream quote this row was written from.
    pub fn into_quote(self) -> Quote {
        Quote {
            code: self.code,
            codein: self.codein,
            name: self.name,
            high: self.high,
            low: self.low,
            var_bid: self.var_bid,
            pct_change: self.pct_change,
            bid: self.bid,
            ask: self.ask,
            timestamp: self.timestamp,
            create_date: self.create_date,
        }
    }
}

/// [`QuoteStore`] writing to a SQLite database file.
#[derive(Debug)]
pub struct SqliteStore {
    pool: SqlitePool,
    schema: OnceCell<()>,
}

impl SqliteStore {
    /// Prepare a store for the database file at `path`, creating it on first use.
    ///
    /// No connection is made here.
    pub fn open_lazy(path: impl AsRef<Path>) -> Self {
        let options = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_lazy_with(options);
        Self {
            pool,
            schema: OnceCell::new(),
        }
    }

    async fn ensure_schema(&self) -> Result<()> {
        self.schema
            .get_or_try_init(|| async {
                sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
                debug!("quotes table ready");
                Ok::<_, sqlx::Error>(())
            })
            .await?;
        Ok(())
    }

    /// Number of stored quotes.
    pub async fn count(&self) -> Result<i64> {
        self.ensure_schema().await?;
        let count = sqlx::query_scalar::<_, i64>("select count(*) from quotes")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Most recently stored quote, if any.
    pub async fn latest(&self) -> Result<Option<StoredQuote>> {
        self.ensure_schema().await?;
        let row = sqlx::query_as::<_, StoredQuote>(
            "select * from quotes order by id desc limit 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}

#[async_trait]
impl QuoteStore for SqliteStore {
    async fn save(&self, quote: &Quote) -> Result<()> {
        self.ensure_schema().await?;
        sqlx::query(
            r#"
            insert into quotes
                (code, codein, name, high, low, var_bid, pct_change, bid, ask, timestamp, create_date, recorded_at)
            values (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&quote.code)
        .bind(&quote.codein)
        .bind(&quote.name)
        .bind(&quote.high)
        .bind(&quote.low)
        .bind(&quote.var_bid)
        .bind(&quote.pct_change)
        .bind(&quote.bid)
        .bind(&quote.ask)
        .bind(&quote.timestamp)
        .bind(&quote.create_date)
        .bind(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
