//! Vegetable market price SDK.
//!
//! Fetches the day's vegetable prices for an Indian city from
//! vegetablemarketprice.com, exposes them as a typed [`PriceTable`], and
//! accumulates a shopping bill over them via an append-only [`Ledger`] with
//! derived min/max/average cost totals.
//!
//! # Quick start
//!
//! ```no_run
//! use vegmarket_sdk::{Ledger, VegmarketSdk};
//!
//! let sdk = VegmarketSdk::builder().build().unwrap();
//!
//! // One GET per city; repeat fetches are served from the cache
//! let prices = sdk.fetch_prices("Ahmedabad").unwrap();
//!
//! // One ledger per user session
//! let mut bill = Ledger::new();
//! bill.add("Tomato", 2.0, &prices).unwrap();
//!
//! for row in bill.render() {
//!     println!("{}", row);
//! }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
mod html;
pub mod ledger;
pub mod models;

pub use error::{Result, VegmarketError};
pub use fetch::{parse_price_table, PriceFetcher};
pub use ledger::Ledger;
pub use models::{BillRow, BillTotals, LineItem, PriceEntry, PriceTable};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// VegmarketSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`VegmarketSdk`] instance.
///
/// Use [`VegmarketSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](VegmarketSdkBuilder::build) to create the SDK.
pub struct VegmarketSdkBuilder {
    base_url: String,
    user_agent: String,
    timeout: Duration,
    cache_ttl: Option<Duration>,
}

impl Default for VegmarketSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::BASE_URL.to_string(),
            user_agent: config::USER_AGENT.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            cache_ttl: None,
        }
    }
}

impl VegmarketSdkBuilder {
    /// Override the market site base URL.
    ///
    /// Mainly useful for pointing tests at a local mock server. Defaults to
    /// the public site.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the User-Agent header sent with every request.
    ///
    /// Defaults to a browser-like value; the market site rejects requests
    /// without one.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Expire cached price tables after `ttl`.
    ///
    /// By default cached tables are kept for the process lifetime. A zero
    /// TTL disables caching entirely.
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }

    /// Build the SDK, constructing the HTTP client and empty cache.
    ///
    /// No network traffic happens here -- price tables are fetched lazily,
    /// one request per distinct city.
    pub fn build(self) -> Result<VegmarketSdk> {
        let fetcher = PriceFetcher::new(
            self.base_url,
            self.user_agent,
            self.timeout,
            self.cache_ttl,
        )?;
        Ok(VegmarketSdk { fetcher })
    }
}

// ---------------------------------------------------------------------------
// VegmarketSdk
// ---------------------------------------------------------------------------

/// The main entry point for the vegetable market SDK.
///
/// Wraps a [`PriceFetcher`] (HTTP client plus per-city cache). The bill side
/// lives in caller-owned [`Ledger`] values -- create one per user session and
/// feed it tables fetched here.
///
/// Created via [`VegmarketSdk::builder()`]. The cache is mutex-guarded, so a
/// single instance may be shared across sessions behind an `Arc`.
pub struct VegmarketSdk {
    fetcher: PriceFetcher,
}

impl VegmarketSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> VegmarketSdkBuilder {
        VegmarketSdkBuilder::default()
    }

    /// Fetch the day's price table for a city, or return the cached one.
    ///
    /// See [`PriceFetcher::fetch`] for the error contract.
    pub fn fetch_prices(&self, city: &str) -> Result<PriceTable> {
        self.fetcher.fetch(city)
    }

    /// Drop all cached price tables, forcing fresh fetches.
    pub fn clear_cache(&self) {
        self.fetcher.clear_cache()
    }

    /// Return a reference to the underlying [`PriceFetcher`] for advanced
    /// usage.
    pub fn fetcher(&self) -> &PriceFetcher {
        &self.fetcher
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for VegmarketSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VegmarketSdk(cached_cities={})",
            self.fetcher.cached_cities()
        )
    }
}
