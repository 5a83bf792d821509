//! Price table fetching: one GET per uncached city, HTML table parse,
//! memoized result.

use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, warn};

use crate::cache::TableCache;
use crate::config;
use crate::error::{Result, VegmarketError};
use crate::html;
use crate::models::{PriceEntry, PriceTable};

/// Fetches and caches per-city vegetable price tables.
///
/// Each uncached city costs exactly one blocking GET to the market site.
/// Results are memoized in a [`TableCache`] keyed by the normalized city
/// string, so repeated fetches within the cache window are free.
pub struct PriceFetcher {
    client: Client,
    base_url: String,
    cache: TableCache,
}

impl PriceFetcher {
    pub fn new(
        base_url: String,
        user_agent: String,
        timeout: Duration,
        cache_ttl: Option<Duration>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            client,
            base_url,
            cache: TableCache::new(cache_ttl),
        })
    }

    /// Fetch the price table for `city`, or return the cached one.
    ///
    /// The city is normalized (lowercased, trimmed) before use as both URL
    /// segment and cache key, so `" Ahmedabad "` and `"ahmedabad"` share an
    /// entry.
    ///
    /// # Errors
    ///
    /// * [`VegmarketError::EmptyCity`] — blank city input.
    /// * [`VegmarketError::SourceUnavailable`] — transport failure or
    ///   non-success HTTP status.
    /// * [`VegmarketError::Parse`] — no table in the page, or a malformed
    ///   price range.
    /// * [`VegmarketError::EmptyResult`] — a table with zero usable rows.
    pub fn fetch(&self, city: &str) -> Result<PriceTable> {
        let key = config::normalize_city(city);
        if key.is_empty() {
            return Err(VegmarketError::EmptyCity);
        }

        if let Some(table) = self.cache.get(&key) {
            debug!(city = %key, "price table cache hit");
            return Ok(table);
        }

        let url = config::market_url(&self.base_url, &key);
        debug!(%url, "fetching price table");
        let resp = self.client.get(&url).send()?.error_for_status()?;
        let body = resp.text()?;

        let table = parse_price_table(&key, &body)?;
        self.cache.put(key, table.clone());
        Ok(table)
    }

    /// Drop all cached tables.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Number of cities with a cached table.
    pub fn cached_cities(&self) -> usize {
        self.cache.len()
    }
}

/// Parse a fetched market page into a [`PriceTable`].
///
/// Row contract (fixed cell positions, per the source page): each data row
/// has at least 4 cells, the 2nd holding the vegetable name and the 4th a
/// price range of the form `"₹<min> - <max>"`. Rows with fewer than 4 cells
/// are skipped; the header row is always skipped. A malformed price range in
/// an otherwise complete row fails the whole parse.
///
/// Public so frontends and tests can run the parse offline against captured
/// pages.
pub fn parse_price_table(city: &str, html: &str) -> Result<PriceTable> {
    let block = html::first_table(html)
        .ok_or_else(|| VegmarketError::Parse("no data table found on the page".into()))?;

    let mut table = PriceTable::new(city);
    for row in html::table_rows(block).iter().skip(1) {
        let cells = html::row_cells(row);
        if cells.len() < 4 {
            warn!(city, cells = cells.len(), "skipping short table row");
            continue;
        }
        let name = cells[1].trim();
        let (min_price, max_price) = parse_price_range(&cells[3])?;
        table.insert(PriceEntry::new(name, min_price, max_price));
    }

    if table.is_empty() {
        return Err(VegmarketError::EmptyResult(city.to_string()));
    }
    Ok(table)
}

/// Parse a `"₹<min> - <max>"` range cell into `(min, max)`.
///
/// A single value, a non-numeric half, or a reversed range is a
/// [`VegmarketError::Parse`] for the whole fetch.
fn parse_price_range(raw: &str) -> Result<(f64, f64)> {
    let bad = || VegmarketError::Parse(format!("malformed price range '{}'", raw));

    let cleaned = raw.replace('₹', "");
    let (lo, hi) = cleaned.split_once('-').ok_or_else(bad)?;
    let min: f64 = lo.trim().parse().map_err(|_| bad())?;
    let max: f64 = hi.trim().parse().map_err(|_| bad())?;
    if !min.is_finite() || !max.is_finite() || min < 0.0 || max < min {
        return Err(bad());
    }
    Ok((min, max))
}
