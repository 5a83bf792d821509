//! In-memory price table cache keyed by normalized city string.
//!
//! One fetched [`PriceTable`] is memoized per city for the process lifetime,
//! or for a fixed TTL when one is configured. The map is mutex-guarded so a
//! fetcher shared across sessions serializes its cache access.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::models::PriceTable;

struct CachedTable {
    fetched_at: Instant,
    table: PriceTable,
}

/// Memoizes fetch results by normalized city key.
///
/// With `ttl = None` entries live for the process lifetime. A zero TTL
/// expires entries immediately, effectively disabling the cache.
pub struct TableCache {
    ttl: Option<Duration>,
    entries: Mutex<HashMap<String, CachedTable>>,
}

impl TableCache {
    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached table for `key` if present and still valid.
    /// Expired entries are evicted on access.
    pub fn get(&self, key: &str) -> Option<PriceTable> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(cached) = entries.get(key) {
            let expired = self
                .ttl
                .is_some_and(|ttl| cached.fetched_at.elapsed() >= ttl);
            if !expired {
                return Some(cached.table.clone());
            }
            entries.remove(key);
        }
        None
    }

    pub fn put(&self, key: impl Into<String>, table: PriceTable) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(
            key.into(),
            CachedTable {
                fetched_at: Instant::now(),
                table,
            },
        );
    }

    /// Drop every cached table, forcing the next fetch per city to hit the
    /// network again.
    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }

    /// Number of cities currently cached (expired entries included until
    /// their next access).
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
