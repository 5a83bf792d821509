use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PriceEntry — One vegetable's price band for a city at fetch time
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PriceEntry {
    /// Display name as it appears on the page (e.g. `"Tomato"`).
    pub vegetable: String,
    pub min_price: f64,
    pub max_price: f64,
    /// Always `(min_price + max_price) / 2`.
    pub avg_price: f64,
}

impl PriceEntry {
    pub fn new(vegetable: impl Into<String>, min_price: f64, max_price: f64) -> Self {
        Self {
            vegetable: vegetable.into(),
            min_price,
            max_price,
            avg_price: (min_price + max_price) / 2.0,
        }
    }
}

// ---------------------------------------------------------------------------
// PriceTable — All PriceEntry values for one city, keyed by vegetable name
// ---------------------------------------------------------------------------

/// Immutable-after-fetch price table for one city at one point in time.
///
/// Entries keep page order; lookup by vegetable name is case-insensitive
/// (keys are lowercased and trimmed). A duplicate name in the source page
/// replaces the earlier entry in place.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTable {
    city: String,
    entries: Vec<PriceEntry>,
    index: HashMap<String, usize>,
}

impl PriceTable {
    pub(crate) fn new(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Normalized city this table was fetched for.
    pub fn city(&self) -> &str {
        &self.city
    }

    pub(crate) fn insert(&mut self, entry: PriceEntry) {
        let key = normalize_name(&entry.vegetable);
        match self.index.get(&key) {
            Some(&i) => self.entries[i] = entry,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Look up a vegetable by name, ignoring case and surrounding whitespace.
    pub fn get(&self, vegetable: &str) -> Option<&PriceEntry> {
        self.index
            .get(&normalize_name(vegetable))
            .map(|&i| &self.entries[i])
    }

    /// Display names in page order, suitable for a selection control.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.vegetable.as_str())
    }

    /// Entries in page order.
    pub fn entries(&self) -> &[PriceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
