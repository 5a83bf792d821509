use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// LineItem — One committed (vegetable, quantity) purchase with its cost band
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LineItem {
    pub vegetable: String,
    pub quantity_kg: f64,
    /// `min_price * quantity_kg`, and likewise for max and avg.
    pub min_cost: f64,
    pub max_cost: f64,
    pub avg_cost: f64,
}

// ---------------------------------------------------------------------------
// BillTotals — Derived sum over a ledger, never stored
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BillTotals {
    pub min_cost: f64,
    pub max_cost: f64,
    pub avg_cost: f64,
}

// ---------------------------------------------------------------------------
// BillRow — Presentation row: one line item, or the synthetic total
// ---------------------------------------------------------------------------

/// A rendered bill row. The final row of a rendered bill carries the label
/// `"Total"` and no quantity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BillRow {
    pub label: String,
    pub quantity_kg: Option<f64>,
    pub min_cost: f64,
    pub max_cost: f64,
    pub avg_cost: f64,
}

impl fmt::Display for BillRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let qty = match self.quantity_kg {
            Some(q) => format!("{:.1}", q),
            None => String::new(),
        };
        write!(
            f,
            "{:<16} {:>8} {:>10.2} {:>10.2} {:>10.2}",
            self.label, qty, self.min_cost, self.max_cost, self.avg_cost
        )
    }
}
