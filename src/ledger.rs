//! Session-scoped shopping bill: an append-only ledger of line items with
//! derived totals.

use crate::error::{Result, VegmarketError};
use crate::models::{BillRow, BillTotals, LineItem, PriceTable};

/// Append-only bill for one user session.
///
/// One ledger per session, one writer at a time; sessions never share a
/// ledger. Line items are immutable once added, and totals are always
/// recomputed from the items rather than stored.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    items: Vec<LineItem>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Price `quantity_kg` of `vegetable` against `prices` and append the
    /// resulting line item, returning a reference to it.
    ///
    /// # Errors
    ///
    /// * [`VegmarketError::InvalidQuantity`] — quantity is zero, negative,
    ///   or not finite.
    /// * [`VegmarketError::InvalidSelection`] — vegetable is not in the
    ///   price table (lookup ignores case and surrounding whitespace).
    pub fn add(
        &mut self,
        vegetable: &str,
        quantity_kg: f64,
        prices: &PriceTable,
    ) -> Result<&LineItem> {
        if !quantity_kg.is_finite() || quantity_kg <= 0.0 {
            return Err(VegmarketError::InvalidQuantity(quantity_kg));
        }
        let entry = prices
            .get(vegetable)
            .ok_or_else(|| VegmarketError::InvalidSelection(vegetable.to_string()))?;

        self.items.push(LineItem {
            vegetable: entry.vegetable.clone(),
            quantity_kg,
            min_cost: entry.min_price * quantity_kg,
            max_cost: entry.max_price * quantity_kg,
            avg_cost: entry.avg_price * quantity_kg,
        });
        Ok(&self.items[self.items.len() - 1])
    }

    /// Sum of every cost column across the ledger. All zeros when empty.
    pub fn totals(&self) -> BillTotals {
        self.items.iter().fold(BillTotals::default(), |acc, item| {
            BillTotals {
                min_cost: acc.min_cost + item.min_cost,
                max_cost: acc.max_cost + item.max_cost,
                avg_cost: acc.avg_cost + item.avg_cost,
            }
        })
    }

    /// Line items in insertion order followed by one synthetic `"Total"`
    /// row. Presentation only; the ledger itself is unchanged.
    pub fn render(&self) -> Vec<BillRow> {
        let totals = self.totals();
        let mut rows: Vec<BillRow> = self
            .items
            .iter()
            .map(|item| BillRow {
                label: item.vegetable.clone(),
                quantity_kg: Some(item.quantity_kg),
                min_cost: item.min_cost,
                max_cost: item.max_cost,
                avg_cost: item.avg_cost,
            })
            .collect();
        rows.push(BillRow {
            label: "Total".to_string(),
            quantity_kg: None,
            min_cost: totals.min_cost,
            max_cost: totals.max_cost,
            avg_cost: totals.avg_cost,
        });
        rows
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
