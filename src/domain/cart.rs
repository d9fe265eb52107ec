use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::TAX_RATE_PERCENT;

/// One product line held in a session cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product the line refers to.
    pub product_id: i32,
    /// Product name captured when the line was created.
    pub name: String,
    /// Unit price in cents captured when the line was created or last
    /// reconciled against the catalog.
    pub unit_price_cents: i64,
    /// Units requested by the shopper.
    pub quantity: i32,
}

impl CartLine {
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * i64::from(self.quantity)
    }
}

/// Session-scoped shopping cart: a mapping of product id to line,
/// serialized in and out of the session store on every request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: BTreeMap<i32, CartLine>,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> i32 {
        self.lines.values().map(|line| line.quantity).sum()
    }

    pub fn subtotal_cents(&self) -> i64 {
        self.lines.values().map(CartLine::line_total_cents).sum()
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::from_subtotal(self.subtotal_cents())
    }

    pub fn line(&self, product_id: i32) -> Option<&CartLine> {
        self.lines.get(&product_id)
    }

    pub fn line_mut(&mut self, product_id: i32) -> Option<&mut CartLine> {
        self.lines.get_mut(&product_id)
    }

    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    pub fn product_ids(&self) -> Vec<i32> {
        self.lines.keys().copied().collect()
    }

    /// Insert a new line or add its quantity to an existing one.
    pub fn upsert(&mut self, line: CartLine) {
        self.lines
            .entry(line.product_id)
            .and_modify(|existing| existing.quantity += line.quantity)
            .or_insert(line);
    }

    /// Remove a line, reporting whether it was present.
    pub fn remove(&mut self, product_id: i32) -> bool {
        self.lines.remove(&product_id).is_some()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

/// Subtotal, tax and grand total for a cart or order, in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub grand_total_cents: i64,
}

impl CartTotals {
    /// Derive tax and grand total from a subtotal. Integer cent math:
    /// the tax rounds down, and `subtotal + tax` equals
    /// `subtotal * (100 + rate) / 100` exactly.
    pub fn from_subtotal(subtotal_cents: i64) -> Self {
        let tax_cents = subtotal_cents * TAX_RATE_PERCENT / 100;
        Self {
            subtotal_cents,
            tax_cents,
            grand_total_cents: subtotal_cents + tax_cents,
        }
    }
}
