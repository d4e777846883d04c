use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::path::PathBuf;
use thiserror::Error;

use crate::models::menu::MenuItem;
use crate::storage::receipt::{ReceiptError, ReceiptSink};
use crate::utils::formatting::{format_amount, format_money};

#[derive(Error, Debug, PartialEq)]
pub enum CartError {
    #[error("Quantity must be at least 1")]
    ZeroQuantity,
}

/// One entry per distinct item id currently in the cart.
///
/// `name` and `unit_price` are captured when the item is first added; a
/// catalog price change after that point does not affect the line.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item_id: i64,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// One display row of the cart view, money fields already formatted to
/// two decimal places.
#[derive(Debug, Clone, PartialEq)]
pub struct CartRow {
    pub item_id: i64,
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

/// The mutable set of chosen lines for one ordering session.
///
/// Insertion order is preserved: the first-added item appears first in the
/// cart view and on the receipt. No two lines share an item id, and no line
/// ever sits at quantity zero. Derived totals are recomputed on every call.
#[derive(Debug, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Merges into the existing line for this item id, or appends a new
    /// line at the end. An existing line keeps its name/price snapshot
    /// untouched: first-seen price wins.
    pub fn add_item(&mut self, item: &MenuItem, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item.id) {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine {
                item_id: item.id,
                name: item.name.clone(),
                unit_price: item.price,
                quantity,
            });
        }
        Ok(())
    }

    /// Removes the whole line for `item_id`, preserving the order of the
    /// remaining lines. Returns `false` when no such line exists; the cart
    /// is left unchanged in that case.
    pub fn remove_item(&mut self, item_id: i64) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.item_id != item_id);
        self.lines.len() < before
    }

    /// Pure projection of the lines in insertion order; recomputable on
    /// demand, never a one-shot cursor.
    pub fn as_rows(&self) -> Vec<CartRow> {
        self.lines
            .iter()
            .map(|l| CartRow {
                item_id: l.item_id,
                name: l.name.clone(),
                quantity: l.quantity,
                unit_price: format_amount(l.unit_price),
                line_total: format_amount(l.line_total()),
            })
            .collect()
    }

    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Fixed 6% of the subtotal, rounded to the smallest currency unit.
    pub fn service_charge(&self) -> Decimal {
        (self.subtotal() * Decimal::new(6, 2)).round_dp(2)
    }

    pub fn total(&self) -> Decimal {
        self.subtotal() + self.service_charge()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The human-readable receipt text: timestamp header, one row per line
    /// in insertion order, then subtotal, service charge and total.
    pub fn render_receipt(&self, placed_at: DateTime<Utc>) -> String {
        let rule = "=".repeat(50);
        let mut out = String::new();
        out.push_str(&format!("{rule}\nRECEIPT\n{rule}\n"));
        out.push_str(&format!(
            "Date: {}\n\n",
            placed_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        out.push_str(&format!(
            "{:<6}{:<28}{:<6}{:<12}{}\n",
            "ID", "Item", "Qty", "Unit", "Line Total"
        ));
        out.push_str(&format!("{}\n", "-".repeat(60)));
        for row in self.as_rows() {
            out.push_str(&format!(
                "{:<6}{:<28}{:<6}{:<12}{}\n",
                row.item_id, row.name, row.quantity, row.unit_price, row.line_total
            ));
        }
        out.push_str(&format!("{}\n", "-".repeat(60)));
        out.push_str(&format!("Subtotal:     {}\n", format_money(self.subtotal())));
        out.push_str(&format!(
            "Service 6%:   {}\n",
            format_money(self.service_charge())
        ));
        out.push_str(&format!("TOTAL:        {}\n", format_money(self.total())));
        out
    }

    /// Serializes the receipt and hands it to the sink, returning where it
    /// was written. I/O failures surface as the error; nothing is swallowed.
    /// The cart itself is not cleared here.
    pub fn write_receipt(&self, sink: &dyn ReceiptSink) -> Result<PathBuf, ReceiptError> {
        self.write_receipt_at(sink, Utc::now())
    }

    pub fn write_receipt_at(
        &self,
        sink: &dyn ReceiptSink,
        placed_at: DateTime<Utc>,
    ) -> Result<PathBuf, ReceiptError> {
        sink.write(placed_at, &self.render_receipt(placed_at))
    }
}
