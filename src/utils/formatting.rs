use console::style;
use rust_decimal::Decimal;
use tabled::{
    settings::{Alignment, Style},
    Table, Tabled,
};

use crate::models::cart::CartRow;
use crate::models::menu::MenuSection;

/// Currency label used everywhere money is shown.
pub const CURRENCY: &str = "RM";

/// Plain amount with exactly two decimal digits, e.g. `12.50`.
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", value)
}

/// Amount with the currency label, e.g. `RM 12.50`.
pub fn format_money(value: Decimal) -> String {
    format!("{CURRENCY} {:.2}", value)
}

#[derive(Tabled)]
struct CartTableRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Qty")]
    qty: u32,
    #[tabled(rename = "Unit")]
    unit: String,
    #[tabled(rename = "Line Total")]
    line_total: String,
}

pub fn format_cart_table(rows: &[CartRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let rows: Vec<CartTableRow> = rows
        .iter()
        .map(|row| CartTableRow {
            id: row.item_id,
            item: if row.name.len() > 28 {
                format!("{}...", &row.name[..25])
            } else {
                row.name.clone()
            },
            qty: row.quantity,
            unit: row.unit_price.clone(),
            line_total: row.line_total.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded()).with(Alignment::left());

    table.to_string()
}

pub fn format_menu(sections: &[MenuSection]) -> String {
    let mut output = String::new();

    for section in sections {
        output.push_str(&format!(
            "\n-- {} --\n",
            style(&section.category).bold().cyan()
        ));
        for item in &section.items {
            output.push_str(&format!(
                "  [{}] {} - {}\n",
                style(item.id).yellow(),
                item.name,
                format_money(item.price)
            ));
        }
    }

    output
}
