use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::cart::Cart;

/// One line of a completed order as stored in the history log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    pub id: i64,
    pub name: String,
    pub qty: u32,
    pub unit_price: Decimal,
}

/// History record for one completed checkout, appended as a single JSON
/// line. Never updated after the fact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRecord {
    pub placed_at: DateTime<Utc>,
    pub total: Decimal,
    pub items: Vec<OrderLine>,
}

impl OrderRecord {
    pub fn from_cart(cart: &Cart, placed_at: DateTime<Utc>) -> Self {
        Self {
            placed_at,
            total: cart.total(),
            items: cart
                .lines()
                .iter()
                .map(|l| OrderLine {
                    id: l.item_id,
                    name: l.name.clone(),
                    qty: l.quantity,
                    unit_price: l.unit_price,
                })
                .collect(),
        }
    }
}
