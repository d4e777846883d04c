use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::{
    models::{
        cart::{Cart, CartError},
        menu::MenuItem,
        order::OrderRecord,
    },
    storage::{
        catalog::Catalog,
        history::{HistoryError, OrderHistory},
        receipt::{ReceiptError, ReceiptSink},
    },
};

#[derive(Error, Debug)]
pub enum OrderServiceError {
    #[error("No menu item with id {id}")]
    ItemNotFound { id: i64 },

    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    #[error("Receipt error: {0}")]
    Receipt(#[from] ReceiptError),

    #[error("Order history error: {0}")]
    History(#[from] HistoryError),
}

/// Result of a successful checkout.
#[derive(Debug)]
pub struct CheckoutSummary {
    pub receipt_path: PathBuf,
    pub total: Decimal,
    pub placed_at: DateTime<Utc>,
}

/// Orchestrates cart mutations against the catalog and drives checkout
/// persistence. The cart itself is owned by the caller's session and passed
/// into each operation.
pub struct OrderService {
    catalog: Arc<dyn Catalog>,
    history: Arc<dyn OrderHistory>,
    receipts: Arc<dyn ReceiptSink>,
}

impl OrderService {
    pub fn new(
        catalog: Arc<dyn Catalog>,
        history: Arc<dyn OrderHistory>,
        receipts: Arc<dyn ReceiptSink>,
    ) -> Self {
        Self {
            catalog,
            history,
            receipts,
        }
    }

    /// Resolves the item in the catalog and adds it to the cart. Returns
    /// the resolved item so the caller can confirm what was added.
    pub fn add_to_cart(
        &self,
        cart: &mut Cart,
        item_id: i64,
        quantity: u32,
    ) -> Result<MenuItem, OrderServiceError> {
        let item = self
            .catalog
            .find_item_by_id(item_id)
            .ok_or(OrderServiceError::ItemNotFound { id: item_id })?
            .clone();

        cart.add_item(&item, quantity)?;
        info!("Added {} x {} to cart", quantity, item.name);
        Ok(item)
    }

    /// Whole-line removal; `false` is a normal outcome, not an error.
    pub fn remove_from_cart(&self, cart: &mut Cart, item_id: i64) -> bool {
        let removed = cart.remove_item(item_id);
        if removed {
            info!("Removed item {} from cart", item_id);
        } else {
            warn!("Item {} not found in cart", item_id);
        }
        removed
    }

    /// Writes the receipt, appends the order to history, then clears the
    /// cart.
    ///
    /// The history append only runs after a successful receipt write, so
    /// every history record has a matching receipt file; a receipt without
    /// a history record can remain when the append fails. On any failure
    /// the cart is left intact for a retry.
    pub fn checkout(&self, cart: &mut Cart) -> Result<CheckoutSummary, OrderServiceError> {
        let placed_at = Utc::now();
        let total = cart.total();

        let receipt_path = cart
            .write_receipt_at(self.receipts.as_ref(), placed_at)
            .map_err(|e| {
                error!("Receipt write failed: {}", e);
                e
            })?;

        let record = OrderRecord::from_cart(cart, placed_at);
        self.history.append(&record).map_err(|e| {
            error!(
                "History append failed after receipt {} was written: {}",
                receipt_path.display(),
                e
            );
            e
        })?;

        cart.clear();
        info!(
            "Checkout complete, total {} saved to {}",
            total,
            receipt_path.display()
        );

        Ok(CheckoutSummary {
            receipt_path,
            total,
            placed_at,
        })
    }
}
