use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A purchasable item as published by the catalog.
///
/// Immutable once read; the cart keeps its own snapshot of the name and
/// price, so later catalog changes never affect lines already in a cart.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct MenuItem {
    #[validate(range(min = 1, message = "Item id must be positive"))]
    pub id: i64,

    #[validate(length(min = 1, message = "Item name is required"))]
    pub name: String,

    #[validate(custom = "validate_price")]
    pub price: Decimal,
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() {
        return Err(ValidationError::new("Price must not be negative"));
    }
    Ok(())
}

// custom error
#[derive(Debug, thiserror::Error)]
pub enum MenuItemError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),
}

impl MenuItem {
    /// Validating constructor; every item crossing the catalog boundary
    /// goes through here.
    pub fn new(id: i64, name: impl Into<String>, price: Decimal) -> Result<Self, MenuItemError> {
        let item = Self {
            id,
            name: name.into().trim().to_string(),
            price,
        };
        item.validate()?;
        Ok(item)
    }
}

/// One category of the menu with its items in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuSection {
    pub category: String,
    pub items: Vec<MenuItem>,
}
