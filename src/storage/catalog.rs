use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::menu::{MenuItem, MenuSection};

/// Read-only supplier of purchasable items, grouped by category.
pub trait Catalog: Send + Sync {
    fn menu(&self) -> &[MenuSection];
    fn find_item_by_id(&self, id: i64) -> Option<&MenuItem>;
}

/// In-memory catalog built once at startup.
pub struct StaticCatalog {
    sections: Vec<MenuSection>,
}

impl StaticCatalog {
    pub fn new(sections: Vec<MenuSection>) -> Self {
        Self { sections }
    }

    /// The built-in restaurant menu.
    pub fn with_default_menu() -> Self {
        fn item(id: i64, name: &str, price: &str) -> MenuItem {
            let price = Decimal::from_str(price).expect("Valid decimal literal");
            MenuItem::new(id, name, price).expect("Built-in menu item is valid")
        }

        Self::new(vec![
            MenuSection {
                category: "Mains".to_string(),
                items: vec![
                    item(1, "Nasi Lemak", "8.50"),
                    item(2, "Chicken Rice", "7.00"),
                    item(3, "Beef Burger", "9.90"),
                    item(4, "Mee Goreng", "6.50"),
                ],
            },
            MenuSection {
                category: "Sides".to_string(),
                items: vec![item(5, "Fries", "4.00"), item(6, "Curry Puff", "2.50")],
            },
            MenuSection {
                category: "Drinks".to_string(),
                items: vec![
                    item(7, "Teh Tarik", "2.80"),
                    item(8, "Iced Lemon Tea", "3.20"),
                    item(9, "Kopi O", "2.00"),
                ],
            },
        ])
    }
}

impl Catalog for StaticCatalog {
    fn menu(&self) -> &[MenuSection] {
        &self.sections
    }

    fn find_item_by_id(&self, id: i64) -> Option<&MenuItem> {
        self.sections
            .iter()
            .flat_map(|s| s.items.iter())
            .find(|item| item.id == id)
    }
}
