use rust_decimal::Decimal;
use std::str::FromStr;

use food_order_cli::models::cart::{Cart, CartError};
use food_order_cli::models::menu::MenuItem;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn item(id: i64, name: &str, price: &str) -> MenuItem {
    MenuItem::new(id, name, dec(price)).unwrap()
}

#[test]
fn empty_cart_has_zero_totals() {
    let cart = Cart::new();

    assert!(cart.is_empty());
    assert_eq!(cart.subtotal(), Decimal::ZERO);
    assert_eq!(cart.service_charge(), Decimal::ZERO);
    assert_eq!(cart.total(), Decimal::ZERO);
    assert!(cart.as_rows().is_empty());
}

#[test]
fn burger_and_fries_scenario() {
    let mut cart = Cart::new();
    cart.add_item(&item(1, "Burger", "5.00"), 2).unwrap();
    cart.add_item(&item(2, "Fries", "2.50"), 1).unwrap();

    assert_eq!(cart.subtotal(), dec("12.50"));
    assert_eq!(cart.service_charge(), dec("0.75"));
    assert_eq!(cart.total(), dec("13.25"));
}

#[test]
fn repeated_add_merges_into_single_line() {
    let mut cart = Cart::new();
    let burger = item(1, "Burger", "5.00");
    cart.add_item(&burger, 2).unwrap();
    cart.add_item(&burger, 3).unwrap();

    let rows = cart.as_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].quantity, 5);
    assert_eq!(rows[0].line_total, "25.00");
}

#[test]
fn first_seen_snapshot_wins() {
    let mut cart = Cart::new();
    cart.add_item(&item(1, "Burger", "5.00"), 2).unwrap();
    // Same id, different name and price: the original snapshot must survive.
    cart.add_item(&item(1, "Deluxe Burger", "6.00"), 1).unwrap();

    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.lines()[0].name, "Burger");
    assert_eq!(cart.lines()[0].unit_price, dec("5.00"));
    assert_eq!(cart.lines()[0].quantity, 3);
    assert_eq!(cart.subtotal(), dec("15.00"));
}

#[test]
fn zero_quantity_is_rejected_loudly() {
    let mut cart = Cart::new();
    let result = cart.add_item(&item(1, "Burger", "5.00"), 0);

    assert_eq!(result.unwrap_err(), CartError::ZeroQuantity);
    assert!(cart.is_empty());
}

#[test]
fn remove_missing_id_returns_false_and_leaves_cart_unchanged() {
    let mut cart = Cart::new();
    cart.add_item(&item(1, "Burger", "5.00"), 2).unwrap();
    let before = cart.as_rows();

    assert!(!cart.remove_item(99));
    assert_eq!(cart.as_rows(), before);
    assert!(!cart.is_empty());
}

#[test]
fn remove_preserves_order_of_remaining_lines() {
    let mut cart = Cart::new();
    cart.add_item(&item(1, "Burger", "5.00"), 1).unwrap();
    cart.add_item(&item(2, "Fries", "2.50"), 1).unwrap();
    cart.add_item(&item(3, "Cola", "1.80"), 1).unwrap();

    assert!(cart.remove_item(2));

    let ids: Vec<i64> = cart.lines().iter().map(|l| l.item_id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn remove_last_line_empties_the_cart() {
    let mut cart = Cart::new();
    cart.add_item(&item(1, "Burger", "5.00"), 1).unwrap();

    assert!(cart.remove_item(1));
    assert!(cart.is_empty());
    assert_eq!(cart.subtotal(), Decimal::ZERO);
}

#[test]
fn rows_are_in_insertion_order_with_two_decimal_money() {
    let mut cart = Cart::new();
    cart.add_item(&item(2, "Fries", "2.5"), 1).unwrap();
    cart.add_item(&item(1, "Burger", "5"), 2).unwrap();

    let rows = cart.as_rows();
    assert_eq!(rows[0].item_id, 2);
    assert_eq!(rows[0].unit_price, "2.50");
    assert_eq!(rows[0].line_total, "2.50");
    assert_eq!(rows[1].item_id, 1);
    assert_eq!(rows[1].unit_price, "5.00");
    assert_eq!(rows[1].line_total, "10.00");
}

#[test]
fn as_rows_is_restartable() {
    let mut cart = Cart::new();
    cart.add_item(&item(1, "Burger", "5.00"), 2).unwrap();

    assert_eq!(cart.as_rows(), cart.as_rows());
}

#[test]
fn total_is_subtotal_times_one_point_oh_six_within_a_cent() {
    let mut cart = Cart::new();
    cart.add_item(&item(1, "Nasi Lemak", "8.50"), 3).unwrap();
    cart.add_item(&item(7, "Teh Tarik", "2.80"), 2).unwrap();

    let drift = (cart.total() - cart.subtotal() * dec("1.06")).abs();
    assert!(drift <= dec("0.01"), "drift {} exceeds one cent", drift);
}

#[test]
fn totals_are_recomputed_after_every_mutation() {
    let mut cart = Cart::new();
    cart.add_item(&item(1, "Burger", "5.00"), 2).unwrap();
    assert_eq!(cart.subtotal(), dec("10.00"));

    cart.add_item(&item(2, "Fries", "2.50"), 1).unwrap();
    assert_eq!(cart.subtotal(), dec("12.50"));

    cart.remove_item(1);
    assert_eq!(cart.subtotal(), dec("2.50"));
}

#[test]
fn repeated_small_additions_do_not_drift() {
    // 0.10 added a hundred times must be exactly 10.00, the failure mode
    // binary floats get wrong.
    let mut cart = Cart::new();
    cart.add_item(&item(1, "Sauce Packet", "0.10"), 1).unwrap();
    for _ in 0..99 {
        cart.add_item(&item(1, "Sauce Packet", "0.10"), 1).unwrap();
    }

    assert_eq!(cart.subtotal(), dec("10.00"));
    assert_eq!(cart.service_charge(), dec("0.60"));
    assert_eq!(cart.total(), dec("10.60"));
}

#[test]
fn clear_resets_the_session() {
    let mut cart = Cart::new();
    cart.add_item(&item(1, "Burger", "5.00"), 2).unwrap();

    cart.clear();

    assert!(cart.is_empty());
    assert_eq!(cart.total(), Decimal::ZERO);
}

#[test]
fn receipt_text_carries_rows_and_labels() {
    let mut cart = Cart::new();
    cart.add_item(&item(1, "Burger", "5.00"), 2).unwrap();
    cart.add_item(&item(2, "Fries", "2.50"), 1).unwrap();

    let receipt = cart.render_receipt(chrono::Utc::now());

    for label in ["ID", "Item", "Qty", "Unit", "Line Total"] {
        assert!(receipt.contains(label), "missing column label {label}");
    }
    assert!(receipt.contains("Burger"));
    assert!(receipt.contains("Fries"));
    assert!(receipt.contains("Subtotal:     RM 12.50"));
    assert!(receipt.contains("Service 6%:   RM 0.75"));
    assert!(receipt.contains("TOTAL:        RM 13.25"));
}

#[test]
fn menu_item_validation_rejects_bad_records() {
    assert!(MenuItem::new(0, "Burger", dec("5.00")).is_err());
    assert!(MenuItem::new(-3, "Burger", dec("5.00")).is_err());
    assert!(MenuItem::new(1, "", dec("5.00")).is_err());
    assert!(MenuItem::new(1, "   ", dec("5.00")).is_err());
    assert!(MenuItem::new(1, "Burger", dec("-0.01")).is_err());
    assert!(MenuItem::new(1, "Burger", dec("0.00")).is_ok());
}
