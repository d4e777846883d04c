pub mod menu;
pub mod cart;
pub mod order;
