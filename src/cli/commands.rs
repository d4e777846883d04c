use std::sync::Arc;

use anyhow::Result;
use console::{style, Emoji, Term};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use tracing::error;

use crate::{
    models::cart::Cart,
    services::{OrderService, OrderServiceError},
    storage::{
        catalog::{Catalog, StaticCatalog},
        history::FileOrderHistory,
        receipt::FileReceiptWriter,
    },
    utils::{
        formatting::{format_cart_table, format_menu, format_money},
        Config,
    },
};

static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");
static WARNING: Emoji<'_, '_> = Emoji("⚠️ ", "");
static RECEIPT: Emoji<'_, '_> = Emoji("🧾 ", "");

const MAIN_CHOICES: &[&str] = &[
    "View Menu",
    "Add Item",
    "View Cart",
    "Remove Item",
    "Checkout",
    "Exit",
];

pub struct CliApp {
    catalog: Arc<StaticCatalog>,
    service: OrderService,
}

impl CliApp {
    pub fn new(config: &Config) -> Self {
        let catalog = Arc::new(StaticCatalog::with_default_menu());
        let history = Arc::new(FileOrderHistory::new(config.history_file()));
        let receipts = Arc::new(FileReceiptWriter::new(config.receipts_dir()));
        let service = OrderService::new(catalog.clone(), history, receipts);

        Self { catalog, service }
    }

    /// The interactive session loop. One cart lives for the whole loop;
    /// checkout resets it.
    pub fn run(&self) -> Result<()> {
        let mut cart = Cart::new();
        let theme = ColorfulTheme::default();
        let term = Term::stdout();

        loop {
            print_header("ONLINE FOOD ORDERING SYSTEM");

            let choice = Select::with_theme(&theme)
                .with_prompt("Choose")
                .items(MAIN_CHOICES)
                .default(0)
                .interact()?;

            match choice {
                0 => self.show_menu(),
                1 => {
                    self.show_menu();
                    self.add_flow(&mut cart, &theme)?;
                }
                2 => self.show_cart(&cart),
                3 => {
                    self.show_cart(&cart);
                    self.remove_flow(&mut cart, &theme)?;
                }
                4 => {
                    self.show_cart(&cart);
                    self.checkout_flow(&mut cart, &theme)?;
                }
                _ => {
                    println!("Bye!");
                    break;
                }
            }

            println!("\n{}", style("Press ENTER to continue...").dim());
            term.read_line()?;
        }

        Ok(())
    }

    fn show_menu(&self) {
        print_header("MENU");
        println!("{}", format_menu(self.catalog.menu()));
    }

    fn show_cart(&self, cart: &Cart) {
        print_header("YOUR CART");

        if cart.is_empty() {
            println!("Cart is empty.");
            return;
        }

        println!("{}", format_cart_table(&cart.as_rows()));
        println!("Subtotal:     {}", format_money(cart.subtotal()));
        println!("Service 6%:   {}", format_money(cart.service_charge()));
        println!(
            "TOTAL:        {}",
            style(format_money(cart.total())).bold().green()
        );
    }

    fn add_flow(&self, cart: &mut Cart, theme: &ColorfulTheme) -> Result<()> {
        let Some(item_id) = prompt_int(theme, "Enter item id to add")? else {
            println!("{} Invalid input", CROSS);
            return Ok(());
        };

        let Some(quantity) = prompt_int(theme, "Enter quantity")? else {
            println!("{} Invalid input", CROSS);
            return Ok(());
        };
        if quantity <= 0 {
            println!("{} Quantity must be positive", CROSS);
            return Ok(());
        }

        match self.service.add_to_cart(cart, item_id, quantity as u32) {
            Ok(item) => {
                println!(
                    "{} Added {} x {}",
                    CHECKMARK,
                    quantity,
                    style(&item.name).green()
                );
            }
            Err(OrderServiceError::ItemNotFound { id }) => {
                println!("{} No menu item with id {}", CROSS, style(id).red());
            }
            Err(e) => {
                println!("{} Failed to add item: {}", CROSS, style(&e).red());
                error!("Failed to add item: {}", e);
            }
        }

        Ok(())
    }

    fn remove_flow(&self, cart: &mut Cart, theme: &ColorfulTheme) -> Result<()> {
        if cart.is_empty() {
            return Ok(());
        }

        let Some(item_id) = prompt_int(theme, "Enter item id to remove")? else {
            println!("{} Invalid input", CROSS);
            return Ok(());
        };

        if self.service.remove_from_cart(cart, item_id) {
            println!("{} Item removed", CHECKMARK);
        } else {
            println!("{} Item id {} not found in cart", WARNING, item_id);
        }

        Ok(())
    }

    fn checkout_flow(&self, cart: &mut Cart, theme: &ColorfulTheme) -> Result<()> {
        if cart.is_empty() {
            return Ok(());
        }

        let confirm = Confirm::with_theme(theme)
            .with_prompt("Proceed to checkout?")
            .default(true)
            .interact()?;
        if !confirm {
            println!("Checkout cancelled");
            return Ok(());
        }

        match self.service.checkout(cart) {
            Ok(summary) => {
                print_header("CHECKOUT");
                println!(
                    "{} Receipt saved: {}",
                    RECEIPT,
                    style(summary.receipt_path.display()).cyan()
                );
                println!(
                    "Paid {}. Thank you!",
                    style(format_money(summary.total)).bold().green()
                );
            }
            Err(e) => {
                println!("{} Checkout failed: {}", CROSS, style(&e).red());
                println!("Your cart is unchanged; please try again.");
                error!("Checkout failed: {}", e);
            }
        }

        Ok(())
    }
}

/// Free-form integer prompt. Non-integer input is a normal outcome reported
/// as `None`; the caller aborts the current action with a message.
fn prompt_int(theme: &ColorfulTheme, prompt: &str) -> Result<Option<i64>> {
    let raw: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;

    Ok(raw.trim().parse().ok())
}

fn print_header(title: &str) {
    let rule = "=".repeat(50);
    println!("\n{}", style(&rule).dim());
    println!("{}", style(title).bold().cyan());
    println!("{}", style(&rule).dim());
}
