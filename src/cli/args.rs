use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "food-order-cli")]
#[command(about = "A terminal food ordering application with cart, receipts and order history")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory for receipts and order history (overrides ORDER_DATA_DIR)
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,
}
