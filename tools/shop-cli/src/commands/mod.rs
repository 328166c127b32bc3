//! CLI command implementations.

pub mod browse;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;

use clap::{Args, Subcommand};
use turbo_commerce::search::SortOption;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Category name or slug ("all" for every category).
    #[arg(short, long)]
    pub category: Option<String>,

    /// Text to search for in names and descriptions.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort order: price-asc, price-desc, name-asc, name-desc, rating-asc, rating-desc.
    #[arg(long)]
    pub sort: Option<SortOption>,

    /// Page number, starting at 1.
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Products per page (default from config).
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: String,
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Restrict the search to one category.
    #[arg(short, long)]
    pub category: Option<String>,

    /// Sort order for results.
    #[arg(long)]
    pub sort: Option<SortOption>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart (default).
    Show,
    /// Add a product to the cart.
    Add {
        /// Product ID.
        id: String,
        /// Quantity to add.
        #[arg(short, long, default_value_t = 1, allow_hyphen_values = true)]
        qty: i64,
    },
    /// Remove an item from the cart.
    Remove {
        /// Product ID.
        id: String,
    },
    /// Set the quantity of an item; zero or less removes it.
    SetQty {
        /// Product ID.
        id: String,
        /// New quantity.
        #[arg(allow_hyphen_values = true)]
        qty: i64,
    },
    /// Remove every item from the cart.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    /// Postal code.
    #[arg(long)]
    pub zip_code: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    /// Don't prompt: missing fields fail validation and the order is placed
    /// without confirmation.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the active configuration.
    Show,
    /// Create a shop.toml in the current directory.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}
