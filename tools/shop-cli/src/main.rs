//! Shop CLI - a terminal storefront over the Turbo Shop core.
//!
//! Commands:
//! - `shop catalog` - List products with filters, sorting and paging
//! - `shop categories` - List categories
//! - `shop product` - Show one product
//! - `shop browse` - Search interactively as you type
//! - `shop cart` - Show and change the cart
//! - `shop checkout` - Place an order for the cart
//! - `shop config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::{BrowseArgs, CartArgs, CatalogArgs, CheckoutArgs, ConfigArgs, ProductArgs};

/// Shop CLI - browse the catalog, fill a cart and check out
#[derive(Parser)]
#[command(name = "shop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Catalog(CatalogArgs),

    /// List categories with product counts
    Categories,

    /// Show product details
    Product(ProductArgs),

    /// Search the catalog interactively, one query per line
    Browse(BrowseArgs),

    /// Show or change the cart
    Cart(CartArgs),

    /// Place an order for everything in the cart
    Checkout(CheckoutArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Install the tracing subscriber. Logs go to stderr so `--json` output on
/// stdout stays parseable.
fn init_tracing(verbose: bool, json: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.json);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::list(args, &ctx).await,
        Commands::Categories => commands::catalog::categories(&ctx).await,
        Commands::Product(args) => commands::catalog::show(args, &ctx).await,
        Commands::Browse(args) => commands::browse::run(args, &ctx).await,
        Commands::Cart(args) => match ctx.open_cart() {
            Ok(mut cart) => commands::cart::run(args, &ctx, &mut cart).await,
            Err(e) => Err(e),
        },
        Commands::Checkout(args) => match ctx.open_cart() {
            Ok(mut cart) => commands::checkout::run(args, &ctx, &mut cart).await,
            Err(e) => Err(e),
        },
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
