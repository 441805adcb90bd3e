//! Basket CLI - a persistent shopping cart in the terminal.
//!
//! Commands:
//! - `basket show` - Print the cart and its subtotal
//! - `basket add` - Add one unit of a product
//! - `basket remove` - Drop a product from the cart
//! - `basket update` - Change a product's quantity by a delta
//! - `basket stock` - Query available stock for a product
//! - `basket clear` - Delete the persisted cart
//! - `basket config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use basket_commerce::CartError;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, ProductArgs, UpdateArgs};

/// Basket CLI - Manage a shopping cart backed by a storefront API
#[derive(Parser)]
#[command(name = "basket")]
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
    /// Show the cart
    Show,

    /// Add one unit of a product
    Add(ProductArgs),

    /// Remove a product from the cart
    Remove(ProductArgs),

    /// Change a product's quantity by a delta
    Update(UpdateArgs),

    /// Show available stock for a product
    Stock(ProductArgs),

    /// Delete the persisted cart
    Clear,

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;
    logging::init(&ctx.config.logging, cli.verbose);

    // Execute command
    let result = match cli.command {
        Commands::Show => commands::cart::show(&ctx).await,
        Commands::Add(args) => commands::cart::add(args, &ctx).await,
        Commands::Remove(args) => commands::cart::remove(args, &ctx).await,
        Commands::Update(args) => commands::cart::update(args, &ctx).await,
        Commands::Stock(args) => commands::cart::stock(args, &ctx).await,
        Commands::Clear => commands::cart::clear(&ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        // Cart failures were already shown by the store's notifier.
        match e.downcast_ref::<CartError>() {
            Some(err) => ctx.output.debug(&err.to_string()),
            None => ctx.output.error(&format!("{:#}", e)),
        }
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use basket_commerce::ProductId;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_update_accepts_negative_delta() {
        let cli = Cli::try_parse_from(["basket", "update", "7", "-1"]).unwrap();
        match cli.command {
            Commands::Update(args) => {
                assert_eq!(args.id, ProductId::new(7));
                assert_eq!(args.delta, -1);
            }
            _ => panic!("expected update"),
        }
    }

    #[test]
    fn test_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["basket", "add", "shoe"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["basket", "show", "--json", "-v"]).unwrap();
        assert!(cli.json);
        assert!(cli.verbose);
    }
}
