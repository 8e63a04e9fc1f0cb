//! Watchshop CLI - browse a watch shop catalog from the terminal.
//!
//! Commands:
//! - `watchshop list` - List a page of products
//! - `watchshop facets` - Show brand/category/gender counts
//! - `watchshop validate` - Validate a catalog file

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{FacetsArgs, ListArgs, ValidateArgs};

/// Watchshop CLI - filter, sort and page through a watch catalog
#[derive(Parser)]
#[command(name = "watchshop")]
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
    /// List a page of products
    List(ListArgs),

    /// Show facet counts for the current filters
    Facets(FacetsArgs),

    /// Validate a catalog file
    Validate(ValidateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = context::Context::load(cli.config.as_deref(), output)?;
    logging::init(&ctx.config.log, cli.verbose)?;

    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, &ctx),
        Commands::Facets(args) => commands::facets::run(args, &ctx),
        Commands::Validate(args) => commands::validate::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
