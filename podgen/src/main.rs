use std::io::{self, Write};

use anyhow::Context;
use clap::{Parser, Subcommand};
use podgen::codegen::accessors::accessor_count;
use podgen::codegen::naming::category_type_name;
use podgen::prelude::*;
use tracing_subscriber::EnvFilter;

/// podgen - SPA type-info dump and accessor generator
#[derive(Parser)]
#[command(name = "podgen")]
#[command(about = "Generate JSON dumps and Rust accessors from SPA type info", long_about = None)]
#[command(version)]
struct Cli {
    /// Restrict output to a category, by full or short name (repeatable)
    #[arg(short, long = "category", global = true)]
    categories: Vec<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the type hierarchy as JSON
    Json,
    /// Print Rust accessor structs
    #[command(alias = "rust")]
    Accessors {
        /// Omit the autogenerated-file banner
        #[arg(long)]
        no_header: bool,
        /// Omit the `use super::*;` preamble
        #[arg(long)]
        no_prelude: bool,
    },
    /// List the object categories
    List,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("[ERROR] {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let categories = select_categories(&OBJECT_CATEGORIES, &cli.categories)?;
    tracing::debug!("Selected {} of {} categories", categories.len(), OBJECT_CATEGORIES.len());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Json => {
            Generator::new(&categories).write_to(OutputMode::Json, &mut out)?;
        }
        Commands::Accessors {
            no_header,
            no_prelude,
        } => {
            let config = GeneratorConfig::default()
                .with_header(!no_header)
                .with_prelude(!no_prelude);
            Generator::new(&categories)
                .with_config(config)
                .write_to(OutputMode::Accessors, &mut out)?;
        }
        Commands::List => {
            for category in &categories {
                writeln!(
                    out,
                    "{}\t{}\t{} entries\t{} accessors",
                    category.name,
                    category_type_name(category),
                    category.infos.len(),
                    accessor_count(category)
                )
                .context("writing category list")?;
            }
        }
    }

    Ok(())
}
