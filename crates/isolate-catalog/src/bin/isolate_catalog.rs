//! isolate-catalog - inspect a catalog snapshot from the command line.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use isolate_catalog::{init_logging, Catalog, CatalogConfig, FacetCategory, FacetEngine, FilterSelection};

#[derive(Parser)]
#[command(name = "isolate-catalog", version, about = "Query an isolate catalog snapshot")]
struct Cli {
    /// JSON snapshot (defaults to `snapshot_path` from the config)
    #[arg(long, short)]
    snapshot: Option<PathBuf>,

    /// Config file (defaults to the standard location)
    #[arg(long, short)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the taxonomy tree
    Tree {
        /// Only isolates matching these facet labels
        #[arg(long = "select", short = 'f')]
        select: Vec<String>,
        /// Emit JSON instead of a drawn tree
        #[arg(long)]
        json: bool,
    },
    /// Print the four count series as JSON
    Stats {
        #[arg(long = "select", short = 'f')]
        select: Vec<String>,
    },
    /// Print the joined rows of isolates matching the selection
    Filter {
        #[arg(long = "select", short = 'f')]
        select: Vec<String>,
    },
    /// List facet options per category with counts
    Facets,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CatalogConfig::load(path)?,
        None => CatalogConfig::load_standard()?,
    };
    init_logging(&config.logging)?;

    if let Some(path) = cli.snapshot {
        config.snapshot_path = Some(path);
    }
    let catalog = Catalog::open(config)?;

    match cli.command {
        Command::Tree { select, json } => {
            let view = catalog.view(&FilterSelection::with_selected(select));
            if json {
                println!("{}", serde_json::to_string_pretty(&view.taxonomy)?);
            } else {
                print!("{}", view.taxonomy.format_tree());
            }
        }
        Command::Stats { select } => {
            let view = catalog.view(&FilterSelection::with_selected(select));
            println!("{}", serde_json::to_string_pretty(&view.counts)?);
        }
        Command::Filter { select } => {
            let view = catalog.view(&FilterSelection::with_selected(select));
            println!("{}", serde_json::to_string_pretty(&view.isolates)?);
        }
        Command::Facets => {
            let snapshot = catalog.snapshot();
            let resolved = isolate_catalog::resolve_all(snapshot.isolates(), &snapshot);
            let engine = FacetEngine::from_store(&snapshot);
            let counts = engine.facet_counts(snapshot.isolates(), &resolved);
            for category in FacetCategory::ALL {
                println!("{}:", category);
                for count in counts.iter().filter(|c| c.category == category) {
                    println!("  {} ({})", count.label, count.count);
                }
            }
        }
    }

    Ok(())
}
