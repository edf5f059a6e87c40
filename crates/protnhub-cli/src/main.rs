//! Prot'n'Hub CLI - protein interaction and hub gene explorer.

mod commands;
mod config;
mod records;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "protnhub")]
#[command(author, version, long_about = None)]
#[command(about = "Prot'n'Hub - Protein interaction & hub gene explorer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new Prot'n'Hub project
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Build, rank and lay out a saved STRING network response
    Analyze {
        /// STRING network JSON file
        records: String,

        /// Protein name or UniProt ID the records were fetched for
        #[arg(short, long)]
        query: Option<String>,

        /// Species preset name or NCBI taxonomy ID
        #[arg(short, long)]
        species: Option<String>,

        /// Interaction score threshold (0.0-1.0)
        #[arg(short, long)]
        min_score: Option<f64>,

        /// Number of hub genes to highlight
        #[arg(short, long)]
        top: Option<usize>,

        /// Layout seed
        #[arg(long)]
        seed: Option<u64>,

        /// Scene output file (default: <query>_network.json)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Rank hub genes without computing a layout
    Hubs {
        /// STRING network JSON file
        records: String,

        /// Number of hub genes to show
        #[arg(short, long)]
        top: Option<usize>,

        /// Interaction score threshold (0.0-1.0)
        #[arg(short, long)]
        min_score: Option<f64>,
    },

    /// List species presets
    Species,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Analyze {
            records,
            query,
            species,
            min_score,
            top,
            seed,
            output,
        } => commands::analyze::run(commands::analyze::AnalyzeArgs {
            records,
            query,
            species,
            min_score,
            top,
            seed,
            output,
            verbose: cli.verbose,
        }),
        Commands::Hubs {
            records,
            top,
            min_score,
        } => commands::hubs::run(&records, top, min_score),
        Commands::Species => commands::species::run(),
    }
}
