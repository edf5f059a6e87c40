//! Analyze a saved network response: hubs, layout, scene export.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use protnhub::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::Config;
use crate::records::load_records;

pub struct AnalyzeArgs {
    pub records: String,
    pub query: Option<String>,
    pub species: Option<String>,
    pub min_score: Option<f64>,
    pub top: Option<usize>,
    pub seed: Option<u64>,
    pub output: Option<String>,
    pub verbose: bool,
}

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let records_path = Path::new(&args.records);
    if !records_path.exists() {
        bail!("Path does not exist: {}", records_path.display());
    }

    let config = Config::load()?;
    let query = super::build_query(
        &config,
        records_path,
        args.query,
        args.species.as_deref(),
        args.min_score,
    )?;

    let mut analysis_config = config.analysis.clone();
    if let Some(top) = args.top {
        analysis_config.hubs.top_n = top;
    }
    if let Some(seed) = args.seed {
        analysis_config.layout.seed = seed;
    }

    let species_label = Species::from_taxonomy_id(query.species)
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("taxon {}", query.species));
    println!(
        "{} Analyzing {} ({}, score ≥ {:.2})",
        "→".blue(),
        query.identifiers.cyan(),
        species_label,
        query.min_score
    );

    if args.verbose {
        for (key, value) in query.form_params(&config.query.caller_identity) {
            println!("  {} {}={}", "•".dimmed(), key, value);
        }
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("Invalid progress template")?,
    );
    spinner.set_message("Fetching and analyzing data...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let fetched = load_records(records_path, &query)?;
    let analysis = analyze(&fetched.records, &analysis_config)?;
    spinner.finish_and_clear();

    if fetched.incomplete > 0 || analysis.report.skipped > 0 {
        println!(
            "  {} Skipped {} incomplete records",
            "•".yellow(),
            fetched.incomplete + analysis.report.skipped
        );
    }
    if args.verbose && fetched.below_threshold > 0 {
        println!(
            "  {} {} records below score threshold",
            "•".dimmed(),
            fetched.below_threshold
        );
    }

    match analysis.status {
        AnalysisStatus::NoRecords => {
            println!(
                "{} No interaction data found. Check your input and try again.",
                "✗".red()
            );
        }
        AnalysisStatus::NoInteractions => {
            println!(
                "{} No network could be built with the given parameters. \
                 Try a lower score threshold or a different protein.",
                "•".yellow()
            );
        }
        AnalysisStatus::Complete => {
            if analysis.hubs.is_empty() {
                println!(
                    "{} No distinct hub genes found based on the current network.",
                    "•".yellow()
                );
            } else {
                let names: Vec<&str> = analysis.hubs.iter().collect();
                println!(
                    "{} Top Hub Genes: {}",
                    "✓".green().bold(),
                    names.join(", ").white().bold()
                );
            }
            if args.verbose {
                let outcome = if analysis.layout.converged {
                    "converged"
                } else {
                    "best effort"
                };
                println!(
                    "  Layout: {} iterations ({})",
                    analysis.layout.iterations, outcome
                );
                if let Some((lo, hi)) = analysis.layout.bounds() {
                    println!(
                        "  Extent: ({:.2}, {:.2}) to ({:.2}, {:.2})",
                        lo.x, lo.y, hi.x, hi.y
                    );
                }
            }
            print_summary(&analysis.summary);
        }
    }

    let output = args
        .output
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output(&query.identifiers));
    let content = analysis.scene.to_json_pretty()?;
    std::fs::write(&output, content)
        .with_context(|| format!("Failed to write: {}", output.display()))?;

    println!();
    println!(
        "{} Scene exported to {}",
        "✓".green().bold(),
        output.display().to_string().cyan()
    );

    Ok(())
}

/// `<query>_network.json`, with path separators in the query replaced.
fn default_output(identifiers: &str) -> PathBuf {
    let stem: String = identifiers
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    PathBuf::from(format!("{}_network.json", stem))
}

fn print_summary(summary: &NetworkSummary) {
    println!();
    println!("{}", "Network Analysis Results".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!("  Nodes: {}", summary.node_count.to_string().cyan());
    println!("  List of Nodes: {}", summary.nodes.join(", "));
    println!("  Edges: {}", summary.edge_count.to_string().cyan());
    println!();

    println!("{}", "Node Degrees".blue().bold());
    for row in &summary.top_degrees {
        println!("  - {}: {}", row.name, row.degree.to_string().cyan());
    }
    if summary.remaining > 0 {
        println!("  {}", "... and more.".dimmed());
    }
    println!();

    match &summary.main_hub {
        Some(hub) => println!(
            "{} Main Hub Gene (Highest Degree): {} (Degree: {})",
            "★".yellow(),
            hub.name.white().bold(),
            hub.degree
        ),
        None => println!("  No nodes to determine a main hub gene."),
    }
    println!("{}", "═".repeat(40).dimmed());
}
