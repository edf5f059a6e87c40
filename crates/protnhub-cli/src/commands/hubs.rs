//! Rank hub genes without computing a layout.

use anyhow::{bail, Result};
use colored::Colorize;
use protnhub::prelude::*;
use std::path::Path;

use crate::config::Config;
use crate::records::load_records;

pub fn run(records: &str, top: Option<usize>, min_score: Option<f64>) -> Result<()> {
    let records_path = Path::new(records);
    if !records_path.exists() {
        bail!("Path does not exist: {}", records_path.display());
    }

    let config = Config::load()?;
    let query = super::build_query(&config, records_path, None, None, min_score)?;
    let top = top.unwrap_or(config.analysis.hubs.top_n);

    let fetched = load_records(records_path, &query)?;
    let built = build_graph(&fetched.records);
    if built.graph.is_empty() {
        println!("{} No interaction data found.", "✗".red());
        return Ok(());
    }

    let degrees = DegreeMap::from_graph(&built.graph);

    println!(
        "{} Top {} hub genes of {} nodes:",
        "→".blue(),
        top.to_string().cyan(),
        degrees.len().to_string().cyan()
    );
    println!();

    for (i, entry) in degrees.top(top).iter().enumerate() {
        let rank = format!("{}.", i + 1);
        println!(
            "  {} {} {}",
            rank.blue(),
            entry.name.white().bold(),
            format!("(degree: {})", entry.degree).dimmed()
        );
    }

    Ok(())
}
