//! List species presets.

use anyhow::Result;
use colored::Colorize;
use protnhub::prelude::Species;

pub fn run() -> Result<()> {
    println!("{} Species presets:", "→".blue());
    println!();
    for species in Species::ALL {
        println!(
            "  {:>6}  {}",
            species.taxonomy_id().to_string().cyan(),
            species
        );
    }
    println!();
    println!("Any other NCBI taxonomy ID can be passed with {}.", "--species <ID>".cyan());
    Ok(())
}
