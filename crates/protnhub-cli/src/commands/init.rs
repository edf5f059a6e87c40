//! Initialize a new Prot'n'Hub project.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{Config, CONFIG_FILE};

pub fn run(path: Option<String>) -> Result<()> {
    let base_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    println!("{} Initializing Prot'n'Hub project...", "→".blue());

    std::fs::create_dir_all(&base_path)
        .with_context(|| format!("Failed to create {}", base_path.display()))?;

    // Create default config
    let config_path = base_path.join(CONFIG_FILE);
    if !config_path.exists() {
        Config::default().save(&config_path)?;
        println!("  {} Created {}", "✓".green(), config_path.display());
    } else {
        println!("  {} {} already exists", "•".yellow(), config_path.display());
    }

    println!();
    println!("{} Prot'n'Hub project initialized!", "✓".green().bold());
    println!();
    println!("Next steps:");
    println!("  {} save a STRING network response as JSON", "1.".blue());
    println!("  {} protnhub analyze <response.json> --query TP53", "2.".blue());
    println!("  {} protnhub hubs <response.json> --top 10", "3.".blue());

    Ok(())
}
