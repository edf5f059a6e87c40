//! Configuration management for the Prot'n'Hub CLI.

use anyhow::{Context, Result};
use protnhub::prelude::AnalysisConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the project config file.
pub const CONFIG_FILE: &str = "protnhub.toml";

/// Prot'n'Hub project configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub query: QueryDefaults,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Defaults for the lookup parameters the fetch side applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryDefaults {
    #[serde(default = "default_species")]
    pub species: u32,
    #[serde(default = "default_min_score")]
    pub min_score: f64,
    #[serde(default = "default_caller_identity")]
    pub caller_identity: String,
}

// Default value functions
fn default_species() -> u32 { 9606 }
fn default_min_score() -> f64 { 0.4 }
fn default_caller_identity() -> String { protnhub::prelude::DEFAULT_CALLER_IDENTITY.to_string() }

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            species: default_species(),
            min_score: default_min_score(),
            caller_identity: default_caller_identity(),
        }
    }
}

impl Config {
    /// Load config from protnhub.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        match find_config_file(&cwd) {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load config from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config
            .analysis
            .validate()
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}

/// Find protnhub.toml in `start` or its parent directories.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let mut config = Config::default();
        config.query.species = 10090;
        config.analysis.hubs.top_n = 8;
        config.save(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[analysis.layout]\nseed = 7\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.analysis.layout.seed, 7);
        assert_eq!(loaded.analysis.layout.iterations, 50);
        assert_eq!(loaded.query, QueryDefaults::default());
    }

    #[test]
    fn invalid_values_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[analysis.layout]\niterations = 0\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("layout.iterations"));
    }

    #[test]
    fn config_is_found_in_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "").unwrap();

        let found = find_config_file(&nested).unwrap();
        assert_eq!(found, dir.path().join(CONFIG_FILE));
    }
}
