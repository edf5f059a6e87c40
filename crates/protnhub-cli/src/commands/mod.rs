//! CLI command implementations.

pub mod init;
pub mod analyze;
pub mod hubs;
pub mod species;

use anyhow::Result;
use protnhub::prelude::{parse_taxonomy, NetworkQuery};
use std::path::Path;

use crate::config::Config;

/// Merge command-line overrides with the project config into a query.
pub(crate) fn build_query(
    config: &Config,
    records_path: &Path,
    identifiers: Option<String>,
    species: Option<&str>,
    min_score: Option<f64>,
) -> Result<NetworkQuery> {
    // Without an explicit query, the file name stands in for the protein
    let identifiers = identifiers.unwrap_or_else(|| {
        records_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    });
    let species = match species {
        Some(s) => parse_taxonomy(s)?,
        None => config.query.species,
    };
    let query = NetworkQuery::new(
        identifiers,
        species,
        min_score.unwrap_or(config.query.min_score),
    );
    query.validate()?;
    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_falls_back_to_file_stem_and_config() {
        let config = Config::default();
        let query = build_query(&config, Path::new("data/TP53.json"), None, None, None).unwrap();
        assert_eq!(query.identifiers, "TP53");
        assert_eq!(query.species, 9606);
        assert_eq!(query.min_score, 0.4);
    }

    #[test]
    fn overrides_win() {
        let config = Config::default();
        let query = build_query(
            &config,
            Path::new("x.json"),
            Some("BRCA1".to_string()),
            Some("mouse"),
            Some(0.7),
        )
        .unwrap();
        assert_eq!(query.identifiers, "BRCA1");
        assert_eq!(query.species, 10090);
        assert_eq!(query.required_score(), 700);
    }

    #[test]
    fn bad_threshold_is_rejected() {
        let config = Config::default();
        assert!(build_query(&config, Path::new("x.json"), None, None, Some(2.0)).is_err());
    }
}
