//! Local stand-in for the STRING fetch: read a saved `network` response.
//!
//! STRING answers a network request with a JSON array of interaction
//! objects. Only the preferred names and the combined score matter here;
//! every other field is ignored. Objects missing one of those fields are
//! counted and dropped, and the score threshold is applied on this side,
//! exactly as the remote service would.

use anyhow::{Context, Result};
use protnhub::prelude::{InteractionRecord, NetworkQuery};
use serde::Deserialize;
use std::path::Path;

/// One interaction object as STRING serializes it.
#[derive(Debug, Clone, Deserialize)]
pub struct StringInteraction {
    #[serde(rename = "preferredName_A")]
    pub preferred_name_a: Option<String>,
    #[serde(rename = "preferredName_B")]
    pub preferred_name_b: Option<String>,
    pub score: Option<f64>,
}

impl StringInteraction {
    fn into_record(self) -> Option<InteractionRecord> {
        Some(InteractionRecord::new(
            self.preferred_name_a?,
            self.preferred_name_b?,
            self.score?,
        ))
    }
}

/// Records read from a response, plus what was dropped on the way.
#[derive(Debug, Clone, Default)]
pub struct FetchedRecords {
    pub records: Vec<InteractionRecord>,
    /// Objects missing a name or score.
    pub incomplete: usize,
    /// Objects below the score threshold.
    pub below_threshold: usize,
}

/// Parse a STRING `network` JSON response and apply the query threshold.
pub fn parse_records(json: &str, query: &NetworkQuery) -> Result<FetchedRecords> {
    let raw: Vec<StringInteraction> =
        serde_json::from_str(json).context("Failed to parse STRING interaction JSON")?;

    let mut fetched = FetchedRecords::default();
    for interaction in raw {
        match interaction.into_record() {
            Some(record) if query.accepts(record.score) => fetched.records.push(record),
            Some(_) => fetched.below_threshold += 1,
            None => fetched.incomplete += 1,
        }
    }
    Ok(fetched)
}

/// Read and parse a saved response file.
pub fn load_records(path: &Path, query: &NetworkQuery) -> Result<FetchedRecords> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read: {}", path.display()))?;
    parse_records(&content, query)
        .with_context(|| format!("Failed to load records from {}", path.display()))
}
