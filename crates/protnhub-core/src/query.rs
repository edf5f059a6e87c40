//! Query parameters handed to the fetch collaborator.
//!
//! The core never interprets the identifier or species; it only types and
//! validates them, and derives the STRING request form from them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ProtnhubError, QueryError, Result};

/// Caller identity reported to STRING when none is configured.
pub const DEFAULT_CALLER_IDENTITY: &str = "protnhub";

/// Common organisms with their NCBI taxonomy ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Species {
    Human,
    Mouse,
    Rat,
    Zebrafish,
    FruitFly,
}

impl Species {
    pub const ALL: [Species; 5] = [
        Species::Human,
        Species::Mouse,
        Species::Rat,
        Species::Zebrafish,
        Species::FruitFly,
    ];

    pub fn taxonomy_id(&self) -> u32 {
        match self {
            Species::Human => 9606,
            Species::Mouse => 10090,
            Species::Rat => 10116,
            Species::Zebrafish => 7955,
            Species::FruitFly => 7227,
        }
    }

    pub fn common_name(&self) -> &'static str {
        match self {
            Species::Human => "Human",
            Species::Mouse => "Mouse",
            Species::Rat => "Rat",
            Species::Zebrafish => "Zebrafish",
            Species::FruitFly => "Fruit fly",
        }
    }

    pub fn scientific_name(&self) -> &'static str {
        match self {
            Species::Human => "Homo sapiens",
            Species::Mouse => "Mus musculus",
            Species::Rat => "Rattus norvegicus",
            Species::Zebrafish => "Danio rerio",
            Species::FruitFly => "Drosophila melanogaster",
        }
    }

    pub fn from_taxonomy_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.taxonomy_id() == id)
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.common_name(), self.scientific_name())
    }
}

impl FromStr for Species {
    type Err = ProtnhubError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase().replace(['-', '_', ' '], "");
        match key.as_str() {
            "human" | "homosapiens" => Ok(Species::Human),
            "mouse" | "musmusculus" => Ok(Species::Mouse),
            "rat" | "rattusnorvegicus" => Ok(Species::Rat),
            "zebrafish" | "daniorerio" => Ok(Species::Zebrafish),
            "fruitfly" | "fly" | "drosophilamelanogaster" => Ok(Species::FruitFly),
            _ => Err(QueryError::UnknownSpecies(s.to_string()).into()),
        }
    }
}

/// Resolve a species argument: a preset name or a raw taxonomy id.
pub fn parse_taxonomy(value: &str) -> Result<u32> {
    if let Ok(id) = value.trim().parse::<u32>() {
        return Ok(id);
    }
    value.parse::<Species>().map(|s| s.taxonomy_id())
}

/// Parameters of one network lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkQuery {
    /// Protein name or UniProt id, passed through verbatim after trimming.
    pub identifiers: String,
    /// NCBI taxonomy id.
    pub species: u32,
    /// Minimum interaction confidence, 0.0-1.0.
    pub min_score: f64,
}

impl NetworkQuery {
    pub fn new(identifiers: impl Into<String>, species: u32, min_score: f64) -> Self {
        Self {
            identifiers: identifiers.into().trim().to_string(),
            species,
            min_score,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.identifiers.trim().is_empty() {
            return Err(QueryError::EmptyIdentifier.into());
        }
        if !(0.0..=1.0).contains(&self.min_score) {
            return Err(ProtnhubError::out_of_range("min_score", 0.0, 1.0, self.min_score));
        }
        Ok(())
    }

    /// STRING expresses confidence on a 0-1000 integer scale.
    pub fn required_score(&self) -> u32 {
        (self.min_score * 1000.0).round() as u32
    }

    /// Whether a record's score passes the threshold.
    pub fn accepts(&self, score: f64) -> bool {
        score >= self.min_score
    }

    /// Form fields for the STRING `network` endpoint.
    pub fn form_params(&self, caller_identity: &str) -> Vec<(&'static str, String)> {
        vec![
            ("identifiers", self.identifiers.clone()),
            ("species", self.species.to_string()),
            ("caller_identity", caller_identity.to_string()),
            ("required_score", self.required_score().to_string()),
        ]
    }
}
