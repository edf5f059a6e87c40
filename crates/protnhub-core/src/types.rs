//! Shared types used across the Prot'n'Hub crates.

use serde::{Deserialize, Serialize};

/// A pairwise interaction between two entities, as delivered by the fetch
/// collaborator.
///
/// The core does not range-check `score`; filtering by confidence happens
/// before records reach the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub source: String,
    pub target: String,
    pub score: f64,
}

impl InteractionRecord {
    pub fn new(source: impl Into<String>, target: impl Into<String>, score: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            score,
        }
    }

    /// Whether the record carries both endpoint names and a usable score.
    pub fn is_well_formed(&self) -> bool {
        !self.source.trim().is_empty() && !self.target.trim().is_empty() && self.score.is_finite()
    }
}

/// A position in the 2D layout plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn distance_to(&self, other: &Position) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::origin()
    }
}

/// Data stored in an interaction graph node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeData {
    /// Entity name, unique within a graph.
    pub name: String,
    /// Position in first-insertion order.
    pub insertion_index: usize,
}

/// Data stored on an interaction graph edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeData {
    /// Interaction confidence carried over from the record.
    pub weight: f64,
}

impl EdgeData {
    pub fn new(weight: f64) -> Self {
        Self { weight }
    }
}

/// Visual class of a node in the rendered scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorClass {
    Hub,
    Normal,
}

/// Per-node styling derived from degree and hub membership.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeStyle {
    pub size: f64,
    /// True iff the node is in the hub set.
    pub highlighted: bool,
}

impl NodeStyle {
    pub fn color_class(&self) -> ColorClass {
        if self.highlighted {
            ColorClass::Hub
        } else {
            ColorClass::Normal
        }
    }
}
