//! Analysis configuration.
//!
//! All tunables for ranking, layout and styling travel in one
//! [`AnalysisConfig`] value that callers pass into the pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{ProtnhubError, Result};
use crate::types::Position;

/// Configuration for a full analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub hubs: HubConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub style: StyleConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubConfig {
    /// How many hubs to select.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Seed for the initial placement.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Iteration budget for the spring simulation.
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    /// Mean per-node displacement below which the layout counts as converged.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Largest absolute coordinate after rescaling.
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default)]
    pub center: Position,
    /// Optional wall-clock cap. When it fires, the current positions are
    /// returned as they are.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    #[serde(default = "default_base_size")]
    pub base_size: f64,
    #[serde(default = "default_size_per_degree")]
    pub size_per_degree: f64,
    #[serde(default = "default_hub_color")]
    pub hub_color: String,
    #[serde(default = "default_normal_color")]
    pub normal_color: String,
    #[serde(default = "default_edge_color")]
    pub edge_color: String,
    #[serde(default = "default_edge_width")]
    pub edge_width: f64,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_empty_title")]
    pub empty_title: String,
}

// Default value functions
fn default_top_n() -> usize { 5 }
fn default_seed() -> u64 { 42 }
fn default_iterations() -> usize { 50 }
fn default_tolerance() -> f64 { 1e-4 }
fn default_scale() -> f64 { 1.0 }
fn default_base_size() -> f64 { 15.0 }
fn default_size_per_degree() -> f64 { 2.0 }
fn default_hub_color() -> String { "red".to_string() }
fn default_normal_color() -> String { "royalblue".to_string() }
fn default_edge_color() -> String { "gray".to_string() }
fn default_edge_width() -> f64 { 1.5 }
fn default_title() -> String { "Protein Interaction Network".to_string() }
fn default_empty_title() -> String { "No interactions found for the given parameters.".to_string() }

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            iterations: default_iterations(),
            tolerance: default_tolerance(),
            scale: default_scale(),
            center: Position::origin(),
            deadline_ms: None,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            base_size: default_base_size(),
            size_per_degree: default_size_per_degree(),
            hub_color: default_hub_color(),
            normal_color: default_normal_color(),
            edge_color: default_edge_color(),
            edge_width: default_edge_width(),
            title: default_title(),
            empty_title: default_empty_title(),
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<()> {
        self.layout.validate()?;
        self.style.validate()
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.hubs.top_n = top_n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.layout.seed = seed;
        self
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(ProtnhubError::invalid_config(
                "layout.iterations",
                "0",
                "at least one iteration is required",
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ProtnhubError::invalid_config(
                "layout.tolerance",
                self.tolerance.to_string(),
                "must be a finite, non-negative number",
            ));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ProtnhubError::invalid_config(
                "layout.scale",
                self.scale.to_string(),
                "must be a finite, positive number",
            ));
        }
        if !self.center.x.is_finite() || !self.center.y.is_finite() {
            return Err(ProtnhubError::invalid_config(
                "layout.center",
                format!("({}, {})", self.center.x, self.center.y),
                "coordinates must be finite",
            ));
        }
        Ok(())
    }
}

impl StyleConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.base_size.is_finite() || self.base_size < 0.0 {
            return Err(ProtnhubError::invalid_config(
                "style.base_size",
                self.base_size.to_string(),
                "must be a finite, non-negative number",
            ));
        }
        // A negative slope would make hubs smaller than their neighbours
        if !self.size_per_degree.is_finite() || self.size_per_degree < 0.0 {
            return Err(ProtnhubError::invalid_config(
                "style.size_per_degree",
                self.size_per_degree.to_string(),
                "must be a finite, non-negative number",
            ));
        }
        if !self.edge_width.is_finite() || self.edge_width < 0.0 {
            return Err(ProtnhubError::invalid_config(
                "style.edge_width",
                self.edge_width.to_string(),
                "must be a finite, non-negative number",
            ));
        }
        Ok(())
    }

    /// Node size for a given degree: `base_size + degree * size_per_degree`.
    pub fn node_size(&self, degree: usize) -> f64 {
        self.base_size + degree as f64 * self.size_per_degree
    }
}
