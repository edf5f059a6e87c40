//! Prot'n'Hub Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use protnhub_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{
    InteractionRecord,
    Position,
    NodeData, EdgeData,
    NodeStyle, ColorClass,
};

// Re-export configuration
pub use crate::config::{AnalysisConfig, HubConfig, LayoutConfig, StyleConfig};

// Re-export query parameters
pub use crate::query::{NetworkQuery, Species, parse_taxonomy, DEFAULT_CALLER_IDENTITY};

// Re-export the InteractionTopology trait
pub use crate::topology::InteractionTopology;

// Re-export error types
pub use crate::error::{ProtnhubError, Result};
