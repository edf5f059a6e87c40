//! Prot'n'Hub Runtime Prelude — convenient imports for common usage.
//!
//! ```rust
//! use protnhub_runtime::prelude::*;
//! ```

// Re-export the graph backend
pub use crate::graph::PetInteractionGraph;

// Re-export the stages
pub use crate::builder::{build_graph, BuildReport, BuiltGraph};
pub use crate::hubs::{find_hubs, rank_hubs, DegreeEntry, DegreeMap, HubSet};
pub use crate::layout::{compute_layout, style_nodes, Layout, LayoutEntry, StyledNode};
pub use crate::scene::{to_scene, EdgeSegment, EdgeStyle, Scene, ScenePoint};
pub use crate::summary::{DegreeRow, NetworkSummary};
pub use crate::pipeline::{analyze, Analysis, AnalysisStatus};

// Re-export from core
pub use protnhub_core::prelude::*;
