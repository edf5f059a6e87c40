//! # Prot'n'Hub Core
//!
//! Core types and traits for the Prot'n'Hub interaction pipeline:
//!
//! - **Records** — pairwise interactions as delivered by the fetch collaborator
//! - **Topology** — the directed, name-keyed interaction graph trait
//! - **Config** — explicit ranking, layout and styling parameters
//! - **Query** — typed STRING lookup parameters and species presets
//! - **Errors** — structured failures for the stages that can fail
//!
//! ## Quick Start
//!
//! ```rust
//! use protnhub_core::prelude::*;
//!
//! let record = InteractionRecord::new("TP53", "MDM2", 0.999);
//! assert!(record.is_well_formed());
//!
//! let config = AnalysisConfig::default().with_top_n(3);
//! assert!(config.validate().is_ok());
//! ```

pub mod types;
pub mod topology;
pub mod config;
pub mod query;
pub mod error;
pub mod prelude;
