//! # Prot'n'Hub Runtime
//!
//! The analysis stages, leaf-first:
//!
//! - [`builder`] — interaction records to a directed weighted graph
//! - [`hubs`] — degree map and top-K hub ranking
//! - [`layout`] — seeded spring layout and node styling
//! - [`scene`] — renderer-agnostic packaging of the result
//! - [`pipeline`] — one entry point running all of the above
//!
//! ```rust
//! use protnhub_core::prelude::*;
//! use protnhub_runtime::pipeline::analyze;
//!
//! let records = vec![
//!     InteractionRecord::new("A", "B", 0.9),
//!     InteractionRecord::new("B", "C", 0.5),
//!     InteractionRecord::new("A", "C", 0.3),
//! ];
//! let analysis = analyze(&records, &AnalysisConfig::default().with_top_n(2)).unwrap();
//! assert_eq!(analysis.hubs.names(), &["A".to_string(), "B".to_string()]);
//! ```

pub mod graph;
pub mod builder;
pub mod hubs;
pub mod layout;
pub mod scene;
pub mod summary;
pub mod pipeline;
pub mod prelude;
