//! # Prot'n'Hub
//!
//! Protein interaction networks: build a graph from interaction records,
//! rank hub proteins by connectivity and lay the network out for display.
//!
//! ## Quick Start
//!
//! ```rust
//! use protnhub::prelude::*;
//!
//! let records = vec![
//!     InteractionRecord::new("TP53", "MDM2", 0.999),
//!     InteractionRecord::new("TP53", "CDKN1A", 0.998),
//!     InteractionRecord::new("MDM2", "CDKN1A", 0.91),
//! ];
//!
//! let analysis = analyze(&records, &AnalysisConfig::default().with_top_n(1)).unwrap();
//! assert_eq!(analysis.hubs.names(), &["TP53".to_string()]);
//!
//! match &analysis.scene {
//!     Scene::Empty { title, .. } => println!("{title}"),
//!     Scene::Network { nodes, .. } => {
//!         for p in nodes {
//!             let (x, y) = (p.position.x, p.position.y);
//!             println!("{} at ({:.2}, {:.2}) size {}", p.label, x, y, p.size);
//!         }
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`protnhub_core`] - Records, configuration, query parameters, errors
//! - [`protnhub_runtime`] - Graph builder, hub ranker, layout engine, scene adapter
//!
//! ## Pipeline
//!
//! | Stage | Input | Output |
//! |-------|-------|--------|
//! | Build | interaction records | directed weighted graph |
//! | Rank | graph | degree map, hub set |
//! | Layout | graph, seed | node positions |
//! | Present | graph, layout, hubs | scene |
//!
//! An edgeless graph skips the layout and yields [`Scene::Empty`](prelude::Scene::Empty),
//! so renderers can show a "no data" message instead of a blank plot.
//!
//! ## Fetching records
//!
//! Fetching from STRING is left to the caller. [`NetworkQuery`](prelude::NetworkQuery)
//! types the request parameters:
//!
//! ```rust
//! use protnhub::prelude::*;
//!
//! let query = NetworkQuery::new("TP53", Species::Human.taxonomy_id(), 0.4);
//! query.validate().unwrap();
//! assert_eq!(query.required_score(), 400);
//! ```

// Re-export all subcrates
pub use protnhub_core as core;
pub use protnhub_runtime as runtime;

/// Prelude module for convenient imports.
///
/// ```rust
/// use protnhub::prelude::*;
/// ```
pub mod prelude {
    pub use protnhub_runtime::prelude::*;
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
