//! Graph builder — turns interaction records into a directed weighted graph.
//!
//! Records are applied in order: both endpoints are created on first
//! reference, then the directed edge source → target is set to the
//! record's score. A repeated ordered pair overwrites the weight.
//!
//! Malformed records (blank names, non-finite score) are skipped and
//! counted rather than rejected, so one bad row from the collaborator
//! does not discard the whole response.

use crate::graph::PetInteractionGraph;
use protnhub_core::topology::InteractionTopology;
use protnhub_core::types::{EdgeData, InteractionRecord};
use serde::Serialize;
use tracing::{debug, warn};

/// Counts describing how the records were applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Records that set an edge.
    pub accepted: usize,
    /// Malformed records that were ignored.
    pub skipped: usize,
    /// Accepted records that replaced an existing edge's weight.
    pub overwritten: usize,
}

impl BuildReport {
    pub fn total(&self) -> usize {
        self.accepted + self.skipped
    }
}

/// A graph together with its build report.
#[derive(Debug, Clone)]
pub struct BuiltGraph {
    pub graph: PetInteractionGraph,
    pub report: BuildReport,
}

/// Build the interaction graph from `records`.
///
/// Names are trimmed of surrounding whitespace before use, so `" A "` and
/// `"A"` are the same node. The node set is the union of the trimmed names.
/// Empty input yields an empty graph, not an error.
pub fn build_graph(records: &[InteractionRecord]) -> BuiltGraph {
    let mut graph = PetInteractionGraph::new();
    let mut report = BuildReport::default();

    for record in records {
        if !record.is_well_formed() {
            report.skipped += 1;
            continue;
        }

        let source = record.source.trim();
        let target = record.target.trim();
        if graph.set_edge(source, target, EdgeData::new(record.score)) {
            report.overwritten += 1;
        }
        report.accepted += 1;
    }

    if report.skipped > 0 {
        warn!(skipped = report.skipped, "skipped malformed interaction records");
    }
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        overwritten = report.overwritten,
        "built interaction graph"
    );

    BuiltGraph { graph, report }
}
