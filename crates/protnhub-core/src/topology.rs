//! Topology — the interaction graph structure.
//!
//! Nodes are keyed by entity name and remember the order in which they
//! were first seen. Ranking and layout both depend on that order, so
//! implementations must iterate nodes and edges in insertion order.

use crate::types::*;

/// A directed, name-keyed interaction graph.
///
/// This is a trait rather than a concrete type so that the ranking,
/// layout and presentation stages can run against any graph backend.
pub trait InteractionTopology {
    /// Return the insertion index of `name`, creating the node if needed.
    fn ensure_node(&mut self, name: &str) -> usize;

    /// Get node data by name.
    fn get_node(&self, name: &str) -> Option<&NodeData>;

    /// Add or update a directed edge. If the edge exists, the data is
    /// replaced and `true` is returned.
    fn set_edge(&mut self, source: &str, target: &str, data: EdgeData) -> bool;

    /// Get directed edge data.
    fn get_edge(&self, source: &str, target: &str) -> Option<&EdgeData>;

    /// All node names, in insertion order.
    fn node_names(&self) -> Vec<&str>;

    /// All edges as `(source, target, data)`, in insertion order.
    fn all_edges(&self) -> Vec<(&str, &str, &EdgeData)>;

    /// Number of edges leaving `name`.
    fn out_degree(&self, name: &str) -> usize;

    /// Number of edges entering `name`.
    fn in_degree(&self, name: &str) -> usize;

    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Number of edges.
    fn edge_count(&self) -> usize;

    /// Total degree: edges as source plus edges as target. A self-loop
    /// counts once in each direction.
    fn degree(&self, name: &str) -> usize {
        self.out_degree(name) + self.in_degree(name)
    }

    /// Number of edges whose source is also their target.
    fn self_loop_count(&self) -> usize {
        self.all_edges()
            .iter()
            .filter(|(source, target, _)| source == target)
            .count()
    }

    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    fn has_edges(&self) -> bool {
        self.edge_count() > 0
    }
}
