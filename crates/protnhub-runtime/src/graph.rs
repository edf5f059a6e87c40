//! Concrete implementation of the InteractionTopology trait using petgraph.
//!
//! Uses petgraph's directed `Graph` as the backing store with a HashMap
//! index from entity name to node index. Nodes and edges are never
//! removed, so petgraph's index order is insertion order.

use petgraph::graph::{Graph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use protnhub_core::topology::InteractionTopology;
use protnhub_core::types::*;
use std::collections::HashMap;

/// Petgraph-backed interaction graph.
#[derive(Debug, Clone)]
pub struct PetInteractionGraph {
    graph: Graph<NodeData, EdgeData, petgraph::Directed>,
    /// Map from entity name to petgraph's internal index.
    node_index: HashMap<String, NodeIndex>,
}

impl PetInteractionGraph {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            node_index: HashMap::new(),
        }
    }
}

impl Default for PetInteractionGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionTopology for PetInteractionGraph {
    fn ensure_node(&mut self, name: &str) -> usize {
        if let Some(idx) = self.node_index.get(name) {
            return idx.index();
        }
        let insertion_index = self.graph.node_count();
        let idx = self.graph.add_node(NodeData {
            name: name.to_string(),
            insertion_index,
        });
        self.node_index.insert(name.to_string(), idx);
        insertion_index
    }

    fn get_node(&self, name: &str) -> Option<&NodeData> {
        self.node_index.get(name).map(|idx| &self.graph[*idx])
    }

    fn set_edge(&mut self, source: &str, target: &str, data: EdgeData) -> bool {
        let from_idx = NodeIndex::new(self.ensure_node(source));
        let to_idx = NodeIndex::new(self.ensure_node(target));

        // Check if edge already exists
        if let Some(edge_idx) = self.graph.find_edge(from_idx, to_idx) {
            self.graph[edge_idx] = data;
            true
        } else {
            self.graph.add_edge(from_idx, to_idx, data);
            false
        }
    }

    fn get_edge(&self, source: &str, target: &str) -> Option<&EdgeData> {
        let from_idx = self.node_index.get(source)?;
        let to_idx = self.node_index.get(target)?;
        let edge_idx = self.graph.find_edge(*from_idx, *to_idx)?;
        Some(&self.graph[edge_idx])
    }

    fn node_names(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .map(|idx| self.graph[idx].name.as_str())
            .collect()
    }

    fn all_edges(&self) -> Vec<(&str, &str, &EdgeData)> {
        self.graph
            .edge_references()
            .map(|edge| {
                (
                    self.graph[edge.source()].name.as_str(),
                    self.graph[edge.target()].name.as_str(),
                    edge.weight(),
                )
            })
            .collect()
    }

    fn out_degree(&self, name: &str) -> usize {
        let Some(&idx) = self.node_index.get(name) else {
            return 0;
        };
        self.graph.edges_directed(idx, Direction::Outgoing).count()
    }

    fn in_degree(&self, name: &str) -> usize {
        let Some(&idx) = self.node_index.get(name) else {
            return 0;
        };
        self.graph.edges_directed(idx, Direction::Incoming).count()
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn self_loop_count(&self) -> usize {
        self.graph
            .edge_references()
            .filter(|edge| edge.source() == edge.target())
            .count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
