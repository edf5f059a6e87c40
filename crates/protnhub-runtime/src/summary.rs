//! Network summary for tabular display.

use crate::hubs::DegreeMap;
use protnhub_core::topology::InteractionTopology;
use serde::Serialize;

/// Rows shown in the degree table before truncating.
pub const DEGREE_TABLE_ROWS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DegreeRow {
    pub name: String,
    pub degree: usize,
}

/// Counts, node list, leading degrees and the main hub of a network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub self_loops: usize,
    /// Node names in insertion order.
    pub nodes: Vec<String>,
    /// Highest-degree nodes, at most [`DEGREE_TABLE_ROWS`].
    pub top_degrees: Vec<DegreeRow>,
    /// Nodes left out of `top_degrees`.
    pub remaining: usize,
    /// The single highest-degree node.
    pub main_hub: Option<DegreeRow>,
    pub average_degree: f64,
    /// Directed density: edges / (n * (n - 1)).
    pub density: f64,
}

impl NetworkSummary {
    pub fn from_graph(graph: &impl InteractionTopology, degrees: &DegreeMap) -> Self {
        let node_count = graph.node_count();
        let edge_count = graph.edge_count();

        let top_degrees: Vec<DegreeRow> = degrees
            .top(DEGREE_TABLE_ROWS)
            .into_iter()
            .map(|e| DegreeRow {
                name: e.name.clone(),
                degree: e.degree,
            })
            .collect();
        let remaining = node_count.saturating_sub(top_degrees.len());
        let main_hub = top_degrees.first().cloned();

        let self_loops = graph.self_loop_count();

        let average_degree = if node_count > 0 {
            degrees.total_degree() as f64 / node_count as f64
        } else {
            0.0
        };
        let density = if node_count > 1 {
            edge_count as f64 / (node_count * (node_count - 1)) as f64
        } else {
            0.0
        };

        Self {
            node_count,
            edge_count,
            self_loops,
            nodes: graph.node_names().into_iter().map(str::to_string).collect(),
            top_degrees,
            remaining,
            main_hub,
            average_degree,
            density,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_graph;
    use protnhub_core::types::InteractionRecord;

    #[test]
    fn summary_of_star() {
        let records: Vec<InteractionRecord> = (0..12)
            .map(|i| InteractionRecord::new("HUB", format!("P{i}"), 0.9))
            .collect();
        let graph = build_graph(&records).graph;
        let degrees = DegreeMap::from_graph(&graph);
        let summary = NetworkSummary::from_graph(&graph, &degrees);

        assert_eq!(summary.node_count, 13);
        assert_eq!(summary.edge_count, 12);
        assert_eq!(summary.top_degrees.len(), DEGREE_TABLE_ROWS);
        assert_eq!(summary.remaining, 3);
        assert_eq!(
            summary.main_hub,
            Some(DegreeRow {
                name: "HUB".to_string(),
                degree: 12
            })
        );
        assert_eq!(summary.nodes[0], "HUB");
        assert_eq!(summary.top_degrees[1].name, "P0");
        assert!((summary.average_degree - 24.0 / 13.0).abs() < 1e-12);
    }

    #[test]
    fn summary_of_empty_graph() {
        let graph = build_graph(&[]).graph;
        let summary = NetworkSummary::from_graph(&graph, &DegreeMap::from_graph(&graph));
        assert_eq!(summary.node_count, 0);
        assert!(summary.main_hub.is_none());
        assert_eq!(summary.remaining, 0);
        assert_eq!(summary.density, 0.0);
    }

    #[test]
    fn self_loops_are_counted() {
        let graph = build_graph(&[
            InteractionRecord::new("A", "A", 0.5),
            InteractionRecord::new("A", "B", 0.5),
        ])
        .graph;
        let summary = NetworkSummary::from_graph(&graph, &DegreeMap::from_graph(&graph));
        assert_eq!(summary.self_loops, 1);
        assert_eq!(summary.density, 1.0);
    }
}
