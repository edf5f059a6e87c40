//! Hub ranking by degree.
//!
//! Degree is out-degree plus in-degree, so a self-loop contributes 2.
//! Ranking is an explicit stable sort over `(name, degree, insertion_index)`
//! rows: equal degrees keep the order in which nodes were first seen.

use protnhub_core::topology::InteractionTopology;
use serde::Serialize;
use std::collections::HashMap;

/// One row of the degree table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DegreeEntry {
    pub name: String,
    pub degree: usize,
    pub insertion_index: usize,
}

/// Node name → degree, ordered by node insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DegreeMap {
    entries: Vec<DegreeEntry>,
    #[serde(skip)]
    lookup: HashMap<String, usize>,
}

impl DegreeMap {
    /// Compute degrees for every node of `graph`.
    pub fn from_graph(graph: &impl InteractionTopology) -> Self {
        let entries: Vec<DegreeEntry> = graph
            .node_names()
            .into_iter()
            .enumerate()
            .map(|(insertion_index, name)| DegreeEntry {
                name: name.to_string(),
                degree: graph.degree(name),
                insertion_index,
            })
            .collect();
        let lookup = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.name.clone(), i))
            .collect();
        Self { entries, lookup }
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.lookup.get(name).map(|&i| self.entries[i].degree)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[DegreeEntry] {
        &self.entries
    }

    /// All entries, degree descending, ties in insertion order.
    pub fn ranked(&self) -> Vec<&DegreeEntry> {
        let mut rows: Vec<&DegreeEntry> = self.entries.iter().collect();
        // sort_by is stable; insertion_index is the explicit tie-break
        rows.sort_by(|a, b| {
            b.degree
                .cmp(&a.degree)
                .then(a.insertion_index.cmp(&b.insertion_index))
        });
        rows
    }

    /// The first `n` ranked entries.
    pub fn top(&self, n: usize) -> Vec<&DegreeEntry> {
        let mut rows = self.ranked();
        rows.truncate(n);
        rows
    }

    /// The highest-degree node; the earliest inserted wins a tie.
    pub fn max(&self) -> Option<&DegreeEntry> {
        self.ranked().into_iter().next()
    }

    pub fn total_degree(&self) -> usize {
        self.entries.iter().map(|e| e.degree).sum()
    }
}

/// Hub names, degree descending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HubSet {
    names: Vec<String>,
}

impl HubSet {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// Select the `top_n` highest-degree nodes.
pub fn find_hubs(graph: &impl InteractionTopology, top_n: usize) -> HubSet {
    rank_hubs(&DegreeMap::from_graph(graph), top_n)
}

/// Select hubs from an already computed degree map.
pub fn rank_hubs(degrees: &DegreeMap, top_n: usize) -> HubSet {
    HubSet::new(
        degrees
            .top(top_n)
            .into_iter()
            .map(|e| e.name.clone())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_graph;
    use protnhub_core::types::InteractionRecord;

    fn graph_of(edges: &[(&str, &str)]) -> crate::graph::PetInteractionGraph {
        let records: Vec<InteractionRecord> = edges
            .iter()
            .map(|(s, t)| InteractionRecord::new(*s, *t, 0.5))
            .collect();
        build_graph(&records).graph
    }

    #[test]
    fn triangle_degrees_and_tie_break() {
        let graph = graph_of(&[("A", "B"), ("B", "C"), ("A", "C")]);
        let degrees = DegreeMap::from_graph(&graph);
        assert_eq!(degrees.get("A"), Some(2));
        assert_eq!(degrees.get("B"), Some(2));
        assert_eq!(degrees.get("C"), Some(2));

        let hubs = find_hubs(&graph, 2);
        assert_eq!(hubs.names(), &["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn degree_is_source_count_plus_target_count() {
        let edges = [("A", "B"), ("C", "B"), ("B", "D"), ("D", "A"), ("A", "A")];
        let graph = graph_of(&edges);
        let degrees = DegreeMap::from_graph(&graph);
        for name in ["A", "B", "C", "D"] {
            let expected = edges.iter().filter(|(s, _)| *s == name).count()
                + edges.iter().filter(|(_, t)| *t == name).count();
            assert_eq!(degrees.get(name), Some(expected), "degree of {name}");
        }
    }

    #[test]
    fn self_loop_contributes_two() {
        let graph = graph_of(&[("A", "A")]);
        assert_eq!(DegreeMap::from_graph(&graph).get("A"), Some(2));
    }

    #[test]
    fn ranking_is_degree_descending() {
        // Hub "H" has 4 spokes; "X" arrives first but has degree 1
        let graph = graph_of(&[("X", "H"), ("H", "B"), ("H", "C"), ("H", "D")]);
        let hubs = find_hubs(&graph, 3);
        assert_eq!(hubs.names()[0], "H");
        // X, B, C, D all have degree 1; insertion order decides
        assert_eq!(hubs.names()[1..], ["X".to_string(), "B".to_string()]);
    }

    #[test]
    fn length_is_min_of_top_n_and_node_count() {
        let graph = graph_of(&[("A", "B"), ("B", "C")]);
        assert_eq!(find_hubs(&graph, 0).len(), 0);
        assert_eq!(find_hubs(&graph, 2).len(), 2);
        assert_eq!(find_hubs(&graph, 10).len(), 3);
    }

    #[test]
    fn empty_graph_has_no_hubs() {
        let graph = graph_of(&[]);
        assert!(find_hubs(&graph, 5).is_empty());
        assert!(DegreeMap::from_graph(&graph).max().is_none());
    }

    #[test]
    fn max_prefers_first_inserted() {
        let graph = graph_of(&[("A", "B"), ("C", "D")]);
        let degrees = DegreeMap::from_graph(&graph);
        assert_eq!(degrees.max().unwrap().name, "A");
        assert_eq!(degrees.total_degree(), 4);
    }

    #[test]
    fn ranking_does_not_mutate_graph() {
        let graph = graph_of(&[("A", "B"), ("B", "C")]);
        let before = graph.all_edges();
        let _ = find_hubs(&graph, 2);
        assert_eq!(graph.all_edges(), before);
    }

    #[test]
    fn hub_membership() {
        let hubs = HubSet::new(vec!["TP53".to_string(), "MDM2".to_string()]);
        assert!(hubs.contains("TP53"));
        assert!(!hubs.contains("tp53"));
        assert_eq!(hubs.iter().collect::<Vec<_>>(), vec!["TP53", "MDM2"]);
    }
}
