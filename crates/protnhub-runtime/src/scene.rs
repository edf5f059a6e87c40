//! Presentation adapter — package graph, layout and hubs into a scene.
//!
//! The scene is renderer-agnostic: edges become line segments between
//! layout coordinates, nodes become positioned, sized, coloured and
//! labelled points. An edgeless graph produces [`Scene::Empty`] so the
//! renderer can tell "no data" apart from "data with isolated nodes".

use crate::hubs::{DegreeMap, HubSet};
use crate::layout::{style_nodes, Layout};
use protnhub_core::config::StyleConfig;
use protnhub_core::error::{ProtnhubError, Result};
use protnhub_core::topology::InteractionTopology;
use protnhub_core::types::{ColorClass, Position};
use serde::Serialize;

/// A line segment for one directed edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeSegment {
    pub source: String,
    pub target: String,
    pub from: Position,
    pub to: Position,
    pub weight: f64,
}

/// A positioned, styled node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenePoint {
    pub name: String,
    pub position: Position,
    pub size: f64,
    pub color_class: ColorClass,
    /// Concrete colour for `color_class`, from the style config.
    pub color: String,
    pub degree: usize,
    pub label: String,
    pub tooltip: String,
}

/// Stroke shared by all edge segments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeStyle {
    pub color: String,
    pub width: f64,
}

/// A renderer-ready description of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scene {
    /// No interactions to draw.
    Empty {
        title: String,
        /// Nodes that existed without any edge between them.
        node_count: usize,
    },
    Network {
        title: String,
        edge_style: EdgeStyle,
        edges: Vec<EdgeSegment>,
        nodes: Vec<ScenePoint>,
    },
}

impl Scene {
    pub fn is_empty(&self) -> bool {
        matches!(self, Scene::Empty { .. })
    }

    pub fn title(&self) -> &str {
        match self {
            Scene::Empty { title, .. } | Scene::Network { title, .. } => title,
        }
    }

    pub fn edges(&self) -> &[EdgeSegment] {
        match self {
            Scene::Empty { .. } => &[],
            Scene::Network { edges, .. } => edges,
        }
    }

    pub fn nodes(&self) -> &[ScenePoint] {
        match self {
            Scene::Empty { .. } => &[],
            Scene::Network { nodes, .. } => nodes,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Hover text for a node.
pub fn tooltip(name: &str, degree: usize) -> String {
    format!("{}\nDegree: {}", name, degree)
}

/// Build the scene for a laid-out graph.
///
/// Fails only when a non-empty layout lacks a node that the graph has.
pub fn to_scene(
    graph: &impl InteractionTopology,
    layout: &Layout,
    hubs: &HubSet,
    style: &StyleConfig,
) -> Result<Scene> {
    if !graph.has_edges() || layout.is_empty() {
        return Ok(Scene::Empty {
            title: style.empty_title.clone(),
            node_count: graph.node_count(),
        });
    }

    let position_of = |name: &str| -> Result<Position> {
        layout
            .get(name)
            .ok_or_else(|| ProtnhubError::missing_position(name))
    };

    let mut edges = Vec::with_capacity(graph.edge_count());
    for (source, target, data) in graph.all_edges() {
        edges.push(EdgeSegment {
            source: source.to_string(),
            target: target.to_string(),
            from: position_of(source)?,
            to: position_of(target)?,
            weight: data.weight,
        });
    }

    let degrees = DegreeMap::from_graph(graph);
    let mut nodes = Vec::with_capacity(degrees.len());
    for styled in style_nodes(&degrees, hubs, style) {
        let color_class = styled.style.color_class();
        let color = match color_class {
            ColorClass::Hub => style.hub_color.clone(),
            ColorClass::Normal => style.normal_color.clone(),
        };
        nodes.push(ScenePoint {
            position: position_of(&styled.name)?,
            size: styled.style.size,
            color_class,
            color,
            degree: styled.degree,
            label: styled.name.clone(),
            tooltip: tooltip(&styled.name, styled.degree),
            name: styled.name,
        });
    }

    Ok(Scene::Network {
        title: style.title.clone(),
        edge_style: EdgeStyle {
            color: style.edge_color.clone(),
            width: style.edge_width,
        },
        edges,
        nodes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_graph;
    use crate::graph::PetInteractionGraph;
    use crate::hubs::find_hubs;
    use crate::layout::compute_layout;
    use protnhub_core::config::LayoutConfig;
    use protnhub_core::error::LayoutError;
    use protnhub_core::types::InteractionRecord;

    fn triangle() -> PetInteractionGraph {
        build_graph(&[
            InteractionRecord::new("A", "B", 0.9),
            InteractionRecord::new("B", "C", 0.5),
            InteractionRecord::new("A", "C", 0.3),
        ])
        .graph
    }

    #[test]
    fn empty_graph_gives_empty_marker() {
        let graph = PetInteractionGraph::new();
        let hubs = HubSet::default();
        let scene = to_scene(&graph, &Layout::empty(), &hubs, &StyleConfig::default()).unwrap();
        assert!(scene.is_empty());
        assert_eq!(scene.title(), "No interactions found for the given parameters.");
        assert!(scene.nodes().is_empty());
    }

    #[test]
    fn isolated_nodes_are_still_empty_but_counted() {
        let mut graph = PetInteractionGraph::new();
        graph.ensure_node("A");
        let layout = compute_layout(&graph, &LayoutConfig::default()).unwrap();
        let scene = to_scene(&graph, &layout, &HubSet::default(), &StyleConfig::default()).unwrap();
        assert_eq!(
            scene,
            Scene::Empty {
                title: StyleConfig::default().empty_title,
                node_count: 1,
            }
        );
    }

    #[test]
    fn one_segment_per_edge_one_point_per_node() {
        let graph = triangle();
        let layout = compute_layout(&graph, &LayoutConfig::default()).unwrap();
        let hubs = find_hubs(&graph, 1);
        let scene = to_scene(&graph, &layout, &hubs, &StyleConfig::default()).unwrap();

        assert!(!scene.is_empty());
        assert_eq!(scene.title(), "Protein Interaction Network");
        assert_eq!(scene.edges().len(), 3);
        assert_eq!(scene.nodes().len(), 3);

        let ab = &scene.edges()[0];
        assert_eq!((ab.source.as_str(), ab.target.as_str()), ("A", "B"));
        assert_eq!(ab.from, layout.get("A").unwrap());
        assert_eq!(ab.to, layout.get("B").unwrap());
        assert_eq!(ab.weight, 0.9);
    }

    #[test]
    fn points_carry_style_and_labels() {
        let graph = triangle();
        let layout = compute_layout(&graph, &LayoutConfig::default()).unwrap();
        let hubs = find_hubs(&graph, 1);
        let scene = to_scene(&graph, &layout, &hubs, &StyleConfig::default()).unwrap();

        let a = &scene.nodes()[0];
        assert_eq!(a.name, "A");
        assert_eq!(a.color_class, ColorClass::Hub);
        assert_eq!(a.color, "red");
        assert_eq!(a.size, 19.0);
        assert_eq!(a.label, "A");
        assert_eq!(a.tooltip, "A\nDegree: 2");

        let b = &scene.nodes()[1];
        assert_eq!(b.color_class, ColorClass::Normal);
        assert_eq!(b.color, "royalblue");
    }

    #[test]
    fn missing_position_is_an_error() {
        let graph = triangle();
        let other = build_graph(&[InteractionRecord::new("X", "Y", 0.9)]).graph;
        let layout = compute_layout(&other, &LayoutConfig::default()).unwrap();
        let err = to_scene(&graph, &layout, &HubSet::default(), &StyleConfig::default())
            .unwrap_err();
        match err {
            ProtnhubError::Layout(LayoutError::MissingPosition(name)) => assert_eq!(name, "A"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn serializes_with_kind_tag() {
        let graph = PetInteractionGraph::new();
        let hubs = HubSet::default();
        let scene = to_scene(&graph, &Layout::empty(), &hubs, &StyleConfig::default()).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&scene.to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["kind"], "empty");
        assert_eq!(json["node_count"], 0);
    }
}
