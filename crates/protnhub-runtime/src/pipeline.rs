//! The analysis pipeline: build → rank → layout → present.
//!
//! Every call builds its own graph, layout and scene; nothing is shared
//! between analyses.

use crate::builder::{build_graph, BuildReport};
use crate::graph::PetInteractionGraph;
use crate::hubs::{rank_hubs, DegreeMap, HubSet};
use crate::layout::{compute_layout, Layout};
use crate::scene::{to_scene, Scene};
use crate::summary::NetworkSummary;
use protnhub_core::config::AnalysisConfig;
use protnhub_core::error::Result;
use protnhub_core::topology::InteractionTopology;
use protnhub_core::types::InteractionRecord;
use serde::Serialize;
use tracing::info;

/// How far an analysis got.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    /// No records were supplied.
    NoRecords,
    /// Records were supplied but no interaction survived.
    NoInteractions,
    Complete,
}

/// Everything one analysis produces.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub status: AnalysisStatus,
    pub graph: PetInteractionGraph,
    pub report: BuildReport,
    pub degrees: DegreeMap,
    pub hubs: HubSet,
    pub layout: Layout,
    pub scene: Scene,
    pub summary: NetworkSummary,
}

impl Analysis {
    pub fn is_complete(&self) -> bool {
        self.status == AnalysisStatus::Complete
    }
}

/// Run the whole pipeline over `records`.
///
/// Empty or edgeless input is reported through [`AnalysisStatus`] and an
/// empty scene, not as an error.
pub fn analyze(records: &[InteractionRecord], config: &AnalysisConfig) -> Result<Analysis> {
    config.validate()?;

    let built = build_graph(records);
    let graph = built.graph;

    let degrees = DegreeMap::from_graph(&graph);
    let hubs = rank_hubs(&degrees, config.hubs.top_n);
    let layout = compute_layout(&graph, &config.layout)?;
    let scene = to_scene(&graph, &layout, &hubs, &config.style)?;
    let summary = NetworkSummary::from_graph(&graph, &degrees);

    let status = if records.is_empty() {
        AnalysisStatus::NoRecords
    } else if !graph.has_edges() {
        AnalysisStatus::NoInteractions
    } else {
        AnalysisStatus::Complete
    };

    info!(
        records = records.len(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        hubs = hubs.len(),
        status = ?status,
        "analysis finished"
    );

    Ok(Analysis {
        status,
        graph,
        report: built.report,
        degrees,
        hubs,
        layout,
        scene,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_records_flow_through_to_empty_scene() {
        let analysis = analyze(&[], &AnalysisConfig::default()).unwrap();
        assert_eq!(analysis.status, AnalysisStatus::NoRecords);
        assert!(analysis.hubs.is_empty());
        assert!(analysis.layout.is_empty());
        assert!(analysis.scene.is_empty());
    }

    #[test]
    fn all_malformed_records_mean_no_interactions() {
        let records = vec![InteractionRecord::new("", "B", 0.9)];
        let analysis = analyze(&records, &AnalysisConfig::default()).unwrap();
        assert_eq!(analysis.status, AnalysisStatus::NoInteractions);
        assert_eq!(analysis.report.skipped, 1);
        assert!(analysis.scene.is_empty());
    }

    #[test]
    fn complete_run() {
        let records = vec![
            InteractionRecord::new("A", "B", 0.9),
            InteractionRecord::new("B", "C", 0.5),
            InteractionRecord::new("A", "C", 0.3),
        ];
        let analysis = analyze(&records, &AnalysisConfig::default().with_top_n(2)).unwrap();
        assert!(analysis.is_complete());
        assert_eq!(analysis.hubs.names(), &["A".to_string(), "B".to_string()]);
        assert_eq!(analysis.layout.len(), 3);
        assert_eq!(analysis.scene.nodes().len(), 3);
        assert_eq!(analysis.summary.edge_count, 3);
    }

    #[test]
    fn invalid_config_fails_before_building() {
        let mut config = AnalysisConfig::default();
        config.layout.scale = 0.0;
        assert!(analyze(&[InteractionRecord::new("A", "B", 0.9)], &config).is_err());
    }
}
