//! Pipeline integration tests — records through to scene.

use protnhub_runtime::prelude::*;

/// A small TP53 neighbourhood in the shape STRING returns it.
fn tp53_records() -> Vec<InteractionRecord> {
    vec![
        InteractionRecord::new("TP53", "MDM2", 0.999),
        InteractionRecord::new("TP53", "CDKN1A", 0.998),
        InteractionRecord::new("TP53", "ATM", 0.995),
        InteractionRecord::new("TP53", "CHEK2", 0.993),
        InteractionRecord::new("TP53", "EP300", 0.992),
        InteractionRecord::new("MDM2", "CDKN1A", 0.91),
        InteractionRecord::new("MDM2", "EP300", 0.87),
        InteractionRecord::new("ATM", "CHEK2", 0.99),
        InteractionRecord::new("EP300", "CREBBP", 0.98),
        InteractionRecord::new("CHEK2", "MDM2", 0.75),
    ]
}

#[test]
fn tp53_is_the_main_hub() {
    let analysis = analyze(&tp53_records(), &AnalysisConfig::default()).unwrap();

    assert_eq!(analysis.status, AnalysisStatus::Complete);
    assert_eq!(analysis.hubs.len(), 5);
    assert_eq!(analysis.hubs.names()[0], "TP53");
    assert_eq!(analysis.degrees.get("TP53"), Some(5));
    assert_eq!(analysis.degrees.get("MDM2"), Some(4));

    let main = analysis.summary.main_hub.as_ref().unwrap();
    assert_eq!(main.name, "TP53");
    assert_eq!(main.degree, 5);
}

#[test]
fn scene_highlights_exactly_the_hubs() {
    let config = AnalysisConfig::default().with_top_n(2);
    let analysis = analyze(&tp53_records(), &config).unwrap();

    let highlighted: Vec<&str> = analysis
        .scene
        .nodes()
        .iter()
        .filter(|p| p.color_class == ColorClass::Hub)
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(highlighted, vec!["TP53", "MDM2"]);

    for point in analysis.scene.nodes() {
        assert_eq!(Some(point.position), analysis.layout.get(&point.name));
    }
    assert_eq!(analysis.scene.edges().len(), analysis.graph.edge_count());
}

#[test]
fn repeated_runs_are_reproducible() {
    let config = AnalysisConfig::default().with_seed(1234);
    let first = analyze(&tp53_records(), &config).unwrap();
    let second = analyze(&tp53_records(), &config).unwrap();
    assert_eq!(first.layout, second.layout);
    assert_eq!(first.scene, second.scene);
}

#[test]
fn sizes_grow_with_degree() {
    let analysis = analyze(&tp53_records(), &AnalysisConfig::default()).unwrap();
    let mut points: Vec<&ScenePoint> = analysis.scene.nodes().iter().collect();
    points.sort_by_key(|p| p.degree);
    for pair in points.windows(2) {
        assert!(pair[0].size <= pair[1].size);
    }
}

#[test]
fn empty_input_reports_no_records() {
    let analysis = analyze(&[], &AnalysisConfig::default()).unwrap();
    assert_eq!(analysis.status, AnalysisStatus::NoRecords);
    assert!(analysis.hubs.is_empty());
    assert!(analysis.scene.is_empty());
    assert_eq!(analysis.summary.node_count, 0);
}

#[test]
fn scene_json_is_renderer_ready() {
    let analysis = analyze(&tp53_records(), &AnalysisConfig::default()).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&analysis.scene.to_json_pretty().unwrap()).unwrap();

    assert_eq!(json["kind"], "network");
    assert_eq!(json["title"], "Protein Interaction Network");
    assert_eq!(json["edge_style"]["color"], "gray");
    assert_eq!(json["nodes"].as_array().unwrap().len(), 7);
    assert_eq!(json["nodes"][0]["color_class"], "hub");
    assert_eq!(json["nodes"][0]["tooltip"], "TP53\nDegree: 5");
}
