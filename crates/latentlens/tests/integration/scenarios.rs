//! Small hand-checked scenarios run through the full load path.

use std::collections::BTreeSet;

use latentlens::{Explorer, ExplorerConfig, VectorExpression};
use latentlens_space::projection::CustomProjectionService;

use crate::fixtures::generators::words;
use crate::fixtures::Dataset;

fn open(entries: &[(&str, &[f64])], metric: &str) -> (Dataset, Explorer) {
    let full = words(entries);
    let dataset = Dataset::write(&full, &full, metric);
    let config = ExplorerConfig::load(&dataset.config_path()).expect("valid config");
    let explorer = Explorer::load(config).expect("dataset loads");
    (dataset, explorer)
}

fn ids<T: AsRef<str>>(items: impl IntoIterator<Item = T>) -> Vec<String> {
    items.into_iter().map(|s| s.as_ref().to_string()).collect()
}

// ============================================================================
// Nearest Neighbors
// ============================================================================

#[test]
fn test_knn_on_a_line() {
    let (_dataset, explorer) = open(
        &[("q", &[0.0, 0.0]), ("a", &[1.0, 0.0]), ("b", &[2.0, 0.0]), ("c", &[10.0, 0.0])],
        "euclidean",
    );

    let result = explorer.nearest_neighbors("q", 2).expect("knn");
    assert_eq!(ids(result.iter().map(|n| &n.id)), ["a", "b"]);
    assert_eq!(result[0].distance, 1.0);
    assert_eq!(result[1].distance, 2.0);
}

#[test]
fn test_cosine_similarity_view() {
    let (_dataset, explorer) =
        open(&[("x", &[1.0, 0.0]), ("same", &[3.0, 0.0]), ("up", &[0.0, 1.0])], "cosine");

    let result = explorer.nearest_neighbors("x", 2).expect("knn");
    assert_eq!(result[0].id, "same");
    assert!((result[0].cosine_similarity() - 1.0).abs() < 1e-12);
    assert!(result[1].cosine_similarity().abs() < 1e-12);
}

// ============================================================================
// Vector Arithmetic
// ============================================================================

#[test]
fn test_king_minus_man_plus_woman() {
    let (_dataset, explorer) = open(
        &[
            ("king", &[10.0, 1.0]),
            ("man", &[2.0, 0.0]),
            ("woman", &[2.0, 1.0]),
            ("queen", &[10.0, 2.0]),
        ],
        "euclidean",
    );

    let expr = VectorExpression::builder()
        .plus("king".to_string())
        .minus("man".to_string())
        .plus("woman".to_string())
        .build()
        .expect("non-empty");

    let result = explorer.solve(&expr, 3).expect("solve");
    assert_eq!(result.vector.as_slice(), &[10.0, 2.0]);
    assert_eq!(ids(result.neighbors.iter().map(|n| &n.id)), ["queen"]);

    let path = explorer.arithmetic_path(&expr).expect("path");
    assert_eq!(path.last(), Some(&result.vector));
}

#[test]
fn test_centroid_prefers_closer_alternatives() {
    let (_dataset, explorer) = open(
        &[
            ("o", &[0.0, 0.0]),
            ("x", &[2.0, 0.0]),
            ("y", &[0.0, 2.0]),
            ("mid", &[1.0, 0.5]),
            ("outlier", &[10.0, 10.0]),
        ],
        "euclidean",
    );
    let selected: BTreeSet<String> = ["o", "x", "y"].iter().map(|s| s.to_string()).collect();

    let result = explorer.subspace_grouping(&selected, 2, true).expect("grouping");
    let c = result.vector.as_slice();
    assert!((c[0] - 2.0 / 3.0).abs() < 1e-12 && (c[1] - 2.0 / 3.0).abs() < 1e-12);
    assert_eq!(ids(result.neighbors.iter().map(|n| &n.id)), ["mid", "outlier"]);

    let first_only = explorer.subspace_grouping(&selected, 1, true).expect("grouping");
    assert_eq!(first_only.neighbors[0].id, "mid");
}

// ============================================================================
// Projection
// ============================================================================

#[test]
fn test_semantic_scale_monotone_between_anchors() {
    let (_dataset, explorer) = open(
        &[
            ("cold", &[0.0, 0.0]),
            ("hot", &[4.0, 4.0]),
            ("warm", &[2.0, 2.0]),
            ("chilly", &[1.0, 0.5]),
            ("scorching", &[3.5, 4.0]),
        ],
        "euclidean",
    );

    let service = CustomProjectionService::new(
        explorer.storage().clone(),
        explorer.search_representation().clone(),
    );
    let scores =
        service.semantic_scale(&"cold".to_string(), &"hot".to_string(), true).expect("scale");

    assert!(scores.windows(2).all(|w| w[0].coordinate <= w[1].coordinate));
    assert_eq!(scores.first().map(|s| s.id.as_str()), Some("cold"));
    assert_eq!(scores.last().map(|s| s.id.as_str()), Some("hot"));

    let warm = scores.iter().find(|s| s.id == "warm").expect("warm scored");
    assert!(warm.coordinate > scores[0].coordinate && warm.coordinate < scores[4].coordinate);
}

#[test]
fn test_custom_projection_scale_modes() {
    let (_dataset, explorer) = open(
        &[
            ("poor", &[0.0, 0.0]),
            ("rich", &[10.0, 0.0]),
            ("middle", &[5.0, 0.0]),
            ("comfortable", &[7.0, 0.5]),
            ("struggling", &[2.0, -0.5]),
            ("banana", &[5.0, 8.0]),
        ],
        "euclidean",
    );

    let by_proximity =
        explorer.custom_projection_scale("poor", "rich", 4, false, false).expect("scale");
    // anchors win the proximity cut and are dropped afterwards
    assert_eq!(ids(by_proximity.iter().map(|s| &s.id)), ["middle", "comfortable"]);

    let by_purity =
        explorer.custom_projection_scale("poor", "rich", 2, false, true).expect("scale");
    assert_eq!(ids(by_purity.iter().map(|s| &s.id)), ["struggling", "comfortable"]);
}
