//! Explorer behavior on a generated, clustered vocabulary.

use std::collections::BTreeSet;

use latentlens::{ErrorKind, Explorer, ExplorerConfig, Representation, VectorExpression};

use crate::fixtures::Dataset;

fn cluster_of(id: &str) -> &str {
    id.split('_').next().unwrap_or(id)
}

fn open(seed: u64) -> (Dataset, Explorer) {
    let dataset = Dataset::clustered(seed, 5, 8);
    let config = ExplorerConfig::load(&dataset.config_path()).expect("valid config");
    let explorer = Explorer::load(config).expect("dataset loads");
    (dataset, explorer)
}

// ============================================================================
// Neighbors
// ============================================================================

#[test]
fn test_neighbors_stay_in_cluster() {
    let (_dataset, explorer) = open(1);

    for query in ["c0_w0", "c2_w3", "c4_w7"] {
        let result = explorer.nearest_neighbors(query, 7).expect("knn");
        assert_eq!(result.len(), 7);
        assert!(result.iter().all(|n| n.id != query));
        assert!(
            result.iter().all(|n| cluster_of(&n.id) == cluster_of(query)),
            "neighbors of {query} leaked out of its cluster: {result:?}"
        );
        assert!(result.windows(2).all(|w| w[0].distance <= w[1].distance));
    }
}

#[test]
fn test_default_k_from_config() {
    let (_dataset, explorer) = open(2);
    assert_eq!(explorer.config().default_k, 5);
    assert_eq!(explorer.nearest_neighbors_default("c1_w1").expect("knn").len(), 5);
}

#[test]
fn test_metric_switch_keeps_clusters() {
    let (_dataset, mut explorer) = open(3);
    let cosine = explorer.nearest_neighbors("c3_w0", 3).expect("knn");

    explorer.set_metric("euclidean").expect("known metric");
    assert_eq!(explorer.metric_id(), "euclidean");
    let euclidean = explorer.nearest_neighbors("c3_w0", 3).expect("knn");

    assert!(euclidean.iter().all(|n| cluster_of(&n.id) == "c3"));
    assert!(cosine.iter().zip(&euclidean).all(|(c, e)| c.distance != e.distance));
}

#[test]
fn test_errors_surface_with_kinds() {
    let (_dataset, explorer) = open(4);

    let unknown = explorer.nearest_neighbors("nope", 3).expect_err("unknown");
    assert_eq!(unknown.kind(), ErrorKind::NotFound);

    let zero_k = explorer.nearest_neighbors("c0_w0", 0).expect_err("k=0");
    assert_eq!(zero_k.kind(), ErrorKind::InvalidArgument);

    let umap = Representation::of("umap").expect("name");
    let absent = explorer.representation_dimension(&umap).expect_err("absent");
    assert_eq!(absent.kind(), ErrorKind::NotFound);
}

// ============================================================================
// Grouping, Arithmetic, Projection
// ============================================================================

#[test]
fn test_subspace_grouping_finds_cluster_mates() {
    let (_dataset, explorer) = open(5);
    let selected: BTreeSet<String> =
        ["c1_w0", "c1_w1", "c1_w2"].iter().map(|s| s.to_string()).collect();

    let excluded = explorer.subspace_grouping(&selected, 5, true).expect("grouping");
    assert_eq!(excluded.neighbors.len(), 5);
    assert!(excluded.neighbors.iter().all(|n| !selected.contains(&n.id)));
    assert!(excluded.neighbors.iter().all(|n| cluster_of(&n.id) == "c1"));

    let included = explorer.subspace_grouping(&selected, 8, false).expect("grouping");
    assert!(included.neighbors.iter().any(|n| selected.contains(&n.id)));
}

#[test]
fn test_subspace_grouping_validation() {
    let (_dataset, explorer) = open(6);

    let err = explorer.subspace_grouping(&BTreeSet::new(), 3, true).expect_err("empty");
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let unknown: BTreeSet<String> = ["c0_w0".to_string(), "ghost".to_string()].into();
    let err = explorer.subspace_grouping(&unknown, 3, true).expect_err("ghost");
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_arithmetic_path_uses_display_representation() {
    let (_dataset, explorer) = open(7);
    let expr = VectorExpression::builder()
        .plus("c0_w0".to_string())
        .minus("c1_w0".to_string())
        .plus("c2_w0".to_string())
        .build()
        .expect("non-empty");

    let path = explorer.arithmetic_path(&expr).expect("path");
    assert_eq!(path.len(), 3);
    assert!(path.iter().all(|v| v.dim() == 2));

    let solved = explorer.solve(&expr, 4).expect("solve");
    assert_eq!(solved.vector.dim(), 300);
    assert!(solved.neighbors.iter().all(|n| !["c0_w0", "c1_w0", "c2_w0"].contains(&n.id.as_str())));
}

#[test]
fn test_projection_between_clusters() {
    let (_dataset, explorer) = open(8);

    let scale = explorer.custom_projection_scale("c0_w0", "c1_w0", 10, true, false).expect("scale");
    assert_eq!(scale.len(), 10);
    assert!(scale.windows(2).all(|w| w[0].coordinate <= w[1].coordinate));

    let pure = explorer.custom_projection_scale("c0_w0", "c1_w0", 6, false, true).expect("scale");
    assert_eq!(pure.len(), 6);
    assert!(pure.iter().all(|s| s.id != "c0_w0" && s.id != "c1_w0"));
    // the purest words sit at the two ends of the axis
    assert!(pure.iter().all(|s| matches!(cluster_of(&s.id), "c0" | "c1")));
}
