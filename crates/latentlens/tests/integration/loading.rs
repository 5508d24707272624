//! Loading datasets from disk: config, JSON sources, and assembly failures.

use std::fs;

use latentlens::{Error, ErrorKind, Explorer, ExplorerConfig, SpaceError};

use crate::fixtures::generators::{words, write_vectors_json};
use crate::fixtures::Dataset;

fn load(dataset: &Dataset) -> Result<Explorer, Error> {
    Explorer::load(ExplorerConfig::load(&dataset.config_path())?)
}

// ============================================================================
// Successful Loads
// ============================================================================

#[test]
fn test_load_clustered_dataset() {
    let dataset = Dataset::clustered(42, 4, 10);
    let explorer = load(&dataset).expect("dataset loads");

    assert_eq!(explorer.storage().iter().len(), 40);
    assert!(explorer.contains("c0_w0"));
    assert!(explorer.contains("c3_w9"));
    assert!(!explorer.contains("c4_w0"));

    let reps: Vec<&str> = explorer.available_representations().iter().map(|r| r.name()).collect();
    assert_eq!(reps, ["full", "pca"]);

    let full = explorer.search_representation().clone();
    let pca = explorer.display_representation().clone();
    assert_eq!(explorer.representation_dimension(&full).expect("full"), 300);
    assert_eq!(explorer.representation_dimension(&pca).expect("pca"), 2);
}

#[test]
fn test_custom_field_names() {
    let dir = tempfile::tempdir().expect("tempdir");
    let vectors = r#"[{"id": "a", "emb": [1.0, 0.0]}, {"id": "b", "emb": [0.0, 1.0]}]"#;
    fs::write(dir.path().join("full.json"), vectors).expect("write");
    fs::write(
        dir.path().join("latentlens.toml"),
        r#"
display_representation = "full"

[[sources]]
representation = "full"
path = "full.json"
id_field = "id"
vector_field = "emb"
"#,
    )
    .expect("write");

    let config = ExplorerConfig::load(&dir.path().join("latentlens.toml")).expect("config");
    let explorer = Explorer::load(config).expect("loads");
    assert_eq!(explorer.nearest_neighbors("a", 1).expect("knn")[0].id, "b");
}

#[test]
fn test_numeric_ids_load_as_text() {
    let dir = tempfile::tempdir().expect("tempdir");
    let vectors = r#"[{"word": 1, "vector": [1.0, 0.0]}, {"word": 2, "vector": [0.8, 0.2]}]"#;
    fs::write(dir.path().join("full.json"), vectors).expect("write");
    let config = ExplorerConfig {
        display_representation: "full".to_string(),
        ..ExplorerConfig::default()
    }
    .with_source("full", dir.path().join("full.json"));

    let explorer = Explorer::load(config).expect("loads");
    assert!(explorer.contains("1"));
    assert_eq!(explorer.nearest_neighbors("1", 1).expect("knn")[0].id, "2");
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_mismatched_id_sets_rejected() {
    let full = words(&[("a", &[1.0, 0.0]), ("b", &[0.0, 1.0])]);
    let pca = words(&[("a", &[1.0]), ("c", &[0.5])]);
    let dataset = Dataset::write(&full, &pca, "cosine");

    let err = load(&dataset).expect_err("id sets differ");
    assert!(matches!(err, Error::Space(SpaceError::IdSetMismatch { .. })), "{err}");
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_missing_vector_file() {
    let dataset = Dataset::clustered(7, 1, 3);
    fs::remove_file(dataset.path().join("pca_vectors.json")).expect("remove");

    let err = load(&dataset).expect_err("file missing");
    assert!(matches!(err, Error::Space(SpaceError::Io { .. })));
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_inconsistent_dimension_in_file() {
    let dataset = Dataset::clustered(7, 1, 3);
    write_vectors_json(
        &dataset.path().join("pca_vectors.json"),
        &words(&[("c0_w0", &[1.0, 2.0]), ("c0_w1", &[1.0]), ("c0_w2", &[1.0, 2.0])]),
    );

    let err = load(&dataset).expect_err("ragged vectors");
    assert!(matches!(err, Error::Space(SpaceError::InvalidSource { .. })));
}

#[test]
fn test_display_representation_must_exist() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_vectors_json(&dir.path().join("full.json"), &words(&[("a", &[1.0])]));
    let config = ExplorerConfig::default().with_source("full", dir.path().join("full.json"));

    let err = Explorer::load(config).expect_err("no pca source");
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_no_sources() {
    let err = Explorer::load(ExplorerConfig::default()).expect_err("nothing to load");
    assert!(matches!(err, Error::Space(SpaceError::NoSources)));
}

#[test]
fn test_duplicate_source_representation() {
    let config =
        ExplorerConfig::default().with_source("full", "a.json").with_source("FULL", "b.json");
    let err = Explorer::load(config).expect_err("duplicate");
    assert!(matches!(err, Error::InvalidConfig(_)));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}
