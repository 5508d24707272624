//! Test data generators for reproducible tests.
//!
//! All generators support seeded random generation for reproducibility.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use tempfile::TempDir;

/// Simple pseudo-random number generator (Xorshift64)
/// for reproducible random numbers without external dependencies.
#[derive(Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { state: if seed == 0 { 0x853c_49e6_748f_ea9b } else { seed } }
    }

    /// Generate next u64.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random f64 in range [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Generate a random f64 in range [min, max).
    pub fn next_f64_range(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_f64()
    }
}

// ============================================================================
// Vocabulary Generators
// ============================================================================

/// Generates words clustered around random centers.
///
/// Word `c{i}_w{j}` belongs to cluster `i`, so tests can check that neighbors
/// stay inside their cluster.
pub struct VocabularyGenerator {
    rng: Rng,
    dim: usize,
    spread: f64,
}

impl VocabularyGenerator {
    /// Create a generator for `dim`-dimensional words with the given seed.
    #[must_use]
    pub fn new(seed: u64, dim: usize) -> Self {
        Self { rng: Rng::new(seed), dim, spread: 0.05 }
    }

    /// Set the per-component noise around each center.
    #[must_use]
    pub fn with_spread(mut self, spread: f64) -> Self {
        self.spread = spread;
        self
    }

    /// Generate `clusters` × `per_cluster` words.
    pub fn clustered(&mut self, clusters: usize, per_cluster: usize) -> Vec<(String, Vec<f64>)> {
        let mut words = Vec::with_capacity(clusters * per_cluster);
        for c in 0..clusters {
            let center: Vec<f64> =
                (0..self.dim).map(|_| self.rng.next_f64_range(-10.0, 10.0)).collect();
            for w in 0..per_cluster {
                let vector = center
                    .iter()
                    .map(|x| x + self.rng.next_f64_range(-self.spread, self.spread))
                    .collect();
                words.push((format!("c{c}_w{w}"), vector));
            }
        }
        words
    }
}

/// Keeps the first `dims` components of every vector, a stand-in for a PCA projection.
pub fn truncate(words: &[(String, Vec<f64>)], dims: usize) -> Vec<(String, Vec<f64>)> {
    words.iter().map(|(id, v)| (id.clone(), v[..dims].to_vec())).collect()
}

// ============================================================================
// On-disk Datasets
// ============================================================================

/// Writes `[{"word": ..., "vector": [...]}, ...]` to `path`.
pub fn write_vectors_json(path: &Path, words: &[(String, Vec<f64>)]) {
    let doc: Vec<_> = words.iter().map(|(id, v)| json!({ "word": id, "vector": v })).collect();
    fs::write(path, serde_json::to_string_pretty(&doc).expect("serialize")).expect("write json");
}

/// A temporary directory holding `full_vectors.json`, `pca_vectors.json`, and
/// `latentlens.toml` pointing at them.
pub struct Dataset {
    dir: TempDir,
}

impl Dataset {
    /// Writes both representations and a config with the given `metric`.
    pub fn write(full: &[(String, Vec<f64>)], pca: &[(String, Vec<f64>)], metric: &str) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        write_vectors_json(&dir.path().join("full_vectors.json"), full);
        write_vectors_json(&dir.path().join("pca_vectors.json"), pca);

        let config = format!(
            r#"
metric = "{metric}"
default_k = 5

[[sources]]
representation = "full"
path = "full_vectors.json"

[[sources]]
representation = "pca"
path = "pca_vectors.json"
"#
        );
        fs::write(dir.path().join("latentlens.toml"), config).expect("write config");
        Self { dir }
    }

    /// Clustered vocabulary: 300-d full vectors and their first two components as PCA.
    pub fn clustered(seed: u64, clusters: usize, per_cluster: usize) -> Self {
        let full = VocabularyGenerator::new(seed, 300).clustered(clusters, per_cluster);
        let pca = truncate(&full, 2);
        Self::write(&full, &pca, "cosine")
    }

    /// Path of the config file.
    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("latentlens.toml")
    }

    /// The dataset directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Shorthand for building `(id, vector)` lists in tests.
pub fn words(entries: &[(&str, &[f64])]) -> Vec<(String, Vec<f64>)> {
    entries.iter().map(|(id, v)| (id.to_string(), v.to_vec())).collect()
}
