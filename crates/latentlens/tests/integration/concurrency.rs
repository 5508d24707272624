//! Concurrent read-only use of one session.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;

use latentlens::{Explorer, ExplorerConfig};
use latentlens_space::ops::NearestNeighbors;
use latentlens_space::Cosine;

use crate::fixtures::{Dataset, Rng};

#[test]
fn test_parallel_queries_match_sequential() {
    let dataset = Dataset::clustered(11, 6, 12);
    let config = ExplorerConfig::load(&dataset.config_path()).expect("valid config");
    let explorer = Arc::new(Explorer::load(config).expect("dataset loads"));

    let mut rng = Rng::new(99);
    let queries: Vec<String> = (0..24)
        .map(|_| format!("c{}_w{}", rng.next_u64() % 6, rng.next_u64() % 12))
        .collect();
    let expected: Vec<_> =
        queries.iter().map(|q| explorer.nearest_neighbors(q, 6).expect("knn")).collect();

    thread::scope(|scope| {
        for chunk in queries.chunks(6).zip(expected.chunks(6)) {
            let explorer = Arc::clone(&explorer);
            scope.spawn(move || {
                for (query, want) in chunk.0.iter().zip(chunk.1) {
                    assert_eq!(&explorer.nearest_neighbors(query, 6).expect("knn"), want);
                }
            });
        }
    });
}

#[test]
fn test_shared_storage_across_searches() {
    let dataset = Dataset::clustered(12, 3, 10);
    let config = ExplorerConfig::load(&dataset.config_path()).expect("valid config");
    let explorer = Explorer::load(config).expect("dataset loads");

    let storage = Arc::clone(explorer.storage());
    let search = explorer.search_representation().clone();
    let knn = NearestNeighbors::new(storage, search, Arc::new(Cosine));
    let centroid = explorer
        .subspace_grouping(&["c2_w0".to_string(), "c2_w1".to_string()].into(), 1, true)
        .expect("grouping")
        .vector;

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let knn = knn.clone();
            let centroid = centroid.clone();
            thread::spawn(move || knn.top_k_vector(&centroid, 3, &BTreeSet::new()).expect("knn"))
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().expect("thread")).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
    assert!(results[0].iter().all(|n| n.id.starts_with("c2_")));
}
