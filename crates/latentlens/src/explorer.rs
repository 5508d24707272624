//! The explorer session.

use std::collections::BTreeSet;
use std::sync::Arc;

use latentlens_core::{Representation, Vector};
use latentlens_space::distance::{available_metrics, metric_by_name, DistanceMetric};
use latentlens_space::lab::{
    LabResult, VectorArithmeticLab, VectorExpression, VectorExpressionEvaluator,
};
use latentlens_space::ops::{NearestNeighbors, Neighbor};
use latentlens_space::projection::{CustomProjectionService, ProjectionScore};
use latentlens_space::source::JsonSource;
use latentlens_space::store::{EmbeddingAssembler, EmbeddingGroup, EmbeddingStorage};
use latentlens_space::SpaceError;
use tracing::info;

use crate::config::ExplorerConfig;
use crate::error::Result;

type Storage = EmbeddingStorage<String>;

/// An interactive exploration session over one loaded dataset.
///
/// The storage is shared and never changes; switching the metric or the
/// display representation only rebuilds the lightweight services on top of
/// it. Every query method takes `&self`.
///
/// # Example
///
/// ```ignore
/// let config = ExplorerConfig::load(Path::new("latentlens.toml"))?;
/// let explorer = Explorer::load(config)?;
///
/// for n in explorer.nearest_neighbors("cat", 5)? {
///     println!("{}  dist={:.5}", n.id, n.distance);
/// }
/// ```
pub struct Explorer {
    storage: Arc<Storage>,
    config: ExplorerConfig,
    search: Representation,
    display: Representation,
    metric: Arc<dyn DistanceMetric>,
    knn: NearestNeighbors<String, Storage>,
    lab: VectorArithmeticLab<String, Storage>,
    projection: CustomProjectionService<String, Storage>,
    display_evaluator: VectorExpressionEvaluator<String, Storage>,
}

impl Explorer {
    /// Reads every configured source and opens a session over the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid, a source cannot be read or
    /// parsed, the sources are inconsistent, or a configured representation
    /// is not provided by any source.
    pub fn load(config: ExplorerConfig) -> Result<Self> {
        config.validate()?;

        let mut assembler = EmbeddingAssembler::new();
        for source in &config.sources {
            assembler.add_source(Box::new(JsonSource::from_path(
                source.representation()?,
                source.path.clone(),
                source.format()?,
            )));
        }
        let storage = assembler.assemble()?;

        Self::from_storage(Arc::new(storage), config)
    }

    /// Opens a session over an already built storage.
    ///
    /// `config.sources` is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or names a representation the
    /// storage does not provide.
    pub fn from_storage(storage: Arc<Storage>, config: ExplorerConfig) -> Result<Self> {
        config.validate()?;
        let search_rep = config.search_representation()?;
        let display_rep = config.display_representation()?;
        for rep in [&search_rep, &display_rep] {
            if !storage.available_representations().contains(rep) {
                return Err(SpaceError::UnknownRepresentation(rep.clone()).into());
            }
        }
        let metric = metric_by_name(&config.metric)?;

        info!(
            entities = storage.len(),
            search = %search_rep,
            display = %display_rep,
            metric = metric.name(),
            "explorer session opened"
        );

        let shared = || Arc::clone(&storage);
        Ok(Self {
            knn: NearestNeighbors::new(shared(), search_rep.clone(), Arc::clone(&metric)),
            lab: VectorArithmeticLab::new(shared(), search_rep.clone(), Arc::clone(&metric)),
            projection: CustomProjectionService::new(shared(), search_rep.clone()),
            display_evaluator: VectorExpressionEvaluator::new(shared(), display_rep.clone()),
            storage,
            config,
            search: search_rep,
            display: display_rep,
            metric,
        })
    }

    /// The shared storage.
    #[must_use]
    pub fn storage(&self) -> &Arc<EmbeddingStorage<String>> {
        &self.storage
    }

    /// The configuration the session was opened with.
    #[must_use]
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Whether `id` is part of the dataset.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.storage.contains(&id.to_string())
    }

    /// Representations every entity provides.
    #[must_use]
    pub fn available_representations(&self) -> &BTreeSet<Representation> {
        self.storage.available_representations()
    }

    /// Dimension of `rep`.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if `rep` is not available.
    pub fn representation_dimension(&self, rep: &Representation) -> Result<usize> {
        Ok(self.storage.dimension(rep)?)
    }

    /// The representation searches run in.
    #[must_use]
    pub fn search_representation(&self) -> &Representation {
        &self.search
    }

    /// The representation arithmetic paths are reported in.
    #[must_use]
    pub fn display_representation(&self) -> &Representation {
        &self.display
    }

    /// Switches the representation used for [`arithmetic_path`](Self::arithmetic_path).
    ///
    /// # Errors
    ///
    /// Returns a not-found error if `rep` is not available.
    pub fn set_display_representation(&mut self, rep: Representation) -> Result<()> {
        if !self.storage.available_representations().contains(&rep) {
            return Err(SpaceError::UnknownRepresentation(rep).into());
        }
        self.display_evaluator =
            VectorExpressionEvaluator::new(Arc::clone(&self.storage), rep.clone());
        self.display = rep;
        Ok(())
    }

    /// Identifiers of every selectable metric, in display order.
    #[must_use]
    pub fn available_metrics(&self) -> Vec<&'static str> {
        available_metrics().iter().map(|m| m.name()).collect()
    }

    /// Identifier of the active metric.
    #[must_use]
    pub fn metric_id(&self) -> &'static str {
        self.metric.name()
    }

    /// Switches the metric used by neighbor search and arithmetic.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error for an unknown identifier; the
    /// active metric is left unchanged.
    pub fn set_metric(&mut self, id: &str) -> Result<()> {
        let metric = metric_by_name(id)?;
        let storage = &self.storage;
        self.knn =
            NearestNeighbors::new(Arc::clone(storage), self.search.clone(), Arc::clone(&metric));
        self.lab =
            VectorArithmeticLab::new(Arc::clone(storage), self.search.clone(), Arc::clone(&metric));
        info!(metric = metric.name(), "metric switched");
        self.config.metric = metric.name().to_string();
        self.metric = metric;
        Ok(())
    }

    /// The `k` nearest neighbors of `id`, excluding `id` itself.
    ///
    /// # Errors
    ///
    /// Fails if `k == 0` or `id` is unknown.
    pub fn nearest_neighbors(&self, id: &str, k: usize) -> Result<Vec<Neighbor<String>>> {
        Ok(self.knn.top_k(&id.to_string(), k)?)
    }

    /// [`nearest_neighbors`](Self::nearest_neighbors) with the configured `default_k`.
    ///
    /// # Errors
    ///
    /// Fails if `id` is unknown.
    pub fn nearest_neighbors_default(&self, id: &str) -> Result<Vec<Neighbor<String>>> {
        self.nearest_neighbors(id, self.config.default_k)
    }

    /// A cleaned semantic scale between `a` and `b`.
    ///
    /// With `use_purity_filter` the `top_n` highest-purity entities on the
    /// centered axis are kept; otherwise the `top_n` entities closest to the
    /// axis anchored at `a`. Either way the result is sorted by coordinate.
    ///
    /// # Errors
    ///
    /// Fails if `top_n == 0`, an anchor is unknown, or the anchors coincide.
    pub fn custom_projection_scale(
        &self,
        a: &str,
        b: &str,
        top_n: usize,
        include_anchors: bool,
        use_purity_filter: bool,
    ) -> Result<Vec<ProjectionScore<String>>> {
        let (a, b) = (a.to_string(), b.to_string());
        let scores = if use_purity_filter {
            self.projection.clean_scale_by_purity(&a, &b, top_n, include_anchors)?
        } else {
            self.projection.clean_semantic_scale(&a, &b, top_n, include_anchors)?
        };
        Ok(scores)
    }

    /// Solves an analogy such as `king − man + woman`.
    ///
    /// # Errors
    ///
    /// Fails if `k == 0` or a term is unknown.
    pub fn solve(&self, expr: &VectorExpression<String>, k: usize) -> Result<LabResult<String>> {
        Ok(self.lab.solve(expr, k)?)
    }

    /// Neighbors of the centroid of `selected`.
    ///
    /// # Errors
    ///
    /// Fails if `selected` is empty, `k == 0`, or an id is unknown.
    pub fn subspace_grouping(
        &self,
        selected: &BTreeSet<String>,
        k: usize,
        exclude_selected: bool,
    ) -> Result<LabResult<String>> {
        Ok(self.lab.group_centroid(selected, k, exclude_selected)?)
    }

    /// Running sums of `expr` in the display representation, one per term.
    ///
    /// # Errors
    ///
    /// Fails if a term is unknown.
    pub fn arithmetic_path(&self, expr: &VectorExpression<String>) -> Result<Vec<Vector>> {
        Ok(self.display_evaluator.partial_sums(expr)?)
    }
}

impl std::fmt::Debug for Explorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Explorer")
            .field("entities", &self.storage.len())
            .field("search", &self.search)
            .field("display", &self.display)
            .field("metric", &self.metric.name())
            .finish_non_exhaustive()
    }
}
