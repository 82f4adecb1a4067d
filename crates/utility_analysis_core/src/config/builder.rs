//! AggregateParams Builder
//!
//! Builds a fresh [`AggregateParams`] either from defaults or from a baseline
//! template. Expansion uses `from_baseline` so that every configuration is an
//! independent value with only the overridden fields changed.
//!
//! # Example
//!
//! ```ignore
//! use utility_analysis_core::config::AggregateParamsBuilder;
//! use utility_analysis_core::model::{Metric, NoiseKind};
//!
//! let params = AggregateParamsBuilder::new()
//!     .metric(Metric::Sum)
//!     .noise_kind(NoiseKind::Gaussian)
//!     .max_partitions_contributed(3)
//!     .sum_bounds(0.0, 100.0)
//!     .build();
//! ```

use crate::model::{AggregateParams, Metric, NoiseKind, PartitionSelectionStrategy};

/// Builder for [`AggregateParams`]
#[derive(Debug, Clone, Default)]
pub struct AggregateParamsBuilder {
    params: AggregateParams,
}

impl AggregateParamsBuilder {
    /// Create a builder seeded with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder seeded with a copy of `baseline`
    #[must_use]
    pub fn from_baseline(baseline: &AggregateParams) -> Self {
        Self {
            params: baseline.clone(),
        }
    }

    // =========================================================================
    // Metrics and mechanisms
    // =========================================================================

    /// Append a metric
    #[must_use]
    pub fn metric(mut self, metric: Metric) -> Self {
        self.params.metrics.push(metric);
        self
    }

    /// Replace the metric list
    #[must_use]
    pub fn metrics(mut self, metrics: impl IntoIterator<Item = Metric>) -> Self {
        self.params.metrics = metrics.into_iter().collect();
        self
    }

    #[must_use]
    pub fn noise_kind(mut self, noise_kind: NoiseKind) -> Self {
        self.params.noise_kind = noise_kind;
        self
    }

    #[must_use]
    pub fn partition_selection_strategy(mut self, strategy: PartitionSelectionStrategy) -> Self {
        self.params.partition_selection_strategy = strategy;
        self
    }

    #[must_use]
    pub fn budget_weight(mut self, weight: f64) -> Self {
        self.params.budget_weight = weight;
        self
    }

    #[must_use]
    pub fn pre_threshold(mut self, threshold: u32) -> Self {
        self.params.pre_threshold = Some(threshold);
        self
    }

    // =========================================================================
    // Contribution bounding
    // =========================================================================

    #[must_use]
    pub fn max_partitions_contributed(mut self, bound: u32) -> Self {
        self.params.max_partitions_contributed = bound;
        self
    }

    #[must_use]
    pub fn max_contributions_per_partition(mut self, bound: u32) -> Self {
        self.params.max_contributions_per_partition = bound;
        self
    }

    /// Mark the input as already bounded by the caller
    #[must_use]
    pub fn contribution_bounds_already_enforced(mut self, enforced: bool) -> Self {
        self.params.contribution_bounds_already_enforced = enforced;
        self
    }

    // =========================================================================
    // Clipping
    // =========================================================================

    /// Set the per-contribution clipping range
    #[must_use]
    pub fn value_bounds(mut self, min: f64, max: f64) -> Self {
        self.params.min_value = Some(min);
        self.params.max_value = Some(max);
        self
    }

    /// Set the per-partition sum clipping range
    #[must_use]
    pub fn sum_bounds(mut self, min: f64, max: f64) -> Self {
        self.params.min_sum_per_partition = Some(min);
        self.params.max_sum_per_partition = Some(max);
        self
    }

    #[must_use]
    pub fn min_sum_per_partition(mut self, min: f64) -> Self {
        self.params.min_sum_per_partition = Some(min);
        self
    }

    #[must_use]
    pub fn max_sum_per_partition(mut self, max: f64) -> Self {
        self.params.max_sum_per_partition = Some(max);
        self
    }

    pub fn build(self) -> AggregateParams {
        self.params
    }
}
