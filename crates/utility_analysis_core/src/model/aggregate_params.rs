//! Baseline aggregation configuration
//!
//! `AggregateParams` is the template every analysed configuration is derived
//! from. It is owned by the caller and only ever read here.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::BoundPair;
use crate::config::AggregateParamsBuilder;

/// Aggregate to compute per partition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Count,
    PrivacyIdCount,
    Sum,
    Mean,
    Variance,
}

/// Distribution of the noise added to each aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseKind {
    #[default]
    Laplace,
    Gaussian,
}

/// Policy deciding which partitions are released
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartitionSelectionStrategy {
    #[default]
    TruncatedGeometric,
    LaplaceThresholding,
    GaussianThresholding,
}

impl NoiseKind {
    /// Name as written in request files
    pub fn as_str(&self) -> &'static str {
        match self {
            NoiseKind::Laplace => "laplace",
            NoiseKind::Gaussian => "gaussian",
        }
    }
}

impl fmt::Display for NoiseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl PartitionSelectionStrategy {
    /// Name as written in request files
    pub fn as_str(&self) -> &'static str {
        match self {
            PartitionSelectionStrategy::TruncatedGeometric => "truncated_geometric",
            PartitionSelectionStrategy::LaplaceThresholding => "laplace_thresholding",
            PartitionSelectionStrategy::GaussianThresholding => "gaussian_thresholding",
        }
    }
}

impl fmt::Display for PartitionSelectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

fn default_contribution_bound() -> u32 {
    1
}

fn default_budget_weight() -> f64 {
    1.0
}

/// Baseline aggregation configuration
///
/// # Field Groups
///
/// **Contribution bounding**:
/// - `max_partitions_contributed` - partitions a single privacy unit may touch
/// - `max_contributions_per_partition` - contributions per unit per partition
///
/// **Clipping**:
/// - `min_value` / `max_value` - per contribution
/// - `min_sum_per_partition` / `max_sum_per_partition` - per partition sum
///
/// **Mechanisms**:
/// - `noise_kind`
/// - `partition_selection_strategy`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateParams {
    #[serde(default)]
    pub metrics: Vec<Metric>,

    #[serde(default)]
    pub noise_kind: NoiseKind,

    #[serde(default = "default_contribution_bound")]
    pub max_partitions_contributed: u32,

    #[serde(default = "default_contribution_bound")]
    pub max_contributions_per_partition: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_sum_per_partition: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_sum_per_partition: Option<f64>,

    /// Share of the total privacy budget spent on this aggregation
    #[serde(default = "default_budget_weight")]
    pub budget_weight: f64,

    #[serde(default)]
    pub contribution_bounds_already_enforced: bool,

    #[serde(default)]
    pub partition_selection_strategy: PartitionSelectionStrategy,

    /// Minimum number of privacy units a partition needs before selection runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_threshold: Option<u32>,
}

impl Default for AggregateParams {
    fn default() -> Self {
        Self {
            metrics: Vec::new(),
            noise_kind: NoiseKind::default(),
            max_partitions_contributed: default_contribution_bound(),
            max_contributions_per_partition: default_contribution_bound(),
            min_value: None,
            max_value: None,
            min_sum_per_partition: None,
            max_sum_per_partition: None,
            budget_weight: default_budget_weight(),
            contribution_bounds_already_enforced: false,
            partition_selection_strategy: PartitionSelectionStrategy::default(),
            pre_threshold: None,
        }
    }
}

impl AggregateParams {
    /// Start a builder from the default configuration
    pub fn builder() -> AggregateParamsBuilder {
        AggregateParamsBuilder::new()
    }

    /// The baseline's own sum bounds as a single column
    pub fn sum_bounds(&self) -> BoundPair {
        BoundPair {
            min: self.min_sum_per_partition,
            max: self.max_sum_per_partition,
        }
    }
}
