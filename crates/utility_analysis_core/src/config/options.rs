//! Top-level utility analysis request.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ParameterSet;
use crate::analysis::{self, Configurations};
use crate::error::{ConfigurationError, Result};
use crate::model::{AggregateParams, PartitionSelectionStrategy};
use crate::validation::{validate_epsilon_delta, validate_sampling_probability};

fn default_partitions_sampling_prob() -> f64 {
    1.0
}

/// Unvalidated form of [`AnalysisOptions`], and its serialised shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptionsBuilder {
    epsilon: f64,
    delta: f64,
    aggregate_params: AggregateParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parameter_set: Option<ParameterSet>,
    #[serde(default = "default_partitions_sampling_prob")]
    partitions_sampling_prob: f64,
    #[serde(default)]
    pre_aggregated_data: bool,
}

impl AnalysisOptionsBuilder {
    #[must_use]
    pub fn new(epsilon: f64, delta: f64, aggregate_params: AggregateParams) -> Self {
        Self {
            epsilon,
            delta,
            aggregate_params,
            parameter_set: None,
            partitions_sampling_prob: default_partitions_sampling_prob(),
            pre_aggregated_data: false,
        }
    }

    /// Analyse the alternates in `parameter_set` instead of the baseline alone
    #[must_use]
    pub fn parameter_set(mut self, parameter_set: ParameterSet) -> Self {
        self.parameter_set = Some(parameter_set);
        self
    }

    /// Fraction of partitions to keep when sampling the input
    #[must_use]
    pub fn partitions_sampling_prob(mut self, probability: f64) -> Self {
        self.partitions_sampling_prob = probability;
        self
    }

    /// Input rows are already aggregated per (privacy unit, partition)
    #[must_use]
    pub fn pre_aggregated_data(mut self, pre_aggregated: bool) -> Self {
        self.pre_aggregated_data = pre_aggregated;
        self
    }

    pub fn build(self) -> Result<AnalysisOptions> {
        if let Err(err) = self.validate() {
            debug!(error = %err, "analysis options rejected");
            return Err(err);
        }

        let options = AnalysisOptions {
            epsilon: self.epsilon,
            delta: self.delta,
            aggregate_params: self.aggregate_params,
            parameter_set: self.parameter_set,
            partitions_sampling_prob: self.partitions_sampling_prob,
            pre_aggregated_data: self.pre_aggregated_data,
        };
        debug!(
            epsilon = options.epsilon,
            delta = options.delta,
            n_configurations = options.n_configurations(),
            "analysis options accepted"
        );
        Ok(options)
    }

    fn validate(&self) -> Result<()> {
        validate_epsilon_delta(self.epsilon, self.delta, "AnalysisOptions")?;
        validate_sampling_probability(self.partitions_sampling_prob)
    }
}

/// Options for a utility analysis run.
///
/// Epsilon, delta and the sampling probability are validated on construction;
/// the optional [`ParameterSet`] was validated when it was built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AnalysisOptionsBuilder", into = "AnalysisOptionsBuilder")]
pub struct AnalysisOptions {
    epsilon: f64,
    delta: f64,
    aggregate_params: AggregateParams,
    parameter_set: Option<ParameterSet>,
    partitions_sampling_prob: f64,
    pre_aggregated_data: bool,
}

impl AnalysisOptions {
    /// Options for analysing `aggregate_params` alone, with default sampling
    pub fn new(epsilon: f64, delta: f64, aggregate_params: AggregateParams) -> Result<Self> {
        AnalysisOptionsBuilder::new(epsilon, delta, aggregate_params).build()
    }

    pub fn builder(
        epsilon: f64,
        delta: f64,
        aggregate_params: AggregateParams,
    ) -> AnalysisOptionsBuilder {
        AnalysisOptionsBuilder::new(epsilon, delta, aggregate_params)
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// The baseline configuration
    pub fn aggregate_params(&self) -> &AggregateParams {
        &self.aggregate_params
    }

    pub fn parameter_set(&self) -> Option<&ParameterSet> {
        self.parameter_set.as_ref()
    }

    pub fn partitions_sampling_prob(&self) -> f64 {
        self.partitions_sampling_prob
    }

    pub fn pre_aggregated_data(&self) -> bool {
        self.pre_aggregated_data
    }

    /// Number of configurations the analysis covers
    pub fn n_configurations(&self) -> usize {
        self.parameter_set.as_ref().map_or(1, ParameterSet::size)
    }

    /// See [`analysis::get_configurations`]
    pub fn configurations(&self) -> Configurations<'_> {
        analysis::get_configurations(self)
    }

    /// See [`analysis::get_partition_selection_strategies`]
    pub fn partition_selection_strategies(&self) -> Vec<PartitionSelectionStrategy> {
        analysis::get_partition_selection_strategies(self)
    }
}

impl TryFrom<AnalysisOptionsBuilder> for AnalysisOptions {
    type Error = ConfigurationError;

    fn try_from(builder: AnalysisOptionsBuilder) -> Result<Self> {
        builder.build()
    }
}

impl From<AnalysisOptions> for AnalysisOptionsBuilder {
    fn from(options: AnalysisOptions) -> Self {
        Self {
            epsilon: options.epsilon,
            delta: options.delta,
            aggregate_params: options.aggregate_params,
            parameter_set: options.parameter_set,
            partitions_sampling_prob: options.partitions_sampling_prob,
            pre_aggregated_data: options.pre_aggregated_data,
        }
    }
}
