//! Alternate parameter values for multi-configuration analysis.
//!
//! Each field of a [`ParameterSet`] is an optional sequence; entry `i` of
//! every supplied sequence together describes configuration `i`. Fields
//! that are not supplied keep the baseline's value for every configuration.
//!
//! ```ignore
//! // Analyses (1 partition, 10 contributions) and (2 partitions, 11 contributions)
//! let parameter_set = ParameterSet::builder()
//!     .max_partitions_contributed(vec![1, 2])
//!     .max_contributions_per_partition(vec![10, 11])
//!     .build()?;
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::AggregateParamsBuilder;
use crate::analysis::Configuration;
use crate::error::{ConfigurationError, IndexOutOfRange, Result};
use crate::model::{AggregateParams, ColumnBounds, NoiseKind, PartitionSelectionStrategy, SumBound};

const MIN_SUM_FIELD: &str = "min_sum_per_partition";
const MAX_SUM_FIELD: &str = "max_sum_per_partition";

/// Unvalidated form of a [`ParameterSet`].
///
/// Also the serialised shape: a parameter set read from a request file is
/// deserialised into this builder and then built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSetBuilder {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_partitions_contributed: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_contributions_per_partition: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_sum_per_partition: Option<Vec<SumBound>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_sum_per_partition: Option<Vec<SumBound>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    noise_kind: Option<Vec<NoiseKind>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    partition_selection_strategy: Option<Vec<PartitionSelectionStrategy>>,
}

impl ParameterSetBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn max_partitions_contributed(mut self, values: impl IntoIterator<Item = u32>) -> Self {
        self.max_partitions_contributed = Some(values.into_iter().collect());
        self
    }

    #[must_use]
    pub fn max_contributions_per_partition(
        mut self,
        values: impl IntoIterator<Item = u32>,
    ) -> Self {
        self.max_contributions_per_partition = Some(values.into_iter().collect());
        self
    }

    /// Minimum sum per configuration. Accepts scalars (`f64`) or one row of
    /// per-column values (`Vec<f64>`) per configuration.
    #[must_use]
    pub fn min_sum_per_partition<T: Into<SumBound>>(
        mut self,
        values: impl IntoIterator<Item = T>,
    ) -> Self {
        self.min_sum_per_partition = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Maximum sum per configuration, shaped like `min_sum_per_partition`.
    #[must_use]
    pub fn max_sum_per_partition<T: Into<SumBound>>(
        mut self,
        values: impl IntoIterator<Item = T>,
    ) -> Self {
        self.max_sum_per_partition = Some(values.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn noise_kind(mut self, values: impl IntoIterator<Item = NoiseKind>) -> Self {
        self.noise_kind = Some(values.into_iter().collect());
        self
    }

    #[must_use]
    pub fn partition_selection_strategy(
        mut self,
        values: impl IntoIterator<Item = PartitionSelectionStrategy>,
    ) -> Self {
        self.partition_selection_strategy = Some(values.into_iter().collect());
        self
    }

    /// Validate and build the parameter set
    pub fn build(self) -> Result<ParameterSet> {
        let result = self.validate();
        match &result {
            Ok(parameter_set) => debug!(size = parameter_set.size, "parameter set accepted"),
            Err(err) => debug!(error = %err, "parameter set rejected"),
        }
        result
    }

    fn validate(self) -> Result<ParameterSet> {
        let max_partitions_contributed = non_empty(self.max_partitions_contributed);
        let max_contributions_per_partition = non_empty(self.max_contributions_per_partition);
        let min_sum = non_empty(self.min_sum_per_partition);
        let max_sum = non_empty(self.max_sum_per_partition);
        let noise_kind = non_empty(self.noise_kind);
        let partition_selection_strategy = non_empty(self.partition_selection_strategy);

        let lengths = [
            (
                "max_partitions_contributed",
                max_partitions_contributed.as_ref().map(Vec::len),
            ),
            (
                "max_contributions_per_partition",
                max_contributions_per_partition.as_ref().map(Vec::len),
            ),
            (MIN_SUM_FIELD, min_sum.as_ref().map(Vec::len)),
            (MAX_SUM_FIELD, max_sum.as_ref().map(Vec::len)),
            ("noise_kind", noise_kind.as_ref().map(Vec::len)),
            (
                "partition_selection_strategy",
                partition_selection_strategy.as_ref().map(Vec::len),
            ),
        ];

        let mut size = None;
        for (field, len) in lengths {
            let Some(found) = len else { continue };
            match size {
                None => size = Some(found),
                Some(expected) if expected != found => {
                    return Err(ConfigurationError::LengthMismatch {
                        field,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
        }
        let size = size.ok_or(ConfigurationError::EmptyParameterSet)?;

        let sum_bounds = match (min_sum, max_sum) {
            (Some(min), Some(max)) => Some(pair_sum_bounds(&min, &max)?),
            (None, None) => None,
            _ => return Err(ConfigurationError::UnpairedSumBounds),
        };

        Ok(ParameterSet {
            max_partitions_contributed,
            max_contributions_per_partition,
            sum_bounds,
            noise_kind,
            partition_selection_strategy,
            size,
        })
    }
}

/// An empty sequence means the same as an absent one
fn non_empty<T>(values: Option<Vec<T>>) -> Option<Vec<T>> {
    values.filter(|v| !v.is_empty())
}

/// Pair min and max rows index by index.
///
/// When every row of both sequences is multi-column, each sequence must also
/// use a single column count throughout.
fn pair_sum_bounds(min: &[SumBound], max: &[SumBound]) -> Result<Vec<ColumnBounds>> {
    if min.iter().chain(max).all(SumBound::is_multi_column) {
        check_common_column_count(min, MIN_SUM_FIELD)?;
        check_common_column_count(max, MAX_SUM_FIELD)?;
    }

    min.iter()
        .zip(max)
        .enumerate()
        .map(|(index, (lo, hi))| {
            ColumnBounds::pair(lo, hi).ok_or(ConfigurationError::ColumnCountMismatch {
                index,
                min_columns: lo.column_count(),
                max_columns: hi.column_count(),
            })
        })
        .collect()
}

fn check_common_column_count(rows: &[SumBound], field: &'static str) -> Result<()> {
    if rows
        .windows(2)
        .all(|w| w[0].column_count() == w[1].column_count())
    {
        Ok(())
    } else {
        Err(ConfigurationError::InconsistentColumnCount { field })
    }
}

/// Validated alternate parameter values.
///
/// Invariants (checked once, by [`ParameterSetBuilder::build`]):
/// - at least one sequence is supplied
/// - every supplied sequence has length [`size`](Self::size)
/// - min and max sum sequences are both supplied or both absent, with
///   matching row shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ParameterSetBuilder", into = "ParameterSetBuilder")]
pub struct ParameterSet {
    max_partitions_contributed: Option<Vec<u32>>,
    max_contributions_per_partition: Option<Vec<u32>>,
    sum_bounds: Option<Vec<ColumnBounds>>,
    noise_kind: Option<Vec<NoiseKind>>,
    partition_selection_strategy: Option<Vec<PartitionSelectionStrategy>>,
    size: usize,
}

impl ParameterSet {
    pub fn builder() -> ParameterSetBuilder {
        ParameterSetBuilder::new()
    }

    /// Number of configurations described
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn max_partitions_contributed(&self) -> Option<&[u32]> {
        self.max_partitions_contributed.as_deref()
    }

    pub fn max_contributions_per_partition(&self) -> Option<&[u32]> {
        self.max_contributions_per_partition.as_deref()
    }

    pub fn min_sum_per_partition(&self) -> Option<Vec<SumBound>> {
        self.sum_bounds
            .as_ref()
            .map(|rows| rows.iter().map(ColumnBounds::min_row).collect())
    }

    pub fn max_sum_per_partition(&self) -> Option<Vec<SumBound>> {
        self.sum_bounds
            .as_ref()
            .map(|rows| rows.iter().map(ColumnBounds::max_row).collect())
    }

    /// Paired sum bounds, one entry per configuration
    pub fn sum_bounds(&self) -> Option<&[ColumnBounds]> {
        self.sum_bounds.as_deref()
    }

    pub fn noise_kind(&self) -> Option<&[NoiseKind]> {
        self.noise_kind.as_deref()
    }

    pub fn partition_selection_strategy(&self) -> Option<&[PartitionSelectionStrategy]> {
        self.partition_selection_strategy.as_deref()
    }

    /// Build configuration `index` from `baseline`.
    ///
    /// Supplied fields override the baseline; sum bounds are never written
    /// into the returned params, they come back as the bound-pair list. With
    /// no sum sequences the baseline's own sum bounds form a single pair.
    pub fn materialize(
        &self,
        baseline: &AggregateParams,
        index: usize,
    ) -> std::result::Result<Configuration, IndexOutOfRange> {
        if index >= self.size {
            return Err(IndexOutOfRange {
                index,
                len: self.size,
            });
        }
        Ok(self.configuration(baseline, index))
    }

    /// Build configuration `index`, which must be below [`Self::size`].
    pub(crate) fn configuration(&self, baseline: &AggregateParams, index: usize) -> Configuration {
        let mut builder = AggregateParamsBuilder::from_baseline(baseline);
        if let Some(values) = &self.max_partitions_contributed {
            builder = builder.max_partitions_contributed(values[index]);
        }
        if let Some(values) = &self.max_contributions_per_partition {
            builder = builder.max_contributions_per_partition(values[index]);
        }
        if let Some(values) = &self.noise_kind {
            builder = builder.noise_kind(values[index]);
        }
        if let Some(values) = &self.partition_selection_strategy {
            builder = builder.partition_selection_strategy(values[index]);
        }

        let bounds = match &self.sum_bounds {
            Some(rows) => rows[index].to_pairs(),
            None => vec![baseline.sum_bounds()],
        };

        trace!(index, columns = bounds.len(), "materialized configuration");
        Configuration {
            params: builder.build(),
            bounds,
        }
    }
}

impl TryFrom<ParameterSetBuilder> for ParameterSet {
    type Error = ConfigurationError;

    fn try_from(builder: ParameterSetBuilder) -> Result<Self> {
        builder.build()
    }
}

impl From<ParameterSet> for ParameterSetBuilder {
    fn from(parameter_set: ParameterSet) -> Self {
        Self {
            min_sum_per_partition: parameter_set.min_sum_per_partition(),
            max_sum_per_partition: parameter_set.max_sum_per_partition(),
            max_partitions_contributed: parameter_set.max_partitions_contributed,
            max_contributions_per_partition: parameter_set.max_contributions_per_partition,
            noise_kind: parameter_set.noise_kind,
            partition_selection_strategy: parameter_set.partition_selection_strategy,
        }
    }
}
