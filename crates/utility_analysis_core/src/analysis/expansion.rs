//! Expansion of analysis options into concrete configurations.

use std::iter::FusedIterator;
use std::ops::Range;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::AnalysisOptions;
use crate::error::IndexOutOfRange;
use crate::model::{AggregateParams, BoundPair, PartitionSelectionStrategy};

/// One configuration to analyse
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    /// Fresh copy of the baseline with this index's overrides applied
    pub params: AggregateParams,
    /// Sum clipping bounds, one pair per metric column
    pub bounds: Vec<BoundPair>,
}

impl Configuration {
    /// The baseline itself, clipped by its own sum bounds
    pub fn from_baseline(baseline: &AggregateParams) -> Self {
        Self {
            params: baseline.clone(),
            bounds: vec![baseline.sum_bounds()],
        }
    }
}

/// Build configuration `index` of `options`.
pub fn configuration_at(
    options: &AnalysisOptions,
    index: usize,
) -> Result<Configuration, IndexOutOfRange> {
    let len = options.n_configurations();
    if index >= len {
        return Err(IndexOutOfRange { index, len });
    }
    Ok(expand(options, index))
}

// `index` must be below `options.n_configurations()`.
fn expand(options: &AnalysisOptions, index: usize) -> Configuration {
    match options.parameter_set() {
        Some(parameter_set) => parameter_set.configuration(options.aggregate_params(), index),
        None => Configuration::from_baseline(options.aggregate_params()),
    }
}

/// All configurations of `options`, in index order.
///
/// The iterator borrows `options` and holds nothing but the remaining index
/// range, so it can be cloned or recreated at any point.
pub fn get_configurations(options: &AnalysisOptions) -> Configurations<'_> {
    Configurations {
        options,
        remaining: 0..options.n_configurations(),
    }
}

/// Partition-selection strategy of each configuration, in index order.
///
/// Cheaper than expanding full configurations when only strategies are needed.
pub fn get_partition_selection_strategies(
    options: &AnalysisOptions,
) -> Vec<PartitionSelectionStrategy> {
    if let Some(strategies) = options
        .parameter_set()
        .and_then(|parameter_set| parameter_set.partition_selection_strategy())
    {
        return strategies.to_vec();
    }
    vec![options.aggregate_params().partition_selection_strategy; options.n_configurations()]
}

/// Materialise every configuration in parallel, preserving index order
#[cfg(feature = "parallel")]
pub fn par_configurations(options: &AnalysisOptions) -> Vec<Configuration> {
    (0..options.n_configurations())
        .into_par_iter()
        .map(|index| expand(options, index))
        .collect()
}

/// Iterator over the configurations of an [`AnalysisOptions`]
#[derive(Debug, Clone)]
pub struct Configurations<'a> {
    options: &'a AnalysisOptions,
    remaining: Range<usize>,
}

impl Iterator for Configurations<'_> {
    type Item = Configuration;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.remaining.next()?;
        Some(expand(self.options, index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.remaining.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let index = self.remaining.nth(n)?;
        Some(expand(self.options, index))
    }
}

impl DoubleEndedIterator for Configurations<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let index = self.remaining.next_back()?;
        Some(expand(self.options, index))
    }
}

impl ExactSizeIterator for Configurations<'_> {}

impl FusedIterator for Configurations<'_> {}
