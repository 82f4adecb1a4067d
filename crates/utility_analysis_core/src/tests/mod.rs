//! Tests for configuration building and expansion
//!
//! Tests are organized by topic:
//! - `parameter_set` - ParameterSet construction invariants and materialization
//! - `options` - AnalysisOptions validation and derived counts
//! - `expansion` - get_configurations / get_partition_selection_strategies
//! - `serde_roundtrip` - request (de)serialization goes through validation

mod expansion;

use crate::analysis::{Configuration, Configurations};
use crate::config::{AnalysisOptions, ParameterSet};
use crate::model::{AggregateParams, Metric, NoiseKind, PartitionSelectionStrategy};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_public_types_are_send_sync() {
    assert_send_sync::<AggregateParams>();
    assert_send_sync::<ParameterSet>();
    assert_send_sync::<AnalysisOptions>();
    assert_send_sync::<Configuration>();
    assert_send_sync::<Configurations<'static>>();
}

/// Baseline shared by the tests: every field set to something recognisable
pub(crate) fn baseline() -> AggregateParams {
    AggregateParams::builder()
        .metrics([Metric::Count, Metric::Sum])
        .noise_kind(NoiseKind::Gaussian)
        .partition_selection_strategy(PartitionSelectionStrategy::LaplaceThresholding)
        .max_partitions_contributed(3)
        .max_contributions_per_partition(5)
        .value_bounds(0.0, 2.0)
        .sum_bounds(-1.0, 10.0)
        .budget_weight(0.5)
        .pre_threshold(4)
        .build()
}
