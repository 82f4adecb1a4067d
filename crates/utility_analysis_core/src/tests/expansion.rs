//! Expansion of options into per-index configurations

use super::baseline;
use crate::analysis::{
    Configuration, configuration_at, get_configurations, get_partition_selection_strategies,
};
use crate::config::{AnalysisOptions, ParameterSet};
use crate::error::IndexOutOfRange;
use crate::model::{AggregateParams, BoundPair, PartitionSelectionStrategy};

fn options_with(parameter_set: ParameterSet) -> AnalysisOptions {
    AnalysisOptions::builder(1.0, 1e-6, baseline())
        .parameter_set(parameter_set)
        .build()
        .unwrap()
}

#[test]
fn test_no_parameter_set_yields_baseline() {
    let options = AnalysisOptions::new(1.0, 1e-6, baseline()).unwrap();
    let configurations: Vec<Configuration> = get_configurations(&options).collect();

    assert_eq!(configurations.len(), 1);
    assert_eq!(configurations[0].params, baseline());
    assert_eq!(configurations[0].bounds, vec![BoundPair::new(-1.0, 10.0)]);
}

#[test]
fn test_no_parameter_set_with_unset_sum_bounds() {
    let options = AnalysisOptions::new(1.0, 0.0, AggregateParams::default()).unwrap();
    let configurations: Vec<Configuration> = get_configurations(&options).collect();

    assert_eq!(
        configurations[0].bounds,
        vec![BoundPair {
            min: None,
            max: None
        }]
    );
}

#[test]
fn test_contribution_bounds_are_zipped() {
    let parameter_set = ParameterSet::builder()
        .max_partitions_contributed(vec![1, 2])
        .max_contributions_per_partition(vec![10, 11])
        .build()
        .unwrap();
    let options = options_with(parameter_set);
    assert_eq!(options.n_configurations(), 2);

    let configurations: Vec<Configuration> = get_configurations(&options).collect();
    assert_eq!(configurations.len(), 2);

    let expected_0 = AggregateParams {
        max_partitions_contributed: 1,
        max_contributions_per_partition: 10,
        ..baseline()
    };
    let expected_1 = AggregateParams {
        max_partitions_contributed: 2,
        max_contributions_per_partition: 11,
        ..baseline()
    };
    assert_eq!(configurations[0].params, expected_0);
    assert_eq!(configurations[1].params, expected_1);
}

#[test]
fn test_multi_column_bounds() {
    let parameter_set = ParameterSet::builder()
        .min_sum_per_partition(vec![vec![1.0, 2.0], vec![3.0, 4.0]])
        .max_sum_per_partition(vec![vec![5.0, 6.0], vec![7.0, 8.0]])
        .build()
        .unwrap();
    let options = options_with(parameter_set);

    let bounds: Vec<Vec<BoundPair>> = get_configurations(&options).map(|c| c.bounds).collect();
    assert_eq!(
        bounds,
        vec![
            vec![BoundPair::new(1.0, 5.0), BoundPair::new(2.0, 6.0)],
            vec![BoundPair::new(3.0, 7.0), BoundPair::new(4.0, 8.0)],
        ]
    );
}

#[test]
fn test_strategies_repeat_baseline_without_parameter_set() {
    let options = AnalysisOptions::new(1.0, 0.0, baseline()).unwrap();
    assert_eq!(
        get_partition_selection_strategies(&options),
        vec![PartitionSelectionStrategy::LaplaceThresholding]
    );
}

#[test]
fn test_strategies_repeat_baseline_when_not_supplied() {
    let parameter_set = ParameterSet::builder()
        .max_partitions_contributed(vec![1, 2, 3])
        .build()
        .unwrap();
    let options = options_with(parameter_set);

    assert_eq!(
        get_partition_selection_strategies(&options),
        vec![PartitionSelectionStrategy::LaplaceThresholding; 3]
    );
}

#[test]
fn test_strategies_verbatim_when_supplied() {
    let strategies = vec![
        PartitionSelectionStrategy::GaussianThresholding,
        PartitionSelectionStrategy::TruncatedGeometric,
    ];
    let parameter_set = ParameterSet::builder()
        .partition_selection_strategy(strategies.clone())
        .build()
        .unwrap();
    let options = options_with(parameter_set);

    assert_eq!(get_partition_selection_strategies(&options), strategies);
    assert_eq!(options.partition_selection_strategies(), strategies);

    // Strategies also land in the materialized params
    let applied: Vec<PartitionSelectionStrategy> = get_configurations(&options)
        .map(|c| c.params.partition_selection_strategy)
        .collect();
    assert_eq!(applied, strategies);
}

#[test]
fn test_repeated_calls_are_value_equal() {
    let parameter_set = ParameterSet::builder()
        .max_partitions_contributed(vec![1, 2])
        .min_sum_per_partition(vec![0.0, 1.0])
        .max_sum_per_partition(vec![2.0, 3.0])
        .build()
        .unwrap();
    let options = options_with(parameter_set);

    let first: Vec<Configuration> = get_configurations(&options).collect();
    let second: Vec<Configuration> = options.configurations().collect();
    assert_eq!(first, second);
}

#[test]
fn test_iterator_is_exact_and_restartable() {
    let parameter_set = ParameterSet::builder()
        .max_partitions_contributed(vec![1, 2, 3])
        .build()
        .unwrap();
    let options = options_with(parameter_set);

    let mut configurations = get_configurations(&options);
    assert_eq!(configurations.len(), 3);

    let first = configurations.next().unwrap();
    assert_eq!(first.params.max_partitions_contributed, 1);
    assert_eq!(configurations.len(), 2);

    // A clone resumes from the same index
    let resumed: Vec<u32> = configurations
        .clone()
        .map(|c| c.params.max_partitions_contributed)
        .collect();
    assert_eq!(resumed, vec![2, 3]);

    let last = configurations.next_back().unwrap();
    assert_eq!(last.params.max_partitions_contributed, 3);
    assert_eq!(configurations.len(), 1);

    configurations.next();
    assert!(configurations.next().is_none());
    assert!(configurations.next().is_none());
}

#[test]
fn test_iterator_yields_every_reported_index() {
    let parameter_set = ParameterSet::builder()
        .max_partitions_contributed(vec![1, 2, 3, 4])
        .build()
        .unwrap();
    let options = options_with(parameter_set);

    let reported = get_configurations(&options).len();
    assert_eq!(get_configurations(&options).count(), reported);
    assert_eq!(get_configurations(&options).rev().count(), reported);

    let mut configurations = get_configurations(&options);
    let third = configurations.nth(2).unwrap();
    assert_eq!(Ok(third), configuration_at(&options, 2));
    assert_eq!(configurations.len(), 1);
    assert!(configurations.nth(1).is_none());
}

#[test]
fn test_configuration_at() {
    let parameter_set = ParameterSet::builder()
        .max_contributions_per_partition(vec![8, 9])
        .build()
        .unwrap();
    let options = options_with(parameter_set);

    let configuration = configuration_at(&options, 1).unwrap();
    assert_eq!(configuration.params.max_contributions_per_partition, 9);
    assert_eq!(
        configuration_at(&options, 2),
        Err(IndexOutOfRange { index: 2, len: 2 })
    );

    let single = AnalysisOptions::new(1.0, 0.0, baseline()).unwrap();
    assert!(configuration_at(&single, 0).is_ok());
    assert_eq!(
        configuration_at(&single, 1),
        Err(IndexOutOfRange { index: 1, len: 1 })
    );
}

#[cfg(feature = "parallel")]
#[test]
fn test_par_configurations_matches_sequential() {
    use crate::analysis::par_configurations;

    let parameter_set = ParameterSet::builder()
        .max_partitions_contributed(1..=32)
        .build()
        .unwrap();
    let options = options_with(parameter_set);

    let sequential: Vec<Configuration> = get_configurations(&options).collect();
    assert_eq!(par_configurations(&options), sequential);
}
