//! Analysis configuration
//!
//! The request is built in two layers:
//!
//! - [`ParameterSet`] - parallel sequences of alternate values, one entry per
//!   configuration to analyse
//! - [`AnalysisOptions`] - privacy budget, baseline [`AggregateParams`] and the
//!   optional parameter set
//!
//! Both are validated once, when built, and are immutable afterwards.
//! Deserialising either type goes through the same validation.
//!
//! ```ignore
//! use utility_analysis_core::config::{AnalysisOptions, ParameterSet};
//!
//! let parameter_set = ParameterSet::builder()
//!     .min_sum_per_partition(vec![vec![1.0, 2.0], vec![3.0, 4.0]])
//!     .max_sum_per_partition(vec![vec![5.0, 6.0], vec![7.0, 8.0]])
//!     .build()?;
//!
//! let options = AnalysisOptions::builder(1.0, 1e-6, baseline)
//!     .parameter_set(parameter_set)
//!     .partitions_sampling_prob(0.1)
//!     .build()?;
//!
//! assert_eq!(options.n_configurations(), 2);
//! ```
//!
//! [`AggregateParams`]: crate::model::AggregateParams

pub mod builder;
pub mod options;
pub mod parameter_set;

pub use builder::AggregateParamsBuilder;
pub use options::{AnalysisOptions, AnalysisOptionsBuilder};
pub use parameter_set::{ParameterSet, ParameterSetBuilder};
