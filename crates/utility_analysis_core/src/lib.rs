//! Multi-parameter configuration building for differential-privacy utility analysis
//!
//! A utility analysis evaluates one baseline aggregation configuration against
//! a handful of alternates. This crate turns that request into N concrete
//! configurations, each with its own contribution bounds, sum clipping bounds,
//! noise kind and partition-selection strategy.
//! It provides:
//! - The baseline [`AggregateParams`] and its per-index builder
//! - [`ParameterSet`], parallel sequences of alternate values validated up front
//! - [`AnalysisOptions`], the full request (epsilon, delta, sampling probability)
//! - Expansion functions that materialise every configuration on demand
//!
//! # Example
//!
//! ```ignore
//! use utility_analysis_core::{AggregateParams, AnalysisOptions, ParameterSet};
//! use utility_analysis_core::analysis::get_configurations;
//!
//! let baseline = AggregateParams::builder()
//!     .max_partitions_contributed(1)
//!     .max_contributions_per_partition(1)
//!     .build();
//!
//! let parameter_set = ParameterSet::builder()
//!     .max_partitions_contributed(vec![1, 2])
//!     .max_contributions_per_partition(vec![10, 11])
//!     .build()?;
//!
//! let options = AnalysisOptions::builder(1.0, 1e-6, baseline)
//!     .parameter_set(parameter_set)
//!     .build()?;
//!
//! for configuration in get_configurations(&options) {
//!     // hand configuration.params and configuration.bounds to the engine
//! }
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod error;
pub mod validation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{Configuration, Configurations};
pub use config::{
    AggregateParamsBuilder, AnalysisOptions, AnalysisOptionsBuilder, ParameterSet,
    ParameterSetBuilder,
};
pub use error::{ConfigurationError, IndexOutOfRange};
pub use model::{
    AggregateParams, BoundPair, ColumnBounds, Metric, NoiseKind, PartitionSelectionStrategy,
    SumBound,
};
