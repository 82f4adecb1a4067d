//! Configuration expansion.
//!
//! Turns validated [`AnalysisOptions`](crate::AnalysisOptions) into the
//! per-index configurations a downstream engine runs:
//!
//! ```ignore
//! use utility_analysis_core::analysis::{get_configurations, get_partition_selection_strategies};
//!
//! let strategies = get_partition_selection_strategies(&options);
//! for (configuration, strategy) in get_configurations(&options).zip(strategies) {
//!     engine.run(&configuration.params, &configuration.bounds, strategy);
//! }
//! ```
//!
//! Expansion is pure: calling it twice yields equal (but distinct) values, and
//! neither the baseline nor the parameter set is touched.

mod expansion;

pub use expansion::*;
