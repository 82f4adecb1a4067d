mod aggregate_params;
mod bounds;

pub use aggregate_params::{AggregateParams, Metric, NoiseKind, PartitionSelectionStrategy};
pub use bounds::{BoundPair, ColumnBounds, SumBound};
