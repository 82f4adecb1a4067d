//! Sum clipping bounds
//!
//! Alternate sum bounds arrive as two parallel sequences of [`SumBound`] rows
//! (one for the minimum, one for the maximum). A validated row pair becomes a
//! [`ColumnBounds`], which yields the [`BoundPair`]s handed downstream.

use serde::{Deserialize, Serialize};

/// A (min, max) clipping range for one metric column.
///
/// Either end is `None` only when it comes from a baseline that leaves its
/// sum bounds unset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundPair {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl BoundPair {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Check if both ends are set
    pub fn is_bounded(&self) -> bool {
        self.min.is_some() && self.max.is_some()
    }
}

impl From<(f64, f64)> for BoundPair {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

/// One row of a min or max sum sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SumBound {
    SingleColumn(f64),
    MultiColumn(Vec<f64>),
}

impl SumBound {
    /// Number of columns, or `None` for a scalar row
    pub fn column_count(&self) -> Option<usize> {
        match self {
            SumBound::SingleColumn(_) => None,
            SumBound::MultiColumn(values) => Some(values.len()),
        }
    }

    pub fn is_multi_column(&self) -> bool {
        matches!(self, SumBound::MultiColumn(_))
    }
}

impl From<f64> for SumBound {
    fn from(value: f64) -> Self {
        SumBound::SingleColumn(value)
    }
}

impl From<Vec<f64>> for SumBound {
    fn from(values: Vec<f64>) -> Self {
        SumBound::MultiColumn(values)
    }
}

/// A min row and a max row of identical shape, paired position-wise
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnBounds {
    SingleColumn(BoundPair),
    MultiColumn(Vec<BoundPair>),
}

impl ColumnBounds {
    /// Pair a min row with a max row. Returns `None` if their shapes differ.
    pub fn pair(min: &SumBound, max: &SumBound) -> Option<Self> {
        match (min, max) {
            (SumBound::SingleColumn(lo), SumBound::SingleColumn(hi)) => {
                Some(ColumnBounds::SingleColumn(BoundPair::new(*lo, *hi)))
            }
            (SumBound::MultiColumn(lo), SumBound::MultiColumn(hi)) if lo.len() == hi.len() => {
                let pairs = lo
                    .iter()
                    .zip(hi)
                    .map(|(&lo, &hi)| BoundPair::new(lo, hi))
                    .collect();
                Some(ColumnBounds::MultiColumn(pairs))
            }
            _ => None,
        }
    }

    pub fn column_count(&self) -> Option<usize> {
        match self {
            ColumnBounds::SingleColumn(_) => None,
            ColumnBounds::MultiColumn(pairs) => Some(pairs.len()),
        }
    }

    /// Bound pairs in column order; a single-column row yields one pair
    pub fn to_pairs(&self) -> Vec<BoundPair> {
        match self {
            ColumnBounds::SingleColumn(pair) => vec![*pair],
            ColumnBounds::MultiColumn(pairs) => pairs.clone(),
        }
    }

    /// Reconstruct the min row this pairing was built from
    pub fn min_row(&self) -> SumBound {
        self.project(|pair| pair.min)
    }

    /// Reconstruct the max row this pairing was built from
    pub fn max_row(&self) -> SumBound {
        self.project(|pair| pair.max)
    }

    // Pairs built by `pair` always have both ends set.
    fn project(&self, end: impl Fn(&BoundPair) -> Option<f64>) -> SumBound {
        match self {
            ColumnBounds::SingleColumn(pair) => {
                SumBound::SingleColumn(end(pair).unwrap_or_default())
            }
            ColumnBounds::MultiColumn(pairs) => SumBound::MultiColumn(
                pairs.iter().map(|p| end(p).unwrap_or_default()).collect(),
            ),
        }
    }
}
