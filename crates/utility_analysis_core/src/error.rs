use std::fmt;

/// Errors raised while constructing a [`ParameterSet`](crate::ParameterSet)
/// or [`AnalysisOptions`](crate::AnalysisOptions).
///
/// Every variant is detected at construction time; expansion never fails with
/// one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// None of the six alternate sequences was supplied
    EmptyParameterSet,
    /// A supplied sequence disagrees with the length of the others
    LengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    /// Exactly one of min/max sum per partition was supplied
    UnpairedSumBounds,
    /// Multi-column rows of one sum sequence do not share a column count
    InconsistentColumnCount { field: &'static str },
    /// Row `index` has a different shape in the min and max sum sequences.
    /// `None` stands for a single-column (scalar) row.
    ColumnCountMismatch {
        index: usize,
        min_columns: Option<usize>,
        max_columns: Option<usize>,
    },
    SamplingProbabilityOutOfRange(f64),
    InvalidEpsilon {
        context: &'static str,
        epsilon: f64,
    },
    InvalidDelta {
        context: &'static str,
        delta: f64,
    },
}

fn describe_row(columns: Option<usize>) -> String {
    match columns {
        Some(n) => format!("{n} columns"),
        None => "a single value".to_string(),
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::EmptyParameterSet => {
                write!(f, "ParameterSet must have at least 1 non-empty attribute")
            }
            ConfigurationError::LengthMismatch {
                field,
                expected,
                found,
            } => write!(
                f,
                "all set attributes in ParameterSet must have the same length: \
                 {field} has {found} values, expected {expected}"
            ),
            ConfigurationError::UnpairedSumBounds => write!(
                f,
                "ParameterSet: min_sum_per_partition and max_sum_per_partition \
                 must be both set or both unset"
            ),
            ConfigurationError::InconsistentColumnCount { field } => write!(
                f,
                "if elements of min_sum_per_partition and max_sum_per_partition are \
                 sequences, they must have the same length ({field} rows differ)"
            ),
            ConfigurationError::ColumnCountMismatch {
                index,
                min_columns,
                max_columns,
            } => write!(
                f,
                "row {index}: min_sum_per_partition has {} but max_sum_per_partition has {}",
                describe_row(*min_columns),
                describe_row(*max_columns)
            ),
            ConfigurationError::SamplingProbabilityOutOfRange(p) => write!(
                f,
                "partitions_sampling_prob must be in the interval (0, 1], but {p} given"
            ),
            ConfigurationError::InvalidEpsilon { context, epsilon } => {
                write!(f, "{context}: epsilon must be positive and finite, not {epsilon}")
            }
            ConfigurationError::InvalidDelta { context, delta } => {
                write!(f, "{context}: delta must be in the interval [0, 1], not {delta}")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Requested a configuration index past the end of the expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "configuration index {} out of range for {} configurations",
            self.index, self.len
        )
    }
}

impl std::error::Error for IndexOutOfRange {}

pub type Result<T> = std::result::Result<T, ConfigurationError>;
