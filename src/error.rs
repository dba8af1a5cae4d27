//! Error types for Frontera operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Frontera operations.
///
/// Covers the precondition violations a training run can hit: shape
/// and dimension disagreements, a degenerate boundary weight, and an
/// unusable learning rate. All of these are fatal to the current run;
/// none are retried.
///
/// # Examples
///
/// ```
/// use frontera::error::FronteraError;
///
/// let err = FronteraError::DimensionMismatch {
///     expected: 2,
///     actual: 3,
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum FronteraError {
    /// Feature-vector length disagrees with weight-vector length.
    DimensionMismatch {
        /// Expected length (weight vector)
        expected: usize,
        /// Actual length found
        actual: usize,
    },

    /// Feature-matrix row count disagrees with label count.
    ShapeMismatch {
        /// Number of feature rows
        rows: usize,
        /// Number of labels
        labels: usize,
    },

    /// A weight required to be nonzero is zero (boundary extraction).
    DegenerateWeight {
        /// Index of the offending weight
        index: usize,
        /// Its value
        value: f32,
    },

    /// Learning rate is zero or negative.
    InvalidLearningRate {
        /// The rejected value
        value: f32,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for FronteraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FronteraError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Feature dimension mismatch: expected {expected}, got {actual}"
                )
            }
            FronteraError::ShapeMismatch { rows, labels } => {
                write!(
                    f,
                    "Shape mismatch: {rows} feature rows but {labels} labels"
                )
            }
            FronteraError::DegenerateWeight { index, value } => {
                write!(
                    f,
                    "Degenerate weight: w[{index}] = {value}, boundary is undefined"
                )
            }
            FronteraError::InvalidLearningRate { value } => {
                write!(
                    f,
                    "Invalid learning rate: {value}, expected a positive value"
                )
            }
            FronteraError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for FronteraError {}

impl From<&str> for FronteraError {
    fn from(msg: &str) -> Self {
        FronteraError::Other(msg.to_string())
    }
}

impl From<String> for FronteraError {
    fn from(msg: String) -> Self {
        FronteraError::Other(msg)
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, FronteraError>;
