//! Error types for axis operations
//!
//! - **`ShaperError`**: everything an axis operation can fail with
//! - **`ReshapeError`**: why a reshape target could not be resolved
//!
//! All of these are caller-input errors. Nothing is retried and nothing is
//! mutated before the error is raised.
//!
//! # Examples
//!
//! ```
//! use tenrso_shaper::{normalize_axis, ShaperError};
//!
//! let err = normalize_axis(3, 3).unwrap_err();
//! assert_eq!(err, ShaperError::IndexOutOfBounds { axis: 3, rank: 3 });
//! assert_eq!(err.to_string(), "Axis 3 out of bounds for rank 3");
//! ```

use thiserror::Error;

/// Top-level error type for axis algebra operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShaperError {
    /// The array has no axes to address
    #[error("Invalid rank {rank}: axis operations need at least one axis")]
    InvalidRank { rank: usize },

    /// An axis index falls outside `[-rank, rank - 1]`
    #[error("Axis {axis} out of bounds for rank {rank}")]
    IndexOutOfBounds { axis: isize, rank: usize },

    /// Pack was asked to fold an axis into itself
    #[error("Cannot pack axis {axis} into itself")]
    IdenticalAxes { axis: usize },

    /// A reshape target cannot preserve the element count
    #[error("Reshape mismatch: {0}")]
    ReshapeMismatch(#[from] ReshapeError),

    /// A transpose order is not a bijection on `0..rank`
    #[error("Invalid permutation {permutation:?} for rank {rank}")]
    InvalidPermutation {
        permutation: Vec<usize>,
        rank: usize,
    },

    /// Failure reported by the backing array library
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Reasons a reshape target cannot be resolved against an element count
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReshapeError {
    #[error("at most one inferred dimension is allowed, got {count}")]
    MultipleWildcards { count: usize },

    #[error("cannot reshape {total} elements into {target}")]
    ElementCount { total: usize, target: String },

    #[error("cannot infer a dimension of {target} from {total} elements")]
    Indivisible { total: usize, target: String },

    #[error("inferred dimension of {target} is ambiguous: the other entries hold zero elements")]
    Ambiguous { target: String },

    #[error("element count of {shape} overflows usize")]
    Overflow { shape: String },
}

/// Result type alias for axis algebra operations
pub type ShaperResult<T> = Result<T, ShaperError>;

impl ShaperError {
    /// Out-of-bounds error for an axis that is already nonnegative.
    pub(crate) fn axis_out_of_bounds(axis: usize, rank: usize) -> Self {
        ShaperError::IndexOutOfBounds {
            axis: isize::try_from(axis).unwrap_or(isize::MAX),
            rank,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_rank_message() {
        let err = ShaperError::InvalidRank { rank: 0 };
        assert_eq!(
            err.to_string(),
            "Invalid rank 0: axis operations need at least one axis"
        );
    }

    #[test]
    fn test_index_out_of_bounds_message() {
        let err = ShaperError::IndexOutOfBounds { axis: -5, rank: 4 };
        assert_eq!(err.to_string(), "Axis -5 out of bounds for rank 4");
    }

    #[test]
    fn test_reshape_error_converts() {
        let err: ShaperError = ReshapeError::MultipleWildcards { count: 2 }.into();
        assert!(matches!(err, ShaperError::ReshapeMismatch(_)));
        assert_eq!(
            err.to_string(),
            "Reshape mismatch: at most one inferred dimension is allowed, got 2"
        );
    }

    #[test]
    fn test_overflow_message() {
        let err: ShaperError = ReshapeError::Overflow {
            shape: "(2, -1)".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Reshape mismatch: element count of (2, -1) overflows usize"
        );
    }

    #[test]
    fn test_axis_out_of_bounds_helper() {
        assert_eq!(
            ShaperError::axis_out_of_bounds(7, 3),
            ShaperError::IndexOutOfBounds { axis: 7, rank: 3 }
        );
    }
}
