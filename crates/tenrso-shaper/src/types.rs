//! Value types shared by the axis algebra.
//!
//! - Type aliases for ranks, axis indices, shapes and permutations
//! - [`Dim`], a single entry of a reshape target that may be inferred
//!
//! # Examples
//!
//! ```
//! use tenrso_shaper::{Dim, TargetShape};
//!
//! let target: TargetShape = [Dim::Fixed(2), Dim::Infer, Dim::Fixed(5)].into_iter().collect();
//! assert_eq!(tenrso_shaper::types::format_target(&target), "(2, -1, 5)");
//! ```

use smallvec::SmallVec;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of axes of an array.
pub type Rank = usize;

/// User-facing axis index, in `[-rank, rank - 1]`.
///
/// Negative values count from the end, so `-1` names the last axis.
pub type AxisIndex = isize;

/// Declared per-axis sizes of an array.
///
/// Inline storage covers up to 6 axes, higher ranks spill to the heap.
pub type Shape = SmallVec<[usize; 6]>;

/// Transpose order: axis `i` of the output is axis `permutation[i]` of the input.
pub type Permutation = Vec<usize>;

/// Reshape target, holding at most one [`Dim::Infer`] entry.
pub type TargetShape = SmallVec<[Dim; 6]>;

/// One entry of a reshape target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Dim {
    /// A known size
    Fixed(usize),
    /// Inferred from the total element count
    Infer,
}

impl Dim {
    /// Whether this entry is the wildcard.
    pub fn is_infer(&self) -> bool {
        matches!(self, Dim::Infer)
    }

    /// The fixed size, if any.
    pub fn fixed(&self) -> Option<usize> {
        match self {
            Dim::Fixed(size) => Some(*size),
            Dim::Infer => None,
        }
    }
}

impl From<usize> for Dim {
    fn from(size: usize) -> Self {
        Dim::Fixed(size)
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dim::Fixed(size) => write!(f, "{}", size),
            Dim::Infer => write!(f, "-1"),
        }
    }
}

/// Lift a concrete shape into a reshape target with no wildcard.
pub fn fixed_target(shape: &[usize]) -> TargetShape {
    shape.iter().copied().map(Dim::Fixed).collect()
}

/// Render a reshape target the way error messages print it, e.g. `(2, -1)`.
pub fn format_target(target: &[Dim]) -> String {
    let entries: Vec<String> = target.iter().map(Dim::to_string).collect();
    format!("({})", entries.join(", "))
}
