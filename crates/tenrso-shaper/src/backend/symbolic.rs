//! Shape-only backend
//!
//! A [`SymbolicArray`] is a declared shape with no elements behind it, like a
//! graph-mode tensor whose static shape is known before any data exists. Axis
//! operations on it apply the same transposes and reshapes as a dense backend
//! would, including the element-count checks, so layouts can be planned and
//! validated ahead of time.

use std::fmt;

use super::ArrayBackend;
use crate::error::{ReshapeError, ShaperResult};
use crate::perm::permute_shape;
use crate::plan::resolve_target_shape;
use crate::types::{fixed_target, format_target, Dim, Rank, Shape};

/// An array known only by its shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolicArray {
    shape: Shape,
}

impl SymbolicArray {
    /// Create a symbolic array with the given shape.
    pub fn new(shape: &[usize]) -> Self {
        Self {
            shape: shape.iter().copied().collect(),
        }
    }

    /// The declared shape.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of axes.
    pub fn rank(&self) -> Rank {
        self.shape.len()
    }

    /// Total number of elements the shape describes, saturating at `usize::MAX`.
    pub fn len(&self) -> usize {
        self.checked_len().unwrap_or(usize::MAX)
    }

    /// Total number of elements, or `None` if the count overflows `usize`.
    pub fn checked_len(&self) -> Option<usize> {
        if self.is_empty() {
            return Some(0);
        }
        self.shape
            .iter()
            .try_fold(1usize, |acc, &size| acc.checked_mul(size))
    }

    /// Whether the shape describes zero elements.
    pub fn is_empty(&self) -> bool {
        self.shape.contains(&0)
    }
}

impl From<&[usize]> for SymbolicArray {
    fn from(shape: &[usize]) -> Self {
        Self::new(shape)
    }
}

impl fmt::Display for SymbolicArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolicArray{:?}", self.shape.as_slice())
    }
}

/// Backend for [`SymbolicArray`].
///
/// # Examples
///
/// ```
/// use tenrso_shaper::backend::{SymbolicArray, SymbolicBackend};
/// use tenrso_shaper::pack_axis;
///
/// let array = SymbolicArray::new(&[2, 3, 4, 5]);
/// let packed = pack_axis(&SymbolicBackend, &array, 2, 0).unwrap();
/// assert_eq!(packed.shape(), &[8, 3, 5]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SymbolicBackend;

impl ArrayBackend for SymbolicBackend {
    type Array = SymbolicArray;

    fn shape_of(&self, array: &SymbolicArray) -> Shape {
        array.shape.clone()
    }

    fn transpose(&self, array: &SymbolicArray, permutation: &[usize]) -> ShaperResult<SymbolicArray> {
        Ok(SymbolicArray {
            shape: permute_shape(&array.shape, permutation)?,
        })
    }

    fn reshape(&self, array: &SymbolicArray, target: &[Dim]) -> ShaperResult<SymbolicArray> {
        let total = array.checked_len().ok_or_else(|| ReshapeError::Overflow {
            shape: format_target(&fixed_target(&array.shape)),
        })?;
        Ok(SymbolicArray {
            shape: resolve_target_shape(total, target)?,
        })
    }
}
