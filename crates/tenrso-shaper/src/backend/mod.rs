//! Array backends
//!
//! The axis algebra never touches elements. It asks a backend for an array's
//! shape and hands it a permutation or a reshape target. Which array library
//! does the work is chosen per call by passing a backend value.
//!
//! Two backends ship with the crate:
//!
//! - [`NdarrayBackend`] over scirs2-core's dynamic-rank arrays
//! - [`SymbolicBackend`] over [`SymbolicArray`], a shape with no data, for
//!   planning layouts ahead of time
//!
//! # Implementing a backend
//!
//! ```
//! use tenrso_shaper::backend::ArrayBackend;
//! use tenrso_shaper::{permute_shape, resolve_target_shape, Dim, ShaperResult, Shape};
//!
//! /// Arrays stored as (shape, row-major data)
//! struct FlatBackend;
//!
//! impl ArrayBackend for FlatBackend {
//!     type Array = (Vec<usize>, Vec<f32>);
//!
//!     fn shape_of(&self, array: &Self::Array) -> Shape {
//!         array.0.iter().copied().collect()
//!     }
//!
//!     fn transpose(&self, array: &Self::Array, permutation: &[usize]) -> ShaperResult<Self::Array> {
//!         // Shape bookkeeping only, enough for this illustration
//!         let shape = permute_shape(&array.0, permutation)?;
//!         Ok((shape.to_vec(), array.1.clone()))
//!     }
//!
//!     fn reshape(&self, array: &Self::Array, target: &[Dim]) -> ShaperResult<Self::Array> {
//!         let shape = resolve_target_shape(array.1.len(), target)?;
//!         Ok((shape.to_vec(), array.1.clone()))
//!     }
//! }
//!
//! let flat = (vec![2, 3], vec![0.0; 6]);
//! let packed = tenrso_shaper::front_pack(&FlatBackend, &flat).unwrap();
//! assert_eq!(packed.0, vec![6]);
//! ```

pub mod dense;
pub mod symbolic;

pub use dense::{NdarrayBackend, NdarrayConfig};
pub use symbolic::{SymbolicArray, SymbolicBackend};

use crate::error::ShaperResult;
use crate::types::{Dim, Rank, Shape};

/// Transpose and reshape capability of an array library.
pub trait ArrayBackend {
    /// The array type this backend operates on
    type Array;

    /// Declared per-axis sizes, read without inspecting elements.
    fn shape_of(&self, array: &Self::Array) -> Shape;

    /// Reorder axes: axis `i` of the result is axis `permutation[i]` of `array`.
    ///
    /// Implementations reject anything that is not a bijection on `0..rank`
    /// with [`crate::ShaperError::InvalidPermutation`].
    fn transpose(&self, array: &Self::Array, permutation: &[usize]) -> ShaperResult<Self::Array>;

    /// Reinterpret `array` under `target` in row-major order.
    ///
    /// At most one entry of `target` may be [`Dim::Infer`]. Implementations
    /// resolve it with [`crate::resolve_target_shape`] and fail with
    /// [`crate::ShaperError::ReshapeMismatch`] when the element count cannot
    /// be preserved.
    fn reshape(&self, array: &Self::Array, target: &[Dim]) -> ShaperResult<Self::Array>;

    /// Number of axes of `array`.
    fn rank_of(&self, array: &Self::Array) -> Rank {
        self.shape_of(array).len()
    }
}
