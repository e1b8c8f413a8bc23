//! Axis operations
//!
//! Each operation normalizes its axis arguments, builds a permutation and/or a
//! reshape target, and delegates to the backend. The input array is never
//! modified; the backend returns a new array.
//!
//! | operation       | effect on `(A, B, C, D)`               |
//! |-----------------|----------------------------------------|
//! | `swap_axes(0, 2)`  | `(C, B, A, D)`                      |
//! | `move_axis(3, 1)`  | `(A, D, B, C)`                      |
//! | `pack_axis(1, 3)`  | `(A, C, B*D)`                       |
//! | `pack_axis(2, 0)`  | `(C*A, B, D)`                       |
//! | `unpack_axis(1, k)` | `(A, B/k, k, C, D)`                |
//!
//! # Examples
//!
//! ```
//! use tenrso_shaper::backend::{SymbolicArray, SymbolicBackend};
//! use tenrso_shaper::{move_axis, swap_axes};
//!
//! let backend = SymbolicBackend;
//! let array = SymbolicArray::new(&[2, 3, 4, 5]);
//!
//! let swapped = swap_axes(&backend, &array, 0, -2)?;
//! assert_eq!(swapped.shape(), &[4, 3, 2, 5]);
//!
//! let moved = move_axis(&backend, &array, -1, 1)?;
//! assert_eq!(moved.shape(), &[2, 5, 3, 4]);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::axis::normalize_axis;
use crate::backend::ArrayBackend;
use crate::error::ShaperResult;
use crate::perm::{cycle_permutation, swap_permutation};
use crate::plan::{plan_pack, plan_unpack};
use crate::types::{AxisIndex, Rank, Shape};

/// Declared shape of `array`.
pub fn shape_of<B: ArrayBackend>(backend: &B, array: &B::Array) -> Shape {
    backend.shape_of(array)
}

/// Rank of `array`, taken from its declared shape.
pub fn rank_of<B: ArrayBackend>(backend: &B, array: &B::Array) -> Rank {
    backend.rank_of(array)
}

/// Exchange two axes.
///
/// # Errors
///
/// [`crate::ShaperError::InvalidRank`] for a rank-0 array and
/// [`crate::ShaperError::IndexOutOfBounds`] for an axis outside
/// `[-rank, rank - 1]`. Backend errors propagate unchanged.
pub fn swap_axes<B: ArrayBackend>(
    backend: &B,
    array: &B::Array,
    axis0: AxisIndex,
    axis1: AxisIndex,
) -> ShaperResult<B::Array> {
    let rank = backend.rank_of(array);
    let first = normalize_axis(rank, axis0)?;
    let second = normalize_axis(rank, axis1)?;
    let perm = swap_permutation(rank, first, second)?;

    log::debug!("swap_axes({}, {}) on rank {}", axis0, axis1, rank);
    backend.transpose(array, &perm)
}

/// Move axis `source` so that it sits at position `target`, keeping the order
/// of the other axes.
///
/// # Errors
///
/// Same as [`swap_axes`].
pub fn move_axis<B: ArrayBackend>(
    backend: &B,
    array: &B::Array,
    source: AxisIndex,
    target: AxisIndex,
) -> ShaperResult<B::Array> {
    let rank = backend.rank_of(array);
    let perm = cycle_permutation(rank, source, target)?;

    log::debug!("move_axis({}, {}) on rank {}", source, target, rank);
    backend.transpose(array, &perm)
}

/// Fold axis `source` into axis `target`.
///
/// The result has rank `rank - 1`. The source is the outer half of the merged
/// axis and the target the inner half. See [`crate::plan_pack`] for the
/// accepted index ranges.
///
/// # Errors
///
/// Planning errors from [`crate::plan_pack`]; backend errors propagate unchanged.
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::{ArrayD, IxDyn};
/// use tenrso_shaper::backend::NdarrayBackend;
/// use tenrso_shaper::pack_axis;
///
/// let data: Vec<i64> = (0..6).collect();
/// let array = ArrayD::from_shape_vec(IxDyn(&[2, 3]), data).unwrap();
///
/// // Columns become the outer half: element (r, c) lands at c * 2 + r
/// let packed = pack_axis(&NdarrayBackend::<i64>::new(), &array, 1, 0).unwrap();
/// assert_eq!(packed.iter().copied().collect::<Vec<_>>(), vec![0, 3, 1, 4, 2, 5]);
/// ```
pub fn pack_axis<B: ArrayBackend>(
    backend: &B,
    array: &B::Array,
    source: AxisIndex,
    target: AxisIndex,
) -> ShaperResult<B::Array> {
    let shape = backend.shape_of(array);
    let plan = plan_pack(&shape, source, target)?;

    log::debug!(
        "pack_axis({}, {}) on {:?}: merged axis at {}",
        source,
        target,
        shape.as_slice(),
        plan.merge_axis
    );
    let cycled = backend.transpose(array, &plan.permutation)?;
    backend.reshape(&cycled, &plan.target_shape)
}

/// Split axis `axis` into `(size / inner_size, inner_size)`.
///
/// The result has rank `rank + 1`.
///
/// # Errors
///
/// [`crate::ShaperError::InvalidRank`] and
/// [`crate::ShaperError::IndexOutOfBounds`] for bad axes.
/// [`crate::ShaperError::ReshapeMismatch`] (from the backend) when
/// `inner_size` does not divide the axis. A zero `inner_size` is reported
/// as ambiguous and one too large for `usize` arithmetic as an overflow.
pub fn unpack_axis<B: ArrayBackend>(
    backend: &B,
    array: &B::Array,
    axis: AxisIndex,
    inner_size: usize,
) -> ShaperResult<B::Array> {
    let shape = backend.shape_of(array);
    let axis = normalize_axis(shape.len(), axis)?;
    let target = plan_unpack(&shape, axis, inner_size)?;

    log::debug!(
        "unpack_axis({}, {}) on {:?}",
        axis,
        inner_size,
        shape.as_slice()
    );
    backend.reshape(array, &target)
}

/// `(A, B, ...) -> (A*B, ...)`
pub fn front_pack<B: ArrayBackend>(backend: &B, array: &B::Array) -> ShaperResult<B::Array> {
    pack_axis(backend, array, 0, 1)
}

/// `(A, B, ...) -> (B, A, ...)`
pub fn front_swap<B: ArrayBackend>(backend: &B, array: &B::Array) -> ShaperResult<B::Array> {
    swap_axes(backend, array, 0, 1)
}

/// `(..., A, B) -> (..., A*B)`
pub fn back_pack<B: ArrayBackend>(backend: &B, array: &B::Array) -> ShaperResult<B::Array> {
    pack_axis(backend, array, -2, -1)
}

/// `(..., A, B) -> (..., B, A)`
pub fn back_swap<B: ArrayBackend>(backend: &B, array: &B::Array) -> ShaperResult<B::Array> {
    swap_axes(backend, array, -2, -1)
}
