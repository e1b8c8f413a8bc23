//! Permutation builders and helpers
//!
//! A [`Permutation`] of length `rank` is read the way a transpose consumes it:
//! axis `i` of the output is axis `perm[i]` of the input.
//!
//! Two builders cover the axis operations:
//!
//! - [`swap_permutation`] exchanges two (already normalized) axes
//! - [`cycle_permutation`] pops one axis and reinserts it at another position,
//!   keeping the relative order of every other axis

use crate::axis::normalize_axis;
use crate::error::{ShaperError, ShaperResult};
use crate::types::{AxisIndex, Permutation, Rank, Shape};

/// The identity permutation `[0, 1, ..., rank - 1]`.
pub fn identity_permutation(rank: Rank) -> Permutation {
    (0..rank).collect()
}

/// Identity with positions `axis0` and `axis1` exchanged.
///
/// Both axes must already be normalized. The result is its own inverse.
///
/// # Errors
///
/// [`ShaperError::IndexOutOfBounds`] if either axis is `>= rank`.
///
/// # Examples
///
/// ```
/// use tenrso_shaper::swap_permutation;
///
/// assert_eq!(swap_permutation(4, 0, 2).unwrap(), vec![2, 1, 0, 3]);
/// assert!(swap_permutation(2, 0, 2).is_err());
/// ```
pub fn swap_permutation(rank: Rank, axis0: usize, axis1: usize) -> ShaperResult<Permutation> {
    for axis in [axis0, axis1] {
        if axis >= rank {
            return Err(ShaperError::axis_out_of_bounds(axis, rank));
        }
    }

    let mut perm = identity_permutation(rank);
    perm.swap(axis0, axis1);
    log::trace!("swap permutation ({}, {}) for rank {}: {:?}", axis0, axis1, rank, perm);
    Ok(perm)
}

/// Permutation that moves axis `source` so that it sits at position `target`.
///
/// Both indices may be negative and are normalized against `rank` first.
/// The axes between the two positions shift by one toward the vacated slot.
///
/// # Errors
///
/// Propagates [`normalize_axis`] failures.
///
/// # Examples
///
/// ```
/// use tenrso_shaper::cycle_permutation;
///
/// // (A, B, C, D): move the last axis to the front
/// assert_eq!(cycle_permutation(4, -1, 0).unwrap(), vec![3, 0, 1, 2]);
/// // move axis 0 to position 2
/// assert_eq!(cycle_permutation(4, 0, 2).unwrap(), vec![1, 2, 0, 3]);
/// // same position is the identity
/// assert_eq!(cycle_permutation(3, 1, -2).unwrap(), vec![0, 1, 2]);
/// ```
pub fn cycle_permutation(
    rank: Rank,
    source: AxisIndex,
    target: AxisIndex,
) -> ShaperResult<Permutation> {
    let source = normalize_axis(rank, source)?;
    let target = normalize_axis(rank, target)?;
    Ok(cycle_normalized(rank, source, target))
}

/// Pop-and-reinsert on axes that are known to be in range.
pub(crate) fn cycle_normalized(rank: Rank, source: usize, target: usize) -> Permutation {
    let mut perm = identity_permutation(rank);
    let axis = perm.remove(source);
    perm.insert(target, axis);
    log::trace!(
        "cycle permutation {} -> {} for rank {}: {:?}",
        source,
        target,
        rank,
        perm
    );
    perm
}

/// Whether `perm` is a bijection on `0..rank`.
pub fn is_permutation(rank: Rank, perm: &[usize]) -> bool {
    if perm.len() != rank {
        return false;
    }
    let mut seen = vec![false; rank];
    for &axis in perm {
        if axis >= rank || seen[axis] {
            return false;
        }
        seen[axis] = true;
    }
    true
}

/// Fail with [`ShaperError::InvalidPermutation`] unless `perm` is a bijection on `0..rank`.
pub fn check_permutation(rank: Rank, perm: &[usize]) -> ShaperResult<()> {
    if is_permutation(rank, perm) {
        Ok(())
    } else {
        Err(ShaperError::InvalidPermutation {
            permutation: perm.to_vec(),
            rank,
        })
    }
}

/// The single permutation equivalent to transposing by `first`, then by `second`.
///
/// # Examples
///
/// ```
/// use tenrso_shaper::{compose_permutations, swap_permutation};
///
/// let swap = swap_permutation(3, 0, 2).unwrap();
/// assert_eq!(compose_permutations(&swap, &swap).unwrap(), vec![0, 1, 2]);
/// ```
pub fn compose_permutations(first: &[usize], second: &[usize]) -> ShaperResult<Permutation> {
    let rank = first.len();
    check_permutation(rank, first)?;
    check_permutation(rank, second)?;
    Ok(second.iter().map(|&axis| first[axis]).collect())
}

/// The permutation that undoes `perm`.
///
/// # Examples
///
/// ```
/// use tenrso_shaper::{cycle_permutation, invert_permutation};
///
/// let forward = cycle_permutation(4, 0, 2).unwrap();
/// let backward = cycle_permutation(4, 2, 0).unwrap();
/// assert_eq!(invert_permutation(&forward).unwrap(), backward);
/// ```
pub fn invert_permutation(perm: &[usize]) -> ShaperResult<Permutation> {
    check_permutation(perm.len(), perm)?;
    let mut inverse = vec![0; perm.len()];
    for (position, &axis) in perm.iter().enumerate() {
        inverse[axis] = position;
    }
    Ok(inverse)
}

/// Reorder a shape the way a transpose by `perm` reorders the array's axes.
///
/// # Examples
///
/// ```
/// use tenrso_shaper::permute_shape;
///
/// let shape = permute_shape(&[2, 3, 4], &[2, 0, 1]).unwrap();
/// assert_eq!(shape.as_slice(), &[4, 2, 3]);
/// ```
pub fn permute_shape(shape: &[usize], perm: &[usize]) -> ShaperResult<Shape> {
    check_permutation(shape.len(), perm)?;
    Ok(perm.iter().map(|&axis| shape[axis]).collect())
}
