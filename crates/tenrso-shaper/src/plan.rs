//! Shape planning for pack and unpack
//!
//! Packing folds one axis into another with a transpose followed by a reshape.
//! Unpacking splits an axis in two with a reshape alone. Both produce a reshape
//! target containing one [`Dim::Infer`] entry; the merged (or outer) size is
//! left for the reshape to infer since the element count never changes.
//!
//! [`resolve_target_shape`] is the wildcard resolution every backend applies
//! before it reshapes.

use crate::axis::normalize_axis;
use crate::error::{ReshapeError, ShaperError, ShaperResult};
use crate::perm::{cycle_normalized, permute_shape};
use crate::types::{format_target, AxisIndex, Dim, Permutation, Shape, TargetShape};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Transpose and reshape that fold one axis into another.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackPlan {
    /// Moves the source axis directly in front of the target axis
    pub permutation: Permutation,
    /// Reshape target with a wildcard at the merged position
    pub target_shape: TargetShape,
    /// Position of the merged axis in the packed result
    pub merge_axis: usize,
}

/// Plan folding axis `source` into axis `target`.
///
/// The source becomes the outer (slower varying) half of the merged axis and
/// the target the inner half, so an element at `(source = s, target = t)` lands
/// at `s * size(target) + t`.
///
/// `source` may be any index in `[-rank, rank - 1]`. `target` is restricted to
/// `[-rank + 1, rank - 1]`, and the two must name different axes.
///
/// # Errors
///
/// - [`ShaperError::InvalidRank`] for a rank-0 shape
/// - [`ShaperError::IndexOutOfBounds`] for either axis out of range
/// - [`ShaperError::IdenticalAxes`] if both name the same axis
///
/// Planning itself never looks at sizes. If an axis outside the merged pair
/// has size zero, the fixed entries of `target_shape` multiply to zero and
/// the later reshape cannot infer the merged size: it fails with
/// [`ShaperError::ReshapeMismatch`] carrying [`ReshapeError::Ambiguous`].
///
/// # Examples
///
/// ```
/// use tenrso_shaper::{plan_pack, Dim};
///
/// // (A, B, C, D) with B packed into D -> (A, C, B*D)
/// let plan = plan_pack(&[2, 3, 4, 5], 1, 3).unwrap();
/// assert_eq!(plan.permutation, vec![0, 2, 1, 3]);
/// assert_eq!(plan.target_shape.as_slice(), &[Dim::Fixed(2), Dim::Fixed(4), Dim::Infer]);
/// assert_eq!(plan.merge_axis, 2);
/// ```
pub fn plan_pack(shape: &[usize], source: AxisIndex, target: AxisIndex) -> ShaperResult<PackPlan> {
    let rank = shape.len();
    let source = normalize_axis(rank, source)?;

    // The first axis cannot be addressed as a target through its negative alias.
    if target < 1 - rank as isize {
        return Err(ShaperError::IndexOutOfBounds { axis: target, rank });
    }
    let target = normalize_axis(rank, target)?;
    if source == target {
        return Err(ShaperError::IdenticalAxes { axis: source });
    }

    let forward = usize::from(source < target);
    let pretarget = target - forward;

    let permutation = cycle_normalized(rank, source, pretarget);
    let permuted = permute_shape(shape, &permutation)?;

    let mut target_shape: TargetShape = permuted.iter().copied().map(Dim::Fixed).collect();
    target_shape.drain(pretarget..pretarget + 2);
    target_shape.insert(pretarget, Dim::Infer);

    log::trace!(
        "pack plan for {:?}: axis {} into {} -> perm {:?}, target {}",
        shape,
        source,
        target,
        permutation,
        format_target(&target_shape)
    );

    Ok(PackPlan {
        permutation,
        target_shape,
        merge_axis: pretarget,
    })
}

/// Plan splitting axis `axis` into `(outer, inner_size)`.
///
/// The outer size is a wildcard. Whether `inner_size` divides the axis is not
/// checked here; the reshape reports it.
///
/// # Errors
///
/// - [`ShaperError::InvalidRank`] for a rank-0 shape
/// - [`ShaperError::IndexOutOfBounds`] if `axis >= rank`
///
/// # Examples
///
/// ```
/// use tenrso_shaper::{plan_unpack, Dim};
///
/// // (A, B, CD, E) -> (A, B, C, D, E)
/// let target = plan_unpack(&[2, 3, 20, 5], 2, 4).unwrap();
/// assert_eq!(
///     target.as_slice(),
///     &[Dim::Fixed(2), Dim::Fixed(3), Dim::Infer, Dim::Fixed(4), Dim::Fixed(5)]
/// );
/// ```
pub fn plan_unpack(shape: &[usize], axis: usize, inner_size: usize) -> ShaperResult<TargetShape> {
    let rank = shape.len();
    if rank < 1 {
        return Err(ShaperError::InvalidRank { rank });
    }
    if axis >= rank {
        return Err(ShaperError::axis_out_of_bounds(axis, rank));
    }

    let mut target_shape: TargetShape = shape.iter().copied().map(Dim::Fixed).collect();
    target_shape.remove(axis);
    target_shape.insert(axis, Dim::Infer);
    target_shape.insert(axis + 1, Dim::Fixed(inner_size));

    log::trace!(
        "unpack plan for {:?}: axis {} by {} -> target {}",
        shape,
        axis,
        inner_size,
        format_target(&target_shape)
    );
    Ok(target_shape)
}

/// Resolve a reshape target against an element count.
///
/// # Errors
///
/// [`ShaperError::ReshapeMismatch`] when there is more than one wildcard, when
/// the fixed entries do not account for `total` exactly, when the wildcard
/// is ambiguous because the fixed entries multiply to zero, or when the
/// product of the fixed entries overflows `usize`.
///
/// # Examples
///
/// ```
/// use tenrso_shaper::{resolve_target_shape, Dim};
///
/// let shape = resolve_target_shape(24, &[Dim::Fixed(2), Dim::Infer]).unwrap();
/// assert_eq!(shape.as_slice(), &[2, 12]);
/// assert!(resolve_target_shape(24, &[Dim::Fixed(5), Dim::Infer]).is_err());
/// ```
pub fn resolve_target_shape(total: usize, target: &[Dim]) -> ShaperResult<Shape> {
    let wildcards = target.iter().filter(|dim| dim.is_infer()).count();
    if wildcards > 1 {
        return Err(ReshapeError::MultipleWildcards { count: wildcards }.into());
    }

    // A zero entry makes the product zero whatever order the others overflow in.
    let known = if target.contains(&Dim::Fixed(0)) {
        0
    } else {
        target
            .iter()
            .filter_map(Dim::fixed)
            .try_fold(1usize, |acc, size| acc.checked_mul(size))
            .ok_or_else(|| ReshapeError::Overflow {
                shape: format_target(target),
            })?
    };
    let inferred = if wildcards == 0 {
        if known != total {
            return Err(ReshapeError::ElementCount {
                total,
                target: format_target(target),
            }
            .into());
        }
        None
    } else {
        if known == 0 {
            return Err(ReshapeError::Ambiguous {
                target: format_target(target),
            }
            .into());
        }
        if total % known != 0 {
            return Err(ReshapeError::Indivisible {
                total,
                target: format_target(target),
            }
            .into());
        }
        Some(total / known)
    };

    Ok(target
        .iter()
        .map(|dim| match dim {
            Dim::Fixed(size) => *size,
            Dim::Infer => inferred.unwrap_or_default(),
        })
        .collect())
}
