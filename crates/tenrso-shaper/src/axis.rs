//! Axis index normalization
//!
//! Callers may address axes from either end: `0` is the first axis and `-1` the last.
//! Everything downstream works on the canonical nonnegative form.

use crate::error::{ShaperError, ShaperResult};
use crate::types::{AxisIndex, Rank};

/// Map a possibly-negative axis index onto `[0, rank - 1]`.
///
/// # Errors
///
/// - [`ShaperError::InvalidRank`] if `rank` is zero
/// - [`ShaperError::IndexOutOfBounds`] if `axis` is not in `[-rank, rank - 1]`
///
/// # Examples
///
/// ```
/// use tenrso_shaper::normalize_axis;
///
/// assert_eq!(normalize_axis(4, 1).unwrap(), 1);
/// assert_eq!(normalize_axis(4, -1).unwrap(), 3);
/// assert_eq!(normalize_axis(4, -4).unwrap(), 0);
/// assert!(normalize_axis(4, 4).is_err());
/// assert!(normalize_axis(0, 0).is_err());
/// ```
pub fn normalize_axis(rank: Rank, axis: AxisIndex) -> ShaperResult<usize> {
    if rank < 1 {
        return Err(ShaperError::InvalidRank { rank });
    }
    let signed_rank = isize::try_from(rank).map_err(|_| ShaperError::InvalidRank { rank })?;
    if axis < -signed_rank || axis >= signed_rank {
        return Err(ShaperError::IndexOutOfBounds { axis, rank });
    }

    let normalized = if axis < 0 { signed_rank + axis } else { axis };
    Ok(normalized as usize)
}
