//! # tenrso-shaper
//!
//! Axis algebra for TenRSo: re-describe the logical layout of an N-dimensional
//! array by swapping, moving, packing and unpacking axes.
//!
//! Negative axes count from the end, so `-1` is the last axis and callers never
//! need to know the full rank up front. The crate only computes descriptors
//! (permutations and reshape targets); a backend does the actual transpose and
//! reshape.
//!
//! - **Index normalization** ([`normalize_axis`]) from `[-r, r-1]` to `[0, r-1]`
//! - **Permutation builders** ([`swap_permutation`], [`cycle_permutation`])
//! - **Shape planning** ([`plan_pack`], [`plan_unpack`]) with inferred dimensions
//! - **Axis operations** ([`swap_axes`], [`move_axis`], [`pack_axis`], [`unpack_axis`])
//! - **Backends** ([`backend::NdarrayBackend`], [`backend::SymbolicBackend`])
//!
//! ## Quick Start
//!
//! ```
//! use scirs2_core::ndarray_ext::{ArrayD, IxDyn};
//! use tenrso_shaper::backend::NdarrayBackend;
//! use tenrso_shaper::{pack_axis, unpack_axis};
//!
//! let backend = NdarrayBackend::<f64>::new();
//! let array = ArrayD::<f64>::zeros(IxDyn(&[2, 3, 4, 5]));
//!
//! // Fold axis 1 into axis 3: (A, B, C, D) -> (A, C, B*D)
//! let packed = pack_axis(&backend, &array, 1, 3)?;
//! assert_eq!(packed.shape(), &[2, 4, 15]);
//!
//! // Split the merged axis back out: (A, C, B*D) -> (A, C, B, D)
//! let unpacked = unpack_axis(&backend, &packed, -1, 5)?;
//! assert_eq!(unpacked.shape(), &[2, 4, 3, 5]);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Planning Without Data
//!
//! The planners are plain functions over shapes:
//!
//! ```
//! use tenrso_shaper::{plan_pack, resolve_target_shape};
//!
//! let shape = [2, 3, 4, 5];
//! let plan = plan_pack(&shape, 2, 0)?;
//! let packed = resolve_target_shape(shape.iter().product(), &plan.target_shape)?;
//! assert_eq!(packed.as_slice(), &[8, 3, 5]);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Operations return [`ShaperResult`]. Bad axes fail before the backend is
//! called; reshape failures come back from the backend unchanged.
//!
//! ```
//! use tenrso_shaper::backend::{SymbolicArray, SymbolicBackend};
//! use tenrso_shaper::{pack_axis, ShaperError};
//!
//! let array = SymbolicArray::new(&[2, 3]);
//! let err = pack_axis(&SymbolicBackend, &array, 0, 0).unwrap_err();
//! assert_eq!(err, ShaperError::IdenticalAxes { axis: 0 });
//! ```
//!
//! ## Features
//!
//! - `serde`: Serialize/deserialize [`Dim`], [`PackPlan`] and
//!   [`backend::NdarrayConfig`]

pub mod axis;
pub mod backend;
pub mod error;
pub mod ops;
pub mod perm;
pub mod plan;
pub mod types;

#[cfg(test)]
mod property_tests;

pub use axis::normalize_axis;
pub use backend::ArrayBackend;
pub use error::{ReshapeError, ShaperError, ShaperResult};
pub use ops::{
    back_pack, back_swap, front_pack, front_swap, move_axis, pack_axis, rank_of, shape_of,
    swap_axes, unpack_axis,
};
pub use perm::{
    check_permutation, compose_permutations, cycle_permutation, identity_permutation,
    invert_permutation, is_permutation, permute_shape, swap_permutation,
};
pub use plan::{plan_pack, plan_unpack, resolve_target_shape, PackPlan};
pub use types::{AxisIndex, Dim, Permutation, Rank, Shape, TargetShape};
