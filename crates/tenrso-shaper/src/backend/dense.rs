//! Dense backend over scirs2-core's dynamic-rank arrays

use std::marker::PhantomData;

use scirs2_core::ndarray_ext::{ArrayD, IxDyn};

use super::ArrayBackend;
use crate::error::{ShaperError, ShaperResult};
use crate::perm::check_permutation;
use crate::plan::resolve_target_shape;
use crate::types::{Dim, Shape};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Layout options for [`NdarrayBackend`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NdarrayConfig {
    /// Materialize transposed arrays in row-major order.
    ///
    /// When `false`, a transpose only permutes strides and the copy is
    /// deferred to the next reshape that needs it.
    pub contiguous: bool,
}

impl Default for NdarrayConfig {
    fn default() -> Self {
        Self { contiguous: true }
    }
}

/// Backend for `ArrayD<T>`.
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::{ArrayD, IxDyn};
/// use tenrso_shaper::backend::NdarrayBackend;
/// use tenrso_shaper::back_swap;
///
/// let backend = NdarrayBackend::<f64>::new();
/// let array = ArrayD::<f64>::zeros(IxDyn(&[2, 3, 4]));
/// let swapped = back_swap(&backend, &array).unwrap();
/// assert_eq!(swapped.shape(), &[2, 4, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct NdarrayBackend<T> {
    config: NdarrayConfig,
    _element: PhantomData<fn() -> T>,
}

impl<T> NdarrayBackend<T> {
    /// Backend with the default configuration.
    pub fn new() -> Self {
        Self::with_config(NdarrayConfig::default())
    }

    /// Backend with an explicit configuration.
    pub fn with_config(config: NdarrayConfig) -> Self {
        Self {
            config,
            _element: PhantomData,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &NdarrayConfig {
        &self.config
    }
}

impl<T> Default for NdarrayBackend<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> ArrayBackend for NdarrayBackend<T> {
    type Array = ArrayD<T>;

    fn shape_of(&self, array: &ArrayD<T>) -> Shape {
        array.shape().iter().copied().collect()
    }

    fn transpose(&self, array: &ArrayD<T>, permutation: &[usize]) -> ShaperResult<ArrayD<T>> {
        check_permutation(array.ndim(), permutation)?;
        let permuted = array.clone().permuted_axes(IxDyn(permutation));
        if self.config.contiguous && !permuted.is_standard_layout() {
            Ok(permuted.as_standard_layout().into_owned())
        } else {
            Ok(permuted)
        }
    }

    fn reshape(&self, array: &ArrayD<T>, target: &[Dim]) -> ShaperResult<ArrayD<T>> {
        let shape = resolve_target_shape(array.len(), target)?;
        // Row-major reinterpretation needs row-major storage.
        let standard = if array.is_standard_layout() {
            array.clone()
        } else {
            log::trace!("reshape of strided array {:?}: copying", array.shape());
            array.as_standard_layout().into_owned()
        };
        standard
            .into_shape_with_order(IxDyn(&shape))
            .map_err(|e| ShaperError::Backend(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReshapeError;

    fn arange(shape: &[usize]) -> ArrayD<f64> {
        let total: usize = shape.iter().product();
        ArrayD::from_shape_vec(IxDyn(shape), (0..total).map(|x| x as f64).collect()).unwrap()
    }

    #[test]
    fn test_default_config_is_contiguous() {
        let backend = NdarrayBackend::<f64>::default();
        assert!(backend.config().contiguous);
    }

    #[test]
    fn test_transpose_values() {
        let backend = NdarrayBackend::<f64>::new();
        let array = arange(&[2, 3]);
        let transposed = backend.transpose(&array, &[1, 0]).unwrap();

        assert_eq!(transposed.shape(), &[3, 2]);
        assert!(transposed.is_standard_layout());
        assert_eq!(transposed[IxDyn(&[2, 1])], array[IxDyn(&[1, 2])]);
    }

    #[test]
    fn test_strided_transpose_then_reshape() {
        let backend = NdarrayBackend::<f64>::with_config(NdarrayConfig { contiguous: false });
        let array = arange(&[2, 3]);
        let transposed = backend.transpose(&array, &[1, 0]).unwrap();
        assert!(!transposed.is_standard_layout());

        let flat = backend.reshape(&transposed, &[Dim::Infer]).unwrap();
        let values: Vec<f64> = flat.iter().copied().collect();
        assert_eq!(values, vec![0.0, 3.0, 1.0, 4.0, 2.0, 5.0]);
    }

    #[test]
    fn test_transpose_rejects_invalid_permutation() {
        let backend = NdarrayBackend::<f64>::new();
        let array = arange(&[2, 3]);
        assert_eq!(
            backend.transpose(&array, &[0, 0]),
            Err(ShaperError::InvalidPermutation {
                permutation: vec![0, 0],
                rank: 2
            })
        );
    }

    #[test]
    fn test_reshape_mismatch() {
        let backend = NdarrayBackend::<f64>::new();
        let array = arange(&[2, 3]);
        let err = backend
            .reshape(&array, &[Dim::Fixed(4), Dim::Infer])
            .unwrap_err();
        assert!(matches!(
            err,
            ShaperError::ReshapeMismatch(ReshapeError::Indivisible { total: 6, .. })
        ));
    }

    #[test]
    fn test_shape_and_rank() {
        let backend = NdarrayBackend::<f64>::new();
        let array = arange(&[4, 1, 2]);
        assert_eq!(backend.shape_of(&array).as_slice(), &[4, 1, 2]);
        assert_eq!(backend.rank_of(&array), 3);
    }
}
