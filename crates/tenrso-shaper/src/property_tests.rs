//! Property-based tests for the axis algebra
//!
//! These tests use proptest to check the index, permutation and planning laws
//! across randomly generated ranks, shapes and axes.

#[cfg(test)]
mod tests {
    use crate::backend::{NdarrayBackend, SymbolicArray, SymbolicBackend};
    use crate::{
        compose_permutations, cycle_permutation, identity_permutation, is_permutation,
        move_axis, normalize_axis, pack_axis, permute_shape, plan_pack, swap_axes,
        swap_permutation, unpack_axis,
    };
    use proptest::prelude::*;
    use scirs2_core::ndarray_ext::{ArrayD, IxDyn};

    fn shape_strategy() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(1usize..5, 1..=5)
    }

    // A shape of rank >= 2 together with two distinct raw axes, the target
    // restricted to [-rank + 1, rank - 1].
    fn pack_case() -> impl Strategy<Value = (Vec<usize>, isize, isize)> {
        prop::collection::vec(1usize..5, 2..=5).prop_flat_map(|shape| {
            let rank = shape.len() as isize;
            (Just(shape), -rank..rank, (1 - rank)..rank)
        })
    }

    fn arange(shape: &[usize]) -> ArrayD<i64> {
        let total: usize = shape.iter().product();
        ArrayD::from_shape_vec(IxDyn(shape), (0..total as i64).collect()).unwrap()
    }

    proptest! {
        #[test]
        fn prop_normalize_in_range(rank in 1usize..10, offset in 0usize..20) {
            let axis = (offset % (2 * rank)) as isize - rank as isize;
            let normalized = normalize_axis(rank, axis).unwrap();
            prop_assert!(normalized < rank);
        }

        #[test]
        fn prop_normalize_negative_alias(rank in 1usize..10, axis in 0usize..10) {
            prop_assume!(axis < rank);
            let positive = normalize_axis(rank, axis as isize).unwrap();
            let negative = normalize_axis(rank, axis as isize - rank as isize).unwrap();
            prop_assert_eq!(positive, negative);
            prop_assert_eq!(positive, axis);
        }

        #[test]
        fn prop_normalize_rejects_outside(rank in 1usize..10, excess in 0isize..5) {
            let r = rank as isize;
            prop_assert!(normalize_axis(rank, r + excess).is_err());
            prop_assert!(normalize_axis(rank, -r - 1 - excess).is_err());
        }

        #[test]
        fn prop_swap_is_involution(rank in 1usize..8, a in 0usize..8, b in 0usize..8) {
            prop_assume!(a < rank && b < rank);
            let perm = swap_permutation(rank, a, b).unwrap();
            prop_assert!(is_permutation(rank, &perm));
            prop_assert_eq!(compose_permutations(&perm, &perm).unwrap(), identity_permutation(rank));
        }

        #[test]
        fn prop_cycle_is_permutation(rank in 1usize..8, a in -8isize..8, b in -8isize..8) {
            let r = rank as isize;
            prop_assume!(-r <= a && a < r && -r <= b && b < r);
            let perm = cycle_permutation(rank, a, b).unwrap();
            prop_assert!(is_permutation(rank, &perm));

            let source = normalize_axis(rank, a).unwrap();
            let target = normalize_axis(rank, b).unwrap();
            prop_assert_eq!(perm[target], source);

            // Every other axis keeps its relative order
            let rest: Vec<usize> = perm.iter().copied().filter(|&x| x != source).collect();
            let expected: Vec<usize> = (0..rank).filter(|&x| x != source).collect();
            prop_assert_eq!(rest, expected);
        }

        #[test]
        fn prop_cycle_same_axis_is_identity(rank in 1usize..8, axis in 0usize..8) {
            prop_assume!(axis < rank);
            let negative = axis as isize - rank as isize;
            prop_assert_eq!(
                cycle_permutation(rank, axis as isize, negative).unwrap(),
                identity_permutation(rank)
            );
        }

        #[test]
        fn prop_swap_twice_restores_shape(shape in shape_strategy(), a in 0usize..5, b in 0usize..5) {
            prop_assume!(a < shape.len() && b < shape.len());
            let array = SymbolicArray::new(&shape);
            let (a, b) = (a as isize, b as isize - shape.len() as isize);
            let once = swap_axes(&SymbolicBackend, &array, a, b).unwrap();
            let twice = swap_axes(&SymbolicBackend, &once, a, b).unwrap();
            prop_assert_eq!(twice.shape(), array.shape());
        }

        #[test]
        fn prop_pack_reduces_rank((shape, source, target) in pack_case()) {
            let rank = shape.len();
            let same = normalize_axis(rank, source).unwrap() == normalize_axis(rank, target).unwrap();
            prop_assume!(!same);

            let array = SymbolicArray::new(&shape);
            let packed = pack_axis(&SymbolicBackend, &array, source, target).unwrap();
            prop_assert_eq!(packed.rank(), rank - 1);
            prop_assert_eq!(packed.len(), array.len());
        }

        #[test]
        fn prop_pack_then_unpack_roundtrip((shape, source, target) in pack_case()) {
            let rank = shape.len();
            let source_axis = normalize_axis(rank, source).unwrap();
            let target_axis = normalize_axis(rank, target).unwrap();
            prop_assume!(source_axis != target_axis);

            let plan = plan_pack(&shape, source, target).unwrap();
            let backend = NdarrayBackend::<i64>::new();
            let array = arange(&shape);

            let packed = pack_axis(&backend, &array, source, target).unwrap();
            let merge = plan.merge_axis as isize;
            let unpacked = unpack_axis(&backend, &packed, merge, shape[target_axis]).unwrap();

            // Shape equals the pack's cycled layout
            let cycled = permute_shape(&shape, &plan.permutation).unwrap();
            prop_assert_eq!(unpacked.shape(), cycled.as_slice());

            // Moving the source axis back restores the original array
            let restored = move_axis(&backend, &unpacked, merge, source_axis as isize).unwrap();
            prop_assert_eq!(restored, array);
        }
    }
}
