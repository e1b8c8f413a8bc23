//! Axis algebra walkthrough.
//!
//! This example demonstrates:
//! - Negative axis indices
//! - Swapping and moving axes
//! - Packing two axes into one and unpacking it again
//! - Planning on shapes alone with the symbolic backend
//!
//! Run with:
//! ```bash
//! cargo run --example axis_algebra
//! ```

use anyhow::Result;
use scirs2_core::ndarray_ext::{ArrayD, IxDyn};
use tenrso_shaper::backend::{NdarrayBackend, SymbolicArray, SymbolicBackend};
use tenrso_shaper::{
    back_pack, front_swap, move_axis, pack_axis, plan_pack, swap_axes, unpack_axis,
    types::format_target,
};

fn main() -> Result<()> {
    println!("=== TenRSo Shaper: Axis Algebra ===\n");

    example_swap_and_move()?;
    example_pack_unpack()?;
    example_symbolic()?;

    println!("\n=== All examples completed successfully! ===");
    Ok(())
}

fn example_swap_and_move() -> Result<()> {
    println!("--- Example 1: Swap and Move ---");

    let backend = NdarrayBackend::<f64>::new();
    let tensor = ArrayD::<f64>::zeros(IxDyn(&[2, 3, 4, 5]));
    println!("Original shape: {:?}", tensor.shape());

    let swapped = swap_axes(&backend, &tensor, 0, -1)?;
    println!("swap_axes(0, -1): {:?}", swapped.shape());

    let moved = move_axis(&backend, &tensor, -1, 1)?;
    println!("move_axis(-1, 1): {:?}", moved.shape());

    let front = front_swap(&backend, &tensor)?;
    println!("front_swap:       {:?}", front.shape());

    println!();
    Ok(())
}

fn example_pack_unpack() -> Result<()> {
    println!("--- Example 2: Pack and Unpack ---");

    let backend = NdarrayBackend::<f64>::new();
    let data: Vec<f64> = (0..24).map(|x| x as f64).collect();
    let tensor = ArrayD::from_shape_vec(IxDyn(&[2, 3, 4]), data)?;

    let plan = plan_pack(tensor.shape(), 0, 2)?;
    println!(
        "pack_axis(0, 2) plan: perm {:?}, target {}",
        plan.permutation,
        format_target(&plan.target_shape)
    );

    let packed = pack_axis(&backend, &tensor, 0, 2)?;
    println!("Packed shape: {:?}", packed.shape());

    let unpacked = unpack_axis(&backend, &packed, plan.merge_axis as isize, 4)?;
    println!("Unpacked shape: {:?}", unpacked.shape());

    let restored = move_axis(&backend, &unpacked, plan.merge_axis as isize, 0)?;
    println!("Restored equals original: {}", restored == tensor);

    let flat = back_pack(&backend, &tensor)?;
    println!("back_pack: {:?}", flat.shape());

    println!();
    Ok(())
}

fn example_symbolic() -> Result<()> {
    println!("--- Example 3: Shape-only Planning ---");

    let batch = SymbolicArray::new(&[32, 8, 64, 64]);
    println!("Batch: {}", batch);

    let heads_last = move_axis(&SymbolicBackend, &batch, 1, -1)?;
    println!("Heads last: {}", heads_last);

    let merged = pack_axis(&SymbolicBackend, &batch, 1, 0)?;
    println!("Heads folded into batch: {}", merged);

    match unpack_axis(&SymbolicBackend, &batch, 1, 3) {
        Ok(array) => println!("Unexpected success: {}", array),
        Err(e) => println!("Splitting 8 by 3 fails: {}", e),
    }

    Ok(())
}
