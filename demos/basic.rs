//! Basic usage example of the SRNN layer
//!
//! Builds a cell and a sequence layer, runs a random batch through both, and
//! shows what the fixed permutation looks like.
//!
//! Run with `RUST_LOG=srnn=trace cargo run --example basic` to see the
//! library's tracing events.

use burn::backend::NdArray;
use burn::tensor::{Distribution, Tensor};
use srnn::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== SRNN Basic Example ===\n");

    type Backend = NdArray<f32>;
    let device = Default::default();

    // Example 1: Sequence-to-one
    println!("Example 1: Sequence layer");
    let model = SRNN::<Backend>::new(8, 16, 2, 3, &device)?;

    println!("  Input size:  {}", model.input_size());
    println!("  Hidden size: {}", model.hidden_size());
    println!("  Layers:      {}", model.num_layer());
    println!("  Output size: {}", model.output_size());

    // [batch=4, seq=10, features=8]
    let input = Tensor::<Backend, 3>::random([4, 10, 8], Distribution::Uniform(-1.0, 1.0), &device);
    let (output, state) = model.forward(input)?;

    println!("  Output shape: {:?}", output.dims());
    println!("  State shape:  {:?}", state.dims());
    println!();

    // Example 2: Stepping the cell by hand
    println!("Example 2: Manual stepping");
    let cell = SRNNCell::<Backend>::new(1, 4, 1, 1, &device)?;
    let mut state = None;
    for (t, value) in [0.1f32, 0.4, -0.3].into_iter().enumerate() {
        let x = Tensor::<Backend, 1>::from_floats([value], &device);
        let (y, h) = cell.forward_scalar(x, state)?;
        println!("  t={t}: output={:?}", y.into_data().to_vec::<f32>().unwrap_or_default());
        state = Some(h);
    }
    println!();

    // Example 3: Permutation matrix
    println!("Example 3: Permutation (hidden_size = 4)");
    let permutation = cell.permutation().into_data().to_vec::<f32>().unwrap_or_default();
    for row in permutation.chunks(4) {
        println!("  {row:?}");
    }
    println!();

    // Example 4: Errors
    println!("Example 4: Errors");
    if let Err(err) = SRNN::<Backend>::new(8, 16, 0, 3, &device) {
        println!("  {err}");
    }
    let empty = Tensor::<Backend, 3>::zeros([4, 0, 8], &device);
    if let Err(err) = model.forward(empty) {
        println!("  {err}");
    }

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
