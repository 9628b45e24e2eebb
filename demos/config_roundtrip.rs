//! Configuration Save/Load Example
//!
//! Model hyperparameters are a Burn `Config`, so they can be written to and
//! read back from JSON. Learned weights go through Burn's record system,
//! which the training pipeline owns.

use burn::backend::NdArray;
use burn::config::Config;
use burn::nn::Initializer;
use burn::tensor::Tensor;
use srnn::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Config Save/Load Example ===\n");

    type Backend = NdArray<f32>;
    let device = Default::default();

    let config = SRNNCellConfig::new(1, 6, 2, 1)
        .with_initializer(Initializer::Constant { value: 0.1 });

    let path = std::env::temp_dir().join("srnn_config.json");
    config.save(&path)?;
    println!("Saved config to {}", path.display());
    println!("{config}");

    let loaded = SRNNCellConfig::load(&path)?;
    let model = SRNN::<Backend>::from_config(&loaded, &device)?;

    let series = Tensor::<Backend, 2>::from_floats([[0.2, 0.4, 0.6, 0.8]], &device);
    let (output, state) = model.forward_univariate(series)?;

    println!("Output: {:?}", output.into_data().to_vec::<f32>().unwrap_or_default());
    println!("State:  {:?}", state.into_data().to_vec::<f32>().unwrap_or_default());

    std::fs::remove_file(&path)?;
    println!("\n=== Config Save/Load Example completed! ===");
    Ok(())
}
