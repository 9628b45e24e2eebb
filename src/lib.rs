//! # SRNN - Structured Recurrent Neural Network (Rust)
//!
//! A gated recurrent cell whose hidden state is mixed through a fixed cyclic
//! permutation, built on the Burn framework.
//!
//! ## Features
//!
//! - **SRNNCell**: One recurrence step: sigmoid gate, stacked ReLU candidate
//!   branch, permutation mixing and a linear output projection
//! - **SRNN**: Sequence layer that unrolls the cell and returns the final
//!   output and hidden state
//! - **Config**: Burn [`Config`](burn::config::Config) with JSON save/load
//! - **Typed errors**: construction and shape failures surface as [`SRNNError`]
//!
//! ## Quick Start
//!
//! ```rust
//! use burn::backend::NdArray;
//! use burn::tensor::Tensor;
//! use srnn::prelude::*;
//!
//! type Backend = NdArray<f32>;
//! let device = Default::default();
//!
//! let model = SRNNCellConfig::new(16, 32, 2, 4).init::<Backend>(&device).map(SRNN::from_cell)?;
//!
//! // [batch=8, seq_len=10, features=16]
//! let input = Tensor::<Backend, 3>::zeros([8, 10, 16], &device);
//! let (output, state) = model.forward(input)?;
//!
//! assert_eq!(output.dims(), [8, 4]);
//! assert_eq!(state.dims(), [8, 32]);
//! # Ok::<(), SRNNError>(())
//! ```

pub mod cells;
pub mod error;
pub mod permutation;
pub mod rnn;

#[cfg(test)]
mod test_logs;

pub use error::{Result, SRNNError};

pub mod prelude {
    pub use crate::cells::{SRNNCell, SRNNCellConfig};
    pub use crate::error::{Result, SRNNError};
    pub use crate::rnn::SRNN;
}
