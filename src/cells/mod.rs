//! # RNN Cell Implementations
//!
//! Single-timestep cells. The [`SRNN`](crate::rnn::SRNN) layer in
//! [`crate::rnn`] wraps a cell for sequence processing.
//!
//! ## When to Use Cells Directly
//!
//! Most users should use [`SRNN`](crate::rnn::SRNN), which unrolls the cell and
//! carries the hidden state for you. Use [`SRNNCell`] directly when you need:
//!
//! - Custom sequence processing logic
//! - Access to intermediate outputs
//! - Fine-grained control over state management
//!
//! ## Update Rule
//!
//! ```text
//! first step:  h' = fr(x) × σ(W_g x + b_g)
//! later steps: h' = h @ P + fr(x) × σ(W_g x + b_g)
//! output:      y  = W_o h' + b_o
//! ```
//!
//! `P` is a fixed cyclic shift (see [`crate::permutation`]) and `fr` is a stack
//! of `num_layer` Linear→ReLU blocks.
//!
//! ## Tensor Shapes
//!
//! | Tensor | Shape | Description |
//! |--------|-------|-------------|
//! | `input` | `[batch, input_size]` | Input features |
//! | `state` | `Option<[batch, hidden_size]>` | Previous hidden state, `None` on the first step |
//! | `output` | `[batch, output_size]` | Projected output |
//! | `new_state` | `[batch, hidden_size]` | Updated hidden state |
//!
//! ## Example: Using SRNNCell Directly
//!
//! ```rust
//! use burn::backend::NdArray;
//! use burn::tensor::Tensor;
//! use srnn::cells::SRNNCell;
//!
//! type Backend = NdArray<f32>;
//! let device = Default::default();
//!
//! let cell = SRNNCell::<Backend>::new(16, 32, 2, 4, &device)?;
//!
//! let input = Tensor::<Backend, 2>::zeros([8, 16], &device);
//! let (output, state) = cell.forward(input.clone(), None)?;
//! let (output, state) = cell.forward(input, Some(state))?;
//!
//! assert_eq!(output.dims(), [8, 4]);
//! assert_eq!(state.dims(), [8, 32]);
//! # Ok::<(), srnn::SRNNError>(())
//! ```

pub mod srnn_cell;

pub use srnn_cell::{SRNNCell, SRNNCellConfig};
