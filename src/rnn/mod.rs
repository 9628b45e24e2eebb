//! # RNN Layers for Sequence Processing
//!
//! [`SRNN`] unrolls an [`SRNNCell`](crate::cells::SRNNCell) over the time axis
//! and returns only the last step's output together with the final hidden
//! state (sequence-to-one).
//!
//! ## Tensor Shapes
//!
//! | Tensor | Shape |
//! |--------|-------|
//! | input | `[batch, seq_len, input_size]` (batch-first) |
//! | output | `[batch, output_size]` (last timestep only) |
//! | final state | `[batch, hidden_size]` |
//!
//! Every call starts from an absent hidden state; nothing carries over between
//! calls.
//!
//! ## Scalar Sequences
//!
//! Models configured with `input_size == 1` also accept `[batch, seq_len]`
//! through [`SRNN::forward_univariate`].
//!
//! ```rust
//! use burn::backend::NdArray;
//! use burn::tensor::Tensor;
//! use srnn::rnn::SRNN;
//!
//! type Backend = NdArray<f32>;
//! let device = Default::default();
//!
//! let model = SRNN::<Backend>::new(1, 8, 2, 1, &device)?;
//! let series = Tensor::<Backend, 2>::zeros([4, 12], &device);
//!
//! let (output, state) = model.forward_univariate(series)?;
//! assert_eq!(output.dims(), [4, 1]);
//! assert_eq!(state.dims(), [4, 8]);
//! # Ok::<(), srnn::SRNNError>(())
//! ```

pub mod srnn;

pub use self::srnn::SRNN;
