//! Structured RNN (SRNN) Layer
//!
//! Sequence layer that unrolls an [`SRNNCell`] across time.

use crate::cells::{SRNNCell, SRNNCellConfig};
use crate::error::{Result, SRNNError};
use burn::module::Module;
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;
use tracing::{debug, trace};

/// SRNN Layer
///
/// Processes batch-first sequences with an [`SRNNCell`], feeding each step's
/// hidden state into the next, and keeps only the final step.
///
/// # Type Parameters
/// * `B` - The backend type
#[derive(Module, Debug)]
pub struct SRNN<B: Backend> {
    /// The cell applied at every timestep
    cell: SRNNCell<B>,
}

impl<B: Backend> SRNN<B> {
    /// Create a new SRNN layer with the default initializer
    ///
    /// # Arguments
    /// * `input_size` - Number of input features per timestep
    /// * `hidden_size` - Size of the hidden state
    /// * `num_layer` - Depth of the candidate branch
    /// * `output_size` - Size of the projected output
    /// * `device` - Device to create the module on
    pub fn new(
        input_size: usize,
        hidden_size: usize,
        num_layer: usize,
        output_size: usize,
        device: &B::Device,
    ) -> Result<Self> {
        SRNNCell::new(input_size, hidden_size, num_layer, output_size, device).map(Self::from_cell)
    }

    /// Create a new SRNN layer from a cell configuration
    pub fn from_config(config: &SRNNCellConfig, device: &B::Device) -> Result<Self> {
        config.init(device).map(Self::from_cell)
    }

    /// Wrap an existing cell
    pub fn from_cell(cell: SRNNCell<B>) -> Self {
        Self { cell }
    }

    /// The wrapped cell
    pub fn cell(&self) -> &SRNNCell<B> {
        &self.cell
    }

    /// Get input size
    pub fn input_size(&self) -> usize {
        self.cell.input_size()
    }

    /// Get hidden size
    pub fn hidden_size(&self) -> usize {
        self.cell.hidden_size()
    }

    /// Get depth of the candidate branch
    pub fn num_layer(&self) -> usize {
        self.cell.num_layer()
    }

    /// Get output size
    pub fn output_size(&self) -> usize {
        self.cell.output_size()
    }

    /// Forward pass through the SRNN layer
    ///
    /// # Arguments
    /// * `input` - Input tensor of shape `[batch, seq_len, input_size]`, `seq_len >= 1`
    ///
    /// # Returns
    /// Tuple of (output, final_state) where:
    /// - output: `[batch, output_size]` from the last timestep
    /// - final_state: `[batch, hidden_size]`
    pub fn forward(&self, input: Tensor<B, 3>) -> Result<(Tensor<B, 2>, Tensor<B, 2>)> {
        let [batch_size, seq_len, features] = input.dims();

        if seq_len == 0 {
            debug!(target: "srnn::rnn", batch_size, "rejected empty sequence");
            return Err(SRNNError::EmptySequence);
        }
        if features != self.input_size() {
            debug!(target: "srnn::rnn", batch_size, seq_len, features, "rejected sequence input");
            return Err(SRNNError::ShapeMismatch {
                tensor: "input",
                expected: vec![batch_size, seq_len, self.input_size()],
                actual: vec![batch_size, seq_len, features],
            });
        }

        trace!(target: "srnn::rnn", batch_size, seq_len, "unrolling SRNN");

        // input[batch, 0, features] -> [batch, features]
        let first: Tensor<B, 2> = input.clone().narrow(1, 0, 1).squeeze(1);
        let (mut output, mut state) = self.cell.forward(first, None)?;

        for t in 1..seq_len {
            let step_input: Tensor<B, 2> = input.clone().narrow(1, t, 1).squeeze(1);
            (output, state) = self.cell.forward(step_input, Some(state))?;
        }

        Ok((output, state))
    }

    /// Forward pass for layers configured with `input_size == 1`
    ///
    /// Accepts a `[batch, seq_len]` tensor of scalars and treats it as
    /// `[batch, seq_len, 1]`.
    pub fn forward_univariate(&self, input: Tensor<B, 2>) -> Result<(Tensor<B, 2>, Tensor<B, 2>)> {
        if self.input_size() != 1 {
            let [batch_size, seq_len] = input.dims();
            debug!(
                target: "srnn::rnn",
                batch_size,
                seq_len,
                input_size = self.input_size(),
                "rejected univariate sequence"
            );
            return Err(SRNNError::ShapeMismatch {
                tensor: "input",
                expected: vec![batch_size, seq_len, self.input_size()],
                actual: vec![batch_size, seq_len],
            });
        }
        self.forward(input.unsqueeze_dim(2))
    }
}
