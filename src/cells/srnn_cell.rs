//! Structured RNN (SRNN) Cell Implementation
//!
//! One recurrence step combines a sigmoid gate and a ReLU feed-forward
//! candidate, both computed from the current input, with the previous hidden
//! state rotated by a fixed cyclic permutation:
//!
//! ```text
//! gate      = σ(W_g x + b_g)
//! candidate = fr(x)                  // (Linear → ReLU) × num_layer
//! h'        = h @ P + candidate ⊙ gate
//! y         = W_o h' + b_o
//! ```
//!
//! On the first step there is no previous state and the `h @ P` term is
//! dropped entirely.

use crate::error::SRNNError;
use crate::permutation::{constant_from_ndarray, cyclic_shift_matrix};
use burn::config::Config;
use burn::module::{Module, Param};
use burn::nn::{Initializer, Linear, LinearConfig};
use burn::tensor::activation;
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;
use tracing::debug;

/// Hyperparameters of an [`SRNNCell`].
#[derive(Config, Debug)]
pub struct SRNNCellConfig {
    /// Number of input features per timestep
    pub input_size: usize,
    /// Size of the hidden state
    pub hidden_size: usize,
    /// Depth of the feed-forward candidate branch (at least 1)
    pub num_layer: usize,
    /// Size of the projected output
    pub output_size: usize,
    /// Initializer for every weight and bias of the cell.
    ///
    /// Defaults to Kaiming-uniform with gain `1 / sqrt(3)`, as `LinearConfig` does.
    #[config(default = "Initializer::KaimingUniform{gain:0.5773502691896258, fan_out_only:false}")]
    pub initializer: Initializer,
}

impl SRNNCellConfig {
    /// Check that every dimension is positive and `num_layer >= 1`.
    pub fn validate(&self) -> crate::Result<()> {
        let fields = [
            ("input_size", self.input_size),
            ("hidden_size", self.hidden_size),
            ("num_layer", self.num_layer),
            ("output_size", self.output_size),
        ];
        for (field, value) in fields {
            if value == 0 {
                debug!(target: "srnn::cells", field, value, "rejected cell configuration");
                return Err(SRNNError::InvalidConfiguration {
                    field,
                    value,
                    reason: "must be at least 1",
                });
            }
        }
        Ok(())
    }

    /// Validate the configuration and allocate a new cell on `device`.
    pub fn init<B: Backend>(&self, device: &B::Device) -> crate::Result<SRNNCell<B>> {
        self.validate()?;

        let linear = |d_input: usize, d_output: usize| -> Linear<B> {
            LinearConfig::new(d_input, d_output)
                .with_bias(true)
                .with_initializer(self.initializer.clone())
                .init(device)
        };

        let gate_branch = linear(self.input_size, self.hidden_size);

        let mut fr_branch = Vec::with_capacity(self.num_layer);
        fr_branch.push(linear(self.input_size, self.hidden_size));
        for _ in 1..self.num_layer {
            fr_branch.push(linear(self.hidden_size, self.hidden_size));
        }

        let permutation = constant_from_ndarray(&cyclic_shift_matrix(self.hidden_size), device);
        let output_projection = linear(self.hidden_size, self.output_size);

        debug!(
            target: "srnn::cells",
            input_size = self.input_size,
            hidden_size = self.hidden_size,
            num_layer = self.num_layer,
            output_size = self.output_size,
            "initialized SRNN cell"
        );

        Ok(SRNNCell {
            input_size: self.input_size,
            hidden_size: self.hidden_size,
            num_layer: self.num_layer,
            output_size: self.output_size,
            gate_branch,
            fr_branch,
            permutation,
            output_projection,
        })
    }
}

/// A Structured RNN cell
///
/// Processes a single timestep. For whole sequences see [`SRNN`](crate::rnn::SRNN).
///
/// # Type Parameters
/// * `B` - The backend type
#[derive(Module, Debug)]
pub struct SRNNCell<B: Backend> {
    input_size: usize,
    hidden_size: usize,
    num_layer: usize,
    output_size: usize,
    gate_branch: Linear<B>,
    fr_branch: Vec<Linear<B>>,
    /// Cyclic shift matrix, `[hidden_size, hidden_size]` (non-trainable)
    permutation: Param<Tensor<B, 2>>,
    output_projection: Linear<B>,
}

impl<B: Backend> SRNNCell<B> {
    /// Create a new SRNN cell with the default initializer
    ///
    /// # Arguments
    /// * `input_size` - Number of input features
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
    ) -> crate::Result<Self> {
        SRNNCellConfig::new(input_size, hidden_size, num_layer, output_size).init(device)
    }

    /// Get input size
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Get hidden size
    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Get depth of the candidate branch
    pub fn num_layer(&self) -> usize {
        self.num_layer
    }

    /// Get output size
    pub fn output_size(&self) -> usize {
        self.output_size
    }

    /// The fixed cyclic shift matrix, `[hidden_size, hidden_size]`
    pub fn permutation(&self) -> Tensor<B, 2> {
        self.permutation.val()
    }

    /// Sigmoid gate `σ(W_g x + b_g)`, shape `[batch, hidden_size]`
    pub fn gate(&self, input: Tensor<B, 2>) -> crate::Result<Tensor<B, 2>> {
        self.check_input(&input)?;
        Ok(activation::sigmoid(self.gate_branch.forward(input)))
    }

    /// Output of the feed-forward candidate branch, shape `[batch, hidden_size]`
    pub fn candidate(&self, input: Tensor<B, 2>) -> crate::Result<Tensor<B, 2>> {
        self.check_input(&input)?;
        Ok(self.run_fr_branch(input))
    }

    /// Perform one recurrence step
    ///
    /// # Arguments
    /// * `input` - Input tensor of shape `[batch, input_size]`
    /// * `state` - Previous hidden state `[batch, hidden_size]`, or `None` on the first step
    ///
    /// # Returns
    /// Tuple of (output `[batch, output_size]`, new_state `[batch, hidden_size]`)
    pub fn forward(
        &self,
        input: Tensor<B, 2>,
        state: Option<Tensor<B, 2>>,
    ) -> crate::Result<(Tensor<B, 2>, Tensor<B, 2>)> {
        let [batch_size, _] = self.check_input(&input)?;

        if let Some(ref hidden) = state {
            let dims = hidden.dims();
            if dims != [batch_size, self.hidden_size] {
                debug!(target: "srnn::cells", ?dims, "rejected hidden state");
                return Err(SRNNError::ShapeMismatch {
                    tensor: "hidden state",
                    expected: vec![batch_size, self.hidden_size],
                    actual: dims.to_vec(),
                });
            }
        }

        let gate = activation::sigmoid(self.gate_branch.forward(input.clone()));
        let gated = self.run_fr_branch(input) * gate;

        let new_state = match state {
            Some(hidden) => hidden.matmul(self.permutation.val()) + gated,
            None => gated,
        };

        let output = self.output_projection.forward(new_state.clone());
        Ok((output, new_state))
    }

    /// Forward pass for cells configured with `input_size == 1`
    ///
    /// Accepts one scalar per batch element, shape `[batch]`, and reshapes it
    /// to `[batch, 1]` before calling [`forward`](Self::forward).
    pub fn forward_scalar(
        &self,
        input: Tensor<B, 1>,
        state: Option<Tensor<B, 2>>,
    ) -> crate::Result<(Tensor<B, 2>, Tensor<B, 2>)> {
        if self.input_size != 1 {
            let [batch_size] = input.dims();
            debug!(
                target: "srnn::cells",
                batch_size,
                input_size = self.input_size,
                "rejected scalar input"
            );
            return Err(SRNNError::ShapeMismatch {
                tensor: "input",
                expected: vec![batch_size, self.input_size],
                actual: vec![batch_size],
            });
        }
        self.forward(input.unsqueeze_dim(1), state)
    }

    fn run_fr_branch(&self, input: Tensor<B, 2>) -> Tensor<B, 2> {
        self.fr_branch
            .iter()
            .fold(input, |x, layer| activation::relu(layer.forward(x)))
    }

    fn check_input(&self, input: &Tensor<B, 2>) -> crate::Result<[usize; 2]> {
        let [batch_size, features] = input.dims();
        if features != self.input_size {
            debug!(target: "srnn::cells", batch_size, features, "rejected cell input");
            return Err(SRNNError::ShapeMismatch {
                tensor: "input",
                expected: vec![batch_size, self.input_size],
                actual: vec![batch_size, features],
            });
        }
        Ok([batch_size, features])
    }
}
