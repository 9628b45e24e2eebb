//! Error types for SRNN construction and forward passes.

use thiserror::Error;

/// Errors raised by [`SRNNCell`](crate::cells::SRNNCell) and [`SRNN`](crate::rnn::SRNN).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SRNNError {
    /// A hyperparameter is outside its valid range.
    #[error("invalid configuration: `{field}` = {value} ({reason})")]
    InvalidConfiguration {
        field: &'static str,
        value: usize,
        reason: &'static str,
    },
    /// A tensor does not have the shape the model was configured for.
    #[error("shape mismatch for {tensor}: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        tensor: &'static str,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
    /// The sequence layer was given a time dimension of zero.
    #[error("empty sequence: time dimension must be at least 1")]
    EmptySequence,
}

pub type Result<T> = std::result::Result<T, SRNNError>;
