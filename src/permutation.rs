//! Fixed cyclic shift used to mix the previous hidden state.
//!
//! The matrix `P` has row `i` equal to identity row `(i + 1) % n`. Applied on
//! the right (`h @ P`), it moves coordinate `j - 1` of `h` into position `j`,
//! with the last coordinate wrapping around to position 0:
//!
//! ```text
//! n = 3        [0 1 0]
//!          P = [0 0 1]      [a, b, c] @ P = [c, a, b]
//!              [1 0 0]
//! ```

use burn::module::Param;
use burn::tensor::backend::Backend;
use burn::tensor::{Tensor, TensorData};
use ndarray::Array2;

/// Builds the `n x n` cyclic shift matrix.
pub fn cyclic_shift_matrix(n: usize) -> Array2<f32> {
    let mut matrix = Array2::<f32>::zeros((n, n));
    for i in 0..n {
        matrix[[i, (i + 1) % n]] = 1.0;
    }
    matrix
}

/// Converts a matrix into a constant (non-trainable) parameter.
pub(crate) fn constant_from_ndarray<B: Backend>(
    arr: &Array2<f32>,
    device: &B::Device,
) -> Param<Tensor<B, 2>> {
    let (rows, cols) = arr.dim();
    let data: Vec<f32> = arr.iter().copied().collect();
    let tensor = Tensor::<B, 2>::from_data(TensorData::new(data, [rows, cols]), device);
    Param::from_tensor(tensor).set_require_grad(false)
}
