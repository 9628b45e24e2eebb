//! Integration tests for the SRNN Cell

use burn::backend::NdArray;
use burn::config::Config;
use burn::nn::Initializer;
use burn::tensor::{Distribution, Tensor};
use srnn::cells::{SRNNCell, SRNNCellConfig};
use srnn::SRNNError;

type Backend = NdArray<f32>;

const TOLERANCE: f32 = 1e-5;

fn values<const D: usize>(tensor: Tensor<Backend, D>) -> Vec<f32> {
    tensor.into_data().to_vec().unwrap()
}

fn assert_close(actual: &[f32], expected: &[f32]) {
    assert_eq!(actual.len(), expected.len());
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() < TOLERANCE, "index {i}: {a} != {e}");
    }
}

#[test]
fn test_permutation_is_cyclic_shift() {
    let device = Default::default();

    for &(input_size, hidden_size, num_layer, output_size) in
        &[(1, 1, 1, 1), (1, 3, 1, 1), (4, 5, 2, 3), (2, 8, 4, 1), (7, 16, 1, 7)]
    {
        let cell = SRNNCell::<Backend>::new(input_size, hidden_size, num_layer, output_size, &device)
            .unwrap();
        let permutation = values(cell.permutation());

        assert_eq!(permutation.len(), hidden_size * hidden_size);
        for i in 0..hidden_size {
            let row = &permutation[i * hidden_size..(i + 1) * hidden_size];
            for (j, &v) in row.iter().enumerate() {
                let expected = if j == (i + 1) % hidden_size { 1.0 } else { 0.0 };
                assert_eq!(v, expected, "hidden_size={hidden_size}, row {i}, col {j}");
            }
        }
    }
}

#[test]
fn test_num_layer_zero_is_rejected() {
    let device = Default::default();
    let err = SRNNCell::<Backend>::new(4, 8, 0, 2, &device).unwrap_err();

    assert!(matches!(
        err,
        SRNNError::InvalidConfiguration {
            field: "num_layer",
            value: 0,
            ..
        }
    ));
}

#[test]
fn test_first_step_equals_gated_candidate() {
    let device = Default::default();
    let cell = SRNNCell::<Backend>::new(6, 10, 3, 4, &device).unwrap();

    for batch_size in [1, 3, 8] {
        let x = Tensor::<Backend, 2>::random([batch_size, 6], Distribution::Uniform(-2.0, 2.0), &device);

        let (output, state) = cell.forward(x.clone(), None).unwrap();
        let expected = cell.candidate(x.clone()).unwrap() * cell.gate(x).unwrap();

        assert_eq!(output.dims(), [batch_size, 4]);
        assert_eq!(state.dims(), [batch_size, 10]);
        assert_close(&values(state), &values(expected));
    }
}

#[test]
fn test_recurrent_step_adds_rotated_state() {
    let device = Default::default();
    let cell = SRNNCell::<Backend>::new(3, 5, 2, 2, &device).unwrap();

    for batch_size in [1, 4] {
        let x = Tensor::<Backend, 2>::random([batch_size, 3], Distribution::Uniform(-1.0, 1.0), &device);
        let h = Tensor::<Backend, 2>::random([batch_size, 5], Distribution::Uniform(-1.0, 1.0), &device);

        let (_, state) = cell.forward(x.clone(), Some(h.clone())).unwrap();
        let expected =
            h.matmul(cell.permutation()) + cell.candidate(x.clone()).unwrap() * cell.gate(x).unwrap();

        assert_close(&values(state), &values(expected));
    }
}

#[test]
fn test_rotation_moves_last_coordinate_first() {
    let device = Default::default();
    // Constant weights give identical gated candidates in every coordinate,
    // so any asymmetry in the new state comes from the rotation.
    let cell = SRNNCellConfig::new(1, 4, 1, 1)
        .with_initializer(Initializer::Constant { value: 1.0 })
        .init::<Backend>(&device)
        .unwrap();

    let x = Tensor::<Backend, 2>::zeros([1, 1], &device);
    let h = Tensor::<Backend, 2>::from_floats([[1.0, 2.0, 3.0, 4.0]], &device);

    // candidate = relu(0 + 1) = 1, gate = σ(1)
    let gated = 1.0 / (1.0 + (-1.0f32).exp());
    let (_, state) = cell.forward(x, Some(h)).unwrap();

    assert_close(
        &values(state),
        &[4.0 + gated, 1.0 + gated, 2.0 + gated, 3.0 + gated],
    );
}

#[test]
fn test_gate_opens_for_large_positive_input() {
    let device = Default::default();
    let cell = SRNNCellConfig::new(2, 3, 1, 1)
        .with_initializer(Initializer::Constant { value: 1.0 })
        .init::<Backend>(&device)
        .unwrap();

    let x = Tensor::<Backend, 2>::full([2, 2], 20.0, &device);
    let gate = values(cell.gate(x.clone()).unwrap());
    assert!(gate.iter().all(|&g| (g - 1.0).abs() < TOLERANCE));

    let (_, state) = cell.forward(x.clone(), None).unwrap();
    let candidate = values(cell.candidate(x).unwrap());
    for (s, c) in values(state).iter().zip(&candidate) {
        assert!((s - c).abs() <= c * TOLERANCE, "{s} != {c}");
    }
}

#[test]
fn test_gate_closes_for_large_negative_input() {
    let device = Default::default();
    let cell = SRNNCellConfig::new(2, 3, 1, 1)
        .with_initializer(Initializer::Constant { value: 1.0 })
        .init::<Backend>(&device)
        .unwrap();

    let x = Tensor::<Backend, 2>::full([2, 2], -20.0, &device);
    let gate = values(cell.gate(x).unwrap());
    assert!(gate.iter().all(|&g| g.abs() < TOLERANCE));
}

#[test]
fn test_shape_mismatch_on_input() {
    let device = Default::default();
    let cell = SRNNCell::<Backend>::new(4, 8, 1, 2, &device).unwrap();
    let x = Tensor::<Backend, 2>::zeros([3, 2], &device);

    assert!(matches!(
        cell.forward(x, None),
        Err(SRNNError::ShapeMismatch { tensor: "input", .. })
    ));
}

#[test]
fn test_scalar_input_for_unit_input_size() {
    let device = Default::default();
    let cell = SRNNCell::<Backend>::new(1, 3, 2, 2, &device).unwrap();

    let scalars = Tensor::<Backend, 1>::from_floats([0.3, -0.7, 1.1], &device);
    let column = Tensor::<Backend, 2>::from_floats([[0.3], [-0.7], [1.1]], &device);

    let (output_a, state_a) = cell.forward_scalar(scalars, None).unwrap();
    let (output_b, state_b) = cell.forward(column, None).unwrap();

    assert_close(&values(output_a), &values(output_b));
    assert_close(&values(state_a), &values(state_b));
}

#[test]
fn test_config_json_roundtrip() {
    let config = SRNNCellConfig::new(3, 12, 2, 5)
        .with_initializer(Initializer::Constant { value: 0.25 });

    let loaded = SRNNCellConfig::load_binary(config.to_string().as_bytes()).unwrap();

    assert_eq!(loaded.input_size, 3);
    assert_eq!(loaded.hidden_size, 12);
    assert_eq!(loaded.num_layer, 2);
    assert_eq!(loaded.output_size, 5);

    let device = Default::default();
    let x = Tensor::<Backend, 2>::ones([2, 3], &device);
    let (out_a, _) = config.init::<Backend>(&device).unwrap().forward(x.clone(), None).unwrap();
    let (out_b, _) = loaded.init::<Backend>(&device).unwrap().forward(x, None).unwrap();
    assert_close(&values(out_a), &values(out_b));
}
