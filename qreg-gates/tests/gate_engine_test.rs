//! Register gate application checked against explicit operator products

use approx::assert_relative_eq;
use num_complex::Complex64;
use qreg_core::complex::{slices_close, ONE, ZERO};
use qreg_core::linalg::{multiply_matrix_vector, tensor_all_matrices, tensor_vectors, Matrix, Matrix2c};
use qreg_gates::standard::rotation_x;
use qreg_gates::*;
use qreg_state::{states, uniform_source, QubitRegister, NORMALIZATION_TOLERANCE};

const EPSILON: f64 = 1e-10;

/// An entangled, complex-valued state
fn scrambled_register(num_qubits: usize, seed: u64) -> QubitRegister {
    let mut rng = uniform_source(Some(seed));
    let mut reg = QubitRegister::new(num_qubits).unwrap();
    for q in 0..num_qubits {
        ry(&mut reg, q, rng() * 3.0).unwrap();
        rz(&mut reg, q, rng() * 3.0).unwrap();
    }
    for q in 0..num_qubits - 1 {
        cx(&mut reg, q, q + 1).unwrap();
    }
    t(&mut reg, 0).unwrap();
    reg
}

/// `I ⊗ … ⊗ M ⊗ … ⊗ I` with `M` at `target`
fn expand(matrix: &Matrix2c, target: usize, num_qubits: usize) -> Matrix {
    let factors: Vec<Matrix> = (0..num_qubits)
        .map(|q| {
            if q == target {
                Matrix::from_2x2(matrix)
            } else {
                Matrix::identity(2)
            }
        })
        .collect();
    tensor_all_matrices(&factors).unwrap()
}

#[test]
fn test_single_qubit_gates_match_kronecker_operator() {
    let n = 4;
    let gates = [
        matrices::HADAMARD,
        matrices::PAULI_Y,
        matrices::S_GATE,
        matrices::SX_GATE,
        rotation_x(0.83),
    ];
    for (seed, gate) in gates.iter().enumerate() {
        for target in 0..n {
            let mut reg = scrambled_register(n, seed as u64);
            let expected = multiply_matrix_vector(&expand(gate, target, n), reg.amplitudes()).unwrap();
            apply_single_qubit(&mut reg, gate, target).unwrap();
            assert!(
                slices_close(reg.amplitudes(), &expected, EPSILON),
                "gate {} on qubit {}",
                seed,
                target
            );
        }
    }
}

#[test]
fn test_cx_matches_projector_sum() {
    // CX = |0⟩⟨0| ⊗ I + |1⟩⟨1| ⊗ X on qubits (control, target)
    let n = 3;
    let p0: Matrix2c = [[ONE, ZERO], [ZERO, ZERO]];
    let p1: Matrix2c = [[ZERO, ZERO], [ZERO, ONE]];

    for control in 0..n {
        for target in (0..n).filter(|&q| q != control) {
            let factor = |q: usize, on: &Matrix2c, tgt: &Matrix2c| {
                if q == control {
                    Matrix::from_2x2(on)
                } else if q == target {
                    Matrix::from_2x2(tgt)
                } else {
                    Matrix::identity(2)
                }
            };
            let off: Vec<Matrix> = (0..n).map(|q| factor(q, &p0, &matrices::IDENTITY)).collect();
            let on: Vec<Matrix> = (0..n).map(|q| factor(q, &p1, &matrices::PAULI_X)).collect();

            let mut reg = scrambled_register(n, 7);
            let a = multiply_matrix_vector(&tensor_all_matrices(&off).unwrap(), reg.amplitudes()).unwrap();
            let b = multiply_matrix_vector(&tensor_all_matrices(&on).unwrap(), reg.amplitudes()).unwrap();
            let expected: Vec<Complex64> = a.iter().zip(&b).map(|(x, y)| x + y).collect();

            cx(&mut reg, control, target).unwrap();
            assert!(slices_close(reg.amplitudes(), &expected, EPSILON));
        }
    }
}

#[test]
fn test_swap_matches_relabelled_tensor() {
    let qubits = [states::PLUS, states::ONE, states::R, states::ZERO];
    for q0 in 0..4 {
        for q1 in 0..4 {
            let mut reg = QubitRegister::from_states(&qubits).unwrap();
            swap(&mut reg, q0, q1).unwrap();

            let mut swapped = qubits;
            swapped.swap(q0, q1);
            assert!(slices_close(reg.amplitudes(), &tensor_vectors(&swapped), EPSILON));
        }
    }
}

#[test]
fn test_swap_twice_restores() {
    let mut reg = scrambled_register(5, 3);
    let original = reg.amplitudes().to_vec();
    for (q0, q1) in [(0, 4), (1, 3), (2, 0)] {
        swap(&mut reg, q0, q1).unwrap();
        swap(&mut reg, q1, q0).unwrap();
        assert!(slices_close(reg.amplitudes(), &original, EPSILON));
    }
}

#[test]
fn test_involutions_on_register() {
    let original = scrambled_register(3, 11);
    for target in 0..3 {
        let mut reg = original.clone();
        for gate in [x, y, z, h] {
            gate(&mut reg, target).unwrap();
            gate(&mut reg, target).unwrap();
            assert!(slices_close(reg.amplitudes(), original.amplitudes(), EPSILON));
        }
    }
}

#[test]
fn test_cx_on_basis_states() {
    let mut reg = QubitRegister::from_states(&[states::ONE, states::ZERO]).unwrap();
    cx(&mut reg, 0, 1).unwrap();
    assert_relative_eq!(reg.probability_of_state_at_index(0b11).unwrap(), 1.0);

    let mut reg = QubitRegister::from_states(&[states::ZERO, states::ZERO]).unwrap();
    cx(&mut reg, 0, 1).unwrap();
    assert_relative_eq!(reg.probability_of_state_at_index(0b00).unwrap(), 1.0);
}

#[test]
fn test_probability_preserved_by_gate_sequence() {
    let mut reg = scrambled_register(4, 21);
    h_all(&mut reg).unwrap();
    ccx(&mut reg, 3, 1, 0).unwrap();
    mct(&mut reg, &[(0, 0), (2, 1)], 3).unwrap();
    cphase(&mut reg, 2, 1, 0.4).unwrap();
    cz(&mut reg, 0, 3).unwrap();
    swap(&mut reg, 1, 2).unwrap();
    rx(&mut reg, 2, 1.9).unwrap();
    phase(&mut reg, 1, -0.6).unwrap();
    s(&mut reg, 3).unwrap();
    assert!(reg.is_normalized(NORMALIZATION_TOLERANCE));
    assert_relative_eq!(reg.total_probability(), 1.0, epsilon = 1e-10);
}

#[test]
fn test_ghz_preparation() {
    let mut reg = QubitRegister::new(4).unwrap();
    h(&mut reg, 0).unwrap();
    for q in 1..4 {
        cx(&mut reg, 0, q).unwrap();
    }
    let ghz = QubitRegister::maximally_entangled(4).unwrap();
    assert!(slices_close(reg.amplitudes(), ghz.amplitudes(), EPSILON));
}

#[test]
fn test_controlled_gate_on_zero_control() {
    // Apply H to qubit 1 only where qubit 0 is 0
    let mut reg = QubitRegister::from_states(&[states::PLUS, states::ZERO]).unwrap();
    apply_controlled(&mut reg, &[(0, 0)], &matrices::HADAMARD, 1).unwrap();
    let probs = reg.probabilities();
    assert_relative_eq!(probs[0b00], 0.25, epsilon = 1e-12);
    assert_relative_eq!(probs[0b01], 0.25, epsilon = 1e-12);
    assert_relative_eq!(probs[0b10], 0.5, epsilon = 1e-12);
    assert_relative_eq!(probs[0b11], 0.0, epsilon = 1e-12);
}
