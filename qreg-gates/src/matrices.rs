//! Constant 2×2 gate matrices
//!
//! Row-major `[[m00, m01], [m10, m11]]`, acting on `[⟨0|ψ⟩, ⟨1|ψ⟩]`.

use qreg_core::complex::{I, INV_SQRT2, NEG_I, NEG_ONE, ONE, ZERO};
use qreg_core::linalg::Matrix2c;
use num_complex::Complex64;

/// Identity
/// I = [[1, 0],
///      [0, 1]]
pub const IDENTITY: Matrix2c = [[ONE, ZERO], [ZERO, ONE]];

/// Pauli-X (NOT)
/// X = [[0, 1],
///      [1, 0]]
pub const PAULI_X: Matrix2c = [[ZERO, ONE], [ONE, ZERO]];

/// Pauli-Y
/// Y = [[0, -i],
///      [i,  0]]
pub const PAULI_Y: Matrix2c = [[ZERO, NEG_I], [I, ZERO]];

/// Pauli-Z
/// Z = [[1,  0],
///      [0, -1]]
pub const PAULI_Z: Matrix2c = [[ONE, ZERO], [ZERO, NEG_ONE]];

/// Hadamard
/// H = 1/√2 · [[1,  1],
///             [1, -1]]
pub const HADAMARD: Matrix2c = [
    [Complex64::new(INV_SQRT2, 0.0), Complex64::new(INV_SQRT2, 0.0)],
    [Complex64::new(INV_SQRT2, 0.0), Complex64::new(-INV_SQRT2, 0.0)],
];

/// S (√Z)
pub const S_GATE: Matrix2c = [[ONE, ZERO], [ZERO, I]];

/// S†
pub const S_GATE_DAGGER: Matrix2c = [[ONE, ZERO], [ZERO, NEG_I]];

/// T (√S), phase e^(iπ/4) on |1⟩
pub const T_GATE: Matrix2c = [[ONE, ZERO], [ZERO, Complex64::new(INV_SQRT2, INV_SQRT2)]];

/// T†
pub const T_GATE_DAGGER: Matrix2c = [[ONE, ZERO], [ZERO, Complex64::new(INV_SQRT2, -INV_SQRT2)]];

/// √X
/// SX = 1/2 · [[1+i, 1-i],
///             [1-i, 1+i]]
pub const SX_GATE: Matrix2c = [
    [Complex64::new(0.5, 0.5), Complex64::new(0.5, -0.5)],
    [Complex64::new(0.5, -0.5), Complex64::new(0.5, 0.5)],
];

/// Product of two 2×2 matrices, `a · b`
pub fn multiply_2x2(a: &Matrix2c, b: &Matrix2c) -> Matrix2c {
    let mut out = [[ZERO; 2]; 2];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j];
        }
    }
    out
}

/// Scale every entry of a 2×2 matrix
pub fn scale_2x2(m: &Matrix2c, factor: Complex64) -> Matrix2c {
    [
        [m[0][0] * factor, m[0][1] * factor],
        [m[1][0] * factor, m[1][1] * factor],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use qreg_core::linalg::{is_unitary, Matrix};

    fn assert_matrix_eq(actual: &Matrix2c, expected: &Matrix2c) {
        for i in 0..2 {
            for j in 0..2 {
                assert_relative_eq!(actual[i][j].re, expected[i][j].re, epsilon = 1e-10);
                assert_relative_eq!(actual[i][j].im, expected[i][j].im, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_involutions() {
        for m in [IDENTITY, PAULI_X, PAULI_Y, PAULI_Z, HADAMARD] {
            assert_matrix_eq(&multiply_2x2(&m, &m), &IDENTITY);
        }
    }

    #[test]
    fn test_pauli_product() {
        // -i·X·Y·Z = I
        let xyz = multiply_2x2(&multiply_2x2(&PAULI_X, &PAULI_Y), &PAULI_Z);
        assert_matrix_eq(&scale_2x2(&xyz, NEG_I), &IDENTITY);
    }

    #[test]
    fn test_phase_chain() {
        assert_matrix_eq(&multiply_2x2(&T_GATE, &T_GATE), &S_GATE);
        assert_matrix_eq(&multiply_2x2(&S_GATE, &S_GATE), &PAULI_Z);
        assert_matrix_eq(&multiply_2x2(&SX_GATE, &SX_GATE), &PAULI_X);
    }

    #[test]
    fn test_daggers_invert() {
        assert_matrix_eq(&multiply_2x2(&S_GATE, &S_GATE_DAGGER), &IDENTITY);
        assert_matrix_eq(&multiply_2x2(&T_GATE_DAGGER, &T_GATE), &IDENTITY);
    }

    #[test]
    fn test_all_unitary() {
        for m in [
            IDENTITY,
            PAULI_X,
            PAULI_Y,
            PAULI_Z,
            HADAMARD,
            S_GATE,
            S_GATE_DAGGER,
            T_GATE,
            T_GATE_DAGGER,
            SX_GATE,
        ] {
            assert!(is_unitary(&Matrix::from_2x2(&m), 1e-10));
        }
    }
}
