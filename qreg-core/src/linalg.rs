//! Dense linear algebra over complex amplitudes
//!
//! This module provides the matrix and vector kernel used by qubits, registers
//! and gate matrices:
//! - Matrix×vector and matrix×matrix products
//! - Tensor (Kronecker) products of vectors and matrices
//! - Inner, outer and Hadamard products
//! - Conjugate, transpose, adjoint, trace and density matrices
//! - Structural predicates (identity, Hermitian, unitary)
//!
//! Matrices are stored row-major in a flat `Vec`. Shape errors are reported as
//! [`CoreError`] values; the structural predicates return `false` for
//! non-square input instead of failing.
//!
//! # Example
//!
//! ```rust
//! use qreg_core::linalg::{tensor_vectors, Matrix, multiply_matrix_vector, is_unitary};
//! use qreg_core::complex::{ONE, ZERO, EPSILON};
//!
//! // |0⟩ ⊗ |1⟩ = |01⟩
//! let state = tensor_vectors(&[[ONE, ZERO], [ZERO, ONE]]);
//! assert_eq!(state, vec![ZERO, ONE, ZERO, ZERO]);
//!
//! let identity = Matrix::identity(4);
//! assert!(is_unitary(&identity, EPSILON));
//! assert_eq!(multiply_matrix_vector(&identity, &state).unwrap(), state);
//! ```

use crate::complex::{ComplexExt, ONE, ZERO};
use crate::error::CoreError;
use crate::truth_table::bit_at;
use crate::Result;
use num_complex::Complex64;
use std::fmt;
use std::ops::Index;

/// Amplitude pair of a single qubit, `[⟨0|ψ⟩, ⟨1|ψ⟩]`
pub type Vector2c = [Complex64; 2];

/// 2×2 matrix in row-major order
pub type Matrix2c = [[Complex64; 2]; 2];

/// Dense row-major complex matrix
#[derive(Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Complex64>,
}

impl Matrix {
    /// Create a matrix from row-major storage
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidShape`] when `data.len() != rows * cols`
    pub fn new(rows: usize, cols: usize, data: Vec<Complex64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(CoreError::InvalidShape {
                rows,
                cols,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a matrix from a list of rows
    ///
    /// # Errors
    /// Fails on an empty list or when rows differ in length
    pub fn from_rows(rows: Vec<Vec<Complex64>>) -> Result<Self> {
        let cols = rows.first().map(Vec::len).ok_or(CoreError::Empty("from_rows"))?;
        let num_rows = rows.len();
        let mut data = Vec::with_capacity(num_rows * cols);
        for row in rows {
            if row.len() != cols {
                return Err(CoreError::dimension_mismatch("from_rows", cols, row.len()));
            }
            data.extend(row);
        }
        Ok(Self {
            rows: num_rows,
            cols,
            data,
        })
    }

    /// All-zero matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![ZERO; rows * cols],
        }
    }

    /// `n × n` identity matrix
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::zeros(n, n);
        for i in 0..n {
            matrix.data[i * n + i] = ONE;
        }
        matrix
    }

    /// Widen a fixed-size 2×2 gate matrix
    pub fn from_2x2(matrix: &Matrix2c) -> Self {
        Self {
            rows: 2,
            cols: 2,
            data: matrix.iter().flatten().copied().collect(),
        }
    }

    /// Narrow to a fixed-size 2×2 matrix, if the shape allows
    pub fn to_2x2(&self) -> Option<Matrix2c> {
        if self.rows != 2 || self.cols != 2 {
            return None;
        }
        Some([[self.data[0], self.data[1]], [self.data[2], self.data[3]]])
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Element at `(row, col)`
    ///
    /// # Panics
    /// Panics when the position is outside the matrix
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        assert!(row < self.rows && col < self.cols, "index ({}, {}) out of bounds", row, col);
        self.data[row * self.cols + col]
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> &[Complex64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Row-major storage
    #[inline]
    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    /// Element-wise tolerance comparison; shapes must match exactly
    pub fn equals_close(&self, other: &Matrix, epsilon: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a.equals_close(b, epsilon))
    }

    fn map(&self, f: impl Fn(Complex64) -> Complex64) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&z| f(z)).collect(),
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Complex64;

    fn index(&self, (row, col): (usize, usize)) -> &Complex64 {
        assert!(row < self.rows && col < self.cols, "index ({}, {}) out of bounds", row, col);
        &self.data[row * self.cols + col]
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix {}x{} [", self.rows, self.cols)?;
        for r in 0..self.rows {
            write!(f, "  ")?;
            for value in self.row(r) {
                write!(f, "{:>8.4}{:+.4}i ", value.re, value.im)?;
            }
            writeln!(f)?;
        }
        write!(f, "]")
    }
}

/// Compute `M · v`
///
/// # Errors
/// Fails when `cols(M) != len(v)`
pub fn multiply_matrix_vector(matrix: &Matrix, vector: &[Complex64]) -> Result<Vec<Complex64>> {
    if matrix.cols != vector.len() {
        return Err(CoreError::dimension_mismatch(
            "multiply_matrix_vector",
            matrix.cols,
            vector.len(),
        ));
    }

    Ok((0..matrix.rows)
        .map(|r| {
            matrix
                .row(r)
                .iter()
                .zip(vector)
                .map(|(&m, &v)| m * v)
                .sum()
        })
        .collect())
}

/// Compute `A · B`
///
/// # Errors
/// Fails when `cols(A) != rows(B)`
pub fn multiply_matrices(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.cols != b.rows {
        return Err(CoreError::dimension_mismatch("multiply_matrices", a.cols, b.rows));
    }

    let mut result = Matrix::zeros(a.rows, b.cols);
    for i in 0..a.rows {
        for k in 0..a.cols {
            let a_ik = a.data[i * a.cols + k];
            if a_ik == ZERO {
                continue;
            }
            for j in 0..b.cols {
                result.data[i * b.cols + j] += a_ik * b.data[k * b.cols + j];
            }
        }
    }
    Ok(result)
}

/// Tensor product of `k` single-qubit vectors
///
/// Entry `i` of the result is `Π_j v_j[bit_j(i)]`, where `bit_j(i)` is the
/// truth-table bit of factor `j` at index `i`. No intermediate pairwise
/// products are built. The empty product is the scalar `[1]`.
pub fn tensor_vectors(vectors: &[Vector2c]) -> Vec<Complex64> {
    let k = vectors.len();
    (0..1usize << k)
        .map(|i| {
            vectors
                .iter()
                .enumerate()
                .map(|(j, v)| v[bit_at(k, i, j) as usize])
                .product()
        })
        .collect()
}

/// Kronecker product of two vectors of any length
pub fn kron_vectors(a: &[Complex64], b: &[Complex64]) -> Vec<Complex64> {
    a.iter()
        .flat_map(|&x| b.iter().map(move |&y| x * y))
        .collect()
}

/// Block Kronecker product `A ⊗ B`
///
/// For `A` (m×n) and `B` (p×q) the result is (mp)×(nq).
pub fn tensor_matrices(a: &Matrix, b: &Matrix) -> Matrix {
    let rows = a.rows * b.rows;
    let cols = a.cols * b.cols;
    let mut result = Matrix::zeros(rows, cols);

    for i in 0..a.rows {
        for j in 0..a.cols {
            let a_ij = a.data[i * a.cols + j];
            for k in 0..b.rows {
                for l in 0..b.cols {
                    let row = i * b.rows + k;
                    let col = j * b.cols + l;
                    result.data[row * cols + col] = a_ij * b.data[k * b.cols + l];
                }
            }
        }
    }

    result
}

/// Fold [`tensor_matrices`] left to right over a list
///
/// # Errors
/// Fails on an empty list
pub fn tensor_all_matrices(matrices: &[Matrix]) -> Result<Matrix> {
    let (first, rest) = matrices
        .split_first()
        .ok_or(CoreError::Empty("tensor_all_matrices"))?;
    Ok(rest
        .iter()
        .fold(first.clone(), |acc, m| tensor_matrices(&acc, m)))
}

/// `⟨a|b⟩ = Σ conj(a_i) · b_i`
pub fn inner_product(a: &[Complex64], b: &[Complex64]) -> Result<Complex64> {
    if a.len() != b.len() {
        return Err(CoreError::dimension_mismatch("inner_product", a.len(), b.len()));
    }
    Ok(a.iter().zip(b).map(|(x, y)| x.conj() * y).sum())
}

/// `|a⟩⟨b|` without implicit conjugation: entry `(i, j)` is `a_i · b_j`
pub fn outer_product(a: &[Complex64], b: &[Complex64]) -> Matrix {
    Matrix {
        rows: a.len(),
        cols: b.len(),
        data: a
            .iter()
            .flat_map(|&x| b.iter().map(move |&y| x * y))
            .collect(),
    }
}

/// Element-wise product of two equally shaped matrices
pub fn hadamard_product(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.rows != b.rows || a.cols != b.cols {
        return Err(CoreError::dimension_mismatch(
            "hadamard_product",
            a.rows * a.cols,
            b.rows * b.cols,
        ));
    }
    Ok(Matrix {
        rows: a.rows,
        cols: a.cols,
        data: a.data.iter().zip(&b.data).map(|(x, y)| x * y).collect(),
    })
}

/// Element-wise complex conjugate of a vector
pub fn conjugate_vector(vector: &[Complex64]) -> Vec<Complex64> {
    vector.iter().map(Complex64::conj).collect()
}

/// Element-wise complex conjugate
pub fn conjugate(matrix: &Matrix) -> Matrix {
    matrix.map(|z| z.conj())
}

/// Matrix transpose
pub fn transpose(matrix: &Matrix) -> Matrix {
    let mut result = Matrix::zeros(matrix.cols, matrix.rows);
    for i in 0..matrix.rows {
        for j in 0..matrix.cols {
            result.data[j * matrix.rows + i] = matrix.data[i * matrix.cols + j];
        }
    }
    result
}

/// Hermitian adjoint `A†`, where `(A†)ᵢⱼ = (Aⱼᵢ)*`
///
/// # Errors
/// Fails on non-square input
pub fn adjoint(matrix: &Matrix) -> Result<Matrix> {
    if !matrix.is_square() {
        return Err(CoreError::not_square("adjoint", matrix.rows, matrix.cols));
    }
    Ok(conjugate(&transpose(matrix)))
}

/// Sum of the diagonal
///
/// # Errors
/// Fails on non-square input
pub fn trace(matrix: &Matrix) -> Result<Complex64> {
    if !matrix.is_square() {
        return Err(CoreError::not_square("trace", matrix.rows, matrix.cols));
    }
    Ok((0..matrix.rows).map(|i| matrix.data[i * matrix.cols + i]).sum())
}

/// Density matrix `|v⟩⟨v|` of a pure state
pub fn density(vector: &[Complex64]) -> Matrix {
    outer_product(vector, &conjugate_vector(vector))
}

/// Purity `Tr(ρ²)`; 1 for pure states, `1/d` for the maximally mixed state
pub fn purity(rho: &Matrix) -> Result<f64> {
    let squared = multiply_matrices(rho, rho)?;
    Ok(trace(&squared)?.re)
}

/// Multiply every entry by `factor`
pub fn scale_matrix(matrix: &Matrix, factor: Complex64) -> Matrix {
    matrix.map(|z| z * factor)
}

/// Multiply every entry by `factor`
pub fn scale_vector(vector: &[Complex64], factor: Complex64) -> Vec<Complex64> {
    vector.iter().map(|&z| z * factor).collect()
}

/// Element-wise sum of two equally shaped matrices
pub fn add_matrices(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.rows != b.rows || a.cols != b.cols {
        return Err(CoreError::dimension_mismatch(
            "add_matrices",
            a.rows * a.cols,
            b.rows * b.cols,
        ));
    }
    Ok(Matrix {
        rows: a.rows,
        cols: a.cols,
        data: a.data.iter().zip(&b.data).map(|(x, y)| x + y).collect(),
    })
}

/// Euclidean norm `sqrt(Σ |v_i|²)`
pub fn vector_norm(vector: &[Complex64]) -> f64 {
    vector.iter().map(Complex64::norm_sqr).sum::<f64>().sqrt()
}

/// Check whether a matrix is the identity within `tolerance`
pub fn is_identity(matrix: &Matrix, tolerance: f64) -> bool {
    matrix.is_square() && matrix.equals_close(&Matrix::identity(matrix.rows), tolerance)
}

/// Check whether a matrix is Hermitian (`A = A†`)
pub fn is_hermitian(matrix: &Matrix, tolerance: f64) -> bool {
    match adjoint(matrix) {
        Ok(adj) => matrix.equals_close(&adj, tolerance),
        Err(_) => false,
    }
}

/// Check whether a matrix is unitary (`U†U = I`)
pub fn is_unitary(matrix: &Matrix, tolerance: f64) -> bool {
    let Ok(adj) = adjoint(matrix) else {
        return false;
    };
    match multiply_matrices(&adj, matrix) {
        Ok(product) => is_identity(&product, tolerance),
        Err(_) => false,
    }
}
