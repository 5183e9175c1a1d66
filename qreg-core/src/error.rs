//! Error types for the linear-algebra kernel

use thiserror::Error;

/// Errors raised by vector and matrix operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Operand shapes do not line up for the requested operation
    #[error("Dimension mismatch in {operation}: expected {expected}, got {actual}")]
    DimensionMismatch {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Operation is only defined for square matrices
    #[error("{operation} requires a square matrix, got {rows}x{cols}")]
    NotSquare {
        operation: &'static str,
        rows: usize,
        cols: usize,
    },

    /// Backing storage does not match the declared shape
    #[error("Matrix storage holds {actual} elements, shape {rows}x{cols} needs {}", .rows * .cols)]
    InvalidShape {
        rows: usize,
        cols: usize,
        actual: usize,
    },

    /// Operation needs at least one operand
    #[error("{0} requires at least one operand")]
    Empty(&'static str),
}

impl CoreError {
    /// Create a dimension mismatch error
    pub fn dimension_mismatch(operation: &'static str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            operation,
            expected,
            actual,
        }
    }

    /// Create a non-square error
    pub fn not_square(operation: &'static str, rows: usize, cols: usize) -> Self {
        Self::NotSquare {
            operation,
            rows,
            cols,
        }
    }
}
