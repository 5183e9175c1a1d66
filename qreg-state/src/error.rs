//! Error types for qubit and register operations

use qreg_core::CoreError;
use thiserror::Error;

/// Errors that can occur during register construction, gates and measurement
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Invalid qubit index
    #[error("Invalid qubit index {index} for {num_qubits}-qubit register")]
    InvalidQubitIndex { index: usize, num_qubits: usize },

    /// Invalid state dimension
    #[error("Invalid state dimension {dimension}, expected a power of 2 no smaller than 2")]
    InvalidDimension { dimension: usize },

    /// Basis index outside the amplitude vector
    #[error("Basis state {index} out of range for dimension {dimension}")]
    BasisOutOfRange { index: usize, dimension: usize },

    /// State not normalized
    #[error("State vector not normalized, total probability = {total}")]
    NotNormalized { total: f64 },

    /// Register must hold at least one qubit
    #[error("Register must have at least one qubit")]
    EmptyRegister,

    /// Register too large to allocate
    #[error("Register of {num_qubits} qubits exceeds the limit of {max_qubits}")]
    TooManyQubits { num_qubits: usize, max_qubits: usize },

    /// Control list cannot be satisfied or contains non-binary values
    #[error("Malformed controls: {reason}")]
    MalformedControls { reason: String },

    /// Measurement outcome with no probability mass left to renormalize
    #[error("Cannot collapse qubit {qubit} onto outcome {outcome} with probability {probability}")]
    ImpossibleOutcome {
        qubit: usize,
        outcome: u8,
        probability: f64,
    },

    /// Error from the linear-algebra kernel
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StateError {
    /// Create an invalid qubit index error
    pub fn invalid_qubit(index: usize, num_qubits: usize) -> Self {
        Self::InvalidQubitIndex { index, num_qubits }
    }

    /// Create a malformed controls error
    pub fn malformed_controls(reason: impl Into<String>) -> Self {
        Self::MalformedControls {
            reason: reason.into(),
        }
    }
}

/// Result type for state operations
pub type Result<T> = std::result::Result<T, StateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_qubit_message() {
        let msg = StateError::invalid_qubit(4, 3).to_string();
        assert!(msg.contains('4'));
        assert!(msg.contains("3-qubit"));
    }

    #[test]
    fn test_core_error_is_transparent() {
        let core = CoreError::dimension_mismatch("inner_product", 2, 4);
        let err: StateError = core.clone().into();
        assert_eq!(err.to_string(), core.to_string());
    }
}
