//! Error types for the simulator

use qreg_core::Gf2Error;
use qreg_state::StateError;
use thiserror::Error;

/// Result type for simulator operations
pub type Result<T> = std::result::Result<T, SimulatorError>;

/// Errors that can occur while running programs and algorithm drivers
#[derive(Debug, Error)]
pub enum SimulatorError {
    /// Register or gate failure
    #[error(transparent)]
    State(#[from] StateError),

    /// GF(2) post-processing failure
    #[error("Solver error: {0}")]
    Solver(#[from] Gf2Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Algorithm input rejected before simulation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A program step failed; later steps were not run
    #[error("Step {index} ({label}) failed: {source}")]
    StepFailed {
        index: usize,
        label: String,
        source: Box<SimulatorError>,
    },

    /// Every sampling round produced linearly dependent rows
    #[error("Solver found no independent measurement rows after {attempts} attempts")]
    SolverExhausted { attempts: usize },
}

impl SimulatorError {
    /// Create an invalid input error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    /// The error that started a chain of [`SimulatorError::StepFailed`]
    pub fn root_cause(&self) -> &SimulatorError {
        match self {
            Self::StepFailed { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_is_transparent() {
        let err: SimulatorError = StateError::invalid_qubit(4, 2).into();
        assert_eq!(err.to_string(), StateError::invalid_qubit(4, 2).to_string());
    }

    #[test]
    fn test_step_failed_display_and_root() {
        let err = SimulatorError::StepFailed {
            index: 2,
            label: "cx 0 5".to_string(),
            source: Box::new(StateError::invalid_qubit(5, 3).into()),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Step 2 (cx 0 5) failed"));
        assert!(matches!(
            err.root_cause(),
            SimulatorError::State(StateError::InvalidQubitIndex { index: 5, .. })
        ));
    }

    #[test]
    fn test_solver_conversion() {
        let err: SimulatorError = Gf2Error::LinearlyDependent.into();
        assert!(matches!(err, SimulatorError::Solver(Gf2Error::LinearlyDependent)));
    }
}
