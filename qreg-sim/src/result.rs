//! Simulation result types

use qreg_state::{QubitRegister, SamplingResult};

/// Result of running a [`Program`](crate::Program) through the
/// [`Simulator`](crate::Simulator)
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Register after every step has run
    pub register: QubitRegister,

    /// Outcome counts sampled from the final state
    pub counts: SamplingResult,
}

impl SimulationResult {
    /// Get the number of qubits in the final state
    pub fn num_qubits(&self) -> usize {
        self.register.num_qubits()
    }

    /// Get the total number of sampling shots
    pub fn total_shots(&self) -> usize {
        self.counts.shots
    }

    /// Most frequently sampled outcome as a bitstring, qubit 0 first
    pub fn most_frequent_bitstring(&self) -> Option<String> {
        self.counts
            .most_frequent()
            .map(|outcome| qreg_state::measurement::as_bitstring(outcome, self.num_qubits()))
    }

    /// Per-qubit outcomes cached by measurement steps
    pub fn measured_qubits(&self) -> Vec<Option<u8>> {
        (0..self.num_qubits())
            .map(|q| self.register.measured_qubit(q))
            .collect()
    }
}
