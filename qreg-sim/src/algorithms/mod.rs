//! Textbook oracle algorithms driven through the register and gate engine
//!
//! Bit strings are `&[u8]` of 0/1 entries, index 0 first.

pub mod bernstein_vazirani;
pub mod deutsch_jozsa;
pub mod simon;

use crate::error::{Result, SimulatorError};
use qreg_state::MAX_QUBITS;

/// Reject empty or non-binary bit strings and registers too large to simulate
pub(crate) fn validate_bits(name: &str, bits: &[u8], extra_qubits: usize) -> Result<()> {
    if bits.is_empty() {
        return Err(SimulatorError::invalid_input(format!("{} must not be empty", name)));
    }
    if let Some(pos) = bits.iter().position(|&b| b > 1) {
        return Err(SimulatorError::invalid_input(format!(
            "{} has entry {} at position {}, expected 0 or 1",
            name, bits[pos], pos
        )));
    }
    let total = bits.len() + extra_qubits;
    if total > MAX_QUBITS {
        return Err(SimulatorError::invalid_input(format!(
            "{} needs {} qubits, at most {} supported",
            name, total, MAX_QUBITS
        )));
    }
    Ok(())
}

/// Format a bit string for log records
pub(crate) fn bits_to_string(bits: &[u8]) -> String {
    bits.iter().map(|b| char::from(b'0' + b)).collect()
}
