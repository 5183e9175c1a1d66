//! Bernstein–Vazirani: recover `a` from `f(x) = a·x (mod 2)` in one query

use super::{bits_to_string, validate_bits};
use crate::config::SimulatorConfig;
use crate::error::Result;
use log::debug;
use qreg_gates::{cx, h, h_all, x};
use qreg_state::QubitRegister;

/// Phase oracle for `f(x) = hidden·x`, with the ancilla at index `hidden.len()`
pub fn oracle(reg: &mut QubitRegister, hidden: &[u8]) -> Result<()> {
    let ancilla = hidden.len();
    for (i, _) in hidden.iter().enumerate().filter(|&(_, &b)| b == 1) {
        cx(reg, i, ancilla)?;
    }
    Ok(())
}

/// Recover `hidden` with the seed from `config`
pub fn find_secret(hidden: &[u8], config: &SimulatorConfig) -> Result<Vec<u8>> {
    let mut rng = config.rng();
    find_secret_with(hidden, &mut rng)
}

/// Recover `hidden` drawing randomness from `rng`
///
/// The input register ends in the basis state `|hidden⟩`, so the outcome does
/// not depend on the draws.
pub fn find_secret_with(hidden: &[u8], rng: &mut dyn FnMut() -> f64) -> Result<Vec<u8>> {
    validate_bits("hidden string", hidden, 1)?;
    let n = hidden.len();
    let mut reg = QubitRegister::new(n + 1)?;
    x(&mut reg, n)?;
    h_all(&mut reg)?;
    oracle(&mut reg, hidden)?;
    for q in 0..n {
        h(&mut reg, q)?;
    }
    let found = reg.measure_qubits(0..n, rng)?;
    debug!("bernstein-vazirani measured {}", bits_to_string(&found));
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimulatorError;

    #[test]
    fn test_recovers_every_string_of_four_bits() {
        let config = SimulatorConfig::deterministic(4);
        for value in 0..16usize {
            let hidden: Vec<u8> = (0..4).map(|q| ((value >> (3 - q)) & 1) as u8).collect();
            assert_eq!(find_secret(&hidden, &config).unwrap(), hidden);
        }
    }

    #[test]
    fn test_result_independent_of_draws() {
        let hidden = [1, 0, 1, 1, 0];
        for r in [0.0, 0.5, 0.999_999] {
            let mut rng = move || r;
            assert_eq!(find_secret_with(&hidden, &mut rng).unwrap(), hidden.to_vec());
        }
    }

    #[test]
    fn test_invalid_input() {
        let config = SimulatorConfig::default();
        assert!(matches!(
            find_secret(&[], &config),
            Err(SimulatorError::InvalidInput(_))
        ));
        assert!(matches!(
            find_secret(&[0, 3], &config),
            Err(SimulatorError::InvalidInput(_))
        ));
    }
}
