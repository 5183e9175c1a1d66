//! Simon's algorithm
//!
//! Given a 2-to-1 function with `f(x) = f(x ⊕ s)`, each run of the circuit
//! yields a row `y` with `y·s = 0 (mod 2)`. Collecting `n-1` independent rows
//! and solving the homogeneous GF(2) system recovers `s`.
//!
//! Sampled rows can be linearly dependent even when distinct. The solver
//! reports this as [`Gf2Error::LinearlyDependent`] and the driver resamples a
//! fresh set, up to [`SimulatorConfig::max_solver_attempts`] times.

use super::{bits_to_string, validate_bits};
use crate::config::SimulatorConfig;
use crate::error::{Result, SimulatorError};
use log::{debug, warn};
use qreg_core::gf2::{self, Gf2Error};
use qreg_gates::{cx, h};
use qreg_state::QubitRegister;

/// Circuit runs allowed per attempt while gathering distinct rows
const DRAWS_PER_ROW: usize = 32;

/// Oracle `|x⟩|y⟩ → |x⟩|y ⊕ f(x)⟩` on a `2n`-qubit register
///
/// Copies the input register into the output register, then XORs `secret`
/// into the output controlled on the input qubit at the first set bit of
/// `secret`. Inputs that differ by `secret` map to the same output.
pub fn oracle(reg: &mut QubitRegister, secret: &[u8]) -> Result<()> {
    let n = secret.len();
    for i in 0..n {
        cx(reg, i, n + i)?;
    }
    if let Some(pivot) = secret.iter().position(|&b| b == 1) {
        for (j, _) in secret.iter().enumerate().filter(|&(_, &b)| b == 1) {
            cx(reg, pivot, n + j)?;
        }
    }
    Ok(())
}

/// Run the circuit once and measure the input register
///
/// The returned row is orthogonal to `secret` over GF(2).
pub fn sample_row(secret: &[u8], rng: &mut dyn FnMut() -> f64) -> Result<Vec<u8>> {
    let n = secret.len();
    let mut reg = QubitRegister::new(2 * n)?;
    for q in 0..n {
        h(&mut reg, q)?;
    }
    oracle(&mut reg, secret)?;
    for q in 0..n {
        h(&mut reg, q)?;
    }
    Ok(reg.measure_qubits(0..n, rng)?)
}

/// Recover `secret` using the seed and attempt limit from `config`
///
/// # Errors
/// - [`SimulatorError::InvalidInput`] for fewer than 2 bits, non-binary
///   entries or an all-zero secret
/// - [`SimulatorError::SolverExhausted`] when every attempt produced
///   dependent rows
pub fn find_secret(secret: &[u8], config: &SimulatorConfig) -> Result<Vec<u8>> {
    let mut rng = config.rng();
    find_secret_with(secret, config.max_solver_attempts, &mut rng)
}

/// Recover `secret` drawing randomness from `rng`
pub fn find_secret_with(
    secret: &[u8],
    max_attempts: usize,
    rng: &mut dyn FnMut() -> f64,
) -> Result<Vec<u8>> {
    validate_bits("secret", secret, secret.len())?;
    if secret.len() < 2 {
        return Err(SimulatorError::invalid_input("secret needs at least 2 bits"));
    }
    if secret.iter().all(|&b| b == 0) {
        return Err(SimulatorError::invalid_input("secret must be non-zero"));
    }

    let n = secret.len();
    for attempt in 1..=max_attempts {
        let solved = match gather_rows(secret, n - 1, rng)? {
            Some(rows) => gf2::solve(&rows),
            None => Err(Gf2Error::LinearlyDependent),
        };
        match solved {
            Ok(found) => {
                debug!(
                    "simon recovered {} on attempt {}",
                    bits_to_string(&found),
                    attempt
                );
                return Ok(found);
            }
            Err(err) if err.is_recoverable() => {
                warn!(
                    "simon attempt {}/{}: {}, resampling",
                    attempt, max_attempts, err
                );
            }
            Err(err) => return Err(err.into()),
        }
    }
    Err(SimulatorError::SolverExhausted {
        attempts: max_attempts,
    })
}

/// Collect `count` distinct non-zero rows
///
/// Returns `None` when a bounded number of runs did not produce enough
/// distinct rows.
fn gather_rows(
    secret: &[u8],
    count: usize,
    rng: &mut dyn FnMut() -> f64,
) -> Result<Option<Vec<Vec<u8>>>> {
    let mut rows: Vec<Vec<u8>> = Vec::with_capacity(count);
    for _ in 0..count * DRAWS_PER_ROW {
        if rows.len() == count {
            break;
        }
        let row = sample_row(secret, rng)?;
        if row.iter().any(|&b| b == 1) && !rows.contains(&row) {
            debug!("simon row {}", bits_to_string(&row));
            rows.push(row);
        }
    }
    Ok((rows.len() == count).then_some(rows))
}
