//! Deutsch–Jozsa: decide whether `f: {0,1}^n → {0,1}` is constant or balanced

use super::{bits_to_string, validate_bits};
use crate::config::SimulatorConfig;
use crate::error::{Result, SimulatorError};
use log::debug;
use qreg_gates::{cx, h, h_all, x};
use qreg_state::QubitRegister;

/// Promise-problem oracle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Oracle {
    /// `f(x) = bit` for every input
    Constant(u8),
    /// `f(x) = mask·x (mod 2)`; balanced for any non-zero mask
    Balanced(Vec<u8>),
}

/// Answer to the promise problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionClass {
    Constant,
    Balanced,
}

impl Oracle {
    /// Classical evaluation of `f` on `input`
    pub fn evaluate(&self, input: &[u8]) -> u8 {
        match self {
            Oracle::Constant(bit) => *bit,
            Oracle::Balanced(mask) => qreg_core::gf2::dot_mod2(mask, input),
        }
    }

    fn validate(&self, num_inputs: usize) -> Result<()> {
        match self {
            Oracle::Constant(bit) if *bit > 1 => Err(SimulatorError::invalid_input(format!(
                "constant oracle value {} is not a bit",
                bit
            ))),
            Oracle::Constant(_) => Ok(()),
            Oracle::Balanced(mask) => {
                validate_bits("balanced mask", mask, 1)?;
                if mask.len() != num_inputs {
                    return Err(SimulatorError::invalid_input(format!(
                        "balanced mask has {} bits, expected {}",
                        mask.len(),
                        num_inputs
                    )));
                }
                if mask.iter().all(|&b| b == 0) {
                    return Err(SimulatorError::invalid_input(
                        "balanced mask must be non-zero",
                    ));
                }
                Ok(())
            }
        }
    }

    /// `|x⟩|y⟩ → |x⟩|y ⊕ f(x)⟩` with the ancilla at `num_inputs`
    pub fn apply(&self, reg: &mut QubitRegister, num_inputs: usize) -> Result<()> {
        match self {
            Oracle::Constant(0) => {}
            Oracle::Constant(_) => x(reg, num_inputs)?,
            Oracle::Balanced(mask) => {
                for (i, _) in mask.iter().enumerate().filter(|&(_, &b)| b == 1) {
                    cx(reg, i, num_inputs)?;
                }
            }
        }
        Ok(())
    }
}

/// Classify `oracle` over `num_inputs` input bits with the seed from `config`
pub fn classify(oracle: &Oracle, num_inputs: usize, config: &SimulatorConfig) -> Result<FunctionClass> {
    let mut rng = config.rng();
    classify_with(oracle, num_inputs, &mut rng)
}

/// Classify `oracle` drawing randomness from `rng`
///
/// Constant exactly when every input qubit measures 0.
pub fn classify_with(
    oracle: &Oracle,
    num_inputs: usize,
    rng: &mut dyn FnMut() -> f64,
) -> Result<FunctionClass> {
    if num_inputs == 0 {
        return Err(SimulatorError::invalid_input("at least one input bit is required"));
    }
    oracle.validate(num_inputs)?;

    let mut reg = QubitRegister::new(num_inputs + 1)?;
    x(&mut reg, num_inputs)?;
    h_all(&mut reg)?;
    oracle.apply(&mut reg, num_inputs)?;
    for q in 0..num_inputs {
        h(&mut reg, q)?;
    }
    let bits = reg.measure_qubits(0..num_inputs, rng)?;
    debug!("deutsch-jozsa measured {}", bits_to_string(&bits));

    Ok(if bits.iter().all(|&b| b == 0) {
        FunctionClass::Constant
    } else {
        FunctionClass::Balanced
    })
}
