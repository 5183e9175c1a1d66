//! Deferred operations run in order against one register
//!
//! A [`Program`] records closures instead of applying them, so a sequence of
//! gates and measurements can be built up front and executed later against any
//! register of the right size.
//!
//! # Example
//!
//! ```
//! use qreg_gates::{cx, h};
//! use qreg_sim::Program;
//! use qreg_state::QubitRegister;
//!
//! let mut program = Program::new();
//! program
//!     .gate("h 0", |reg| h(reg, 0))
//!     .gate("cx 0 1", |reg| cx(reg, 0, 1))
//!     .measure(0)
//!     .measure(1);
//!
//! let mut reg = QubitRegister::new(2).unwrap();
//! let mut rng = || 0.25;
//! program.run(&mut reg, &mut rng).unwrap();
//! assert_eq!(reg.measured_qubit(0), reg.measured_qubit(1));
//! ```

use crate::error::{Result, SimulatorError};
use log::trace;
use qreg_state::QubitRegister;
use std::fmt;

type Step = Box<dyn FnOnce(&mut QubitRegister, &mut dyn FnMut() -> f64) -> Result<()>>;

/// Ordered list of labelled deferred steps
#[derive(Default)]
pub struct Program {
    steps: Vec<(String, Step)>,
}

impl Program {
    /// Create an empty program
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step that may draw randomness
    pub fn push<F>(&mut self, label: impl Into<String>, step: F) -> &mut Self
    where
        F: FnOnce(&mut QubitRegister, &mut dyn FnMut() -> f64) -> Result<()> + 'static,
    {
        self.steps.push((label.into(), Box::new(step)));
        self
    }

    /// Append a deterministic step, typically one gate
    pub fn gate<F>(&mut self, label: impl Into<String>, op: F) -> &mut Self
    where
        F: FnOnce(&mut QubitRegister) -> qreg_state::Result<()> + 'static,
    {
        self.push(label, move |reg, _rng| op(reg).map_err(SimulatorError::from))
    }

    /// Append a single-qubit measurement; the outcome is cached on the register
    pub fn measure(&mut self, qubit: usize) -> &mut Self {
        self.push(format!("measure {}", qubit), move |reg, rng| {
            reg.measure_single_qubit(qubit, rng)?;
            Ok(())
        })
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when no steps were added
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step labels in execution order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|(label, _)| label.as_str())
    }

    /// Run every step in insertion order
    ///
    /// Stops at the first failing step and returns
    /// [`SimulatorError::StepFailed`] with its position and label. Steps
    /// already run keep their effect on `reg`.
    pub fn run(self, reg: &mut QubitRegister, rng: &mut dyn FnMut() -> f64) -> Result<()> {
        for (index, (label, step)) in self.steps.into_iter().enumerate() {
            trace!("step {}: {}", index, label);
            step(reg, rng).map_err(|source| SimulatorError::StepFailed {
                index,
                label,
                source: Box::new(source),
            })?;
        }
        Ok(())
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Program")
            .field("steps", &self.labels().collect::<Vec<_>>())
            .finish()
    }
}
