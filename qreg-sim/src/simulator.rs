//! Program execution against a fresh register

use crate::config::SimulatorConfig;
use crate::error::Result;
use crate::program::Program;
use crate::result::SimulationResult;
use log::{debug, warn};
use qreg_state::QubitRegister;

/// Runs programs under one [`SimulatorConfig`]
///
/// # Example
///
/// ```
/// use qreg_gates::{cx, h};
/// use qreg_sim::{Program, Simulator, SimulatorConfig};
///
/// let simulator = Simulator::new(SimulatorConfig::deterministic(1).with_shots(500)).unwrap();
///
/// let mut program = Program::new();
/// program.gate("h 0", |reg| h(reg, 0)).gate("cx 0 1", |reg| cx(reg, 0, 1));
///
/// let result = simulator.run(2, program).unwrap();
/// assert_eq!(result.counts.get_count(0b01) + result.counts.get_count(0b10), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Create a simulator, rejecting an invalid configuration
    pub fn new(config: SimulatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the simulator configuration
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Run `program` on a new `num_qubits` register in |0…0⟩
    ///
    /// After the last step the final distribution is sampled
    /// [`SimulatorConfig::shots`] times. A final state whose total probability
    /// drifts beyond the configured tolerance is reported with `warn!`.
    pub fn run(&self, num_qubits: usize, program: Program) -> Result<SimulationResult> {
        let mut register = QubitRegister::new(num_qubits)?;
        let mut rng = self.config.rng();
        self.execute(&mut register, program, &mut rng)?;
        let counts = register.sample(self.config.shots, &mut rng);
        Ok(SimulationResult { register, counts })
    }

    /// Run `program` against an existing register without sampling
    pub fn run_on(&self, register: &mut QubitRegister, program: Program) -> Result<()> {
        let mut rng = self.config.rng();
        self.execute(register, program, &mut rng)
    }

    fn execute(
        &self,
        register: &mut QubitRegister,
        program: Program,
        rng: &mut dyn FnMut() -> f64,
    ) -> Result<()> {
        debug!(
            "running {} steps on {} qubits (seed={:?})",
            program.len(),
            register.num_qubits(),
            self.config.seed
        );
        program.run(register, rng)?;

        if !register.is_normalized(self.config.normalization_tolerance) {
            warn!(
                "final state is not normalized: total probability {:.8}",
                register.total_probability()
            );
        }
        Ok(())
    }
}
