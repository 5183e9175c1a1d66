//! Simulator configuration

use crate::error::{Result, SimulatorError};
use qreg_state::measurement::uniform_source;
use qreg_state::NORMALIZATION_TOLERANCE;
use serde::{Deserialize, Serialize};

/// Configuration for programs and algorithm drivers
///
/// Missing fields take their defaults when loading from JSON.
///
/// ```
/// use qreg_sim::SimulatorConfig;
///
/// let config = SimulatorConfig::from_json(r#"{ "seed": 7, "shots": 256 }"#).unwrap();
/// assert_eq!(config.seed, Some(7));
/// assert_eq!(config.max_solver_attempts, 16);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Random number generator seed for reproducibility
    ///
    /// If None, seeds from the OS. Set to Some(seed) for deterministic results.
    ///
    /// Default: None (random)
    pub seed: Option<u64>,

    /// Sampling rounds Simon's driver runs before giving up on dependent rows
    ///
    /// Default: 16
    pub max_solver_attempts: usize,

    /// Number of measurement shots when sampling a final state
    ///
    /// Default: 1024
    pub shots: usize,

    /// Allowed deviation of a final state's total probability from 1
    ///
    /// Default: 1e-5
    pub normalization_tolerance: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_solver_attempts: 16,
            shots: 1024,
            normalization_tolerance: NORMALIZATION_TOLERANCE,
        }
    }
}

impl SimulatorConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Default settings with a fixed seed
    pub fn deterministic(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Set the random seed for deterministic execution
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of measurement shots
    pub fn with_shots(mut self, shots: usize) -> Self {
        self.shots = shots;
        self
    }

    /// Set the number of solver attempts
    pub fn with_max_solver_attempts(mut self, attempts: usize) -> Self {
        self.max_solver_attempts = attempts;
        self
    }

    /// Set the normalization tolerance
    pub fn with_normalization_tolerance(mut self, tolerance: f64) -> Self {
        self.normalization_tolerance = tolerance;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.shots == 0 {
            return Err(SimulatorError::InvalidConfig("shots must be > 0".to_string()));
        }

        if self.max_solver_attempts == 0 {
            return Err(SimulatorError::InvalidConfig(
                "max_solver_attempts must be > 0".to_string(),
            ));
        }

        if !(self.normalization_tolerance > 0.0 && self.normalization_tolerance < 1.0) {
            return Err(SimulatorError::InvalidConfig(format!(
                "normalization_tolerance must be in (0,1), got {}",
                self.normalization_tolerance
            )));
        }

        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Uniform `[0, 1)` source for this configuration's seed
    pub fn rng(&self) -> impl FnMut() -> f64 {
        uniform_source(self.seed)
    }
}
