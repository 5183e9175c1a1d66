//! Deferred programs, configuration and algorithm drivers for QReg
//!
//! - [`Program`]: labelled steps recorded now, run later in insertion order
//! - [`Simulator`]: runs a program on a fresh register and samples the result
//! - [`SimulatorConfig`]: seed, shots, solver attempts, tolerance; loadable
//!   from JSON
//! - [`algorithms`]: Simon, Bernstein–Vazirani and Deutsch–Jozsa
//!
//! The crate logs through the `log` facade and never installs a logger.
//!
//! # Example
//!
//! ```
//! use qreg_sim::{algorithms::simon, SimulatorConfig};
//!
//! let config = SimulatorConfig::deterministic(42);
//! let secret = simon::find_secret(&[1, 0, 1], &config).unwrap();
//! assert_eq!(secret, vec![1, 0, 1]);
//! ```

pub mod algorithms;
pub mod config;
pub mod error;
pub mod program;
pub mod result;
pub mod simulator;

pub use config::SimulatorConfig;
pub use error::{Result, SimulatorError};
pub use program::Program;
pub use result::SimulationResult;
pub use simulator::Simulator;
