//! Qubit and register state for the state-vector simulator
//!
//! - [`Qubit`]: one two-level system with a write-once measurement
//! - [`QubitRegister`]: `2^n` joint amplitudes in truth-table order, with
//!   whole-register measurement and single-qubit measurement with collapse
//! - [`measurement`]: random sources, outcome selection and shot sampling
//!
//! # Example
//!
//! ```
//! use qreg_state::{QubitRegister, states, uniform_source};
//!
//! let mut reg = QubitRegister::from_states(&[states::PLUS, states::ZERO]).unwrap();
//! let mut rng = uniform_source(Some(1));
//!
//! let bit = reg.measure_single_qubit(0, &mut rng).unwrap();
//! let index = if bit == 1 { 0b10 } else { 0b00 };
//! assert!((reg.probability_of_state_at_index(index).unwrap() - 1.0).abs() < 1e-12);
//! ```

pub mod error;
pub mod measurement;
pub mod qubit;
pub mod register;

pub use error::{Result, StateError};
pub use measurement::{select_outcome, uniform_source, SamplingResult};
pub use qubit::{states, Qubit};
pub use register::{QubitRegister, MAX_QUBITS, NORMALIZATION_TOLERANCE};
