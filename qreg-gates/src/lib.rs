//! Gate library and application engine for QReg
//!
//! Gates act on a [`QubitRegister`](qreg_state::QubitRegister) in place and
//! never materialize a full `2^n × 2^n` operator. Basis indices are paired
//! through truth-table masks from [`qreg_core::truth_table`], so each gate
//! costs `O(2^n)`.
//!
//! - [`matrices`]: constant 2×2 matrices (Pauli, Hadamard, S, T, √X)
//! - [`standard`]: rotation and phase constructors, and the [`Gate`] trait
//! - [`apply`]: [`mct`] and its special cases, [`swap`], matrix application
//!
//! # Example
//!
//! ```
//! use qreg_gates::{cx, h};
//! use qreg_state::QubitRegister;
//!
//! let mut reg = QubitRegister::new(2).unwrap();
//! h(&mut reg, 0).unwrap();
//! cx(&mut reg, 0, 1).unwrap();
//!
//! let probs = reg.probabilities();
//! assert!((probs[0b00] - 0.5).abs() < 1e-12);
//! assert!((probs[0b11] - 0.5).abs() < 1e-12);
//! ```

pub mod apply;
pub mod matrices;
pub mod standard;

pub use apply::{
    apply_controlled, apply_gate, apply_single_qubit, ccx, cphase, cx, cz, h, h_all, mct, phase,
    rx, ry, rz, s, swap, t, x, y, z, Control,
};
pub use standard::Gate;
