//! Gate application on a [`QubitRegister`]
//!
//! No gate builds a `2^n × 2^n` matrix. Each one walks the basis indices whose
//! truth-table bits select it, pairs every index that has the target bit clear
//! with the index that has it set, and rewrites that pair in place:
//!
//! - NOT-type gates ([`mct`], [`cx`], [`ccx`], [`x`]) exchange the two amplitudes
//! - [`swap`] exchanges `i` and `i + Δ` where the two qubits disagree
//! - matrix gates ([`apply_single_qubit`], [`apply_controlled`]) multiply the
//!   pair by a 2×2 matrix
//!
//! Only canonical (target-bit 0) indices are visited, so every pair is touched
//! exactly once per call. All functions are `O(2^n)`.
//!
//! A control is a `(qubit, required_bit)` pair; a gate acts only on basis
//! states where every control qubit holds its required bit.

use crate::standard::{self, Gate};
use crate::matrices;
use log::trace;
use qreg_core::linalg::Matrix2c;
use qreg_core::truth_table::{flip_partner, qubit_mask, swap_offset};
use qreg_state::{QubitRegister, Result, StateError};
use smallvec::SmallVec;

/// `(qubit, required_bit)`
pub type Control = (usize, u8);

type Controls = SmallVec<[Control; 4]>;

/// Validate a control list against `target`
///
/// Controls on the target itself are dropped. Repeated controls with the same
/// required bit are merged.
fn normalize_controls(reg: &QubitRegister, controls: &[Control], target: usize) -> Result<Controls> {
    let mut normalized = Controls::new();
    for &(qubit, bit) in controls {
        reg.check_qubit(qubit)?;
        if bit > 1 {
            return Err(StateError::malformed_controls(format!(
                "control on qubit {} requires bit {}, expected 0 or 1",
                qubit, bit
            )));
        }
        if qubit == target {
            continue;
        }
        match normalized.iter().find(|&&(q, _)| q == qubit) {
            Some(&(_, existing)) if existing != bit => {
                return Err(StateError::malformed_controls(format!(
                    "qubit {} listed as control with bits {} and {}",
                    qubit, existing, bit
                )));
            }
            Some(_) => {}
            None => normalized.push((qubit, bit)),
        }
    }
    Ok(normalized)
}

/// Basis-index selector for one gate call
#[derive(Debug, Clone, Copy)]
struct PairSelector {
    num_qubits: usize,
    target: usize,
    target_mask: usize,
    control_mask: usize,
    control_value: usize,
}

impl PairSelector {
    fn new(reg: &QubitRegister, controls: &[Control], target: usize) -> Result<Self> {
        reg.check_qubit(target)?;
        let n = reg.num_qubits();
        let mut control_mask = 0;
        let mut control_value = 0;
        for &(qubit, bit) in &normalize_controls(reg, controls, target)? {
            let mask = qubit_mask(n, qubit);
            control_mask |= mask;
            if bit == 1 {
                control_value |= mask;
            }
        }
        Ok(Self {
            num_qubits: n,
            target,
            target_mask: qubit_mask(n, target),
            control_mask,
            control_value,
        })
    }

    /// `(i0, i1)` pairs differing only in the target bit, `i0` having it clear
    fn pairs(self) -> impl Iterator<Item = (usize, usize)> {
        (0..1usize << self.num_qubits)
            .filter(move |&i| i & self.target_mask == 0 && i & self.control_mask == self.control_value)
            .map(move |i| (i, flip_partner(self.num_qubits, i, self.target)))
    }
}

/// Multi-controlled NOT
///
/// Flips `target` on every basis state where all `controls` hold their
/// required bits. No controls gives X, one gives CNOT, two gives Toffoli.
///
/// # Errors
/// - [`StateError::InvalidQubitIndex`] for any qubit outside the register
/// - [`StateError::MalformedControls`] for a required bit other than 0/1, or
///   one qubit listed with both bits
pub fn mct(reg: &mut QubitRegister, controls: &[Control], target: usize) -> Result<()> {
    let selector = PairSelector::new(reg, controls, target)?;
    trace!("mct target={} controls={:?}", target, controls);
    let amplitudes = reg.amplitudes_mut();
    for (i0, i1) in selector.pairs() {
        amplitudes.swap(i0, i1);
    }
    Ok(())
}

/// Pauli-X on `target`
pub fn x(reg: &mut QubitRegister, target: usize) -> Result<()> {
    mct(reg, &[], target)
}

/// CNOT, flipping `target` when `control` is 1
pub fn cx(reg: &mut QubitRegister, control: usize, target: usize) -> Result<()> {
    mct(reg, &[(control, 1)], target)
}

/// Toffoli, flipping `target` when both controls are 1
pub fn ccx(reg: &mut QubitRegister, control0: usize, control1: usize, target: usize) -> Result<()> {
    mct(reg, &[(control0, 1), (control1, 1)], target)
}

/// Exchange the states of `q0` and `q1`
///
/// Every index with bit `q0 = 0` and bit `q1 = 1` (after ordering `q0 < q1`)
/// is exchanged with the index `Δ = 2^(n-1-q0) - 2^(n-1-q1)` above it.
/// Swapping a qubit with itself is a no-op.
pub fn swap(reg: &mut QubitRegister, q0: usize, q1: usize) -> Result<()> {
    reg.check_qubit(q0)?;
    reg.check_qubit(q1)?;
    trace!("swap {} {}", q0, q1);
    if q0 == q1 {
        return Ok(());
    }
    let (lo, hi) = if q0 < q1 { (q0, q1) } else { (q1, q0) };
    let n = reg.num_qubits();
    let lo_mask = qubit_mask(n, lo);
    let hi_mask = qubit_mask(n, hi);
    let delta = swap_offset(n, lo, hi);

    let amplitudes = reg.amplitudes_mut();
    for i in 0..amplitudes.len() {
        if i & lo_mask == 0 && i & hi_mask != 0 {
            amplitudes.swap(i, i + delta);
        }
    }
    Ok(())
}

/// Apply a 2×2 matrix to `target` on the basis states selected by `controls`
pub fn apply_controlled(
    reg: &mut QubitRegister,
    controls: &[Control],
    matrix: &Matrix2c,
    target: usize,
) -> Result<()> {
    let selector = PairSelector::new(reg, controls, target)?;
    let amplitudes = reg.amplitudes_mut();
    for (i0, i1) in selector.pairs() {
        let a0 = amplitudes[i0];
        let a1 = amplitudes[i1];
        amplitudes[i0] = matrix[0][0] * a0 + matrix[0][1] * a1;
        amplitudes[i1] = matrix[1][0] * a0 + matrix[1][1] * a1;
    }
    Ok(())
}

/// Apply a 2×2 matrix to `target`
pub fn apply_single_qubit(reg: &mut QubitRegister, matrix: &Matrix2c, target: usize) -> Result<()> {
    apply_controlled(reg, &[], matrix, target)
}

/// Apply a [`Gate`] to `target`, optionally controlled
pub fn apply_gate(
    reg: &mut QubitRegister,
    gate: &dyn Gate,
    controls: &[Control],
    target: usize,
) -> Result<()> {
    trace!("{} target={} controls={:?}", gate.description(), target, controls);
    apply_controlled(reg, controls, &gate.matrix(), target)
}

/// Hadamard
pub fn h(reg: &mut QubitRegister, target: usize) -> Result<()> {
    apply_gate(reg, &standard::Hadamard, &[], target)
}

/// Hadamard on every qubit
pub fn h_all(reg: &mut QubitRegister) -> Result<()> {
    for q in 0..reg.num_qubits() {
        h(reg, q)?;
    }
    Ok(())
}

/// Pauli-Y
pub fn y(reg: &mut QubitRegister, target: usize) -> Result<()> {
    apply_gate(reg, &standard::PauliY, &[], target)
}

/// Pauli-Z
pub fn z(reg: &mut QubitRegister, target: usize) -> Result<()> {
    apply_gate(reg, &standard::PauliZ, &[], target)
}

/// S gate
pub fn s(reg: &mut QubitRegister, target: usize) -> Result<()> {
    apply_gate(reg, &standard::SGate, &[], target)
}

/// T gate
pub fn t(reg: &mut QubitRegister, target: usize) -> Result<()> {
    apply_gate(reg, &standard::TGate, &[], target)
}

/// Phase shift `e^(iθ)` on |1⟩
pub fn phase(reg: &mut QubitRegister, target: usize, theta: f64) -> Result<()> {
    apply_gate(reg, &standard::Phase::new(theta), &[], target)
}

/// Rotation about X by `theta`
pub fn rx(reg: &mut QubitRegister, target: usize, theta: f64) -> Result<()> {
    apply_gate(reg, &standard::RotationX::new(theta), &[], target)
}

/// Rotation about Y by `theta`
pub fn ry(reg: &mut QubitRegister, target: usize, theta: f64) -> Result<()> {
    apply_gate(reg, &standard::RotationY::new(theta), &[], target)
}

/// Rotation about Z by `theta`
pub fn rz(reg: &mut QubitRegister, target: usize, theta: f64) -> Result<()> {
    apply_gate(reg, &standard::RotationZ::new(theta), &[], target)
}

/// Controlled Z
pub fn cz(reg: &mut QubitRegister, control: usize, target: usize) -> Result<()> {
    trace!("cz control={} target={}", control, target);
    apply_controlled(reg, &[(control, 1)], &matrices::PAULI_Z, target)
}

/// Controlled phase shift
pub fn cphase(reg: &mut QubitRegister, control: usize, target: usize, theta: f64) -> Result<()> {
    apply_gate(reg, &standard::Phase::new(theta), &[(control, 1)], target)
}
