//! Multi-qubit register: joint amplitude vector and measurement protocol
//!
//! A register of `n` qubits owns `2^n` amplitudes. Amplitude `i` belongs to the
//! basis state whose binary expansion gives each qubit's value, qubit 0 being
//! the most-significant bit (see [`qreg_core::truth_table`]).
//!
//! Measurement is write-once per register. The whole-register outcome and each
//! per-qubit outcome move from unmeasured to measured exactly once; later calls
//! return the cached value without drawing from the random source.

use crate::error::{Result, StateError};
use crate::measurement::{self, sample_distribution, select_outcome, SamplingResult};
use crate::qubit::Qubit;
use log::debug;
use num_complex::Complex64;
use qreg_core::complex::{ONE, ZERO};
use qreg_core::linalg::{tensor_vectors, Vector2c};
use qreg_core::truth_table::{bit_at, indices_where};
use std::fmt;

/// Largest register that will be allocated (`2^30` amplitudes)
pub const MAX_QUBITS: usize = 30;

/// Allowed deviation of the total probability from 1 (5 decimal digits)
pub const NORMALIZATION_TOLERANCE: f64 = 1e-5;

/// Below this, an outcome is treated as having no probability mass
pub(crate) const COLLAPSE_EPSILON: f64 = 1e-12;

/// Joint state of `n` qubits
///
/// # Example
///
/// ```
/// use qreg_state::{QubitRegister, Qubit};
///
/// let mut reg = QubitRegister::from_qubits(&[Qubit::one(), Qubit::zero()]).unwrap();
/// assert_eq!(reg.probability_of_state_at_index(0b10).unwrap(), 1.0);
///
/// let mut rng = || 0.5;
/// assert_eq!(reg.measure(&mut rng), 0b10);
/// assert_eq!(reg.measure_single_qubit(0, &mut rng).unwrap(), 1);
/// ```
#[derive(Clone, PartialEq)]
pub struct QubitRegister {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
    measured_value: Option<usize>,
    measured_qubits: Vec<Option<u8>>,
}

fn check_qubit_count(num_qubits: usize) -> Result<()> {
    if num_qubits == 0 {
        return Err(StateError::EmptyRegister);
    }
    if num_qubits > MAX_QUBITS {
        return Err(StateError::TooManyQubits {
            num_qubits,
            max_qubits: MAX_QUBITS,
        });
    }
    Ok(())
}

impl QubitRegister {
    fn from_parts(num_qubits: usize, amplitudes: Vec<Complex64>) -> Self {
        debug_assert_eq!(amplitudes.len(), 1 << num_qubits);
        Self {
            num_qubits,
            amplitudes,
            measured_value: None,
            measured_qubits: vec![None; num_qubits],
        }
    }

    /// Create a register in the all-zero basis state |0…0⟩
    ///
    /// # Errors
    /// Fails for zero qubits or more than [`MAX_QUBITS`]
    pub fn new(num_qubits: usize) -> Result<Self> {
        check_qubit_count(num_qubits)?;
        let mut amplitudes = vec![ZERO; 1 << num_qubits];
        amplitudes[0] = ONE;
        Ok(Self::from_parts(num_qubits, amplitudes))
    }

    /// Tensor product of single-qubit states, qubit 0 first
    ///
    /// Normalization is not checked, so raw or deliberately unnormalized
    /// qubits are accepted.
    pub fn from_states(states: &[Vector2c]) -> Result<Self> {
        check_qubit_count(states.len())?;
        Ok(Self::from_parts(states.len(), tensor_vectors(states)))
    }

    /// Tensor product of qubits, qubit 0 first; measurement caches of the
    /// inputs are not carried over
    pub fn from_qubits(qubits: &[Qubit]) -> Result<Self> {
        let states: Vec<Vector2c> = qubits.iter().map(|q| *q.state()).collect();
        Self::from_states(&states)
    }

    /// Register from an explicit amplitude vector
    ///
    /// # Errors
    /// - [`StateError::InvalidDimension`] unless the length is a power of two ≥ 2
    /// - [`StateError::NotNormalized`] unless the probabilities sum to 1
    ///   within [`NORMALIZATION_TOLERANCE`]
    pub fn of_states(amplitudes: Vec<Complex64>) -> Result<Self> {
        let dimension = amplitudes.len();
        if dimension < 2 || !dimension.is_power_of_two() {
            return Err(StateError::InvalidDimension { dimension });
        }
        let num_qubits = dimension.trailing_zeros() as usize;
        check_qubit_count(num_qubits)?;

        let total: f64 = amplitudes.iter().map(Complex64::norm_sqr).sum();
        if (total - 1.0).abs() > NORMALIZATION_TOLERANCE {
            return Err(StateError::NotNormalized { total });
        }
        Ok(Self::from_parts(num_qubits, amplitudes))
    }

    /// GHZ state `(|0…0⟩ + |1…1⟩)/√2`
    pub fn maximally_entangled(num_qubits: usize) -> Result<Self> {
        check_qubit_count(num_qubits)?;
        let dimension = 1usize << num_qubits;
        let amp = Complex64::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
        let mut amplitudes = vec![ZERO; dimension];
        amplitudes[0] = amp;
        amplitudes[dimension - 1] = amp;
        Ok(Self::from_parts(num_qubits, amplitudes))
    }

    /// Uniform superposition, every amplitude `1/√(2^n)`
    pub fn maximally_mixed(num_qubits: usize) -> Result<Self> {
        check_qubit_count(num_qubits)?;
        let dimension = 1usize << num_qubits;
        let amp = Complex64::new(1.0 / (dimension as f64).sqrt(), 0.0);
        Ok(Self::from_parts(num_qubits, vec![amp; dimension]))
    }

    /// Number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of amplitudes (`2^num_qubits`)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Amplitude vector
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Mutable amplitude vector, for gate application
    ///
    /// Writes are not validated; callers that break normalization keep an
    /// unnormalized register.
    #[inline]
    pub fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        &mut self.amplitudes
    }

    /// Fail unless `qubit` addresses this register
    pub fn check_qubit(&self, qubit: usize) -> Result<()> {
        if qubit >= self.num_qubits {
            return Err(StateError::invalid_qubit(qubit, self.num_qubits));
        }
        Ok(())
    }

    /// `|amplitudes[index]|²`
    pub fn probability_of_state_at_index(&self, index: usize) -> Result<f64> {
        self.amplitudes
            .get(index)
            .map(Complex64::norm_sqr)
            .ok_or(StateError::BasisOutOfRange {
                index,
                dimension: self.dimension(),
            })
    }

    /// Probability of every basis state
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// Sum of all probabilities
    pub fn total_probability(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    /// True when the total probability is within `tolerance` of 1
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.total_probability() - 1.0).abs() <= tolerance
    }

    /// Marginal probability that `qubit` measures as 1
    pub fn probability_of_qubit(&self, qubit: usize) -> Result<f64> {
        self.check_qubit(qubit)?;
        Ok(self.marginal(qubit, 1))
    }

    fn marginal(&self, qubit: usize, value: u8) -> f64 {
        indices_where(self.num_qubits, qubit, value)
            .map(|i| self.amplitudes[i].norm_sqr())
            .sum()
    }

    /// Cached whole-register outcome
    #[inline]
    pub fn measured_value(&self) -> Option<usize> {
        self.measured_value
    }

    /// Cached outcome of one qubit
    pub fn measured_qubit(&self, qubit: usize) -> Option<u8> {
        self.measured_qubits.get(qubit).copied().flatten()
    }

    /// Measure the whole register
    ///
    /// The first call draws one value and picks the basis index by cumulative
    /// probability (see [`select_outcome`]). Amplitudes are left untouched; the
    /// index is cached and returned by every later call.
    pub fn measure(&mut self, rng: &mut dyn FnMut() -> f64) -> usize {
        if let Some(outcome) = self.measured_value {
            return outcome;
        }
        let r = rng();
        let outcome = select_outcome(&self.probabilities(), r);
        debug!(
            "register measured |{}⟩ (r={:.6})",
            measurement::as_bitstring(outcome, self.num_qubits),
            r
        );
        self.measured_value = Some(outcome);
        outcome
    }

    /// [`measure`](Self::measure) with the thread-local generator
    pub fn measure_random(&mut self) -> usize {
        let mut rng = measurement::thread_source();
        self.measure(&mut rng)
    }

    /// Measure one qubit and collapse the register
    ///
    /// On the first call for `qubit`, one value `r` is drawn and the outcome is
    /// 1 when `r` does not exceed the qubit's marginal probability of 1. A
    /// marginal below `1e-12` counts as zero, so rounding residue never selects
    /// an outcome the state cannot produce. If the
    /// whole register was already measured, the outcome is read from that
    /// cached index instead. Amplitudes consistent with the outcome are
    /// rescaled by `1/√p(outcome)`, the rest are zeroed. Once every qubit has
    /// been measured the whole-register cache is set to the matching index.
    ///
    /// # Errors
    /// - [`StateError::InvalidQubitIndex`] for an out-of-range qubit
    /// - [`StateError::ImpossibleOutcome`] when the chosen outcome carries no
    ///   probability mass (only reachable on unnormalized registers)
    pub fn measure_single_qubit(
        &mut self,
        qubit: usize,
        rng: &mut dyn FnMut() -> f64,
    ) -> Result<u8> {
        self.check_qubit(qubit)?;
        if let Some(bit) = self.measured_qubits[qubit] {
            return Ok(bit);
        }

        let outcome = match self.measured_value {
            Some(index) => bit_at(self.num_qubits, index, qubit),
            None => {
                let p_one = self.marginal(qubit, 1);
                let p_zero = self.marginal(qubit, 0);
                let r = rng();
                if p_one < COLLAPSE_EPSILON {
                    0
                } else if p_zero < COLLAPSE_EPSILON {
                    1
                } else {
                    u8::from(r <= p_one)
                }
            }
        };

        let p_outcome = self.marginal(qubit, outcome);
        if p_outcome < COLLAPSE_EPSILON {
            return Err(StateError::ImpossibleOutcome {
                qubit,
                outcome,
                probability: p_outcome,
            });
        }

        let inv_norm = 1.0 / p_outcome.sqrt();
        let n = self.num_qubits;
        for (index, amp) in self.amplitudes.iter_mut().enumerate() {
            if bit_at(n, index, qubit) == outcome {
                *amp *= inv_norm;
            } else {
                *amp = ZERO;
            }
        }

        debug!("qubit {} collapsed to {} (p={:.6})", qubit, outcome, p_outcome);
        self.measured_qubits[qubit] = Some(outcome);

        if self.measured_value.is_none() {
            if let Some(index) = self.index_from_measured_qubits() {
                self.measured_value = Some(index);
            }
        }
        Ok(outcome)
    }

    /// [`measure_single_qubit`](Self::measure_single_qubit) with the
    /// thread-local generator
    pub fn measure_single_qubit_random(&mut self, qubit: usize) -> Result<u8> {
        let mut rng = measurement::thread_source();
        self.measure_single_qubit(qubit, &mut rng)
    }

    /// Basis index fixed by the per-qubit outcomes, once all are known
    fn index_from_measured_qubits(&self) -> Option<usize> {
        self.measured_qubits
            .iter()
            .try_fold(0usize, |acc, bit| bit.map(|b| (acc << 1) | b as usize))
    }

    /// Measure each listed qubit in order, returning their bits
    pub fn measure_qubits(
        &mut self,
        qubits: impl IntoIterator<Item = usize>,
        rng: &mut dyn FnMut() -> f64,
    ) -> Result<Vec<u8>> {
        qubits
            .into_iter()
            .map(|q| self.measure_single_qubit(q, rng))
            .collect()
    }

    /// Sample `shots` outcomes from the current distribution
    ///
    /// Neither the amplitudes nor the measurement caches are touched.
    pub fn sample(&self, shots: usize, rng: &mut dyn FnMut() -> f64) -> SamplingResult {
        sample_distribution(&self.probabilities(), shots, rng)
    }

    /// Bits of a basis index, qubit 0 first
    pub fn outcome_bits(&self, index: usize) -> Vec<u8> {
        (0..self.num_qubits)
            .map(|q| bit_at(self.num_qubits, index, q))
            .collect()
    }
}

impl fmt::Debug for QubitRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QubitRegister")
            .field("num_qubits", &self.num_qubits)
            .field("total_probability", &self.total_probability())
            .field("measured_value", &self.measured_value)
            .field("measured_qubits", &self.measured_qubits)
            .finish()
    }
}

impl fmt::Display for QubitRegister {
    /// Non-zero amplitudes as a ket sum, e.g. `0.7071|00⟩ + 0.7071|11⟩`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (index, amp) in self.amplitudes.iter().enumerate() {
            if amp.norm_sqr() < COLLAPSE_EPSILON {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            let ket = measurement::as_bitstring(index, self.num_qubits);
            if amp.im.abs() < 1e-12 {
                write!(f, "{:.4}|{}⟩", amp.re, ket)?;
            } else {
                write!(f, "({:.4}{:+.4}i)|{}⟩", amp.re, amp.im, ket)?;
            }
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
