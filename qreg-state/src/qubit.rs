//! Single two-level qubit with a cached measurement

use crate::register::{COLLAPSE_EPSILON, NORMALIZATION_TOLERANCE};
use log::debug;
use num_complex::Complex64;
use qreg_core::linalg::{Matrix2c, Vector2c};

/// Named single-qubit states
///
/// A qubit state is a plain [`Vector2c`], `[⟨0|ψ⟩, ⟨1|ψ⟩]`.
pub mod states {
    use qreg_core::complex::INV_SQRT2;
    use qreg_core::linalg::Vector2c;
    use num_complex::Complex64;

    const H: Complex64 = Complex64::new(INV_SQRT2, 0.0);

    /// |0⟩
    pub const ZERO: Vector2c = [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)];
    /// |1⟩
    pub const ONE: Vector2c = [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)];
    /// |+⟩ = (|0⟩ + |1⟩)/√2
    pub const PLUS: Vector2c = [H, H];
    /// |−⟩ = (|0⟩ − |1⟩)/√2
    pub const MINUS: Vector2c = [H, Complex64::new(-INV_SQRT2, 0.0)];
    /// |R⟩ = (|0⟩ + i|1⟩)/√2
    pub const R: Vector2c = [H, Complex64::new(0.0, INV_SQRT2)];
    /// |L⟩ = (|0⟩ − i|1⟩)/√2
    pub const L: Vector2c = [H, Complex64::new(0.0, -INV_SQRT2)];
}

/// One qubit: an amplitude pair plus a write-once measurement cache
///
/// Construction does not check normalization; use [`Qubit::is_valid`] when a
/// caller needs that guarantee.
///
/// # Example
/// ```
/// use qreg_state::{Qubit, states};
///
/// let mut q = Qubit::new(states::ONE);
/// let mut rng = || 0.3;
/// assert_eq!(q.measure(&mut rng), 1);
/// assert_eq!(q.measured(), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Qubit {
    state: Vector2c,
    measured: Option<u8>,
}

impl Qubit {
    /// Create an unmeasured qubit
    pub fn new(state: Vector2c) -> Self {
        Self {
            state,
            measured: None,
        }
    }

    /// Create a qubit from the amplitudes of |0⟩ and |1⟩
    pub fn from_amplitudes(zero: Complex64, one: Complex64) -> Self {
        Self::new([zero, one])
    }

    /// |0⟩
    pub fn zero() -> Self {
        Self::new(states::ZERO)
    }

    /// |1⟩
    pub fn one() -> Self {
        Self::new(states::ONE)
    }

    /// |+⟩
    pub fn plus() -> Self {
        Self::new(states::PLUS)
    }

    /// |−⟩
    pub fn minus() -> Self {
        Self::new(states::MINUS)
    }

    /// Amplitude pair
    #[inline]
    pub fn state(&self) -> &Vector2c {
        &self.state
    }

    /// `|⟨0|ψ⟩|²`
    #[inline]
    pub fn probability_of_zero(&self) -> f64 {
        self.state[0].norm_sqr()
    }

    /// `|⟨1|ψ⟩|²`
    #[inline]
    pub fn probability_of_one(&self) -> f64 {
        self.state[1].norm_sqr()
    }

    /// True when both probabilities sum to 1 within the register tolerance
    pub fn is_valid(&self) -> bool {
        (self.probability_of_zero() + self.probability_of_one() - 1.0).abs()
            <= NORMALIZATION_TOLERANCE
    }

    /// Cached outcome, if measured
    #[inline]
    pub fn measured(&self) -> Option<u8> {
        self.measured
    }

    /// Measure in the computational basis
    ///
    /// The first call draws one value `r` and yields 1 when `r` does not
    /// exceed `|⟨1|ψ⟩|²`; an amplitude whose probability is below `1e-12`
    /// is never selected. Every later call returns the cached bit without
    /// drawing.
    pub fn measure(&mut self, rng: &mut dyn FnMut() -> f64) -> u8 {
        if let Some(bit) = self.measured {
            return bit;
        }
        let r = rng();
        let p_one = self.probability_of_one();
        let bit = if p_one < COLLAPSE_EPSILON {
            0
        } else if self.probability_of_zero() < COLLAPSE_EPSILON {
            1
        } else {
            u8::from(r <= p_one)
        };
        debug!("qubit measured {} (r={:.6}, p1={:.6})", bit, r, p_one);
        self.measured = Some(bit);
        bit
    }

    /// Apply a 2×2 gate matrix, producing a new unmeasured qubit
    pub fn apply(&self, matrix: &Matrix2c) -> Qubit {
        let [a0, a1] = self.state;
        Qubit::new([
            matrix[0][0] * a0 + matrix[0][1] * a1,
            matrix[1][0] * a0 + matrix[1][1] * a1,
        ])
    }
}

impl From<Vector2c> for Qubit {
    fn from(state: Vector2c) -> Self {
        Self::new(state)
    }
}
