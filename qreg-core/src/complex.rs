//! Complex scalar helpers
//!
//! Amplitudes are plain [`Complex64`] values from `num-complex`, which already
//! supplies the arithmetic (`+ - * /`), `conj` and `sqrt`. This module adds the
//! named constants used across the workspace and tolerance-based equality,
//! needed because trigonometric phase factors such as `cos(π/4)` rarely land
//! on an exactly representable value.

use num_complex::Complex64;

/// 0 + 0i
pub const ZERO: Complex64 = Complex64::new(0.0, 0.0);
/// 1 + 0i
pub const ONE: Complex64 = Complex64::new(1.0, 0.0);
/// -1 + 0i
pub const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);
/// 0 + 1i
pub const I: Complex64 = Complex64::new(0.0, 1.0);
/// 0 - 1i
pub const NEG_I: Complex64 = Complex64::new(0.0, -1.0);

/// 1/√2
pub const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Default tolerance for structural comparisons
pub const EPSILON: f64 = 1e-10;

/// Tolerance-aware comparisons for complex amplitudes
pub trait ComplexExt {
    /// True when both components differ by at most `epsilon`
    fn equals_close(&self, other: &Complex64, epsilon: f64) -> bool;

    /// [`equals_close`](ComplexExt::equals_close) with [`EPSILON`]
    fn is_close(&self, other: &Complex64) -> bool {
        self.equals_close(other, EPSILON)
    }

    /// True when the value is within `epsilon` of zero
    fn is_zero_close(&self, epsilon: f64) -> bool {
        self.equals_close(&ZERO, epsilon)
    }
}

impl ComplexExt for Complex64 {
    #[inline]
    fn equals_close(&self, other: &Complex64, epsilon: f64) -> bool {
        (self.re - other.re).abs() <= epsilon && (self.im - other.im).abs() <= epsilon
    }
}

/// Element-wise [`ComplexExt::equals_close`] over two slices of equal length
pub fn slices_close(a: &[Complex64], b: &[Complex64], epsilon: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.equals_close(y, epsilon))
}

/// e^(iθ)
#[inline]
pub fn phase_factor(theta: f64) -> Complex64 {
    Complex64::from_polar(1.0, theta)
}
