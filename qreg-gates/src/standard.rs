//! Standard single-qubit gates and parametrized matrix constructors

use crate::matrices;
use num_complex::Complex64;
use qreg_core::complex::{phase_factor, ONE, ZERO};
use qreg_core::linalg::Matrix2c;
use std::fmt;

/// Phase gate matrix
/// P(θ) = [[1, 0     ],
///         [0, e^(iθ)]]
#[inline]
pub fn phase(theta: f64) -> Matrix2c {
    [[ONE, ZERO], [ZERO, phase_factor(theta)]]
}

/// Rotation about X
/// RX(θ) = [[cos(θ/2),    -i·sin(θ/2)],
///          [-i·sin(θ/2),  cos(θ/2)]]
#[inline]
pub fn rotation_x(theta: f64) -> Matrix2c {
    let (sin, cos) = (theta / 2.0).sin_cos();
    [
        [Complex64::new(cos, 0.0), Complex64::new(0.0, -sin)],
        [Complex64::new(0.0, -sin), Complex64::new(cos, 0.0)],
    ]
}

/// Rotation about Y
/// RY(θ) = [[cos(θ/2), -sin(θ/2)],
///          [sin(θ/2),  cos(θ/2)]]
#[inline]
pub fn rotation_y(theta: f64) -> Matrix2c {
    let (sin, cos) = (theta / 2.0).sin_cos();
    [
        [Complex64::new(cos, 0.0), Complex64::new(-sin, 0.0)],
        [Complex64::new(sin, 0.0), Complex64::new(cos, 0.0)],
    ]
}

/// Rotation about Z
/// RZ(θ) = [[e^(-iθ/2), 0        ],
///          [0,         e^(iθ/2)]]
#[inline]
pub fn rotation_z(theta: f64) -> Matrix2c {
    [
        [phase_factor(-theta / 2.0), ZERO],
        [ZERO, phase_factor(theta / 2.0)],
    ]
}

/// A single-qubit gate given by its 2×2 matrix
pub trait Gate: fmt::Debug {
    /// Short gate name, e.g. `"H"`
    fn name(&self) -> &str;

    /// The gate's matrix
    fn matrix(&self) -> Matrix2c;

    /// Whether the gate is its own adjoint
    fn is_hermitian(&self) -> bool {
        false
    }

    /// Name including parameters, used in log records
    fn description(&self) -> String {
        self.name().to_string()
    }
}

macro_rules! fixed_gate {
    ($(#[$doc:meta])* $gate:ident, $name:literal, $matrix:path, $hermitian:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $gate;

        impl Gate for $gate {
            fn name(&self) -> &str {
                $name
            }

            fn matrix(&self) -> Matrix2c {
                $matrix
            }

            fn is_hermitian(&self) -> bool {
                $hermitian
            }
        }
    };
}

fixed_gate!(
    /// Identity
    Identity, "I", matrices::IDENTITY, true
);
fixed_gate!(
    /// Hadamard: H|0⟩ = |+⟩, H|1⟩ = |−⟩
    Hadamard, "H", matrices::HADAMARD, true
);
fixed_gate!(
    /// Bit flip
    PauliX, "X", matrices::PAULI_X, true
);
fixed_gate!(PauliY, "Y", matrices::PAULI_Y, true);
fixed_gate!(
    /// Phase flip
    PauliZ, "Z", matrices::PAULI_Z, true
);
fixed_gate!(SGate, "S", matrices::S_GATE, false);
fixed_gate!(SGateDagger, "S†", matrices::S_GATE_DAGGER, false);
fixed_gate!(TGate, "T", matrices::T_GATE, false);
fixed_gate!(TGateDagger, "T†", matrices::T_GATE_DAGGER, false);
fixed_gate!(
    /// Square root of X
    SXGate, "SX", matrices::SX_GATE, false
);

macro_rules! angle_gate {
    ($(#[$doc:meta])* $gate:ident, $name:literal, $matrix_fn:path) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $gate {
            theta: f64,
        }

        impl $gate {
            /// Create the gate for angle `theta` in radians
            pub const fn new(theta: f64) -> Self {
                Self { theta }
            }

            /// Rotation angle in radians
            pub const fn angle(&self) -> f64 {
                self.theta
            }
        }

        impl Gate for $gate {
            fn name(&self) -> &str {
                $name
            }

            fn matrix(&self) -> Matrix2c {
                $matrix_fn(self.theta)
            }

            fn description(&self) -> String {
                format!("{}({:.4})", $name, self.theta)
            }
        }
    };
}

angle_gate!(
    /// Phase shift of |1⟩ by e^(iθ)
    Phase, "P", phase
);
angle_gate!(RotationX, "RX", rotation_x);
angle_gate!(RotationY, "RY", rotation_y);
angle_gate!(RotationZ, "RZ", rotation_z);
