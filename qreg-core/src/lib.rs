//! Numeric kernel for the QReg qubit register simulator
//!
//! This crate holds everything that is independent of the register itself:
//! - [`complex`]: amplitude constants and tolerance-based equality on [`Complex64`]
//! - [`linalg`]: dense matrix/vector operations, tensor products, predicates
//! - [`truth_table`]: basis-index bit extraction and partner-index arithmetic
//! - [`gf2`]: the GF(2) solver used to post-process Simon's algorithm
//!
//! # Example
//! ```
//! use qreg_core::linalg::{tensor_vectors, Vector2c};
//! use qreg_core::complex::{ONE, ZERO};
//! use qreg_core::truth_table::bit_at;
//!
//! let one: Vector2c = [ZERO, ONE];
//! let state = tensor_vectors(&[one, one]);
//! assert_eq!(state[3], ONE);
//! assert_eq!(bit_at(2, 3, 0), 1);
//! ```

pub mod complex;
pub mod error;
pub mod gf2;
pub mod linalg;
pub mod truth_table;

pub use complex::ComplexExt;
pub use error::CoreError;
pub use gf2::Gf2Error;
pub use linalg::{Matrix, Matrix2c, Vector2c};
pub use num_complex::Complex64;

/// Result type for linear-algebra operations
pub type Result<T> = std::result::Result<T, CoreError>;
