//! Linear algebra over GF(2) for Simon's algorithm post-processing
//!
//! Every run of Simon's circuit yields a bit string `y` with `y · s = 0 (mod 2)`
//! for the hidden string `s`. Given `n - 1` linearly independent such rows of
//! length `n`, the homogeneous system has exactly one non-trivial solution,
//! which [`solve`] recovers by Gaussian elimination:
//!
//! 1. Validate the rows (count, lengths, entries, no zero rows).
//! 2. Reduce to row-echelon form. Rows with a 1 in the pivot column are moved
//!    to the front and the pivot row is XORed into the others. A row that
//!    becomes all-zero means the rows were dependent.
//! 3. Reduce to reduced row-echelon form.
//! 4. Read the solution off the column that has no pivot.
//!
//! Dependent input is reported as [`Gf2Error::LinearlyDependent`], which is
//! recoverable: the caller should gather fresh measurements and solve again.
//!
//! # Example
//!
//! ```
//! use qreg_core::gf2::{solve, Gf2Error};
//!
//! let secret = solve(&[vec![1, 1, 0], vec![0, 1, 1]]).unwrap();
//! assert_eq!(secret, vec![1, 1, 1]);
//!
//! let err = solve(&[vec![1, 1, 0], vec![1, 1, 0]]).unwrap_err();
//! assert!(err.is_recoverable());
//! ```

use log::debug;
use thiserror::Error;

/// Errors raised by [`solve`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Gf2Error {
    /// No rows were supplied
    #[error("At least one measurement is required")]
    NoMeasurements,

    /// Rows do not all have the same length
    #[error("Measurement {row} has length {actual}, expected {expected}")]
    InconsistentRowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Solving for `n` bits needs exactly `n - 1` rows
    #[error("Expected {expected} measurements for {width}-bit rows, got {actual}")]
    WrongRowCount {
        width: usize,
        expected: usize,
        actual: usize,
    },

    /// An input row carries no information
    #[error("Measurement {row} is the all-zero vector")]
    ZeroRow { row: usize },

    /// An entry is neither 0 nor 1
    #[error("Measurement {row} has non-binary entry {value} at column {col}")]
    InvalidEntry { row: usize, col: usize, value: u8 },

    /// Elimination produced a zero row; resample and retry
    #[error("Measurements are linearly dependent; take a fresh set and retry")]
    LinearlyDependent,
}

impl Gf2Error {
    /// True when fresh measurements may succeed where these failed
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Gf2Error::LinearlyDependent)
    }
}

/// Result type for GF(2) operations
pub type Result<T> = std::result::Result<T, Gf2Error>;

/// Dot product modulo 2
pub fn dot_mod2(a: &[u8], b: &[u8]) -> u8 {
    a.iter().zip(b).fold(0, |acc, (x, y)| acc ^ (x & y))
}

/// `target ^= source`, element-wise
fn xor_into(target: &mut [u8], source: &[u8]) {
    for (t, s) in target.iter_mut().zip(source) {
        *t ^= s;
    }
}

fn is_zero(row: &[u8]) -> bool {
    row.iter().all(|&b| b == 0)
}

fn validate(measurements: &[Vec<u8>]) -> Result<usize> {
    let first = measurements.first().ok_or(Gf2Error::NoMeasurements)?;
    let width = first.len();

    for (row, bits) in measurements.iter().enumerate() {
        if bits.len() != width {
            return Err(Gf2Error::InconsistentRowLength {
                row,
                expected: width,
                actual: bits.len(),
            });
        }
    }

    if measurements.len() + 1 != width {
        return Err(Gf2Error::WrongRowCount {
            width,
            expected: width.saturating_sub(1),
            actual: measurements.len(),
        });
    }

    for (row, bits) in measurements.iter().enumerate() {
        if let Some((col, &value)) = bits.iter().enumerate().find(|&(_, &b)| b > 1) {
            return Err(Gf2Error::InvalidEntry { row, col, value });
        }
        if is_zero(bits) {
            return Err(Gf2Error::ZeroRow { row });
        }
    }

    Ok(width)
}

/// Bring `rows` to row-echelon form in place
///
/// For each column the not-yet-pivoted rows are partitioned so that rows with
/// a 1 come first; the first becomes the pivot and is XORed into the rest. A
/// column with no candidate is skipped without consuming a pivot row.
fn row_echelon(rows: &mut [Vec<u8>], width: usize) -> Result<()> {
    let mut pivot_row = 0;

    for col in 0..width {
        if pivot_row >= rows.len() {
            break;
        }

        let (ones, zeros): (Vec<Vec<u8>>, Vec<Vec<u8>>) = rows[pivot_row..]
            .iter()
            .cloned()
            .partition(|row| row[col] == 1);

        if ones.is_empty() {
            continue;
        }

        let pivot = ones[0].clone();
        let mut reordered = Vec::with_capacity(ones.len() + zeros.len());
        reordered.push(pivot.clone());
        for mut row in ones.into_iter().skip(1) {
            xor_into(&mut row, &pivot);
            if is_zero(&row) {
                return Err(Gf2Error::LinearlyDependent);
            }
            reordered.push(row);
        }
        reordered.extend(zeros);

        for (slot, row) in rows[pivot_row..].iter_mut().zip(reordered) {
            *slot = row;
        }
        pivot_row += 1;
    }

    if pivot_row < rows.len() {
        return Err(Gf2Error::LinearlyDependent);
    }
    Ok(())
}

/// Clear every pivot column above its pivot
fn reduced_row_echelon(rows: &mut [Vec<u8>]) {
    for i in 0..rows.len() {
        let Some(pivot_col) = rows[i].iter().position(|&b| b == 1) else {
            continue;
        };
        let pivot = rows[i].clone();
        for row in rows[..i].iter_mut() {
            if row[pivot_col] == 1 {
                xor_into(row, &pivot);
            }
        }
    }
}

/// Recover the non-trivial solution of `rows · s = 0` over GF(2)
///
/// `measurements` must hold exactly `n - 1` non-zero rows of length `n`.
///
/// # Errors
/// Returns a validation variant for malformed input and
/// [`Gf2Error::LinearlyDependent`] when the rows do not have full rank.
pub fn solve(measurements: &[Vec<u8>]) -> Result<Vec<u8>> {
    let width = validate(measurements)?;

    let mut rows = measurements.to_vec();
    row_echelon(&mut rows, width)?;
    reduced_row_echelon(&mut rows);

    // The first row whose diagonal is 0 marks the column without a pivot;
    // with full rank it can only be the last column otherwise.
    let free = (0..rows.len())
        .find(|&r| rows[r][r] == 0)
        .unwrap_or(rows.len());

    let mut secret = Vec::with_capacity(width);
    secret.extend(rows[..free].iter().map(|row| row[free]));
    secret.push(1);
    secret.extend(rows[free..].iter().map(|row| row[free]));

    debug!("gf2 solve: reduced={:?} free_column={} secret={:?}", rows, free, secret);
    Ok(secret)
}
