//! Truth-table indexing over basis-state indices
//!
//! A register of `n` qubits has `2^n` basis states. Basis index `i` encodes the
//! classical value of every qubit in its binary expansion, with qubit 0 as the
//! most-significant bit:
//!
//! ```text
//! n = 3, index 6 = 0b110  ->  q0 = 1, q1 = 1, q2 = 0
//! ```
//!
//! The column of a qubit is the sequence of bits it takes across all indices.
//! Gate application selects amplitude pairs through these columns instead of
//! building `2^n × 2^n` matrices, so the partner-index helpers here carry all
//! of the index arithmetic the gate engine relies on.

/// Bit position (counted from the least-significant end) of `qubit`
#[inline]
fn shift(num_qubits: usize, qubit: usize) -> usize {
    assert!(
        qubit < num_qubits,
        "qubit {} out of range for {} qubits",
        qubit,
        num_qubits
    );
    num_qubits - 1 - qubit
}

/// Value (0 or 1) of `qubit` in basis state `state_index`
///
/// # Example
/// ```
/// use qreg_core::truth_table::bit_at;
///
/// // 0b10 in a 2-qubit register: q0 = 1, q1 = 0
/// assert_eq!(bit_at(2, 2, 0), 1);
/// assert_eq!(bit_at(2, 2, 1), 0);
/// ```
///
/// # Panics
/// Panics when `qubit >= num_qubits`
#[inline]
pub fn bit_at(num_qubits: usize, state_index: usize, qubit: usize) -> u8 {
    ((state_index >> shift(num_qubits, qubit)) & 1) as u8
}

/// Mask selecting the bit of `qubit`, i.e. `2^(num_qubits - 1 - qubit)`
///
/// Panics when `qubit >= num_qubits`.
#[inline]
pub fn qubit_mask(num_qubits: usize, qubit: usize) -> usize {
    1usize << shift(num_qubits, qubit)
}

/// Index that differs from `state_index` only in the bit of `target`
#[inline]
pub fn flip_partner(num_qubits: usize, state_index: usize, target: usize) -> usize {
    state_index ^ qubit_mask(num_qubits, target)
}

/// Closed-form distance between SWAP partners
///
/// For `q0 < q1`, the index with `(q0, q1) = (0, 1)` and its partner with
/// `(q0, q1) = (1, 0)` are exactly `2^(n-1) · (2^-q0 − 2^-q1)` apart, which in
/// integer form is `2^(n-1-q0) − 2^(n-1-q1)`.
///
/// # Panics
/// Panics in debug builds when `q0 >= q1`.
#[inline]
pub fn swap_offset(num_qubits: usize, q0: usize, q1: usize) -> usize {
    debug_assert!(q0 < q1, "swap_offset expects q0 < q1, got {} and {}", q0, q1);
    qubit_mask(num_qubits, q0) - qubit_mask(num_qubits, q1)
}

/// Partner of `state_index` under SWAP(q0, q1)
///
/// Returns `None` when both bits are equal, since SWAP leaves that basis state
/// in place.
pub fn swap_partner(num_qubits: usize, state_index: usize, q0: usize, q1: usize) -> Option<usize> {
    if q0 == q1 {
        return None;
    }
    let (lo, hi) = if q0 < q1 { (q0, q1) } else { (q1, q0) };
    let offset = swap_offset(num_qubits, lo, hi);
    match (
        bit_at(num_qubits, state_index, lo),
        bit_at(num_qubits, state_index, hi),
    ) {
        (0, 1) => Some(state_index + offset),
        (1, 0) => Some(state_index - offset),
        _ => None,
    }
}

/// Iterator over the truth-table column of one qubit
///
/// A clone continues from the position it was taken at; [`column`] always
/// starts a fresh pass.
#[derive(Debug, Clone)]
pub struct TruthTableColumn {
    num_qubits: usize,
    qubit: usize,
    next: usize,
    end: usize,
}

impl Iterator for TruthTableColumn {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.next >= self.end {
            return None;
        }
        let bit = bit_at(self.num_qubits, self.next, self.qubit);
        self.next += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TruthTableColumn {}

/// Column of `qubit` across all `2^num_qubits` basis states
///
/// # Example
/// ```
/// use qreg_core::truth_table::column;
///
/// let q0: Vec<u8> = column(2, 0).collect();
/// let q1: Vec<u8> = column(2, 1).collect();
/// assert_eq!(q0, vec![0, 0, 1, 1]);
/// assert_eq!(q1, vec![0, 1, 0, 1]);
/// ```
pub fn column(num_qubits: usize, qubit: usize) -> TruthTableColumn {
    assert!(
        qubit < num_qubits,
        "qubit {} out of range for {} qubits",
        qubit,
        num_qubits
    );
    TruthTableColumn {
        num_qubits,
        qubit,
        next: 0,
        end: 1usize << num_qubits,
    }
}

/// Basis indices whose bit at `qubit` equals `value`
pub fn indices_where(num_qubits: usize, qubit: usize, value: u8) -> impl Iterator<Item = usize> {
    column(num_qubits, qubit)
        .enumerate()
        .filter(move |&(_, bit)| bit == value)
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference bit extraction through the binary string
    fn bit_via_string(num_qubits: usize, index: usize, qubit: usize) -> u8 {
        let text = format!("{:0width$b}", index, width = num_qubits);
        text.as_bytes()[qubit] - b'0'
    }

    #[test]
    fn test_bit_at_matches_binary_expansion() {
        for n in 1..=5 {
            for index in 0..(1 << n) {
                for q in 0..n {
                    assert_eq!(
                        bit_at(n, index, q),
                        bit_via_string(n, index, q),
                        "n={} index={} q={}",
                        n,
                        index,
                        q
                    );
                }
            }
        }
    }

    #[test]
    fn test_column_three_qubits() {
        let columns: Vec<Vec<u8>> = (0..3).map(|q| column(3, q).collect()).collect();
        assert_eq!(columns[0], vec![0, 0, 0, 0, 1, 1, 1, 1]);
        assert_eq!(columns[1], vec![0, 0, 1, 1, 0, 0, 1, 1]);
        assert_eq!(columns[2], vec![0, 1, 0, 1, 0, 1, 0, 1]);
    }

    #[test]
    fn test_column_is_restartable() {
        let mut col = column(2, 1);
        assert_eq!(col.len(), 4);
        col.next();
        let rest: Vec<u8> = col.clone().collect();
        assert_eq!(rest, vec![1, 0, 1]);
        assert_eq!(column(2, 1).collect::<Vec<_>>(), vec![0, 1, 0, 1]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_column_out_of_range() {
        let _ = column(2, 2);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_bit_at_out_of_range() {
        let _ = bit_at(2, 3, 2);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_qubit_mask_out_of_range() {
        let _ = qubit_mask(3, 5);
    }

    #[test]
    fn test_qubit_mask() {
        assert_eq!(qubit_mask(3, 0), 4);
        assert_eq!(qubit_mask(3, 1), 2);
        assert_eq!(qubit_mask(3, 2), 1);
    }

    #[test]
    fn test_flip_partner_exhaustive() {
        for n in 2..=5 {
            for index in 0..(1usize << n) {
                for target in 0..n {
                    let partner = flip_partner(n, index, target);
                    for q in 0..n {
                        let expected = if q == target {
                            1 - bit_at(n, index, q)
                        } else {
                            bit_at(n, index, q)
                        };
                        assert_eq!(bit_at(n, partner, q), expected);
                    }
                    if bit_at(n, index, target) == 0 {
                        assert_eq!(partner, index + (1 << (n - 1 - target)));
                    }
                    assert_eq!(flip_partner(n, partner, target), index);
                }
            }
        }
    }

    #[test]
    fn test_swap_offset_closed_form() {
        for n in 2..=5usize {
            for q0 in 0..n {
                for q1 in (q0 + 1)..n {
                    let closed = 2f64.powi(n as i32 - 1)
                        * (2f64.powi(-(q0 as i32)) - 2f64.powi(-(q1 as i32)));
                    assert_eq!(swap_offset(n, q0, q1), closed as usize);
                }
            }
        }
    }

    #[test]
    fn test_swap_partner_exhaustive() {
        for n in 2..=5 {
            for index in 0..(1usize << n) {
                for q0 in 0..n {
                    for q1 in 0..n {
                        let partner = swap_partner(n, index, q0, q1);
                        let b0 = bit_at(n, index, q0);
                        let b1 = bit_at(n, index, q1);

                        if q0 == q1 || b0 == b1 {
                            assert_eq!(partner, None);
                            continue;
                        }

                        let p = partner.expect("differing bits must have a partner");
                        assert!(p < (1 << n));
                        assert_eq!(bit_at(n, p, q0), b1);
                        assert_eq!(bit_at(n, p, q1), b0);
                        for q in (0..n).filter(|&q| q != q0 && q != q1) {
                            assert_eq!(bit_at(n, p, q), bit_at(n, index, q));
                        }
                        assert_eq!(swap_partner(n, p, q0, q1), Some(index));
                    }
                }
            }
        }
    }

    #[test]
    fn test_indices_where() {
        let ones: Vec<usize> = indices_where(3, 1, 1).collect();
        assert_eq!(ones, vec![2, 3, 6, 7]);
        let zeros: Vec<usize> = indices_where(3, 0, 0).collect();
        assert_eq!(zeros, vec![0, 1, 2, 3]);
    }
}
