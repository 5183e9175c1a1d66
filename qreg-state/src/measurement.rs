//! Randomness and outcome selection for measurement
//!
//! Measurement draws from a uniform source in `[0, 1)` passed in as
//! `&mut dyn FnMut() -> f64`, so tests can substitute a fixed or seeded
//! sequence. This module provides:
//! - [`uniform_source`]: a seedable source backed by [`StdRng`]
//! - [`select_outcome`]: cumulative-distribution selection of a basis index
//! - [`SamplingResult`]: counts from repeated sampling without collapse

use crate::register::COLLAPSE_EPSILON;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// Uniform `[0, 1)` source backed by [`StdRng`]
///
/// `Some(seed)` gives a reproducible sequence, `None` seeds from the OS.
///
/// # Example
/// ```
/// use qreg_state::measurement::uniform_source;
///
/// let mut a = uniform_source(Some(7));
/// let mut b = uniform_source(Some(7));
/// assert_eq!(a(), b());
/// ```
pub fn uniform_source(seed: Option<u64>) -> impl FnMut() -> f64 {
    let mut rng = if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_entropy()
    };
    move || rng.gen::<f64>()
}

/// Uniform `[0, 1)` source backed by the thread-local generator
pub fn thread_source() -> impl FnMut() -> f64 {
    let mut rng = rand::thread_rng();
    move || rng.gen::<f64>()
}

/// Pick a basis index from a probability distribution
///
/// Accumulates `probabilities` in index order and returns the first index
/// whose cumulative probability reaches `random_value`. Indices whose
/// probability is below `1e-12` are never chosen, matching the threshold used
/// when a single qubit collapses. If rounding leaves the running sum short of
/// `random_value`, the last selectable index is returned.
///
/// # Panics
/// Panics if `probabilities` is empty
pub fn select_outcome(probabilities: &[f64], random_value: f64) -> usize {
    assert!(!probabilities.is_empty(), "cannot select from an empty distribution");

    let mut cumulative = 0.0;
    for (idx, &prob) in probabilities.iter().enumerate() {
        cumulative += prob;
        if prob >= COLLAPSE_EPSILON && random_value <= cumulative {
            return idx;
        }
    }
    probabilities
        .iter()
        .rposition(|&prob| prob >= COLLAPSE_EPSILON)
        .unwrap_or(probabilities.len() - 1)
}

/// Format a basis index as a bitstring, qubit 0 first
pub fn as_bitstring(outcome: usize, num_qubits: usize) -> String {
    format!("{:0width$b}", outcome, width = num_qubits)
}

/// Counts from multiple measurement shots
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingResult {
    /// Map from basis state index to count
    pub counts: HashMap<usize, usize>,

    /// Total number of shots
    pub shots: usize,
}

impl SamplingResult {
    /// Create an empty result for `shots` shots
    pub fn new(shots: usize) -> Self {
        Self {
            counts: HashMap::new(),
            shots,
        }
    }

    /// Record one outcome
    pub fn add_outcome(&mut self, outcome: usize) {
        *self.counts.entry(outcome).or_insert(0) += 1;
    }

    /// Count for a specific outcome
    pub fn get_count(&self, outcome: usize) -> usize {
        self.counts.get(&outcome).copied().unwrap_or(0)
    }

    /// Observed frequency of an outcome (count / shots)
    pub fn get_probability(&self, outcome: usize) -> f64 {
        if self.shots == 0 {
            return 0.0;
        }
        self.get_count(outcome) as f64 / self.shots as f64
    }

    /// Outcomes sorted by count, most frequent first; ties by index
    pub fn sorted_outcomes(&self) -> Vec<(usize, usize)> {
        let mut outcomes: Vec<_> = self.counts.iter().map(|(&k, &v)| (k, v)).collect();
        outcomes.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        outcomes
    }

    /// Most frequent outcome, if any shots were taken
    pub fn most_frequent(&self) -> Option<usize> {
        self.sorted_outcomes().first().map(|&(outcome, _)| outcome)
    }

    /// Counts keyed by bitstring, qubit 0 first
    pub fn to_bitstring_counts(&self, num_qubits: usize) -> HashMap<String, usize> {
        self.counts
            .iter()
            .map(|(&outcome, &count)| (as_bitstring(outcome, num_qubits), count))
            .collect()
    }
}

/// Draw `shots` independent outcomes from `probabilities`
pub(crate) fn sample_distribution(
    probabilities: &[f64],
    shots: usize,
    rng: &mut dyn FnMut() -> f64,
) -> SamplingResult {
    let mut result = SamplingResult::new(shots);
    if shots == 0 || probabilities.is_empty() {
        return result;
    }

    for _ in 0..shots {
        result.add_outcome(select_outcome(probabilities, rng()));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_select_outcome() {
        let probabilities = [0.25, 0.0, 0.5, 0.25];
        assert_eq!(select_outcome(&probabilities, 0.0), 0);
        assert_eq!(select_outcome(&probabilities, 0.25), 0);
        assert_eq!(select_outcome(&probabilities, 0.2501), 2);
        assert_eq!(select_outcome(&probabilities, 0.8), 3);
    }

    #[test]
    fn test_select_outcome_skips_zero_probability_prefix() {
        assert_eq!(select_outcome(&[0.0, 0.0, 0.0, 1.0], 0.0), 3);
    }

    #[test]
    fn test_select_outcome_skips_rounding_residue() {
        let probabilities = [1e-14, 0.0, 0.0, 1.0 - 1e-14];
        assert_eq!(select_outcome(&probabilities, 0.0), 3);
        assert_eq!(select_outcome(&probabilities, 1e-15), 3);
        // Fallback never lands on a residue entry either
        assert_eq!(select_outcome(&[0.6, 0.3999999, 1e-14], 0.99999999), 1);
    }

    #[test]
    fn test_select_outcome_rounding_fallback() {
        // Sum falls short of 1 by rounding; a draw above it lands on the last index
        let probabilities = [0.3, 0.3, 0.3999999];
        assert_eq!(select_outcome(&probabilities, 0.99999999), 2);
    }

    #[test]
    fn test_uniform_source_is_reproducible() {
        let mut a = uniform_source(Some(42));
        let mut b = uniform_source(Some(42));
        for _ in 0..16 {
            let x = a();
            assert!((0.0..1.0).contains(&x));
            assert_eq!(x, b());
        }
    }

    #[test]
    fn test_thread_source_range() {
        let mut rng = thread_source();
        for _ in 0..64 {
            assert!((0.0..1.0).contains(&rng()));
        }
    }

    #[test]
    fn test_sampling_result() {
        let mut result = SamplingResult::new(100);
        for _ in 0..60 {
            result.add_outcome(0);
        }
        for _ in 0..40 {
            result.add_outcome(3);
        }

        assert_eq!(result.get_count(0), 60);
        assert_eq!(result.get_count(3), 40);
        assert_eq!(result.get_count(1), 0);
        assert_relative_eq!(result.get_probability(3), 0.4);
        assert_eq!(result.sorted_outcomes(), vec![(0, 60), (3, 40)]);
        assert_eq!(result.most_frequent(), Some(0));

        let bitstrings = result.to_bitstring_counts(2);
        assert_eq!(bitstrings.get("00"), Some(&60));
        assert_eq!(bitstrings.get("11"), Some(&40));
    }

    #[test]
    fn test_sample_distribution_frequencies() {
        let probabilities = [0.36, 0.64, 0.0, 0.0];
        let mut rng = uniform_source(Some(7));
        let result = sample_distribution(&probabilities, 4000, &mut rng);

        assert_eq!(result.shots, 4000);
        assert_eq!(result.get_count(2) + result.get_count(3), 0);
        assert!((result.get_probability(0) - 0.36).abs() < 0.05);
        assert!((result.get_probability(1) - 0.64).abs() < 0.05);
    }

    #[test]
    fn test_sample_zero_shots() {
        let mut rng = || 0.5;
        let result = sample_distribution(&[1.0], 0, &mut rng);
        assert!(result.counts.is_empty());
        assert_eq!(result.get_probability(0), 0.0);
    }

    #[test]
    fn test_as_bitstring() {
        assert_eq!(as_bitstring(5, 3), "101");
        assert_eq!(as_bitstring(1, 4), "0001");
    }
}
