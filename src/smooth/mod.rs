//! Smoothness predicate: does a value factor entirely into allowed primes?

use crate::factorize::distinct_prime_factors;
use crate::FftDimsError;

/// Set of factors a smooth dimension may decompose into.
///
/// The default set {2, 3, 5, 7} matches the radices the cuFFT documentation
/// lists as fast paths; callers targeting other transform backends can
/// supply their own. The set is validated once at construction so searches
/// never observe an empty or zero-valued set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorSet {
    // sorted ascending, deduplicated, non-empty
    factors: Vec<usize>,
}

impl FactorSet {
    /// Builds a validated factor set. Duplicates are collapsed.
    ///
    /// # Errors
    ///
    /// [`FftDimsError::EmptyFactorSet`] if `factors` yields nothing,
    /// [`FftDimsError::InvalidFactor`] if any member is zero.
    pub fn new(factors: impl IntoIterator<Item = usize>) -> Result<Self, FftDimsError> {
        let mut factors: Vec<usize> = factors.into_iter().collect();
        if factors.contains(&0) {
            return Err(FftDimsError::InvalidFactor { factor: 0 });
        }
        factors.sort_unstable();
        factors.dedup();
        if factors.is_empty() {
            return Err(FftDimsError::EmptyFactorSet);
        }
        Ok(Self { factors })
    }

    /// Smallest member; the floor of a decreasing search.
    #[must_use]
    pub fn min(&self) -> usize {
        self.factors[0]
    }

    #[must_use]
    pub fn contains(&self, factor: usize) -> bool {
        self.factors.binary_search(&factor).is_ok()
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.factors.iter().copied()
    }
}

impl Default for FactorSet {
    /// The cuFFT radix set {2, 3, 5, 7}.
    fn default() -> Self {
        Self {
            factors: vec![2, 3, 5, 7],
        }
    }
}

/// Returns true iff every distinct prime factor of `n` belongs to `factors`.
///
/// `1` has no prime factors and is never smooth, whatever the set. That is
/// deliberate: a dimension of 1 is useless as a transform length, and it
/// keeps the decreasing search from stalling there.
#[must_use]
pub fn is_smooth(n: usize, factors: &FactorSet) -> bool {
    let primes = distinct_prime_factors(n);
    if primes.is_empty() {
        return false;
    }
    primes.iter().all(|&p| factors.contains(p))
}
