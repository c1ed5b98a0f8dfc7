//! Nearest smooth-size search for FFT-friendly array dimensions.
//!
//! Hardware FFT libraries only reach peak throughput when every transform
//! length factors into small primes (cuFFT documents the radices
//! {2, 3, 5, 7}). Given one or more array dimensions, this crate finds the
//! nearest integer whose prime factorization stays inside an allowed factor
//! set, so arrays can be padded or trimmed to efficient sizes before
//! transforming.
//!
//! ```
//! use fft_dims::{closest_optimal, FactorSet, SearchDirection};
//!
//! let factors = FactorSet::default();
//! assert_eq!(closest_optimal(100, SearchDirection::Increasing, &factors), 100);
//! assert_eq!(closest_optimal(101, SearchDirection::Increasing, &factors), 105);
//! ```

use thiserror::Error;

mod dims;
mod factorize;
mod search;
mod smooth;

pub use dims::{closest_optimal, closest_optimal_dims, ClosestOptimalExt};
pub use factorize::distinct_prime_factors;
pub use search::{nearest_smooth, nearest_smooth_bounded, nearest_smooth_with, BoundaryWarning};
pub use smooth::{is_smooth, FactorSet};

/// Direction in which [`nearest_smooth`] walks the integer line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    /// Walk upward from the starting value (pad the dimension).
    Increasing,
    /// Walk downward from the starting value (trim the dimension).
    Decreasing,
}

/// Errors surfaced by dimension search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FftDimsError {
    /// The allowed factor set was empty. No integer can satisfy an empty
    /// set, so an increasing search over it would never terminate.
    #[error("allowed factor set is empty")]
    EmptyFactorSet,
    /// The allowed factor set contained a member below 1.
    #[error("allowed factor set contains {factor}, members must be >= 1")]
    InvalidFactor { factor: usize },
    /// An input dimension was negative or too large for `usize`.
    #[error("dimension {value} is not representable as usize")]
    InvalidDimension { value: String },
    /// A search result did not fit back into the caller's element type.
    #[error("result {value} does not fit the input element type")]
    ResultOutOfRange { value: usize },
    /// A bounded search exhausted its step budget.
    #[error("no smooth value within {max_steps} steps of {start}")]
    SearchLimitExceeded { start: usize, max_steps: usize },
}
