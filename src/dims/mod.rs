//! Vectorized entry points: map every dimension to its nearest smooth value.
//!
//! Each element is searched independently; there is no cross-element state,
//! so batch results equal the element-wise scalar results in input order.

use std::fmt::Display;

use ndarray::{Array1, ArrayBase, Data, Ix1};
use num::PrimInt;

use crate::search::{nearest_smooth, nearest_smooth_with, BoundaryWarning};
use crate::smooth::FactorSet;
use crate::{FftDimsError, SearchDirection};

#[cfg(test)]
mod tests;

/// Nearest smooth dimension for a single size.
///
/// ```
/// use fft_dims::{closest_optimal, FactorSet, SearchDirection};
///
/// let factors = FactorSet::default();
/// assert_eq!(closest_optimal(1, SearchDirection::Increasing, &factors), 2);
/// ```
#[must_use]
pub fn closest_optimal(n: usize, direction: SearchDirection, factors: &FactorSet) -> usize {
    nearest_smooth(n, direction, factors)
}

/// Nearest smooth size along every axis of a shape.
pub fn closest_optimal_dims<const N: usize>(
    dims: &[usize; N],
    direction: SearchDirection,
    factors: &FactorSet,
) -> [usize; N] {
    std::array::from_fn(|i| nearest_smooth(dims[i], direction, factors))
}

/// Maps 1-D arrays of dimensions to their nearest smooth values.
pub trait ClosestOptimalExt<T> {
    /// Replaces every element with its nearest smooth dimension, preserving
    /// order and length.
    ///
    /// Fails on the first element that is negative or does not fit `usize`,
    /// and on any result that does not fit back into `T`; no partial output
    /// is produced. Boundary fallbacks are reported through the `log`
    /// facade and do not abort the batch.
    fn closest_optimal(
        &self,
        direction: SearchDirection,
        factors: &FactorSet,
    ) -> Result<Array1<T>, FftDimsError>;

    /// Like [`closest_optimal`](Self::closest_optimal), with boundary
    /// warnings handed to `on_warning` once per clamped element, in input
    /// order.
    fn closest_optimal_with<F>(
        &self,
        direction: SearchDirection,
        factors: &FactorSet,
        on_warning: F,
    ) -> Result<Array1<T>, FftDimsError>
    where
        F: FnMut(BoundaryWarning);
}

impl<T, S> ClosestOptimalExt<T> for ArrayBase<S, Ix1>
where
    T: PrimInt + Display,
    S: Data<Elem = T>,
{
    fn closest_optimal(
        &self,
        direction: SearchDirection,
        factors: &FactorSet,
    ) -> Result<Array1<T>, FftDimsError> {
        self.closest_optimal_with(direction, factors, |warning| log::warn!("{warning}"))
    }

    fn closest_optimal_with<F>(
        &self,
        direction: SearchDirection,
        factors: &FactorSet,
        mut on_warning: F,
    ) -> Result<Array1<T>, FftDimsError>
    where
        F: FnMut(BoundaryWarning),
    {
        let mut out = Vec::with_capacity(self.len());
        for &value in self.iter() {
            let n = value
                .to_usize()
                .ok_or_else(|| FftDimsError::InvalidDimension {
                    value: value.to_string(),
                })?;
            let found = nearest_smooth_with(n, direction, factors, &mut on_warning);
            let found =
                T::from(found).ok_or(FftDimsError::ResultOutOfRange { value: found })?;
            out.push(found);
        }
        Ok(Array1::from_vec(out))
    }
}
