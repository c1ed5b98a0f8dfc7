//! Monotone walk from a starting dimension to the nearest smooth one.

use std::fmt;

use crate::smooth::{is_smooth, FactorSet};
use crate::{FftDimsError, SearchDirection};


/// Emitted when a decreasing search runs out of candidates above the
/// smallest allowed factor and clamps to it instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryWarning {
    /// The dimension the caller asked for.
    pub requested: usize,
    /// The value returned in its place, the minimum of the factor set.
    pub clamped_to: usize,
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no smooth dimension at or below {}, decreasing search cannot proceed; \
             falling back to smallest allowed factor {}",
            self.requested, self.clamped_to
        )
    }
}

/// Nearest smooth value to `n` in the given direction.
///
/// Increasing searches always terminate: powers of any allowed factor are
/// smooth and occur arbitrarily far up. Decreasing searches stop at the
/// smallest allowed factor; if no smooth value exists in that range, the
/// minimum of the set is returned and a warning is logged. That fallback is
/// not an error, the result is still a valid transform length.
#[must_use]
pub fn nearest_smooth(n: usize, direction: SearchDirection, factors: &FactorSet) -> usize {
    nearest_smooth_with(n, direction, factors, |warning| log::warn!("{warning}"))
}

/// Like [`nearest_smooth`], with boundary warnings handed to `on_warning`
/// instead of the `log` facade.
pub fn nearest_smooth_with<F>(
    n: usize,
    direction: SearchDirection,
    factors: &FactorSet,
    mut on_warning: F,
) -> usize
where
    F: FnMut(BoundaryWarning),
{
    match direction {
        SearchDirection::Increasing => {
            let mut current = n;
            while !is_smooth(current, factors) {
                current += 1;
            }
            current
        }
        SearchDirection::Decreasing => {
            let floor = factors.min();
            let mut current = n;
            while current >= floor {
                if is_smooth(current, factors) {
                    return current;
                }
                current -= 1;
            }
            on_warning(BoundaryWarning {
                requested: n,
                clamped_to: floor,
            });
            floor
        }
    }
}

/// Step-limited rendition of [`nearest_smooth`].
///
/// Gives up with [`FftDimsError::SearchLimitExceeded`] after moving
/// `max_steps` away from `n` without finding a smooth value. Opt-in guard
/// for callers that cannot tolerate a long walk on unusual factor sets; the
/// unbounded entry points keep the default behavior.
pub fn nearest_smooth_bounded(
    n: usize,
    direction: SearchDirection,
    factors: &FactorSet,
    max_steps: usize,
) -> Result<usize, FftDimsError> {
    match direction {
        SearchDirection::Increasing => {
            let mut current = n;
            loop {
                if is_smooth(current, factors) {
                    return Ok(current);
                }
                if current - n == max_steps {
                    return Err(FftDimsError::SearchLimitExceeded {
                        start: n,
                        max_steps,
                    });
                }
                current += 1;
            }
        }
        SearchDirection::Decreasing => {
            let floor = factors.min();
            let mut current = n;
            while current >= floor {
                if is_smooth(current, factors) {
                    return Ok(current);
                }
                if n - current == max_steps {
                    return Err(FftDimsError::SearchLimitExceeded {
                        start: n,
                        max_steps,
                    });
                }
                current -= 1;
            }
            let warning = BoundaryWarning {
                requested: n,
                clamped_to: floor,
            };
            log::warn!("{warning}");
            Ok(floor)
        }
    }
}
