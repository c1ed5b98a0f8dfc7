//! Trial-division factorization, the collaborator behind [`is_smooth`].
//!
//! [`is_smooth`]: crate::is_smooth

/// Distinct prime factors of `n`, in ascending order.
///
/// `0` and `1` have no prime factors and yield an empty vector. Multiplicity
/// is not reported; the smoothness predicate only cares which primes appear.
///
/// # Examples
///
/// ```
/// use fft_dims::distinct_prime_factors;
///
/// assert_eq!(distinct_prime_factors(1), vec![]);
/// assert_eq!(distinct_prime_factors(12), vec![2, 3]);
/// assert_eq!(distinct_prime_factors(97), vec![97]);
/// ```
#[must_use]
pub fn distinct_prime_factors(mut n: usize) -> Vec<usize> {
    let mut factors = Vec::new();
    if n < 2 {
        return factors;
    }

    if n % 2 == 0 {
        factors.push(2);
        while n % 2 == 0 {
            n /= 2;
        }
    }

    let mut d = 3;
    // d <= n / d instead of d * d <= n so the square cannot overflow
    while d <= n / d {
        if n % d == 0 {
            factors.push(d);
            while n % d == 0 {
                n /= d;
            }
        }
        d += 2;
    }

    if n > 1 {
        factors.push(n);
    }

    factors
}
