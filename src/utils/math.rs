//! Integer helpers for key-length inference.
//!
//! Provides the Euclidean GCD, its reduction over a list, and divisor
//! enumeration within a bounded range.

/// Greatest common divisor of two integers (Euclidean algorithm).
///
/// `gcd(0, n) == n`, so zero acts as the identity of the reduction.
pub fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// GCD of every value in `values`, folded left to right.
///
/// # Returns
/// `None` for an empty slice; otherwise the aggregate GCD.
///
/// # Examples
///
/// ```
/// use classicrypt::utils::math::gcd_all;
///
/// assert_eq!(gcd_all(&[12, 18, 30]), Some(6));
/// assert_eq!(gcd_all(&[7]), Some(7));
/// assert_eq!(gcd_all(&[]), None);
/// ```
pub fn gcd_all(values: &[usize]) -> Option<usize> {
    let (&first, rest) = values.split_first()?;
    Some(rest.iter().fold(first, |acc, &v| gcd(acc, v)))
}

/// Divisors `d` of `n` with `min <= d <= max`, ascending.
///
/// # Parameters
/// - `n`: Value to factor. Zero has no divisors here.
/// - `min`: Inclusive lower bound.
/// - `max`: Inclusive upper bound, additionally clamped to `n`.
pub fn divisors_in_range(n: usize, min: usize, max: usize) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }
    let upper = max.min(n);
    (min.max(1)..=upper).filter(|d| n % d == 0).collect()
}
