//! Primality by trial division up to the integer square root.

use num_integer::Roots;

/// Return true iff `n` is prime.
///
/// n <= 1 is not prime; otherwise every candidate divisor in
/// 2..=isqrt(n) is tried. Deterministic, O(sqrt n).
///
/// # Example
/// ```
/// assert!(practica_core::is_prime(17));
/// assert!(!practica_core::is_prime(9));
/// ```
#[must_use]
pub fn is_prime(n: u64) -> bool {
    n > 1 && smallest_factor(n).is_none()
}

/// Smallest divisor of `n` in 2..=isqrt(n), or None.
///
/// None means `n` has no non-trivial factor in range: primes, 0, and 1
/// all return None. Used by the CLI to report why a number is composite.
#[must_use]
pub fn smallest_factor(n: u64) -> Option<u64> {
    (2..=n.sqrt()).find(|d| n % d == 0)
}
