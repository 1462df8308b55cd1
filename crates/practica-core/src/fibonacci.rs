//! Iterative Fibonacci using the standard additive recurrence.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::constants::{FIB_TABLE, MAX_FIB_U64};

/// Compute F(n) with F(0) = 0, F(1) = 1.
///
/// O(n) iteration over a rolling pair of terms; values up to F(93) come
/// from the precomputed u64 table. `BigUint` makes the result exact for
/// any n, there is no overflow to document.
///
/// # Example
/// ```
/// assert_eq!(practica_core::fibonacci(10).to_string(), "55");
/// assert_eq!(practica_core::fibonacci(0).to_string(), "0");
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> BigUint {
    // Fast path for small n
    if n <= MAX_FIB_U64 {
        return BigUint::from(FIB_TABLE[n as usize]);
    }

    let mut a = BigUint::zero();
    let mut b = BigUint::one();
    for _ in 0..n {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }
    a
}
