//! Basic combinatorics helpers shared by the triangle builder and its tests.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Binomial coefficient `C(n, k)` via the multiplicative formula.
///
/// Arbitrary precision, so there is no row-count ceiling. Each intermediate
/// product is divisible by `i + 1`, so the division is exact.
pub fn binomial(n: u32, k: u32) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    if k == 0 || k == n {
        return BigUint::one();
    }
    // C(n, k) == C(n, n - k); iterate the shorter side.
    let k = k.min(n - k);
    let mut res = BigUint::one();
    for i in 0..k {
        res = res * (n - i) / (i + 1);
    }
    res
}

/// `n!` as an arbitrary-precision integer.
pub fn factorial(n: u32) -> BigUint {
    (1..=n).fold(BigUint::one(), |acc, i| acc * i)
}
