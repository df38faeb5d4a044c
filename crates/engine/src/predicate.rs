//! Trial-division primality predicates.
//!
//! Both predicates test odd divisors starting at 3 and stop at the first one
//! that divides the candidate. They differ only in the upper bound of the
//! search. Neither special-cases even candidates, so powers of two pass as
//! prime.

use serde::{Deserialize, Serialize};

use crate::counts::ModOps;

/// Result of a single primality test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Verdict {
    pub is_prime: bool,
    /// Divisor-found events recorded during the call (0 or 1).
    pub mod_ops: ModOps,
}

impl Verdict {
    #[inline]
    const fn prime() -> Self {
        Self {
            is_prime: true,
            mod_ops: ModOps::zero(),
        }
    }

    #[inline]
    const fn composite() -> Self {
        Self {
            is_prime: false,
            mod_ops: ModOps::new(1),
        }
    }
}

/// A primality predicate usable by [`crate::aggregate::count_mod_ops`].
pub type PrimeFn = fn(i32) -> Verdict;

/// Tests odd divisors `3, 5, 7, ...` while `d <= n / 2`.
///
/// `n / 2` truncates toward zero, so `4` never enters the loop and is
/// reported prime.
#[must_use]
pub fn is_prime_half(n: i32) -> Verdict {
    if n == 2 {
        return Verdict::prime();
    }
    let n = i64::from(n);
    let bound = n / 2;
    let mut d: i64 = 3;
    while d <= bound {
        if n % d == 0 {
            return Verdict::composite();
        }
        d += 2;
    }
    Verdict::prime()
}

/// Tests odd divisors `3, 5, 7, ...` while `d < sqrt(n)`.
///
/// The bound is the floating-point square root compared with strict
/// less-than, so the exact root of a perfect square is never tried and
/// `9`, `25`, `49` report prime. Negative `n` gives `NaN` and the loop
/// body never runs.
#[must_use]
pub fn is_prime_sqrt(n: i32) -> Verdict {
    if n == 2 {
        return Verdict::prime();
    }
    // d stays below 46_343 for any i32 candidate
    let root = f64::from(n).sqrt();
    let mut d: i32 = 3;
    while f64::from(d) < root {
        if n % d == 0 {
            return Verdict::composite();
        }
        d += 2;
    }
    Verdict::prime()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_is_prime_without_ops() {
        for f in [is_prime_half as PrimeFn, is_prime_sqrt] {
            let v = f(2);
            assert!(v.is_prime);
            assert!(v.mod_ops.is_zero());
        }
    }

    #[test]
    fn test_half_bound_is_inclusive() {
        // 6 / 2 == 3, so d = 3 is tested
        assert!(!is_prime_half(6).is_prime);
        // 10 / 2 == 5, so d = 5 is tested
        assert!(!is_prime_half(10).is_prime);
        assert!(is_prime_half(4).is_prime);
    }

    #[test]
    fn test_sqrt_bound_is_strict() {
        assert!(is_prime_sqrt(9).is_prime);
        assert!(is_prime_sqrt(25).is_prime);
        assert!(!is_prime_sqrt(27).is_prime);
    }

    #[test]
    fn test_extreme_inputs_do_not_panic() {
        for n in [i32::MIN, i32::MIN + 1, -1, 0, 1, i32::MAX - 1] {
            let _ = is_prime_half(n);
            let _ = is_prime_sqrt(n);
        }
        // 2^31 - 1 is prime
        assert!(is_prime_sqrt(i32::MAX).is_prime);
    }

    #[test]
    fn test_sqrt_near_i32_max() {
        // 46337 is the largest prime whose square fits in an i32
        assert!(is_prime_sqrt(46_337 * 46_337).is_prime);
        assert!(!is_prime_half(46_337 * 46_337).is_prime);
        // 2 * 3 * 7 * 11 * 31 * 151 * 331
        assert!(!is_prime_sqrt(2_147_483_646).is_prime);
    }
}
