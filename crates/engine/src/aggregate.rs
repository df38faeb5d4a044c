use crate::counts::ModOps;
use crate::predicate::Verdict;

/// Sum the operation counts `predicate` reports for every candidate in
/// `lo..=hi`, in ascending order.
///
/// Returns zero without calling `predicate` when `lo > hi`. The verdicts'
/// primality flags are ignored.
pub fn count_mod_ops<F>(predicate: F, lo: i32, hi: i32) -> ModOps
where
    F: Fn(i32) -> Verdict,
{
    (lo..=hi).map(|n| predicate(n).mod_ops).sum()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::predicate::{is_prime_half, is_prime_sqrt};

    #[test]
    fn test_empty_range_never_calls_predicate() {
        let calls = Cell::new(0);
        let total = count_mod_ops(
            |n| {
                calls.set(calls.get() + 1);
                is_prime_half(n)
            },
            10,
            5,
        );
        assert_eq!(total, ModOps::zero());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_visits_each_candidate_once_in_order() {
        let seen = std::cell::RefCell::new(Vec::new());
        count_mod_ops(
            |n| {
                seen.borrow_mut().push(n);
                is_prime_sqrt(n)
            },
            -2,
            3,
        );
        assert_eq!(seen.into_inner(), vec![-2, -1, 0, 1, 2, 3]);
    }

    #[test]
    fn test_upper_bound_at_i32_max() {
        let total = count_mod_ops(|_| Verdict::default(), i32::MAX - 2, i32::MAX);
        assert!(total.is_zero());
    }
}
