//! Primality by trial division against already-known primes.

use crate::list::Number;

/// Smallest `r` with `r * r >= n`.
pub fn ceil_sqrt(n: Number) -> Number {
    let root = n.isqrt();
    if root * root < n { root + 1 } else { root }
}

/// Decide whether `candidate` is prime.
///
/// `known_primes` must be ascending and hold every prime up to
/// `ceil_sqrt(candidate)`. The contract is not checked; a short list gives a
/// wrong answer rather than an error. Values up to 5 are answered without
/// looking at `known_primes`.
pub fn is_prime(candidate: Number, known_primes: &[Number]) -> bool {
    if candidate <= 5 {
        return !(candidate < 2 || candidate == 4);
    }

    let limit = ceil_sqrt(candidate);
    !known_primes
        .iter()
        .take_while(|&&prime| prime <= limit)
        .any(|&prime| candidate % prime == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_PRIMES: [Number; 10] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];

    #[test]
    fn test_small_values_ignore_known_primes() {
        let answers: Vec<bool> = (0..=5).map(|n| is_prime(n, &[])).collect();
        assert_eq!(answers, vec![false, false, true, true, false, true]);
    }

    #[test]
    fn test_composites_above_five() {
        for n in [6, 9, 25, 49, 91, 841] {
            assert!(!is_prime(n, &SMALL_PRIMES), "{n} should be composite");
        }
    }

    #[test]
    fn test_primes_above_five() {
        for n in [7, 11, 97, 101, 839] {
            assert!(is_prime(n, &SMALL_PRIMES), "{n} should be prime");
        }
    }

    #[test]
    fn test_perfect_square_of_largest_divisor() {
        // 29 * 29; the scan must include a prime equal to the root.
        assert!(!is_prime(841, &SMALL_PRIMES[..]));
    }

    #[test]
    fn test_short_known_list_is_a_caller_error() {
        // 49 needs 7, which is missing here.
        assert!(is_prime(49, &[2, 3, 5]));
    }

    #[test]
    fn test_ceil_sqrt() {
        assert_eq!(ceil_sqrt(0), 0);
        assert_eq!(ceil_sqrt(1), 1);
        assert_eq!(ceil_sqrt(2), 2);
        assert_eq!(ceil_sqrt(16), 4);
        assert_eq!(ceil_sqrt(17), 5);
        assert_eq!(ceil_sqrt(u64::MAX), 1 << 32);
    }
}
