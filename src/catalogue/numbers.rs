//! Number katas: primality, digit sums, Fibonacci and the inevitable FizzBuzz.

use std::fmt::{self, Display, Formatter};
use crate::errors::{KataError, KataResult};


/// Trial division by 2, 3 and then by every `6k ± 1` up to `√n`
pub fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5_u64;
    while i.saturating_mul(i) <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Sums the decimal digits of `n` over and over, until a single digit remains -- `38` → `11` → `2`
pub fn digital_root(mut n: u64) -> u64 {
    let sum_digits = |mut n: u64| {
        let mut sum = 0;
        while n > 0 {
            sum += n % 10;
            n /= 10;
        }
        sum
    };
    while n > 9 {
        n = sum_digits(n);
    }
    n
}

/// Greatest `n` whose Fibonacci number fits in a `u128`
pub const MAX_FIBONACCI_N: usize = 186;

/// The `n`th Fibonacci number -- `fib(0) = 0`, `fib(1) = 1` -- computed bottom-up on a table, without recursion.\
/// Results past `u128::MAX` (`n > 186`) are refused with [KataError::InvalidArgument], before anything is allocated.
pub fn fibonacci(n: usize) -> KataResult<u128> {
    if n > MAX_FIBONACCI_N {
        return Err(KataError::invalid_argument("n", format!("fib({n}) doesn't fit in 128 bits")));
    }
    let mut table: Vec<u128> = Vec::with_capacity(n + 2);
    table.push(0);
    table.push(1);
    for i in 2..=n {
        let next = table[i - 1].checked_add(table[i - 2])
            .ok_or_else(|| KataError::invalid_argument("n", format!("fib({n}) doesn't fit in 128 bits")))?;
        table.push(next);
    }
    Ok(table[n])
}

/// An element of the FizzBuzz sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FizzBuzz {
    Number(u32),
    Fizz,
    Buzz,
    FizzBuzz,
}

impl Display for FizzBuzz {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Fizz      => f.write_str("Fizz"),
            Self::Buzz      => f.write_str("Buzz"),
            Self::FizzBuzz  => f.write_str("FizzBuzz"),
        }
    }
}

/// `1..=n`, with multiples of 3 replaced by `Fizz`, of 5 by `Buzz` and of both by `FizzBuzz`
pub fn fizz_buzz(n: u32) -> Vec<FizzBuzz> {
    (1..=n)
        .map(|i| match (i % 3 == 0, i % 5 == 0) {
            (true,  true)  => FizzBuzz::FizzBuzz,
            (true,  false) => FizzBuzz::Fizz,
            (false, true)  => FizzBuzz::Buzz,
            (false, false) => FizzBuzz::Number(i),
        })
        .collect()
}


#[cfg(test)]
mod tests {

    //! Unit tests for [numbers](super) module

    use super::*;

    #[test]
    fn primes() {
        let primes_below_50: Vec<u64> = (0..50).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes_below_50, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]);
        assert!(is_prime(7_919));
        assert!(!is_prime(7_917));
        assert!(is_prime(1_000_000_007));
        assert!(!is_prime(1_000_000_007 * 3));
        assert!(!is_prime(u64::MAX));
    }

    #[test]
    fn digital_roots() {
        assert_eq!(digital_root(0), 0);
        assert_eq!(digital_root(7), 7);
        assert_eq!(digital_root(38), 2);
        assert_eq!(digital_root(493_193), 2);
        assert_eq!(digital_root(u64::MAX), 6);
    }

    #[test]
    fn fibonacci_numbers() {
        let first: Vec<u128> = (0..10).map(|n| fibonacci(n).expect("small n")).collect();
        assert_eq!(first, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
        assert_eq!(fibonacci(100), Ok(354_224_848_179_261_915_075));
        assert_eq!(fibonacci(186), Ok(332_825_110_087_067_562_321_196_029_789_634_457_848));
        assert!(matches!(fibonacci(187), Err(KataError::InvalidArgument { name: "n", .. })));
    }

    #[test]
    fn huge_fibonacci_indexes_are_refused_without_allocating() {
        for n in [MAX_FIBONACCI_N + 1, 1 << 40, usize::MAX] {
            assert!(matches!(fibonacci(n), Err(KataError::InvalidArgument { name: "n", .. })), "fib({n}) should be refused");
        }
    }

    #[test]
    fn fizz_buzz_sequence() {
        let rendered: Vec<String> = fizz_buzz(15).iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["1", "2", "Fizz", "4", "Buzz", "Fizz", "7", "8", "Fizz", "Buzz", "11", "Fizz", "13", "14", "FizzBuzz"]);
        assert_eq!(fizz_buzz(100).len(), 100);
        assert!(fizz_buzz(0).is_empty());
    }
}
