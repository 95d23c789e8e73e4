//! Three interchangeable primality tests.
//!
//! Each console program that checks primes uses one of these on purpose; they
//! are kept side by side rather than folded into one.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimalityStrategy {
    /// Look for a factor in `2..n`.
    TrialDivisionFull,
    /// Look for a factor in `2..=n/2`.
    TrialDivisionHalf,
    /// Count every divisor in `1..=n`; primes have exactly two.
    DivisorCount,
}

impl PrimalityStrategy {
    pub fn is_prime(self, n: i64) -> bool {
        match self {
            Self::TrialDivisionFull => trial_division_full(n),
            Self::TrialDivisionHalf => trial_division_half(n),
            Self::DivisorCount => divisor_count(n),
        }
    }
}

pub fn trial_division_full(n: i64) -> bool {
    n >= 2 && (2..n).all(|i| n % i != 0)
}

pub fn trial_division_half(n: i64) -> bool {
    n >= 2 && (2..=n / 2).all(|i| n % i != 0)
}

pub fn divisor_count(n: i64) -> bool {
    (1..=n).filter(|j| n % j == 0).count() == 2
}
