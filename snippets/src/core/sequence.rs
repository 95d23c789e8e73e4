//! Sequences built from repeated input or recurrence.

use tracing::warn;

/// The first `count` Fibonacci terms, starting `0, 1`.
///
/// Stops early if the next term would overflow `u128`.
pub fn fibonacci(count: usize) -> Vec<u128> {
    let mut terms = Vec::with_capacity(count.min(187));
    let (mut current, mut next) = (0u128, 1u128);
    for _ in 0..count {
        terms.push(current);
        match current.checked_add(next) {
            Some(sum) => {
                current = next;
                next = sum;
            }
            None => {
                if terms.len() < count {
                    terms.push(next);
                }
                if terms.len() < count {
                    warn!(requested = count, produced = terms.len(), "fibonacci overflow");
                }
                break;
            }
        }
    }
    terms
}

/// Running maximum and minimum of observed values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Extrema {
    max: Option<i64>,
    min: Option<i64>,
}

impl Extrema {
    pub fn observe(&mut self, value: i64) {
        self.max = Some(self.max.map_or(value, |max| max.max(value)));
        self.min = Some(self.min.map_or(value, |min| min.min(value)));
    }

    pub fn max(&self) -> Option<i64> {
        self.max
    }

    pub fn min(&self) -> Option<i64> {
        self.min
    }
}
