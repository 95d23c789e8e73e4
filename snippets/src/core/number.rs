//! Small number-theory checks and batch statistics over random draws.

/// Every positive divisor of `n` in ascending order. Empty for `n < 1`.
pub fn divisors(n: i64) -> Vec<i64> {
    (1..=n).filter(|i| n % i == 0).collect()
}

pub fn is_perfect_square(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let root = (n as f64).sqrt() as i64;
    (root.saturating_sub(1)..=root + 1).any(|r| r.checked_mul(r) == Some(n))
}

pub fn is_multiple_of(value: i64, factor: i64) -> bool {
    factor != 0 && value % factor == 0
}

/// Sum and count of a batch of draws, plus how many exceeded a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawStats {
    threshold: i64,
    count: u32,
    sum: i64,
    above: u32,
}

impl DrawStats {
    pub fn with_threshold(threshold: i64) -> Self {
        Self {
            threshold,
            count: 0,
            sum: 0,
            above: 0,
        }
    }

    pub fn record(&mut self, value: i64) {
        self.count += 1;
        self.sum += value;
        if value > self.threshold {
            self.above += 1;
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn above_threshold(&self) -> u32 {
        self.above
    }

    pub fn average(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum as f64 / f64::from(self.count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_divisors() {
        assert_eq!(divisors(12), vec![1, 2, 3, 4, 6, 12]);
        assert_eq!(divisors(13), vec![1, 13]);
        assert!(divisors(0).is_empty());
    }

    #[test]
    fn perfect_squares() {
        for n in [0, 1, 4, 9, 16, 25] {
            assert!(is_perfect_square(n), "{n}");
        }
        for n in [-4, 2, 3, 15, 26] {
            assert!(!is_perfect_square(n), "{n}");
        }
    }

    #[test]
    fn multiples() {
        assert!(is_multiple_of(0, 3));
        assert!(is_multiple_of(27, 3));
        assert!(!is_multiple_of(28, 3));
        assert!(!is_multiple_of(5, 0));
    }

    #[test]
    fn draw_stats_accumulate() {
        let mut stats = DrawStats::with_threshold(20);
        assert_eq!(stats.average(), None);
        for value in [5, 21, 30, 20] {
            stats.record(value);
        }
        assert_eq!(stats.count(), 4);
        assert_eq!(stats.above_threshold(), 2);
        assert_eq!(stats.average(), Some(19.0));
    }
}
