//! Fraction simplification by descending common-divisor scan.

/// Result of [`simplify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    pub numerator: i64,
    pub denominator: i64,
    /// True if at least one common divisor was divided out.
    pub simplified: bool,
}

impl Fraction {
    /// A fraction whose denominator reduced to 1 is really a whole number.
    pub fn is_apparent(&self) -> bool {
        self.denominator == 1
    }
}

/// Scan `i` from `min(n, d)` down to 2 and divide both terms by every `i`
/// that divides both at that point of the scan.
///
/// The bound is fixed before the scan starts. Because the first hit is the
/// largest common divisor, the pair is coprime afterwards and later steps of
/// the scan find nothing. `denominator` must be non-zero.
pub fn simplify(numerator: i64, denominator: i64) -> Fraction {
    let mut n = numerator;
    let mut d = denominator;
    let mut simplified = false;
    let bound = d.min(n);

    for i in (2..=bound).rev() {
        if n % i == 0 && d % i == 0 {
            simplified = true;
            n /= i;
            d /= i;
        }
    }

    Fraction {
        numerator: n,
        denominator: d,
        simplified,
    }
}
