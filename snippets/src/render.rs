//! Number formatting for program reports.
//!
//! Floating-point results are printed the way a default-configured output
//! stream prints them: six significant digits, trailing zeros dropped, and
//! scientific notation for very large or very small magnitudes.

/// Significant digits used by [`general`].
pub const DEFAULT_PRECISION: usize = 6;

/// Format with [`DEFAULT_PRECISION`] significant digits.
pub fn general(value: f64) -> String {
    format_general(value, DEFAULT_PRECISION)
}

/// `%g`-style formatting with `precision` significant digits.
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let precision = precision.max(1);

    // Exponent after rounding to `precision` digits, e.g. 99999.95 -> 1e5.
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn strip_trailing_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_have_no_decimal_point() {
        assert_eq!(general(2.0), "2");
        assert_eq!(general(-1.0), "-1");
        assert_eq!(general(0.0), "0");
        assert_eq!(general(105.0), "105");
    }

    #[test]
    fn keeps_six_significant_digits() {
        assert_eq!(general(22.857142857), "22.8571");
        assert_eq!(general(2.00607), "2.00607");
        assert_eq!(general(0.5), "0.5");
        assert_eq!(general(17.75), "17.75");
    }

    #[test]
    fn switches_to_scientific() {
        assert_eq!(general(1_234_567.0), "1.23457e+06");
        assert_eq!(general(0.00001234), "1.234e-05");
        assert_eq!(general(999_999.7), "1e+06");
    }

    #[test]
    fn small_but_fixed() {
        assert_eq!(general(0.0001234), "0.0001234");
    }

    #[test]
    fn custom_precision() {
        assert_eq!(format_general(1.23456, 3), "1.23");
        assert_eq!(format_general(123.0, 2), "1.2e+02");
    }

    #[test]
    fn non_finite() {
        assert_eq!(general(f64::NAN), "nan");
        assert_eq!(general(f64::INFINITY), "inf");
        assert_eq!(general(f64::NEG_INFINITY), "-inf");
    }
}
