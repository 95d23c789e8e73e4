//! Month lengths and leap years (Gregorian rules).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthKind {
    ThirtyDays,
    ThirtyOneDays,
    /// Length depends on the year.
    February,
    NotAMonth,
}

/// Classify a month number. Out-of-range values are not an error.
pub fn classify_month(month: i64) -> MonthKind {
    match month {
        4 | 6 | 9 | 11 => MonthKind::ThirtyDays,
        2 => MonthKind::February,
        1 | 3 | 5 | 7 | 8 | 10 | 12 => MonthKind::ThirtyOneDays,
        _ => MonthKind::NotAMonth,
    }
}

pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn february_days(year: i64) -> u8 {
    if is_leap_year(year) { 29 } else { 28 }
}
