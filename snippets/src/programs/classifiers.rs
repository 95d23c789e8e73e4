//! Programs that sort their input into a labelled class.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::core::calendar::{MonthKind, classify_month, february_days};
use crate::core::primality::PrimalityStrategy;
use crate::core::triangle::classify;
use crate::io::input::InputSession;

pub fn triangle_categorizer<R: BufRead, W: Write>(
    session: &mut InputSession<R, W>,
) -> Result<()> {
    let a = session.read_int("Enter the three side lengths (integers): \n")?;
    let b = session.read_int("")?;
    let c = session.read_int("")?;

    let triangle = classify(a, b, c);
    debug!(a, b, c, valid = triangle.valid, "triangle classified");
    writeln!(session.out(), "The triangle is {}", triangle.kind)?;
    Ok(())
}

/// Month length; the year is only asked for February.
pub fn month_duration<R: BufRead, W: Write>(session: &mut InputSession<R, W>) -> Result<()> {
    let month = session.read_int("Enter the month: \n")?;
    match classify_month(month) {
        MonthKind::ThirtyDays => writeln!(session.out(), "30 days")?,
        MonthKind::ThirtyOneDays => writeln!(session.out(), "31 days")?,
        MonthKind::February => {
            let year = session.read_int("Enter the year: \n")?;
            writeln!(session.out(), "{} days", february_days(year))?;
        }
        MonthKind::NotAMonth => writeln!(session.out(), "Not a month")?,
    }
    Ok(())
}

/// Primality of a 32-bit integer; wider input is treated as malformed so that
/// trial division stays bounded.
pub fn prime_numbers<R: BufRead, W: Write>(
    session: &mut InputSession<R, W>,
    strategy: PrimalityStrategy,
) -> Result<()> {
    let n: i32 = session.read("Enter a number: ")?;
    if strategy.is_prime(i64::from(n)) {
        writeln!(session.out(), "The number is prime")?;
    } else {
        writeln!(session.out(), "The number is not prime")?;
    }
    Ok(())
}
