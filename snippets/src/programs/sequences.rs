//! Programs that loop over a user-chosen number of items.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::core::sequence::{Extrema, fibonacci as fibonacci_terms};
use crate::io::input::InputSession;

pub fn fibonacci<R: BufRead, W: Write>(session: &mut InputSession<R, W>) -> Result<()> {
    let count = session.read_int("Enter the number of terms for the Fibonacci sequence: ")?;
    let count = usize::try_from(count).unwrap_or(0);
    let out = session.out();
    for term in fibonacci_terms(count) {
        writeln!(out, "{term}")?;
    }
    Ok(())
}

pub fn max_min_number<R: BufRead, W: Write>(session: &mut InputSession<R, W>) -> Result<()> {
    let count = session.read_int("How many numbers do you want to enter?\n")?;
    let mut extrema = Extrema::default();
    for _ in 0..count {
        extrema.observe(session.read_int("Enter a number: \n")?);
    }

    let out = session.out();
    match (extrema.max(), extrema.min()) {
        (Some(max), Some(min)) => {
            writeln!(out, "The maximum number is: {max}")?;
            writeln!(out, "The minimum number is: {min}")?;
        }
        _ => writeln!(out, "No numbers were entered.")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{output_of, scripted_session};

    #[test]
    fn prints_one_term_per_line() {
        let mut session = scripted_session("6\n");
        fibonacci(&mut session).expect("run");
        let output = output_of(session);
        let body = output.trim_start_matches("Enter the number of terms for the Fibonacci sequence: ");
        assert_eq!(body, "0\n1\n1\n2\n3\n5\n");
    }

    #[test]
    fn negative_count_prints_nothing() {
        let mut session = scripted_session("-3\n");
        fibonacci(&mut session).expect("run");
        assert!(!output_of(session).contains('\n'));
    }

    #[test]
    fn tracks_increasing_input() {
        let mut session = scripted_session("3\n3 5 7\n");
        max_min_number(&mut session).expect("run");
        let output = output_of(session);
        assert!(output.contains("The maximum number is: 7"));
        assert!(output.contains("The minimum number is: 3"));
    }

    #[test]
    fn zero_count_reports_nothing_entered() {
        let mut session = scripted_session("0\n");
        max_min_number(&mut session).expect("run");
        assert!(output_of(session).ends_with("No numbers were entered.\n"));
    }
}
