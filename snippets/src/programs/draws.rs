//! Programs that draw a batch of random numbers and report on them.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use rand::RngCore;

use crate::core::games::is_vowel;
use crate::core::number::{DrawStats, divisors, is_multiple_of, is_perfect_square};
use crate::core::primality::PrimalityStrategy;
use crate::core::sequence::Extrema;
use crate::io::input::InputSession;
use crate::io::random::BoundedRandomSource;
use crate::render::general;

pub fn count_multiples<R: BufRead, W: Write, G: RngCore>(
    session: &mut InputSession<R, W>,
    source: &mut BoundedRandomSource<G>,
) -> Result<()> {
    let draws = session.read_int("How many numbers you want to generate?\n")?;
    let out = session.out();
    let mut multiples: u32 = 0;
    for _ in 0..draws {
        let value = i64::from(source.next_raw());
        if is_multiple_of(value, 3) {
            writeln!(out, "Multiple number of 3: {value}")?;
            multiples += 1;
        }
    }

    if multiples == 0 {
        writeln!(out, "No multiple number of 3 was generated.")?;
    } else {
        writeln!(out, "{multiples} numbers multiple of 3 have been generated.")?;
    }
    Ok(())
}

pub fn dividers<R: BufRead, W: Write, G: RngCore>(
    session: &mut InputSession<R, W>,
    source: &mut BoundedRandomSource<G>,
) -> Result<()> {
    let out = session.out();
    let number = source.next_in_range(10, 50);
    writeln!(out, "Generated number: {number}")?;
    for divisor in divisors(number) {
        writeln!(out, "{divisor} is a divider of {number}")?;
    }
    Ok(())
}

pub fn greatest_number<R: BufRead, W: Write, G: RngCore>(
    session: &mut InputSession<R, W>,
    source: &mut BoundedRandomSource<G>,
) -> Result<()> {
    let out = session.out();
    let mut extrema = Extrema::default();
    for i in 1..=10 {
        let number = source.next_in_range(5, 30);
        writeln!(out, "Number {i} generated: {number}")?;
        extrema.observe(number);
    }
    if let Some(max) = extrema.max() {
        writeln!(out, "The maximum number generated is: {max}")?;
    }
    Ok(())
}

pub fn perfect_square<R: BufRead, W: Write, G: RngCore>(
    session: &mut InputSession<R, W>,
    source: &mut BoundedRandomSource<G>,
) -> Result<()> {
    let out = session.out();
    let numbers: Vec<i64> = (0..3).map(|_| source.next_in_range(1, 10)).collect();
    let sum: i64 = numbers.iter().sum();

    writeln!(out, "Generated numbers:")?;
    for number in &numbers {
        writeln!(out, "{number}")?;
    }
    writeln!(out, "\nSum: {sum}")?;

    if is_perfect_square(sum) {
        writeln!(out, "Perfect square.")?;
    } else {
        writeln!(out, "Not a perfect square.")?;
    }
    Ok(())
}

/// Count primes among ten draws in 10..=100.
pub fn random_primes<R: BufRead, W: Write, G: RngCore>(
    session: &mut InputSession<R, W>,
    source: &mut BoundedRandomSource<G>,
    strategy: PrimalityStrategy,
) -> Result<()> {
    let out = session.out();
    let mut primes: u32 = 0;
    for i in 1..=10 {
        let number = source.next_in_range(10, 100);
        writeln!(out, "{i} Number generated: {number}")?;
        if strategy.is_prime(number) {
            primes += 1;
        }
    }
    writeln!(out, "{primes} prime numbers have been generated.")?;
    Ok(())
}

pub fn random_average<R: BufRead, W: Write, G: RngCore>(
    session: &mut InputSession<R, W>,
    source: &mut BoundedRandomSource<G>,
) -> Result<()> {
    let out = session.out();
    let mut stats = DrawStats::with_threshold(20);
    for _ in 0..20 {
        let number = source.next_in_range(5, 30);
        writeln!(out, " Generated number: {number}")?;
        stats.record(number);
    }

    if let Some(average) = stats.average() {
        writeln!(out, "\nAverage: {}", general(average))?;
    }
    writeln!(
        out,
        "There are {} numbers greater than 20",
        stats.above_threshold()
    )?;
    Ok(())
}

pub fn vowels_counter<R: BufRead, W: Write, G: RngCore>(
    session: &mut InputSession<R, W>,
    source: &mut BoundedRandomSource<G>,
) -> Result<()> {
    let out = session.out();
    let mut vowels: u32 = 0;
    for _ in 0..3 {
        let code = source.next_in_range(i64::from(b'A'), i64::from(b'Z'));
        let letter = u8::try_from(code)
            .map(char::from)
            .with_context(|| format!("letter code {code} out of range"))?;
        writeln!(out, "{letter}")?;
        if is_vowel(letter) {
            vowels += 1;
        }
    }
    writeln!(
        out,
        "There are {vowels} vowels among the generated letters"
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{constant_source, counting_source, output_of, scripted_session};

    #[test]
    fn counts_multiples_of_three() {
        // Raw draws 3, 4, 5, 6.
        let mut source = counting_source(3);
        let mut session = scripted_session("4\n");
        count_multiples(&mut session, &mut source).expect("run");
        let output = output_of(session);
        assert!(output.contains("Multiple number of 3: 3\n"));
        assert!(output.contains("Multiple number of 3: 6\n"));
        assert!(output.ends_with("2 numbers multiple of 3 have been generated.\n"));
    }

    #[test]
    fn reports_no_multiples() {
        let mut source = constant_source(4);
        let mut session = scripted_session("2\n");
        count_multiples(&mut session, &mut source).expect("run");
        assert!(output_of(session).ends_with("No multiple number of 3 was generated.\n"));
    }

    #[test]
    fn lists_every_divider() {
        // Raw draw 2 maps to 2 % 41 + 10 = 12.
        let mut source = constant_source(2);
        let mut session = scripted_session("");
        dividers(&mut session, &mut source).expect("run");
        let output = output_of(session);
        assert!(output.starts_with("Generated number: 12\n"));
        assert_eq!(output.matches("is a divider of 12").count(), 6);
    }

    #[test]
    fn greatest_of_ten_draws() {
        // Raw draws 0..=9 map to 5..=14.
        let mut source = counting_source(0);
        let mut session = scripted_session("");
        greatest_number(&mut session, &mut source).expect("run");
        let output = output_of(session);
        assert!(output.contains("Number 10 generated: 14"));
        assert!(output.ends_with("The maximum number generated is: 14\n"));
    }

    #[test]
    fn perfect_square_sum() {
        // Raw draws 2, 2, 2 map to 3 + 3 + 3 = 9.
        let mut source = constant_source(2);
        let mut session = scripted_session("");
        perfect_square(&mut session, &mut source).expect("run");
        let output = output_of(session);
        assert!(output.contains("\nSum: 9\n"));
        assert!(output.ends_with("Perfect square.\n"));
    }

    #[test]
    fn random_prime_strategies_agree() {
        let mut outputs = Vec::new();
        for strategy in [
            PrimalityStrategy::DivisorCount,
            PrimalityStrategy::TrialDivisionFull,
        ] {
            // Raw draws 1..=10 map to 11..=20: primes 11, 13, 17, 19.
            let mut source = counting_source(1);
            let mut session = scripted_session("");
            random_primes(&mut session, &mut source, strategy).expect("run");
            outputs.push(output_of(session));
        }
        assert_eq!(outputs[0], outputs[1]);
        assert!(outputs[0].ends_with("4 prime numbers have been generated.\n"));
    }

    #[test]
    fn average_of_twenty_draws() {
        // Raw draws 0..=19 map to 5..=24: average 14.5, four above 20.
        let mut source = counting_source(0);
        let mut session = scripted_session("");
        random_average(&mut session, &mut source).expect("run");
        let output = output_of(session);
        assert_eq!(output.matches(" Generated number: ").count(), 20);
        assert!(output.contains("\nAverage: 14.5\n"));
        assert!(output.ends_with("There are 4 numbers greater than 20\n"));
    }

    #[test]
    fn counts_generated_vowels() {
        // Raw draws 0, 1, 2 map to 'A', 'B', 'C'.
        let mut source = counting_source(0);
        let mut session = scripted_session("");
        vowels_counter(&mut session, &mut source).expect("run");
        let output = output_of(session);
        assert!(output.starts_with("A\nB\nC\n"));
        assert!(output.ends_with("There are 1 vowels among the generated letters\n"));
    }
}
