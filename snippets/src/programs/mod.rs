//! The runnable console programs.
//!
//! Each program is a short composition: zero or more reads through an
//! [`InputSession`], one computation from [`crate::core`], and a plain-text
//! report written back to the session's output. Random programs additionally
//! borrow the run's [`BoundedRandomSource`].

pub mod calculators;
pub mod classifiers;
pub mod draws;
pub mod games;
pub mod sequences;

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::ValueEnum;
use rand::RngCore;
use tracing::debug;

use crate::core::primality::PrimalityStrategy;
use crate::io::input::InputSession;
use crate::io::random::BoundedRandomSource;

/// Program names accepted by `snippets run`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Program {
    BasicCalculator,
    BmiCalculator,
    Fibonacci,
    FractionSimplifier,
    MaxMinNumber,
    MonthDuration,
    PaintingValue,
    PendulumOscillation,
    PrimeNumbers,
    PrimeNumbersHalf,
    QuadraticSolver,
    TriangleCategorizer,
    CountMultiples,
    DiceRoll,
    Dividers,
    GreatestNumber,
    GuessTheNumber,
    GuessTheNumberLimited,
    HeadsOrTails,
    PerfectSquare,
    RandomPrimes,
    RandomPrimesBool,
    RandomAverage,
    VowelsCounter,
}

impl Program {
    /// Command-line name, e.g. `fraction-simplifier`.
    pub fn name(self) -> String {
        self.to_possible_value()
            .map(|value| value.get_name().to_string())
            .unwrap_or_else(|| format!("{self:?}"))
    }

    pub fn summary(self) -> &'static str {
        match self {
            Self::BasicCalculator => "add, subtract, multiply or divide two integers",
            Self::BmiCalculator => "body mass index and weight category",
            Self::Fibonacci => "print the first n Fibonacci terms",
            Self::FractionSimplifier => "reduce a fraction by its common divisors",
            Self::MaxMinNumber => "largest and smallest of n entered numbers",
            Self::MonthDuration => "days in a month, leap years included",
            Self::PaintingValue => "value of a painting growing 5% a year",
            Self::PendulumOscillation => "period of a simple pendulum",
            Self::PrimeNumbers => "primality by trial division up to n-1",
            Self::PrimeNumbersHalf => "primality by trial division up to n/2",
            Self::QuadraticSolver => "real roots of a quadratic equation",
            Self::TriangleCategorizer => "equilateral, isosceles or scalene",
            Self::CountMultiples => "multiples of 3 among n random numbers",
            Self::DiceRoll => "roll a die n times and count the sixes",
            Self::Dividers => "dividers of a random number in 10..=50",
            Self::GreatestNumber => "largest of ten random numbers",
            Self::GuessTheNumber => "guess a secret in 1..=20",
            Self::GuessTheNumberLimited => "guess a secret in 1..=10 within 3 attempts",
            Self::HeadsOrTails => "toss a coin three times",
            Self::PerfectSquare => "is the sum of three random numbers a perfect square",
            Self::RandomPrimes => "primes among ten draws, counting divisors",
            Self::RandomPrimesBool => "primes among ten draws, trial division",
            Self::RandomAverage => "average of twenty random numbers",
            Self::VowelsCounter => "vowels among three random letters",
        }
    }

    /// Run the program to completion on `session`.
    ///
    /// Deterministic programs ignore `source`.
    pub fn run<R: BufRead, W: Write, G: RngCore>(
        self,
        session: &mut InputSession<R, W>,
        source: &mut BoundedRandomSource<G>,
    ) -> Result<()> {
        debug!(program = %self.name(), "running program");
        match self {
            Self::BasicCalculator => calculators::basic_calculator(session),
            Self::BmiCalculator => calculators::bmi_calculator(session),
            Self::Fibonacci => sequences::fibonacci(session),
            Self::FractionSimplifier => calculators::fraction_simplifier(session),
            Self::MaxMinNumber => sequences::max_min_number(session),
            Self::MonthDuration => classifiers::month_duration(session),
            Self::PaintingValue => calculators::painting_value(session),
            Self::PendulumOscillation => calculators::pendulum_oscillation(session),
            Self::PrimeNumbers => {
                classifiers::prime_numbers(session, PrimalityStrategy::TrialDivisionFull)
            }
            Self::PrimeNumbersHalf => {
                classifiers::prime_numbers(session, PrimalityStrategy::TrialDivisionHalf)
            }
            Self::QuadraticSolver => calculators::quadratic_solver(session),
            Self::TriangleCategorizer => classifiers::triangle_categorizer(session),
            Self::CountMultiples => draws::count_multiples(session, source),
            Self::DiceRoll => games::dice_roll(session, source),
            Self::Dividers => draws::dividers(session, source),
            Self::GreatestNumber => draws::greatest_number(session, source),
            Self::GuessTheNumber => games::guess_the_number(session, source),
            Self::GuessTheNumberLimited => games::guess_the_number_limited(session, source),
            Self::HeadsOrTails => games::heads_or_tails(session, source),
            Self::PerfectSquare => draws::perfect_square(session, source),
            Self::RandomPrimes => {
                draws::random_primes(session, source, PrimalityStrategy::DivisorCount)
            }
            Self::RandomPrimesBool => {
                draws::random_primes(session, source, PrimalityStrategy::TrialDivisionFull)
            }
            Self::RandomAverage => draws::random_average(session, source),
            Self::VowelsCounter => draws::vowels_counter(session, source),
        }
    }
}
