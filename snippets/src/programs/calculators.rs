//! Formula-driven programs: read a few numbers, apply one formula, report.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::core::bmi::{BmiCategory, bmi};
use crate::core::calculator::{Calculation, Operator, calculate};
use crate::core::formulas::{appreciation, pendulum_period};
use crate::core::fraction::simplify;
use crate::core::quadratic::{Roots, solve};
use crate::io::input::InputSession;
use crate::render::general;

const NOT_QUADRATIC: &str = "It's not a quadratic equation";

fn positive(value: &f64) -> bool {
    value.is_finite() && *value > 0.0
}

pub fn basic_calculator<R: BufRead, W: Write>(session: &mut InputSession<R, W>) -> Result<()> {
    let x = session.read_int("Enter the first number: \n")?;
    let y = session.read_int("Enter the second number: \n")?;

    let out = session.out();
    writeln!(out, "\nEnter the operator (+, -, *, /): ")?;
    writeln!(out, "\n+ addition")?;
    writeln!(out, "- subtraction")?;
    writeln!(out, "* multiplication")?;
    writeln!(out, "/ division")?;

    let symbol = session.read_char("\nOperator: ")?;
    let calculation = calculate(x, y, Operator::from_char(symbol));

    let out = session.out();
    match calculation {
        Calculation::DivideByZero => writeln!(out, "You can't divide by 0")?,
        Calculation::UnknownOperator => writeln!(out, "Incorrect operation")?,
        Calculation::Value(_) => {}
    }
    match calculation.value() {
        Some(value) => writeln!(out, "\nThe result is: {}", general(value))?,
        None => writeln!(out, "\nThe result is: undefined")?,
    }
    Ok(())
}

pub fn bmi_calculator<R: BufRead, W: Write>(session: &mut InputSession<R, W>) -> Result<()> {
    let height = session.read_validated("Enter height: \n", str::parse::<f64>, positive, None)?;
    let weight = session.read_validated("Enter weight: \n", str::parse::<f64>, positive, None)?;

    let value = bmi(height, weight);
    let out = session.out();
    writeln!(out, "The BMI is {}", general(value))?;
    writeln!(out, "{}", BmiCategory::from_bmi(value))?;
    Ok(())
}

pub fn fraction_simplifier<R: BufRead, W: Write>(session: &mut InputSession<R, W>) -> Result<()> {
    let numerator = session.read_int("Enter the numerator: \n")?;
    let denominator = session.read_validated(
        "Enter the denominator: \n",
        str::parse::<i64>,
        |d| *d != 0,
        Some("The denominator of a fraction can't be null. Try again"),
    )?;

    let out = session.out();
    writeln!(out, "Fraction entered: {numerator} / {denominator}")?;

    let fraction = simplify(numerator, denominator);
    if fraction.is_apparent() {
        writeln!(out, "Apparent fraction of value: {}", fraction.numerator)?;
    } else {
        writeln!(
            out,
            "Simplified fraction: {} / {}",
            fraction.numerator, fraction.denominator
        )?;
    }
    if fraction.simplified {
        writeln!(out, "Fraction simplified")?;
    } else {
        writeln!(out, "The fraction is not simplifiable")?;
    }
    Ok(())
}

pub fn quadratic_solver<R: BufRead, W: Write>(session: &mut InputSession<R, W>) -> Result<()> {
    let a = session.read_float("Enter the quadratic coefficient for the equation: \n")?;
    if a == 0.0 {
        writeln!(session.out(), "{NOT_QUADRATIC}")?;
        return Ok(());
    }
    let b = session.read_float("Enter the linear coefficient: \n")?;
    let c = session.read_float("Enter the constant coefficient/free term: \n")?;

    let out = session.out();
    match solve(a, b, c) {
        Roots::NotQuadratic => writeln!(out, "{NOT_QUADRATIC}")?,
        Roots::None => writeln!(out, "The equation has no solutions")?,
        Roots::One(x) => {
            writeln!(out, "The equation has one solution")?;
            writeln!(out, "The solution is: {}", general(x))?;
        }
        Roots::Two(x1, x2) => {
            writeln!(out, "The equation has two solutions")?;
            writeln!(out, "The first solution is: {}", general(x1))?;
            writeln!(out, "The second solution is: {}", general(x2))?;
        }
    }
    Ok(())
}

pub fn pendulum_oscillation<R: BufRead, W: Write>(
    session: &mut InputSession<R, W>,
) -> Result<()> {
    let length = session.read_validated(
        "What is the length of the pendulum in cm? \n",
        str::parse::<f64>,
        positive,
        Some("Invalid length. Try again"),
    )?;
    writeln!(
        session.out(),
        "The pendulum has a period equal to {} seconds",
        general(pendulum_period(length))
    )?;
    Ok(())
}

pub fn painting_value<R: BufRead, W: Write>(session: &mut InputSession<R, W>) -> Result<()> {
    let price = session.read_validated(
        "How much did you pay the painting?\n",
        str::parse::<f64>,
        positive,
        None,
    )?;
    let years = session.read_validated(
        "In how many years will you be reselling the painting?\n",
        str::parse::<i64>,
        |years| *years > 0,
        None,
    )?;

    let out = session.out();
    for (year, value) in (1u64..).zip(appreciation(price, years.unsigned_abs())) {
        writeln!(out, "The painting in {year} years will be worth ${value:.2}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{output_of, scripted_session};

    #[test]
    fn fraction_rejects_zero_denominator() {
        let mut session = scripted_session("8\n0\n12\n");
        fraction_simplifier(&mut session).expect("run");
        let output = output_of(session);
        assert!(output.contains("The denominator of a fraction can't be null. Try again"));
        assert!(output.contains("Fraction entered: 8 / 12"));
        assert!(output.contains("Simplified fraction: 2 / 3"));
        assert!(output.ends_with("Fraction simplified\n"));
    }

    #[test]
    fn fraction_reports_apparent_value() {
        let mut session = scripted_session("4 1\n");
        fraction_simplifier(&mut session).expect("run");
        let output = output_of(session);
        assert!(output.contains("Apparent fraction of value: 4"));
        assert!(output.contains("The fraction is not simplifiable"));
    }

    #[test]
    fn quadratic_stops_when_not_quadratic() {
        // Coefficients after `a` are never read, so the script can end here.
        let mut session = scripted_session("0\n");
        quadratic_solver(&mut session).expect("run");
        let output = output_of(session);
        assert!(output.contains(NOT_QUADRATIC));
        assert!(!output.contains("linear coefficient"));
    }

    #[test]
    fn quadratic_reports_roots() {
        let mut session = scripted_session("1 -3 2\n");
        quadratic_solver(&mut session).expect("run");
        let output = output_of(session);
        assert!(output.contains("The equation has two solutions"));
        assert!(output.contains("The first solution is: 2\n"));
        assert!(output.contains("The second solution is: 1\n"));

        let mut session = scripted_session("1 2 1\n");
        quadratic_solver(&mut session).expect("run");
        assert!(output_of(session).contains("The solution is: -1\n"));

        let mut session = scripted_session("1 0 1\n");
        quadratic_solver(&mut session).expect("run");
        assert!(output_of(session).contains("The equation has no solutions"));
    }

    #[test]
    fn calculator_guards_division_by_zero() {
        let mut session = scripted_session("5\n0\n/\n");
        basic_calculator(&mut session).expect("run");
        let output = output_of(session);
        assert!(output.contains("You can't divide by 0"));
        assert!(output.contains("The result is: undefined"));
    }

    #[test]
    fn calculator_truncates_division() {
        let mut session = scripted_session("7 2 /\n");
        basic_calculator(&mut session).expect("run");
        assert!(output_of(session).contains("The result is: 3\n"));
    }

    #[test]
    fn calculator_rejects_unknown_operator() {
        let mut session = scripted_session("7 2 %\n");
        basic_calculator(&mut session).expect("run");
        let output = output_of(session);
        assert!(output.contains("Incorrect operation"));
        assert!(output.contains("The result is: undefined"));
    }

    #[test]
    fn bmi_reprompts_non_positive_values() {
        let mut session = scripted_session("0\n-1.8\n1.8\n70\n");
        bmi_calculator(&mut session).expect("run");
        let output = output_of(session);
        assert_eq!(output.matches("Enter height: ").count(), 3);
        assert!(output.contains("The BMI is 21.6049"));
        assert!(output.ends_with("Healthy\n"));
    }

    #[test]
    fn pendulum_reprompts_invalid_length() {
        let mut session = scripted_session("-5\n100\n");
        pendulum_oscillation(&mut session).expect("run");
        let output = output_of(session);
        assert!(output.contains("Invalid length. Try again"));
        assert!(output.contains("The pendulum has a period equal to 2.00607 seconds"));
    }

    #[test]
    fn painting_grows_each_year() {
        let mut session = scripted_session("100\n0\n2\n");
        painting_value(&mut session).expect("run");
        let output = output_of(session);
        assert!(output.contains("The painting in 1 years will be worth $105.00"));
        assert!(output.contains("The painting in 2 years will be worth $110.25"));
        assert!(!output.contains("in 3 years"));
    }

    #[test]
    fn painting_reprompts_negative_years_silently() {
        let mut session = scripted_session("100\n-3\n1\n");
        painting_value(&mut session).expect("run");
        let output = output_of(session);
        assert!(!output.contains(crate::io::input::MALFORMED_HINT));
        assert_eq!(
            output
                .matches("In how many years will you be reselling the painting?")
                .count(),
            2
        );
        assert!(output.ends_with("The painting in 1 years will be worth $105.00\n"));
    }
}
