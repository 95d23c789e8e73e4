//! Four-function integer calculator.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Calculation {
    Value(f64),
    DivideByZero,
    UnknownOperator,
}

impl Calculation {
    /// The numeric result, absent when the operation could not be performed.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(value) => Some(*value),
            Self::DivideByZero | Self::UnknownOperator => None,
        }
    }
}

/// Apply `operator` to two integers.
///
/// Division truncates toward zero before the result is widened to a float,
/// so `7 / 2` yields `3`.
pub fn calculate(x: i64, y: i64, operator: Option<Operator>) -> Calculation {
    let (x, y) = (i128::from(x), i128::from(y));
    let result = match operator {
        Some(Operator::Add) => x + y,
        Some(Operator::Subtract) => x - y,
        Some(Operator::Multiply) => x * y,
        Some(Operator::Divide) if y == 0 => return Calculation::DivideByZero,
        Some(Operator::Divide) => x / y,
        None => return Calculation::UnknownOperator,
    };
    Calculation::Value(result as f64)
}
