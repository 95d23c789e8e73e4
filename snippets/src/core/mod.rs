//! Pure leaf computations behind the console programs.
//!
//! Core modules must be free of I/O side effects. They take already-validated
//! inputs and return typed results; turning those into text is the job of
//! [`crate::programs`].

pub mod bmi;
pub mod calculator;
pub mod calendar;
pub mod formulas;
pub mod fraction;
pub mod games;
pub mod number;
pub mod primality;
pub mod quadratic;
pub mod sequence;
pub mod triangle;
