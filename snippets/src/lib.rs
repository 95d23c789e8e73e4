//! Beginner console programs built on a shared input and randomness core.
//!
//! Every program follows the same shape: read a few validated scalars, run one
//! pure computation, print a plain-text report. The crate keeps those concerns
//! apart:
//!
//! - **[`core`]**: Pure leaf computations (fractions, primality, triangles, ...).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting pieces: the validating [`io::input::InputSession`],
//!   the seeded [`io::random::BoundedRandomSource`] and config loading.
//!
//! [`programs`] composes the two into the runnable programs and [`cli`]
//! implements the `snippets` commands on top of them.

pub mod cli;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod programs;
pub mod render;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
