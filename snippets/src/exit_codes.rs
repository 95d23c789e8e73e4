//! Stable exit codes for the `snippets` binary.
//!
//! Programs never signal domain problems (zero denominator, unknown operator,
//! invalid month) through the exit status; those are reported in the output
//! and the run still ends with [`OK`].

/// Command completed, including programs that rejected some input.
pub const OK: i32 = 0;
/// Tool-level failure: invalid config, end of input, retry limit exceeded.
pub const INVALID: i32 = 1;
