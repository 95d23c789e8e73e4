//! Side-effecting pieces: console input, random generation and config files.
//!
//! Everything here is generic over its reader, writer or generator so tests
//! can substitute scripted input and fixed seeds.

pub mod config;
pub mod input;
pub mod random;
