//! Minimum kite fleets under ribbon, batch and parade divisibility constraints
//!
//! Each query asks for the smallest total `K = A + B` of TwinTail (`A`, two
//! ribbons each) and QuadTail (`B`, four ribbons each) kites using exactly `n`
//! ribbons, where `A` is a multiple of `c`, `B` a multiple of `d` and `K` a
//! multiple of `p`. The search is reduced to a pair of linear congruences over
//! the QuadTail batch count and answered in logarithmic time.

#![forbid(unsafe_code)]

/// Query model, the congruence-based optimizer and its brute-force reference
pub mod algorithm;
/// Batch protocol, validation, checking, case generation and the command line
pub mod io;
/// Extended gcd, modular inverse, linear congruences and CRT merging
pub mod math;

pub use algorithm::optimizer::{Outcome, Query, solve};
pub use io::error::{KiteError, Result};
