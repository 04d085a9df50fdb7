//! Shamir secret reconstruction from base-encoded shares
//!
//! Shares arrive as digit strings in bases 2 to 36. They are decoded to exact
//! integers ([`codec`]), the first k by index are interpolated at x = 0 with
//! exact rational arithmetic ([`interpolate`]), and the constant term is the
//! secret ([`solver`]).

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod commands;
pub mod domain;
pub mod error;
pub mod input;
pub mod interpolate;
pub mod observer;
pub mod samples;
pub mod solver;

pub use error::SolveError;
pub use solver::{SolveOptions, solve, solve_with};
