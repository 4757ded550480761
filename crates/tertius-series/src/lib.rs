//! Truncated power series over rings and fields.
//!
//! This crate provides:
//! - [`PowerSeries`]: eager series known modulo `x^n`
//! - Ring operations, plus the termwise (Hadamard) product
//! - Inversion, logarithm and exponential by Newton iteration
//! - Borel and inverse Borel transforms
//!
//! # Key algorithms
//!
//! - Inversion: Newton iteration `g <- g(2 - fg)`
//! - Logarithm: `∫ f'/f`
//! - Exponential: Newton iteration `g <- g(1 + f - log g)`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ops;
pub mod power_series;

#[cfg(test)]
mod proptests;

pub use power_series::PowerSeries;
