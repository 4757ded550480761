//! # tertius-poly
//!
//! Dense univariate polynomial arithmetic.
//!
//! This crate provides:
//! - Dense univariate polynomials over any `Ring`, with Karatsuba multiplication
//! - Division and GCD over fields
//! - Integer polynomial utilities: content, exact division and root transforms
//! - Cyclotomic polynomials and the minimal polynomials of `2cos(2π/n)`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod dense;
pub mod integer;

#[cfg(test)]
mod proptests;

pub use dense::DensePoly;
