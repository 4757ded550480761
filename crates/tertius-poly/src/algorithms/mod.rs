//! Polynomial algorithms.
//!
//! - Division with remainder and GCD over a field
//! - Cyclotomic polynomials and minimal polynomials of `2cos(2π/n)`

pub mod cyclotomic;
pub mod gcd;
