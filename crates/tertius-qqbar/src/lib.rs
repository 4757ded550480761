//! # tertius-qqbar
//!
//! Exact arithmetic in the field of algebraic numbers.
//!
//! An [`AlgebraicNumber`] is stored as its minimal polynomial over the
//! integers together with a complex ball that isolates one root of it.
//! This crate provides:
//! - **Field operations** through composed polynomials built from power
//!   sums, followed by factorization and numerical root selection
//! - **Powers and roots**, with perfect powers read off by deflation
//! - **Signs and comparisons** that certify exact zeros
//! - **Special values**: roots of unity and trigonometric values at
//!   rational multiples of π, and their inverses
//! - **Root isolation** for polynomials and matrix eigenvalues
//!
//! # Example
//!
//! ```
//! use tertius_integers::Rational;
//! use tertius_qqbar::AlgebraicNumber;
//!
//! let x = AlgebraicNumber::sqrt_rational(&Rational::from(2i64));
//! let two = x.mul(&x);
//! assert_eq!(two, AlgebraicNumber::from_i64(2));
//! assert_eq!(x.floor(), 1.into());
//! ```
//!
//! # Precision
//!
//! Every operation is exact. Internally, numerical precision is doubled
//! until a result can be certified; there is no cap on this escalation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod binary;
pub mod composed;
pub mod config;
pub mod error;
pub mod isolate;
pub mod number;
pub mod parts;
pub mod power;
pub mod roots;
pub mod scalar;
pub mod sign;
pub mod special;
pub mod validate;

#[cfg(test)]
mod proptests;

pub use composed::{composed_polynomial, power_polynomial, BinaryOp};
pub use config::{IsolationConfig, PrecisionConfig, RootsOptions};
pub use error::{QqbarError, Result};
pub use isolate::isolate_roots;
pub use number::AlgebraicNumber;
pub use roots::{
    eigenvalues_of_integer_matrix, eigenvalues_of_rational_matrix, roots_of_polynomial,
    roots_of_polynomial_with_options, roots_of_rational_polynomial,
};
pub use validate::{evaluate_root, refine, validate};
