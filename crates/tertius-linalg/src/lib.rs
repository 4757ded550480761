//! # tertius-linalg
//!
//! Small dense matrices over exact rings: products, determinants and
//! characteristic polynomials. Eigenvalues of a rational matrix are the
//! roots of its characteristic polynomial, which the algebraic number
//! layer isolates.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense_matrix;

pub use dense_matrix::DenseMatrix;
