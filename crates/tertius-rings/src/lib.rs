//! # tertius-rings
//!
//! Coefficient domains for polynomials, series and matrices.
//!
//! - [`Ring`] and [`Field`]: the two traits generic code is written against
//! - [`Z`] and [`Q`]: the integer and rational instances

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integers;
pub mod rationals;
pub mod traits;

pub use integers::Z;
pub use rationals::Q;
pub use traits::{Field, Ring};
