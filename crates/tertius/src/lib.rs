//! # Tertius
//!
//! Exact computation with real and complex algebraic numbers.
//!
//! Every algebraic number is kept as its minimal polynomial over the
//! integers plus a certified complex ball that isolates one of its roots.
//! Arithmetic, comparisons and special values are exact; numerical
//! precision is raised internally until each answer is certified.
//!
//! ## Crates
//!
//! - [`integers`]: big integers and rationals
//! - [`rings`]: ring traits and the coefficient rings `Z` and `Q`
//! - [`poly`]: dense polynomials and integer polynomial utilities
//! - [`series`]: truncated power series
//! - [`factor`]: factorization over the integers
//! - [`linalg`]: dense matrices and characteristic polynomials
//! - [`ball`]: dyadic numbers and real and complex ball arithmetic
//! - [`qqbar`]: the algebraic numbers
//!
//! ## Quick Start
//!
//! ```rust
//! use tertius::prelude::*;
//!
//! let x = AlgebraicNumber::sqrt_rational(&Rational::from(2i64));
//! let y = AlgebraicNumber::sqrt_rational(&Rational::from(3i64));
//! let s = x.add(&y);
//! assert_eq!(s.degree(), 4);
//! assert_eq!(AlgebraicNumber::cos_pi(1, 3), AlgebraicNumber::from_rational(&Rational::from_i64(1, 2)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use tertius_ball as ball;
pub use tertius_factor as factor;
pub use tertius_integers as integers;
pub use tertius_linalg as linalg;
pub use tertius_poly as poly;
pub use tertius_qqbar as qqbar;
pub use tertius_rings as rings;
pub use tertius_series as series;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use tertius_ball::{Acb, Arb};
    pub use tertius_integers::{Integer, Rational};
    pub use tertius_linalg::DenseMatrix;
    pub use tertius_poly::DensePoly;
    pub use tertius_qqbar::{AlgebraicNumber, QqbarError};
    pub use tertius_rings::{Field, Ring, Q, Z};
}
