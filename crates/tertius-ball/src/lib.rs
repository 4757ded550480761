//! # tertius-ball
//!
//! Certified numerics for exact computation.
//!
//! This crate provides:
//! - **Dyadic numbers**: exact `dashu` binary floats with directed rounding
//! - **Real balls** (`Arb`): midpoint-radius intervals whose operations
//!   always enclose the exact result
//! - **Complex balls** (`Acb`): rectangles with exact zero parts preserved
//! - **Constants**: π and `sin`/`cos` at rational multiples of π
//! - **Root approximation**: Aberth iteration and principal `n`-th roots
//!
//! Balls carry no global precision: every operation takes the working
//! precision in bits and rounds the midpoint to it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod acb;
pub mod approx;
pub mod arb;
pub mod constants;
pub mod dyadic;
pub mod eval;

#[cfg(test)]
mod proptests;

pub use acb::Acb;
pub use approx::{aberth_roots, approx_root};
pub use arb::Arb;
pub use constants::{exp_pi_i, pi, sin_cos_pi};
pub use dyadic::{Dyadic, Round};
pub use eval::{eval_poly, eval_poly_and_derivative, eval_poly_real};
