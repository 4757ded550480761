//! # tertius-integers
//!
//! Arbitrary precision integers and rationals on top of `dashu`.
//!
//! - [`Integer`]: signed big integers with directed division and shifts,
//!   gcd/lcm and exact integer roots
//! - [`Rational`]: big rationals, always in lowest terms

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::{small_gcd, Integer};
pub use rational::Rational;
