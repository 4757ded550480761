//! Polynomial factorization over the integers.
//!
//! This crate provides:
//! - **Squarefree decomposition**: Yun's algorithm
//! - **Cantor-Zassenhaus**: Distinct- and equal-degree factorization modulo a prime
//! - **Hensel Lifting**: Quadratic multifactor lifting from Z_p to Z_{p^k}
//! - **Zassenhaus recombination**: Exact subset search over lifted factors
//! - **Knapsack recombination**: LLL reduction splits many lifted factors at once
//!
//! # Parallelism
//!
//! Batch entry points use rayon to factor independent inputs in parallel.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cantor_zassenhaus;
pub mod hensel;
pub mod knapsack;
pub mod lll;
pub mod modular;
pub mod squarefree;
pub mod univariate;

// Re-exports
pub use cantor_zassenhaus::cantor_zassenhaus_factor;
pub use hensel::hensel_lift;
pub use knapsack::knapsack_recombine;
pub use lll::{lll_reduce, LllResult};
pub use modular::ZpPoly;
pub use squarefree::{squarefree_factorization, squarefree_factorization_batch, squarefree_part, SquarefreeDecomposition};
pub use univariate::{factor, factor_batch, irreducible_factors, is_irreducible, Factorization};
