//! Errors for fallible constructors.

use thiserror::Error;

/// Errors from constructing algebraic numbers out of caller data.
///
/// Contract violations such as division by zero panic instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QqbarError {
    /// The polynomial is identically zero.
    #[error("the zero polynomial has no well-defined roots")]
    ZeroPolynomial,
    /// The polynomial is a non-zero constant.
    #[error("a constant polynomial has no roots")]
    ConstantPolynomial,
    /// The polynomial given as a minimal polynomial factors over Q.
    #[error("polynomial is not irreducible over the rationals")]
    NotIrreducible,
    /// The enclosure could not be certified to isolate a root.
    #[error("enclosure does not isolate a root of the polynomial")]
    NotIsolating,
    /// Eigenvalues requested for a non-square matrix.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, QqbarError>;
