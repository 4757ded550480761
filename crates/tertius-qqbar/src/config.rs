//! Precision policy for certified computations.

/// Working precision used by the precision-escalation loops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrecisionConfig {
    /// Precision in bits of the first attempt; doubled after each failure.
    pub initial_prec: u32,
    /// Precision at which comparisons stop refining and fall back to the
    /// exact subtraction and sign path.
    pub exact_fallback_prec: u32,
}

impl Default for PrecisionConfig {
    fn default() -> Self {
        Self {
            initial_prec: 128,
            exact_fallback_prec: 8 * 128,
        }
    }
}

/// Settings for isolating the complex roots of a polynomial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IsolationConfig {
    /// Precision in bits of the first attempt.
    pub initial_prec: u32,
    /// Aberth sweeps allowed in the first attempt; doubled with the precision.
    pub max_aberth_iterations: usize,
}

impl Default for IsolationConfig {
    fn default() -> Self {
        Self {
            initial_prec: 64,
            max_aberth_iterations: 64,
        }
    }
}

/// Options for [`roots_of_polynomial_with_options`](crate::roots::roots_of_polynomial_with_options).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RootsOptions {
    /// The input is known to be irreducible; skip factorization.
    pub irreducible: bool,
    /// Sort the roots with [`cmp_root_order`](crate::AlgebraicNumber::cmp_root_order).
    pub sorted: bool,
}

impl Default for RootsOptions {
    fn default() -> Self {
        Self {
            irreducible: false,
            sorted: true,
        }
    }
}
