//! The truncated series type.
//!
//! A [`PowerSeries`] holds exactly `precision` coefficients of `f mod
//! x^precision`. Every stored coefficient is exact; nothing past the
//! precision is known.

use tertius_poly::DensePoly;
use tertius_rings::traits::Ring;

/// A formal power series known modulo `x^precision`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PowerSeries<R: Ring> {
    coeffs: Vec<R>,
    precision: usize,
}

impl<R: Ring> PowerSeries<R> {
    /// Truncates or zero-pads `coeffs` to `precision` terms.
    #[must_use]
    pub fn new(mut coeffs: Vec<R>, precision: usize) -> Self {
        coeffs.resize(precision, R::zero());
        Self { coeffs, precision }
    }

    /// Series with precision equal to `coeffs.len()`.
    #[must_use]
    pub fn from_coeffs(coeffs: Vec<R>) -> Self {
        Self {
            precision: coeffs.len(),
            coeffs,
        }
    }

    /// The constant `c`.
    #[must_use]
    pub fn constant(c: R, precision: usize) -> Self {
        Self::new(vec![c], precision)
    }

    /// `0`.
    #[must_use]
    pub fn zero(precision: usize) -> Self {
        Self::new(Vec::new(), precision)
    }

    /// `1`.
    #[must_use]
    pub fn one(precision: usize) -> Self {
        Self::constant(R::one(), precision)
    }

    /// `p mod x^precision`.
    #[must_use]
    pub fn from_poly(p: &DensePoly<R>, precision: usize) -> Self {
        Self::new(p.truncate(precision).coeffs().to_vec(), precision)
    }

    /// The known terms as a polynomial.
    #[must_use]
    pub fn to_poly(&self) -> DensePoly<R> {
        DensePoly::new(self.coeffs.clone())
    }

    /// Coefficient of `x^n`; zero past the precision.
    #[must_use]
    pub fn coeff(&self, n: usize) -> R {
        self.coeffs.get(n).map_or_else(R::zero, Clone::clone)
    }

    /// The known coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Number of known terms.
    #[must_use]
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Drops terms beyond `precision`. Never raises the precision.
    #[must_use]
    pub fn truncate(&self, precision: usize) -> Self {
        let precision = precision.min(self.precision);
        Self::from_coeffs(self.coeffs[..precision].to_vec())
    }

    /// Whether every known coefficient vanishes.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Ring::is_zero)
    }
}
