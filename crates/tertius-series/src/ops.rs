//! Series arithmetic.
//!
//! Binary operations work at the smaller of the two precisions. The ring
//! part is generic; division, logarithm, exponential and the Borel pair
//! divide by integers and so need a field of characteristic zero.

use crate::power_series::PowerSeries;
use tertius_rings::traits::{Field, Ring};

fn embed<R: Ring>(n: usize) -> R {
    R::one().mul_by_scalar(i64::try_from(n).unwrap_or(i64::MAX))
}

impl<R: Ring> PowerSeries<R> {
    fn zip_with(&self, other: &Self, f: impl Fn(R, R) -> R) -> Self {
        let precision = self.precision().min(other.precision());
        let coeffs = (0..precision).map(|n| f(self.coeff(n), other.coeff(n))).collect();
        Self::new(coeffs, precision)
    }

    /// `f + g`.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }

    /// `f - g`.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }

    /// `-f`.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(self.coeffs().iter().cloned().map(|c| -c).collect(), self.precision())
    }

    /// Cauchy product.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let precision = self.precision().min(other.precision());
        Self::from_poly(&self.to_poly().mul_trunc(&other.to_poly(), precision), precision)
    }

    /// Hadamard product `Σ f_n g_n x^n`.
    #[must_use]
    pub fn hadamard(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a * b)
    }

    /// `f'`, one term shorter than `f`.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let precision = self.precision().saturating_sub(1);
        let coeffs = (1..=precision).map(|n| self.coeff(n) * embed::<R>(n)).collect();
        Self::new(coeffs, precision)
    }
}

impl<R: Field> PowerSeries<R> {
    /// `1/f` by the Newton step `g <- g (2 - f g)`, doubling the number of
    /// correct terms each round. `None` when `f(0) = 0`.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let precision = self.precision();
        let mut g = Self::constant(self.coeff(0).inv()?, precision.min(1));
        while g.precision() < precision {
            let k = (2 * g.precision()).min(precision);
            let g_k = Self::new(g.coeffs().to_vec(), k);
            let correction = Self::constant(embed(2), k).sub(&self.truncate(k).mul(&g_k));
            g = g_k.mul(&correction);
        }
        Some(g)
    }

    /// `f / g`, `None` when `g(0) = 0`.
    #[must_use]
    pub fn div(&self, other: &Self) -> Option<Self> {
        other.inverse().map(|inv| self.mul(&inv))
    }

    /// Antiderivative with zero constant term, one term longer than `f`.
    #[must_use]
    pub fn integral(&self) -> Self {
        let mut coeffs = Vec::with_capacity(self.precision() + 1);
        coeffs.push(R::zero());
        coeffs.extend(
            self.coeffs()
                .iter()
                .enumerate()
                .map(|(n, c)| c.field_div(&embed(n + 1))),
        );
        Self::new(coeffs, self.precision() + 1)
    }

    /// `log f = ∫ f'/f` for `f(0) = 1`, otherwise `None`.
    #[must_use]
    pub fn log(&self) -> Option<Self> {
        if !self.coeff(0).is_one() {
            return None;
        }
        let shortened = self.truncate(self.precision().saturating_sub(1));
        Some(self.derivative().div(&shortened)?.integral())
    }

    /// `exp f` for `f(0) = 0`, otherwise `None`. Newton step
    /// `g <- g (1 + f - log g)`.
    #[must_use]
    pub fn exp_of(&self) -> Option<Self> {
        if !self.coeff(0).is_zero() {
            return None;
        }
        let precision = self.precision();
        let mut g = Self::one(precision.min(1));
        while g.precision() < precision {
            let k = (2 * g.precision()).min(precision);
            let g_k = Self::new(g.coeffs().to_vec(), k);
            let step = Self::one(k).add(&self.truncate(k)).sub(&g_k.log()?);
            g = g_k.mul(&step);
        }
        Some(g)
    }

    /// `Σ x^n / n!` to `precision` terms.
    #[must_use]
    pub fn exp(precision: usize) -> Self {
        let mut term = R::one();
        let coeffs = (0..precision)
            .map(|n| {
                if n > 0 {
                    term = term.field_div(&embed(n));
                }
                term.clone()
            })
            .collect();
        Self::new(coeffs, precision)
    }

    /// Borel transform `Σ f_n x^n / n!`.
    #[must_use]
    pub fn borel(&self) -> Self {
        self.hadamard(&Self::exp(self.precision()))
    }

    /// Inverse Borel transform `Σ n! f_n x^n`.
    #[must_use]
    pub fn inv_borel(&self) -> Self {
        let mut factorial = R::one();
        let coeffs = (0..self.precision())
            .map(|n| {
                if n > 0 {
                    factorial = factorial.clone() * embed(n);
                }
                self.coeff(n) * factorial.clone()
            })
            .collect();
        Self::new(coeffs, self.precision())
    }
}
