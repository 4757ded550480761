//! Integer powers and principal roots.

use tertius_factor::irreducible_factors;
use tertius_integers::{small_gcd, Rational};
use tertius_poly::integer::primitive_part;
use tracing::debug;

use crate::binary::{select_root, Shape};
use crate::composed::power_polynomial;
use crate::number::AlgebraicNumber;

impl AlgebraicNumber {
    /// `self^n` for a non-negative exponent.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        match n {
            0 => return Self::one(),
            1 => return self.clone(),
            _ => {}
        }
        if let Some(q) = self.to_rational() {
            return Self::from_rational(&q.pow(n));
        }

        let shape = match Shape::of(self) {
            Shape::Imaginary if n % 2 == 1 => Shape::Imaginary,
            Shape::Imaginary | Shape::Real => Shape::Real,
            Shape::General => Shape::General,
        };

        // poly(x) = q(x^g) makes q the minimal polynomial of x^g.
        let g = small_gcd(self.poly.deflation() as u64, u64::from(n)) as usize;
        if g > 1 {
            let q = primitive_part(&self.poly.deflate(g));
            let g32 = g as u32;
            let shape = match Shape::of(self) {
                Shape::Imaginary if g % 2 == 1 => Shape::Imaginary,
                Shape::Imaginary | Shape::Real => Shape::Real,
                Shape::General => Shape::General,
            };
            let y = select_root("pow_deflate", std::slice::from_ref(&q), shape, |prec| {
                Some(self.numerical_enclosure(prec).pow(g32, prec))
            });
            return y.pow(n / g32);
        }

        let h = power_polynomial(&self.poly, n as usize);
        let factors = irreducible_factors(&h);
        debug!(degree = h.degree(), factors = factors.len(), n, "power polynomial");
        select_root("pow", &factors, shape, |prec| {
            Some(self.numerical_enclosure(prec).pow(n, prec))
        })
    }

    /// `self^n` for any integer exponent.
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero and `n` is negative.
    #[must_use]
    pub fn pow_i64(&self, n: i64) -> Self {
        let e = u32::try_from(n.unsigned_abs()).unwrap_or_else(|_| panic!("exponent {n} too large"));
        if n < 0 {
            self.inv().pow(e)
        } else {
            self.pow(e)
        }
    }

    /// `self^(p/q)`, the principal `q`-th root of `self^p`.
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero and the exponent is negative.
    #[must_use]
    pub fn pow_rational(&self, e: &Rational) -> Self {
        let p = e.numerator().to_i64().unwrap_or_else(|| panic!("exponent {e} too large"));
        let q = e
            .denominator()
            .to_i64()
            .and_then(|q| u32::try_from(q).ok())
            .unwrap_or_else(|| panic!("exponent {e} too large"));
        self.pow_i64(p).root(q)
    }

    /// The principal `n`-th root, with argument in `(-π/n, π/n]`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn root(&self, n: u32) -> Self {
        assert!(n > 0, "zeroth root");
        if n == 1 || self.is_zero() || self.is_one() {
            return self.clone();
        }
        if let Some(q) = self.to_rational() {
            if q.signum() > 0 {
                if let Some(r) = q.root_exact(n) {
                    return Self::from_rational(&r);
                }
            }
        }
        if self.is_real() && self.sgn_re() < 0 {
            // Principal root of a negative real: |x|^(1/n) e^(iπ/n).
            let r = self.neg().root(n);
            return if n == 2 {
                r.mul_i()
            } else {
                r.mul(&Self::exp_pi_i(1, i64::from(n)))
            };
        }

        let h = self.poly.inflate(n as usize);
        let factors = irreducible_factors(&h);
        debug!(degree = h.degree(), factors = factors.len(), n, "root polynomial");
        let shape = if self.is_real() { Shape::Real } else { Shape::General };
        select_root("root", &factors, shape, |prec| {
            self.numerical_enclosure(prec).root(n, prec)
        })
    }

    /// Principal square root.
    #[must_use]
    pub fn sqrt(&self) -> Self {
        self.root(2)
    }

    /// Reciprocal of the principal square root.
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero.
    #[must_use]
    pub fn rsqrt(&self) -> Self {
        self.sqrt().inv()
    }
}
