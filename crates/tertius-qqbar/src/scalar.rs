//! Operations by rational scalars and exact symmetries.
//!
//! Negation, conjugation, scaling by powers of two and multiplication by
//! `±i` of even or odd minimal polynomials map the enclosure exactly, so the
//! transformed ball still isolates the transformed root. Rational affine
//! maps transform the minimal polynomial in closed form and certify the
//! image ball once.

use num_traits::Zero;
use tertius_ball::Acb;
use tertius_integers::{Integer, Rational};
use tertius_poly::dense::DensePoly;
use tertius_poly::integer::{
    negate_roots, reciprocal_roots, rotate_roots_by_i, scale_roots, shift_roots,
};
use tertius_rings::integers::Z;

use crate::binary::{select_root, Shape};
use crate::number::AlgebraicNumber;

/// `e` with `num / den = 2^e`, if there is one.
fn power_of_two_exponent(num: &Integer, den: &Integer) -> Option<i64> {
    let exponent = |n: &Integer| {
        n.trailing_zeros()
            .filter(|&k| *n == Integer::from(1u32).shl(k))
            .and_then(|k| i64::try_from(k).ok())
    };
    Some(exponent(num)? - exponent(den)?)
}

impl AlgebraicNumber {
    /// Negation.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::from_raw(negate_roots(&self.poly), self.enclosure.neg())
    }

    /// Complex conjugate.
    #[must_use]
    pub fn conj(&self) -> Self {
        Self::from_raw(self.poly.clone(), self.enclosure.conj())
    }

    /// Multiplication by `2^e`.
    #[must_use]
    pub fn mul_2exp(&self, e: i64) -> Self {
        if e == 0 || self.is_zero() {
            return self.clone();
        }
        let pow = Integer::from(1u32).shl(e.unsigned_abs() as usize);
        let poly = if e > 0 {
            scale_roots(&self.poly, &pow, &Integer::from(1u32))
        } else {
            scale_roots(&self.poly, &Integer::from(1u32), &pow)
        };
        Self::from_raw(poly, self.enclosure.mul_2exp(e))
    }

    /// Multiplication by `i`.
    #[must_use]
    pub fn mul_i(&self) -> Self {
        match rotate_roots_by_i(&self.poly) {
            Some(poly) => Self::from_raw(poly, self.enclosure.mul_i()),
            _ => self.mul(&Self::i()),
        }
    }

    /// Division by `i`.
    #[must_use]
    pub fn div_i(&self) -> Self {
        match rotate_roots_by_i(&self.poly) {
            Some(poly) => Self::from_raw(negate_roots(&poly), self.enclosure.div_i()),
            _ => self.mul(&Self::neg_i()),
        }
    }

    /// Certifies the image of `self` under an invertible rational map whose
    /// minimal polynomial is already known.
    fn affine_image(
        &self,
        op: &'static str,
        poly: DensePoly<Z>,
        shape: Shape,
        map: impl Fn(&Acb, u32) -> Option<Acb>,
    ) -> Self {
        select_root(op, std::slice::from_ref(&poly), shape, |prec| {
            map(&self.numerical_enclosure(prec), prec)
        })
    }

    /// Sum with a rational number.
    #[must_use]
    pub fn add_rational(&self, q: &Rational) -> Self {
        if q.is_zero() {
            return self.clone();
        }
        if let Some(r) = self.to_rational() {
            return Self::from_rational(&(&r + q));
        }
        let poly = shift_roots(&self.poly, &q.numerator(), &q.denominator());
        let shape = match Shape::of(self) {
            Shape::Real => Shape::Real,
            Shape::Imaginary | Shape::General => Shape::General,
        };
        self.affine_image("add_rational", poly, shape, |ball, prec| {
            Some(ball.add(&Acb::from_rational(q, prec), prec))
        })
    }

    /// Difference with a rational number.
    #[must_use]
    pub fn sub_rational(&self, q: &Rational) -> Self {
        self.add_rational(&-q)
    }

    /// The difference `q - self`.
    #[must_use]
    pub fn rational_sub(&self, q: &Rational) -> Self {
        self.neg().add_rational(q)
    }

    /// Product with a rational number.
    #[must_use]
    pub fn mul_rational(&self, q: &Rational) -> Self {
        if q.is_zero() {
            return Self::zero();
        }
        if let Some(r) = self.to_rational() {
            return Self::from_rational(&(&r * q));
        }
        let (num, den) = (q.numerator(), q.denominator());
        if let Some(e) = power_of_two_exponent(&num.abs(), &den) {
            let scaled = self.mul_2exp(e);
            return if num.is_negative() { scaled.neg() } else { scaled };
        }
        let poly = scale_roots(&self.poly, &num, &den);
        self.affine_image("mul_rational", poly, Shape::of(self), |ball, prec| {
            let s = Acb::from_rational(q, prec);
            Some(ball.mul(&s, prec))
        })
    }

    /// Quotient by a rational number.
    ///
    /// # Panics
    ///
    /// Panics if `q` is zero.
    #[must_use]
    pub fn div_rational(&self, q: &Rational) -> Self {
        assert!(!q.is_zero(), "division by zero");
        self.mul_rational(&q.recip())
    }

    /// The quotient `q / self`.
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero.
    #[must_use]
    pub fn rational_div(&self, q: &Rational) -> Self {
        self.inv().mul_rational(q)
    }

    /// Multiplicative inverse.
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero.
    #[must_use]
    pub fn inv(&self) -> Self {
        assert!(!self.is_zero(), "division by zero");
        if let Some(r) = self.to_rational() {
            return Self::from_rational(&r.recip());
        }
        let poly = reciprocal_roots(&self.poly);
        self.affine_image("inv", poly, Shape::of(self), |ball, prec| ball.inv(prec))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tertius_poly::integer::int_poly;

    fn sqrt(n: i64) -> AlgebraicNumber {
        AlgebraicNumber::sqrt_rational(&Rational::from(n))
    }

    #[test]
    fn test_neg_and_conj() {
        let x = sqrt(2);
        assert_eq!(x.neg().minimal_polynomial(), &int_poly(&[-2, 0, 1]));
        assert!(x.neg().enclosure().re().is_negative());
        let i = AlgebraicNumber::i();
        assert!(i.conj().is_neg_i());
    }

    #[test]
    fn test_rational_shift_and_scale() {
        let x = sqrt(2).add_rational(&Rational::from_i64(1, 2));
        assert_eq!(x.minimal_polynomial(), &int_poly(&[-7, -4, 4]));
        let y = sqrt(2).mul_rational(&Rational::from_i64(3, 5));
        assert_eq!(y.minimal_polynomial(), &int_poly(&[-18, 0, 25]));
        assert!(y.enclosure().re().is_positive());
        assert_eq!(sqrt(2).mul_rational(&Rational::from(-4i64)), sqrt(32).neg());
        assert_eq!(sqrt(8).mul_2exp(-1), sqrt(2));
        assert!(sqrt(2).mul_rational(&Rational::zero()).is_zero());
        assert_eq!(power_of_two_exponent(&Integer::new(8), &Integer::new(1)), Some(3));
        assert_eq!(power_of_two_exponent(&Integer::new(1), &Integer::new(4)), Some(-2));
        assert_eq!(power_of_two_exponent(&Integer::new(3), &Integer::new(4)), None);
    }

    #[test]
    fn test_rational_sub_and_div() {
        let x = sqrt(2).rational_sub(&Rational::from(1i64));
        // 1 - sqrt 2 < 0
        assert!(x.enclosure().re().is_negative());
        let y = sqrt(2).rational_div(&Rational::from(2i64));
        assert_eq!(y, sqrt(2));
    }

    #[test]
    fn test_inverse() {
        let x = sqrt(2).add_rational(&Rational::from(1i64));
        // 1 / (1 + sqrt 2) = sqrt 2 - 1
        assert_eq!(x.inv(), sqrt(2).sub_rational(&Rational::from(1i64)));
        assert_eq!(AlgebraicNumber::i().inv(), AlgebraicNumber::neg_i());
    }

    #[test]
    fn test_mul_i() {
        let x = sqrt(-3);
        assert!(x.is_imaginary());
        let y = x.div_i();
        assert_eq!(y, sqrt(3));
        assert_eq!(y.mul_i(), x);
        assert_eq!(AlgebraicNumber::from_i64(2).mul_i().minimal_polynomial(), &int_poly(&[4, 0, 1]));
    }
}
