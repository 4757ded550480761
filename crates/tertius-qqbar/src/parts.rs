//! Real and imaginary parts, absolute values and complex signs.

use crate::binary::{binary_with_shape, Shape};
use crate::composed::BinaryOp;
use crate::number::AlgebraicNumber;

impl AlgebraicNumber {
    /// Real part, `(x + conj x) / 2`.
    #[must_use]
    pub fn re(&self) -> Self {
        if self.is_real() {
            return self.clone();
        }
        if self.is_imaginary() {
            return Self::zero();
        }
        binary_with_shape(self, &self.conj(), BinaryOp::Add, Shape::Real).mul_2exp(-1)
    }

    /// Imaginary part, `(x - conj x) / 2i`.
    #[must_use]
    pub fn im(&self) -> Self {
        if self.is_real() {
            return Self::zero();
        }
        if self.is_imaginary() {
            return self.div_i();
        }
        binary_with_shape(self, &self.conj(), BinaryOp::Sub, Shape::Imaginary)
            .div_i()
            .mul_2exp(-1)
    }

    /// Squared absolute value, `x * conj x`.
    #[must_use]
    pub fn abs2(&self) -> Self {
        if self.is_real() {
            return self.pow(2);
        }
        if self.is_imaginary() {
            return self.div_i().pow(2);
        }
        binary_with_shape(self, &self.conj(), BinaryOp::Mul, Shape::Real)
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.is_real() {
            return if self.sgn_re() < 0 { self.neg() } else { self.clone() };
        }
        if self.is_imaginary() {
            return self.div_i().abs();
        }
        self.abs2().sqrt()
    }

    /// Complex sign `x / |x|`, or zero for zero.
    #[must_use]
    pub fn sgn(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        self.div(&self.abs())
    }

    /// Sign of the real part, or of the imaginary part when the real part
    /// is zero.
    #[must_use]
    pub fn csgn(&self) -> i8 {
        match self.sgn_re() {
            0 => self.sgn_im(),
            s => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tertius_integers::Rational;
    use tertius_poly::integer::int_poly;

    fn sqrt(n: i64) -> AlgebraicNumber {
        AlgebraicNumber::sqrt_rational(&Rational::from(n))
    }

    #[test]
    fn test_parts_of_complex_number() {
        // 1 + i sqrt 2
        let z = sqrt(-2).add_rational(&Rational::from(1i64));
        assert_eq!(z.re(), AlgebraicNumber::one());
        assert_eq!(z.im(), sqrt(2));
        assert!(z.re().is_real() && z.im().is_real());
        let w = sqrt(3).add(&sqrt(-5));
        assert_eq!(w.re(), sqrt(3));
        assert_eq!(w.im(), sqrt(5));
    }

    #[test]
    fn test_parts_fast_paths() {
        assert_eq!(sqrt(2).re(), sqrt(2));
        assert!(sqrt(2).im().is_zero());
        assert!(sqrt(-3).re().is_zero());
        assert_eq!(sqrt(-3).im(), sqrt(3));
        assert_eq!(sqrt(-3).neg().im(), sqrt(3).neg());
    }

    #[test]
    fn test_absolute_values() {
        let z = sqrt(2).add(&AlgebraicNumber::i());
        assert_eq!(z.abs2().to_rational(), Some(Rational::from(3i64)));
        assert_eq!(z.abs(), sqrt(3));
        assert_eq!(sqrt(2).neg().abs(), sqrt(2));
        assert_eq!(sqrt(-7).abs(), sqrt(7));
        assert_eq!(AlgebraicNumber::from_i64(-4).abs2(), AlgebraicNumber::from_i64(16));
    }

    #[test]
    fn test_complex_sign() {
        assert!(AlgebraicNumber::i().mul_rational(&Rational::from(3i64)).sgn().is_i());
        assert!(AlgebraicNumber::zero().sgn().is_zero());
        let z = sqrt(2).add(&AlgebraicNumber::i());
        let s = z.sgn();
        // s^2 = (1 + 2 sqrt 2 i) / 3
        assert_eq!(s.minimal_polynomial(), &int_poly(&[3, 0, -2, 0, 3]));
        assert_eq!(s.abs(), AlgebraicNumber::one());
        assert_eq!(sqrt(-2).csgn(), 1);
        assert_eq!(sqrt(-2).neg().csgn(), -1);
        assert_eq!(sqrt(2).neg().csgn(), -1);
    }
}
