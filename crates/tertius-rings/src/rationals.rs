//! `Q`: rational coefficients.
//!
//! Power sums, series and characteristic polynomials are computed over `Q`
//! before being cleared back to primitive integer polynomials.

use crate::traits::{forward_newtype_ops, Field, Ring};
use crate::Z;
use num_traits::{One, Zero};
use tertius_integers::Rational;

/// A rational number as a field element.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Q(pub Rational);

impl Q {
    /// `num / den` in lowest terms.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        Self(Rational::from_i64(num, den))
    }

    /// An integer-valued rational.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(Rational::from(n))
    }

    /// Embeds `Z` into `Q`.
    #[must_use]
    pub fn from_z(z: &Z) -> Self {
        Self(Rational::from_integer(z.0.clone()))
    }
}

impl Ring for Q {
    fn zero() -> Self {
        Self(Rational::zero())
    }

    fn one() -> Self {
        Self(Rational::one())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }
}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        (!self.is_zero()).then(|| Self(self.0.recip()))
    }
}

forward_newtype_ops!(Q);

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<Rational> for Q {
    fn from(value: Rational) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_and_products_reduce() {
        let (a, b) = (Q::new(2, 3), Q::new(3, 4));
        assert_eq!(a.clone() + b.clone(), Q::new(17, 12));
        assert_eq!(a * b, Q::new(1, 2));
        assert_eq!(Q::new(4, -6).to_string(), "-2/3");
    }

    #[test]
    fn inverses() {
        let a = Q::new(3, 5);
        assert!((a.clone() * a.inv().unwrap()).is_one());
        assert!(Q::zero().inv().is_none());
        assert_eq!(Q::new(1, 2).field_div(&Q::new(1, 3)), Q::new(3, 2));
    }

    #[test]
    fn embedding() {
        assert_eq!(Q::from_z(&Z::new(-4)), Q::from_integer(-4));
    }
}
