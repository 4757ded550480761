//! `Z`: integer coefficients.
//!
//! Minimal polynomials are stored over `Z`, primitive with positive
//! leading coefficient, so this is the coefficient type the algebraic
//! number layer sees most.

use crate::traits::{forward_newtype_ops, Ring};
use num_traits::{One, Zero};
use tertius_integers::Integer;

/// An integer as a ring element.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Z(pub Integer);

impl Z {
    /// Lifts a machine integer.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(Integer::new(value))
    }

    /// `self / other` where `other` is known to divide `self`.
    #[must_use]
    pub fn div_exact(&self, other: &Self) -> Self {
        Self(self.0.div_exact(&other.0))
    }

    /// Whether `self | other`.
    #[must_use]
    pub fn divides(&self, other: &Self) -> bool {
        other.0.is_divisible_by(&self.0)
    }
}

impl Ring for Z {
    fn zero() -> Self {
        Self(Integer::zero())
    }

    fn one() -> Self {
        Self(Integer::one())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }
}

forward_newtype_ops!(Z);

impl From<i64> for Z {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Integer> for Z {
    fn from(value: Integer) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let (a, b) = (Z::new(10), Z::new(-3));
        assert_eq!(a.clone() + b.clone(), Z::new(7));
        assert_eq!(a.clone() - b.clone(), Z::new(13));
        assert_eq!(a * b, Z::new(-30));
        assert!(Z::zero().is_zero() && Z::one().is_one());
        assert_eq!(Z::new(-5).to_string(), "-5");
    }

    #[test]
    fn exact_division() {
        assert!(Z::new(6).divides(&Z::new(-42)));
        assert!(!Z::new(5).divides(&Z::new(42)));
        assert_eq!(Z::new(-42).div_exact(&Z::new(6)), Z::new(-7));
    }
}
