//! Coefficient domain traits.
//!
//! Polynomials, series and matrices are generic over a [`Ring`]. Algorithms
//! that divide coefficients (monic gcd, Newton's identities, Faddeev-LeVerrier)
//! additionally require a [`Field`].

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A commutative ring with identity.
///
/// Arithmetic is by value through the standard operator traits; the
/// provided methods build on those.
pub trait Ring:
    Clone + Eq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Whether `self` is the additive identity.
    fn is_zero(&self) -> bool;

    /// Whether `self` is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// The `n`-fold sum of `self`, by binary doubling.
    fn mul_by_scalar(&self, n: i64) -> Self {
        let mut acc = Self::zero();
        let mut addend = self.clone();
        let mut bits = n.unsigned_abs();
        while bits != 0 {
            if bits & 1 == 1 {
                acc = acc + addend.clone();
            }
            bits >>= 1;
            if bits != 0 {
                addend = addend.clone() + addend;
            }
        }
        if n < 0 {
            -acc
        } else {
            acc
        }
    }

    /// `self^n` by square-and-multiply.
    fn pow(&self, n: u32) -> Self {
        let mut acc = Self::one();
        let mut square = self.clone();
        let mut bits = n;
        while bits != 0 {
            if bits & 1 == 1 {
                acc = acc * square.clone();
            }
            bits >>= 1;
            if bits != 0 {
                square = square.clone() * square;
            }
        }
        acc
    }
}

/// A ring in which every nonzero element is invertible.
pub trait Field: Ring {
    /// Multiplicative inverse, `None` for zero.
    fn inv(&self) -> Option<Self>;

    /// `self / other`.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    fn field_div(&self, other: &Self) -> Self {
        match other.inv() {
            Some(r) => self.clone() * r,
            None => panic!("division by zero"),
        }
    }
}

/// Forwards the by-value operator traits of a newtype to its inner value.
macro_rules! forward_newtype_ops {
    ($ty:ident) => {
        impl std::ops::Add for $ty {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl std::ops::Sub for $ty {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl std::ops::Mul for $ty {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                Self(self.0 * rhs.0)
            }
        }

        impl std::ops::Neg for $ty {
            type Output = Self;
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

pub(crate) use forward_newtype_ops;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Q, Z};

    #[test]
    fn scalar_multiples() {
        assert_eq!(Z::new(7).mul_by_scalar(13), Z::new(91));
        assert_eq!(Z::new(7).mul_by_scalar(-3), Z::new(-21));
        assert!(Q::new(1, 3).mul_by_scalar(0).is_zero());
        assert_eq!(Q::new(1, 3).mul_by_scalar(6), Q::from_integer(2));
    }

    #[test]
    fn powers() {
        assert_eq!(Ring::pow(&Z::new(-2), 11), Z::new(-2048));
        assert!(Ring::pow(&Q::new(5, 7), 0).is_one());
        assert_eq!(Ring::pow(&Q::new(2, 3), 3), Q::new(8, 27));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn divide_by_zero() {
        let _ = Q::one().field_div(&Q::zero());
    }
}
