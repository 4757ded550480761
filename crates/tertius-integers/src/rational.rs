//! Exact rationals.
//!
//! [`Rational`] wraps `dashu`'s `RBig`, which keeps every value in lowest
//! terms with a positive denominator. Equality and hashing are therefore
//! structural, so rationals can be used directly as polynomial
//! coefficients and map keys.

use dashu::base::{Abs, Inverse, Signed as DashuSigned, UnsignedAbs};
use dashu::integer::IBig;
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::integer::newtype_binop;
use crate::Integer;

/// An arbitrary precision rational in lowest terms.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

impl Rational {
    /// `numerator / denominator`, normalised.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: Integer, denominator: Integer) -> Self {
        assert!(!denominator.is_zero(), "zero denominator");
        let num = if denominator.is_negative() { -numerator } else { numerator };
        Self(RBig::from_parts(num.0, denominator.0.unsigned_abs()))
    }

    /// `n / 1`.
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self(RBig::from(n.0))
    }

    /// Convenience for small literals.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Signed numerator in lowest terms.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        Integer(self.0.numerator().clone())
    }

    /// Positive denominator in lowest terms.
    #[must_use]
    pub fn denominator(&self) -> Integer {
        Integer(IBig::from(self.0.denominator().clone()))
    }

    /// Whether the denominator is 1.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// `|self|`.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// `1 / self`.
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        assert!(!self.is_zero(), "reciprocal of zero");
        Self(self.0.clone().inv())
    }

    /// -1, 0 or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.numerator().signum()
    }

    /// Whether `self < 0`.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// `self^exp`.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }

    /// Largest integer `<= self`.
    #[must_use]
    pub fn floor(&self) -> Integer {
        self.numerator().div_floor(&self.denominator())
    }

    /// Smallest integer `>= self`.
    #[must_use]
    pub fn ceil(&self) -> Integer {
        self.numerator().div_ceil(&self.denominator())
    }

    /// The rational `r` with `r^n == self`, if numerator and denominator
    /// are both perfect `n`-th powers.
    #[must_use]
    pub fn root_exact(&self, n: u32) -> Option<Self> {
        let num = self.numerator().root_exact(n)?;
        let den = self.denominator().root_exact(n)?;
        Some(Self::new(num, den))
    }

    /// Approximate value; both parts are cut to 60 bits first so huge
    /// operands do not overflow to infinity.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        let (num, den) = (self.numerator(), self.denominator());
        let cut_num = num.bit_len().saturating_sub(60);
        let cut_den = den.bit_len().saturating_sub(60);
        let scale = i32::try_from(cut_num).unwrap_or(i32::MAX) - i32::try_from(cut_den).unwrap_or(i32::MAX);
        num.shr_floor(cut_num).to_f64() / den.shr_floor(cut_den).to_f64() * 2f64.powi(scale)
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.numerator())?;
        if !self.is_integer() {
            write!(f, "/{}", self.denominator())?;
        }
        Ok(())
    }
}

newtype_binop!(Rational: Add::add, Sub::sub, Mul::mul, Div::div);

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational(-&self.0)
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::from(n))
    }
}
