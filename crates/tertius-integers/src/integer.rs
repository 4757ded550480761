//! Big integers.
//!
//! [`Integer`] is a thin newtype over `dashu`'s `IBig`. Besides ring
//! arithmetic it carries the operations the rest of the workspace leans on:
//! directed division and shifts for dyadic rounding, and integer roots for
//! recognising perfect powers.

use dashu::base::{Abs, BitTest, Gcd, Signed as DashuSigned, UnsignedAbs};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

/// An arbitrary precision signed integer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(pub(crate) IBig);

impl Integer {
    /// Lifts a machine integer.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// `|self|`.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// -1, 0 or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        match (self.is_zero(), self.is_negative()) {
            (true, _) => 0,
            (false, true) => -1,
            (false, false) => 1,
        }
    }

    /// Whether `self < 0`.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Whether `self > 0`.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        DashuSigned::is_positive(&self.0)
    }

    /// Bit length of `|self|`; zero has length 0.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.0.bit_len()
    }

    /// Index of the lowest set bit of `|self|`, `None` for zero.
    #[must_use]
    pub fn trailing_zeros(&self) -> Option<usize> {
        let magnitude = self.0.clone().unsigned_abs();
        (0..magnitude.bit_len()).find(|&i| magnitude.bit(i))
    }

    /// Nonnegative greatest common divisor, with `gcd(0, 0) = 0`.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        match (self.is_zero(), other.is_zero()) {
            (_, true) => self.abs(),
            (true, false) => other.abs(),
            (false, false) => Self(IBig::from(self.0.clone().gcd(other.0.clone()))),
        }
    }

    /// Nonnegative least common multiple; zero if either side is zero.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        (self.div_exact(&self.gcd(other)) * other).abs()
    }

    /// `Some` when the value fits an `i64`.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Nearest-ish `f64` from the top 62 bits. Overflows to infinity.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> f64 {
        let excess = self.bit_len().saturating_sub(62);
        let top = self.shr_floor(excess).to_i64().map_or(0.0, |v| v as f64);
        if excess == 0 {
            top
        } else {
            top * 2f64.powi(i32::try_from(excess).unwrap_or(i32::MAX))
        }
    }

    /// `self^exp`.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }

    /// `self * 2^bits`.
    #[must_use]
    pub fn shl(&self, bits: usize) -> Self {
        Self(self.0.clone() << bits)
    }

    /// `floor(self / 2^bits)`.
    #[must_use]
    pub fn shr_floor(&self, bits: usize) -> Self {
        Self(self.0.clone() >> bits)
    }

    /// `ceil(self / 2^bits)`.
    #[must_use]
    pub fn shr_ceil(&self, bits: usize) -> Self {
        -(-self).shr_floor(bits)
    }

    /// `floor(self / other)`.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    #[must_use]
    pub fn div_floor(&self, other: &Self) -> Self {
        assert!(!other.is_zero(), "division by zero");
        // IBig division truncates toward zero
        let q = Self(&self.0 / &other.0);
        let exact = (&self.0 % &other.0).is_zero();
        if !exact && self.is_negative() != other.is_negative() {
            q - Self::one()
        } else {
            q
        }
    }

    /// `ceil(self / other)`.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    #[must_use]
    pub fn div_ceil(&self, other: &Self) -> Self {
        -(-self).div_floor(other)
    }

    /// Whether `other | self`. Only zero is divisible by zero.
    #[must_use]
    pub fn is_divisible_by(&self, other: &Self) -> bool {
        if other.is_zero() {
            self.is_zero()
        } else {
            (&self.0 % &other.0).is_zero()
        }
    }

    /// `self / other` where `other | self` is known.
    #[must_use]
    pub fn div_exact(&self, other: &Self) -> Self {
        debug_assert!(self.is_divisible_by(other), "inexact division");
        Self(&self.0 / &other.0)
    }

    /// `floor(self^(1/n))`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero or `self` is negative.
    #[must_use]
    pub fn root_floor(&self, n: u32) -> Self {
        assert!(n > 0, "zeroth root");
        assert!(!self.is_negative(), "root of a negative integer");
        if n == 1 || self.bit_len() <= 1 {
            return self.clone();
        }
        let degree = Self::from(n);
        let lower = Self::from(n - 1);
        // Newton from above is monotone decreasing until it passes the root
        let mut x = Self::one().shl(self.bit_len() / n as usize + 1);
        loop {
            let step = (&lower * &x + self.div_floor(&x.pow(n - 1))).div_floor(&degree);
            if step >= x {
                return x;
            }
            x = step;
        }
    }

    /// The integer `r` with `r^n == self`, if any. Negative values have
    /// roots only for odd `n`.
    #[must_use]
    pub fn root_exact(&self, n: u32) -> Option<Self> {
        match (n, self.is_negative()) {
            (0, _) => None,
            (_, true) if n % 2 == 0 => None,
            (_, true) => (-self).root_exact(n).map(|r| -r),
            _ => {
                let r = self.root_floor(n);
                (r.pow(n) == *self).then_some(r)
            }
        }
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0 == IBig::ZERO
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Integer {
    type Err = dashu::base::error::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IBig::from_str(s).map(Self)
    }
}

/// Implements a binary operator for every owned/borrowed operand pairing
/// of a newtype whose inner type already supports all four.
macro_rules! newtype_binop {
    ($ty:ident: $($tr:ident::$m:ident),+) => {$(
        impl $tr for $ty {
            type Output = $ty;
            fn $m(self, rhs: $ty) -> $ty {
                $ty($tr::$m(self.0, rhs.0))
            }
        }

        impl $tr<&$ty> for $ty {
            type Output = $ty;
            fn $m(self, rhs: &$ty) -> $ty {
                $ty($tr::$m(self.0, &rhs.0))
            }
        }

        impl $tr<$ty> for &$ty {
            type Output = $ty;
            fn $m(self, rhs: $ty) -> $ty {
                $ty($tr::$m(&self.0, rhs.0))
            }
        }

        impl $tr for &$ty {
            type Output = $ty;
            fn $m(self, rhs: &$ty) -> $ty {
                $ty($tr::$m(&self.0, &rhs.0))
            }
        }
    )+};
}

pub(crate) use newtype_binop;

newtype_binop!(Integer: Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem);

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Integer {
        Integer(-&self.0)
    }
}

macro_rules! from_primitive {
    ($($t:ty),+) => {$(
        impl From<$t> for Integer {
            fn from(value: $t) -> Self {
                Self(IBig::from(value))
            }
        }
    )+};
}

from_primitive!(i32, i64, u32, u64, usize);

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

impl From<Integer> for IBig {
    fn from(value: Integer) -> Self {
        value.0
    }
}

/// Greatest common divisor of machine words, with `gcd(0, 0) = 0`.
#[must_use]
pub fn small_gcd(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        a | b
    } else {
        a.gcd(b)
    }
}
