//! Exact binary floating-point numbers.
//!
//! A [`Dyadic`] is a `dashu` binary float kept at unlimited precision, so
//! addition, subtraction and multiplication are exact. Every lossy
//! operation takes a precision in bits and a [`Round`] direction and runs
//! in a `dashu` context that rounds towards the requested side.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use dashu::base::{Abs, Sign};
use dashu::float::round::mode::{Down, Up};
use dashu::float::round::Round as FloatRound;
use dashu::float::{Context, FBig, Repr};
use dashu::integer::IBig;
use tertius_integers::{Integer, Rational};

/// Exact binary number `significand * 2^exponent`.
///
/// The representation is normalized (odd significand, zero has exponent
/// zero), so derived equality and ordering are those of the values.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Dyadic(Repr<2>);

/// Rounding direction for lossy operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Round {
    /// Towards negative infinity.
    Floor,
    /// Towards positive infinity.
    Ceil,
}

fn exponent_of(e: i64) -> isize {
    isize::try_from(e).unwrap_or(if e < 0 { isize::MIN } else { isize::MAX })
}

fn digits(prec: u32) -> usize {
    usize::try_from(prec.max(1)).unwrap_or(usize::MAX)
}

fn shift_usize(n: isize) -> usize {
    usize::try_from(n).unwrap_or(0)
}

/// Moves a correctly rounded result one unit in the last place further in
/// its rounding direction.
fn widen<R: FloatRound>(x: FBig<R>, dir: Round) -> Dyadic {
    let ulp = Dyadic(x.ulp().into_repr());
    let x = Dyadic(x.into_repr());
    match dir {
        Round::Floor => &x - &ulp,
        Round::Ceil => &x + &ulp,
    }
}

impl Dyadic {
    /// Creates `mantissa * 2^exponent`.
    #[must_use]
    pub fn new(mantissa: Integer, exponent: i64) -> Self {
        Self(Repr::new(mantissa.into(), exponent_of(exponent)))
    }

    /// Zero.
    #[must_use]
    pub fn zero() -> Self {
        Self(Repr::zero())
    }

    /// One.
    #[must_use]
    pub fn one() -> Self {
        Self(Repr::one())
    }

    /// Embeds a machine integer.
    #[must_use]
    pub fn from_i64(n: i64) -> Self {
        Self(Repr::new(IBig::from(n), 0))
    }

    /// Embeds an integer.
    #[must_use]
    pub fn from_integer(n: &Integer) -> Self {
        Self::new(n.clone(), 0)
    }

    /// The power of two `2^e`.
    #[must_use]
    pub fn pow2(e: i64) -> Self {
        Self(Repr::new(IBig::ONE, exponent_of(e)))
    }

    /// Converts a finite `f64` exactly. Returns `None` for NaN and infinities.
    #[must_use]
    pub fn from_f64(x: f64) -> Option<Self> {
        if !x.is_finite() {
            return None;
        }
        Repr::<2>::try_from(x).ok().map(Self)
    }

    /// Returns true for zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns -1, 0 or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        match (self.is_zero(), self.0.sign()) {
            (true, _) => 0,
            (false, Sign::Positive) => 1,
            (false, Sign::Negative) => -1,
        }
    }

    /// Returns true if strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.signum() < 0
    }

    /// Returns true if strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.signum() > 0
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(Repr::new(self.0.significand().clone().abs(), self.0.exponent()))
    }

    /// Number of bits in the significand.
    #[must_use]
    pub fn bits(&self) -> usize {
        self.0.digits()
    }

    /// Smallest `m` with `|self| < 2^m`, or `None` for zero.
    #[must_use]
    pub fn mag(&self) -> Option<i64> {
        (!self.is_zero()).then(|| {
            let top = self.0.exponent().saturating_add_unsigned(self.bits());
            i64::try_from(top).unwrap_or(i64::MAX)
        })
    }

    /// Multiplies by `2^e` exactly.
    #[must_use]
    pub fn mul_2exp(&self, e: i64) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let exponent = self.0.exponent().saturating_add(exponent_of(e));
        Self(Repr::new(self.0.significand().clone(), exponent))
    }

    /// Rounds to at most `prec` significand bits in the given direction.
    #[must_use]
    pub fn round(&self, prec: u32, dir: Round) -> Self {
        let p = digits(prec);
        let zero = Repr::zero();
        let rounded = match dir {
            Round::Floor => Context::<Down>::new(p).add(&self.0, &zero).value().into_repr(),
            Round::Ceil => Context::<Up>::new(p).add(&self.0, &zero).value().into_repr(),
        };
        Self(rounded)
    }

    /// Rounds towards negative infinity.
    #[must_use]
    pub fn round_floor(&self, prec: u32) -> Self {
        self.round(prec, Round::Floor)
    }

    /// Rounds towards positive infinity.
    #[must_use]
    pub fn round_ceil(&self, prec: u32) -> Self {
        self.round(prec, Round::Ceil)
    }

    /// Bound on `a / b` on the `dir` side, accurate to about `prec` bits.
    ///
    /// # Panics
    ///
    /// Panics if `b` is zero.
    #[must_use]
    pub fn div(a: &Self, b: &Self, prec: u32, dir: Round) -> Self {
        assert!(!b.is_zero(), "dyadic division by zero");
        if a.is_zero() {
            return Self::zero();
        }
        let p = digits(prec);
        match dir {
            Round::Floor => widen(Context::<Down>::new(p).div(&a.0, &b.0).value(), dir),
            Round::Ceil => widen(Context::<Up>::new(p).div(&a.0, &b.0).value(), dir),
        }
    }

    /// Bound on the square root of a non-negative value on the `dir` side.
    ///
    /// # Panics
    ///
    /// Panics if the value is negative.
    #[must_use]
    pub fn sqrt(&self, prec: u32, dir: Round) -> Self {
        assert!(!self.is_negative(), "square root of a negative dyadic");
        if self.is_zero() {
            return Self::zero();
        }
        let p = digits(prec);
        let root = match dir {
            Round::Floor => widen(Context::<Down>::new(p).sqrt(&self.0).value(), dir),
            Round::Ceil => widen(Context::<Up>::new(p).sqrt(&self.0).value(), dir),
        };
        if root.is_negative() {
            Self::zero()
        } else {
            root
        }
    }

    /// Bound on π on the `dir` side, accurate to about `prec` bits.
    #[must_use]
    pub fn pi(prec: u32, dir: Round) -> Self {
        let p = digits(prec);
        match dir {
            Round::Floor => widen(Context::<Down>::new(p).pi::<2>().value(), dir),
            Round::Ceil => widen(Context::<Up>::new(p).pi::<2>().value(), dir),
        }
    }

    /// Bound on a rational on the `dir` side, accurate to about `prec` bits.
    #[must_use]
    pub fn from_rational(q: &Rational, prec: u32, dir: Round) -> Self {
        Self::div(
            &Self::from_integer(&q.numerator()),
            &Self::from_integer(&q.denominator()),
            prec,
            dir,
        )
    }

    /// `(significand, exponent)` with the significand as an [`Integer`].
    fn parts(&self) -> (Integer, isize) {
        (Integer::from(self.0.significand().clone()), self.0.exponent())
    }

    /// Returns the exact rational value.
    #[must_use]
    pub fn to_rational(&self) -> Rational {
        let (m, e) = self.parts();
        if e >= 0 {
            Rational::from_integer(m.shl(shift_usize(e)))
        } else {
            Rational::new(m, Integer::new(1).shl(shift_usize(-e)))
        }
    }

    /// Largest integer not exceeding the value.
    #[must_use]
    pub fn floor(&self) -> Integer {
        let (m, e) = self.parts();
        if e >= 0 {
            m.shl(shift_usize(e))
        } else {
            m.shr_floor(shift_usize(-e))
        }
    }

    /// Smallest integer not below the value.
    #[must_use]
    pub fn ceil(&self) -> Integer {
        -(-self).floor()
    }

    /// Nearest `f64`; overflows to an infinity.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().value()
    }

    /// Returns the larger value.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Ord::max(self, other)
    }

    /// Returns the smaller value.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Ord::min(self, other)
    }
}

impl Default for Dyadic {
    fn default() -> Self {
        Self::zero()
    }
}

impl Hash for Dyadic {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.significand().hash(state);
        self.0.exponent().hash(state);
    }
}

impl Add for &Dyadic {
    type Output = Dyadic;

    fn add(self, other: Self) -> Dyadic {
        Dyadic(Context::<Down>::new(0).add(&self.0, &other.0).value().into_repr())
    }
}

impl Add for Dyadic {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        &self + &other
    }
}

impl Sub for &Dyadic {
    type Output = Dyadic;

    fn sub(self, other: Self) -> Dyadic {
        Dyadic(Context::<Down>::new(0).sub(&self.0, &other.0).value().into_repr())
    }
}

impl Sub for Dyadic {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        &self - &other
    }
}

impl Mul for &Dyadic {
    type Output = Dyadic;

    fn mul(self, other: Self) -> Dyadic {
        Dyadic(Context::<Down>::new(0).mul(&self.0, &other.0).value().into_repr())
    }
}

impl Mul for Dyadic {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        &self * &other
    }
}

impl Neg for &Dyadic {
    type Output = Dyadic;

    fn neg(self) -> Dyadic {
        Dyadic(-self.0.clone())
    }
}

impl Neg for Dyadic {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl From<i64> for Dyadic {
    fn from(n: i64) -> Self {
        Self::from_i64(n)
    }
}

impl fmt::Debug for Dyadic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*2^{}", self.0.significand(), self.0.exponent())
    }
}

impl fmt::Display for Dyadic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}
