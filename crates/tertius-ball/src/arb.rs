//! Real balls.
//!
//! An [`Arb`] is a midpoint with a non-negative radius and represents every
//! real number in `[mid - rad, mid + rad]`. Each operation returns a ball
//! that contains the image of every point of its inputs: the midpoint is
//! rounded to the working precision and the rounding error is added to the
//! radius, which itself is kept to a few significant bits rounded upwards.

use std::fmt;

use tertius_integers::{Integer, Rational};

use crate::dyadic::{Dyadic, Round};

/// Significant bits kept in radii.
pub const RAD_PREC: u32 = 30;

/// A real ball `[mid ± rad]`.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Arb {
    mid: Dyadic,
    rad: Dyadic,
}

impl Arb {
    /// Creates a ball; the radius is made non-negative and rounded up.
    #[must_use]
    pub fn new(mid: Dyadic, rad: Dyadic) -> Self {
        Self {
            mid,
            rad: rad.abs().round_ceil(RAD_PREC),
        }
    }

    /// An exact ball.
    #[must_use]
    pub fn exact(mid: Dyadic) -> Self {
        Self {
            mid,
            rad: Dyadic::zero(),
        }
    }

    /// The exact ball 0.
    #[must_use]
    pub fn zero() -> Self {
        Self::exact(Dyadic::zero())
    }

    /// The exact ball 1.
    #[must_use]
    pub fn one() -> Self {
        Self::exact(Dyadic::one())
    }

    /// Exact ball for a machine integer.
    #[must_use]
    pub fn from_i64(n: i64) -> Self {
        Self::exact(Dyadic::from_i64(n))
    }

    /// Exact ball for an integer.
    #[must_use]
    pub fn from_integer(n: &Integer) -> Self {
        Self::exact(Dyadic::from_integer(n))
    }

    /// Ball containing a rational number, exact when the denominator is a
    /// power of two.
    #[must_use]
    pub fn from_rational(q: &Rational, prec: u32) -> Self {
        let lo = Dyadic::from_rational(q, prec, Round::Floor);
        let hi = Dyadic::from_rational(q, prec, Round::Ceil);
        Self::from_endpoints(&lo, &hi, prec)
    }

    /// Smallest ball at the given precision containing `[lo, hi]`.
    #[must_use]
    pub fn from_endpoints(lo: &Dyadic, hi: &Dyadic, prec: u32) -> Self {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let exact_mid = (lo + hi).mul_2exp(-1);
        let mid = exact_mid.round_floor(prec);
        let rad = (hi - &mid).max(&mid - lo);
        Self::new(mid, rad)
    }

    /// Builds a rounded ball around an exactly computed midpoint.
    fn rounded(exact_mid: &Dyadic, rad: Dyadic, prec: u32) -> Self {
        let mid = exact_mid.round_floor(prec);
        let err = exact_mid - &mid;
        Self::new(mid, &rad + &err)
    }

    /// The midpoint.
    #[must_use]
    pub fn mid(&self) -> &Dyadic {
        &self.mid
    }

    /// The radius.
    #[must_use]
    pub fn rad(&self) -> &Dyadic {
        &self.rad
    }

    /// Exact lower endpoint.
    #[must_use]
    pub fn lower(&self) -> Dyadic {
        &self.mid - &self.rad
    }

    /// Exact upper endpoint.
    #[must_use]
    pub fn upper(&self) -> Dyadic {
        &self.mid + &self.rad
    }

    /// Returns true if the radius is zero.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.rad.is_zero()
    }

    /// Returns true if this is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.is_exact() && self.mid.is_zero()
    }

    /// Returns true if zero lies in the ball.
    #[must_use]
    pub fn contains_zero(&self) -> bool {
        self.mid.abs() <= self.rad
    }

    /// Returns true if every point is positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.lower().is_positive()
    }

    /// Returns true if every point is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.upper().is_negative()
    }

    /// Returns true if the point lies in the ball.
    #[must_use]
    pub fn contains_point(&self, x: &Dyadic) -> bool {
        self.lower() <= *x && *x <= self.upper()
    }

    /// Returns true if `other` is a subset of this ball.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.lower() <= other.lower() && other.upper() <= self.upper()
    }

    /// Returns true if `other` lies in the interior of this ball.
    #[must_use]
    pub fn strictly_contains(&self, other: &Self) -> bool {
        self.lower() < other.lower() && other.upper() < self.upper()
    }

    /// Returns true if the balls intersect.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.lower() <= other.upper() && other.lower() <= self.upper()
    }

    /// Smallest ball containing both balls.
    #[must_use]
    pub fn union(&self, other: &Self, prec: u32) -> Self {
        let lo = self.lower().min(other.lower());
        let hi = self.upper().max(other.upper());
        Self::from_endpoints(&lo, &hi, prec)
    }

    /// Negation (exact).
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            mid: -&self.mid,
            rad: self.rad.clone(),
        }
    }

    /// A ball containing the absolute values of all points.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            mid: self.mid.abs(),
            rad: self.rad.clone(),
        }
    }

    /// Multiplies by `2^e` (exact).
    #[must_use]
    pub fn mul_2exp(&self, e: i64) -> Self {
        Self {
            mid: self.mid.mul_2exp(e),
            rad: self.rad.mul_2exp(e),
        }
    }

    /// Adds `err` to the radius.
    #[must_use]
    pub fn add_error(&self, err: &Dyadic) -> Self {
        Self::new(self.mid.clone(), &self.rad + &err.abs())
    }

    /// Sum.
    #[must_use]
    pub fn add(&self, other: &Self, prec: u32) -> Self {
        Self::rounded(&(&self.mid + &other.mid), &self.rad + &other.rad, prec)
    }

    /// Difference.
    #[must_use]
    pub fn sub(&self, other: &Self, prec: u32) -> Self {
        Self::rounded(&(&self.mid - &other.mid), &self.rad + &other.rad, prec)
    }

    /// Product.
    #[must_use]
    pub fn mul(&self, other: &Self, prec: u32) -> Self {
        let rad = &(&(&self.mid.abs() * &other.rad) + &(&other.mid.abs() * &self.rad))
            + &(&self.rad * &other.rad);
        Self::rounded(&(&self.mid * &other.mid), rad, prec)
    }

    /// Square.
    #[must_use]
    pub fn sqr(&self, prec: u32) -> Self {
        self.mul(self, prec)
    }

    /// Non-negative integer power by repeated squaring.
    #[must_use]
    pub fn pow(&self, mut n: u32, prec: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        while n > 0 {
            if n & 1 == 1 {
                result = result.mul(&base, prec);
            }
            n >>= 1;
            if n > 0 {
                base = base.sqr(prec);
            }
        }
        result
    }

    /// Reciprocal, or `None` if the ball contains zero.
    #[must_use]
    pub fn inv(&self, prec: u32) -> Option<Self> {
        if self.contains_zero() {
            return None;
        }
        // 1/x is monotone on an interval avoiding zero.
        let one = Dyadic::one();
        let (lo, hi) = (self.lower(), self.upper());
        let a = Dyadic::div(&one, &hi, prec, Round::Floor);
        let b = Dyadic::div(&one, &lo, prec, Round::Ceil);
        Some(Self::from_endpoints(&a, &b, prec))
    }

    /// Quotient, or `None` if the divisor contains zero.
    #[must_use]
    pub fn div(&self, other: &Self, prec: u32) -> Option<Self> {
        if other.is_exact() && self.is_exact() {
            if other.mid.is_zero() {
                return None;
            }
            let lo = Dyadic::div(&self.mid, &other.mid, prec, Round::Floor);
            let hi = Dyadic::div(&self.mid, &other.mid, prec, Round::Ceil);
            return Some(Self::from_endpoints(&lo, &hi, prec));
        }
        Some(self.mul(&other.inv(prec)?, prec))
    }

    /// Square root of the non-negative part of the ball, or `None` if the
    /// ball is entirely negative.
    #[must_use]
    pub fn sqrt(&self, prec: u32) -> Option<Self> {
        let hi = self.upper();
        if hi.is_negative() {
            return None;
        }
        let lo = self.lower().max(Dyadic::zero());
        Some(Self::from_endpoints(
            &lo.sqrt(prec, Round::Floor),
            &hi.sqrt(prec, Round::Ceil),
            prec,
        ))
    }

    /// Smallest `m` with `|x| <= 2^m` for every point, or `None` for exact zero.
    #[must_use]
    pub fn mag_upper(&self) -> Option<i64> {
        (&self.mid.abs() + &self.rad).mag()
    }

    /// Approximate number of correct bits relative to the midpoint.
    ///
    /// Exact balls report `i64::MAX`; balls with zero midpoint report the
    /// negated magnitude of the radius.
    #[must_use]
    pub fn rel_accuracy_bits(&self) -> i64 {
        match (self.mid.mag(), self.rad.mag()) {
            (_, None) => i64::MAX,
            (Some(m), Some(r)) => m - r,
            (None, Some(r)) => -r,
        }
    }

    /// Midpoint as `f64`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.mid.to_f64()
    }
}

impl From<Dyadic> for Arb {
    fn from(d: Dyadic) -> Self {
        Self::exact(d)
    }
}

impl fmt::Debug for Arb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?} +/- {:?}]", self.mid, self.rad)
    }
}

impl fmt::Display for Arb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} +/- {:e}]", self.mid.to_f64(), self.rad.to_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREC: u32 = 64;

    fn third() -> Arb {
        Arb::from_rational(&Rational::from_i64(1, 3), PREC)
    }

    #[test]
    fn test_rational_enclosure() {
        let x = third();
        let q = Rational::from_i64(1, 3);
        assert!(x.lower().to_rational() <= q && q <= x.upper().to_rational());
        assert!(!x.is_exact());
        assert!(Arb::from_rational(&Rational::from_i64(3, 8), PREC).is_exact());
    }

    #[test]
    fn test_arithmetic_contains_result() {
        let x = third();
        let three = Arb::from_i64(3);
        assert!(x.mul(&three, PREC).contains_point(&Dyadic::one()));
        let s = x.add(&x, PREC).add(&x, PREC);
        assert!(s.contains_point(&Dyadic::one()));
        assert!(x.sub(&x, PREC).contains_zero());
    }

    #[test]
    fn test_inverse() {
        let x = Arb::from_i64(3).inv(PREC).unwrap();
        assert!(x.overlaps(&third()));
        assert!(Arb::new(Dyadic::one(), Dyadic::from_i64(2)).inv(PREC).is_none());
        let neg = Arb::from_i64(-4).inv(PREC).unwrap();
        assert!(neg.contains_point(&-Dyadic::pow2(-2)));
    }

    #[test]
    fn test_sqrt() {
        let r = Arb::from_i64(2).sqrt(PREC).unwrap();
        assert!(r.sqr(PREC).contains_point(&Dyadic::from_i64(2)));
        assert!(r.rel_accuracy_bits() > 55);
        assert!(Arb::from_i64(-1).sqrt(PREC).is_none());
        let straddle = Arb::new(Dyadic::zero(), Dyadic::one()).sqrt(PREC).unwrap();
        assert!(straddle.contains_point(&Dyadic::zero()));
        assert!(straddle.contains_point(&Dyadic::one()));
    }

    #[test]
    fn test_containment() {
        let big = Arb::new(Dyadic::zero(), Dyadic::from_i64(4));
        let small = Arb::new(Dyadic::one(), Dyadic::one());
        assert!(big.contains(&small));
        assert!(big.strictly_contains(&small));
        assert!(!small.contains(&big));
        let u = small.union(&Arb::from_i64(10), PREC);
        assert!(u.contains(&small) && u.contains_point(&Dyadic::from_i64(10)));
    }

    #[test]
    fn test_pow() {
        let x = Arb::from_i64(3).pow(5, PREC);
        assert_eq!(x, Arb::from_i64(243));
        assert!(Arb::from_i64(7).pow(0, PREC).is_exact());
    }
}
