//! Complex balls.
//!
//! An [`Acb`] is a rectangle: a real ball for the real part and one for the
//! imaginary part. A component that is exactly zero stays exactly zero
//! under exact maps (negation, conjugation, multiplication by `i` and by
//! real exact scalars), which lets callers certify that a value is real or
//! purely imaginary.

use std::fmt;

use tertius_integers::{Integer, Rational};

use crate::approx::approx_root;
use crate::arb::Arb;
use crate::constants::sin_cos_pi;
use crate::dyadic::Dyadic;

/// A complex ball `re + i im`.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Acb {
    re: Arb,
    im: Arb,
}

impl Acb {
    /// Creates a complex ball from its parts.
    #[must_use]
    pub fn new(re: Arb, im: Arb) -> Self {
        Self { re, im }
    }

    /// A real ball.
    #[must_use]
    pub fn from_arb(re: Arb) -> Self {
        Self { re, im: Arb::zero() }
    }

    /// An exact point.
    #[must_use]
    pub fn exact(re: Dyadic, im: Dyadic) -> Self {
        Self::new(Arb::exact(re), Arb::exact(im))
    }

    /// The exact point 0.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_arb(Arb::zero())
    }

    /// The exact point 1.
    #[must_use]
    pub fn one() -> Self {
        Self::from_arb(Arb::one())
    }

    /// The exact point `i`.
    #[must_use]
    pub fn i() -> Self {
        Self::new(Arb::zero(), Arb::one())
    }

    /// Exact ball for an integer.
    #[must_use]
    pub fn from_integer(n: &Integer) -> Self {
        Self::from_arb(Arb::from_integer(n))
    }

    /// Ball containing a rational number.
    #[must_use]
    pub fn from_rational(q: &Rational, prec: u32) -> Self {
        Self::from_arb(Arb::from_rational(q, prec))
    }

    /// The real part.
    #[must_use]
    pub fn re(&self) -> &Arb {
        &self.re
    }

    /// The imaginary part.
    #[must_use]
    pub fn im(&self) -> &Arb {
        &self.im
    }

    /// The midpoint as an exact ball.
    #[must_use]
    pub fn mid(&self) -> Self {
        Self::exact(self.re.mid().clone(), self.im.mid().clone())
    }

    /// Returns true if both radii are zero.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.re.is_exact() && self.im.is_exact()
    }

    /// Returns true if the imaginary part is exactly zero.
    #[must_use]
    pub fn is_real(&self) -> bool {
        self.im.is_zero()
    }

    /// Returns true if the real part is exactly zero.
    #[must_use]
    pub fn is_imaginary(&self) -> bool {
        self.re.is_zero()
    }

    /// Returns true if this is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    /// Returns true if zero lies in the ball.
    #[must_use]
    pub fn contains_zero(&self) -> bool {
        self.re.contains_zero() && self.im.contains_zero()
    }

    /// Returns true if `other` is a subset of this ball.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.re.contains(&other.re) && self.im.contains(&other.im)
    }

    /// Returns true if `other` lies in the interior of this ball.
    ///
    /// A component that is an exact point in both balls counts as interior,
    /// so real balls can be compared along the real line.
    #[must_use]
    pub fn strictly_contains(&self, other: &Self) -> bool {
        let part = |a: &Arb, b: &Arb| a.strictly_contains(b) || (a.is_exact() && a == b);
        part(&self.re, &other.re) && part(&self.im, &other.im)
    }

    /// Returns true if the balls intersect.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.re.overlaps(&other.re) && self.im.overlaps(&other.im)
    }

    /// Smallest ball containing both balls.
    #[must_use]
    pub fn union(&self, other: &Self, prec: u32) -> Self {
        Self::new(self.re.union(&other.re, prec), self.im.union(&other.im, prec))
    }

    /// Negation (exact).
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(self.re.neg(), self.im.neg())
    }

    /// Complex conjugate (exact).
    #[must_use]
    pub fn conj(&self) -> Self {
        Self::new(self.re.clone(), self.im.neg())
    }

    /// Multiplication by `i` (exact).
    #[must_use]
    pub fn mul_i(&self) -> Self {
        Self::new(self.im.neg(), self.re.clone())
    }

    /// Division by `i` (exact).
    #[must_use]
    pub fn div_i(&self) -> Self {
        Self::new(self.im.clone(), self.re.neg())
    }

    /// Multiplies by `2^e` (exact).
    #[must_use]
    pub fn mul_2exp(&self, e: i64) -> Self {
        Self::new(self.re.mul_2exp(e), self.im.mul_2exp(e))
    }

    /// Sum.
    #[must_use]
    pub fn add(&self, other: &Self, prec: u32) -> Self {
        Self::new(self.re.add(&other.re, prec), self.im.add(&other.im, prec))
    }

    /// Difference.
    #[must_use]
    pub fn sub(&self, other: &Self, prec: u32) -> Self {
        Self::new(self.re.sub(&other.re, prec), self.im.sub(&other.im, prec))
    }

    /// Product with a real ball.
    #[must_use]
    pub fn mul_arb(&self, x: &Arb, prec: u32) -> Self {
        Self::new(self.re.mul(x, prec), self.im.mul(x, prec))
    }

    /// Product.
    #[must_use]
    pub fn mul(&self, other: &Self, prec: u32) -> Self {
        if other.is_real() {
            return self.mul_arb(&other.re, prec);
        }
        if self.is_real() {
            return other.mul_arb(&self.re, prec);
        }
        let (a, b, c, d) = (&self.re, &self.im, &other.re, &other.im);
        Self::new(
            a.mul(c, prec).sub(&b.mul(d, prec), prec),
            a.mul(d, prec).add(&b.mul(c, prec), prec),
        )
    }

    /// Square.
    #[must_use]
    pub fn sqr(&self, prec: u32) -> Self {
        if self.is_real() {
            return Self::from_arb(self.re.sqr(prec));
        }
        let (a, b) = (&self.re, &self.im);
        Self::new(
            a.sqr(prec).sub(&b.sqr(prec), prec),
            a.mul(b, prec).mul_2exp(1),
        )
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

    /// `|z|^2` as a real ball.
    #[must_use]
    pub fn abs2(&self, prec: u32) -> Arb {
        self.re.sqr(prec).add(&self.im.sqr(prec), prec)
    }

    /// `|z|` as a real ball.
    #[must_use]
    pub fn abs(&self, prec: u32) -> Arb {
        if self.is_real() {
            return self.re.abs();
        }
        if self.is_imaginary() {
            return self.im.abs();
        }
        // The squared modulus is never entirely negative.
        self.abs2(prec).sqrt(prec).unwrap_or_else(Arb::zero)
    }

    /// Reciprocal, or `None` if the ball may contain zero.
    #[must_use]
    pub fn inv(&self, prec: u32) -> Option<Self> {
        if self.is_real() {
            return Some(Self::from_arb(self.re.inv(prec)?));
        }
        if self.is_imaginary() {
            return Some(Self::new(Arb::zero(), self.im.inv(prec)?.neg()));
        }
        let d = self.abs2(prec).inv(prec)?;
        Some(self.conj().mul_arb(&d, prec))
    }

    /// Quotient, or `None` if the divisor may contain zero.
    #[must_use]
    pub fn div(&self, other: &Self, prec: u32) -> Option<Self> {
        if other.is_real() {
            let inv = other.re.inv(prec)?;
            return Some(self.mul_arb(&inv, prec));
        }
        Some(self.mul(&other.inv(prec)?, prec))
    }

    /// Principal `n`-th root.
    ///
    /// Returns `None` when the ball touches the branch cut along the
    /// non-positive real axis, or when the working precision is too low to
    /// certify the root. The result contains the principal root of every
    /// point of the input.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn root(&self, n: u32, prec: u32) -> Option<Self> {
        assert!(n > 0, "zeroth root");
        if n == 1 {
            return Some(self.clone());
        }
        if self.im.contains_zero() && !self.re.is_positive() {
            return None;
        }
        if self.is_real() {
            let x = &self.re;
            if n == 2 {
                return x.sqrt(prec).map(Self::from_arb);
            }
        }

        let w0 = approx_root(&self.mid(), n, prec + 16);
        let wp = prec + 16;
        let n_arb = Arb::from_i64(i64::from(n));

        // Interval Newton for t^n - z: the residual carries the radius of z.
        let residual = w0.pow(n, wp).sub(self, wp);
        let w_mag = w0.mag_upper()?;
        let res_mag = residual.mag_upper().unwrap_or(w_mag - i64::from(wp));
        let mut rad_exp = (res_mag - (i64::from(n) - 1) * (w_mag - 1) + 1)
            .max(w_mag - i64::from(prec));

        for _ in 0..8 {
            let rho = Dyadic::pow2(rad_exp);
            let ball = Self::new(
                Arb::new(w0.re.mid().clone(), rho.clone()),
                Arb::new(w0.im.mid().clone(), rho),
            );
            let deriv = ball.pow(n - 1, wp).mul_arb(&n_arb, wp);
            if let Some(step) = residual.div(&deriv, wp) {
                let t = w0.sub(&step, wp);
                if ball.strictly_contains(&t) {
                    return t.in_principal_sector(n, wp).then_some(t);
                }
            }
            rad_exp += 2;
        }
        None
    }

    /// Returns true if every point has argument in `(-π/n, π/n)`.
    fn in_principal_sector(&self, n: u32, prec: u32) -> bool {
        let (s, c) = sin_cos_pi(&Rational::from_i64(1, i64::from(n)), prec);
        let rot = Self::new(c, s);
        // arg(t) + π/n in (0, π) and arg(t) - π/n in (-π, 0).
        self.mul(&rot, prec).im.is_positive() && self.mul(&rot.conj(), prec).im.is_negative()
    }

    /// Smallest `m` with `|re|, |im| <= 2^m` everywhere, or `None` for exact zero.
    #[must_use]
    pub fn mag_upper(&self) -> Option<i64> {
        match (self.re.mag_upper(), self.im.mag_upper()) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        }
    }

    /// Largest radius magnitude over the two parts, or `None` if exact.
    #[must_use]
    pub fn rad_mag(&self) -> Option<i64> {
        match (self.re.rad().mag(), self.im.rad().mag()) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        }
    }

    /// Approximate number of correct bits relative to the modulus of the midpoint.
    #[must_use]
    pub fn rel_accuracy_bits(&self) -> i64 {
        let Some(r) = self.rad_mag() else {
            return i64::MAX;
        };
        let m = match (self.re.mid().mag(), self.im.mid().mag()) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        m.map_or(-r, |m| m - r)
    }

    /// Midpoint as a pair of `f64`.
    #[must_use]
    pub fn to_f64(&self) -> (f64, f64) {
        (self.re.to_f64(), self.im.to_f64())
    }
}

impl From<Arb> for Acb {
    fn from(re: Arb) -> Self {
        Self::from_arb(re)
    }
}

impl fmt::Debug for Acb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + {:?}i", self.re, self.im)
    }
}

impl fmt::Display for Acb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}i", self.re, self.im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREC: u32 = 96;

    fn point(re: i64, im: i64) -> Acb {
        Acb::exact(Dyadic::from_i64(re), Dyadic::from_i64(im))
    }

    #[test]
    fn test_mul_and_conj() {
        // (1 + 2i)(3 - i) = 5 + 5i
        assert_eq!(point(1, 2).mul(&point(3, -1), PREC), point(5, 5));
        assert_eq!(point(1, 2).conj(), point(1, -2));
        assert_eq!(point(1, 2).mul_i(), point(-2, 1));
        assert_eq!(point(1, 2).mul_i().div_i(), point(1, 2));
    }

    #[test]
    fn test_inverse() {
        let z = point(3, 4);
        let w = z.inv(PREC).unwrap();
        assert!(w.mul(&z, PREC).contains(&Acb::one()));
        assert!(Acb::new(Arb::new(Dyadic::zero(), Dyadic::one()), Arb::zero())
            .inv(PREC)
            .is_none());
        assert!(Acb::i().inv(PREC).unwrap().contains(&point(0, -1)));
    }

    #[test]
    fn test_exact_zero_parts_survive() {
        let real = Acb::from_rational(&Rational::from_i64(1, 3), PREC);
        assert!(real.sqr(PREC).is_real());
        assert!(real.mul_i().is_imaginary());
        assert!(real.pow(5, PREC).is_real());
    }

    #[test]
    fn test_abs() {
        let r = point(3, 4).abs(PREC);
        assert!(r.contains_point(&Dyadic::from_i64(5)));
        assert_eq!(point(-7, 0).abs(PREC), Arb::from_i64(7));
    }

    #[test]
    fn test_principal_square_root() {
        // sqrt(-3 + 4i) = 1 + 2i
        let r = point(-3, 4).root(2, PREC).unwrap();
        assert!(r.contains(&point(1, 2)));
        // sqrt(-3 - 4i) = 1 - 2i
        let r = point(-3, -4).root(2, PREC).unwrap();
        assert!(r.contains(&point(1, -2)));
    }

    #[test]
    fn test_principal_cube_root() {
        // (1 + i)^3 = -2 + 2i, and arg(1 + i) = π/4 < π/3.
        let r = point(-2, 2).root(3, PREC).unwrap();
        assert!(r.contains(&point(1, 1)));
        assert!(r.rel_accuracy_bits() > 60);
        let r = point(8, 0).root(3, PREC).unwrap();
        assert!(r.contains(&point(2, 0)));
    }

    #[test]
    fn test_root_rejects_branch_cut() {
        assert!(point(-4, 0).root(2, PREC).is_none());
        assert!(Acb::zero().root(3, PREC).is_none());
    }
}
