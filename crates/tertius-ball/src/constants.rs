//! π and trigonometric values at rational multiples of π.

use num_traits::Zero;
use tertius_integers::Rational;

use crate::acb::Acb;
use crate::arb::Arb;
use crate::dyadic::{Dyadic, Round};

/// Guard bits for π and the series evaluations.
const GUARD_BITS: u32 = 16;

/// A ball containing π with about `prec` bits of accuracy.
#[must_use]
pub fn pi(prec: u32) -> Arb {
    let wp = prec + GUARD_BITS;
    Arb::from_endpoints(
        &Dyadic::pi(wp, Round::Floor),
        &Dyadic::pi(wp, Round::Ceil),
        wp,
    )
}

/// `(sin θ, cos θ)` for `|θ| <= 1` by Taylor series.
fn sin_cos_taylor(theta: &Arb, wp: u32) -> (Arb, Arb) {
    let mut sin = Arb::zero();
    let mut cos = Arb::one();
    let mut term = Arb::one();
    let mut k: i64 = 1;
    loop {
        term = term
            .mul(theta, wp)
            .div(&Arb::from_i64(k), wp)
            .unwrap_or_else(|| unreachable!("k is positive"));
        let (acc, add) = match k % 4 {
            1 => (&mut sin, true),
            2 => (&mut cos, false),
            3 => (&mut sin, false),
            _ => (&mut cos, true),
        };
        *acc = if add { acc.add(&term, wp) } else { acc.sub(&term, wp) };
        if term.mag_upper().map_or(true, |m| m < -i64::from(wp)) {
            break;
        }
        k += 1;
    }
    // The omitted terms shrink at least geometrically by 1/2.
    let err = Dyadic::pow2(1 - i64::from(wp));
    (sin.add_error(&err), cos.add_error(&err))
}

/// `(sin πr, cos πr)` as real balls.
///
/// Multiples of `1/2` give exact results.
#[must_use]
pub fn sin_cos_pi(r: &Rational, prec: u32) -> (Arb, Arb) {
    let two = Rational::from(2i64);
    let mut x = r - &(&two * &Rational::from_integer((r.clone() / &two).floor()));
    let mut sin_sign = false;
    let mut cos_sign = false;

    // x in [0, 2)
    let one = Rational::from(1i64);
    if x >= one {
        x = &x - &one;
        sin_sign = !sin_sign;
        cos_sign = !cos_sign;
    }
    // x in [0, 1)
    let half = Rational::from_i64(1, 2);
    if x > half {
        x = &one - &x;
        cos_sign = !cos_sign;
    }
    // x in [0, 1/2]
    let quarter = Rational::from_i64(1, 4);
    let swap = x > quarter;
    if swap {
        x = &half - &x;
    }

    let (s, c) = if x.is_zero() {
        (Arb::zero(), Arb::one())
    } else {
        let wp = prec + GUARD_BITS;
        let theta = pi(wp).mul(&Arb::from_rational(&x, wp), wp);
        sin_cos_taylor(&theta, wp)
    };
    let (s, c) = if swap { (c, s) } else { (s, c) };
    let s = if sin_sign { s.neg() } else { s };
    let c = if cos_sign { c.neg() } else { c };
    (s, c)
}

/// `e^{πir}` as a complex ball.
#[must_use]
pub fn exp_pi_i(r: &Rational, prec: u32) -> Acb {
    let (s, c) = sin_cos_pi(r, prec);
    Acb::new(c, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pi_digits() {
        let p = pi(200);
        let below = Rational::from_i64(314_159_265_358_979, 100_000_000_000_000);
        let above = Rational::from_i64(314_159_265_358_980, 100_000_000_000_000);
        assert!(p.lower().to_rational() > below);
        assert!(p.upper().to_rational() < above);
        assert!(p.rel_accuracy_bits() > 190);
    }

    #[test]
    fn test_exact_angles() {
        assert_eq!(sin_cos_pi(&Rational::from(0i64), 64), (Arb::zero(), Arb::one()));
        assert_eq!(sin_cos_pi(&Rational::from_i64(1, 2), 64), (Arb::one(), Arb::zero()));
        assert_eq!(sin_cos_pi(&Rational::from(1i64), 64), (Arb::zero(), Arb::from_i64(-1)));
        assert_eq!(sin_cos_pi(&Rational::from_i64(-1, 2), 64), (Arb::from_i64(-1), Arb::zero()));
        assert_eq!(sin_cos_pi(&Rational::from(7i64), 64), (Arb::zero(), Arb::from_i64(-1)));
    }

    #[test]
    fn test_sixth_of_pi() {
        let (s, c) = sin_cos_pi(&Rational::from_i64(1, 6), 128);
        let half = Arb::from_rational(&Rational::from_i64(1, 2), 128);
        assert!(s.overlaps(&half));
        assert!(s.rel_accuracy_bits() > 100);
        // cos(π/6)^2 = 3/4
        let c2 = c.sqr(128);
        assert!(c2.overlaps(&Arb::from_rational(&Rational::from_i64(3, 4), 128)));
    }

    #[test]
    fn test_symmetries() {
        let prec = 96;
        let (s1, c1) = sin_cos_pi(&Rational::from_i64(2, 7), prec);
        let (s2, c2) = sin_cos_pi(&Rational::from_i64(9, 7), prec);
        assert!(s1.neg().overlaps(&s2));
        assert!(c1.neg().overlaps(&c2));
        let (s3, c3) = sin_cos_pi(&Rational::from_i64(-2, 7), prec);
        assert!(s1.neg().overlaps(&s3));
        assert!(c1.overlaps(&c3));
        // sin^2 + cos^2 = 1
        let one = s1.sqr(prec).add(&c1.sqr(prec), prec);
        assert!(one.contains_point(&Dyadic::one()));
    }

    #[test]
    fn test_exp_pi_i() {
        let z = exp_pi_i(&Rational::from_i64(1, 3), 96);
        let cube = z.pow(3, 96);
        assert!(cube.contains(&Acb::from_arb(Arb::from_i64(-1))));
    }
}
