//! Certification of root enclosures by interval Newton.
//!
//! [`validate`] inflates a candidate ball slightly and performs one Newton
//! step with the derivative evaluated on the whole inflated ball. If the
//! image lies strictly inside the inflated ball, the inflated ball contains
//! exactly one root and the image is a valid, usually much tighter,
//! enclosure of it.
//!
//! The step runs at twice the precision of the inflation, so rounding
//! errors cannot eat the margin between the image and the inflated ball.
//!
//! Real balls (imaginary part exactly zero) are validated along the real
//! line, which certifies that the root is real. Purely imaginary balls of
//! even or odd polynomials are validated along the imaginary axis.

use tertius_ball::{aberth_roots, eval_poly, eval_poly_real, Acb, Arb, Dyadic};
use tertius_integers::Rational;
use tertius_poly::dense::DensePoly;
use tertius_poly::integer::{negate_roots, rotate_roots_by_i};
use tertius_rings::integers::Z;
use tracing::trace;

/// Root of a linear polynomial.
pub(crate) fn linear_root(poly: &DensePoly<Z>) -> Rational {
    debug_assert_eq!(poly.degree(), 1);
    -Rational::new(poly.coeff(0).0, poly.coeff(1).0)
}

/// Grows the radius by half of itself, `2^-prec` times `scale`, and `2^-2prec`.
fn inflate(x: &Arb, scale: &Dyadic, prec: u32) -> Arb {
    let p = i64::from(prec);
    let extra = &(&x.rad().mul_2exp(-1) + &scale.mul_2exp(-p)) + &Dyadic::pow2(-2 * p);
    x.add_error(&extra)
}

/// Precision of the Newton step for a ball inflated at `prec`. Rounding in
/// the step must stay well below the inflation.
fn working_prec(prec: u32) -> u32 {
    prec.saturating_mul(2)
}

/// Interval Newton step on the real line.
fn validate_real(poly: &DensePoly<Z>, x: &Arb, prec: u32) -> Option<Arb> {
    let wp = working_prec(prec);
    let b = inflate(x, &x.mid().abs(), prec);
    let m = Arb::exact(b.mid().clone());
    let f = eval_poly_real(poly, &m, wp);
    let d = eval_poly_real(&poly.derivative(), &b, wp);
    let t = m.sub(&f.div(&d, wp)?, wp);
    if b.strictly_contains(&t) {
        Some(t)
    } else {
        trace!(prec, degree = poly.degree(), "real newton step not contained");
        None
    }
}

/// Certifies that a slightly inflated `ball` contains exactly one root of
/// `poly` and returns a tighter enclosure of that root.
///
/// Returns `None` when the certificate fails at this precision, which
/// either means the precision is too low or that the ball does not isolate
/// a root.
///
/// # Panics
///
/// Panics if `poly` is constant.
#[must_use]
pub fn validate(poly: &DensePoly<Z>, ball: &Acb, prec: u32) -> Option<Acb> {
    assert!(poly.degree() >= 1, "cannot validate a root of a constant");
    if poly.degree() == 1 {
        return Some(Acb::from_rational(&linear_root(poly), prec));
    }

    if ball.re().is_zero() && !ball.im().is_zero() {
        if let Some(rotated) = rotate_roots_by_i(poly) {
            // Roots y with i y a root of poly.
            let q = negate_roots(&rotated);
            return validate_real(&q, ball.im(), prec).map(|y| Acb::new(Arb::zero(), y));
        }
    }
    if ball.im().is_zero() {
        return validate_real(poly, ball.re(), prec).map(Acb::from_arb);
    }

    let scale = &ball.re().mid().abs() + &ball.im().mid().abs();
    let b = Acb::new(
        inflate(ball.re(), &scale, prec),
        inflate(ball.im(), &scale, prec),
    );
    let wp = working_prec(prec);
    let m = b.mid();
    let f = eval_poly(poly, &m, wp);
    let d = eval_poly(&poly.derivative(), &b, wp);
    let t = m.sub(&f.div(&d, wp)?, wp);
    if b.strictly_contains(&t) {
        Some(t)
    } else {
        trace!(prec, degree = poly.degree(), "complex newton step not contained");
        None
    }
}

/// Finds the unique root in `ball` from scratch with Aberth iteration and
/// returns a validated enclosure contained in `ball`.
fn reseed(poly: &DensePoly<Z>, ball: &Acb, prec: u32) -> Option<Acb> {
    let approx = aberth_roots(poly, None, prec, 4 * prec as usize);
    let real = ball.im().is_zero();
    let mut inside = approx.iter().filter(|z| {
        if real {
            ball.re().contains(z.re()) && z.im().mid().mag().map_or(true, |m| m < -i64::from(prec) / 2)
        } else {
            ball.contains(z)
        }
    });
    let z = inside.next()?;
    if inside.next().is_some() {
        return None;
    }
    let seed = if real {
        Acb::from_arb(z.re().clone())
    } else {
        z.clone()
    };
    validate(poly, &seed, prec).filter(|t| ball.contains(t))
}

/// Tightens a valid enclosure until its relative accuracy reaches `prec` bits.
///
/// The input must isolate a root of `poly`; the output encloses the same
/// root. Working precision is raised whenever Newton steps stop making
/// progress, without bound.
///
/// # Panics
///
/// Panics if `poly` is constant.
#[must_use]
pub fn refine(poly: &DensePoly<Z>, ball: &Acb, prec: u32) -> Acb {
    assert!(poly.degree() >= 1, "cannot refine a root of a constant");
    let goal = i64::from(prec);
    if poly.degree() == 1 {
        return Acb::from_rational(&linear_root(poly), prec + 8);
    }

    let mut current = ball.clone();
    let mut wp = prec + 16;
    let mut failures = 0;
    while current.rel_accuracy_bits() < goal {
        match validate(poly, &current, wp) {
            Some(t) => {
                if t.rel_accuracy_bits() <= current.rel_accuracy_bits() {
                    wp *= 2;
                }
                current = t;
            }
            None => {
                failures += 1;
                if failures % 2 == 0 {
                    if let Some(t) = reseed(poly, &current, wp) {
                        current = t;
                        continue;
                    }
                }
                wp *= 2;
            }
        }
    }
    current
}

/// Computes an enclosure of the root of `poly` near `start` with at least
/// `prec` bits of relative accuracy.
///
/// Unlike [`refine`], the starting ball is only a numerical guess; `None`
/// is returned if it cannot be certified at precision `prec`.
#[must_use]
pub fn evaluate_root(poly: &DensePoly<Z>, start: &Acb, prec: u32) -> Option<Acb> {
    let first = validate(poly, start, prec)?;
    Some(refine(poly, &first, prec))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tertius_poly::integer::int_poly;

    fn approx(re: f64, im: f64, rad: f64) -> Acb {
        let d = |x: f64| Dyadic::from_f64(x).unwrap();
        Acb::new(Arb::new(d(re), d(rad)), Arb::new(d(im), d(rad)))
    }

    #[test]
    fn test_validate_real_root() {
        let p = int_poly(&[-2, 0, 1]);
        let ball = Acb::from_arb(Arb::new(Dyadic::from_f64(1.4).unwrap(), Dyadic::from_f64(0.1).unwrap()));
        let t = validate(&p, &ball, 64).unwrap();
        assert!(t.is_real());
        assert!(t.re().sqr(128).contains_point(&Dyadic::from_i64(2)));
        // A ball around both roots cannot be certified.
        let wide = Acb::from_arb(Arb::new(Dyadic::zero(), Dyadic::from_i64(2)));
        assert!(validate(&p, &wide, 64).is_none());
    }

    #[test]
    fn test_validate_complex_root() {
        // x^2 + x + 1 has roots (-1 ± i sqrt 3) / 2
        let p = int_poly(&[1, 1, 1]);
        let t = validate(&p, &approx(-0.5, 0.866, 0.01), 64).unwrap();
        assert!(t.im().is_positive());
        assert!(validate(&p, &approx(-0.5, 0.0, 0.01), 64).is_none());
    }

    #[test]
    fn test_validate_imaginary_root() {
        let p = int_poly(&[2, 0, 1]);
        let ball = Acb::new(Arb::zero(), Arb::new(Dyadic::from_f64(1.41).unwrap(), Dyadic::from_f64(0.01).unwrap()));
        let t = validate(&p, &ball, 64).unwrap();
        assert!(t.re().is_zero());
        assert!(t.im().is_positive());
    }

    #[test]
    fn test_refine_reaches_accuracy() {
        let p = int_poly(&[-1, -1, 0, 0, 0, 1]);
        let start = Acb::from_arb(Arb::new(Dyadic::from_f64(1.17).unwrap(), Dyadic::from_f64(0.01).unwrap()));
        let t = evaluate_root(&p, &start, 300).unwrap();
        assert!(t.rel_accuracy_bits() >= 300);
        assert!(start.contains(&t));
        assert!(eval_poly(&p, &t, 400).contains_zero());
    }

    #[test]
    fn test_candidate_at_its_own_precision() {
        // The ball for e^{4πi/3} has radius about 2^-prec.
        let p = int_poly(&[1, 1, 1]);
        for prec in [64, 128, 256, 512] {
            let ball = tertius_ball::exp_pi_i(&Rational::from_i64(4, 3), prec);
            let t = validate(&p, &ball, prec).unwrap();
            assert!(t.im().is_negative());
            assert!(ball.overlaps(&t));
        }
        let cube_root = Acb::from_arb(Arb::from_rational(&Rational::from_i64(1, 3), 200));
        let t = validate(&int_poly(&[-1, 0, 0, 27]), &cube_root, 200).unwrap();
        assert!(t.is_real());
    }

    #[test]
    fn test_linear() {
        let t = validate(&int_poly(&[-1, 3]), &Acb::zero(), 64).unwrap();
        let third = Acb::from_rational(&Rational::from_i64(1, 3), 64);
        assert!(t.overlaps(&third));
    }
}
