//! Certified isolation of all complex roots of a squarefree polynomial.
//!
//! Aberth iteration gives approximations; each one is surrounded by a ball
//! of radius `n |f/f'|` (which contains a root) and certified by the
//! validator. Once the `n` certified balls are pairwise disjoint they
//! isolate the `n` distinct roots.

use tertius_ball::{aberth_roots, eval_poly_and_derivative, Acb, Arb, Dyadic};
use tertius_poly::dense::DensePoly;
use tertius_rings::integers::Z;
use tracing::debug;

use crate::config::IsolationConfig;
use crate::validate::{linear_root, validate};

/// Certifies one Aberth approximation `z`.
fn certify(poly: &DensePoly<Z>, z: &Acb, prec: u32) -> Option<Acb> {
    let (f, d) = eval_poly_and_derivative(poly, z, prec);
    let n = i64::try_from(poly.degree()).ok()?;
    let ratio = f.abs(prec).div(&d.abs(prec), prec)?;
    let scale = z.mag_upper().unwrap_or(0);
    let r = &ratio.mul(&Arb::from_i64(n), prec).upper() + &Dyadic::pow2(scale - i64::from(prec));

    if z.im().mid().abs() <= r {
        let real = Acb::from_arb(Arb::new(z.re().mid().clone(), r.clone()));
        if let Some(t) = validate(poly, &real, prec) {
            return Some(t);
        }
    }
    let ball = Acb::new(
        Arb::new(z.re().mid().clone(), r.clone()),
        Arb::new(z.im().mid().clone(), r),
    );
    validate(poly, &ball, prec)
}

fn pairwise_disjoint(balls: &[Acb]) -> bool {
    balls
        .iter()
        .enumerate()
        .all(|(j, a)| balls[j + 1..].iter().all(|b| !a.overlaps(b)))
}

/// Isolating enclosures of all roots of a squarefree polynomial.
///
/// Real roots get balls with an exact zero imaginary part. The balls are
/// pairwise disjoint and each contains exactly one root.
///
/// # Panics
///
/// Panics if `poly` is constant.
#[must_use]
pub fn isolate_roots(poly: &DensePoly<Z>, config: &IsolationConfig) -> Vec<Acb> {
    assert!(poly.degree() >= 1, "cannot isolate the roots of a constant");
    if poly.degree() == 1 {
        return vec![Acb::from_rational(&linear_root(poly), config.initial_prec)];
    }

    let mut prec = config.initial_prec;
    let mut iterations = config.max_aberth_iterations;
    let mut approx: Option<Vec<Acb>> = None;
    loop {
        let z = aberth_roots(poly, approx.as_deref(), prec, iterations);
        let balls: Option<Vec<Acb>> = z.iter().map(|z| certify(poly, z, prec)).collect();
        match balls {
            Some(balls) if pairwise_disjoint(&balls) => return balls,
            Some(_) => debug!(prec, degree = poly.degree(), "root balls overlap"),
            None => debug!(prec, degree = poly.degree(), "root not certified"),
        }
        approx = Some(z);
        prec *= 2;
        iterations *= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tertius_ball::eval_poly;
    use tertius_poly::integer::int_poly;

    #[test]
    fn test_real_and_complex_roots() {
        // x^3 - 2 has one real root and a conjugate pair
        let p = int_poly(&[-2, 0, 0, 1]);
        let balls = isolate_roots(&p, &IsolationConfig::default());
        assert_eq!(balls.len(), 3);
        assert_eq!(balls.iter().filter(|b| b.is_real()).count(), 1);
        for b in &balls {
            assert!(eval_poly(&p, b, 128).contains_zero());
        }
        assert!(pairwise_disjoint(&balls));
    }

    #[test]
    fn test_close_roots() {
        // roots 1/1000 and 2/1000 apart from the others
        let p = int_poly(&[2, -3000, 1_000_000]);
        let balls = isolate_roots(&p, &IsolationConfig::default());
        assert_eq!(balls.len(), 2);
        assert!(balls.iter().all(Acb::is_real));
        assert!(pairwise_disjoint(&balls));
    }

    #[test]
    fn test_linear() {
        let balls = isolate_roots(&int_poly(&[3, 4]), &IsolationConfig::default());
        assert_eq!(balls.len(), 1);
        assert!(balls[0].re().is_negative());
    }
}
