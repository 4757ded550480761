//! Uncertified numerical root finding.
//!
//! These routines work on exact midpoints and discard radii after every
//! step. Their results are starting points that callers certify.

use std::f64::consts::PI;

use tertius_poly::dense::DensePoly;
use tertius_rings::integers::Z;
use tracing::trace;

use crate::acb::Acb;
use crate::arb::Arb;
use crate::dyadic::Dyadic;
use crate::eval::eval_poly_and_derivative;

/// Largest midpoint magnitude of the two parts, or `None` for zero.
fn mid_mag(z: &Acb) -> Option<i64> {
    match (z.re().mid().mag(), z.im().mid().mag()) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    }
}

/// An exact point `r 2^e (cos θ + i sin θ)` from machine floats.
fn polar_point(r: f64, theta: f64, e: i64) -> Acb {
    let part = |x: f64| Dyadic::from_f64(r * x).unwrap_or_else(Dyadic::zero).mul_2exp(e);
    Acb::exact(part(theta.cos()), part(theta.sin()))
}

/// Returns true if `delta` is below `2^-prec` relative to `z`.
fn is_small_step(delta: &Acb, z: &Acb, prec: u32) -> bool {
    match (mid_mag(delta), mid_mag(z)) {
        (None, _) => true,
        (Some(d), Some(m)) => d < m - i64::from(prec),
        (Some(d), None) => d < -i64::from(prec),
    }
}

/// Approximates the principal `n`-th root of the midpoint of `z`.
///
/// # Panics
///
/// Panics if `n` is zero.
#[must_use]
pub fn approx_root(z: &Acb, n: u32, prec: u32) -> Acb {
    assert!(n > 0, "zeroth root");
    let z = z.mid();
    let Some(m) = mid_mag(&z) else {
        return Acb::zero();
    };

    // Scale into [2^-n, 1] so that machine floats give a usable seed.
    let n64 = i64::from(n);
    let k = m.div_euclid(n64) + i64::from(m.rem_euclid(n64) != 0);
    let scaled = z.mul_2exp(-n64 * k);
    let (x, y) = scaled.to_f64();
    let r = x.hypot(y);
    let r = if r > 0.0 { r.powf(1.0 / f64::from(n)) } else { 1.0 };
    let mut w = polar_point(r, y.atan2(x) / f64::from(n), k);

    let n_arb = Arb::from_i64(n64);
    let wp = prec + 8;
    let mut p = 48u32;
    loop {
        p = (2 * p).min(wp);
        for _ in 0..4 {
            let f = w.pow(n, p).sub(&z, p);
            let d = w.pow(n - 1, p).mul_arb(&n_arb, p);
            let Some(step) = f.div(&d, p) else {
                return w;
            };
            let next = w.sub(&step, p).mid();
            let done = is_small_step(&step.mid(), &next, p);
            w = next;
            if done {
                break;
            }
        }
        if p == wp {
            return w;
        }
    }
}

/// Root modulus bound `2^b` (Fujiwara), returned as the exponent `b`.
fn root_bound_exp(p: &DensePoly<Z>) -> i64 {
    let n = p.degree();
    let lead = p.leading_coeff().0.bit_len() as i64 - 1;
    let mut bound = i64::MIN;
    for k in 1..=n {
        let c = &p.coeff(n - k).0;
        if c.signum() == 0 {
            continue;
        }
        let top = c.bit_len() as i64 - lead;
        let k = k as i64;
        bound = bound.max(top.div_euclid(k) + 1);
    }
    if bound == i64::MIN {
        0
    } else {
        bound + 1
    }
}

/// Approximates all roots of a squarefree polynomial with the Aberth method.
///
/// Iterates Gauss-Seidel style until every correction is below `2^-prec`
/// relative to its root, or `max_iter` sweeps have run. Starting points
/// default to a circle of radius given by a root bound.
#[must_use]
pub fn aberth_roots(
    p: &DensePoly<Z>,
    start: Option<&[Acb]>,
    prec: u32,
    max_iter: usize,
) -> Vec<Acb> {
    let n = p.degree();
    if p.is_zero() || n == 0 {
        return Vec::new();
    }
    let mut z: Vec<Acb> = match start {
        Some(s) if s.len() == n => s.iter().map(Acb::mid).collect(),
        _ => {
            let e = root_bound_exp(p);
            (0..n)
                .map(|j| {
                    let theta = 2.0 * PI * (j as f64) / (n as f64) + 0.4;
                    polar_point(1.0, theta, e)
                })
                .collect()
        }
    };

    let wp = prec + 16;
    for iter in 0..max_iter {
        let mut converged = true;
        for j in 0..n {
            let (f, d) = eval_poly_and_derivative(p, &z[j], wp);
            let f = f.mid();
            if f.is_zero() {
                continue;
            }
            let Some(ratio) = f.div(&d.mid(), wp).map(|r| r.mid()) else {
                // Nudge off a critical point.
                z[j] = z[j].add(&Acb::exact(Dyadic::pow2(-16), Dyadic::pow2(-17)), wp).mid();
                converged = false;
                continue;
            };
            let mut sum = Acb::zero();
            for k in (0..n).filter(|&k| k != j) {
                if let Some(inv) = z[j].sub(&z[k], wp).inv(wp) {
                    sum = sum.add(&inv.mid(), wp).mid();
                }
            }
            let denom = Acb::one().sub(&ratio.mul(&sum, wp), wp).mid();
            let delta = ratio.div(&denom, wp).map_or(ratio, |d| d.mid());
            let next = z[j].sub(&delta, wp).mid();
            if !is_small_step(&delta, &next, prec) {
                converged = false;
            }
            z[j] = next;
        }
        if converged {
            trace!(degree = n, iterations = iter + 1, prec, "aberth converged");
            break;
        }
    }
    z
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::eval_poly;
    use tertius_poly::integer::int_poly;

    fn close(a: &Acb, b: (f64, f64)) -> bool {
        let (x, y) = a.to_f64();
        (x - b.0).abs() < 1e-12 && (y - b.1).abs() < 1e-12
    }

    #[test]
    fn test_approx_root() {
        let z = Acb::exact(Dyadic::from_i64(-2), Dyadic::from_i64(2));
        let w = approx_root(&z, 3, 128);
        assert!(close(&w, (1.0, 1.0)));
        let big = Acb::from_arb(Arb::from_i64(1 << 40));
        assert!(close(&approx_root(&big, 4, 128), (1024.0, 0.0)));
    }

    #[test]
    fn test_aberth_quadratic() {
        let p = int_poly(&[-2, 0, 1]);
        let mut roots: Vec<f64> = aberth_roots(&p, None, 100, 100)
            .iter()
            .map(|r| r.to_f64().0)
            .collect();
        roots.sort_by(f64::total_cmp);
        assert!((roots[0] + 2f64.sqrt()).abs() < 1e-14);
        assert!((roots[1] - 2f64.sqrt()).abs() < 1e-14);
    }

    #[test]
    fn test_aberth_residuals() {
        // x^5 - x - 1
        let p = int_poly(&[-1, -1, 0, 0, 0, 1]);
        let roots = aberth_roots(&p, None, 120, 200);
        assert_eq!(roots.len(), 5);
        for r in &roots {
            let v = eval_poly(&p, r, 200);
            assert!(v.mag_upper().map_or(true, |m| m < -100));
        }
    }

    #[test]
    fn test_root_bound() {
        // roots of x^2 - 1000 have modulus about 31.6 < 2^b
        let b = root_bound_exp(&int_poly(&[-1000, 0, 1]));
        assert!(b >= 5);
    }
}
