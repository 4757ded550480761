//! Utilities for polynomials with integer coefficients.
//!
//! Minimal polynomials of algebraic numbers live in `Z[x]`, normalized to
//! be primitive with a positive leading coefficient. The root transforms
//! here (`scale_roots`, `shift_roots`, `reverse`) produce polynomials whose
//! roots are the images of the input roots under the corresponding map.

use num_traits::{One, Zero};
use tertius_integers::{Integer, Rational};
use tertius_rings::integers::Z;
use tertius_rings::rationals::Q;
use tertius_rings::traits::Ring;

use crate::algorithms::gcd::poly_gcd;
use crate::dense::DensePoly;

/// Builds an integer polynomial from ascending `i64` coefficients.
#[must_use]
pub fn int_poly(coeffs: &[i64]) -> DensePoly<Z> {
    DensePoly::new(coeffs.iter().map(|&c| Z::new(c)).collect())
}

/// Computes the content (non-negative GCD of the coefficients).
#[must_use]
pub fn content(p: &DensePoly<Z>) -> Integer {
    p.coeffs()
        .iter()
        .filter(|c| !c.0.is_zero())
        .fold(Integer::zero(), |g, c| g.gcd(&c.0))
}

/// Divides out the content and makes the leading coefficient positive.
#[must_use]
pub fn primitive_part(p: &DensePoly<Z>) -> DensePoly<Z> {
    if p.is_zero() {
        return p.clone();
    }
    let mut c = content(p);
    if p.leading_coeff().0.is_negative() {
        c = -c;
    }
    if c.is_one() {
        return p.clone();
    }
    DensePoly::new(p.coeffs().iter().map(|x| Z(x.0.div_exact(&c))).collect())
}

/// Returns true if `p` is primitive with positive leading coefficient.
#[must_use]
pub fn is_normalized(p: &DensePoly<Z>) -> bool {
    !p.is_zero() && p.leading_coeff().0.is_positive() && content(p).is_one()
}

/// Divides `a` by `b` over the integers.
///
/// Returns `None` if the quotient does not have integer coefficients or
/// the division leaves a remainder.
///
/// # Panics
///
/// Panics if `b` is the zero polynomial.
#[must_use]
pub fn div_exact(a: &DensePoly<Z>, b: &DensePoly<Z>) -> Option<DensePoly<Z>> {
    assert!(!b.is_zero(), "division by zero polynomial");
    if a.is_zero() {
        return Some(DensePoly::zero());
    }
    if a.degree() < b.degree() {
        return None;
    }

    let lead = &b.leading_coeff().0;
    let mut rem: Vec<Integer> = a.coeffs().iter().map(|c| c.0.clone()).collect();
    let mut quot = vec![Integer::zero(); a.degree() - b.degree() + 1];

    for k in (0..quot.len()).rev() {
        let top = &rem[k + b.degree()];
        if top.is_zero() {
            continue;
        }
        if !top.is_divisible_by(lead) {
            return None;
        }
        let q = top.div_exact(lead);
        for (i, bc) in b.coeffs().iter().enumerate() {
            rem[k + i] = rem[k + i].clone() - q.clone() * &bc.0;
        }
        quot[k] = q;
    }

    rem.iter()
        .all(Zero::is_zero)
        .then(|| DensePoly::new(quot.into_iter().map(Z).collect()))
}

/// Converts to a polynomial over the rationals.
#[must_use]
pub fn to_rational(p: &DensePoly<Z>) -> DensePoly<Q> {
    p.map(Q::from_z)
}

/// Multiplies by the LCM of the denominators, giving an integer polynomial.
#[must_use]
pub fn clear_denominators(p: &DensePoly<Q>) -> DensePoly<Z> {
    let l = p
        .coeffs()
        .iter()
        .fold(Integer::one(), |l, c| l.lcm(&c.0.denominator()));
    p.map(|c| Z(c.0.numerator() * l.div_exact(&c.0.denominator())))
}

/// Primitive part of a rational polynomial after clearing denominators.
#[must_use]
pub fn primitive_from_rational(p: &DensePoly<Q>) -> DensePoly<Z> {
    primitive_part(&clear_denominators(p))
}

/// GCD over `Z[x]`, normalized to be primitive with positive leading coefficient.
#[must_use]
pub fn gcd(a: &DensePoly<Z>, b: &DensePoly<Z>) -> DensePoly<Z> {
    primitive_from_rational(&poly_gcd(&to_rational(a), &to_rational(b)))
}

/// Returns the largest absolute value of a coefficient.
#[must_use]
pub fn height(p: &DensePoly<Z>) -> Integer {
    p.coeffs()
        .iter()
        .map(|c| c.0.abs())
        .max()
        .unwrap_or_else(Integer::zero)
}

/// Returns the sum of absolute values of the coefficients.
#[must_use]
pub fn norm_l1(p: &DensePoly<Z>) -> Integer {
    p.coeffs()
        .iter()
        .fold(Integer::zero(), |s, c| s + c.0.abs())
}

/// Evaluates at a rational point.
#[must_use]
pub fn eval_rational(p: &DensePoly<Z>, x: &Rational) -> Rational {
    p.coeffs()
        .iter()
        .rev()
        .fold(Rational::zero(), |acc, c| {
            acc * x + Rational::from_integer(c.0.clone())
        })
}

/// Polynomial whose roots are `(num/den) * alpha` for every root `alpha` of `p`.
///
/// # Panics
///
/// Panics if `num` or `den` is zero.
#[must_use]
pub fn scale_roots(p: &DensePoly<Z>, num: &Integer, den: &Integer) -> DensePoly<Z> {
    assert!(!num.is_zero() && !den.is_zero(), "degenerate root scaling");
    // p(den * t / num) * num^d
    let d = p.degree();
    let coeffs = p
        .coeffs()
        .iter()
        .enumerate()
        .map(|(i, c)| Z(c.0.clone() * den.pow(i as u32) * num.pow((d - i) as u32)))
        .collect();
    primitive_part(&DensePoly::new(coeffs))
}

/// Polynomial whose roots are `alpha + num/den` for every root `alpha` of `p`.
///
/// # Panics
///
/// Panics if `den` is zero.
#[must_use]
pub fn shift_roots(p: &DensePoly<Z>, num: &Integer, den: &Integer) -> DensePoly<Z> {
    assert!(!den.is_zero(), "zero denominator");
    // den^d * p((den*t - num) / den), by Horner in the linear factor.
    let d = p.degree();
    let lin = DensePoly::new(vec![Z(-num), Z(den.clone())]);
    let mut acc = DensePoly::<Z>::zero();
    for (i, c) in p.coeffs().iter().enumerate().rev() {
        let term = Z(c.0.clone() * den.pow((d - i) as u32));
        acc = acc.mul(&lin).add(&DensePoly::constant(term));
    }
    primitive_part(&acc)
}

/// Polynomial whose roots are the reciprocals of the non-zero roots of `p`.
#[must_use]
pub fn reciprocal_roots(p: &DensePoly<Z>) -> DensePoly<Z> {
    let trimmed = DensePoly::new(p.coeffs()[p.valuation()..].to_vec());
    primitive_part(&trimmed.reverse())
}

/// Polynomial whose roots are the negations of the roots of `p`.
#[must_use]
pub fn negate_roots(p: &DensePoly<Z>) -> DensePoly<Z> {
    primitive_part(&p.compose_neg())
}

/// Polynomial whose roots are `i * alpha` for every root `alpha` of `p`.
///
/// Only defined for even or odd `p`, where the substitution stays in `Z[x]`.
/// Returns `None` otherwise.
#[must_use]
pub fn rotate_roots_by_i(p: &DensePoly<Z>) -> Option<DensePoly<Z>> {
    if !p.is_even() && !p.is_odd() {
        return None;
    }
    // p(-i t) keeps only even or only odd powers; i^k alternates sign in steps of two.
    let coeffs = p
        .coeffs()
        .iter()
        .enumerate()
        .map(|(k, c)| {
            if c.is_zero() {
                return Z::zero();
            }
            let flip = (k / 2) % 2 == 1;
            if flip {
                -c.clone()
            } else {
                c.clone()
            }
        })
        .collect();
    Some(primitive_part(&DensePoly::new(coeffs)))
}
