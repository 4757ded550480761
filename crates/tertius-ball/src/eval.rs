//! Ball evaluation of integer polynomials.

use tertius_poly::dense::DensePoly;
use tertius_rings::integers::Z;

use crate::acb::Acb;
use crate::arb::Arb;

/// Evaluates `p(z)` by Horner's rule.
#[must_use]
pub fn eval_poly(p: &DensePoly<Z>, z: &Acb, prec: u32) -> Acb {
    p.coeffs().iter().rev().fold(Acb::zero(), |acc, c| {
        acc.mul(z, prec).add(&Acb::from_integer(&c.0), prec)
    })
}

/// Evaluates `p(z)` and `p'(z)` in one pass.
#[must_use]
pub fn eval_poly_and_derivative(p: &DensePoly<Z>, z: &Acb, prec: u32) -> (Acb, Acb) {
    let mut value = Acb::zero();
    let mut deriv = Acb::zero();
    for c in p.coeffs().iter().rev() {
        deriv = deriv.mul(z, prec).add(&value, prec);
        value = value.mul(z, prec).add(&Acb::from_integer(&c.0), prec);
    }
    (value, deriv)
}

/// Evaluates `p(x)` for a real ball.
#[must_use]
pub fn eval_poly_real(p: &DensePoly<Z>, x: &Arb, prec: u32) -> Arb {
    p.coeffs().iter().rev().fold(Arb::zero(), |acc, c| {
        acc.mul(x, prec).add(&Arb::from_integer(&c.0), prec)
    })
}
