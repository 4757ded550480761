//! Composed polynomials from power sums.
//!
//! For `A` of degree `d` with roots `a_i`, the reversal `Ã(t) = t^d A(1/t)`
//! gives the power sums `p_k = Σ a_i^k` as the coefficients of
//! `d - t Ã'(t) / Ã(t)`. Power sums of all products `a_i b_j` are the
//! termwise products of the two series, and power sums of all sums
//! `a_i + b_j` come from the Borel-transformed series by an ordinary
//! product. The polynomial with prescribed power sums is recovered as the
//! reversal of `exp(-Σ p_k t^k / k)`.

use tertius_poly::dense::DensePoly;
use tertius_poly::integer::{negate_roots, primitive_from_rational, reciprocal_roots, to_rational};
use tertius_rings::integers::Z;
use tertius_rings::rationals::Q;
use tertius_rings::traits::{Field, Ring};
use tertius_series::PowerSeries;

/// The four field operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    /// `x + y`
    Add,
    /// `x - y`
    Sub,
    /// `x * y`
    Mul,
    /// `x / y`
    Div,
}

impl BinaryOp {
    /// Name used in log events.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
        }
    }
}

/// Power sums `p_0, ..., p_{len-1}` of the roots of `a`.
fn power_sums(a: &DensePoly<Z>, len: usize) -> PowerSeries<Q> {
    let rev = to_rational(&a.reverse());
    let num = rev.derivative().shift(1);
    let quotient = PowerSeries::from_poly(&num, len)
        .div(&PowerSeries::from_poly(&rev, len))
        .unwrap_or_else(|| unreachable!("reversal has the leading coefficient as constant term"));
    PowerSeries::constant(Q::from_integer(a.degree() as i64), len).sub(&quotient)
}

/// Primitive integer polynomial of degree `n` whose roots have the power
/// sums `p_1, ..., p_n` given by `sums`.
fn from_power_sums(sums: &PowerSeries<Q>, n: usize) -> DensePoly<Z> {
    let log: Vec<Q> = (0..=n)
        .map(|k| {
            if k == 0 {
                Q::zero()
            } else {
                -sums.coeff(k).field_div(&Q::from_integer(k as i64))
            }
        })
        .collect();
    let series = PowerSeries::new(log, n + 1)
        .exp_of()
        .unwrap_or_else(|| unreachable!("constant term is zero"));
    let mut coeffs = series.coeffs().to_vec();
    coeffs.resize(n + 1, Q::zero());
    coeffs.reverse();
    primitive_from_rational(&DensePoly::new(coeffs))
}

/// Polynomial of degree `deg(a) * deg(b)` whose roots are `α ⊕ β` for all
/// roots `α` of `a` and `β` of `b`, with multiplicity.
///
/// # Panics
///
/// Panics if either polynomial is constant, or for [`BinaryOp::Div`] if
/// `b` has zero as a root.
#[must_use]
pub fn composed_polynomial(a: &DensePoly<Z>, b: &DensePoly<Z>, op: BinaryOp) -> DensePoly<Z> {
    assert!(
        a.degree() >= 1 && b.degree() >= 1,
        "composed polynomial of a constant"
    );
    let n = a.degree() * b.degree();
    let len = n + 1;
    let b = match op {
        BinaryOp::Sub => negate_roots(b),
        BinaryOp::Div => {
            assert!(!b.coeff(0).is_zero(), "division by a polynomial with root zero");
            reciprocal_roots(b)
        }
        BinaryOp::Add | BinaryOp::Mul => b.clone(),
    };
    let sa = power_sums(a, len);
    let sb = power_sums(&b, len);
    let sums = match op {
        BinaryOp::Add | BinaryOp::Sub => sa.borel().mul(&sb.borel()).inv_borel(),
        BinaryOp::Mul | BinaryOp::Div => sa.hadamard(&sb),
    };
    from_power_sums(&sums, n)
}

/// Polynomial of degree `deg(a)` whose roots are `α^n` for the roots `α` of `a`.
///
/// # Panics
///
/// Panics if `a` is constant or `n` is zero.
#[must_use]
pub fn power_polynomial(a: &DensePoly<Z>, n: usize) -> DensePoly<Z> {
    assert!(a.degree() >= 1, "power polynomial of a constant");
    assert!(n > 0, "zeroth power polynomial");
    let d = a.degree();
    let sums = power_sums(a, d * n + 1);
    let decimated = PowerSeries::new((0..=d).map(|k| sums.coeff(k * n)).collect(), d + 1);
    from_power_sums(&decimated, d)
}
