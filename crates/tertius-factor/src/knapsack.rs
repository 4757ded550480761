//! Knapsack recombination of lifted factors (van Hoeij).
//!
//! Every true factor of `f` is the product of a subset of the lifted
//! factors. The first power sums of its roots, scaled by powers of the
//! leading coefficient, are small integers, while those of a wrong subset
//! look like random residues modulo `p^a`. A lattice built from the power
//! sums of each lifted factor therefore contains the 0/1 indicator vectors
//! of the true factors as unusually short vectors, and LLL exposes them.
//!
//! The answer is checked by exact division. `None` means the lattice did
//! not split cleanly and the caller falls back to subset search.

use num_traits::{One, Zero};
use tertius_integers::{Integer, Rational};
use tertius_linalg::dense_matrix::DenseMatrix;
use tertius_poly::dense::DensePoly;
use tertius_poly::integer::{div_exact, primitive_part};
use tertius_rings::integers::Z;
use tertius_rings::rationals::Q;
use tertius_rings::traits::Ring;
use tracing::debug;

use crate::hensel::symmetric_mod;
use crate::lll::lll_reduce;

/// Number of power sums per lifted factor.
const TRACES: usize = 4;

fn trace_count(factors: usize) -> usize {
    TRACES.min(factors)
}

/// Upper bound on the absolute values of the complex roots of `f`
/// (Fujiwara): `2 max |a_{n-k} / a_n|^(1/k)`.
#[must_use]
pub fn root_bound(f: &DensePoly<Z>) -> Integer {
    let n = f.degree();
    let lc = f.leading_coeff().0.abs();
    let largest = (1..=n)
        .filter_map(|k| {
            let a = f.coeff(n - k).0.abs();
            if a.is_zero() {
                return None;
            }
            let ratio = a.div_ceil(&lc);
            Some(ratio.root_floor(u32::try_from(k).unwrap_or(u32::MAX)) + Integer::one())
        })
        .max()
        .unwrap_or_else(Integer::one);
    largest * Integer::new(2)
}

/// `|lc^j p_j| <= n (lc B)^j` for the `j`-th power sum of any factor.
fn trace_bound(f: &DensePoly<Z>, j: usize) -> Integer {
    let lb = f.leading_coeff().0.abs() * root_bound(f);
    Integer::from(f.degree()) * lb.pow(u32::try_from(j).unwrap_or(u32::MAX))
}

/// Modulus needed before [`knapsack_recombine`] is attempted on `factors`
/// lifted factors.
#[must_use]
pub fn knapsack_modulus_bound(f: &DensePoly<Z>, factors: usize) -> Integer {
    let traces = trace_count(factors);
    trace_bound(f, traces).shl(2 * (factors + traces))
}

/// Power sums `p_1, ..., p_count` of the roots of a monic `g`, modulo `m`,
/// by Newton's identities.
fn power_sums(g: &DensePoly<Z>, count: usize, m: &Integer) -> Vec<Integer> {
    let d = g.degree();
    // coefficient of x^(d - i)
    let c = |i: usize| {
        if i <= d {
            g.coeff(d - i).0
        } else {
            Integer::zero()
        }
    };
    let mut sums: Vec<Integer> = Vec::with_capacity(count);
    for j in 1..=count {
        let mut v = Integer::from(j) * c(j);
        for i in 1..j {
            v = v + c(i) * sums[j - i - 1].clone();
        }
        let v = -v;
        sums.push(v.clone() - v.div_floor(m) * m);
    }
    sums
}

fn symmetric(a: &Integer, m: &Integer) -> Integer {
    let r = a.clone() - a.div_floor(m) * m;
    if r > m.shr_floor(1) {
        r - m
    } else {
        r
    }
}

/// Splits the lifted factors of `f` into the groups whose products are the
/// irreducible factors over Z.
///
/// `f` must be primitive and squarefree with positive leading coefficient,
/// and `lifted` its monic factorization modulo `modulus`.
#[must_use]
pub fn knapsack_recombine(
    f: &DensePoly<Z>,
    lifted: &[DensePoly<Z>],
    modulus: &Integer,
) -> Option<Vec<DensePoly<Z>>> {
    let r = lifted.len();
    if r <= 1 {
        return Some(vec![f.clone()]);
    }
    if *modulus < knapsack_modulus_bound(f, r) {
        return None;
    }
    let traces = trace_count(r);
    let lc = f.leading_coeff().0.clone();
    let bounds: Vec<Integer> = (1..=traces).map(|j| trace_bound(f, j)).collect();
    let scaled = |value: Integer, j: usize| Q(Rational::new(value, bounds[j].clone()));

    // [ I_r  T / bound ]
    // [ 0    m / bound ]
    let dim = r + traces;
    let mut basis = DenseMatrix::<Q>::zeros(dim, dim);
    for (i, g) in lifted.iter().enumerate() {
        basis[(i, i)] = Q::from_integer(1);
        let mut lc_power = Integer::one();
        for (j, p) in power_sums(g, traces, modulus).into_iter().enumerate() {
            lc_power = lc_power * &lc;
            basis[(i, r + j)] = scaled(symmetric(&(p * &lc_power), modulus), j);
        }
    }
    for j in 0..traces {
        basis[(r + j, r + j)] = scaled(modulus.clone(), j);
    }

    let reduced = lll_reduce(&basis, &Q::new(3, 4));
    // Indicator vectors have squared norm at most dim, so they lie in the
    // span of the rows before the first trailing run of long b*_i.
    let limit = Q::from_integer(i64::try_from(dim).unwrap_or(i64::MAX));
    let kept = reduced
        .gram_schmidt_norms
        .iter()
        .rposition(|b| *b <= limit)
        .map_or(0, |i| i + 1);
    debug!(
        factors = r,
        traces,
        swaps = reduced.swaps,
        kept,
        "knapsack lattice reduced"
    );
    if kept == 0 {
        return None;
    }

    // Lifted factors of the same true factor have equal columns.
    let mut groups: Vec<(Vec<Q>, Vec<usize>)> = Vec::new();
    for i in 0..r {
        let column: Vec<Q> = (0..kept).map(|t| reduced.basis[(t, i)].clone()).collect();
        if column.iter().all(Q::is_zero) {
            return None;
        }
        match groups.iter_mut().find(|(c, _)| *c == column) {
            Some((_, members)) => members.push(i),
            None => groups.push((column, vec![i])),
        }
    }
    if groups.len() != kept {
        return None;
    }

    let mut rest = f.clone();
    let mut factors = Vec::with_capacity(groups.len());
    for (_, members) in &groups {
        let product = members
            .iter()
            .fold(DensePoly::constant(Z(lc.clone())), |acc, &i| acc.mul(&lifted[i]));
        let candidate = primitive_part(&symmetric_mod(&product, modulus));
        rest = primitive_part(&div_exact(&rest, &candidate)?);
        factors.push(candidate);
    }
    (rest.degree() == 0).then_some(factors)
}
