//! Univariate factorization over Z.
//!
//! Squarefree decomposition, modular factorization by Cantor-Zassenhaus,
//! quadratic Hensel lifting and recombination of the lifted factors.
//! Few modular factors are recombined by exhaustive subset search
//! (Zassenhaus). Beyond [`SUBSET_SEARCH_LIMIT`] factors, as for
//! Swinnerton-Dyer polynomials that split into many factors modulo every
//! prime, the lift goes further and the knapsack lattice splits them, with
//! subset search kept as the fallback.

use num_traits::One;
use rayon::prelude::*;
use tertius_integers::Integer;
use tertius_poly::dense::DensePoly;
use tertius_poly::integer::{div_exact, norm_l1, primitive_part};
use tertius_rings::integers::Z;
use tracing::{debug, trace};

use crate::cantor_zassenhaus::{cantor_zassenhaus_factor, count_factors, distinct_degree_factorization};
use crate::hensel::{hensel_lift, symmetric_mod};
use crate::knapsack::{knapsack_modulus_bound, knapsack_recombine};
use crate::modular::{reduce_integer, ZpPoly};
use crate::squarefree::squarefree_factorization;

/// Number of admissible primes compared before picking the one with the
/// fewest modular factors.
const PRIME_CANDIDATES: usize = 5;

/// Largest number of modular factors recombined by subset search alone.
pub const SUBSET_SEARCH_LIMIT: usize = 6;

/// Complete factorization of an integer polynomial.
#[derive(Clone, Debug)]
pub struct Factorization {
    /// Signed content: `f = content * Π factor^multiplicity`.
    pub content: Z,
    /// Irreducible primitive factors with positive leading coefficient,
    /// each with its multiplicity.
    pub factors: Vec<(DensePoly<Z>, usize)>,
    /// Statistics about the computation.
    pub stats: FactorStats,
}

impl Factorization {
    /// Reconstructs the original polynomial.
    #[must_use]
    pub fn to_polynomial(&self) -> DensePoly<Z> {
        self.factors.iter().fold(
            DensePoly::constant(self.content.clone()),
            |acc, (f, m)| acc.mul(&f.pow(*m as u32)),
        )
    }
}

/// Statistics from factorization.
#[derive(Clone, Debug, Default)]
pub struct FactorStats {
    /// Largest number of modular factors seen for one squarefree part.
    pub max_mod_factors: usize,
    /// Number of Hensel steps performed.
    pub hensel_steps: usize,
}

/// Factors a polynomial over Z into irreducibles.
///
/// # Panics
///
/// Panics if `f` is the zero polynomial.
#[must_use]
pub fn factor(f: &DensePoly<Z>) -> Factorization {
    assert!(!f.is_zero(), "cannot factor the zero polynomial");

    let sf = squarefree_factorization(f);
    let mut factors = Vec::new();
    let mut stats = FactorStats::default();

    for (part, multiplicity) in &sf.parts {
        for g in factor_squarefree(part, &mut stats) {
            factors.push((g, *multiplicity));
        }
    }
    factors.sort_by(|(a, _), (b, _)| a.degree().cmp(&b.degree()));

    Factorization {
        content: sf.content,
        factors,
        stats,
    }
}

/// Returns the distinct irreducible factors of `f`, ignoring multiplicities.
#[must_use]
pub fn irreducible_factors(f: &DensePoly<Z>) -> Vec<DensePoly<Z>> {
    factor(f).factors.into_iter().map(|(g, _)| g).collect()
}

/// Returns true if `f` is irreducible over Q (degree at least 1).
#[must_use]
pub fn is_irreducible(f: &DensePoly<Z>) -> bool {
    if f.is_zero() || f.degree() == 0 {
        return false;
    }
    let fact = factor(f);
    fact.factors.len() == 1 && fact.factors[0].1 == 1
}

/// Factors many polynomials in parallel.
#[must_use]
pub fn factor_batch(polys: &[DensePoly<Z>]) -> Vec<Factorization> {
    polys.par_iter().map(factor).collect()
}

fn is_small_prime(n: u64) -> bool {
    n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

/// Picks the admissible prime giving the fewest modular factors.
fn choose_prime(f: &DensePoly<Z>) -> (u64, ZpPoly, usize) {
    let mut best: Option<(u64, ZpPoly, usize)> = None;
    let mut found = 0;

    for p in (3u64..).filter(|&p| is_small_prime(p)) {
        if reduce_integer(&f.leading_coeff().0, p) == 0 {
            continue;
        }
        let fp = ZpPoly::from_z(f, p);
        if !fp.is_squarefree() {
            continue;
        }
        let count = count_factors(&distinct_degree_factorization(&fp));
        trace!(prime = p, modular_factors = count, "admissible prime");
        if best.as_ref().map_or(true, |(_, _, c)| count < *c) {
            best = Some((p, fp, count));
        }
        found += 1;
        if found == PRIME_CANDIDATES || count == 1 {
            break;
        }
    }

    // The prime loop only ends after at least one admissible prime.
    best.unwrap_or_else(|| unreachable!("squarefree polynomials have admissible primes"))
}

/// Factors a primitive squarefree polynomial with positive leading coefficient.
fn factor_squarefree(f: &DensePoly<Z>, stats: &mut FactorStats) -> Vec<DensePoly<Z>> {
    if f.degree() <= 1 {
        return vec![f.clone()];
    }

    let (p, fp, count) = choose_prime(f);
    stats.max_mod_factors = stats.max_mod_factors.max(count);
    if count == 1 {
        return vec![f.clone()];
    }

    let modular = cantor_zassenhaus_factor(&fp).factors;

    // Any factor g of f satisfies ||g||_inf <= 2^n ||f||_1; lifting beyond
    // twice that bound times the leading coefficient makes the symmetric
    // representatives exact.
    let lc = f.leading_coeff().0.clone();
    let mut bound = Integer::one().shl(f.degree() + 1) * norm_l1(f) * lc.abs();
    let use_lattice = modular.len() > SUBSET_SEARCH_LIMIT;
    if use_lattice {
        bound = bound.max(knapsack_modulus_bound(f, modular.len()));
    }
    let lifted = hensel_lift(f, &modular, p, &bound);
    stats.hensel_steps += lifted.steps;
    debug!(
        degree = f.degree(),
        prime = p,
        modular_factors = modular.len(),
        modulus_bits = lifted.modulus.bit_len(),
        "lifted modular factorization"
    );

    if use_lattice {
        if let Some(factors) = knapsack_recombine(f, &lifted.factors, &lifted.modulus) {
            return factors;
        }
        debug!(degree = f.degree(), "knapsack recombination failed, searching subsets");
    }
    recombine(f, lifted.factors, &lifted.modulus)
}

/// Zassenhaus recombination: tries subsets of lifted factors in order of
/// increasing size, accepting a subset when its product gives an exact
/// divisor of the remaining polynomial.
fn recombine(f: &DensePoly<Z>, mut lifted: Vec<DensePoly<Z>>, modulus: &Integer) -> Vec<DensePoly<Z>> {
    let mut result = Vec::new();
    let mut rest = f.clone();
    let mut size = 1;

    while 2 * size <= lifted.len() {
        let mut found = None;
        for subset in Subsets::new(lifted.len(), size) {
            let lc = DensePoly::constant(rest.leading_coeff().clone());
            let candidate = subset
                .iter()
                .fold(lc, |acc, &i| acc.mul(&lifted[i]));
            let candidate = primitive_part(&symmetric_mod(&candidate, modulus));
            if let Some(quotient) = div_exact(&rest, &candidate) {
                found = Some((subset, candidate, quotient));
                break;
            }
        }

        match found {
            Some((subset, candidate, quotient)) => {
                result.push(candidate);
                rest = primitive_part(&quotient);
                for &i in subset.iter().rev() {
                    lifted.remove(i);
                }
            }
            None => size += 1,
        }
    }

    if rest.degree() > 0 {
        result.push(rest);
    }
    result
}

/// Iterator over the `k`-element subsets of `0..n` in lexicographic order.
struct Subsets {
    n: usize,
    current: Option<Vec<usize>>,
}

impl Subsets {
    fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            current: (k <= n).then(|| (0..k).collect()),
        }
    }
}

impl Iterator for Subsets {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let out = self.current.clone()?;
        let k = out.len();
        let mut next = out.clone();
        // Advance the rightmost index that still has room.
        let pos = (0..k).rev().find(|&i| next[i] < self.n - k + i);
        self.current = pos.map(|i| {
            next[i] += 1;
            for j in i + 1..k {
                next[j] = next[j - 1] + 1;
            }
            next
        });
        Some(out)
    }
}
