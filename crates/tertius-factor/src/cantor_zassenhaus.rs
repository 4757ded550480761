//! Cantor-Zassenhaus algorithm for polynomial factorization over finite fields.
//!
//! Distinct-degree factorization splits a squarefree polynomial into
//! products of irreducibles of equal degree; the probabilistic
//! equal-degree step then separates those. The prime must be odd.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::modular::ZpPoly;

/// Result of Cantor-Zassenhaus factorization.
#[derive(Clone, Debug)]
pub struct CantorZassenhausResult {
    /// Monic irreducible factors.
    pub factors: Vec<ZpPoly>,
    /// Number of random splitting attempts made.
    pub attempts: usize,
}

/// Factors a squarefree polynomial modulo an odd prime into monic irreducibles.
///
/// The random source is seeded deterministically, so results are reproducible.
#[must_use]
pub fn cantor_zassenhaus_factor(f: &ZpPoly) -> CantorZassenhausResult {
    let mut rng = ChaCha8Rng::seed_from_u64(123);
    let mut factors = Vec::new();
    let mut attempts = 0;

    match f.degree() {
        None | Some(0) => {}
        Some(1) => factors.push(f.monic()),
        Some(_) => {
            for (d, g) in distinct_degree_factorization(f) {
                let mut edf = equal_degree_factorization(&g, d, &mut rng);
                attempts += edf.attempts;
                factors.append(&mut edf.factors);
            }
        }
    }

    CantorZassenhausResult { factors, attempts }
}

/// Splits a squarefree polynomial into `(d, g)` pairs where `g` is the
/// product of all monic irreducible factors of degree `d`.
#[must_use]
pub fn distinct_degree_factorization(f: &ZpPoly) -> Vec<(usize, ZpPoly)> {
    let p = f.modulus();
    let mut result = Vec::new();
    let mut h = f.monic();
    let x = ZpPoly::x(p);
    let mut x_pow = x.pow_mod(p, &h);
    let mut d = 1;

    while h.degree().is_some_and(|n| n >= 2 * d) {
        let g = h.gcd(&x_pow.sub(&x));
        if g.degree().is_some_and(|n| n > 0) {
            h = h.div_rem(&g).0;
            x_pow = x_pow.rem(&h);
            result.push((d, g));
        }
        x_pow = x_pow.pow_mod(p, &h);
        d += 1;
    }

    if let Some(n) = h.degree().filter(|&n| n > 0) {
        result.push((n, h));
    }

    result
}

/// Computes the number of irreducible factors from a distinct-degree split.
#[must_use]
pub fn count_factors(ddf: &[(usize, ZpPoly)]) -> usize {
    ddf.iter()
        .map(|(d, g)| g.degree().unwrap_or(0) / d)
        .sum()
}

/// Splits a product of degree-`d` irreducibles into its factors.
fn equal_degree_factorization(
    f: &ZpPoly,
    d: usize,
    rng: &mut ChaCha8Rng,
) -> CantorZassenhausResult {
    let n = f.degree().unwrap_or(0);
    if n == d {
        return CantorZassenhausResult {
            factors: vec![f.monic()],
            attempts: 0,
        };
    }

    let p = f.modulus();
    let mut attempts = 0;
    loop {
        attempts += 1;
        let a = ZpPoly::new(p, (0..n).map(|_| rng.gen_range(0..p)).collect());
        if a.degree().map_or(true, |k| k == 0) {
            continue;
        }

        // a^((p^d - 1)/2) = (a * a^p * ... * a^(p^(d-1)))^((p - 1)/2)
        let mut norm = a.rem(f);
        let mut frob = norm.clone();
        for _ in 1..d {
            frob = frob.pow_mod(p, f);
            norm = norm.mul(&frob).rem(f);
        }
        let b = norm.pow_mod((p - 1) / 2, f).sub(&ZpPoly::one(p));
        let g = f.gcd(&b);

        if let Some(k) = g.degree() {
            if k > 0 && k < n {
                let h = f.div_rem(&g).0;
                let mut left = equal_degree_factorization(&g, d, rng);
                let mut right = equal_degree_factorization(&h, d, rng);
                left.factors.append(&mut right.factors);
                return CantorZassenhausResult {
                    factors: left.factors,
                    attempts: attempts + left.attempts + right.attempts,
                };
            }
        }
    }
}
