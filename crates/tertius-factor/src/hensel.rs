//! Quadratic Hensel lifting.
//!
//! A coprime factorization of `f mod p` is lifted to `p^(2^j)` along a
//! balanced binary tree. Each node splits its product into two halves and
//! lifts that pair, squaring the modulus per step.

use num_traits::{One, Zero};
use tertius_integers::Integer;
use tertius_poly::dense::DensePoly;
use tertius_rings::integers::Z;

use crate::modular::ZpPoly;

/// Lifted factors together with the modulus they hold for.
#[derive(Clone, Debug)]
pub struct HenselLiftResult {
    /// The lifted monic factors, coefficients in `[0, modulus)`.
    pub factors: Vec<DensePoly<Z>>,
    /// Starting prime `p`.
    pub prime: u64,
    /// `p^(2^j)` after the last step.
    pub modulus: Integer,
    /// Number of quadratic lifting steps performed across the tree.
    pub steps: usize,
}

/// Reduces every coefficient into `[0, m)`.
#[must_use]
pub fn reduce_mod(f: &DensePoly<Z>, m: &Integer) -> DensePoly<Z> {
    f.map(|c| Z(c.0.clone() - c.0.div_floor(m) * m))
}

/// Reduces every coefficient into the symmetric range `(-m/2, m/2]`.
#[must_use]
pub fn symmetric_mod(f: &DensePoly<Z>, m: &Integer) -> DensePoly<Z> {
    let half = m.shr_floor(1);
    f.map(|c| {
        let r = c.0.clone() - c.0.div_floor(m) * m;
        if r > half {
            Z(r - m)
        } else {
            Z(r)
        }
    })
}

/// Inverse of `a` modulo `m`, if it exists.
#[must_use]
pub fn inv_mod(a: &Integer, m: &Integer) -> Option<Integer> {
    let (mut r0, mut r1) = (a.clone() - a.div_floor(m) * m, m.clone());
    let (mut s0, mut s1) = (Integer::one(), Integer::zero());
    while !r1.is_zero() {
        let q = r0.div_floor(&r1);
        let r = r0.clone() - q.clone() * &r1;
        let s = s0.clone() - q * &s1;
        r0 = std::mem::replace(&mut r1, r);
        s0 = std::mem::replace(&mut s1, s);
    }
    r0.is_one().then(|| s0.clone() - s0.div_floor(m) * m)
}

/// Divides by a monic polynomial over Z.
fn div_rem_monic(a: &DensePoly<Z>, b: &DensePoly<Z>) -> (DensePoly<Z>, DensePoly<Z>) {
    let db = b.degree();
    if a.is_zero() || a.degree() < db {
        return (DensePoly::zero(), a.clone());
    }
    let mut rem: Vec<Integer> = a.coeffs().iter().map(|c| c.0.clone()).collect();
    let mut quot = vec![Integer::zero(); a.degree() - db + 1];
    for k in (0..quot.len()).rev() {
        let c = rem[k + db].clone();
        if c.is_zero() {
            continue;
        }
        for (i, bc) in b.coeffs().iter().enumerate() {
            rem[k + i] = rem[k + i].clone() - c.clone() * &bc.0;
        }
        quot[k] = c;
    }
    (
        DensePoly::new(quot.into_iter().map(Z).collect()),
        DensePoly::new(rem.into_iter().map(Z).collect()),
    )
}

/// One quadratic Hensel step.
///
/// Given `f ≡ g h`, `s g + t h ≡ 1 (mod m)` with `h` monic, returns the
/// corresponding quadruple modulo `m^2`.
fn hensel_step(
    f: &DensePoly<Z>,
    g: &DensePoly<Z>,
    h: &DensePoly<Z>,
    s: &DensePoly<Z>,
    t: &DensePoly<Z>,
    m: &Integer,
) -> (DensePoly<Z>, DensePoly<Z>, DensePoly<Z>, DensePoly<Z>, Integer) {
    let m2 = m.clone() * m;

    let e = reduce_mod(&f.sub(&g.mul(h)), &m2);
    let (q, r) = div_rem_monic(&reduce_mod(&s.mul(&e), &m2), h);
    let g_new = reduce_mod(&g.add(&t.mul(&e)).add(&q.mul(g)), &m2);
    let h_new = reduce_mod(&h.add(&r), &m2);

    let b = reduce_mod(
        &s.mul(&g_new).add(&t.mul(&h_new)).sub(&DensePoly::one()),
        &m2,
    );
    let (c, d) = div_rem_monic(&reduce_mod(&s.mul(&b), &m2), &h_new);
    let s_new = reduce_mod(&s.sub(&d), &m2);
    let t_new = reduce_mod(&t.sub(&t.mul(&b)).sub(&c.mul(&g_new)), &m2);

    (g_new, h_new, s_new, t_new, m2)
}

fn lift_tree(
    f: &DensePoly<Z>,
    factors: &[ZpPoly],
    p: u64,
    modulus: &Integer,
    steps: &mut usize,
) -> Vec<DensePoly<Z>> {
    let lc = &f.leading_coeff().0;
    if factors.len() == 1 {
        let inv = inv_mod(lc, modulus).unwrap_or_else(Integer::one);
        return vec![reduce_mod(&f.scale(&Z(inv)), modulus)];
    }

    let mid = factors.len() / 2;
    let (left, right) = factors.split_at(mid);
    let g0 = left
        .iter()
        .fold(ZpPoly::from_z(&DensePoly::constant(Z(lc.clone())), p), |acc, u| acc.mul(u));
    let h0 = right.iter().fold(ZpPoly::one(p), |acc, u| acc.mul(u));
    let (_, s0, t0) = g0.ext_gcd(&h0);

    let mut g = g0.to_z();
    let mut h = h0.to_z();
    let mut s = s0.to_z();
    let mut t = t0.to_z();
    let mut m = Integer::from(p);
    while m < *modulus {
        let (g1, h1, s1, t1, m1) = hensel_step(f, &g, &h, &s, &t, &m);
        g = g1;
        h = h1;
        s = s1;
        t = t1;
        m = m1;
        *steps += 1;
    }

    let mut lifted = lift_tree(&g, left, p, modulus, steps);
    lifted.extend(lift_tree(&h, right, p, modulus, steps));
    lifted
}

/// Lifts the monic factors of `f mod p` to monic factors modulo `p^(2^j)`,
/// where `j` is the smallest exponent with `p^(2^j) >= bound`.
///
/// The factors must be pairwise coprime modulo `p`, their product must equal
/// `f` up to the leading coefficient, and `p` must not divide the leading
/// coefficient of `f`.
#[must_use]
pub fn hensel_lift(
    f: &DensePoly<Z>,
    factors_mod_p: &[ZpPoly],
    p: u64,
    bound: &Integer,
) -> HenselLiftResult {
    let prime = Integer::from(p);
    let mut modulus = prime.clone();
    while modulus < *bound {
        modulus = modulus.clone() * &modulus;
    }

    if factors_mod_p.is_empty() {
        return HenselLiftResult {
            factors: vec![],
            prime: p,
            modulus,
            steps: 0,
        };
    }

    let mut steps = 0;
    let factors = lift_tree(f, factors_mod_p, p, &modulus, &mut steps);
    HenselLiftResult {
        factors,
        prime: p,
        modulus,
        steps,
    }
}
