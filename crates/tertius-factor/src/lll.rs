//! LLL (Lenstra-Lenstra-Lovász) lattice reduction over Q.
//!
//! Rows of the input matrix are the basis vectors. The Gram-Schmidt
//! coefficients `μ` and squared norms `B_i = ||b*_i||^2` are kept exactly
//! and updated in place on size reductions and swaps.
//!
//! Used by the knapsack recombination of lifted factors.

use tertius_integers::Rational;
use tertius_linalg::dense_matrix::DenseMatrix;
use tertius_rings::rationals::Q;
use tertius_rings::traits::{Field, Ring};

/// Result of LLL reduction.
#[derive(Clone, Debug)]
pub struct LllResult {
    /// The reduced basis (rows are basis vectors).
    pub basis: DenseMatrix<Q>,
    /// `||b*_i||^2` for the reduced basis.
    pub gram_schmidt_norms: Vec<Q>,
    /// Number of row swaps performed.
    pub swaps: usize,
}

/// Gram-Schmidt data of the current basis.
struct GramSchmidt {
    /// `μ[i, j] = <b_i, b*_j> / B_j` for `j < i`.
    mu: DenseMatrix<Q>,
    /// `B_i = ||b*_i||^2`.
    norms: Vec<Q>,
}

fn dot(a: &[Q], b: &[Q]) -> Q {
    a.iter()
        .zip(b)
        .fold(Q::zero(), |acc, (x, y)| acc + x.clone() * y.clone())
}

fn row(m: &DenseMatrix<Q>, i: usize) -> Vec<Q> {
    (0..m.num_cols()).map(|j| m[(i, j)].clone()).collect()
}

fn gram_schmidt(b: &DenseMatrix<Q>) -> GramSchmidt {
    let n = b.num_rows();
    let mut mu = DenseMatrix::<Q>::identity(n);
    let mut norms: Vec<Q> = Vec::with_capacity(n);
    let mut stars: Vec<Vec<Q>> = Vec::with_capacity(n);

    for i in 0..n {
        let bi = row(b, i);
        let mut star = bi.clone();
        for j in 0..i {
            let Some(inv) = norms[j].inv() else {
                continue;
            };
            let m = dot(&bi, &stars[j]) * inv;
            for (s, t) in star.iter_mut().zip(&stars[j]) {
                *s = s.clone() - m.clone() * t.clone();
            }
            mu[(i, j)] = m;
        }
        norms.push(dot(&star, &star));
        stars.push(star);
    }

    GramSchmidt { mu, norms }
}

/// The integer nearest to `q`, halves rounded up.
fn nearest_integer(q: &Q) -> Q {
    Q(Rational::from_integer((&q.0 + &Rational::from_i64(1, 2)).floor()))
}

fn is_size_reduced(mu: &Q) -> bool {
    let half = Q::new(1, 2);
    *mu <= half && *mu >= -half
}

/// `b_k -= round(μ[k, l]) b_l`, keeping `μ` consistent.
fn size_reduce(b: &mut DenseMatrix<Q>, gs: &mut GramSchmidt, k: usize, l: usize) {
    let mu_kl = gs.mu[(k, l)].clone();
    if is_size_reduced(&mu_kl) {
        return;
    }
    let r = nearest_integer(&mu_kl);
    for col in 0..b.num_cols() {
        b[(k, col)] = b[(k, col)].clone() - r.clone() * b[(l, col)].clone();
    }
    // μ[l, l] = 1 takes care of μ[k, l] itself.
    for j in 0..=l {
        gs.mu[(k, j)] = gs.mu[(k, j)].clone() - r.clone() * gs.mu[(l, j)].clone();
    }
}

/// `B_k >= (δ - μ[k, k-1]^2) B_{k-1}`.
fn satisfies_lovasz(gs: &GramSchmidt, k: usize, delta: &Q) -> bool {
    let mu = gs.mu[(k, k - 1)].clone();
    let threshold = (delta.clone() - mu.clone() * mu) * gs.norms[k - 1].clone();
    gs.norms[k] >= threshold
}

/// Swaps `b_{k-1}` and `b_k` and updates the Gram-Schmidt data.
fn swap(b: &mut DenseMatrix<Q>, gs: &mut GramSchmidt, k: usize) {
    let n = b.num_rows();
    b.swap_rows(k - 1, k);

    let mu = gs.mu[(k, k - 1)].clone();
    let (b_prev, b_k) = (gs.norms[k - 1].clone(), gs.norms[k].clone());
    let b_new = b_k.clone() + mu.clone() * mu.clone() * b_prev.clone();
    let Some(inv) = b_new.inv() else {
        // b_k and b_{k-1} are both dependent on earlier rows.
        return;
    };
    let mu_new = mu.clone() * b_prev.clone() * inv.clone();
    gs.norms[k] = b_prev * b_k * inv;
    gs.norms[k - 1] = b_new;
    gs.mu[(k, k - 1)] = mu_new.clone();

    for j in 0..k - 1 {
        let tmp = gs.mu[(k - 1, j)].clone();
        gs.mu[(k - 1, j)] = gs.mu[(k, j)].clone();
        gs.mu[(k, j)] = tmp;
    }
    for i in k + 1..n {
        let t = gs.mu[(i, k)].clone();
        gs.mu[(i, k)] = gs.mu[(i, k - 1)].clone() - mu.clone() * t.clone();
        gs.mu[(i, k - 1)] = t + mu_new.clone() * gs.mu[(i, k)].clone();
    }
}

/// Performs LLL reduction on a lattice basis.
///
/// # Arguments
///
/// * `basis` - Matrix whose rows are linearly independent basis vectors
/// * `delta` - Reduction parameter in `(1/4, 1)`, typically 3/4 or 99/100
///
/// # Returns
///
/// A reduced basis of the same lattice.
#[must_use]
pub fn lll_reduce(basis: &DenseMatrix<Q>, delta: &Q) -> LllResult {
    let n = basis.num_rows();
    let mut b = basis.clone();
    let mut gs = gram_schmidt(&b);
    let mut swaps = 0;

    let mut k = 1;
    while k < n {
        size_reduce(&mut b, &mut gs, k, k - 1);
        if satisfies_lovasz(&gs, k, delta) {
            for l in (0..k - 1).rev() {
                size_reduce(&mut b, &mut gs, k, l);
            }
            k += 1;
        } else {
            swap(&mut b, &mut gs, k);
            swaps += 1;
            k = (k - 1).max(1);
        }
    }

    LllResult {
        basis: b,
        gram_schmidt_norms: gs.norms,
        swaps,
    }
}

/// Squared Euclidean norm of a lattice vector.
#[must_use]
pub fn vector_norm_squared(v: &[Q]) -> Q {
    dot(v, v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    fn qm(rows: &[&[i64]]) -> DenseMatrix<Q> {
        DenseMatrix::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|&x| Q::from_integer(x)).collect())
                .collect(),
        )
    }

    fn rows(m: &DenseMatrix<Q>) -> Vec<Vec<Q>> {
        (0..m.num_rows()).map(|i| row(m, i)).collect()
    }

    #[test]
    fn test_identity_is_reduced() {
        let basis = qm(&[&[1, 0], &[0, 1]]);
        let result = lll_reduce(&basis, &Q::new(3, 4));
        assert_eq!(result.basis, basis);
        assert_eq!(result.swaps, 0);
    }

    #[test]
    fn test_shortest_vector_found() {
        // the lattice Z^2 in a skewed basis
        let basis = qm(&[&[1, 1], &[3, 4]]);
        let result = lll_reduce(&basis, &Q::new(3, 4));
        for r in rows(&result.basis) {
            assert_eq!(vector_norm_squared(&r), Q::from_integer(1));
        }
        assert_eq!(result.basis.det().0.abs(), Rational::one());
    }

    #[test]
    fn test_larger_basis() {
        let basis = qm(&[&[1, 1, 1], &[-1, 0, 2], &[3, 5, 6]]);
        let result = lll_reduce(&basis, &Q::new(99, 100));
        // the lattice has determinant 3 and stays the same
        assert_eq!(result.basis.det().0.abs(), Rational::from(3i64));
        // Lovász and size conditions hold on the output
        let gs = gram_schmidt(&result.basis);
        assert_eq!(gs.norms, result.gram_schmidt_norms);
        for k in 1..3 {
            assert!(satisfies_lovasz(&gs, k, &Q::new(99, 100)));
            for j in 0..k {
                assert!(is_size_reduced(&gs.mu[(k, j)]));
            }
        }
        let first = vector_norm_squared(&rows(&result.basis)[0]);
        assert!(first <= Q::from_integer(3));
    }

    #[test]
    fn test_knapsack_vector() {
        // a hidden small combination 1*a + 1*b - 1*c = 5 against a big modulus
        let m = 1_000_003;
        let basis = qm(&[
            &[1, 0, 0, 123_457],
            &[0, 1, 0, 400_000],
            &[0, 0, 1, 523_452],
            &[0, 0, 0, m],
        ]);
        let result = lll_reduce(&basis, &Q::new(3, 4));
        let short = rows(&result.basis)
            .into_iter()
            .find(|r| vector_norm_squared(r) <= Q::from_integer(28));
        let short = short.unwrap();
        let sign = if short[0] < Q::zero() { Q::from_integer(-1) } else { Q::one() };
        let expected: Vec<Q> = [1, 1, -1, 5].iter().map(|&x| Q::from_integer(x) * sign.clone()).collect();
        assert_eq!(short, expected);
    }

    #[test]
    fn test_nearest_integer() {
        assert_eq!(nearest_integer(&Q::new(3, 2)), Q::from_integer(2));
        assert_eq!(nearest_integer(&Q::new(-3, 2)), Q::from_integer(-1));
        assert_eq!(nearest_integer(&Q::new(7, 4)), Q::from_integer(2));
        assert_eq!(nearest_integer(&Q::new(-7, 4)), Q::from_integer(-2));
        assert_eq!(nearest_integer(&Q::from_integer(3)), Q::from_integer(3));
    }

    #[test]
    fn test_is_size_reduced() {
        assert!(is_size_reduced(&Q::from_integer(0)));
        assert!(is_size_reduced(&Q::new(-1, 2)));
        assert!(!is_size_reduced(&Q::from_integer(1)));
        assert!(!is_size_reduced(&Q::new(-3, 4)));
    }
}
