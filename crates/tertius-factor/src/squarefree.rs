//! Squarefree decomposition by Yun's algorithm.
//!
//! `f = content * Π f_i^i` with every `f_i` primitive, squarefree, of
//! positive leading coefficient, and the `f_i` pairwise coprime. The gcd
//! work happens over `Q`; parts are cleared back to `Z[x]`.

use rayon::prelude::*;
use tertius_poly::algorithms::gcd::{make_monic, poly_div_rem, poly_gcd};
use tertius_poly::dense::DensePoly;
use tertius_poly::integer::{primitive_from_rational, primitive_part, to_rational};
use tertius_rings::integers::Z;
use tertius_rings::rationals::Q;

/// Output of [`squarefree_factorization`].
#[derive(Clone, Debug)]
pub struct SquarefreeDecomposition {
    /// Signed content.
    pub content: Z,
    /// `(f_i, i)` for every nonconstant part, by increasing `i`.
    pub parts: Vec<(DensePoly<Z>, usize)>,
}

impl SquarefreeDecomposition {
    /// `content * Π f_i^i`.
    #[must_use]
    pub fn to_polynomial(&self) -> DensePoly<Z> {
        self.parts
            .iter()
            .map(|(f, i)| f.pow(u32::try_from(*i).unwrap_or(u32::MAX)))
            .fold(DensePoly::constant(self.content.clone()), |acc, p| acc.mul(&p))
    }
}

fn exact_quotient(a: &DensePoly<Q>, b: &DensePoly<Q>) -> DensePoly<Q> {
    poly_div_rem(a, b).0
}

/// Yun's decomposition of a nonzero integer polynomial. Constants come
/// back with no parts.
#[must_use]
pub fn squarefree_factorization(f: &DensePoly<Z>) -> SquarefreeDecomposition {
    if f.degree() == 0 {
        return SquarefreeDecomposition {
            content: f.coeff(0),
            parts: Vec::new(),
        };
    }

    let primitive = primitive_part(f);
    let content = Z(f.leading_coeff().0.div_exact(&primitive.leading_coeff().0));

    // a_1 = f / gcd(f, f'), b_1 = f' / gcd(f, f')
    let monic = make_monic(&to_rational(&primitive));
    let derivative = monic.derivative();
    let g = poly_gcd(&monic, &derivative);
    let mut a = exact_quotient(&monic, &g);
    let mut b = exact_quotient(&derivative, &g);

    let mut parts = Vec::new();
    let mut i = 1;
    // c = b - a', d = gcd(a, c) is the part of multiplicity i
    while a.degree() > 0 {
        let c = b.sub(&a.derivative());
        let d = if c.is_zero() { a.clone() } else { poly_gcd(&a, &c) };
        if d.degree() > 0 {
            parts.push((primitive_from_rational(&d), i));
        }
        a = exact_quotient(&a, &d);
        b = exact_quotient(&c, &d);
        i += 1;
    }

    SquarefreeDecomposition { content, parts }
}

/// `f / gcd(f, f')`, primitive. Constants map to 1.
#[must_use]
pub fn squarefree_part(f: &DensePoly<Z>) -> DensePoly<Z> {
    if f.degree() == 0 {
        return DensePoly::one();
    }
    let q = to_rational(f);
    primitive_from_rational(&exact_quotient(&q, &poly_gcd(&q, &q.derivative())))
}

/// [`squarefree_factorization`] over a batch, in parallel.
#[must_use]
pub fn squarefree_factorization_batch(polys: &[DensePoly<Z>]) -> Vec<SquarefreeDecomposition> {
    polys.par_iter().map(squarefree_factorization).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tertius_poly::integer::int_poly;

    fn multiplicities(sf: &SquarefreeDecomposition) -> Vec<usize> {
        sf.parts.iter().map(|(_, i)| *i).collect()
    }

    #[test]
    fn already_squarefree() {
        let f = int_poly(&[-2, 0, 1]);
        let sf = squarefree_factorization(&f);
        assert_eq!(sf.parts, vec![(f.clone(), 1)]);
        assert_eq!(sf.to_polynomial(), f);
    }

    #[test]
    fn content_and_powers() {
        // -3 (x + 1)^2 (x - 2)^3
        let f = int_poly(&[-3])
            .mul(&int_poly(&[1, 1]).pow(2))
            .mul(&int_poly(&[-2, 1]).pow(3));
        let sf = squarefree_factorization(&f);
        assert_eq!(sf.content, Z::new(-3));
        assert_eq!(sf.parts, vec![(int_poly(&[1, 1]), 2), (int_poly(&[-2, 1]), 3)]);
        assert_eq!(sf.to_polynomial(), f);
    }

    #[test]
    fn skipped_multiplicity() {
        // x (2x + 1)^3
        let f = int_poly(&[0, 1]).mul(&int_poly(&[1, 2]).pow(3));
        let sf = squarefree_factorization(&f);
        assert_eq!(multiplicities(&sf), vec![1, 3]);
        assert_eq!(sf.to_polynomial(), f);
    }

    #[test]
    fn constants_have_no_parts() {
        let sf = squarefree_factorization(&int_poly(&[-7]));
        assert_eq!(sf.content, Z::new(-7));
        assert!(sf.parts.is_empty());
    }

    #[test]
    fn radical() {
        let f = int_poly(&[1, 1]).pow(4).mul(&int_poly(&[5, 0, 1]));
        assert_eq!(squarefree_part(&f), int_poly(&[5, 5, 1, 1]));
        assert_eq!(squarefree_part(&int_poly(&[9])), DensePoly::one());
    }

    #[test]
    fn batch_matches_serial() {
        let polys = vec![int_poly(&[1, 2, 1]), int_poly(&[-1, 0, 1])];
        let results = squarefree_factorization_batch(&polys);
        assert_eq!(multiplicities(&results[0]), vec![2]);
        assert_eq!(multiplicities(&results[1]), vec![1]);
    }
}
