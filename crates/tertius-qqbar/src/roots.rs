//! All roots of polynomials and all eigenvalues of matrices.

use tertius_factor::factor;
use tertius_linalg::DenseMatrix;
use tertius_poly::dense::DensePoly;
use tertius_poly::integer::{primitive_from_rational, primitive_part};
use tertius_rings::integers::Z;
use tertius_rings::rationals::Q;
use tracing::debug;

use crate::config::{IsolationConfig, RootsOptions};
use crate::error::{QqbarError, Result};
use crate::isolate::isolate_roots;
use crate::number::AlgebraicNumber;

/// Roots of an irreducible polynomial, in isolation order.
fn roots_of_irreducible(poly: &DensePoly<Z>) -> Vec<AlgebraicNumber> {
    isolate_roots(poly, &IsolationConfig::default())
        .into_iter()
        .map(|ball| AlgebraicNumber::from_raw(poly.clone(), ball))
        .collect()
}

fn sort_roots(roots: &mut [AlgebraicNumber]) {
    roots.sort_by(AlgebraicNumber::cmp_root_order);
}

impl AlgebraicNumber {
    /// All Galois conjugates, including `self`, in root order.
    #[must_use]
    pub fn conjugates(&self) -> Vec<Self> {
        if self.is_rational() {
            return vec![self.clone()];
        }
        let mut roots = roots_of_irreducible(&self.poly);
        sort_roots(&mut roots);
        roots
    }
}

/// All complex roots of `poly`, repeated by multiplicity and sorted.
///
/// # Errors
///
/// Returns an error if `poly` is zero or constant.
pub fn roots_of_polynomial(poly: &DensePoly<Z>) -> Result<Vec<AlgebraicNumber>> {
    roots_of_polynomial_with_options(poly, RootsOptions::default())
}

/// All complex roots of `poly`, repeated by multiplicity.
///
/// With `options.irreducible` the polynomial is taken as irreducible and
/// not factored; with `options.sorted` the roots come in
/// [`cmp_root_order`](AlgebraicNumber::cmp_root_order).
///
/// # Errors
///
/// Returns an error if `poly` is zero or constant.
pub fn roots_of_polynomial_with_options(
    poly: &DensePoly<Z>,
    options: RootsOptions,
) -> Result<Vec<AlgebraicNumber>> {
    if poly.is_zero() {
        return Err(QqbarError::ZeroPolynomial);
    }
    if poly.degree() == 0 {
        return Err(QqbarError::ConstantPolynomial);
    }

    let factors = if options.irreducible {
        vec![(primitive_part(poly), 1)]
    } else {
        factor(poly).factors
    };
    debug!(degree = poly.degree(), factors = factors.len(), "isolating roots");

    let mut roots = Vec::with_capacity(poly.degree());
    for (f, multiplicity) in &factors {
        for root in roots_of_irreducible(f) {
            roots.extend(std::iter::repeat(root).take(*multiplicity));
        }
    }
    if options.sorted {
        sort_roots(&mut roots);
    }
    Ok(roots)
}

/// All complex roots of a polynomial with rational coefficients.
///
/// # Errors
///
/// Returns an error if `poly` is zero or constant.
pub fn roots_of_rational_polynomial(poly: &DensePoly<Q>) -> Result<Vec<AlgebraicNumber>> {
    if poly.is_zero() {
        return Err(QqbarError::ZeroPolynomial);
    }
    roots_of_polynomial(&primitive_from_rational(poly))
}

/// Eigenvalues of a square rational matrix, repeated by algebraic
/// multiplicity and sorted.
///
/// # Errors
///
/// Returns [`QqbarError::NotSquare`] if the matrix is not square.
pub fn eigenvalues_of_rational_matrix(m: &DenseMatrix<Q>) -> Result<Vec<AlgebraicNumber>> {
    if !m.is_square() {
        return Err(QqbarError::NotSquare {
            rows: m.num_rows(),
            cols: m.num_cols(),
        });
    }
    if m.num_rows() == 0 {
        return Ok(Vec::new());
    }
    roots_of_rational_polynomial(&m.charpoly())
}

/// Eigenvalues of a square integer matrix, repeated by algebraic
/// multiplicity and sorted.
///
/// # Errors
///
/// Returns [`QqbarError::NotSquare`] if the matrix is not square.
pub fn eigenvalues_of_integer_matrix(m: &DenseMatrix<Z>) -> Result<Vec<AlgebraicNumber>> {
    eigenvalues_of_rational_matrix(&m.map(Q::from_z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tertius_integers::Rational;
    use tertius_poly::integer::int_poly;
    use tertius_rings::traits::Ring;

    fn sqrt(n: i64) -> AlgebraicNumber {
        AlgebraicNumber::sqrt_rational(&Rational::from(n))
    }

    #[test]
    fn test_roots_with_multiplicity() {
        // (x - 1)^2 (x^2 - 2)
        let p = int_poly(&[1, -2, 1]).mul(&int_poly(&[-2, 0, 1]));
        let roots = roots_of_polynomial(&p).unwrap();
        assert_eq!(roots.len(), 4);
        assert_eq!(roots[0], sqrt(2));
        assert!(roots[1].is_one() && roots[2].is_one());
        assert_eq!(roots[3], sqrt(2).neg());
    }

    #[test]
    fn test_complex_roots_sorted() {
        // x^3 - 1
        let roots = roots_of_polynomial(&int_poly(&[-1, 0, 0, 1])).unwrap();
        assert!(roots[0].is_one());
        assert_eq!(roots[1], AlgebraicNumber::root_of_unity(1, 3));
        assert_eq!(roots[2], AlgebraicNumber::root_of_unity(2, 3));
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            roots_of_polynomial(&int_poly(&[0])).unwrap_err(),
            QqbarError::ZeroPolynomial
        );
        assert_eq!(
            roots_of_polynomial(&int_poly(&[5])).unwrap_err(),
            QqbarError::ConstantPolynomial
        );
        let m = DenseMatrix::from_rows(vec![vec![Q::from_integer(1), Q::from_integer(2)]]);
        assert_eq!(
            eigenvalues_of_rational_matrix(&m).unwrap_err(),
            QqbarError::NotSquare { rows: 1, cols: 2 }
        );
    }

    #[test]
    fn test_rational_polynomial() {
        // x^2 - 1/4
        let p = DensePoly::new(vec![Q::new(-1, 4), Q::zero(), Q::from_integer(1)]);
        let roots = roots_of_rational_polynomial(&p).unwrap();
        assert_eq!(roots[0].to_rational(), Some(Rational::from_i64(1, 2)));
        assert_eq!(roots[1].to_rational(), Some(Rational::from_i64(-1, 2)));
    }

    #[test]
    fn test_eigenvalues() {
        // rotation by 90 degrees
        let m = DenseMatrix::from_rows(vec![
            vec![Z::new(0), Z::new(-1)],
            vec![Z::new(1), Z::new(0)],
        ]);
        let ev = eigenvalues_of_integer_matrix(&m).unwrap();
        assert_eq!(ev, vec![AlgebraicNumber::i(), AlgebraicNumber::neg_i()]);
        let fib = DenseMatrix::from_rows(vec![
            vec![Z::new(1), Z::new(1)],
            vec![Z::new(1), Z::new(0)],
        ]);
        let ev = eigenvalues_of_integer_matrix(&fib).unwrap();
        assert_eq!(ev[0], AlgebraicNumber::phi());
        assert!(eigenvalues_of_integer_matrix(&DenseMatrix::<Z>::zeros(0, 0)).unwrap().is_empty());
    }

    #[test]
    fn test_conjugates_sum() {
        let x = sqrt(2).add(&sqrt(3));
        let conj = x.conjugates();
        assert_eq!(conj.len(), 4);
        let sum = conj.iter().fold(AlgebraicNumber::zero(), |acc, c| acc.add(c));
        assert!(sum.is_zero());
        assert!(conj.contains(&x));
    }
}
