//! Property-based tests for the field laws, exact comparisons and the
//! canonical form of stored values.

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use proptest::prelude::*;
    use tertius_factor::irreducible_factors;
    use tertius_integers::{small_gcd, Integer, Rational};
    use tertius_poly::integer::content;

    use crate::{isolate_roots, validate, AlgebraicNumber, IsolationConfig};

    /// `(a + b sqrt d) / c` for small integers.
    fn quadratic() -> impl Strategy<Value = AlgebraicNumber> {
        (
            -4i64..=4,
            -3i64..=3,
            1i64..=3,
            prop::sample::select(vec![-3i64, -2, -1, 2, 3, 5]),
        )
            .prop_map(|(a, b, c, d)| {
                AlgebraicNumber::sqrt_rational(&Rational::from(d))
                    .mul_rational(&Rational::from_i64(b, c))
                    .add_rational(&Rational::from_i64(a, c))
            })
    }

    /// Values of degree 3 and 4: cube and fourth roots of rationals that
    /// are not perfect powers, shifted by an integer, and sums of two
    /// square roots.
    fn low_degree() -> impl Strategy<Value = AlgebraicNumber> {
        let radical = (
            prop::sample::select(vec![-5i64, -3, -2, 2, 3, 6, 10]),
            prop::sample::select(vec![1i64, 7]),
            3u32..=4,
            -2i64..=2,
        )
            .prop_map(|(p, q, n, shift)| {
                AlgebraicNumber::from_rational(&Rational::from_i64(p, q))
                    .root(n)
                    .add_rational(&Rational::from(shift))
            });
        let two_roots = prop::sample::subsequence(vec![-1i64, 2, 3, 5, 7], 2).prop_map(|ds| {
            let r = |d: i64| AlgebraicNumber::sqrt_rational(&Rational::from(d));
            r(ds[0]).add(&r(ds[1]))
        });
        prop_oneof![radical, two_roots]
    }

    fn assert_canonical(x: &AlgebraicNumber) -> Result<(), TestCaseError> {
        let p = x.minimal_polynomial();
        prop_assert!(p.degree() >= 1);
        prop_assert!(p.leading_coeff().0.is_positive());
        prop_assert_eq!(content(p), Integer::from(1));
        let factors = irreducible_factors(p);
        prop_assert_eq!(factors.len(), 1);
        prop_assert_eq!(factors[0].degree(), p.degree());
        prop_assert!(validate(p, x.enclosure(), 64).is_some());
        let isolated = isolate_roots(p, &IsolationConfig::default());
        let inside = isolated.iter().filter(|r| r.overlaps(x.enclosure())).count();
        prop_assert_eq!(inside, 1);
        Ok(())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(12))]

        #[test]
        fn identities(x in quadratic()) {
            let zero = AlgebraicNumber::zero();
            let one = AlgebraicNumber::one();
            prop_assert_eq!(x.add(&zero), x.clone());
            prop_assert_eq!(x.mul(&one), x.clone());
            prop_assert!(x.mul(&zero).is_zero());
            prop_assert_eq!(x.div(&one), x.clone());
            prop_assert!(x.sub(&x).is_zero());
            if !x.is_zero() {
                prop_assert!(x.div(&x).is_one());
            }
        }

        #[test]
        fn power_laws(x in quadratic(), y in quadratic(), m in 0u32..3, n in 0u32..3) {
            prop_assert_eq!(x.pow(m).mul(&x.pow(n)), x.pow(m + n));
            prop_assert_eq!(x.mul(&y).pow(2), x.pow(2).mul(&y.pow(2)));
        }

        #[test]
        fn root_then_power(x in quadratic(), n in 1u32..4) {
            prop_assert_eq!(x.root(n).pow(n), x);
        }

        #[test]
        fn real_and_imaginary_parts(x in quadratic()) {
            let (re, im) = (x.re(), x.im());
            prop_assert!(re.is_real() && im.is_real());
            prop_assert_eq!(re.add(&im.mul_i()), x);
        }

        #[test]
        fn comparisons_match_signs(x in quadratic(), y in quadratic()) {
            prop_assert_eq!(x.cmp_re(&y), x.sub(&y).sgn_re().cmp(&0));
            prop_assert_eq!(x.cmp_abs_re(&y), x.re().abs().cmp_re(&y.re().abs()));
            prop_assert_eq!(x.cmp_re(&x), Ordering::Equal);
        }

        #[test]
        fn conjugates_sum_to_trace(x in quadratic()) {
            let p = x.minimal_polynomial();
            let d = x.degree();
            let trace = -Rational::new(p.coeff(d - 1).0, p.coeff(d).0);
            let sum = x
                .conjugates()
                .iter()
                .fold(AlgebraicNumber::zero(), |acc, c| acc.add(c));
            prop_assert_eq!(sum.to_rational(), Some(trace));
        }

        #[test]
        fn log_inverts_exp(p in -6i64..=6, q in 1i64..=6) {
            prop_assume!(small_gcd(p.unsigned_abs(), q.unsigned_abs()) == 1);
            prop_assume!(p.abs() <= q && p != -q);
            let z = AlgebraicNumber::exp_pi_i(p, q);
            prop_assert_eq!(z.log_pi_i(), Some((p, q.unsigned_abs())));
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(6))]

        #[test]
        fn field_laws(x in quadratic(), y in quadratic(), z in quadratic()) {
            prop_assert_eq!(x.add(&y).add(&z), x.add(&y.add(&z)));
            prop_assert_eq!(x.mul(&y), y.mul(&x));
            if !x.is_zero() && !y.is_zero() {
                prop_assert_eq!(z.div(&x.div(&y)), z.div(&x).mul(&y));
            }
        }

        #[test]
        fn low_degree_values_are_canonical(x in low_degree()) {
            prop_assert!((3..=4).contains(&x.degree()));
            assert_canonical(&x)?;
            assert_canonical(&x.neg())?;
            assert_canonical(&x.inv())?;
        }

        #[test]
        fn mixed_degree_arithmetic(x in low_degree(), y in quadratic()) {
            let sum = x.add(&y);
            assert_canonical(&sum)?;
            prop_assert_eq!(sum.sub(&y), x.clone());
            if !y.is_zero() {
                let product = x.mul(&y);
                assert_canonical(&product)?;
                prop_assert_eq!(product.div(&y), x);
            }
        }
    }
}
