//! Property tests for polynomial arithmetic and root transforms.

#[cfg(test)]
mod tests {
    use proptest::collection::vec;
    use proptest::prelude::*;

    use num_traits::Zero;
    use tertius_integers::{Integer, Rational};
    use tertius_rings::rationals::Q;
    use tertius_rings::traits::Ring;

    use crate::algorithms::gcd::{poly_div_rem, poly_gcd};
    use crate::dense::DensePoly;
    use crate::integer::{
        div_exact, eval_rational, int_poly, is_normalized, negate_roots, primitive_part, scale_roots, shift_roots,
        to_rational,
    };

    fn qpoly() -> impl Strategy<Value = DensePoly<Q>> {
        vec(-30i64..30, 1..=5).prop_map(|c| DensePoly::new(c.into_iter().map(Q::from_integer).collect()))
    }

    fn zpoly() -> impl Strategy<Value = DensePoly<tertius_rings::Z>> {
        vec(-20i64..20, 1..=6).prop_map(|c| int_poly(&c))
    }

    proptest! {
        #[test]
        fn product_evaluates_pointwise(a in qpoly(), b in qpoly(), x in -10i64..10) {
            let x = Q::from_integer(x);
            prop_assert_eq!(a.mul(&b).eval(&x), a.eval(&x) * b.eval(&x));
            prop_assert_eq!(a.sub(&b).eval(&x), a.eval(&x) - b.eval(&x));
        }

        #[test]
        fn product_distributes(a in qpoly(), b in qpoly(), c in qpoly()) {
            prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
        }

        #[test]
        fn division_identity(a in qpoly(), b in qpoly()) {
            prop_assume!(!b.is_zero());
            let (q, r) = poly_div_rem(&a, &b);
            prop_assert_eq!(q.mul(&b).add(&r), a);
            prop_assert!(r.is_zero() || r.degree() < b.degree());
        }

        #[test]
        fn gcd_divides_both(a in qpoly(), b in qpoly(), c in qpoly()) {
            prop_assume!(!c.is_zero());
            let (ac, bc) = (a.mul(&c), b.mul(&c));
            let g = poly_gcd(&ac, &bc);
            prop_assume!(!g.is_zero());
            prop_assert!(g.leading_coeff().is_one());
            prop_assert!(poly_div_rem(&ac, &g).1.is_zero());
            prop_assert!(poly_div_rem(&bc, &g).1.is_zero());
            prop_assert!(poly_div_rem(&g, &poly_gcd(&c, &c)).1.is_zero());
        }

        #[test]
        fn inflate_then_deflate(p in zpoly(), k in 1usize..5) {
            prop_assume!(p.degree() > 0);
            let q = p.inflate(k);
            prop_assert_eq!(q.deflation() % k, 0);
            prop_assert_eq!(q.deflate(k), p);
        }

        #[test]
        fn primitive_part_divides(p in zpoly()) {
            prop_assume!(!p.is_zero());
            let pp = primitive_part(&p);
            prop_assert!(is_normalized(&pp));
            prop_assert_eq!(div_exact(&p, &pp).map(|q| q.degree()), Some(0));
        }

        #[test]
        fn exact_division_recovers_factor(a in zpoly(), b in zpoly()) {
            prop_assume!(!a.is_zero() && !b.is_zero());
            prop_assert_eq!(div_exact(&a.mul(&b), &b), Some(a));
        }

        #[test]
        fn linear_root_transforms(r in -30i64..30, s in 1i64..10, t in -10i64..10, u in 1i64..5) {
            // s x - r vanishes at r/s
            let p = int_poly(&[-r, s]);
            let root = Rational::from_i64(r, s);

            let shifted = shift_roots(&p, &Integer::new(t), &Integer::new(u));
            prop_assert!(eval_rational(&shifted, &(root.clone() + Rational::from_i64(t, u))).is_zero());

            prop_assume!(t != 0);
            let scaled = scale_roots(&p, &Integer::new(t), &Integer::new(u));
            prop_assert!(eval_rational(&scaled, &(root.clone() * Rational::from_i64(t, u))).is_zero());

            prop_assert!(eval_rational(&negate_roots(&p), &-root).is_zero());
        }

        #[test]
        fn rational_embedding_commutes(a in zpoly(), b in zpoly()) {
            prop_assert_eq!(to_rational(&a.mul(&b)), to_rational(&a).mul(&to_rational(&b)));
        }
    }
}
