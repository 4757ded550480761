//! Property tests for the big integer and rational layer.

#[cfg(test)]
mod tests {
    use num_traits::One;
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    fn nonzero() -> impl Strategy<Value = i64> {
        prop_oneof![-1000i64..=-1, 1i64..=1000]
    }

    proptest! {
        #[test]
        fn gcd_and_lcm_agree(a in nonzero(), b in nonzero()) {
            let (a, b) = (Integer::new(a), Integer::new(b));
            let g = a.gcd(&b);
            prop_assert!(g.is_positive());
            prop_assert!(a.is_divisible_by(&g) && b.is_divisible_by(&g));
            prop_assert_eq!(a.lcm(&b) * g, (a * b).abs());
        }

        #[test]
        fn floor_division_remainder(a in -100_000i64..100_000, b in nonzero()) {
            let (a, b) = (Integer::new(a), Integer::new(b));
            let r = &a - &(a.div_floor(&b) * &b);
            prop_assert!(r.signum() == 0 || r.signum() == b.signum());
            prop_assert!(r.abs() < b.abs());
            prop_assert!(a.div_ceil(&b) - a.div_floor(&b) <= Integer::one());
        }

        #[test]
        fn shifts_bracket(a in -100_000i64..100_000, k in 0usize..20) {
            let a = Integer::new(a);
            let (lo, hi) = (a.shr_floor(k), a.shr_ceil(k));
            prop_assert!(lo.shl(k) <= a && a <= hi.shl(k));
            prop_assert!(hi - lo <= Integer::one());
        }

        #[test]
        fn integer_roots(a in 0i64..10_000_000, n in 1u32..6) {
            let a = Integer::new(a);
            let r = a.root_floor(n);
            prop_assert!(r.pow(n) <= a);
            prop_assert!((r.clone() + Integer::one()).pow(n) > a);
            prop_assert_eq!(a.root_exact(n).is_some(), r.pow(n) == a);
        }

        #[test]
        fn powers_have_exact_roots(a in -1000i64..1000, n in 1u32..6) {
            let p = Integer::new(a).pow(n);
            let r = p.root_exact(n);
            prop_assert!(r.is_some_and(|r| r.pow(n) == p));
        }

        #[test]
        fn rational_floor_ceil(n in -100_000i64..100_000, d in nonzero()) {
            let q = Rational::from_i64(n, d);
            let (f, c) = (Rational::from(q.floor()), Rational::from(q.ceil()));
            prop_assert!(f <= q && q <= c);
            prop_assert!(c - f <= Rational::one());
        }

        #[test]
        fn rational_reciprocal(n in nonzero(), d in nonzero()) {
            let q = Rational::from_i64(n, d);
            prop_assert_eq!(&q * &q.recip(), Rational::one());
            #[allow(clippy::cast_precision_loss)]
            let approx = n as f64 / d as f64;
            prop_assert!((q.to_f64() - approx).abs() < 1e-9);
        }
    }
}
