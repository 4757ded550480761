//! Property-based tests for enclosure of ball operations.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tertius_integers::{Integer, Rational};

    use crate::{Acb, Arb, Dyadic, Round};

    const PREC: u32 = 64;

    fn rational() -> impl Strategy<Value = Rational> {
        (-10_000i64..10_000, 1i64..500).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    fn ball(q: &Rational) -> Arb {
        Arb::from_rational(q, PREC)
    }

    fn encloses(b: &Arb, q: &Rational) -> bool {
        b.lower().to_rational() <= *q && *q <= b.upper().to_rational()
    }

    proptest! {
        #[test]
        fn arithmetic_encloses_exact_result(a in rational(), b in rational()) {
            let (x, y) = (ball(&a), ball(&b));
            prop_assert!(encloses(&x.add(&y, PREC), &(&a + &b)));
            prop_assert!(encloses(&x.sub(&y, PREC), &(&a - &b)));
            prop_assert!(encloses(&x.mul(&y, PREC), &(&a * &b)));
            if b.signum() != 0 {
                let q = x.div(&y, PREC).unwrap();
                prop_assert!(encloses(&q, &(a.clone() / &b)));
            }
        }

        #[test]
        fn rounding_brackets(m in -1_000_000i64..1_000_000, e in -40i64..40, prec in 1u32..20) {
            let x = Dyadic::new(Integer::new(m), e);
            let lo = x.round(prec, Round::Floor);
            let hi = x.round(prec, Round::Ceil);
            prop_assert!(lo <= x && x <= hi);
            prop_assert!(lo.bits() <= prec as usize && hi.bits() <= prec as usize);
        }

        #[test]
        fn dyadic_order_matches_rationals(a in -5000i64..5000, ea in -20i64..20, b in -5000i64..5000, eb in -20i64..20) {
            let x = Dyadic::new(Integer::new(a), ea);
            let y = Dyadic::new(Integer::new(b), eb);
            prop_assert_eq!(x.cmp(&y), x.to_rational().cmp(&y.to_rational()));
        }

        #[test]
        fn complex_product_encloses(a in rational(), b in rational(), c in rational(), d in rational()) {
            let z = Acb::new(ball(&a), ball(&b));
            let w = Acb::new(ball(&c), ball(&d));
            let p = z.mul(&w, PREC);
            prop_assert!(encloses(p.re(), &(&(&a * &c) - &(&b * &d))));
            prop_assert!(encloses(p.im(), &(&(&a * &d) + &(&b * &c))));
        }

        #[test]
        fn square_root_encloses(n in 1i64..1_000_000) {
            let r = Arb::from_i64(n).sqrt(PREC).unwrap();
            let s = r.sqr(PREC);
            prop_assert!(s.contains_point(&Dyadic::from_i64(n)));
        }
    }
}
