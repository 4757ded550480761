//! Property tests for series inversion, logarithm and exponential.

#[cfg(test)]
mod tests {
    use proptest::collection::vec;
    use proptest::prelude::*;

    use tertius_rings::rationals::Q;

    use crate::PowerSeries;

    fn series(constant: i64) -> impl Strategy<Value = PowerSeries<Q>> {
        vec((-9i64..9, 1i64..5), 1..8).prop_map(move |terms| {
            let mut coeffs: Vec<Q> = terms.into_iter().map(|(n, d)| Q::new(n, d)).collect();
            coeffs[0] = Q::from_integer(constant);
            let precision = coeffs.len() + 2;
            PowerSeries::new(coeffs, precision)
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn inverse_is_two_sided(f in series(3)) {
            let g = f.inverse().unwrap();
            prop_assert_eq!(f.mul(&g), PowerSeries::one(f.precision()));
        }

        #[test]
        fn log_of_product_is_sum(f in series(1), g in series(1)) {
            let lhs = f.mul(&g).log().unwrap();
            let rhs = f.log().unwrap().add(&g.log().unwrap());
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn exp_of_log(f in series(1)) {
            prop_assert_eq!(f.log().unwrap().exp_of().unwrap(), f);
        }

        #[test]
        fn borel_round_trip(f in series(2)) {
            prop_assert_eq!(f.borel().inv_borel(), f);
        }
    }
}
