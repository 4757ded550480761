//! Roots of unity, trigonometric values at rational multiples of π, and
//! their inverses.
//!
//! `e^{2πip/q}` is a root of the cyclotomic polynomial `Φ_q` and
//! `2cos(2πk/n)` is a root of `Ψ_n`, so each constant is selected from a
//! single known irreducible polynomial by its numerical value. The inverse
//! lookups recognise those polynomials, guess the angle numerically and
//! confirm the guess by exact equality.

use num_traits::One;
use tertius_ball::{sin_cos_pi, Acb, Arb, Dyadic};
use tertius_integers::{small_gcd, Integer, Rational};
use tertius_poly::algorithms::cyclotomic::{cos_minpoly, cyclotomic, totient};
use tertius_poly::integer::{int_poly, scale_roots};
use tracing::debug;

use crate::binary::{select_root, Shape};
use crate::config::PrecisionConfig;
use crate::number::AlgebraicNumber;
use crate::validate::validate;

/// `(p', q')` in lowest terms with `p'/q' ≡ p/q mod 1`, `0 ≤ p' < q'`.
///
/// # Panics
///
/// Panics if `q` is zero.
fn reduce_mod(p: i64, q: i64) -> (u64, u64) {
    assert!(q != 0, "zero denominator");
    let (p, q) = (i128::from(p), i128::from(q));
    let (p, q) = if q < 0 { (-p, -q) } else { (p, q) };
    let p = p.rem_euclid(q);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (p, q) = (p as u64, q as u64);
    let g = small_gcd(p, q);
    (p / g, q / g)
}

/// Nearest integer to `t * n`, reduced mod `n`.
fn nearest_numerator(t: f64, n: u64) -> u64 {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let k = (t * n as f64).round() as i64;
    #[allow(clippy::cast_possible_wrap)]
    let n = n as i64;
    k.rem_euclid(n).unsigned_abs()
}

impl AlgebraicNumber {
    /// The golden ratio `(1 + √5) / 2`.
    #[must_use]
    pub fn phi() -> Self {
        let poly = int_poly(&[-1, -1, 1]);
        let approx = Dyadic::from_f64(1.618_033_988_749_895)
            .unwrap_or_else(|| unreachable!("finite literal"));
        let ball = Acb::from_arb(Arb::new(approx, Dyadic::pow2(-40)));
        let prec = PrecisionConfig::default().initial_prec;
        let enclosure = validate(&poly, &ball, prec)
            .unwrap_or_else(|| unreachable!("ball isolates the positive root"));
        Self::from_raw(poly, enclosure)
    }

    /// The root of unity `e^{2πip/q}`.
    ///
    /// # Panics
    ///
    /// Panics if `q` is zero.
    #[must_use]
    pub fn root_of_unity(p: i64, q: i64) -> Self {
        let (p, q) = reduce_mod(p, q);
        match (p, q) {
            (_, 1) => return Self::one(),
            (_, 2) => return Self::from_i64(-1),
            (1, 4) => return Self::i(),
            (3, 4) => return Self::neg_i(),
            _ => {}
        }
        #[allow(clippy::cast_possible_wrap)]
        let angle = Rational::from_i64(2 * p as i64, q as i64);
        let poly = cyclotomic(q);
        select_root("root_of_unity", std::slice::from_ref(&poly), Shape::General, |prec| {
            Some(tertius_ball::exp_pi_i(&angle, prec))
        })
    }

    /// The value `e^{πip/q}`.
    ///
    /// # Panics
    ///
    /// Panics if `q` is zero.
    #[must_use]
    pub fn exp_pi_i(p: i64, q: i64) -> Self {
        assert!(q != 0, "zero denominator");
        let q2 = q
            .checked_mul(2)
            .unwrap_or_else(|| panic!("denominator {q} too large"));
        Self::root_of_unity(p, q2)
    }

    /// `cos(πp/q)`.
    ///
    /// # Panics
    ///
    /// Panics if `q` is zero.
    #[must_use]
    pub fn cos_pi(p: i64, q: i64) -> Self {
        assert!(q != 0, "zero denominator");
        let q2 = q
            .checked_mul(2)
            .unwrap_or_else(|| panic!("denominator {q} too large"));
        // cos(πp/q) = cos(2πk/n) with k/n = p/2q in lowest terms
        let (k, n) = reduce_mod(p, q2);
        debug_assert!(n == 1 || small_gcd(k, n) == 1);
        let angle = Rational::from_i64(p, q);
        let poly = scale_roots(&cos_minpoly(n), &Integer::from(1), &Integer::from(2));
        select_root("cos_pi", std::slice::from_ref(&poly), Shape::Real, |prec| {
            Some(Acb::from_arb(sin_cos_pi(&angle, prec).1))
        })
    }

    /// `sin(πp/q)`.
    ///
    /// # Panics
    ///
    /// Panics if `q` is zero.
    #[must_use]
    pub fn sin_pi(p: i64, q: i64) -> Self {
        assert!(q != 0, "zero denominator");
        // sin(πp/q) = cos(π(q - 2p)/2q)
        let (p, q) = (i128::from(p), i128::from(q));
        let num = i64::try_from(q - 2 * p).unwrap_or_else(|_| panic!("angle {p}/{q} too large"));
        let den = i64::try_from(2 * q).unwrap_or_else(|_| panic!("angle {p}/{q} too large"));
        Self::cos_pi(num, den)
    }

    /// `tan(πp/q)`.
    ///
    /// # Panics
    ///
    /// Panics if `q` is zero or the tangent has a pole at `πp/q`.
    #[must_use]
    pub fn tan_pi(p: i64, q: i64) -> Self {
        let c = Self::cos_pi(p, q);
        assert!(!c.is_zero(), "tan_pi({p}/{q}) is a pole");
        Self::sin_pi(p, q).div(&c)
    }

    /// `cot(πp/q)`.
    ///
    /// # Panics
    ///
    /// Panics if `q` is zero or the cotangent has a pole at `πp/q`.
    #[must_use]
    pub fn cot_pi(p: i64, q: i64) -> Self {
        let s = Self::sin_pi(p, q);
        assert!(!s.is_zero(), "cot_pi({p}/{q}) is a pole");
        Self::cos_pi(p, q).div(&s)
    }

    /// `sec(πp/q)`.
    ///
    /// # Panics
    ///
    /// Panics if `q` is zero or the secant has a pole at `πp/q`.
    #[must_use]
    pub fn sec_pi(p: i64, q: i64) -> Self {
        let c = Self::cos_pi(p, q);
        assert!(!c.is_zero(), "sec_pi({p}/{q}) is a pole");
        c.inv()
    }

    /// `csc(πp/q)`.
    ///
    /// # Panics
    ///
    /// Panics if `q` is zero or the cosecant has a pole at `πp/q`.
    #[must_use]
    pub fn csc_pi(p: i64, q: i64) -> Self {
        let s = Self::sin_pi(p, q);
        assert!(!s.is_zero(), "csc_pi({p}/{q}) is a pole");
        s.inv()
    }

    /// `(p, q)` with `self = e^{2πip/q}`, `0 ≤ p < q` and `gcd(p, q) = 1`,
    /// if `self` is a root of unity.
    #[must_use]
    pub fn is_root_of_unity(&self) -> Option<(i64, u64)> {
        if let Some(r) = self.to_rational() {
            return match r.signum() {
                1 if self.is_one() => Some((0, 1)),
                -1 if self.is_neg_one() => Some((1, 2)),
                _ => None,
            };
        }
        if !self.is_algebraic_integer() {
            return None;
        }
        let d = self.degree() as u64;
        // φ(q) ≥ sqrt(q/2)
        let q = (3..=2 * d * d).find(|&q| totient(q) == d && cyclotomic(q) == self.poly)?;
        let (re, im) = self.numerical_enclosure(64).to_f64();
        let guess = nearest_numerator(im.atan2(re) / std::f64::consts::TAU, q);
        debug!(q, guess, "root of unity candidate");
        #[allow(clippy::cast_possible_wrap)]
        let found = std::iter::once(guess)
            .chain(0..q)
            .filter(|&p| small_gcd(p, q) == 1)
            .find(|&p| Self::root_of_unity(p as i64, q as i64) == *self)?;
        #[allow(clippy::cast_possible_wrap)]
        Some((found as i64, q))
    }

    /// `(p, q)` with `self = e^{πip/q}`, `-1 < p/q ≤ 1` and `gcd(p, q) = 1`,
    /// if `self` is a root of unity.
    #[must_use]
    pub fn log_pi_i(&self) -> Option<(i64, u64)> {
        let (p, q) = self.is_root_of_unity()?;
        // e^{2πip/q} = e^{πi(2p/q)}
        #[allow(clippy::cast_possible_wrap)]
        let q = q as i64;
        let num = if 2 * p > q { 2 * p - 2 * q } else { 2 * p };
        let r = Rational::from_i64(num, q);
        let num = r.numerator().to_i64()?;
        let den = u64::try_from(r.denominator().to_i64()?).ok()?;
        Some((num, den))
    }

    /// `r` in `[0, 1]` with `self = cos(πr)`, if there is a rational one.
    #[must_use]
    pub fn acos_pi(&self) -> Option<Rational> {
        if let Some(x) = self.to_rational() {
            let table = [
                (Rational::from(1i64), Rational::from(0i64)),
                (Rational::from_i64(1, 2), Rational::from_i64(1, 3)),
                (Rational::from(0i64), Rational::from_i64(1, 2)),
                (Rational::from_i64(-1, 2), Rational::from_i64(2, 3)),
                (Rational::from(-1i64), Rational::from(1i64)),
            ];
            return table.into_iter().find(|(c, _)| *c == x).map(|(_, r)| r);
        }
        if !self.is_real() {
            return None;
        }
        // 2 cos(2πk/n) is a root of Ψ_n, of degree φ(n)/2.
        let doubled = scale_roots(&self.poly, &Integer::from(2), &Integer::from(1));
        if !doubled.leading_coeff().0.is_one() {
            return None;
        }
        let d = self.degree() as u64;
        let n = (3..=8 * d * d).find(|&n| totient(n) == 2 * d && cos_minpoly(n) == doubled)?;
        let x = self.numerical_enclosure(64).to_f64().0;
        if !(-1.0..=1.0).contains(&x) {
            return None;
        }
        // acos(x)/π = 2k/n with 0 ≤ k ≤ n/2
        let guess = nearest_numerator(x.acos() / std::f64::consts::TAU, n);
        debug!(n, guess, "cosine candidate");
        #[allow(clippy::cast_possible_wrap)]
        let k = std::iter::once(guess)
            .chain(0..=n / 2)
            .filter(|&k| 2 * k <= n && small_gcd(k, n) == 1)
            .find(|&k| Self::cos_pi(2 * k as i64, n as i64) == *self)?;
        #[allow(clippy::cast_possible_wrap)]
        Some(Rational::from_i64(2 * k as i64, n as i64))
    }

    /// `r` in `[-1/2, 1/2]` with `self = sin(πr)`, if there is a rational one.
    #[must_use]
    pub fn asin_pi(&self) -> Option<Rational> {
        self.acos_pi().map(|r| Rational::from_i64(1, 2) - r)
    }

    /// `r` in `(-1/2, 1/2)` with `self = tan(πr)`, if there is a rational one.
    #[must_use]
    pub fn atan_pi(&self) -> Option<Rational> {
        if !self.is_real() {
            return None;
        }
        // e^{2i atan x} = (1 + ix) / (1 - ix)
        let ix = self.mul_i();
        let one = Self::one();
        let w = one.add(&ix).div(&one.sub(&ix));
        let (p, q) = w.log_pi_i()?;
        #[allow(clippy::cast_possible_wrap)]
        Some(Rational::from_i64(p, 2 * q as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(p: i64, q: i64) -> AlgebraicNumber {
        AlgebraicNumber::from_rational(&Rational::from_i64(p, q))
    }

    fn sqrt(n: i64) -> AlgebraicNumber {
        AlgebraicNumber::sqrt_rational(&Rational::from(n))
    }

    #[test]
    fn test_golden_ratio() {
        let phi = AlgebraicNumber::phi();
        assert_eq!(phi, sqrt(5).add_rational(&Rational::from(1i64)).mul_2exp(-1));
        assert_eq!(phi.floor(), Integer::from(1));
    }

    #[test]
    fn test_roots_of_unity() {
        assert_eq!(AlgebraicNumber::root_of_unity(1, 4), AlgebraicNumber::i());
        assert_eq!(AlgebraicNumber::root_of_unity(7, 2), rat(-1, 1));
        let w = AlgebraicNumber::root_of_unity(1, 3);
        assert_eq!(w.minimal_polynomial(), &int_poly(&[1, 1, 1]));
        assert_eq!(w.sgn_im(), 1);
        assert_eq!(w.pow(3), AlgebraicNumber::one());
        assert_eq!(AlgebraicNumber::root_of_unity(-1, 3), w.conj());
        let z = AlgebraicNumber::exp_pi_i(1, 3);
        assert_eq!(z.minimal_polynomial(), &int_poly(&[1, -1, 1]));
    }

    #[test]
    fn test_all_primitive_roots_up_to_twelve() {
        for q in 1..=12u64 {
            let expected = crate::roots_of_polynomial(&cyclotomic(q)).unwrap();
            let primitive: Vec<u64> = (0..q).filter(|&p| small_gcd(p, q) == 1).collect();
            assert_eq!(primitive.len(), expected.len());
            for &p in &primitive {
                let (pi, qi) = (i64::try_from(p).unwrap(), i64::try_from(q).unwrap());
                let z = AlgebraicNumber::root_of_unity(pi, qi);
                assert_eq!(z.minimal_polynomial(), &cyclotomic(q), "e^(2πi {p}/{q})");
                assert!(expected.contains(&z), "e^(2πi {p}/{q})");
                assert_eq!(z.is_root_of_unity(), Some((pi, q)));
            }
        }
    }

    #[test]
    fn test_negative_denominators() {
        assert_eq!(reduce_mod(1, -3), (2, 3));
        assert_eq!(reduce_mod(-4, -6), (2, 3));
        assert_eq!(reduce_mod(0, -5), (0, 1));
        let w = AlgebraicNumber::root_of_unity(1, 3);
        assert_eq!(AlgebraicNumber::root_of_unity(1, -3), w.conj());
        assert_eq!(AlgebraicNumber::root_of_unity(-1, -3), w);
        assert_eq!(AlgebraicNumber::exp_pi_i(1, -2), AlgebraicNumber::neg_i());
        assert_eq!(AlgebraicNumber::exp_pi_i(-1, -2), AlgebraicNumber::i());
        assert_eq!(AlgebraicNumber::sin_pi(1, -2), rat(-1, 1));
    }

    #[test]
    fn test_exact_cosines() {
        assert_eq!(AlgebraicNumber::cos_pi(1, 3), rat(1, 2));
        assert_eq!(AlgebraicNumber::cos_pi(2, 3), rat(-1, 2));
        assert_eq!(AlgebraicNumber::sin_pi(1, 6), rat(1, 2));
        assert_eq!(AlgebraicNumber::cos_pi(1, 4), sqrt(2).mul_2exp(-1));
        assert_eq!(AlgebraicNumber::sin_pi(-1, 4), sqrt(2).mul_2exp(-1).neg());
        assert_eq!(AlgebraicNumber::cos_pi(1, 5), AlgebraicNumber::phi().mul_2exp(-1));
        assert!(AlgebraicNumber::cos_pi(1, 2).is_zero());
    }

    #[test]
    fn test_other_trig_functions() {
        assert!(AlgebraicNumber::tan_pi(1, 4).is_one());
        assert_eq!(AlgebraicNumber::tan_pi(1, 3), sqrt(3));
        assert_eq!(AlgebraicNumber::cot_pi(1, 6), sqrt(3));
        assert_eq!(AlgebraicNumber::sec_pi(1, 3), rat(2, 1));
        assert_eq!(AlgebraicNumber::csc_pi(1, 4), sqrt(2));
    }

    #[test]
    #[should_panic(expected = "pole")]
    fn test_tan_pole() {
        let _ = AlgebraicNumber::tan_pi(1, 2);
    }

    #[test]
    fn test_is_root_of_unity() {
        assert_eq!(AlgebraicNumber::root_of_unity(3, 7).is_root_of_unity(), Some((3, 7)));
        assert_eq!(AlgebraicNumber::one().is_root_of_unity(), Some((0, 1)));
        assert_eq!(AlgebraicNumber::i().is_root_of_unity(), Some((1, 4)));
        assert_eq!(sqrt(2).is_root_of_unity(), None);
        assert_eq!(rat(1, 2).is_root_of_unity(), None);
    }

    #[test]
    fn test_log_round_trip() {
        for (p, q) in [(1, 1), (1, 2), (-2, 3), (5, 6), (-1, 5), (0, 1)] {
            assert_eq!(AlgebraicNumber::exp_pi_i(p, q).log_pi_i(), Some((p, q.unsigned_abs())));
        }
    }

    #[test]
    fn test_inverse_trig() {
        assert_eq!(AlgebraicNumber::cos_pi(2, 5).acos_pi(), Some(Rational::from_i64(2, 5)));
        assert_eq!(rat(-1, 2).acos_pi(), Some(Rational::from_i64(2, 3)));
        assert_eq!(AlgebraicNumber::sin_pi(1, 7).asin_pi(), Some(Rational::from_i64(1, 7)));
        assert_eq!(AlgebraicNumber::one().atan_pi(), Some(Rational::from_i64(1, 4)));
        assert_eq!(sqrt(3).atan_pi(), Some(Rational::from_i64(1, 3)));
        assert_eq!(rat(2, 1).atan_pi(), None);
        assert_eq!(sqrt(2).acos_pi(), None);
    }
}
