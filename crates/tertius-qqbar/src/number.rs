//! The algebraic number type.

use std::fmt;

use num_traits::{One, Zero};
use tertius_ball::Acb;
use tertius_factor::is_irreducible;
use tertius_integers::{Integer, Rational};
use tertius_poly::dense::DensePoly;
use tertius_poly::integer::{height, primitive_part};
use tertius_rings::integers::Z;

use crate::config::PrecisionConfig;
use crate::error::{QqbarError, Result};
use crate::validate::{linear_root, refine, validate};

/// An exact real or complex algebraic number.
///
/// Represented by its minimal polynomial over the integers (primitive,
/// irreducible, positive leading coefficient) and a complex ball that
/// contains exactly one root of it. Every operation returns a value with
/// both parts replaced together.
#[derive(Clone, Debug)]
pub struct AlgebraicNumber {
    pub(crate) poly: DensePoly<Z>,
    pub(crate) enclosure: Acb,
}

impl AlgebraicNumber {
    /// Assembles a value whose invariants the caller has established.
    pub(crate) fn from_raw(poly: DensePoly<Z>, enclosure: Acb) -> Self {
        debug_assert!(poly.degree() >= 1);
        debug_assert!(poly.leading_coeff().0.is_positive());
        Self { poly, enclosure }
    }

    /// Builds a value from a polynomial and an enclosure of one of its roots.
    ///
    /// The polynomial is made primitive with positive leading coefficient.
    ///
    /// # Errors
    ///
    /// Returns an error if the polynomial is zero or constant, is not
    /// irreducible, or if the enclosure cannot be certified to isolate a root.
    pub fn from_parts(poly: &DensePoly<Z>, enclosure: &Acb) -> Result<Self> {
        if poly.is_zero() {
            return Err(QqbarError::ZeroPolynomial);
        }
        if poly.degree() == 0 {
            return Err(QqbarError::ConstantPolynomial);
        }
        let poly = primitive_part(poly);
        if !is_irreducible(&poly) {
            return Err(QqbarError::NotIrreducible);
        }
        let prec = PrecisionConfig::default().initial_prec;
        let ball = validate(&poly, enclosure, prec).ok_or(QqbarError::NotIsolating)?;
        Ok(Self::from_raw(poly, ball))
    }

    /// The number 0.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_raw(DensePoly::x(), Acb::zero())
    }

    /// The number 1.
    #[must_use]
    pub fn one() -> Self {
        Self::from_i64(1)
    }

    /// The imaginary unit.
    #[must_use]
    pub fn i() -> Self {
        Self::from_raw(
            DensePoly::new(vec![Z::new(1), Z::new(0), Z::new(1)]),
            Acb::i(),
        )
    }

    /// The number `-i`.
    #[must_use]
    pub fn neg_i() -> Self {
        Self::i().conj()
    }

    /// Embeds a machine integer.
    #[must_use]
    pub fn from_i64(n: i64) -> Self {
        Self::from_integer(&Integer::new(n))
    }

    /// Embeds an integer.
    #[must_use]
    pub fn from_integer(n: &Integer) -> Self {
        Self::from_raw(
            DensePoly::new(vec![Z(-n), Z(Integer::one())]),
            Acb::from_integer(n),
        )
    }

    /// Embeds a rational number.
    #[must_use]
    pub fn from_rational(q: &Rational) -> Self {
        let prec = PrecisionConfig::default().initial_prec;
        Self::from_raw(
            DensePoly::new(vec![Z(-q.numerator()), Z(q.denominator())]),
            Acb::from_rational(q, prec),
        )
    }

    /// The principal square root of a rational number.
    #[must_use]
    pub fn sqrt_rational(q: &Rational) -> Self {
        Self::from_rational(q).sqrt()
    }

    /// Degree of the minimal polynomial.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.poly.degree()
    }

    /// The minimal polynomial.
    #[must_use]
    pub fn minimal_polynomial(&self) -> &DensePoly<Z> {
        &self.poly
    }

    /// The stored enclosure.
    #[must_use]
    pub fn enclosure(&self) -> &Acb {
        &self.enclosure
    }

    /// Largest absolute value of a coefficient of the minimal polynomial.
    #[must_use]
    pub fn height(&self) -> Integer {
        height(&self.poly)
    }

    /// The value as a rational number, if it is rational.
    #[must_use]
    pub fn to_rational(&self) -> Option<Rational> {
        (self.degree() == 1).then(|| linear_root(&self.poly))
    }

    /// A certified enclosure with at least `prec` bits of relative accuracy.
    #[must_use]
    pub fn numerical_enclosure(&self, prec: u32) -> Acb {
        refine(&self.poly, &self.enclosure, prec)
    }

    /// Replaces the stored enclosure by a tighter one if it is contained in
    /// the current one.
    pub fn cache_enclosure(&mut self, prec: u32) {
        let tighter = self.numerical_enclosure(prec);
        if self.enclosure.contains(&tighter) {
            self.enclosure = tighter;
        }
    }

    /// Returns true for 0.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.degree() == 1 && self.poly.coeff(0).0.is_zero()
    }

    /// Returns true for 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.to_rational().is_some_and(|q| q.is_one())
    }

    /// Returns true for -1.
    #[must_use]
    pub fn is_neg_one(&self) -> bool {
        self.to_rational().is_some_and(|q| (-q).is_one())
    }

    /// Returns true for `i`.
    #[must_use]
    pub fn is_i(&self) -> bool {
        self.poly == Self::i().poly && self.sgn_im() > 0
    }

    /// Returns true for `-i`.
    #[must_use]
    pub fn is_neg_i(&self) -> bool {
        self.poly == Self::i().poly && self.sgn_im() < 0
    }

    /// Returns true if the value is rational.
    #[must_use]
    pub fn is_rational(&self) -> bool {
        self.degree() == 1
    }

    /// Returns true if the value is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.is_rational() && self.is_algebraic_integer()
    }

    /// Returns true if the minimal polynomial is monic.
    #[must_use]
    pub fn is_algebraic_integer(&self) -> bool {
        self.poly.leading_coeff().0.is_one()
    }

    /// Returns true if the value is real.
    #[must_use]
    pub fn is_real(&self) -> bool {
        self.is_rational() || self.enclosure.is_real() || self.sgn_im() == 0
    }

    /// Returns true if the value is purely imaginary and non-zero.
    #[must_use]
    pub fn is_imaginary(&self) -> bool {
        !self.is_rational()
            && (self.poly.is_even() || self.poly.is_odd())
            && (self.enclosure.is_imaginary() || self.sgn_re() == 0)
    }
}

/// Writes `poly` in descending powers of `x`.
fn fmt_poly(p: &DensePoly<Z>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut first = true;
    for (k, c) in p.coeffs().iter().enumerate().rev() {
        let c = &c.0;
        if c.is_zero() {
            continue;
        }
        let abs = c.abs();
        if first {
            if c.is_negative() {
                write!(f, "-")?;
            }
        } else {
            write!(f, " {} ", if c.is_negative() { '-' } else { '+' })?;
        }
        first = false;
        let show_coeff = k == 0 || !abs.is_one();
        if show_coeff {
            write!(f, "{abs}")?;
        }
        match k {
            0 => {}
            1 if show_coeff => write!(f, "*x")?,
            1 => write!(f, "x")?,
            _ if show_coeff => write!(f, "*x^{k}")?,
            _ => write!(f, "x^{k}")?,
        }
    }
    Ok(())
}

impl fmt::Display for AlgebraicNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(q) = self.to_rational() {
            return write!(f, "{q}");
        }
        let ball = self.numerical_enclosure(64);
        let (re, im) = ball.to_f64();
        if ball.is_real() {
            write!(f, "{re:.10}")?;
        } else if ball.re().is_zero() {
            write!(f, "{im:.10}*I")?;
        } else {
            let sign = if im < 0.0 { '-' } else { '+' };
            write!(f, "{re:.10} {sign} {:.10}*I", im.abs())?;
        }
        write!(f, " (root of ")?;
        fmt_poly(&self.poly, f)?;
        write!(f, ")")
    }
}
