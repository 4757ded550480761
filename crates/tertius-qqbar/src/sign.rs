//! Signs, comparisons and equality.
//!
//! Numeric answers are read off the enclosures whenever they separate.
//! Exact zeros are certified by validating a ball that lies on the real
//! line or the imaginary axis; comparisons that refuse to separate fall
//! back to the sign of an exact difference.

use std::cmp::Ordering;

use tertius_ball::{Acb, Arb};
use tertius_integers::Integer;
use tracing::debug;

use crate::config::PrecisionConfig;
use crate::number::AlgebraicNumber;
use crate::validate::{refine, validate};

/// Sign of a real ball, if it is determined.
fn arb_sign(x: &Arb) -> Option<i8> {
    if x.is_zero() {
        Some(0)
    } else if x.is_positive() {
        Some(1)
    } else if x.is_negative() {
        Some(-1)
    } else {
        None
    }
}

/// Order of two real balls, if it is determined.
fn arb_cmp(a: &Arb, b: &Arb) -> Option<Ordering> {
    if a.is_exact() && a == b {
        Some(Ordering::Equal)
    } else if a.upper() < b.lower() {
        Some(Ordering::Less)
    } else if a.lower() > b.upper() {
        Some(Ordering::Greater)
    } else {
        None
    }
}

/// Which part of a complex number a routine looks at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Part {
    Re,
    Im,
}

impl Part {
    fn of(self, z: &Acb) -> &Arb {
        match self {
            Self::Re => z.re(),
            Self::Im => z.im(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Re => "sgn_re",
            Self::Im => "sgn_im",
        }
    }
}

impl AlgebraicNumber {
    /// Certifies that the root isolated by `ball` has this part exactly zero.
    fn part_is_zero(&self, part: Part, ball: &Acb, prec: u32) -> bool {
        let axis = match part {
            Part::Re => {
                if !(self.poly.is_even() || self.poly.is_odd()) {
                    return false;
                }
                Acb::new(Arb::zero(), ball.im().clone())
            }
            Part::Im => Acb::from_arb(ball.re().clone()),
        };
        validate(&self.poly, &axis, prec).is_some_and(|t| ball.contains(&t))
    }

    fn sgn_part(&self, part: Part, config: &PrecisionConfig) -> i8 {
        if let Some(q) = self.to_rational() {
            return match part {
                Part::Re => q.signum(),
                Part::Im => 0,
            };
        }
        let mut ball = self.enclosure.clone();
        let mut prec = config.initial_prec;
        loop {
            if let Some(s) = arb_sign(part.of(&ball)) {
                return s;
            }
            if self.part_is_zero(part, &ball, prec) {
                return 0;
            }
            debug!(op = part.name(), prec, "escalating precision");
            ball = refine(&self.poly, &ball, prec);
            prec *= 2;
        }
    }

    /// Sign of the real part.
    #[must_use]
    pub fn sgn_re(&self) -> i8 {
        self.sgn_re_with_config(&PrecisionConfig::default())
    }

    /// Sign of the real part with an explicit precision policy.
    #[must_use]
    pub fn sgn_re_with_config(&self, config: &PrecisionConfig) -> i8 {
        self.sgn_part(Part::Re, config)
    }

    /// Sign of the imaginary part.
    #[must_use]
    pub fn sgn_im(&self) -> i8 {
        self.sgn_im_with_config(&PrecisionConfig::default())
    }

    /// Sign of the imaginary part with an explicit precision policy.
    #[must_use]
    pub fn sgn_im_with_config(&self, config: &PrecisionConfig) -> i8 {
        self.sgn_part(Part::Im, config)
    }

    fn cmp_part(&self, other: &Self, part: Part, config: &PrecisionConfig) -> Ordering {
        if let (Some(a), Some(b)) = (self.to_rational(), other.to_rational()) {
            return match part {
                Part::Re => a.cmp(&b),
                Part::Im => Ordering::Equal,
            };
        }
        let (mut a, mut b) = (self.enclosure.clone(), other.enclosure.clone());
        let mut prec = config.initial_prec;
        loop {
            if let Some(ord) = arb_cmp(part.of(&a), part.of(&b)) {
                return ord;
            }
            if self.is_rational() || other.is_rational() || prec >= config.exact_fallback_prec {
                return self.sub(other).sgn_part(part, config).cmp(&0);
            }
            debug!(op = part.name(), prec, "comparison escalating precision");
            a = refine(&self.poly, &a, prec);
            b = refine(&other.poly, &b, prec);
            prec *= 2;
        }
    }

    /// Compares real parts.
    #[must_use]
    pub fn cmp_re(&self, other: &Self) -> Ordering {
        self.cmp_re_with_config(other, &PrecisionConfig::default())
    }

    /// Compares real parts with an explicit precision policy.
    #[must_use]
    pub fn cmp_re_with_config(&self, other: &Self, config: &PrecisionConfig) -> Ordering {
        self.cmp_part(other, Part::Re, config)
    }

    /// Compares imaginary parts.
    #[must_use]
    pub fn cmp_im(&self, other: &Self) -> Ordering {
        self.cmp_im_with_config(other, &PrecisionConfig::default())
    }

    /// Compares imaginary parts with an explicit precision policy.
    #[must_use]
    pub fn cmp_im_with_config(&self, other: &Self, config: &PrecisionConfig) -> Ordering {
        self.cmp_part(other, Part::Im, config)
    }

    /// Compares absolute values of real parts.
    #[must_use]
    pub fn cmp_abs_re(&self, other: &Self) -> Ordering {
        let flip = |x: &Self| if x.sgn_re() < 0 { x.neg() } else { x.clone() };
        flip(self).cmp_re(&flip(other))
    }

    /// Compares absolute values of imaginary parts.
    #[must_use]
    pub fn cmp_abs_im(&self, other: &Self) -> Ordering {
        let flip = |x: &Self| if x.sgn_im() < 0 { x.neg() } else { x.clone() };
        flip(self).cmp_im(&flip(other))
    }

    /// Compares absolute values.
    #[must_use]
    pub fn cmp_abs(&self, other: &Self) -> Ordering {
        self.cmp_abs_with_config(other, &PrecisionConfig::default())
    }

    /// Compares absolute values with an explicit precision policy.
    #[must_use]
    pub fn cmp_abs_with_config(&self, other: &Self, config: &PrecisionConfig) -> Ordering {
        if self.is_real() && other.is_real() {
            return self.cmp_abs_re(other);
        }
        if self.is_imaginary() && other.is_imaginary() {
            return self.cmp_abs_im(other);
        }
        let (mut a, mut b) = (self.enclosure.clone(), other.enclosure.clone());
        let mut prec = config.initial_prec;
        loop {
            if let Some(ord) = arb_cmp(&a.abs(prec), &b.abs(prec)) {
                return ord;
            }
            if prec >= config.exact_fallback_prec {
                return self.abs2().cmp_re_with_config(&other.abs2(), config);
            }
            debug!(op = "cmp_abs", prec, "comparison escalating precision");
            a = refine(&self.poly, &a, prec);
            b = refine(&other.poly, &b, prec);
            prec *= 2;
        }
    }

    /// Order used for lists of roots: real roots first in descending order,
    /// then non-real roots by descending real part, ascending `|im|`, and
    /// the upper half-plane before its conjugate.
    #[must_use]
    pub fn cmp_root_order(&self, other: &Self) -> Ordering {
        match (self.is_real(), other.is_real()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (true, true) => other.cmp_re(self),
            (false, false) => other
                .cmp_re(self)
                .then_with(|| self.cmp_abs_im(other))
                .then_with(|| other.sgn_im().cmp(&self.sgn_im())),
        }
    }

    /// Returns true if both values are the same complex number.
    #[must_use]
    pub fn equal(&self, other: &Self) -> bool {
        if self.poly != other.poly {
            return false;
        }
        if self.degree() == 1 {
            return true;
        }
        let (mut a, mut b) = (self.enclosure.clone(), other.enclosure.clone());
        let mut prec = PrecisionConfig::default().initial_prec;
        loop {
            if !a.overlaps(&b) {
                return false;
            }
            // A ball containing both isolates a single root of the shared
            // minimal polynomial.
            if a.contains(&b) || b.contains(&a) {
                return true;
            }
            if validate(&self.poly, &a.union(&b, prec), prec).is_some() {
                return true;
            }
            debug!(op = "equal", prec, "escalating precision");
            a = refine(&self.poly, &a, prec);
            b = refine(&self.poly, &b, prec);
            prec *= 2;
        }
    }

    /// Largest integer not above the real part.
    #[must_use]
    pub fn floor(&self) -> Integer {
        if let Some(q) = self.to_rational() {
            return q.floor();
        }
        let mut ball = self.enclosure.clone();
        let mut prec = PrecisionConfig::default().initial_prec;
        loop {
            let lo = ball.re().lower().floor();
            let hi = ball.re().upper().floor();
            if lo == hi {
                return lo;
            }
            if &lo + &Integer::from(1) == hi {
                // The real part is within the ball of the integer `hi`.
                return match self.cmp_re(&Self::from_integer(&hi)) {
                    Ordering::Less => lo,
                    _ => hi,
                };
            }
            debug!(op = "floor", prec, "escalating precision");
            ball = refine(&self.poly, &ball, prec);
            prec *= 2;
        }
    }

    /// Smallest integer not below the real part.
    #[must_use]
    pub fn ceil(&self) -> Integer {
        -self.neg().floor()
    }
}

impl PartialEq for AlgebraicNumber {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for AlgebraicNumber {}
