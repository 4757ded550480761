//! Field operations on algebraic numbers.
//!
//! Rational operands are dispatched to the scalar operations. Otherwise
//! the composed polynomial is factored and the factor vanishing at the
//! numerical value of the result is selected at increasing precision.

use tertius_ball::{eval_poly, Acb, Arb};
use tertius_factor::irreducible_factors;
use tertius_poly::dense::DensePoly;
use tertius_rings::integers::Z;
use tracing::{debug, trace};

use crate::composed::{composed_polynomial, BinaryOp};
use crate::config::PrecisionConfig;
use crate::number::AlgebraicNumber;
use crate::validate::validate;

/// What is known in advance about the location of a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Shape {
    /// Anywhere in the complex plane.
    General,
    /// On the real line.
    Real,
    /// On the imaginary axis.
    Imaginary,
}

impl Shape {
    /// Projects a candidate ball onto the known locus.
    fn apply(self, ball: Acb) -> Acb {
        match self {
            Self::General => ball,
            Self::Real => Acb::from_arb(ball.re().clone()),
            Self::Imaginary => Acb::new(Arb::zero(), ball.im().clone()),
        }
    }

    /// Shape of a stored value, judged from its enclosure alone.
    pub(crate) fn of(x: &AlgebraicNumber) -> Self {
        if x.enclosure.is_real() {
            Self::Real
        } else if x.enclosure.is_imaginary() {
            Self::Imaginary
        } else {
            Self::General
        }
    }

    /// Shape of `x ⊕ y` given the shapes of the operands.
    fn combine(self, other: Self, op: BinaryOp) -> Self {
        use Shape::{General, Imaginary, Real};
        match (self, other, op) {
            (Real, Real, _) => Real,
            (Imaginary, Imaginary, BinaryOp::Add | BinaryOp::Sub) => Imaginary,
            (Imaginary, Imaginary, BinaryOp::Mul | BinaryOp::Div)
            | (Real, Imaginary, BinaryOp::Mul | BinaryOp::Div)
            | (Imaginary, Real, BinaryOp::Mul | BinaryOp::Div) => {
                if self == other {
                    Real
                } else {
                    Imaginary
                }
            }
            _ => General,
        }
    }
}

/// Picks the root of one of `factors` that `candidate(prec)` converges to.
///
/// `candidate` returns a ball containing the exact result at the given
/// precision, or `None` if it cannot produce one yet. The loop doubles the
/// precision until exactly one factor vanishes on the ball and the
/// validator certifies the root.
pub(crate) fn select_root(
    op: &'static str,
    factors: &[DensePoly<Z>],
    shape: Shape,
    mut candidate: impl FnMut(u32) -> Option<Acb>,
) -> AlgebraicNumber {
    let mut prec = PrecisionConfig::default().initial_prec;
    loop {
        if let Some(ball) = candidate(prec) {
            let ball = shape.apply(ball);
            let hits: Vec<&DensePoly<Z>> = factors
                .iter()
                .filter(|f| eval_poly(f, &ball, prec).contains_zero())
                .collect();
            debug!(op, prec, candidates = hits.len(), "selecting factor");
            if let [factor] = hits.as_slice() {
                if let Some(enclosure) = validate(factor, &ball, prec) {
                    return AlgebraicNumber::from_raw((*factor).clone(), enclosure);
                }
                trace!(op, prec, "candidate ball not certified");
            }
        }
        prec *= 2;
    }
}

/// The general path for `x ⊕ y`, with the shape of the result given.
pub(crate) fn binary_with_shape(
    x: &AlgebraicNumber,
    y: &AlgebraicNumber,
    op: BinaryOp,
    shape: Shape,
) -> AlgebraicNumber {
    let h = composed_polynomial(&x.poly, &y.poly, op);
    let factors = irreducible_factors(&h);
    debug!(
        op = op.name(),
        degree = h.degree(),
        factors = factors.len(),
        "composed polynomial"
    );
    select_root(op.name(), &factors, shape, |prec| {
        let a = x.numerical_enclosure(prec);
        let b = y.numerical_enclosure(prec);
        match op {
            BinaryOp::Add => Some(a.add(&b, prec)),
            BinaryOp::Sub => Some(a.sub(&b, prec)),
            BinaryOp::Mul => Some(a.mul(&b, prec)),
            BinaryOp::Div => a.div(&b, prec),
        }
    })
}

fn binary(x: &AlgebraicNumber, y: &AlgebraicNumber, op: BinaryOp) -> AlgebraicNumber {
    let shape = Shape::of(x).combine(Shape::of(y), op);
    binary_with_shape(x, y, op, shape)
}

impl AlgebraicNumber {
    /// Sum.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        if let Some(q) = other.to_rational() {
            return self.add_rational(&q);
        }
        if let Some(q) = self.to_rational() {
            return other.add_rational(&q);
        }
        binary(self, other, BinaryOp::Add)
    }

    /// Difference.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        if let Some(q) = other.to_rational() {
            return self.sub_rational(&q);
        }
        if let Some(q) = self.to_rational() {
            return other.rational_sub(&q);
        }
        binary(self, other, BinaryOp::Sub)
    }

    /// Product.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if let Some(q) = other.to_rational() {
            return self.mul_rational(&q);
        }
        if let Some(q) = self.to_rational() {
            return other.mul_rational(&q);
        }
        if self.poly == other.poly && self == other {
            return self.pow(2);
        }
        binary(self, other, BinaryOp::Mul)
    }

    /// Quotient.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    #[must_use]
    pub fn div(&self, other: &Self) -> Self {
        assert!(!other.is_zero(), "division by zero");
        if let Some(q) = other.to_rational() {
            return self.div_rational(&q);
        }
        if let Some(q) = self.to_rational() {
            return other.rational_div(&q);
        }
        if self.poly == other.poly && self == other {
            return Self::one();
        }
        binary(self, other, BinaryOp::Div)
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl std::ops::$trait<&AlgebraicNumber> for &AlgebraicNumber {
            type Output = AlgebraicNumber;

            fn $method(self, rhs: &AlgebraicNumber) -> AlgebraicNumber {
                AlgebraicNumber::$method(self, rhs)
            }
        }

        impl std::ops::$trait<&AlgebraicNumber> for AlgebraicNumber {
            type Output = AlgebraicNumber;

            fn $method(self, rhs: &AlgebraicNumber) -> AlgebraicNumber {
                AlgebraicNumber::$method(&self, rhs)
            }
        }

        impl std::ops::$trait<AlgebraicNumber> for &AlgebraicNumber {
            type Output = AlgebraicNumber;

            fn $method(self, rhs: AlgebraicNumber) -> AlgebraicNumber {
                AlgebraicNumber::$method(self, &rhs)
            }
        }

        impl std::ops::$trait for AlgebraicNumber {
            type Output = AlgebraicNumber;

            fn $method(self, rhs: AlgebraicNumber) -> AlgebraicNumber {
                AlgebraicNumber::$method(&self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);

impl std::ops::Neg for &AlgebraicNumber {
    type Output = AlgebraicNumber;

    fn neg(self) -> AlgebraicNumber {
        AlgebraicNumber::neg(self)
    }
}

impl std::ops::Neg for AlgebraicNumber {
    type Output = AlgebraicNumber;

    fn neg(self) -> AlgebraicNumber {
        AlgebraicNumber::neg(&self)
    }
}
