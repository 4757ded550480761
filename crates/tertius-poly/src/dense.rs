//! Dense univariate polynomials.
//!
//! Coefficients are stored lowest degree first with no trailing zeros; the
//! zero polynomial is the single coefficient `[0]`. With that normal form,
//! derived equality is polynomial equality.

use tertius_integers::small_gcd;
use tertius_rings::traits::Ring;

/// Operand length at which multiplication switches to Karatsuba.
const KARATSUBA_CUTOFF: usize = 32;

/// A dense polynomial over `R`, coefficients in ascending degree.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DensePoly<R: Ring> {
    coeffs: Vec<R>,
}

impl<R: Ring> DensePoly<R> {
    /// Builds a polynomial, stripping trailing zeros.
    #[must_use]
    pub fn new(mut coeffs: Vec<R>) -> Self {
        while coeffs.last().is_some_and(Ring::is_zero) {
            coeffs.pop();
        }
        if coeffs.is_empty() {
            coeffs.push(R::zero());
        }
        Self { coeffs }
    }

    /// `0`.
    #[must_use]
    pub fn zero() -> Self {
        Self::constant(R::zero())
    }

    /// `1`.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(R::one())
    }

    /// The constant `c`.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::new(vec![c])
    }

    /// The indeterminate `x`.
    #[must_use]
    pub fn x() -> Self {
        Self::monomial(R::one(), 1)
    }

    /// `c * x^n`.
    #[must_use]
    pub fn monomial(c: R, n: usize) -> Self {
        let mut coeffs = vec![R::zero(); n];
        coeffs.push(c);
        Self::new(coeffs)
    }

    /// Degree; the zero polynomial reports 0.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Whether this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Coefficient of the highest power.
    #[must_use]
    pub fn leading_coeff(&self) -> &R {
        &self.coeffs[self.degree()]
    }

    /// Lowest power with a nonzero coefficient.
    #[must_use]
    pub fn valuation(&self) -> usize {
        self.coeffs.iter().take_while(|c| c.is_zero()).count().min(self.degree())
    }

    /// Coefficient of `x^i`, zero past the degree.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.get(i).map_or_else(R::zero, Clone::clone)
    }

    /// The coefficient slice.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Maps coefficients into another ring.
    #[must_use]
    pub fn map<S: Ring>(&self, f: impl Fn(&R) -> S) -> DensePoly<S> {
        DensePoly::new(self.coeffs.iter().map(f).collect())
    }

    /// Horner evaluation.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        self.coeffs
            .iter()
            .rev()
            .fold(R::zero(), |acc, c| acc * x.clone() + c.clone())
    }

    /// `self + other`.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let (long, short) = if self.coeffs.len() >= other.coeffs.len() {
            (&self.coeffs, &other.coeffs)
        } else {
            (&other.coeffs, &self.coeffs)
        };
        let mut sum = long.clone();
        add_assign(&mut sum, short, 0);
        Self::new(sum)
    }

    /// `-self`.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            coeffs: self.coeffs.iter().cloned().map(|c| -c).collect(),
        }
    }

    /// `self - other`.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// `self * other`, Karatsuba once both operands are long enough.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        Self::new(mul_slices(&self.coeffs, &other.coeffs))
    }

    /// `self * other mod x^n`.
    #[must_use]
    pub fn mul_trunc(&self, other: &Self, n: usize) -> Self {
        self.truncate(n).mul(&other.truncate(n)).truncate(n)
    }

    /// `c * self`.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        Self::new(self.coeffs.iter().map(|a| a.clone() * c.clone()).collect())
    }

    /// Formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let coeffs: Vec<R> = (1..self.coeffs.len())
            .map(|i| self.coeffs[i].mul_by_scalar(i as i64))
            .collect();
        Self::new(coeffs)
    }

    /// `x^n * self`.
    #[must_use]
    pub fn shift(&self, n: usize) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let mut coeffs = vec![R::zero(); n];
        coeffs.extend_from_slice(&self.coeffs);
        Self { coeffs }
    }

    /// `self mod x^n`.
    #[must_use]
    pub fn truncate(&self, n: usize) -> Self {
        Self::new(self.coeffs.iter().take(n).cloned().collect())
    }

    /// Reciprocal polynomial `x^deg * p(1/x)`. Factors of `x` are lost.
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut coeffs = self.coeffs.clone();
        coeffs.reverse();
        Self::new(coeffs)
    }

    /// `p(-x)`.
    #[must_use]
    pub fn compose_neg(&self) -> Self {
        let mut coeffs = self.coeffs.clone();
        for c in coeffs.iter_mut().skip(1).step_by(2) {
            *c = -c.clone();
        }
        Self { coeffs }
    }

    /// `p(x^k)`.
    ///
    /// # Panics
    ///
    /// Panics if `k` is zero.
    #[must_use]
    pub fn inflate(&self, k: usize) -> Self {
        assert!(k > 0, "inflation by zero");
        let mut coeffs = vec![R::zero(); self.degree() * k + 1];
        for (c, slot) in self.coeffs.iter().zip(coeffs.iter_mut().step_by(k)) {
            *slot = c.clone();
        }
        Self { coeffs }
    }

    /// Largest `k` with `p` a polynomial in `x^k`; 0 for constants.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn deflation(&self) -> usize {
        (1..self.coeffs.len())
            .filter(|&i| !self.coeffs[i].is_zero())
            .fold(0, |g, i| small_gcd(g as u64, i as u64) as usize)
    }

    /// `q` with `q(x^k) = p(x)`. `k` must divide [`Self::deflation`].
    ///
    /// # Panics
    ///
    /// Panics if `k` is zero.
    #[must_use]
    pub fn deflate(&self, k: usize) -> Self {
        assert!(k > 0, "deflation by zero");
        debug_assert_eq!(self.deflation() % k, 0, "not a polynomial in x^k");
        Self::new(self.coeffs.iter().step_by(k).cloned().collect())
    }

    /// Whether `p(-x) = p(x)`.
    #[must_use]
    pub fn is_even(&self) -> bool {
        self.coeffs.iter().skip(1).step_by(2).all(Ring::is_zero)
    }

    /// Whether `p(-x) = -p(x)`.
    #[must_use]
    pub fn is_odd(&self) -> bool {
        self.coeffs.iter().step_by(2).all(Ring::is_zero)
    }

    /// `self^n` by repeated squaring.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut acc = Self::one();
        let mut square = self.clone();
        let mut bits = n;
        while bits != 0 {
            if bits & 1 == 1 {
                acc = acc.mul(&square);
            }
            bits >>= 1;
            if bits != 0 {
                square = square.mul(&square);
            }
        }
        acc
    }
}

/// `dst[offset..] += src`, growing `dst` if needed.
fn add_assign<R: Ring>(dst: &mut Vec<R>, src: &[R], offset: usize) {
    if dst.len() < offset + src.len() {
        dst.resize(offset + src.len(), R::zero());
    }
    for (d, s) in dst[offset..].iter_mut().zip(src) {
        *d = d.clone() + s.clone();
    }
}

fn sub_assign<R: Ring>(dst: &mut [R], src: &[R]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d = d.clone() - s.clone();
    }
}

fn schoolbook<R: Ring>(a: &[R], b: &[R]) -> Vec<R> {
    let mut out = vec![R::zero(); a.len() + b.len() - 1];
    for (i, x) in a.iter().enumerate() {
        if x.is_zero() {
            continue;
        }
        for (j, y) in b.iter().enumerate() {
            out[i + j] = out[i + j].clone() + x.clone() * y.clone();
        }
    }
    out
}

/// Product of two nonempty coefficient slices; the result has length
/// `a.len() + b.len() - 1`.
fn mul_slices<R: Ring>(a: &[R], b: &[R]) -> Vec<R> {
    if a.len().min(b.len()) < KARATSUBA_CUTOFF {
        return schoolbook(a, b);
    }
    // a = a0 + x^h a1, b = b0 + x^h b1
    let h = a.len().max(b.len()) / 2;
    let (a0, a1) = a.split_at(h.min(a.len()));
    let (b0, b1) = b.split_at(h.min(b.len()));
    if a1.is_empty() || b1.is_empty() {
        return schoolbook(a, b);
    }

    let low = mul_slices(a0, b0);
    let high = mul_slices(a1, b1);
    let mut sa = a0.to_vec();
    add_assign(&mut sa, a1, 0);
    let mut sb = b0.to_vec();
    add_assign(&mut sb, b1, 0);
    let mut mid = mul_slices(&sa, &sb);
    sub_assign(&mut mid, &low);
    sub_assign(&mut mid, &high);

    let mut out = vec![R::zero(); a.len() + b.len() - 1];
    add_assign(&mut out, &low, 0);
    add_assign(&mut out, &mid, h);
    add_assign(&mut out, &high, 2 * h);
    out.truncate(a.len() + b.len() - 1);
    out
}

impl<R: Ring + std::fmt::Display> std::fmt::Display for DensePoly<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let terms = self
            .coeffs
            .iter()
            .enumerate()
            .rev()
            .filter(|(i, c)| !c.is_zero() || (*i == 0 && self.is_zero()));
        let mut first = true;
        for (i, c) in terms {
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            match (i, c.is_one()) {
                (0, _) => write!(f, "{c}")?,
                (1, true) => write!(f, "x")?,
                (1, false) => write!(f, "{c}*x")?,
                (_, true) => write!(f, "x^{i}")?,
                (_, false) => write!(f, "{c}*x^{i}")?,
            }
        }
        Ok(())
    }
}
