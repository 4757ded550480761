//! Dense polynomials over `Z/pZ` for a prime chosen at runtime.
//!
//! Coefficients are reduced to `[0, p)` and stored in ascending order with
//! no trailing zeros; the zero polynomial has no coefficients. Primes must
//! fit in 32 bits so products fit in `u64` before reduction.

use tertius_integers::Integer;
use tertius_poly::dense::DensePoly;
use tertius_rings::integers::Z;

/// A polynomial modulo a prime `p`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ZpPoly {
    p: u64,
    coeffs: Vec<u64>,
}

/// Computes `a^e mod p`.
#[must_use]
pub fn pow_mod_u64(mut a: u64, mut e: u64, p: u64) -> u64 {
    let mut result = 1 % p;
    a %= p;
    while e > 0 {
        if e & 1 == 1 {
            result = result * a % p;
        }
        a = a * a % p;
        e >>= 1;
    }
    result
}

/// Computes the inverse of a non-zero residue modulo a prime.
///
/// # Panics
///
/// Panics if `a` is divisible by `p`.
#[must_use]
pub fn inv_mod_u64(a: u64, p: u64) -> u64 {
    assert!(a % p != 0, "zero has no inverse");
    pow_mod_u64(a, p - 2, p)
}

/// Reduces an integer into `[0, p)`.
#[must_use]
pub fn reduce_integer(x: &Integer, p: u64) -> u64 {
    let m = Integer::from(p);
    let r = x.clone() - x.div_floor(&m) * &m;
    r.to_i64().map_or(0, |v| v.unsigned_abs())
}

impl ZpPoly {
    /// Creates a polynomial from residues (reduced and normalized).
    #[must_use]
    pub fn new(p: u64, coeffs: Vec<u64>) -> Self {
        let mut poly = Self {
            p,
            coeffs: coeffs.into_iter().map(|c| c % p).collect(),
        };
        poly.normalize();
        poly
    }

    /// Reduces an integer polynomial modulo `p`.
    #[must_use]
    pub fn from_z(f: &DensePoly<Z>, p: u64) -> Self {
        Self::new(p, f.coeffs().iter().map(|c| reduce_integer(&c.0, p)).collect())
    }

    /// Lifts to an integer polynomial with coefficients in `[0, p)`.
    #[must_use]
    pub fn to_z(&self) -> DensePoly<Z> {
        DensePoly::new(self.coeffs.iter().map(|&c| Z(Integer::from(c))).collect())
    }

    /// The zero polynomial.
    #[must_use]
    pub fn zero(p: u64) -> Self {
        Self { p, coeffs: Vec::new() }
    }

    /// The constant polynomial 1.
    #[must_use]
    pub fn one(p: u64) -> Self {
        Self::new(p, vec![1])
    }

    /// The polynomial `x`.
    #[must_use]
    pub fn x(p: u64) -> Self {
        Self::new(p, vec![0, 1])
    }

    fn normalize(&mut self) {
        while self.coeffs.last() == Some(&0) {
            self.coeffs.pop();
        }
    }

    /// The modulus.
    #[must_use]
    pub fn modulus(&self) -> u64 {
        self.p
    }

    /// Returns the coefficients in ascending order.
    #[must_use]
    pub fn coeffs(&self) -> &[u64] {
        &self.coeffs
    }

    /// Returns true for the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Degree; the zero polynomial reports `None`.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Leading coefficient (0 for the zero polynomial).
    #[must_use]
    pub fn leading_coeff(&self) -> u64 {
        self.coeffs.last().copied().unwrap_or(0)
    }

    fn zip_with(&self, other: &Self, f: impl Fn(u64, u64) -> u64) -> Self {
        let n = self.coeffs.len().max(other.coeffs.len());
        let at = |c: &[u64], i: usize| c.get(i).copied().unwrap_or(0);
        let coeffs = (0..n).map(|i| f(at(&self.coeffs, i), at(&other.coeffs, i))).collect();
        Self::new(self.p, coeffs)
    }

    /// `self + other`.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let p = self.p;
        self.zip_with(other, |a, b| (a + b) % p)
    }

    /// `self - other`.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let p = self.p;
        self.zip_with(other, |a, b| (a + p - b) % p)
    }

    /// Schoolbook product.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero(self.p);
        }
        let mut out = vec![0u64; self.coeffs.len() + other.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in other.coeffs.iter().enumerate() {
                out[i + j] = (out[i + j] + a * b) % self.p;
            }
        }
        Self::new(self.p, out)
    }

    /// `c * self`.
    #[must_use]
    pub fn scale(&self, c: u64) -> Self {
        Self::new(self.p, self.coeffs.iter().map(|&a| a * (c % self.p) % self.p).collect())
    }

    /// Euclidean division.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    #[must_use]
    pub fn div_rem(&self, other: &Self) -> (Self, Self) {
        assert!(!other.is_zero(), "division by zero polynomial");
        let p = self.p;
        let db = other.coeffs.len() - 1;
        if self.coeffs.len() <= db {
            return (Self::zero(p), self.clone());
        }
        let inv_lead = inv_mod_u64(other.leading_coeff(), p);
        let mut rem = self.coeffs.clone();
        let mut quot = vec![0u64; rem.len() - db];
        for k in (0..quot.len()).rev() {
            let c = rem[k + db] * inv_lead % p;
            if c == 0 {
                continue;
            }
            quot[k] = c;
            for (i, &b) in other.coeffs.iter().enumerate() {
                rem[k + i] = (rem[k + i] + p - c * b % p) % p;
            }
        }
        (Self::new(p, quot), Self::new(p, rem))
    }

    /// Remainder modulo `other`.
    #[must_use]
    pub fn rem(&self, other: &Self) -> Self {
        self.div_rem(other).1
    }

    /// Makes the polynomial monic.
    #[must_use]
    pub fn monic(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        self.scale(inv_mod_u64(self.leading_coeff(), self.p))
    }

    /// Monic greatest common divisor.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let r = a.rem(&b);
            a = b;
            b = r;
        }
        a.monic()
    }

    /// Extended Euclid: returns `(g, s, t)` with `s*self + t*other = g`, `g` monic.
    #[must_use]
    pub fn ext_gcd(&self, other: &Self) -> (Self, Self, Self) {
        let p = self.p;
        let (mut r0, mut r1) = (self.clone(), other.clone());
        let (mut s0, mut s1) = (Self::one(p), Self::zero(p));
        let (mut t0, mut t1) = (Self::zero(p), Self::one(p));
        while !r1.is_zero() {
            let (q, r) = r0.div_rem(&r1);
            let s = s0.sub(&q.mul(&s1));
            let t = t0.sub(&q.mul(&t1));
            r0 = std::mem::replace(&mut r1, r);
            s0 = std::mem::replace(&mut s1, s);
            t0 = std::mem::replace(&mut t1, t);
        }
        if r0.is_zero() {
            return (r0, s0, t0);
        }
        let inv = inv_mod_u64(r0.leading_coeff(), p);
        (r0.scale(inv), s0.scale(inv), t0.scale(inv))
    }

    /// Computes `self^e mod m` by repeated squaring.
    #[must_use]
    pub fn pow_mod(&self, mut e: u64, m: &Self) -> Self {
        let mut result = Self::one(self.p).rem(m);
        let mut base = self.rem(m);
        while e > 0 {
            if e & 1 == 1 {
                result = result.mul(&base).rem(m);
            }
            base = base.mul(&base).rem(m);
            e >>= 1;
        }
        result
    }

    /// Formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, &c)| c * (i as u64 % self.p) % self.p)
            .collect();
        Self::new(self.p, coeffs)
    }

    /// Returns true if `gcd(f, f') = 1`.
    #[must_use]
    pub fn is_squarefree(&self) -> bool {
        let d = self.derivative();
        !d.is_zero() && self.gcd(&d).degree() == Some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse() {
        for a in 1..13 {
            assert_eq!(a * inv_mod_u64(a, 13) % 13, 1);
        }
        assert_eq!(reduce_integer(&Integer::new(-3), 7), 4);
    }

    #[test]
    fn test_div_rem() {
        // x^3 + 2 divided by x + 1 over GF(5): quotient x^2 - x + 1, remainder 1
        let a = ZpPoly::new(5, vec![2, 0, 0, 1]);
        let b = ZpPoly::new(5, vec![1, 1]);
        let (q, r) = a.div_rem(&b);
        assert_eq!(q, ZpPoly::new(5, vec![1, 4, 1]));
        assert_eq!(r, ZpPoly::new(5, vec![1]));
        assert_eq!(q.mul(&b).add(&r), a);
    }

    #[test]
    fn test_ext_gcd() {
        let a = ZpPoly::new(7, vec![1, 0, 1]);
        let b = ZpPoly::new(7, vec![3, 1]);
        let (g, s, t) = a.ext_gcd(&b);
        assert_eq!(g, ZpPoly::one(7));
        assert_eq!(s.mul(&a).add(&t.mul(&b)), g);
    }

    #[test]
    fn test_squarefree_mod_p() {
        // (x + 1)^2 mod 3
        assert!(!ZpPoly::new(3, vec![1, 2, 1]).is_squarefree());
        assert!(ZpPoly::new(3, vec![1, 0, 1]).is_squarefree());
    }

    #[test]
    fn test_from_z_roundtrip() {
        let f = DensePoly::new(vec![Z::new(-1), Z::new(8), Z::new(3)]);
        let r = ZpPoly::from_z(&f, 5);
        assert_eq!(r.coeffs(), &[4, 3, 3]);
        assert_eq!(ZpPoly::from_z(&r.to_z(), 5), r);
    }
}
