//! Cyclotomic polynomials and the minimal polynomials of `2cos(2π/n)`.

use tertius_rings::integers::Z;
use tertius_rings::traits::Ring;

use crate::dense::DensePoly;
use crate::integer::{div_exact, int_poly};

/// Möbius function.
#[must_use]
pub fn moebius(mut n: u64) -> i8 {
    assert!(n > 0, "moebius(0) is undefined");
    let mut sign = 1i8;
    let mut p = 2u64;
    while p * p <= n {
        if n % p == 0 {
            n /= p;
            if n % p == 0 {
                return 0;
            }
            sign = -sign;
        }
        p += 1;
    }
    if n > 1 {
        -sign
    } else {
        sign
    }
}

/// Euler's totient.
#[must_use]
pub fn totient(mut n: u64) -> u64 {
    let mut result = n;
    let mut p = 2u64;
    while p * p <= n {
        if n % p == 0 {
            while n % p == 0 {
                n /= p;
            }
            result -= result / p;
        }
        p += 1;
    }
    if n > 1 {
        result -= result / n;
    }
    result
}

fn divisors(n: u64) -> Vec<u64> {
    (1..=n).filter(|d| n % d == 0).collect()
}

/// The `n`-th cyclotomic polynomial `Φ_n`.
///
/// # Panics
///
/// Panics if `n` is zero.
#[must_use]
pub fn cyclotomic(n: u64) -> DensePoly<Z> {
    assert!(n > 0, "cyclotomic(0) is undefined");

    // Φ_n = Π_{d | n} (x^d - 1)^μ(n/d)
    let mut num = DensePoly::<Z>::one();
    let mut den = DensePoly::<Z>::one();
    for d in divisors(n) {
        let factor = DensePoly::monomial(Z::one(), d as usize).sub(&DensePoly::one());
        match moebius(n / d) {
            1 => num = num.mul(&factor),
            -1 => den = den.mul(&factor),
            _ => {}
        }
    }

    div_exact(&num, &den).unwrap_or_else(|| unreachable!("cyclotomic quotient is exact"))
}

/// Minimal polynomial of `2cos(2π/n)` over the integers.
///
/// Its degree is `φ(n)/2` for `n ≥ 3`. Roots are `2cos(2πk/n)` with
/// `gcd(k, n) = 1`.
///
/// # Panics
///
/// Panics if `n` is zero.
#[must_use]
pub fn cos_minpoly(n: u64) -> DensePoly<Z> {
    assert!(n > 0, "cos_minpoly(0) is undefined");
    match n {
        1 => return int_poly(&[-2, 1]),
        2 => return int_poly(&[2, 1]),
        _ => {}
    }

    // Φ_n is palindromic of degree 2m: Φ_n(x) = x^m Ψ(x + 1/x).
    let phi = cyclotomic(n);
    let m = phi.degree() / 2;

    // x^k + x^-k = D_k(y) with D_0 = 2, D_1 = y, D_{k+1} = y D_k - D_{k-1}.
    let y = DensePoly::<Z>::x();
    let mut prev = DensePoly::constant(Z::new(2));
    let mut cur = y.clone();
    let mut psi = DensePoly::constant(phi.coeff(m));
    for k in 1..=m {
        psi = psi.add(&cur.scale(&phi.coeff(m + k)));
        let next = y.mul(&cur).sub(&prev);
        prev = cur;
        cur = next;
    }
    psi
}
