//! Euclidean division and gcd for polynomials over a field.

use tertius_rings::traits::Field;

use crate::dense::DensePoly;

fn leading_inverse<F: Field>(p: &DensePoly<F>) -> F {
    match p.leading_coeff().inv() {
        Some(inv) => inv,
        None => unreachable!("nonzero polynomial with zero leading coefficient"),
    }
}

/// Quotient and remainder of `a / b`.
///
/// # Panics
///
/// Panics if `b` is the zero polynomial.
pub fn poly_div_rem<F: Field>(a: &DensePoly<F>, b: &DensePoly<F>) -> (DensePoly<F>, DensePoly<F>) {
    assert!(!b.is_zero(), "division by zero polynomial");
    let db = b.degree();
    if a.degree() < db {
        return (DensePoly::zero(), a.clone());
    }

    let lead_inv = leading_inverse(b);
    let mut rem = a.coeffs().to_vec();
    let mut quot = vec![F::zero(); a.degree() - db + 1];
    for k in (0..quot.len()).rev() {
        let t = rem[k + db].clone() * lead_inv.clone();
        if t.is_zero() {
            continue;
        }
        for (r, c) in rem[k..=k + db].iter_mut().zip(b.coeffs()) {
            *r = r.clone() - t.clone() * c.clone();
        }
        quot[k] = t;
    }
    rem.truncate(db.max(1));
    (DensePoly::new(quot), DensePoly::new(rem))
}

/// Divides by the leading coefficient; zero stays zero.
pub fn make_monic<F: Field>(p: &DensePoly<F>) -> DensePoly<F> {
    if p.is_zero() {
        p.clone()
    } else {
        p.scale(&leading_inverse(p))
    }
}

/// Monic greatest common divisor; `gcd(0, 0) = 0`.
pub fn poly_gcd<F: Field>(a: &DensePoly<F>, b: &DensePoly<F>) -> DensePoly<F> {
    let (mut x, mut y) = (a.clone(), b.clone());
    while !y.is_zero() {
        let r = poly_div_rem(&x, &y).1;
        x = std::mem::replace(&mut y, r);
    }
    make_monic(&x)
}
