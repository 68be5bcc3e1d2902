use crate::CurveError;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Reduces `number` into the canonical range `[0, modulus)`.
///
/// Negative inputs (e.g. the coefficient `a = -3` of the NIST curves, or
/// coordinate differences) are mapped to their non-negative representative.
pub fn reduce(number: &BigInt, modulus: &BigInt) -> BigInt {
    number.mod_floor(modulus)
}

/// Extended Euclidean algorithm.
///
/// Returns `(gcd, x, y)` such that `b * x + n * y = gcd`.
pub fn xgcd(b: &BigInt, n: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut b, mut n) = (b.clone(), n.clone());
    let (mut x0, mut x1) = (BigInt::one(), BigInt::zero());
    let (mut y0, mut y1) = (BigInt::zero(), BigInt::one());

    while !n.is_zero() {
        let (q, r) = b.div_mod_floor(&n);
        b = std::mem::replace(&mut n, r);
        let x = &x0 - &q * &x1;
        x0 = std::mem::replace(&mut x1, x);
        let y = &y0 - &q * &y1;
        y0 = std::mem::replace(&mut y1, y);
    }

    (b, x0, y0)
}

/// Multiplicative inverse of `b` modulo `modulus`.
pub fn inverse(b: &BigInt, modulus: &BigInt) -> Result<BigInt, CurveError> {
    let (gcd, x, _) = xgcd(&reduce(b, modulus), modulus);
    if gcd.is_one() {
        Ok(reduce(&x, modulus))
    } else {
        Err(CurveError::NonInvertibleElement {
            element: b.to_string(),
            modulus: modulus.to_string(),
        })
    }
}

/// `lhs * rhs^-1 mod modulus`
pub fn div_mod(lhs: &BigInt, rhs: &BigInt, modulus: &BigInt) -> Result<BigInt, CurveError> {
    Ok(reduce(&(lhs * inverse(rhs, modulus)?), modulus))
}
