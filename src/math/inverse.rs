//! Modular inverse and modular multiplication without intermediate overflow

use std::error::Error;
use std::fmt;

use crate::math::extended_gcd;

/// Value shares a factor with the modulus, so no inverse exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoInverseError {
    /// Value whose inverse was requested
    pub value: i128,
    /// Modulus of the residue ring
    pub modulus: i128,
}

impl fmt::Display for NoInverseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} has no multiplicative inverse modulo {}",
            self.value, self.modulus
        )
    }
}

impl Error for NoInverseError {}

/// Multiplicative inverse of `value` modulo `modulus`
///
/// The result lies in `[0, modulus)`. Every value is invertible modulo 1 and
/// the inverse is the only residue, 0.
///
/// # Errors
///
/// Returns [`NoInverseError`] if `modulus` is not positive or
/// `gcd(value, modulus) != 1`.
pub fn modular_inverse(value: i128, modulus: i128) -> Result<i128, NoInverseError> {
    let failure = NoInverseError { value, modulus };
    if modulus < 1 {
        return Err(failure);
    }

    let (divisor, coefficient, _) = extended_gcd(value.rem_euclid(modulus), modulus);
    if divisor != 1 {
        return Err(failure);
    }

    Ok(coefficient.rem_euclid(modulus))
}

/// Product `a * b` reduced modulo `modulus`
///
/// Both factors must already lie in `[0, modulus)`. A native multiply is used
/// whenever it fits in `i128`; otherwise the product is accumulated by
/// doubling over `u128`, where the sum of two residues cannot overflow.
/// A modulus of 1 or less yields 0.
pub fn mul_mod(a: i128, b: i128, modulus: i128) -> i128 {
    if modulus <= 1 {
        return 0;
    }
    if let Some(product) = a.checked_mul(b) {
        return product.rem_euclid(modulus);
    }

    let wide_modulus = modulus.unsigned_abs();
    let mut base = a.unsigned_abs() % wide_modulus;
    let mut remaining = b.unsigned_abs();
    let mut accumulator = 0_u128;

    while remaining > 0 {
        if remaining & 1 == 1 {
            accumulator = add_mod(accumulator, base, wide_modulus);
        }
        base = add_mod(base, base, wide_modulus);
        remaining >>= 1;
    }

    // Below the modulus, which itself fits in i128
    accumulator as i128
}

const fn add_mod(a: u128, b: u128, modulus: u128) -> u128 {
    let sum = a + b;
    if sum >= modulus { sum - modulus } else { sum }
}
