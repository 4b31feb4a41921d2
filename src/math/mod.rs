//! Number-theoretic primitives for the optimizer
//!
//! Everything works on signed integers so that Bézout coefficients can go
//! negative. Residues handed back to callers are always normalized into
//! `[0, modulus)`.

use num_traits::{PrimInt, Signed};

/// Linear congruences and their general solution
pub mod congruence;
/// Generalized Chinese remainder merging of two congruences
pub mod crt;
/// Modular inverse and overflow-free modular multiplication
pub mod inverse;

/// Extended Euclidean algorithm
///
/// Returns `(g, s, t)` with `g = gcd(|a|, |b|) >= 0` and `s * a + t * b = g`.
/// Either argument may be zero; `extended_gcd(0, 0)` is `(0, 1, 0)`.
///
/// The loop is iterative, and truncating division keeps every intermediate bounded by `max(|a|, |b|)`.
pub fn extended_gcd<T: PrimInt + Signed>(a: T, b: T) -> (T, T, T) {
    let (mut old_remainder, mut remainder) = (a, b);
    let (mut old_first, mut first) = (T::one(), T::zero());
    let (mut old_second, mut second) = (T::zero(), T::one());

    while !remainder.is_zero() {
        let quotient = old_remainder / remainder;

        (old_remainder, remainder) = (remainder, old_remainder - quotient * remainder);
        (old_first, first) = (first, old_first - quotient * first);
        (old_second, second) = (second, old_second - quotient * second);
    }

    if old_remainder.is_negative() {
        (-old_remainder, -old_first, -old_second)
    } else {
        (old_remainder, old_first, old_second)
    }
}

/// Greatest common divisor of `|a|` and `|b|`
pub fn gcd<T: PrimInt + Signed>(a: T, b: T) -> T {
    extended_gcd(a, b).0
}
