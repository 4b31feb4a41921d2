//! Linear congruences and their general solution
//!
//! A [`Congruence`] is the set of integers `x` with `x ≡ residue (mod modulus)`.
//! Solving `a * x ≡ b (mod n)` for a non-coprime coefficient divides the whole
//! relation by `gcd(a, n)` first, so the answer is expressed modulo the
//! reduced modulus rather than `n`.

use std::fmt;

use crate::math::gcd;
use crate::math::inverse::{modular_inverse, mul_mod};

/// Solution set `x ≡ residue (mod modulus)` with `0 <= residue < modulus`
///
/// A modulus of 1 admits every integer and is the identity for
/// [`Congruence::merge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Congruence {
    residue: i128,
    modulus: i128,
}

impl Congruence {
    /// Congruence satisfied by every integer
    pub const UNCONSTRAINED: Self = Self {
        residue: 0,
        modulus: 1,
    };

    /// Create a congruence, normalizing `residue` into `[0, modulus)`
    ///
    /// Returns `None` when `modulus` is below 1.
    pub const fn new(residue: i128, modulus: i128) -> Option<Self> {
        if modulus < 1 {
            return None;
        }
        Some(Self {
            residue: residue.rem_euclid(modulus),
            modulus,
        })
    }

    /// Smallest non-negative member of the solution set
    pub const fn residue(&self) -> i128 {
        self.residue
    }

    /// Period of the solution set
    pub const fn modulus(&self) -> i128 {
        self.modulus
    }

    /// Whether every integer satisfies this congruence
    pub const fn is_unconstrained(&self) -> bool {
        self.modulus == 1
    }

    /// Whether `value` belongs to the solution set
    pub const fn contains(&self, value: i128) -> bool {
        value.rem_euclid(self.modulus) == self.residue
    }

    /// Largest member of the solution set not exceeding `limit`
    ///
    /// Returns `None` when even the residue is above `limit`.
    pub const fn largest_at_most(&self, limit: i128) -> Option<i128> {
        if self.residue > limit {
            return None;
        }
        let steps = (limit - self.residue) / self.modulus;
        Some(self.residue + steps * self.modulus)
    }

    /// Solve `coefficient * x ≡ target (mod modulus)` for `x`
    ///
    /// Returns the general solution, or `None` when no `x` exists or
    /// `modulus` is below 1. A coefficient divisible by the modulus either
    /// admits everything (target also divisible) or nothing.
    pub fn solve(coefficient: i128, target: i128, modulus: i128) -> Option<Self> {
        if modulus < 1 {
            return None;
        }
        if modulus == 1 {
            return Some(Self::UNCONSTRAINED);
        }

        let coefficient = coefficient.rem_euclid(modulus);
        let target = target.rem_euclid(modulus);

        let divisor = gcd(coefficient, modulus);
        if target % divisor != 0 {
            return None;
        }

        let reduced_modulus = modulus / divisor;
        if reduced_modulus == 1 {
            return Some(Self::UNCONSTRAINED);
        }

        // Coprime to the reduced modulus after dividing out the gcd
        let inverse = modular_inverse(coefficient / divisor, reduced_modulus).ok()?;
        let residue = mul_mod(target / divisor, inverse, reduced_modulus);

        Some(Self {
            residue,
            modulus: reduced_modulus,
        })
    }
}

impl fmt::Display for Congruence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x ≡ {} (mod {})", self.residue, self.modulus)
    }
}
