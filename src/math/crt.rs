//! Generalized Chinese remainder theorem for two congruences
//!
//! The moduli need not be coprime. Two congruences agree exactly when their
//! residues match modulo `gcd(n1, n2)`, and the merged period is
//! `lcm(n1, n2)`.

use crate::math::congruence::Congruence;
use crate::math::gcd;
use crate::math::inverse::{modular_inverse, mul_mod};

impl Congruence {
    /// Combine two congruences into one equivalent congruence
    ///
    /// The result has modulus `lcm(n1, n2)` and is satisfied exactly by the
    /// integers satisfying both inputs. An unconstrained side (modulus 1)
    /// returns the other side unchanged.
    ///
    /// Returns `None` when the congruences are inconsistent, and also when
    /// the merged modulus would not fit in `i128` (unreachable for moduli
    /// below `2^63`).
    pub fn merge(self, other: Self) -> Option<Self> {
        if self.is_unconstrained() {
            return Some(other);
        }
        if other.is_unconstrained() {
            return Some(self);
        }

        let divisor = gcd(self.modulus(), other.modulus());
        let difference = other.residue() - self.residue();
        if difference % divisor != 0 {
            return None;
        }

        let first_reduced = self.modulus() / divisor;
        let second_reduced = other.modulus() / divisor;
        let merged_modulus = first_reduced.checked_mul(other.modulus())?;

        // Solve first_reduced * t ≡ difference / divisor (mod second_reduced)
        let multiplier = if second_reduced == 1 {
            0
        } else {
            let inverse = modular_inverse(first_reduced, second_reduced).ok()?;
            let target = (difference / divisor).rem_euclid(second_reduced);
            mul_mod(target, inverse, second_reduced)
        };

        // multiplier < second_reduced keeps the sum below merged_modulus
        let offset = self.modulus() * multiplier;
        Self::new(self.residue() + offset, merged_modulus)
    }
}
