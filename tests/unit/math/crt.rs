//! Tests for generalized Chinese remainder merging

#[cfg(test)]
mod tests {
    use kiteparade::math::congruence::Congruence;

    fn congruence(residue: i128, modulus: i128) -> Congruence {
        Congruence::new(residue, modulus).unwrap()
    }

    // Tests classic coprime merge
    // Verified by using n1 * n2 without dividing by the gcd
    #[test]
    fn test_merge_coprime() {
        let merged = congruence(2, 3)
            .merge(congruence(3, 5))
            .and_then(|partial| partial.merge(congruence(2, 7)));
        assert_eq!(merged, Some(congruence(23, 105)));
    }

    // Tests merge of moduli sharing a factor
    // Verified by skipping the division by the gcd
    #[test]
    fn test_merge_shared_factor() {
        // x ≡ 3 (mod 4), x ≡ 5 (mod 6) → x ≡ 11 (mod 12)
        assert_eq!(congruence(3, 4).merge(congruence(5, 6)), Some(congruence(11, 12)));
        // One modulus divides the other
        assert_eq!(congruence(1, 3).merge(congruence(4, 9)), Some(congruence(4, 9)));
        assert_eq!(congruence(4, 9).merge(congruence(1, 3)), Some(congruence(4, 9)));
    }

    // Tests inconsistent systems
    // Verified by removing the residue difference check
    #[test]
    fn test_merge_inconsistent() {
        assert_eq!(congruence(1, 4).merge(congruence(2, 6)), None);
        assert_eq!(congruence(0, 2).merge(congruence(1, 2)), None);
    }

    // Tests modulus 1 acts as the identity on both sides
    // Verified by treating modulus 1 as a real constraint with residue 0
    #[test]
    fn test_merge_identity() {
        let constraint = congruence(4, 9);
        assert_eq!(Congruence::UNCONSTRAINED.merge(constraint), Some(constraint));
        assert_eq!(constraint.merge(Congruence::UNCONSTRAINED), Some(constraint));
        assert_eq!(
            Congruence::UNCONSTRAINED.merge(Congruence::UNCONSTRAINED),
            Some(Congruence::UNCONSTRAINED)
        );
    }

    // Tests merge agrees with direct search on small systems
    // Verified by reconstructing the residue modulo n2 instead of the lcm
    #[test]
    fn test_merge_matches_search() {
        for first_modulus in 1..13_i128 {
            for second_modulus in 1..13_i128 {
                let period = first_modulus * second_modulus;
                for first_residue in 0..first_modulus {
                    for second_residue in 0..second_modulus {
                        let first = congruence(first_residue, first_modulus);
                        let second = congruence(second_residue, second_modulus);
                        let both: Vec<i128> = (0..period)
                            .filter(|&x| first.contains(x) && second.contains(x))
                            .collect();

                        match first.merge(second) {
                            Some(merged) => {
                                let expected: Vec<i128> =
                                    (0..period).filter(|&x| merged.contains(x)).collect();
                                assert_eq!(both, expected);
                                assert_eq!(period % merged.modulus(), 0);
                            }
                            None => assert!(both.is_empty()),
                        }
                    }
                }
            }
        }
    }

    // Tests merged modulus near 10^27 without overflow
    // Verified by computing the multiplier product without mul_mod
    #[test]
    fn test_merge_large_moduli() {
        let carton = congruence(123_456_789, 999_999_937);
        let parade = congruence(987_654_321_987_654_321, 999_999_999_999_999_989);

        let merged = carton.merge(parade).unwrap();
        assert_eq!(merged.modulus(), 999_999_937 * 999_999_999_999_999_989);
        assert!(carton.contains(merged.residue()));
        assert!(parade.contains(merged.residue()));
    }

    // Tests a merged modulus that cannot be represented
    // Verified by using wrapping multiplication for the lcm
    #[test]
    fn test_merge_modulus_overflow() {
        let first = congruence(1, i128::MAX / 3);
        let second = congruence(1, i128::MAX / 5);
        let divisor = kiteparade::math::gcd(first.modulus(), second.modulus());
        if (first.modulus() / divisor).checked_mul(second.modulus()).is_none() {
            assert_eq!(first.merge(second), None);
        }
    }
}
