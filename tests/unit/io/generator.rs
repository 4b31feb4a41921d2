//! Tests for seeded query generation

#[cfg(test)]
mod tests {
    use kiteparade::algorithm::brute_force::solve_by_enumeration;
    use kiteparade::algorithm::optimizer::solve;
    use kiteparade::io::batch::check_domain;
    use kiteparade::io::configuration::{EXHAUSTIVE_RIBBON_LIMIT, MAX_RIBBONS};
    use kiteparade::io::generator::{CaseProfile, generate_cases};

    // Tests the same seed reproduces the same batch
    // Verified by seeding from entropy
    #[test]
    fn test_reproducible() {
        for profile in [CaseProfile::Small, CaseProfile::Large, CaseProfile::Edge] {
            assert_eq!(generate_cases(profile, 50, 7), generate_cases(profile, 50, 7));
        }
        assert_ne!(
            generate_cases(CaseProfile::Small, 50, 7),
            generate_cases(CaseProfile::Small, 50, 8)
        );
    }

    // Tests small cases stay within reach of the exhaustive reference
    // Verified by widening the ribbon range
    #[test]
    fn test_small_profile_bounds() {
        let queries = generate_cases(CaseProfile::Small, 500, 1);
        assert_eq!(queries.len(), 500);

        for query in &queries {
            assert!(query.ribbons.get() <= EXHAUSTIVE_RIBBON_LIMIT);
            assert!(query.carton_size.get() <= 20);
            assert!(query.fleet_size.get() <= 20);
            assert!(query.parade_modulus.get() <= 50);
            assert_eq!(solve(query), solve_by_enumeration(query));
        }
        assert!(queries.iter().any(|query| query.ribbons.get() % 2 == 0));
    }

    // Tests large cases sit near the domain maxima
    // Verified by dropping the domain check on parade moduli
    #[test]
    fn test_large_profile_bounds() {
        for query in generate_cases(CaseProfile::Large, 200, 3) {
            assert!(check_domain(&query).is_ok());
            assert!(query.ribbons.get() >= MAX_RIBBONS - 2_000_001);
        }
    }

    // Tests edge cases repeat in a fixed order and agree with enumeration
    // Verified by shuffling the edge list with the seed
    #[test]
    fn test_edge_profile() {
        let first = generate_cases(CaseProfile::Edge, 40, 0);
        let second = generate_cases(CaseProfile::Edge, 40, 99);
        assert_eq!(first, second);
        assert_eq!(first.len(), 40);
        assert_eq!(first[0], first[18]);

        for query in first.iter().filter(|query| query.ribbons.get() <= EXHAUSTIVE_RIBBON_LIMIT) {
            assert_eq!(solve(query), solve_by_enumeration(query));
        }
    }

    // Tests a zero count yields an empty batch
    // Verified by generating at least one case
    #[test]
    fn test_zero_count() {
        assert!(generate_cases(CaseProfile::Large, 0, 0).is_empty());
    }
}
