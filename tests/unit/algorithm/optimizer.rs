//! Tests for query construction and the congruence-based optimizer

#[cfg(test)]
mod tests {
    use kiteparade::algorithm::optimizer::{Outcome, Query, solve, solve_batch};
    use kiteparade::KiteError;

    fn query(n: u64, c: u32, d: u32, p: u64) -> Query {
        Query::new(n, c, d, p).unwrap()
    }

    // Tests that every zero field is refused by name
    // Verified by accepting zero for the parade modulus
    #[test]
    fn test_query_rejects_zero() {
        for (values, name) in [
            ((0, 1, 1, 1), "n"),
            ((4, 0, 1, 1), "c"),
            ((4, 1, 0, 1), "d"),
            ((4, 1, 1, 0), "p"),
        ] {
            let (n, c, d, p) = values;
            match Query::new(n, c, d, p) {
                Err(KiteError::InvalidParameter { parameter, .. }) => assert_eq!(parameter, name),
                other => unreachable!("expected InvalidParameter for {name}, got {other:?}"),
            }
        }
    }

    // Tests the QuadTail batch bound and display format
    // Verified by dividing by 2d instead of 4d
    #[test]
    fn test_fleet_bound_and_display() {
        assert_eq!(query(100, 4, 3, 29).fleet_bound(), 8);
        assert_eq!(query(8, 6, 4, 1).fleet_bound(), 0);
        assert_eq!(query(1_000_000_000_000_000_000, 1, 1, 1).fleet_bound(), 250_000_000_000_000_000);
        assert_eq!(query(100, 4, 3, 29).to_string(), "100 4 3 29");
    }

    // Tests outcome accessors and sentinel rendering
    // Verified by printing 0 for infeasible outcomes
    #[test]
    fn test_outcome_accessors() {
        assert_eq!(Outcome::Minimum(29).minimum(), Some(29));
        assert_eq!(Outcome::Infeasible.minimum(), None);
        assert!(Outcome::Minimum(1).is_feasible());
        assert!(!Outcome::Infeasible.is_feasible());
        assert_eq!(Outcome::Infeasible.to_sentinel(), -1);
        assert_eq!(Outcome::Minimum(12).to_string(), "12");
        assert_eq!(Outcome::Infeasible.to_string(), "-1");
    }

    // Tests the sample batch
    // Verified by returning the smallest y instead of the largest
    #[test]
    fn test_solve_sample_batch() {
        assert_eq!(solve(&query(1, 1, 1, 1)), Outcome::Infeasible);
        assert_eq!(solve(&query(4, 3, 1, 1)), Outcome::Minimum(1));
        assert_eq!(solve(&query(100, 4, 3, 29)), Outcome::Minimum(29));
    }

    // Tests the infeasibility paths each in isolation
    // Verified by skipping the carton congruence
    #[test]
    fn test_solve_infeasible_paths() {
        // gcd(c, 2d) does not divide m
        assert_eq!(solve(&query(12, 4, 2, 1)), Outcome::Infeasible);
        // p > m
        assert_eq!(solve(&query(20, 1, 1, 11)), Outcome::Infeasible);
        // solutions exist, none with A >= 0 and B >= 0
        assert_eq!(solve(&query(8, 6, 4, 1)), Outcome::Infeasible);
        // every admissible y gives a total not divisible by p
        assert_eq!(solve(&query(12, 2, 2, 5)), Outcome::Infeasible);
        // m odd forces A odd, c = 2 needs A even
        assert_eq!(solve(&query(999_999_999_999_999_998, 2, 1, 1)), Outcome::Infeasible);
    }

    // Tests cases where the largest y must be stepped back
    // Verified by clamping to the bound without consulting the congruence
    #[test]
    fn test_solve_steps_back_from_bound() {
        assert_eq!(solve(&query(20, 3, 2, 4)), Outcome::Minimum(8));
        assert_eq!(solve(&query(40, 4, 2, 6)), Outcome::Minimum(12));
        assert_eq!(
            solve(&query(8_000_000_000, 1_000_000_000, 1_000_000_000, 3)),
            Outcome::Minimum(3_000_000_000)
        );
    }

    // Tests all-TwinTail and all-QuadTail optima
    // Verified by restricting y to strictly positive values
    #[test]
    fn test_solve_single_kind() {
        assert_eq!(solve(&query(20, 5, 6, 10)), Outcome::Minimum(10));
        assert_eq!(solve(&query(40, 21, 5, 10)), Outcome::Minimum(10));
    }

    // Tests values at the domain maxima
    // Verified by computing the merged modulus in u64
    #[test]
    fn test_solve_extremes() {
        assert_eq!(
            solve(&query(1_000_000_000_000_000_000, 1, 1, 1)),
            Outcome::Minimum(250_000_000_000_000_000)
        );
        assert_eq!(
            solve(&query(
                1_000_000_000_000_000_000,
                1_000_000_000,
                1_000_000_000,
                2_000_000_000
            )),
            Outcome::Minimum(250_000_000_000_000_000)
        );

        // Merged modulus near 10^27, p above m
        assert_eq!(
            solve(&query(
                1_000_000_000_000_000_000,
                999_999_937,
                1,
                999_999_999_999_999_989,
            )),
            Outcome::Infeasible
        );

        // Large coprime c and p with a feasible merge
        assert_eq!(
            solve(&query(1_000_000_000_000_000_000, 999_999_937, 1, 123_456_789)),
            Outcome::Minimum(255_331_088_664_141_393)
        );
        assert_eq!(
            solve(&query(999_999_999_999_999_998, 999_999_929, 7, 123_456_789)),
            Outcome::Minimum(297_423_160_132_955_391)
        );
    }

    // Tests batch solving preserves order
    // Verified by sorting outcomes before returning
    #[test]
    fn test_solve_batch_order() {
        let queries = [query(100, 4, 3, 29), query(1, 1, 1, 1), query(4, 3, 1, 1)];
        assert_eq!(
            solve_batch(&queries),
            vec![Outcome::Minimum(29), Outcome::Infeasible, Outcome::Minimum(1)]
        );
        assert!(solve_batch(&[]).is_empty());
    }
}
