//! Minimum kite total via congruences over the QuadTail batch count
//!
//! With `m = n / 2` ribbon pairs and `y` QuadTail batches (`B = d * y`), the
//! TwinTail count is `A = m - 2dy` and the total is `K = m - dy`. Both
//! divisibility requirements on `A` and `K` become linear congruences in `y`:
//!
//! - `A ≡ 0 (mod c)`  ⇔  `2d * y ≡ m (mod c)`
//! - `K ≡ 0 (mod p)`  ⇔  `d * y ≡ m (mod p)`
//!
//! `K` falls as `y` grows, so the answer is the largest `y` in
//! `[0, ⌊n / 4d⌋]` satisfying the merged congruence.

use std::fmt;
use std::num::{NonZeroU32, NonZeroU64};

use log::debug;

use crate::io::configuration::INFEASIBLE_SENTINEL;
use crate::io::error::{Result, invalid_parameter};
use crate::math::congruence::Congruence;

/// One independent ribbon allocation query `(n, c, d, p)`
///
/// The field widths keep every intermediate of [`solve`] inside `i128`: the
/// merged congruence modulus is at most `c * p < 2^96`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Query {
    /// Total ribbons `n`
    pub ribbons: NonZeroU64,
    /// TwinTail batch size `c`
    pub carton_size: NonZeroU32,
    /// QuadTail batch size `d`
    pub fleet_size: NonZeroU32,
    /// Required divisor `p` of the total kite count
    pub parade_modulus: NonZeroU64,
}

impl Query {
    /// Create a query from raw values
    ///
    /// # Errors
    ///
    /// Returns [`crate::KiteError::InvalidParameter`] if any value is zero
    pub fn new(ribbons: u64, carton_size: u32, fleet_size: u32, parade_modulus: u64) -> Result<Self> {
        Ok(Self {
            ribbons: NonZeroU64::new(ribbons)
                .ok_or_else(|| invalid_parameter("n", &ribbons, &"must be positive"))?,
            carton_size: NonZeroU32::new(carton_size)
                .ok_or_else(|| invalid_parameter("c", &carton_size, &"must be positive"))?,
            fleet_size: NonZeroU32::new(fleet_size)
                .ok_or_else(|| invalid_parameter("d", &fleet_size, &"must be positive"))?,
            parade_modulus: NonZeroU64::new(parade_modulus)
                .ok_or_else(|| invalid_parameter("p", &parade_modulus, &"must be positive"))?,
        })
    }

    /// Largest QuadTail batch count `⌊n / 4d⌋` that leaves `A >= 0`
    pub const fn fleet_bound(&self) -> u64 {
        // 4d < 2^34, no overflow
        self.ribbons.get() / (4 * self.fleet_size.get() as u64)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.ribbons, self.carton_size, self.fleet_size, self.parade_modulus
        )
    }
}

/// Result of a single query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Smallest admissible total `K = A + B`
    Minimum(u64),
    /// No fleet satisfies every constraint
    Infeasible,
}

impl Outcome {
    /// The minimum total, if any
    pub const fn minimum(self) -> Option<u64> {
        match self {
            Self::Minimum(total) => Some(total),
            Self::Infeasible => None,
        }
    }

    /// Whether a valid fleet exists
    pub const fn is_feasible(self) -> bool {
        matches!(self, Self::Minimum(_))
    }

    /// Signed form used by the text protocol, [`INFEASIBLE_SENTINEL`] when infeasible
    pub const fn to_sentinel(self) -> i64 {
        match self {
            // K <= n / 2 < 2^63
            Self::Minimum(total) => total as i64,
            Self::Infeasible => INFEASIBLE_SENTINEL,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_sentinel())
    }
}

/// Minimum kite total for `query`
///
/// Runs in `O(log(max(c, d, p)))` regardless of `n`. Every reason for
/// infeasibility folds into [`Outcome::Infeasible`]; the reason is only
/// visible in debug logs.
pub fn solve(query: &Query) -> Outcome {
    let ribbons = query.ribbons.get();
    if ribbons % 2 != 0 {
        debug!("query ({query}): odd ribbon count");
        return Outcome::Infeasible;
    }

    let half = i128::from(ribbons / 2);
    let fleet = i128::from(query.fleet_size.get());
    let maximum_y = i128::from(query.fleet_bound());

    let Some(carton) = Congruence::solve(2 * fleet, half, i128::from(query.carton_size.get()))
    else {
        debug!("query ({query}): TwinTail count can never be a multiple of c");
        return Outcome::Infeasible;
    };

    let Some(parade) = Congruence::solve(fleet, half, i128::from(query.parade_modulus.get()))
    else {
        debug!("query ({query}): total can never be a multiple of p");
        return Outcome::Infeasible;
    };

    let Some(merged) = carton.merge(parade) else {
        debug!("query ({query}): {carton} and {parade} are inconsistent");
        return Outcome::Infeasible;
    };

    let Some(best_y) = merged.largest_at_most(maximum_y) else {
        debug!("query ({query}): smallest solution of {merged} exceeds y <= {maximum_y}");
        return Outcome::Infeasible;
    };

    u64::try_from(half - fleet * best_y).map_or(Outcome::Infeasible, Outcome::Minimum)
}

/// Solve every query in order
pub fn solve_batch(queries: &[Query]) -> Vec<Outcome> {
    let outcomes: Vec<Outcome> = queries.iter().map(solve).collect();
    debug!(
        "solved {} queries, {} feasible",
        outcomes.len(),
        outcomes.iter().filter(|outcome| outcome.is_feasible()).count()
    );
    outcomes
}
