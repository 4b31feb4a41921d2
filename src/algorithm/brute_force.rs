//! Exhaustive reference search over QuadTail counts
//!
//! Walks every multiple of `d` up to `n / 4`, so the cost is linear in
//! `n / d`. Only suitable for small ribbon counts; the checker caps its use
//! at [`crate::io::configuration::EXHAUSTIVE_RIBBON_LIMIT`].

use std::iter::successors;

use crate::algorithm::optimizer::{Outcome, Query};

/// Minimum kite total for `query` by enumeration
pub fn solve_by_enumeration(query: &Query) -> Outcome {
    let ribbons = query.ribbons.get();
    if ribbons % 2 != 0 {
        return Outcome::Infeasible;
    }

    let half = ribbons / 2;
    let carton = u64::from(query.carton_size.get());
    let fleet = u64::from(query.fleet_size.get());
    let parade = query.parade_modulus.get();

    successors(Some(0_u64), |quad| quad.checked_add(fleet))
        .take_while(|&quad| quad <= ribbons / 4)
        .filter_map(|quad| {
            // 2 * ⌊n/4⌋ <= ⌊n/2⌋
            let twin = half - 2 * quad;
            (twin % carton == 0).then_some(twin + quad)
        })
        .filter(|total| total % parade == 0)
        .min()
        .map_or(Outcome::Infeasible, Outcome::Minimum)
}
