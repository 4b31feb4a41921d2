//! Kite counts recovered from a claimed total
//!
//! `A + 2B = m` and `A + B = K` pin down `B = m - K` and `A = 2K - m`, so a
//! total alone determines the whole fleet.

use crate::algorithm::optimizer::Query;

/// TwinTail and QuadTail counts of one fleet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composition {
    /// Kites using two ribbons each (`A`)
    pub twin_tails: u64,
    /// Kites using four ribbons each (`B`)
    pub quad_tails: u64,
}

impl Composition {
    /// Fleet with `total` kites using exactly `ribbons` ribbons
    ///
    /// Returns `None` for an odd ribbon count or a total outside
    /// `[⌈m/2⌉, m]`, where one of the counts would be negative.
    pub const fn from_total(ribbons: u64, total: u64) -> Option<Self> {
        if ribbons % 2 != 0 {
            return None;
        }
        let half = ribbons / 2;
        if total > half || 2 * total < half {
            return None;
        }
        Some(Self {
            twin_tails: 2 * total - half,
            quad_tails: half - total,
        })
    }

    /// Total kite count `A + B`
    pub const fn total(&self) -> u64 {
        self.twin_tails + self.quad_tails
    }

    /// Ribbons consumed, `2A + 4B`
    pub const fn ribbons(&self) -> u128 {
        2 * self.twin_tails as u128 + 4 * self.quad_tails as u128
    }

    /// Whether this fleet meets every constraint of `query`
    pub fn satisfies(&self, query: &Query) -> bool {
        self.twin_tails % u64::from(query.carton_size.get()) == 0
            && self.quad_tails % u64::from(query.fleet_size.get()) == 0
            && self.total() % query.parade_modulus.get() == 0
            && self.ribbons() == u128::from(query.ribbons.get())
    }
}
