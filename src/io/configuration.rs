//! Domain limits and runtime configuration defaults

// Documented query domain, enforced by strict parsing and the input validator
/// Largest ribbon count `n` a query may carry
pub const MAX_RIBBONS: u64 = 1_000_000_000_000_000_000;
/// Largest TwinTail or QuadTail batch size (`c`, `d`)
pub const MAX_BATCH_SIZE: u32 = 1_000_000_000;
/// Largest parade modulus `p`
pub const MAX_PARADE_MODULUS: u64 = 1_000_000_000_000_000_000;

/// Value written for a query without any valid fleet
pub const INFEASIBLE_SENTINEL: i64 = -1;

// Brute-force enumeration is linear in n, so it is capped
/// Largest ribbon count the exhaustive checker and small generator use
pub const EXHAUSTIVE_RIBBON_LIMIT: u64 = 2_000;

// Default values for configurable parameters
/// Fixed seed for reproducible case generation
pub const DEFAULT_SEED: u64 = 42;
/// Default number of generated cases
pub const DEFAULT_CASE_COUNT: usize = 10;

// Progress bar display settings
/// Smallest batch that gets a progress bar
pub const PROGRESS_MIN_QUERIES: usize = 100_000;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;
