/// Exhaustive enumeration used as a reference for small queries
pub mod brute_force;
/// Reconstruction of kite counts from a claimed total
pub mod composition;
/// Query model and the congruence-based minimum search
pub mod optimizer;
