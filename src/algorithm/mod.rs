/// Per-direction face identifier index
pub mod adjacency;
/// Bitset candidate sets
pub mod bitset;
/// Sequential scan-order grid solver
pub mod solver;
