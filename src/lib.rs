pub mod constraint;
pub mod permutation;
pub mod search;

// input, diagnostics and cross-checks
pub mod input;
pub mod propagate;
pub mod verify;

pub mod config;
pub mod logging;

pub use constraint::{Constraint, Instance, Rank, Vertex};
pub use permutation::Permutation;
pub use search::{solve, solve_instance, solve_with_stats, SearchStats};
