//! Solver implementations for mixed-integer linear programming.
//!
//! Implements the `port::outbound::solver::Solver` trait with concrete backends.

mod highs;

pub use highs::HiGHSSolver;
