//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound::cli`]: the `rota` command-line driver
//! - [`outbound::solver`]: HiGHS-backed MILP solver

pub mod inbound;
pub mod outbound;
