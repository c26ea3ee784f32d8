//! Solver factory.
//!
//! Provides factory functions for constructing the MILP backend and the
//! coordinator that drives it.

use std::sync::Arc;

use crate::adapter::outbound::solver::HiGHSSolver;
use crate::application::coordinator::Coordinator;
use crate::error::Result;
use crate::infrastructure::config::settings::Settings;
use crate::infrastructure::config::solver::{SolverBackend, SolverConfig};
use crate::port::outbound::solver::Solver;

/// Build the solver backend selected by `[solver].backend`.
pub fn build_solver(config: &SolverConfig) -> Arc<dyn Solver> {
    match config.backend {
        SolverBackend::Highs => Arc::new(HiGHSSolver::new()),
    }
}

/// Build a coordinator for the initial configuration in `settings`.
///
/// The coordinator starts in `Pending`; no solve runs until the caller asks.
///
/// # Errors
///
/// Returns an error if the configured roster or demand is invalid.
pub fn build_coordinator(settings: &Settings) -> Result<Coordinator> {
    let initial = settings.configuration()?;
    Ok(Coordinator::new(
        initial,
        build_solver(&settings.solver),
        settings.coordinator_options(),
    ))
}
