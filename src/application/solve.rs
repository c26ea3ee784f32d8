//! Solver adapter: run a backend and normalize its outcome.
//!
//! This is the only place where [`SolverFailure`] and raw solution vectors
//! are interpreted. Everything downstream sees a [`SolveResult`].

use std::sync::Arc;
use std::time::Instant;

use rust_decimal::Decimal;
use tracing::{info, warn};

use super::model::ScheduleModel;
use crate::domain::{Assignment, AssignmentRow, Day, SolveResult, SolverErrorReason, DAYS_PER_WEEK};
use crate::port::outbound::solver::{LpSolution, Solver, SolverFailure};

/// Binary variables above this value are read as "scheduled".
const BINARY_THRESHOLD: f64 = 0.5;

/// Wraps a [`Solver`] backend and classifies its results.
#[derive(Clone)]
pub struct SolverAdapter {
    backend: Arc<dyn Solver>,
}

impl SolverAdapter {
    pub fn new(backend: Arc<dyn Solver>) -> Self {
        Self { backend }
    }

    /// Name of the underlying backend.
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Solve `model`, blocking until the backend returns.
    #[must_use]
    pub fn solve(&self, model: &ScheduleModel) -> SolveResult {
        let started = Instant::now();
        let outcome = self.backend.solve_ilp(model.problem());
        let elapsed_ms = started.elapsed().as_millis() as u64;

        let result = match outcome {
            Ok(solution) => decode(model, &solution),
            Err(SolverFailure::Infeasible) => SolveResult::Infeasible,
            Err(SolverFailure::Unbounded) => SolveResult::SolverError {
                reason: SolverErrorReason::Unbounded,
            },
            Err(SolverFailure::Backend(message)) => SolveResult::SolverError {
                reason: SolverErrorReason::internal(message),
            },
        };

        match &result {
            SolveResult::SolverError { reason } => warn!(
                backend = self.backend.name(),
                version = model.version(),
                elapsed_ms,
                reason = %reason,
                "solve failed"
            ),
            other => info!(
                backend = self.backend.name(),
                version = model.version(),
                elapsed_ms,
                outcome = other.label(),
                "solve finished"
            ),
        }

        result
    }
}

/// Turn a solution vector into an assignment with an exact total cost.
fn decode(model: &ScheduleModel, solution: &LpSolution) -> SolveResult {
    let expected = model.staff().len() * DAYS_PER_WEEK;
    if solution.values.len() != expected {
        return SolveResult::SolverError {
            reason: SolverErrorReason::internal(format!(
                "solution has {} values, model has {expected} variables",
                solution.values.len()
            )),
        };
    }
    if let Some(bad) = solution.values.iter().find(|v| !v.is_finite()) {
        return SolveResult::SolverError {
            reason: SolverErrorReason::internal(format!("non-finite variable value {bad}")),
        };
    }

    let mut total_cost = Decimal::ZERO;
    let rows = model
        .staff()
        .iter()
        .enumerate()
        .map(|(s, (staff_id, cost))| {
            let days = Day::ALL
                .map(|day| solution.values[ScheduleModel::var_index(s, day)] > BINARY_THRESHOLD);
            let row = AssignmentRow {
                staff_id: staff_id.clone(),
                days,
            };
            total_cost += *cost * Decimal::from(row.days_worked());
            row
        })
        .collect();

    SolveResult::Optimal {
        assignment: Assignment::from_rows(rows),
        total_cost,
    }
}
