//! Solver port for mixed-integer linear programming.
//!
//! Defines the contract between the scheduling core and a concrete MILP
//! backend. Backends map their own status codes onto [`SolverFailure`]; the
//! application's solver adapter is the only consumer of this vocabulary.
//!
//! # Overview
//!
//! - [`Solver`]: Core ILP solver interface
//! - [`IlpProblem`]: Problem definition (minimisation)
//! - [`LpSolution`]: Solution representation
//! - [`SolverFailure`]: Backend-neutral failure codes

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::constraint::{Constraint, VariableBounds};

/// Mixed-integer linear programming solver.
///
/// Implementations wrap specific solver backends (HiGHS, Gurobi, CBC, etc.)
/// and provide a unified interface for minimisation problems.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`); solves for different
/// configuration versions may run on separate blocking threads at once.
pub trait Solver: Send + Sync {
    /// Return the solver name for logging and configuration.
    fn name(&self) -> &'static str;

    /// Solve an integer linear programming problem to optimality.
    ///
    /// Minimizes `objective · x` subject to the constraints and bounds.
    /// Blocks the calling thread until the backend returns.
    ///
    /// # Errors
    ///
    /// Returns [`SolverFailure::Infeasible`] when no solution exists,
    /// [`SolverFailure::Unbounded`] for an unbounded objective, and
    /// [`SolverFailure::Backend`] for anything else.
    fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution, SolverFailure>;
}

/// Integer linear programming problem definition.
///
/// Represents a minimization problem of the form:
///
/// ```text
/// minimize    c^T * x
/// subject to  constraints
///             bounds (and integrality) on x
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IlpProblem {
    /// Label identifying the problem in logs, e.g. `schedule-v3`.
    pub label: String,

    /// Objective function coefficients, one per variable.
    pub objective: Vec<Decimal>,

    /// Linear constraints on the variables.
    pub constraints: Vec<Constraint>,

    /// Bounds and integrality for each variable.
    pub bounds: Vec<VariableBounds>,
}

impl IlpProblem {
    /// Create a problem with `num_vars` binary variables and a zero objective.
    #[must_use]
    pub fn binary(label: impl Into<String>, num_vars: usize) -> Self {
        Self {
            label: label.into(),
            objective: vec![Decimal::ZERO; num_vars],
            constraints: Vec::new(),
            bounds: vec![VariableBounds::binary(); num_vars],
        }
    }

    /// Return the number of decision variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }
}

/// Solution returned by a backend.
#[derive(Debug, Clone, PartialEq)]
pub struct LpSolution {
    /// Value of each decision variable, in variable order.
    pub values: Vec<f64>,

    /// Objective value as reported by the backend.
    pub objective: f64,
}

/// Ways a backend can fail to return an optimal solution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverFailure {
    #[error("problem is infeasible")]
    Infeasible,

    #[error("objective is unbounded")]
    Unbounded,

    #[error("{0}")]
    Backend(String),
}
