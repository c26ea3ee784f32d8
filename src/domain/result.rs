//! Solve outcomes and their per-version lifecycle.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::assignment::Assignment;

/// Outcome of solving one configuration version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SolveResult {
    /// A provably cost-minimal assignment.
    Optimal {
        assignment: Assignment,
        /// Sum of `cost × days worked` over the roster.
        total_cost: Decimal,
    },
    /// No assignment satisfies the constraints.
    Infeasible,
    /// The solver could not produce an answer.
    SolverError { reason: SolverErrorReason },
}

impl SolveResult {
    #[must_use]
    pub const fn is_optimal(&self) -> bool {
        matches!(self, Self::Optimal { .. })
    }

    /// True for results that end in `Failed` rather than `Published`.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::SolverError { .. })
    }

    #[must_use]
    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            Self::Optimal { assignment, .. } => Some(assignment),
            _ => None,
        }
    }

    #[must_use]
    pub fn total_cost(&self) -> Option<Decimal> {
        match self {
            Self::Optimal { total_cost, .. } => Some(*total_cost),
            _ => None,
        }
    }

    /// Short outcome label for logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Optimal { .. } => "optimal",
            Self::Infeasible => "infeasible",
            Self::SolverError { .. } => "solver_error",
        }
    }
}

/// Why a solve failed. Backend-neutral by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SolverErrorReason {
    /// The solve exceeded the configured time limit.
    Timeout { limit_ms: u64 },
    /// The objective is unbounded below.
    Unbounded,
    /// The backend reported an internal failure.
    Internal { message: String },
    /// The solve task panicked or was cancelled.
    Aborted { message: String },
}

impl SolverErrorReason {
    #[must_use]
    pub fn timeout(limit: Duration) -> Self {
        Self::Timeout {
            limit_ms: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl fmt::Display for SolverErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout { limit_ms } => write!(f, "timeout after {limit_ms}ms"),
            Self::Unbounded => f.write_str("objective is unbounded"),
            Self::Internal { message } => write!(f, "solver failure: {message}"),
            Self::Aborted { message } => write!(f, "solve aborted: {message}"),
        }
    }
}

/// A solve result stamped with the configuration version it was solved for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionedResult {
    pub version: u64,
    pub result: SolveResult,
    pub solved_at: DateTime<Utc>,
    pub elapsed_ms: u64,
}

impl VersionedResult {
    #[must_use]
    pub fn new(version: u64, result: SolveResult, elapsed: Duration) -> Self {
        Self {
            version,
            result,
            solved_at: Utc::now(),
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

/// Lifecycle of one configuration version.
///
/// `Pending` precedes the solve, `Solving` covers the in-flight call, and
/// `Published` / `Failed` are terminal. `Published` holds optimal or
/// infeasible outcomes; `Failed` holds solver errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "version", rename_all = "snake_case")]
pub enum Phase {
    Pending(u64),
    Solving(u64),
    Published(u64),
    Failed(u64),
}

impl Phase {
    #[must_use]
    pub const fn version(self) -> u64 {
        match self {
            Self::Pending(v) | Self::Solving(v) | Self::Published(v) | Self::Failed(v) => v,
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Published(_) | Self::Failed(_))
    }

    /// Terminal phase for `result` at `version`.
    #[must_use]
    pub const fn terminal_for(version: u64, result: &SolveResult) -> Self {
        if result.is_error() {
            Self::Failed(version)
        } else {
            Self::Published(version)
        }
    }
}
