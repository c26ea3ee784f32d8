//! Solver-agnostic domain types for weekly staff scheduling.
//!
//! - [`Day`] / [`DemandVector`] - the fixed week and its staffing demand
//! - [`StaffMember`] / [`StaffId`] / [`WorkingDays`] - the roster
//! - [`Configuration`] - the versioned problem aggregate
//! - [`Assignment`] / [`SolveResult`] / [`Phase`] - solver output and lifecycle
//! - [`EditOperation`] - validated mutations
//! - [`constraint`] - linear constraint primitives

pub mod assignment;
pub mod configuration;
pub mod constraint;
pub mod day;
pub mod demand;
pub mod edit;
pub mod error;
pub mod id;
pub mod result;
pub mod staff;

pub use assignment::{Assignment, AssignmentRow};
pub use configuration::{Configuration, INITIAL_VERSION};
pub use constraint::{Constraint, ConstraintSense, VariableBounds};
pub use day::{Day, DAYS_PER_WEEK};
pub use demand::DemandVector;
pub use edit::EditOperation;
pub use error::ValidationError;
pub use id::StaffId;
pub use result::{Phase, SolveResult, SolverErrorReason, VersionedResult};
pub use staff::{StaffMember, WorkingDays};
