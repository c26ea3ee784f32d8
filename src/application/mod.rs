//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement the scheduling use cases.
//!
//! - [`store`]: Versioned configuration store
//! - [`edit`]: Edit validation and application
//! - [`model`]: Configuration-to-MILP translation
//! - [`solve`]: Solver adapter and result classification
//! - [`coordinator`]: Re-optimisation protocol and publication

pub mod coordinator;
pub mod edit;
pub mod model;
pub mod solve;
pub mod store;

pub use coordinator::{
    CommitReceipt, Coordinator, CoordinatorOptions, Disposition, EditOutcome, Snapshot,
};
pub use edit::EditProcessor;
pub use model::{ModelBuilder, ModelOptions, ScheduleModel};
pub use solve::SolverAdapter;
pub use store::ConfigurationStore;
