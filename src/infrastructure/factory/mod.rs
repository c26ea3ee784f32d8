//! Factory modules for building infrastructure components.
//!
//! Provides factory functions that construct fully-configured components
//! from application settings.

pub mod solver;

pub use solver::{build_coordinator, build_solver};
