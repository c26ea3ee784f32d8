//! Trait and boundary definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the seams between the scheduling core and the outside world.
//!
//! # Architecture
//!
//! ```text
//!   ┌──────────────┐      ┌─────────────────────────┐      ┌──────────────┐
//!   │ Edit driver  │─────▶│      Application        │─────▶│ MILP backend │
//!   │ (CLI, agent) │      │  store / coordinator    │      │   (HiGHS)    │
//!   └──────────────┘      └─────────────────────────┘      └──────────────┘
//!        inbound                                               outbound
//! ```
//!
//! # Available Ports
//!
//! - [`inbound::edit::EditCommand`] - Structured edit commands from drivers
//! - [`outbound::solver::Solver`] - MILP optimization backend

pub mod inbound;
pub mod outbound;
