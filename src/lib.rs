//! Rota - minimum-cost weekly staff rostering with incremental re-optimisation.
//!
//! A week is described by a roster (staff with a daily cost and optional
//! working-day limits) and a per-day demand. Every configuration version is
//! turned into a 0/1 integer program, solved by a MILP backend, and the
//! resulting schedule is published under a last-committed-version-wins rule.
//!
//! # Architecture
//!
//! - [`domain`] - Configuration, demand, assignments and solve results
//! - [`port`] - Edit commands (inbound) and the [`port::outbound::solver::Solver`] trait
//! - [`application`] - Store, edit processor, model builder, solver adapter, coordinator
//! - [`adapter`] - HiGHS backend and the CLI driver
//! - [`infrastructure`] - Settings loading, logging and wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use rota::infrastructure::config::Settings;
//! use rota::infrastructure::factory::build_coordinator;
//! use rota::port::inbound::edit::EditCommand;
//!
//! # async fn run() -> rota::error::Result<()> {
//! let coordinator = build_coordinator(&Settings::default())?;
//! coordinator.solve_current().await.wait().await;
//!
//! let edit: EditCommand =
//!     serde_json::from_str(r#"{"kind":"adjust_day_demand","day":"Sat","delta":-1}"#)?;
//! coordinator.submit(edit).await?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
