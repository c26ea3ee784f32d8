//! Inbound (driving) ports consumed by inbound adapters.
//!
//! Inbound ports expose application capabilities to external drivers such as
//! the command-line interface or a conversational agent.
//!
//! # Modules
//!
//! - [`edit`]: Structured edit commands and their normalization

pub mod edit;
