//! Infrastructure configuration modules.

pub mod logging;
pub mod roster;
pub mod settings;
pub mod solver;

pub use settings::Settings;
