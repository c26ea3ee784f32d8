//! Application settings loading and validation.
//!
//! Provides the main [`Settings`] struct that aggregates all configuration:
//! logging, solver backend, model options and the initial staffing problem.
//!
//! # Example
//!
//! ```no_run
//! use rota::infrastructure::config::settings::Settings;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = Settings::load("rota.toml")?;
//!     settings.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::logging::LoggingConfig;
use super::roster::{build_configuration, seed_demand, seed_staff, DemandEntry, StaffEntry};
use super::solver::SolverConfig;
use crate::application::coordinator::CoordinatorOptions;
use crate::application::model::ModelOptions;
use crate::domain::{Configuration, DAYS_PER_WEEK};
use crate::error::{ConfigError, Result};

/// Main application settings.
///
/// Every section is optional. Missing `[[staff]]` or `[demand]` sections fall
/// back to the built-in seed problem.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Solver backend and limits.
    #[serde(default)]
    pub solver: SolverConfig,

    /// Model-level options such as the uniform weekly cap.
    #[serde(default)]
    pub model: ModelOptions,

    /// Initial roster.
    #[serde(default)]
    pub staff: Vec<StaffEntry>,

    /// Initial weekly demand.
    #[serde(default)]
    pub demand: Option<DemandEntry>,
}

impl Settings {
    /// Parse settings from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or fails
    /// validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Initialize global logging from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Initial configuration described by these settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the roster or demand is invalid.
    pub fn configuration(&self) -> Result<Configuration> {
        let seeded;
        let staff = if self.staff.is_empty() {
            seeded = seed_staff();
            &seeded
        } else {
            &self.staff
        };
        let demand = self.demand.unwrap_or_else(seed_demand);
        Ok(build_configuration(staff, &demand)?)
    }

    /// Coordinator options derived from the `[solver]` and `[model]` sections.
    #[must_use]
    pub fn coordinator_options(&self) -> CoordinatorOptions {
        CoordinatorOptions {
            model: self.model,
            time_limit: self.solver.time_limit(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "logging.level",
            }
            .into());
        }
        if !self.logging.is_known_format() {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("expected \"pretty\" or \"json\", got {:?}", self.logging.format),
            }
            .into());
        }
        if self.solver.time_limit_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "solver.time_limit_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if let Some(cap) = self.model.max_days_per_week {
            if usize::from(cap) > DAYS_PER_WEEK {
                return Err(ConfigError::InvalidValue {
                    field: "model.max_days_per_week",
                    reason: format!("must be at most {DAYS_PER_WEEK}, got {cap}"),
                }
                .into());
            }
        }
        self.configuration()?;
        Ok(())
    }
}
