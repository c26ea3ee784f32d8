//! Solver backend configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::application::coordinator::DEFAULT_TIME_LIMIT;

/// Supported MILP backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverBackend {
    /// HiGHS via good_lp.
    #[default]
    Highs,
}

const fn default_time_limit_secs() -> u64 {
    DEFAULT_TIME_LIMIT.as_secs()
}

/// `[solver]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SolverConfig {
    #[serde(default)]
    pub backend: SolverBackend,

    /// Wall-clock limit per solve; exceeded solves fail with a timeout.
    #[serde(default = "default_time_limit_secs")]
    pub time_limit_secs: u64,
}

impl SolverConfig {
    #[must_use]
    pub const fn time_limit(&self) -> Duration {
        Duration::from_secs(self.time_limit_secs)
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            backend: SolverBackend::default(),
            time_limit_secs: default_time_limit_secs(),
        }
    }
}
