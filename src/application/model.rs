//! Translate a configuration into a staffing MILP.
//!
//! # Formulation
//!
//! One binary variable `x[s,d]` per staff member `s` and day `d`, laid out
//! staff-major (`s * 7 + d`) in roster order:
//!
//! ```text
//! minimize    sum_{s,d} cost(s) * x[s,d]
//! subject to  sum_s x[s,d] >= demand(d)          for every day d
//!             sum_d x[s,d] >= min_days(s)        when min_days(s) > 0
//!             sum_d x[s,d] <= max_days(s)        when max_days(s) < 7
//!             sum_d x[s,d] <= max_days_per_week  when a uniform cap is set
//!             x[s,d] in {0, 1}
//! ```
//!
//! Coverage is a lower bound: over-coverage is allowed and only discouraged
//! through the objective.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{Configuration, Constraint, Day, StaffId, DAYS_PER_WEEK};
use crate::port::outbound::solver::IlpProblem;

/// Model-level parameters supplied alongside the configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ModelOptions {
    /// Uniform cap on days worked by every staff member.
    #[serde(default)]
    pub max_days_per_week: Option<u8>,
}

/// A built model with the layout needed to decode its solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleModel {
    version: u64,
    staff: Vec<(StaffId, Decimal)>,
    problem: IlpProblem,
}

impl ScheduleModel {
    /// Configuration version this model was built from.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Roster ids and daily costs, in variable order.
    #[must_use]
    pub fn staff(&self) -> &[(StaffId, Decimal)] {
        &self.staff
    }

    #[must_use]
    pub const fn problem(&self) -> &IlpProblem {
        &self.problem
    }

    /// Variable index of `x[staff, day]`.
    #[must_use]
    pub const fn var_index(staff: usize, day: Day) -> usize {
        staff * DAYS_PER_WEEK + day.index()
    }
}

/// Deterministic configuration-to-model translation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelBuilder {
    options: ModelOptions,
}

impl ModelBuilder {
    #[must_use]
    pub const fn new(options: ModelOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> ModelOptions {
        self.options
    }

    /// Build the model for `config`.
    #[must_use]
    pub fn build(&self, config: &Configuration) -> ScheduleModel {
        let roster = config.roster();
        let mut problem = IlpProblem::binary(
            format!("schedule-v{}", config.version()),
            roster.len() * DAYS_PER_WEEK,
        );

        for (s, staff) in roster.iter().enumerate() {
            for day in Day::ALL {
                problem.objective[ScheduleModel::var_index(s, day)] = staff.cost();
            }
        }

        for (day, required) in config.demand().iter() {
            let vars = (0..roster.len()).map(|s| ScheduleModel::var_index(s, day));
            problem.constraints.push(Constraint::geq(
                format!("coverage[{day}]"),
                Constraint::unit_terms(vars),
                Decimal::from(required),
            ));
        }

        let week = |s: usize| Constraint::unit_terms(Day::ALL.map(|d| ScheduleModel::var_index(s, d)));

        for (s, staff) in roster.iter().enumerate() {
            let limits = staff.working_days();
            if limits.min() > 0 {
                problem.constraints.push(Constraint::geq(
                    format!("min_days[{}]", staff.id()),
                    week(s),
                    Decimal::from(limits.min()),
                ));
            }
        }
        for (s, staff) in roster.iter().enumerate() {
            let limits = staff.working_days();
            if usize::from(limits.max()) < DAYS_PER_WEEK {
                problem.constraints.push(Constraint::leq(
                    format!("max_days[{}]", staff.id()),
                    week(s),
                    Decimal::from(limits.max()),
                ));
            }
        }
        if let Some(cap) = self.options.max_days_per_week {
            for (s, staff) in roster.iter().enumerate() {
                problem.constraints.push(Constraint::leq(
                    format!("weekly_cap[{}]", staff.id()),
                    week(s),
                    Decimal::from(cap),
                ));
            }
        }

        ScheduleModel {
            version: config.version(),
            staff: roster
                .iter()
                .map(|staff| (staff.id().clone(), staff.cost()))
                .collect(),
            problem,
        }
    }
}
