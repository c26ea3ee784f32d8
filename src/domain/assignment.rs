//! Dense staff-by-day schedules produced by the solver.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::configuration::Configuration;
use super::day::{Day, DAYS_PER_WEEK};
use super::id::StaffId;

/// Which staff member works which day.
///
/// Always covers the full roster and the full week, in roster order. Rows are
/// never omitted, even for staff with no shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    rows: Vec<AssignmentRow>,
}

/// One roster entry's week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRow {
    pub staff_id: StaffId,
    pub days: [bool; DAYS_PER_WEEK],
}

impl AssignmentRow {
    /// Number of days this staff member is scheduled.
    #[must_use]
    pub fn days_worked(&self) -> u32 {
        self.days.iter().filter(|worked| **worked).count() as u32
    }

    #[must_use]
    pub const fn works(&self, day: Day) -> bool {
        self.days[day.index()]
    }
}

impl Assignment {
    /// Build an assignment from rows in roster order.
    #[must_use]
    pub fn from_rows(rows: Vec<AssignmentRow>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[AssignmentRow] {
        &self.rows
    }

    /// Whether `staff` is scheduled on `day`. Unknown staff work no days.
    #[must_use]
    pub fn is_scheduled(&self, staff: &StaffId, day: Day) -> bool {
        self.row(staff).is_some_and(|row| row.works(day))
    }

    /// Staff scheduled on `day`, in roster order.
    #[must_use]
    pub fn staff_on(&self, day: Day) -> Vec<StaffId> {
        self.rows
            .iter()
            .filter(|row| row.works(day))
            .map(|row| row.staff_id.clone())
            .collect()
    }

    /// Number of staff scheduled on `day`.
    #[must_use]
    pub fn coverage(&self, day: Day) -> u32 {
        self.rows.iter().filter(|row| row.works(day)).count() as u32
    }

    /// Days worked by `staff`, or zero if they are not in the assignment.
    #[must_use]
    pub fn days_worked(&self, staff: &StaffId) -> u32 {
        self.row(staff).map_or(0, AssignmentRow::days_worked)
    }

    /// Total staff-days scheduled over the week.
    #[must_use]
    pub fn total_shifts(&self) -> u32 {
        self.rows.iter().map(AssignmentRow::days_worked).sum()
    }

    /// Exact cost of this assignment under `config`'s roster costs.
    ///
    /// Rows whose staff member is missing from `config` contribute nothing.
    #[must_use]
    pub fn cost_under(&self, config: &Configuration) -> Decimal {
        self.rows
            .iter()
            .filter_map(|row| {
                config
                    .staff(&row.staff_id)
                    .map(|staff| staff.cost() * Decimal::from(row.days_worked()))
            })
            .sum()
    }

    /// True if every day's coverage meets `config`'s demand.
    #[must_use]
    pub fn covers(&self, config: &Configuration) -> bool {
        config
            .demand()
            .iter()
            .all(|(day, required)| self.coverage(day) >= required)
    }

    fn row(&self, staff: &StaffId) -> Option<&AssignmentRow> {
        self.rows.iter().find(|row| &row.staff_id == staff)
    }
}
