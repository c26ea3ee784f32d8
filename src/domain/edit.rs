//! Typed edit operations accepted by the configuration store.

use rust_decimal::Decimal;
use serde::Serialize;

use super::day::Day;
use super::id::StaffId;
use super::staff::WorkingDays;

/// A validated, normalized edit.
///
/// Values here already satisfy their range checks; only checks that need the
/// live configuration (such as staff existence) remain for apply time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EditOperation {
    SetStaffCost { staff_id: StaffId, cost: Decimal },
    AdjustDayDemand { day: Day, delta: i64 },
    SetDayDemand { day: Day, value: u32 },
    SetStaffWorkingDays { staff_id: StaffId, working_days: WorkingDays },
    QueryAssignment { day: Day },
}

impl EditOperation {
    /// True for operations that change the configuration.
    #[must_use]
    pub const fn is_mutating(&self) -> bool {
        !matches!(self, Self::QueryAssignment { .. })
    }

    /// Stable kind name used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SetStaffCost { .. } => "set_staff_cost",
            Self::AdjustDayDemand { .. } => "adjust_day_demand",
            Self::SetDayDemand { .. } => "set_day_demand",
            Self::SetStaffWorkingDays { .. } => "set_staff_working_days",
            Self::QueryAssignment { .. } => "query_assignment",
        }
    }
}
