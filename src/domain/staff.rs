//! Staff roster entries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::day::DAYS_PER_WEEK;
use super::error::ValidationError;
use super::id::StaffId;

/// Per-staff bounds on the number of days worked in a week.
///
/// `WorkingDays::default()` is `{ min: 0, max: 7 }`, which places no
/// restriction on the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWorkingDays")]
pub struct WorkingDays {
    min: u8,
    max: u8,
}

impl WorkingDays {
    /// Unrestricted bounds.
    pub const UNLIMITED: Self = Self {
        min: 0,
        max: DAYS_PER_WEEK as u8,
    };

    /// Create validated bounds: `0 <= min <= max <= 7`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidValue`] naming `min_days` or
    /// `max_days` when a bound is out of range.
    pub fn try_new(min: i64, max: i64) -> Result<Self, ValidationError> {
        let week = DAYS_PER_WEEK as i64;
        if !(0..=week).contains(&min) {
            return Err(ValidationError::invalid_value(
                "min_days",
                format!("must be between 0 and {week}, got {min}"),
            ));
        }
        if !(0..=week).contains(&max) {
            return Err(ValidationError::invalid_value(
                "max_days",
                format!("must be between 0 and {week}, got {max}"),
            ));
        }
        if min > max {
            return Err(ValidationError::invalid_value(
                "min_days",
                format!("{min} exceeds max_days {max}"),
            ));
        }
        // Both values are within 0..=7 here.
        Ok(Self {
            min: min as u8,
            max: max as u8,
        })
    }

    #[must_use]
    pub const fn min(self) -> u8 {
        self.min
    }

    #[must_use]
    pub const fn max(self) -> u8 {
        self.max
    }

    /// True when the bounds add no constraint to the model.
    #[must_use]
    pub const fn is_unlimited(self) -> bool {
        self.min == 0 && self.max as usize >= DAYS_PER_WEEK
    }
}

impl Default for WorkingDays {
    fn default() -> Self {
        Self::UNLIMITED
    }
}

/// A staff member available for scheduling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStaffMember")]
pub struct StaffMember {
    id: StaffId,
    cost: Decimal,
    working_days: WorkingDays,
}

/// Unvalidated wire shape of [`WorkingDays`].
#[derive(Deserialize)]
struct RawWorkingDays {
    min: i64,
    max: i64,
}

impl TryFrom<RawWorkingDays> for WorkingDays {
    type Error = ValidationError;

    fn try_from(raw: RawWorkingDays) -> Result<Self, Self::Error> {
        Self::try_new(raw.min, raw.max)
    }
}

/// Unvalidated wire shape of [`StaffMember`].
#[derive(Deserialize)]
struct RawStaffMember {
    id: StaffId,
    cost: Decimal,
    #[serde(default)]
    working_days: WorkingDays,
}

impl TryFrom<RawStaffMember> for StaffMember {
    type Error = ValidationError;

    fn try_from(raw: RawStaffMember) -> Result<Self, Self::Error> {
        Ok(Self::try_new(raw.id, raw.cost)?.with_working_days(raw.working_days))
    }
}

impl StaffMember {
    /// Create a staff member with a validated daily cost.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidValue`] if `cost` is negative.
    pub fn try_new(id: impl Into<StaffId>, cost: Decimal) -> Result<Self, ValidationError> {
        validate_cost(cost)?;
        Ok(Self {
            id: id.into(),
            cost,
            working_days: WorkingDays::UNLIMITED,
        })
    }

    /// Attach working-day bounds.
    #[must_use]
    pub fn with_working_days(mut self, working_days: WorkingDays) -> Self {
        self.working_days = working_days;
        self
    }

    #[must_use]
    pub fn id(&self) -> &StaffId {
        &self.id
    }

    /// Daily cost of scheduling this staff member.
    #[must_use]
    pub const fn cost(&self) -> Decimal {
        self.cost
    }

    #[must_use]
    pub const fn working_days(&self) -> WorkingDays {
        self.working_days
    }

    pub(crate) fn set_cost(&mut self, cost: Decimal) -> Result<(), ValidationError> {
        validate_cost(cost)?;
        self.cost = cost;
        Ok(())
    }

    pub(crate) fn set_working_days(&mut self, working_days: WorkingDays) {
        self.working_days = working_days;
    }
}

fn validate_cost(cost: Decimal) -> Result<(), ValidationError> {
    if cost < Decimal::ZERO {
        return Err(ValidationError::invalid_value(
            "cost",
            format!("must be non-negative, got {cost}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rejects_negative_cost() {
        let err = StaffMember::try_new("Staff 1", dec!(-1)).unwrap_err();
        assert_eq!(err.field(), "cost");
    }

    #[test]
    fn accepts_zero_cost() {
        let staff = StaffMember::try_new("Volunteer", Decimal::ZERO).unwrap();
        assert_eq!(staff.cost(), Decimal::ZERO);
        assert!(staff.working_days().is_unlimited());
    }

    #[test]
    fn working_days_bounds_are_validated() {
        assert!(WorkingDays::try_new(3, 5).is_ok());
        assert!(WorkingDays::try_new(0, 7).unwrap().is_unlimited());

        let err = WorkingDays::try_new(6, 5).unwrap_err();
        assert_eq!(err.field(), "min_days");
        let err = WorkingDays::try_new(0, 8).unwrap_err();
        assert_eq!(err.field(), "max_days");
        let err = WorkingDays::try_new(-1, 3).unwrap_err();
        assert_eq!(err.field(), "min_days");
    }

    #[test]
    fn deserializing_validates_cost_and_bounds() {
        let err = serde_json::from_str::<StaffMember>(r#"{"id":"A","cost":"-50"}"#).unwrap_err();
        assert!(err.to_string().contains("cost"));

        let err = serde_json::from_str::<WorkingDays>(r#"{"min":6,"max":2}"#).unwrap_err();
        assert!(err.to_string().contains("min_days"));

        let staff: StaffMember = serde_json::from_str(r#"{"id":"A","cost":"12.5"}"#).unwrap();
        assert_eq!(staff.cost(), dec!(12.5));
        assert!(staff.working_days().is_unlimited());
    }
}
