//! Inbound edit commands.
//!
//! [`EditCommand`] is the wire shape produced by a driver (the
//! natural-language layer, the CLI, a test). It is deliberately loose: days
//! are strings and numbers are signed so that range violations are reported
//! as [`ValidationError`]s rather than lost in deserialization. Converting it
//! into an [`EditOperation`] is the only normalization step; nothing is
//! guessed.
//!
//! ```
//! use rota::port::inbound::edit::EditCommand;
//!
//! let cmd: EditCommand =
//!     serde_json::from_str(r#"{"kind":"adjust_day_demand","day":"Fri","delta":-1}"#).unwrap();
//! let op = cmd.into_operation().unwrap();
//! assert_eq!(op.kind(), "adjust_day_demand");
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Day, EditOperation, StaffId, ValidationError, WorkingDays};

/// A structured edit as received from a driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum EditCommand {
    SetStaffCost { staff_id: String, cost: Decimal },
    AdjustDayDemand { day: String, delta: i64 },
    SetDayDemand { day: String, value: i64 },
    SetStaffWorkingDays {
        staff_id: String,
        min_days: i64,
        max_days: i64,
    },
    QueryAssignment { day: String },
}

impl EditCommand {
    /// Validate field ranges and normalize into a typed operation.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the violated field.
    pub fn into_operation(self) -> Result<EditOperation, ValidationError> {
        EditOperation::try_from(self)
    }
}

impl TryFrom<EditCommand> for EditOperation {
    type Error = ValidationError;

    fn try_from(cmd: EditCommand) -> Result<Self, Self::Error> {
        let op = match cmd {
            EditCommand::SetStaffCost { staff_id, cost } => {
                if cost < Decimal::ZERO {
                    return Err(ValidationError::invalid_value(
                        "cost",
                        format!("must be non-negative, got {cost}"),
                    ));
                }
                Self::SetStaffCost {
                    staff_id: StaffId::new(staff_id),
                    cost,
                }
            }
            EditCommand::AdjustDayDemand { day, delta } => Self::AdjustDayDemand {
                day: day.parse()?,
                delta,
            },
            EditCommand::SetDayDemand { day, value } => {
                let day: Day = day.parse()?;
                let value = u32::try_from(value).map_err(|_| {
                    ValidationError::invalid_value(
                        "value",
                        format!("demand must be between 0 and {}, got {value}", u32::MAX),
                    )
                })?;
                Self::SetDayDemand { day, value }
            }
            EditCommand::SetStaffWorkingDays {
                staff_id,
                min_days,
                max_days,
            } => Self::SetStaffWorkingDays {
                staff_id: StaffId::new(staff_id),
                working_days: WorkingDays::try_new(min_days, max_days)?,
            },
            EditCommand::QueryAssignment { day } => Self::QueryAssignment { day: day.parse()? },
        };
        Ok(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn parse(json: &str) -> EditCommand {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn parses_each_kind() {
        let op = parse(r#"{"kind":"set_staff_cost","staff_id":"Staff 3","cost":90}"#)
            .into_operation()
            .unwrap();
        assert_eq!(
            op,
            EditOperation::SetStaffCost {
                staff_id: "Staff 3".into(),
                cost: dec!(90)
            }
        );

        let op = parse(r#"{"kind":"set_day_demand","day":"Friday","value":2}"#)
            .into_operation()
            .unwrap();
        assert_eq!(op, EditOperation::SetDayDemand { day: Day::Fri, value: 2 });

        let op = parse(r#"{"kind":"query_assignment","day":"wed"}"#)
            .into_operation()
            .unwrap();
        assert!(!op.is_mutating());
    }

    #[test]
    fn negative_cost_is_rejected() {
        let err = parse(r#"{"kind":"set_staff_cost","staff_id":"Staff 1","cost":-5}"#)
            .into_operation()
            .unwrap_err();
        assert_eq!(err.field(), "cost");
    }

    #[test]
    fn negative_demand_value_is_rejected() {
        let err = parse(r#"{"kind":"set_day_demand","day":"Mon","value":-1}"#)
            .into_operation()
            .unwrap_err();
        assert_eq!(err.field(), "value");
    }

    #[test]
    fn unknown_day_is_rejected() {
        let err = parse(r#"{"kind":"adjust_day_demand","day":"Caturday","delta":1}"#)
            .into_operation()
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDay { .. }));
    }

    #[test]
    fn structurally_invalid_commands_do_not_deserialize() {
        for raw in [
            r#"{"kind":"delete_staff","staff_id":"Staff 1"}"#,
            r#"{"kind":"set_day_demand","day":"Mon"}"#,
            r#"{"kind":"adjust_day_demand","day":"Mon","delta":"lots"}"#,
            r#"{"day":"Mon","value":1}"#,
        ] {
            assert!(serde_json::from_str::<EditCommand>(raw).is_err(), "{raw} accepted");
        }
    }

    #[test]
    fn working_day_bounds_are_checked() {
        let err = parse(r#"{"kind":"set_staff_working_days","staff_id":"A","min_days":5,"max_days":3}"#)
            .into_operation()
            .unwrap_err();
        assert_eq!(err.field(), "min_days");
    }
}
