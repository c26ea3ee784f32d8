//! Edit processing: apply typed operations to a configuration draft.

use tracing::debug;

use crate::domain::{Configuration, EditOperation, ValidationError};
use crate::port::inbound::edit::EditCommand;

/// Validates and applies edits, producing the next configuration version.
///
/// The processor never touches shared state; the store decides whether the
/// produced draft is committed.
#[derive(Debug, Default, Clone, Copy)]
pub struct EditProcessor;

impl EditProcessor {
    /// Normalize an inbound command.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for out-of-range values or unknown days.
    pub fn parse(command: EditCommand) -> Result<EditOperation, ValidationError> {
        command.into_operation()
    }

    /// Apply `op` to a copy of `current`, returning version `current + 1`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownStaff`] for ids not in the roster,
    /// [`ValidationError::InvalidValue`] for negative costs, and
    /// [`ValidationError::ReadOnlyOperation`] for queries. `current` is never
    /// modified.
    pub fn apply(
        current: &Configuration,
        op: &EditOperation,
    ) -> Result<Configuration, ValidationError> {
        let mut draft = current.next_draft();

        match op {
            EditOperation::SetStaffCost { staff_id, cost } => {
                draft.staff_mut(staff_id)?.set_cost(*cost)?;
            }
            EditOperation::AdjustDayDemand { day, delta } => {
                let before = draft.demand().get(*day);
                let after = draft.demand_mut().adjust(*day, *delta);
                if i64::from(before).saturating_add(*delta) < 0 {
                    debug!(day = %day, delta, before, after, "demand adjustment clamped at zero");
                }
            }
            EditOperation::SetDayDemand { day, value } => {
                draft.demand_mut().set(*day, *value);
            }
            EditOperation::SetStaffWorkingDays {
                staff_id,
                working_days,
            } => {
                draft.staff_mut(staff_id)?.set_working_days(*working_days);
            }
            EditOperation::QueryAssignment { .. } => {
                return Err(ValidationError::ReadOnlyOperation);
            }
        }

        Ok(draft)
    }
}
