//! The versioned staffing problem: roster plus weekly demand.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::demand::DemandVector;
use super::error::ValidationError;
use super::id::StaffId;
use super::staff::StaffMember;

/// Version number of the first committed configuration.
pub const INITIAL_VERSION: u64 = 1;

/// A snapshot of the staffing problem at one version.
///
/// The roster is ordered and keyed by [`StaffId`]; its order is the variable
/// order used by the model builder and the row order of every assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConfiguration")]
pub struct Configuration {
    version: u64,
    roster: Vec<StaffMember>,
    demand: DemandVector,
}

/// Unvalidated wire shape of [`Configuration`].
#[derive(Deserialize)]
struct RawConfiguration {
    version: u64,
    roster: Vec<StaffMember>,
    demand: DemandVector,
}

impl TryFrom<RawConfiguration> for Configuration {
    type Error = ValidationError;

    fn try_from(raw: RawConfiguration) -> Result<Self, Self::Error> {
        if raw.version < INITIAL_VERSION {
            return Err(ValidationError::invalid_value(
                "version",
                format!("must be at least {INITIAL_VERSION}, got {}", raw.version),
            ));
        }
        let mut config = Self::try_new(raw.roster, raw.demand)?;
        config.version = raw.version;
        Ok(config)
    }
}

impl Configuration {
    /// Create the initial configuration (version [`INITIAL_VERSION`]).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyRoster`] for an empty roster and
    /// [`ValidationError::DuplicateStaff`] if two entries share an id.
    pub fn try_new(roster: Vec<StaffMember>, demand: DemandVector) -> Result<Self, ValidationError> {
        if roster.is_empty() {
            return Err(ValidationError::EmptyRoster);
        }
        let mut seen = HashSet::with_capacity(roster.len());
        for staff in &roster {
            if !seen.insert(staff.id()) {
                return Err(ValidationError::DuplicateStaff {
                    staff_id: staff.id().clone(),
                });
            }
        }
        Ok(Self {
            version: INITIAL_VERSION,
            roster,
            demand,
        })
    }

    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub fn roster(&self) -> &[StaffMember] {
        &self.roster
    }

    #[must_use]
    pub const fn demand(&self) -> &DemandVector {
        &self.demand
    }

    /// Look up a staff member by id.
    #[must_use]
    pub fn staff(&self, id: &StaffId) -> Option<&StaffMember> {
        self.roster.iter().find(|s| s.id() == id)
    }

    /// Position of a staff member in roster order.
    #[must_use]
    pub fn position(&self, id: &StaffId) -> Option<usize> {
        self.roster.iter().position(|s| s.id() == id)
    }

    pub(crate) fn staff_mut(&mut self, id: &StaffId) -> Result<&mut StaffMember, ValidationError> {
        self.roster
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or_else(|| ValidationError::UnknownStaff {
                staff_id: id.clone(),
            })
    }

    pub(crate) fn demand_mut(&mut self) -> &mut DemandVector {
        &mut self.demand
    }

    /// Clone this configuration as the draft of the next version.
    pub(crate) fn next_draft(&self) -> Self {
        let mut draft = self.clone();
        draft.version = self.version + 1;
        draft
    }
}
