//! `[[staff]]` and `[demand]` sections: the initial staffing problem.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{
    Configuration, Day, DemandVector, StaffMember, ValidationError, WorkingDays, DAYS_PER_WEEK,
};
use crate::error::ConfigError;

/// One `[[staff]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StaffEntry {
    pub id: String,
    pub cost: Decimal,
    #[serde(default)]
    pub min_days: Option<i64>,
    #[serde(default)]
    pub max_days: Option<i64>,
}

/// The `[demand]` table. All seven days are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DemandEntry {
    pub mon: i64,
    pub tue: i64,
    pub wed: i64,
    pub thu: i64,
    pub fri: i64,
    pub sat: i64,
    pub sun: i64,
}

const DEMAND_FIELDS: [&str; DAYS_PER_WEEK] = [
    "demand.mon",
    "demand.tue",
    "demand.wed",
    "demand.thu",
    "demand.fri",
    "demand.sat",
    "demand.sun",
];

impl DemandEntry {
    fn values(&self) -> [i64; DAYS_PER_WEEK] {
        [
            self.mon, self.tue, self.wed, self.thu, self.fri, self.sat, self.sun,
        ]
    }

    /// Convert into a demand vector, rejecting negative or oversized values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending day.
    pub fn to_demand(&self) -> Result<DemandVector, ConfigError> {
        let mut demand = DemandVector::default();
        for (day, raw) in Day::ALL.into_iter().zip(self.values()) {
            let value = u32::try_from(raw).map_err(|_| ConfigError::InvalidValue {
                field: DEMAND_FIELDS[day.index()],
                reason: format!("must be a non-negative staff count, got {raw}"),
            })?;
            demand.set(day, value);
        }
        Ok(demand)
    }
}

impl StaffEntry {
    fn to_member(&self) -> Result<StaffMember, ValidationError> {
        let limits = WorkingDays::try_new(
            self.min_days.unwrap_or(0),
            self.max_days.unwrap_or(DAYS_PER_WEEK as i64),
        )?;
        Ok(StaffMember::try_new(self.id.as_str(), self.cost)?.with_working_days(limits))
    }
}

/// Staff used when the settings file has no `[[staff]]` entries: seven staff
/// at cost 100, each working between three and five days.
#[must_use]
pub fn seed_staff() -> Vec<StaffEntry> {
    (1..=7)
        .map(|i| StaffEntry {
            id: format!("Staff {i}"),
            cost: Decimal::from(100),
            min_days: Some(3),
            max_days: Some(5),
        })
        .collect()
}

/// Demand used when the settings file has no `[demand]` table.
#[must_use]
pub const fn seed_demand() -> DemandEntry {
    DemandEntry {
        mon: 3,
        tue: 3,
        wed: 3,
        thu: 3,
        fri: 3,
        sat: 5,
        sun: 5,
    }
}

/// Build the initial configuration from roster and demand sections.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for any entry that violates a domain
/// invariant (negative cost, bad working-day bounds, duplicate ids, ...).
pub fn build_configuration(
    staff: &[StaffEntry],
    demand: &DemandEntry,
) -> Result<Configuration, ConfigError> {
    let invalid = |err: ValidationError| ConfigError::InvalidValue {
        field: err.field(),
        reason: err.to_string(),
    };

    let roster = staff
        .iter()
        .map(StaffEntry::to_member)
        .collect::<Result<Vec<_>, _>>()
        .map_err(invalid)?;

    Configuration::try_new(roster, demand.to_demand()?).map_err(invalid)
}
