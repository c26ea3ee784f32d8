//! Day-by-day staffing demand.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::day::{Day, DAYS_PER_WEEK};

/// Required staff count for each day of the week.
///
/// Every day always has an explicit value; there is no "unset" day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DemandVector([u32; DAYS_PER_WEEK]);

impl DemandVector {
    /// Create a demand vector from Monday-first values.
    #[must_use]
    pub const fn new(values: [u32; DAYS_PER_WEEK]) -> Self {
        Self(values)
    }

    /// Demand for a single day.
    #[must_use]
    pub const fn get(&self, day: Day) -> u32 {
        self.0[day.index()]
    }

    /// Overwrite the demand for a day.
    pub fn set(&mut self, day: Day, value: u32) {
        self.0[day.index()] = value;
    }

    /// Shift the demand for a day by `delta`, clamping at zero.
    ///
    /// Returns the new value. An overshoot below zero is not an error.
    pub fn adjust(&mut self, day: Day, delta: i64) -> u32 {
        let current = i64::from(self.get(day));
        let next = current
            .saturating_add(delta)
            .clamp(0, i64::from(u32::MAX));
        // Clamped into u32 range above.
        let next = next as u32;
        self.set(day, next);
        next
    }

    /// Iterate `(day, demand)` pairs in week order.
    pub fn iter(&self) -> impl Iterator<Item = (Day, u32)> + '_ {
        Day::ALL.into_iter().map(move |day| (day, self.get(day)))
    }

    /// Total staff-days required over the week.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.iter().map(|v| u64::from(*v)).sum()
    }

    #[must_use]
    pub const fn as_array(&self) -> &[u32; DAYS_PER_WEEK] {
        &self.0
    }
}

impl Index<Day> for DemandVector {
    type Output = u32;

    fn index(&self, day: Day) -> &Self::Output {
        &self.0[day.index()]
    }
}

impl From<[u32; DAYS_PER_WEEK]> for DemandVector {
    fn from(values: [u32; DAYS_PER_WEEK]) -> Self {
        Self::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjust_clamps_at_zero() {
        let mut demand = DemandVector::new([1, 1, 1, 1, 2, 0, 0]);
        assert_eq!(demand.adjust(Day::Sat, -5), 0);
        assert_eq!(demand.adjust(Day::Fri, -1), 1);
        assert_eq!(demand.adjust(Day::Mon, 3), 4);
        assert_eq!(demand.as_array(), &[4, 1, 1, 1, 1, 0, 0]);
    }

    #[test]
    fn adjust_saturates_on_extreme_deltas() {
        let mut demand = DemandVector::new([u32::MAX, 0, 0, 0, 0, 0, 0]);
        assert_eq!(demand.adjust(Day::Mon, i64::MAX), u32::MAX);
        assert_eq!(demand.adjust(Day::Tue, i64::MIN), 0);
    }

    #[test]
    fn iter_follows_week_order() {
        let demand = DemandVector::new([3, 3, 3, 3, 3, 5, 5]);
        let days: Vec<_> = demand.iter().map(|(d, _)| d).collect();
        assert_eq!(days, Day::ALL.to_vec());
        assert_eq!(demand.total(), 25);
        assert_eq!(demand[Day::Sat], 5);
    }
}
