//! Days of the planning week.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Number of days in the planning horizon.
pub const DAYS_PER_WEEK: usize = 7;

/// A day of the fixed Monday-first planning week.
///
/// Days are indices into demand and assignment grids, not entities of their
/// own. `Day::ALL` is the canonical ordering used everywhere a week is laid
/// out (model variables, tables, serialized vectors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    /// All days in week order.
    pub const ALL: [Day; DAYS_PER_WEEK] = [
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
        Day::Sun,
    ];

    /// Zero-based position of this day in [`Day::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short English name, e.g. `"Fri"`.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Mon => "Mon",
            Self::Tue => "Tue",
            Self::Wed => "Wed",
            Self::Thu => "Thu",
            Self::Fri => "Fri",
            Self::Sat => "Sat",
            Self::Sun => "Sun",
        }
    }

    /// Full English name, e.g. `"Friday"`.
    #[must_use]
    pub const fn full_name(self) -> &'static str {
        match self {
            Self::Mon => "Monday",
            Self::Tue => "Tuesday",
            Self::Wed => "Wednesday",
            Self::Thu => "Thursday",
            Self::Fri => "Friday",
            Self::Sat => "Saturday",
            Self::Sun => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Day {
    type Err = ValidationError;

    /// Accepts the short (`"Fri"`) or full (`"Friday"`) name, ignoring case
    /// and surrounding whitespace. Prefixes such as `"Frid"` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Day::ALL
            .into_iter()
            .find(|day| {
                needle.eq_ignore_ascii_case(day.short_name())
                    || needle.eq_ignore_ascii_case(day.full_name())
            })
            .ok_or_else(|| ValidationError::InvalidDay { day: s.to_string() })
    }
}
