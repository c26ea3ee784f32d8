//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Staff member identifier - newtype for type safety.
///
/// Identifiers are stable across edits; the roster is keyed by them. The inner
/// String is private so that all construction goes through [`StaffId::new`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffId(String);

impl StaffId {
    /// Create a new `StaffId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the staff ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StaffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for StaffId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for StaffId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for StaffId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
