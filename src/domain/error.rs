//! Validation errors for domain types and edit operations.
//!
//! A `ValidationError` always means the input was rejected and nothing was
//! changed: the live configuration stays at its prior version.
//!
//! # Examples
//!
//! ```
//! use rota::domain::error::ValidationError;
//! use rota::domain::Day;
//!
//! let result = "Funday".parse::<Day>();
//! assert!(matches!(result, Err(ValidationError::InvalidDay { .. })));
//! ```

use thiserror::Error;

use super::id::StaffId;

/// Errors raised when an edit or an initial configuration violates a
/// domain invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The referenced staff member is not in the roster.
    #[error("unknown staff member '{staff_id}'")]
    UnknownStaff {
        /// The identifier that was not found.
        staff_id: StaffId,
    },

    /// A numeric field is out of its allowed range.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable description of the violation.
        reason: String,
    },

    /// The day name is not one of Mon..Sun.
    #[error("invalid day '{day}'")]
    InvalidDay {
        /// The raw day string that was provided.
        day: String,
    },

    /// Read-only operations cannot be committed to the store.
    #[error("operation does not modify the configuration")]
    ReadOnlyOperation,

    /// Two roster entries share an identifier.
    #[error("duplicate staff member '{staff_id}'")]
    DuplicateStaff {
        /// The repeated identifier.
        staff_id: StaffId,
    },

    /// The roster must contain at least one staff member.
    #[error("roster cannot be empty")]
    EmptyRoster,
}

impl ValidationError {
    /// Shorthand for [`ValidationError::InvalidValue`].
    pub fn invalid_value(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the field the error refers to, for caller-facing reports.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::UnknownStaff { .. } | Self::DuplicateStaff { .. } => "staff_id",
            Self::InvalidValue { field, .. } => field,
            Self::InvalidDay { .. } => "day",
            Self::ReadOnlyOperation => "kind",
            Self::EmptyRoster => "staff",
        }
    }
}
